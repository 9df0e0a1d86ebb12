//! Equal-width histogram binning

use serde::{Deserialize, Serialize};

/// One histogram bin. Every bin is `[start, end)` except the last, which
/// also holds `end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl Bin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub bins: Vec<Bin>,
    /// Number of binned values
    pub total: usize,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width bins spanning `[min, max]`.
    ///
    /// When every value is the same there is one bin of width 1 centered on
    /// it. No values, or zero bins, give an empty histogram. Non-finite
    /// values are skipped.
    pub fn from_values(values: &[f64], bins: usize) -> Self {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() || bins == 0 {
            return Self::default();
        }

        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        if min == max {
            return Self {
                bins: vec![Bin {
                    start: min - 0.5,
                    end: min + 0.5,
                    count: finite.len(),
                }],
                total: finite.len(),
            };
        }

        let width = (max - min) / bins as f64;
        let mut counts = vec![0usize; bins];
        for value in &finite {
            let index = (((value - min) / width).floor() as usize).min(bins - 1);
            counts[index] += 1;
        }

        Self {
            bins: counts
                .into_iter()
                .enumerate()
                .map(|(i, count)| Bin {
                    start: min + width * i as f64,
                    end: if i + 1 == bins { max } else { min + width * (i + 1) as f64 },
                    count,
                })
                .collect(),
            total: finite.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Per-bin share of the total, in percent
    pub fn percent(&self) -> Vec<f64> {
        if self.total == 0 {
            return vec![0.0; self.bins.len()];
        }
        self.bins
            .iter()
            .map(|bin| bin.count as f64 * 100.0 / self.total as f64)
            .collect()
    }

    /// Lowest bin start and highest bin end
    pub fn span(&self) -> Option<(f64, f64)> {
        Some((self.bins.first()?.start, self.bins.last()?.end))
    }
}

/// Arithmetic mean, or `None` without values
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use olympics_common::test_utils::assert_approx_eq;
    use proptest::prelude::*;

    #[test]
    fn test_last_bin_is_closed() {
        let hist = Histogram::from_values(&[0.0, 5.0, 10.0], 2);
        assert_eq!(hist.bins.len(), 2);
        assert_eq!(hist.bins[0].count, 1);
        assert_eq!(hist.bins[1].count, 2);
        assert_eq!(hist.span(), Some((0.0, 10.0)));
    }

    #[test]
    fn test_single_value_gets_unit_bin() {
        let hist = Histogram::from_values(&[26.0, 26.0], 20);
        assert_eq!(hist.bins.len(), 1);
        assert_eq!(hist.bins[0].start, 25.5);
        assert_eq!(hist.bins[0].end, 26.5);
        assert_eq!(hist.bins[0].count, 2);
        assert_eq!(hist.bins[0].center(), 26.0);
    }

    #[test]
    fn test_no_values_no_bins() {
        let hist = Histogram::from_values(&[], 20);
        assert!(hist.is_empty());
        assert_eq!(hist.total, 0);
        assert!(hist.percent().is_empty());
        assert_eq!(hist.span(), None);
    }

    #[test]
    fn test_percent() {
        let hist = Histogram::from_values(&[1.0, 1.5, 2.0, 4.0], 3);
        let percent = hist.percent();
        assert_approx_eq(percent.iter().sum(), 100.0, 1e-9);
        assert_approx_eq(percent[0], 75.0, 1e-9);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_approx_eq(mean(&[29.0, 29.0, 24.0]).unwrap(), 27.333, 1e-3);
    }

    proptest! {
        #[test]
        fn prop_every_value_lands_in_one_bin(
            values in prop::collection::vec(0.0f64..120.0, 1..200),
            bins in 1usize..30,
        ) {
            let hist = Histogram::from_values(&values, bins);
            let counted: usize = hist.bins.iter().map(|b| b.count).sum();
            prop_assert_eq!(counted, values.len());
            prop_assert_eq!(hist.total, values.len());
            prop_assert!(hist.bins.len() == bins || hist.bins.len() == 1);
        }

        #[test]
        fn prop_bins_are_contiguous(
            values in prop::collection::vec(-50.0f64..50.0, 2..100),
            bins in 1usize..25,
        ) {
            let hist = Histogram::from_values(&values, bins);
            for pair in hist.bins.windows(2) {
                prop_assert!((pair[0].end - pair[1].start).abs() < 1e-9);
            }
        }
    }
}
