//! Chart primitives. Each one draws a single figure panel.

mod bar;
mod histogram;
mod line;
mod pie;

pub use bar::{BarChart, BarMode, BarSeries, Orientation};
pub use histogram::{HistogramChart, HistogramLayer, MeanLine};
pub use line::{LineChart, LineSeriesData};
pub use pie::{PieChart, PieSlice};

use crate::renderer::GraphRenderer;
use crate::StyleConfig;
use olympics_common::{truncate_label, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use serde::Serialize;

/// Any chart a panel can hold
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Chart {
    Bar(BarChart),
    Histogram(HistogramChart),
    Line(LineChart),
    Pie(PieChart),
}

impl GraphRenderer for Chart {
    fn draw<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        title: &str,
        style: &StyleConfig,
    ) -> Result<()>
    where
        DB::ErrorType: std::error::Error + Send + Sync + 'static,
    {
        match self {
            Self::Bar(chart) => chart.draw(area, title, style),
            Self::Histogram(chart) => chart.draw(area, title, style),
            Self::Line(chart) => chart.draw(area, title, style),
            Self::Pie(chart) => chart.draw(area, title, style),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            Self::Bar(chart) => chart.is_empty(),
            Self::Histogram(chart) => chart.is_empty(),
            Self::Line(chart) => chart.is_empty(),
            Self::Pie(chart) => chart.is_empty(),
        }
    }
}

impl From<BarChart> for Chart {
    fn from(chart: BarChart) -> Self {
        Self::Bar(chart)
    }
}

impl From<HistogramChart> for Chart {
    fn from(chart: HistogramChart) -> Self {
        Self::Histogram(chart)
    }
}

impl From<LineChart> for Chart {
    fn from(chart: LineChart) -> Self {
        Self::Line(chart)
    }
}

impl From<PieChart> for Chart {
    fn from(chart: PieChart) -> Self {
        Self::Pie(chart)
    }
}

/// Upper axis bound leaving headroom above `max`
pub(crate) fn headroom(max: f64) -> f64 {
    if max > 0.0 {
        max * 1.15
    } else {
        1.0
    }
}

/// Longest category tick label before it is cut short
const MAX_CATEGORY_LABEL: usize = 24;

/// Label for a category axis tick; blank between categories
pub(crate) fn category_label(labels: &[String], position: f64) -> String {
    let index = position.round();
    if (position - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    labels
        .get(index as usize)
        .map(|label| truncate_label(label, MAX_CATEGORY_LABEL))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label() {
        let labels = vec!["GER".to_string(), "NOR".to_string()];
        assert_eq!(category_label(&labels, 0.0), "GER");
        assert_eq!(category_label(&labels, 1.0000001), "NOR");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, 2.0), "");
        assert_eq!(category_label(&labels, -1.0), "");

        let long = vec!["Independent Olympic Participants".to_string()];
        assert_eq!(category_label(&long, 0.0), "Independent Olympic P...");
    }

    #[test]
    fn test_headroom() {
        assert_eq!(headroom(0.0), 1.0);
        assert!(headroom(10.0) > 10.0);
    }
}
