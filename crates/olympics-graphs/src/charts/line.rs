//! Line series over years

use super::headroom;
use crate::renderer::{draw_placeholder, GraphRenderer};
use crate::StyleConfig;
use olympics_common::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeriesData {
    pub name: String,
    /// Points sorted by x
    pub points: Vec<(f64, f64)>,
    pub color: String,
    pub dashed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub series: Vec<LineSeriesData>,
    pub x_label: String,
    pub y_label: String,
}

impl LineChart {
    pub fn new(x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            series: Vec::new(),
            x_label: x_label.into(),
            y_label: y_label.into(),
        }
    }

    pub fn series(
        mut self,
        name: impl Into<String>,
        mut points: Vec<(f64, f64)>,
        color: impl Into<String>,
        dashed: bool,
    ) -> Self {
        points.sort_by(|a, b| a.0.total_cmp(&b.0));
        self.series.push(LineSeriesData {
            name: name.into(),
            points,
            color: color.into(),
            dashed,
        });
        self
    }

    /// `(x_min, x_max, y_max)` over every point
    pub fn bounds(&self) -> Option<(f64, f64, f64)> {
        self.series
            .iter()
            .flat_map(|s| s.points.iter())
            .fold(None, |acc, &(x, y)| match acc {
                None => Some((x, x, y)),
                Some((lo, hi, top)) => Some((lo.min(x), hi.max(x), top.max(y))),
            })
    }
}

impl GraphRenderer for LineChart {
    fn draw<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        title: &str,
        style: &StyleConfig,
    ) -> Result<()>
    where
        DB::ErrorType: std::error::Error + Send + Sync + 'static,
    {
        let Some((x_min, x_max, y_max)) = self.bounds() else {
            return draw_placeholder(area, title, &style.no_data_label, style);
        };
        let pad = ((x_max - x_min) * 0.03).max(1.0);

        let mut chart = ChartBuilder::on(area)
            .caption(title, style.title_font.as_font())
            .margin(style.margins.top)
            .x_label_area_size(style.margins.bottom)
            .y_label_area_size(style.margins.left)
            .build_cartesian_2d(x_min - pad..x_max + pad, 0.0..headroom(y_max))?;

        let year_fmt = |x: &f64| format!("{x:.0}");
        let mut mesh = chart.configure_mesh();
        mesh.x_desc(self.x_label.as_str())
            .y_desc(self.y_label.as_str())
            .x_label_formatter(&year_fmt)
            .axis_desc_style(style.axis_font.as_font())
            .label_style(style.label_font.as_font());
        if !style.show_grid {
            mesh.disable_mesh();
        }
        mesh.draw()?;

        for series in &self.series {
            let color = self.parse_color(&series.color);
            let stroke = color.stroke_width(2);
            let annotation = if series.dashed {
                chart.draw_series(DashedLineSeries::new(series.points.clone(), 10, 6, stroke))?
            } else {
                chart.draw_series(LineSeries::new(series.points.clone(), stroke))?
            };
            let dashed = series.dashed;
            annotation.label(series.name.as_str()).legend(move |(x, y)| {
                let end = if dashed { x + 8 } else { x + 20 };
                PathElement::new(vec![(x, y), (end, y)], stroke)
            });
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(style.label_font.as_font())
            .draw()?;

        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.bounds().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_are_sorted() {
        let chart = LineChart::new("Year", "Participants").series(
            "GER Summer",
            vec![(2000.0, 2.0), (1996.0, 1.0)],
            "#1f77b4",
            false,
        );
        assert_eq!(chart.series[0].points, vec![(1996.0, 1.0), (2000.0, 2.0)]);
    }

    #[test]
    fn test_bounds() {
        let chart = LineChart::new("Year", "Participants")
            .series("GDR Summer", vec![(1972.0, 1.0), (1976.0, 1.0)], "#ff7f0e", false)
            .series("GER Winter", vec![(1994.0, 3.0)], "#1f77b4", true);
        assert_eq!(chart.bounds(), Some((1972.0, 1994.0, 3.0)));
        assert!(!chart.is_empty());
        assert!(LineChart::new("", "").is_empty());
    }
}
