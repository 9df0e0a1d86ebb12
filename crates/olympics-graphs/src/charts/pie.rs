//! Pie charts with percentage labels

use crate::renderer::{draw_placeholder, GraphRenderer};
use crate::StyleConfig;
use olympics_common::Result;
use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PieChart {
    pub slices: Vec<PieSlice>,
    pub show_legend: bool,
}

impl PieChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slice(mut self, label: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        self.slices.push(PieSlice {
            label: label.into(),
            value: value.max(0.0),
            color: color.into(),
        });
        self
    }

    pub fn with_legend(mut self) -> Self {
        self.show_legend = true;
        self
    }

    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    /// Slice shares in percent
    pub fn percentages(&self) -> Vec<f64> {
        let total = self.total();
        self.slices
            .iter()
            .map(|s| if total > 0.0 { s.value * 100.0 / total } else { 0.0 })
            .collect()
    }
}

impl GraphRenderer for PieChart {
    fn draw<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        title: &str,
        style: &StyleConfig,
    ) -> Result<()>
    where
        DB::ErrorType: std::error::Error + Send + Sync + 'static,
    {
        if self.is_empty() {
            return draw_placeholder(area, title, &style.no_data_label, style);
        }

        let body = area.titled(title, style.title_font.as_font())?;
        let (width, height) = body.dim_in_pixel();
        let center = (width as i32 / 2, height as i32 / 2);
        let radius = f64::from(width.min(height)) * 0.38;

        // Zero slices would only stack their labels on a neighbour.
        let drawn: Vec<&PieSlice> = self.slices.iter().filter(|s| s.value > 0.0).collect();
        let sizes: Vec<f64> = drawn.iter().map(|s| s.value).collect();
        let colors: Vec<RGBColor> = drawn.iter().map(|s| self.parse_color(&s.color)).collect();
        let labels: Vec<&str> = drawn
            .iter()
            .map(|s| if self.show_legend { "" } else { s.label.as_str() })
            .collect();

        let label_font = style.label_font.as_font().into_font().color(&BLACK);
        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.start_angle(-90.0);
        pie.label_style(label_font.clone());
        pie.percentages(label_font);
        body.draw(&pie)?;

        if self.show_legend {
            let font = style.label_font.as_font().into_font().color(&BLACK);
            let line = style.label_font.size as i32 + 6;
            for (i, slice) in self.slices.iter().enumerate() {
                let y = 10 + line * i as i32;
                let color = self.parse_color(&slice.color);
                body.draw(&Rectangle::new([(10, y), (22, y + 12)], color.filled()))?;
                body.draw(&Text::new(slice.label.clone(), (28, y), font.clone()))?;
            }
        }

        Ok(())
    }

    /// Nothing to draw when every slice is zero
    fn is_empty(&self) -> bool {
        self.total() <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentages() {
        let pie = PieChart::new().slice("M", 1.0, "#808080").slice("F", 3.0, "#FFA500");
        assert_eq!(pie.percentages(), vec![25.0, 75.0]);
    }

    #[test]
    fn test_slice_labels_and_percentages_are_drawn() {
        let pie = PieChart::new()
            .slice("Men", 3.0, "#808080")
            .slice("Women", 1.0, "#FFA500")
            .slice("Unknown", 0.0, "#000000");
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (400, 400)).into_drawing_area();
            pie.draw(&root, "Sex", &StyleConfig::default()).unwrap();
            root.present().unwrap();
        }
        assert!(svg.contains("Men"));
        assert!(svg.contains("75.0%"));
        assert!(svg.contains("25.0%"));
        assert!(!svg.contains("Unknown"));
    }

    #[test]
    fn test_all_zero_is_empty() {
        let pie = PieChart::new().slice("M", 0.0, "#808080").slice("F", 0.0, "#FFA500");
        assert!(pie.is_empty());
        assert_eq!(pie.percentages(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_negative_values_are_clamped() {
        let pie = PieChart::new().slice("M", -2.0, "#808080");
        assert_eq!(pie.total(), 0.0);
    }
}
