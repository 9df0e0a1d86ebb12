//! Bar charts over named categories

use super::{category_label, headroom};
use crate::renderer::{draw_placeholder, pick, GraphRenderer};
use crate::{ColorScheme, StyleConfig};
use olympics_common::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use serde::Serialize;

/// Share of a category slot covered by its bars
const GROUP_WIDTH: f64 = 0.8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Vertical,
    /// Categories on the y axis, first category on top
    Horizontal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarMode {
    /// Series side by side within a category
    #[default]
    Grouped,
    /// Series on top of each other
    Stacked,
}

/// One bar per category. `None` draws no bar and, with value labels on,
/// the missing-value label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub name: String,
    pub values: Vec<Option<f64>>,
    pub color: String,
}

impl BarSeries {
    pub fn new(name: impl Into<String>, values: Vec<f64>, color: impl Into<String>) -> Self {
        Self::optional(name, values.into_iter().map(Some).collect(), color)
    }

    pub fn optional(
        name: impl Into<String>,
        values: Vec<Option<f64>>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            values,
            color: color.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub categories: Vec<String>,
    pub series: Vec<BarSeries>,
    /// Color each category from this scheme instead of by series
    pub category_colors: Option<ColorScheme>,
    pub orientation: Orientation,
    pub mode: BarMode,
    pub value_labels: bool,
    /// Fixed value axis range
    pub value_range: Option<(f64, f64)>,
    pub x_label: String,
    pub y_label: String,
    pub show_legend: bool,
}

/// Where one bar lands, in category slots along one axis and values along
/// the other
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BarSpan {
    pub series: usize,
    pub category: usize,
    pub start: f64,
    pub end: f64,
    pub base: f64,
    pub top: f64,
    pub value: Option<f64>,
}

impl BarChart {
    pub fn new(categories: Vec<String>) -> Self {
        Self {
            categories,
            series: Vec::new(),
            category_colors: None,
            orientation: Orientation::Vertical,
            mode: BarMode::Grouped,
            value_labels: false,
            value_range: None,
            x_label: String::new(),
            y_label: String::new(),
            show_legend: false,
        }
    }

    pub fn series(mut self, series: BarSeries) -> Self {
        self.series.push(series);
        self
    }

    pub fn axes(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    pub fn horizontal(mut self) -> Self {
        self.orientation = Orientation::Horizontal;
        self
    }

    pub fn stacked(mut self) -> Self {
        self.mode = BarMode::Stacked;
        self
    }

    pub fn with_value_labels(mut self) -> Self {
        self.value_labels = true;
        self
    }

    pub fn with_value_range(mut self, low: f64, high: f64) -> Self {
        self.value_range = Some((low, high));
        self
    }

    pub fn with_legend(mut self) -> Self {
        self.show_legend = true;
        self
    }

    pub fn color_by_category(mut self, scheme: ColorScheme) -> Self {
        self.category_colors = Some(scheme);
        self
    }

    /// Slot of category `index` along the category axis
    fn position(&self, index: usize) -> f64 {
        match self.orientation {
            Orientation::Vertical => index as f64,
            Orientation::Horizontal => (self.categories.len() - 1 - index) as f64,
        }
    }

    /// Plot coordinates of a point `along` the category axis at `value`
    fn point(&self, along: f64, value: f64) -> (f64, f64) {
        match self.orientation {
            Orientation::Vertical => (along, value),
            Orientation::Horizontal => (value, along),
        }
    }

    pub(crate) fn spans(&self) -> Vec<BarSpan> {
        let slots = self.series.len().max(1) as f64;
        let mut stack = vec![0.0; self.categories.len()];
        let mut spans = Vec::new();

        for (k, series) in self.series.iter().enumerate() {
            for (i, value) in series.values.iter().enumerate().take(self.categories.len()) {
                let center = self.position(i);
                let (start, end) = match self.mode {
                    BarMode::Grouped => {
                        let width = GROUP_WIDTH / slots;
                        let start = center - GROUP_WIDTH / 2.0 + width * k as f64;
                        (start, start + width)
                    }
                    BarMode::Stacked => (center - GROUP_WIDTH / 2.0, center + GROUP_WIDTH / 2.0),
                };
                let height = value.unwrap_or(0.0);
                let base = match self.mode {
                    BarMode::Grouped => 0.0,
                    BarMode::Stacked => stack[i],
                };
                if self.mode == BarMode::Stacked {
                    stack[i] += height;
                }
                spans.push(BarSpan {
                    series: k,
                    category: i,
                    start,
                    end,
                    base,
                    top: base + height,
                    value: *value,
                });
            }
        }
        spans
    }

    /// Tallest bar, or tallest stack
    pub fn max_value(&self) -> f64 {
        self.spans().iter().map(|s| s.top).fold(0.0, f64::max)
    }
}

fn format_value(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

impl GraphRenderer for BarChart {
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

        let spans = self.spans();
        let slots = self.categories.len() as f64;
        let (low, high) = self.value_range.unwrap_or((0.0, headroom(self.max_value())));
        let category_range = -0.5..slots - 0.5;

        let longest = self.categories.iter().map(|c| c.chars().count()).max().unwrap_or(0) as u32;
        let category_area = (longest * style.label_font.size * 3 / 5 + 15).max(style.margins.left);

        let mut builder = ChartBuilder::on(area);
        builder
            .caption(title, style.title_font.as_font())
            .margin(style.margins.top);
        let mut chart = match self.orientation {
            Orientation::Vertical => builder
                .x_label_area_size(style.margins.bottom)
                .y_label_area_size(style.margins.left)
                .build_cartesian_2d(category_range, low..high)?,
            Orientation::Horizontal => builder
                .x_label_area_size(style.margins.bottom)
                .y_label_area_size(category_area)
                .build_cartesian_2d(low..high, category_range)?,
        };

        let reversed: Vec<String> = self.categories.iter().rev().cloned().collect();
        let category_fmt = |v: &f64| category_label(&self.categories, *v);
        let reversed_fmt = |v: &f64| category_label(&reversed, *v);
        let value_fmt = |v: &f64| format_value(*v);

        let mut mesh = chart.configure_mesh();
        mesh.x_desc(self.x_label.as_str())
            .y_desc(self.y_label.as_str())
            .axis_desc_style(style.axis_font.as_font())
            .label_style(style.label_font.as_font());
        match self.orientation {
            Orientation::Vertical => {
                mesh.x_labels(self.categories.len())
                    .x_label_formatter(&category_fmt)
                    .y_label_formatter(&value_fmt)
                    .disable_x_mesh();
            }
            Orientation::Horizontal => {
                mesh.y_labels(self.categories.len())
                    .y_label_formatter(&reversed_fmt)
                    .x_label_formatter(&value_fmt)
                    .disable_y_mesh();
            }
        }
        if !style.show_grid {
            mesh.disable_mesh();
        }
        mesh.draw()?;

        let category_palette = self
            .category_colors
            .as_ref()
            .map(|scheme| self.get_colors(scheme));

        for (k, series) in self.series.iter().enumerate() {
            let series_color = self.parse_color(&series.color);
            let bars: Vec<Rectangle<(f64, f64)>> = spans
                .iter()
                .filter(|s| s.series == k && s.value.is_some())
                .map(|s| {
                    let color = category_palette
                        .as_deref()
                        .map_or(series_color, |palette| pick(palette, s.category));
                    Rectangle::new(
                        [self.point(s.start, s.base), self.point(s.end, s.top)],
                        color.filled(),
                    )
                })
                .collect();

            let annotation = chart.draw_series(bars)?;
            if self.show_legend {
                annotation
                    .label(series.name.as_str())
                    .legend(move |(x, y)| {
                        Rectangle::new([(x, y - 5), (x + 10, y + 5)], series_color.filled())
                    });
            }
        }

        if self.value_labels {
            let anchor = match self.orientation {
                Orientation::Vertical => Pos::new(HPos::Center, VPos::Bottom),
                Orientation::Horizontal => Pos::new(HPos::Left, VPos::Center),
            };
            let font = style.label_font.as_font().into_font().color(&BLACK).pos(anchor);
            chart.draw_series(spans.iter().map(|s| {
                let text = s
                    .value
                    .map_or_else(|| style.missing_value_label.clone(), format_value);
                Text::new(text, self.point((s.start + s.end) / 2.0, s.top), font.clone())
            }))?;
        }

        if self.show_legend {
            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .label_font(style.label_font.as_font())
                .draw()?;
        }

        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.categories.is_empty() || self.series.iter().all(|s| s.values.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_grouped_bars_share_the_slot() {
        let chart = BarChart::new(categories(&["1972", "1976"]))
            .series(BarSeries::new("FRG", vec![1.0, 0.0], "#1f77b4"))
            .series(BarSeries::new("GDR", vec![1.0, 1.0], "#ff7f0e"));

        let spans = chart.spans();
        assert_eq!(spans.len(), 4);
        assert!((spans[0].start + 0.4).abs() < 1e-9);
        assert!((spans[0].end - 0.0).abs() < 1e-9);
        assert!((spans[2].start - 0.0).abs() < 1e-9);
        assert!(spans.iter().all(|s| s.base == 0.0));
        assert_eq!(chart.max_value(), 1.0);
    }

    #[test]
    fn test_stacked_bars_accumulate() {
        let chart = BarChart::new(categories(&["GER", "NOR"]))
            .series(BarSeries::new("Gold", vec![3.0, 0.0], "#DABE1E"))
            .series(BarSeries::new("Silver", vec![1.0, 1.0], "#C0C0C0"))
            .stacked();

        let spans = chart.spans();
        let ger_silver = spans.iter().find(|s| s.series == 1 && s.category == 0).unwrap();
        assert_eq!(ger_silver.base, 3.0);
        assert_eq!(ger_silver.top, 4.0);
        assert_eq!(chart.max_value(), 4.0);
    }

    #[test]
    fn test_horizontal_puts_first_category_on_top() {
        let chart = BarChart::new(categories(&["Ski Jumping", "Swimming", "Biathlon"]))
            .series(BarSeries::new("Medals", vec![3.0, 2.0, 1.0], "#4682B4"))
            .horizontal();

        let spans = chart.spans();
        assert!(((spans[0].start + spans[0].end) / 2.0 - 2.0).abs() < 1e-9);
        assert_eq!(chart.point(2.0, 3.0), (3.0, 2.0));
    }

    #[test]
    fn test_missing_values_have_no_height() {
        let chart = BarChart::new(categories(&["Men", "Women"]))
            .series(BarSeries::optional("Efficiency", vec![Some(100.0), None], "#000000"));
        let spans = chart.spans();
        assert_eq!(spans[1].top, 0.0);
        assert_eq!(spans[1].value, None);
    }

    #[test]
    fn test_empty_chart() {
        assert!(BarChart::new(vec![]).is_empty());
        assert!(BarChart::new(categories(&["A"])).is_empty());
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(3.0), "3");
        assert_eq!(format_value(66.6667), "66.7");
    }
}
