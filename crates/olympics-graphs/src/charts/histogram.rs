//! Overlaid histograms with optional dashed mean markers

use super::headroom;
use crate::bins::Histogram;
use crate::renderer::{draw_placeholder, GraphRenderer};
use crate::StyleConfig;
use olympics_common::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use serde::Serialize;

/// Gap left on each side of a bin, as a share of its width
const BIN_GAP: f64 = 0.05;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramLayer {
    pub name: String,
    pub histogram: Histogram,
    pub color: String,
}

/// A dashed vertical line at `value` with a caption at its top
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeanLine {
    pub value: f64,
    pub color: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramChart {
    pub layers: Vec<HistogramLayer>,
    pub mean_lines: Vec<MeanLine>,
    pub opacity: f64,
    /// Plot each bin as a percentage of its layer's total
    pub percent: bool,
    pub x_label: String,
    pub y_label: String,
    pub show_legend: bool,
}

impl HistogramChart {
    pub fn new(x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            layers: Vec::new(),
            mean_lines: Vec::new(),
            opacity: 1.0,
            percent: false,
            x_label: x_label.into(),
            y_label: y_label.into(),
            show_legend: false,
        }
    }

    pub fn layer(
        mut self,
        name: impl Into<String>,
        histogram: Histogram,
        color: impl Into<String>,
    ) -> Self {
        self.layers.push(HistogramLayer {
            name: name.into(),
            histogram,
            color: color.into(),
        });
        self
    }

    /// Add a mean marker; `None` adds nothing
    pub fn mean_line(
        mut self,
        value: Option<f64>,
        color: impl Into<String>,
        caption: impl Into<String>,
    ) -> Self {
        if let Some(value) = value {
            self.mean_lines.push(MeanLine {
                value,
                color: color.into(),
                caption: caption.into(),
            });
        }
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn as_percent(mut self) -> Self {
        self.percent = true;
        self
    }

    pub fn with_legend(mut self) -> Self {
        self.show_legend = true;
        self
    }

    /// Bar heights of one layer
    pub fn heights(&self, layer: &HistogramLayer) -> Vec<f64> {
        if self.percent {
            layer.histogram.percent()
        } else {
            layer.histogram.bins.iter().map(|b| b.count as f64).collect()
        }
    }

    /// Horizontal extent covering every bin and mean marker
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        let spans = self.layers.iter().filter_map(|l| l.histogram.span());
        let means = self.mean_lines.iter().map(|m| (m.value, m.value));
        spans.chain(means).reduce(|(lo, hi), (a, b)| (lo.min(a), hi.max(b)))
    }

    fn y_max(&self) -> f64 {
        self.layers
            .iter()
            .flat_map(|layer| self.heights(layer))
            .fold(0.0, f64::max)
    }
}

impl GraphRenderer for HistogramChart {
    fn draw<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        title: &str,
        style: &StyleConfig,
    ) -> Result<()>
    where
        DB::ErrorType: std::error::Error + Send + Sync + 'static,
    {
        let Some((low, high)) = self.x_extent().filter(|_| !self.is_empty()) else {
            return draw_placeholder(area, title, &style.no_data_label, style);
        };
        let pad = ((high - low) * 0.05).max(0.5);
        let top = headroom(self.y_max());

        let mut chart = ChartBuilder::on(area)
            .caption(title, style.title_font.as_font())
            .margin(style.margins.top)
            .x_label_area_size(style.margins.bottom)
            .y_label_area_size(style.margins.left)
            .build_cartesian_2d(low - pad..high + pad, 0.0..top)?;

        let mut mesh = chart.configure_mesh();
        mesh.x_desc(self.x_label.as_str())
            .y_desc(self.y_label.as_str())
            .axis_desc_style(style.axis_font.as_font())
            .label_style(style.label_font.as_font())
            .disable_x_mesh();
        if !style.show_grid {
            mesh.disable_mesh();
        }
        mesh.draw()?;

        for layer in &self.layers {
            let color = self.parse_color(&layer.color);
            let fill = color.mix(self.opacity).filled();
            let bars: Vec<Rectangle<(f64, f64)>> = layer
                .histogram
                .bins
                .iter()
                .zip(self.heights(layer))
                .map(|(bin, height)| {
                    let gap = (bin.end - bin.start) * BIN_GAP;
                    Rectangle::new([(bin.start + gap, 0.0), (bin.end - gap, height)], fill)
                })
                .collect();

            let annotation = chart.draw_series(bars)?;
            if self.show_legend {
                annotation.label(layer.name.as_str()).legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 10, y + 5)], fill)
                });
            }
        }

        for (i, line) in self.mean_lines.iter().enumerate() {
            let color = self.parse_color(&line.color);
            chart.draw_series(DashedLineSeries::new(
                vec![(line.value, 0.0), (line.value, top)],
                8,
                5,
                color.stroke_width(2),
            ))?;

            // Stagger captions so neighbouring means stay readable.
            let caption_y = top * (0.97 - 0.07 * i as f64);
            let font = style
                .label_font
                .as_font()
                .into_font()
                .color(&color)
                .pos(Pos::new(HPos::Left, VPos::Top));
            chart.draw_series(std::iter::once(Text::new(
                format!(" {}", line.caption),
                (line.value, caption_y),
                font,
            )))?;
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
        self.layers.iter().all(|layer| layer.histogram.is_empty())
    }
}
