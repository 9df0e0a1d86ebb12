//! Multi-panel figures rendered to SVG

use crate::charts::Chart;
use crate::renderer::{parse_hex_color, GraphRenderer};
use crate::StyleConfig;
use olympics_common::{DashboardError, Result};
use plotters::prelude::*;
use serde::Serialize;
use tracing::debug;

/// One titled chart in a figure grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub title: String,
    pub chart: Chart,
}

/// A titled grid of panels, filled row by row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub rows: usize,
    pub cols: usize,
    pub panels: Vec<Panel>,
    #[serde(skip)]
    pub style: StyleConfig,
}

impl Figure {
    pub fn new(title: impl Into<String>, (width, height): (u32, u32), style: &StyleConfig) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            rows: 1,
            cols: 1,
            panels: Vec::new(),
            style: style.clone(),
        }
    }

    pub fn grid(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows.max(1);
        self.cols = cols.max(1);
        self
    }

    pub fn panel(mut self, title: impl Into<String>, chart: impl Into<Chart>) -> Self {
        self.panels.push(Panel {
            title: title.into(),
            chart: chart.into(),
        });
        self
    }

    /// Render to a standalone SVG document
    pub fn render_svg(&self) -> Result<String> {
        if self.panels.len() > self.rows * self.cols {
            return Err(DashboardError::graph(format!(
                "{} panels do not fit a {}x{} grid",
                self.panels.len(),
                self.rows,
                self.cols
            )));
        }

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.width, self.height))
                .into_drawing_area();
            let background = parse_hex_color(&self.style.background_color).unwrap_or(WHITE);
            root.fill(&background)?;

            let body = root.titled(&self.title, self.style.figure_title_font.as_font())?;
            let cells = body.split_evenly((self.rows, self.cols));
            for (panel, cell) in self.panels.iter().zip(cells.iter()) {
                panel.chart.draw(cell, &panel.title, &self.style)?;
            }
            root.present()?;
        }

        debug!(title = %self.title, bytes = svg.len(), "Rendered figure");
        Ok(svg)
    }
}
