//! # Olympics Graphs
//!
//! Aggregations over the prepared dataset and the figures drawn from them.
//!
//! Every figure is a grid of [`charts`] rendered to SVG with plotters. The
//! [`FigureCatalog`] knows which frame, filter and labels each dashboard
//! figure uses.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregator;
pub mod bins;
pub mod catalog;
pub mod charts;
pub mod figure;
pub mod palette;
pub mod renderer;
pub mod types;

pub use bins::{mean, Bin, Histogram};
pub use catalog::{DashboardFigure, FigureCatalog, FigureId};
pub use charts::Chart;
pub use figure::{Figure, Panel};
pub use renderer::GraphRenderer;
pub use types::*;
