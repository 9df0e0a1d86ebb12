//! # Olympics Dashboard
//!
//! Web page and export tool over German Olympic history (GER, FRG, GDR).
//!
//! Static figures are rendered once at start-up; the three sport figures
//! are rebuilt whenever a sport is picked.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod error;
pub mod export;
pub mod layout;
pub mod server;
pub mod state;

pub use cli::{Cli, Command};
pub use error::{ApiError, ApiResult};
pub use export::{export_figures, Manifest};
pub use server::{router, serve};
pub use state::{AppState, RenderedFigure};
