//! # Olympics Common
//!
//! Shared error type, logging bootstrap, and small helpers used by every crate
//! in the Olympics dashboard workspace.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{DashboardError, Result};
pub use logging::{init_dev_logging, init_logging, LoggingConfig};
pub use utils::*;
