//! # Olympics Data
//!
//! Loads `athlete_events.csv` and `noc_regions.csv`, joins them on NOC,
//! drops rows missing NOC, region or name, replaces German athlete names by
//! their SHA-256 digest and splits the result into the row sets the
//! dashboard draws from.

pub mod bundle;
pub mod era;
pub mod frame;
pub mod loader;
pub mod model;
pub mod prepare;

pub use bundle::{DatasetBundle, GERMANY_NOC, GERMAN_NOCS};
pub use era::EraBand;
pub use frame::Frame;
pub use loader::{load_athlete_events, load_noc_regions, read_athlete_events, read_noc_regions};
pub use model::{
    AthleteEvent, AthleteName, JoinedRow, Medal, NameDigest, NocRegion, OlympicRecord, Season, Sex,
};
pub use prepare::{anonymize, clean, join_regions};
