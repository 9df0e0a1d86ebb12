//! The three row sets every figure is built from

use crate::frame::Frame;
use crate::loader::{load_athlete_events, load_noc_regions, read_athlete_events, read_noc_regions};
use crate::model::{AthleteEvent, NocRegion};
use crate::prepare::{anonymize, clean, join_regions};
use olympics_common::Result;
use std::io::Read;
use std::path::Path;
use tracing::{info, instrument};

/// NOCs that make up Germany across its divided and unified periods
pub const GERMAN_NOCS: [&str; 3] = ["GER", "FRG", "GDR"];

/// NOC of unified Germany
pub const GERMANY_NOC: &str = "GER";

/// Cleaned and anonymized rows split the way the dashboard uses them
#[derive(Debug, Clone)]
pub struct DatasetBundle {
    /// Every cleaned row
    pub all: Frame,
    /// Rows of GER, FRG and GDR
    pub germany_all: Frame,
    /// Rows of GER
    pub germany: Frame,
}

impl DatasetBundle {
    /// Load both CSV files, anonymizing the German NOCs
    pub fn load(athletes_path: impl AsRef<Path>, regions_path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with::<&str>(athletes_path, regions_path, &[])
    }

    /// Load both CSV files, anonymizing the German NOCs and `extra_nocs`
    #[instrument(skip_all)]
    pub fn load_with<S: AsRef<str>>(
        athletes_path: impl AsRef<Path>,
        regions_path: impl AsRef<Path>,
        extra_nocs: &[S],
    ) -> Result<Self> {
        let events = load_athlete_events(athletes_path)?;
        let regions = load_noc_regions(regions_path)?;
        Ok(Self::from_parts_with(events, &regions, extra_nocs))
    }

    /// Build from readers holding the two CSV documents
    pub fn from_readers<A: Read, R: Read>(athletes: A, regions: R) -> Result<Self> {
        let events = read_athlete_events(athletes)?;
        let regions = read_noc_regions(regions)?;
        Ok(Self::from_parts(events, &regions))
    }

    /// Join, clean, anonymize the German NOCs, then split
    pub fn from_parts(events: Vec<AthleteEvent>, regions: &[NocRegion]) -> Self {
        Self::from_parts_with::<&str>(events, regions, &[])
    }

    /// Like [`DatasetBundle::from_parts`], also hashing the names of
    /// `extra_nocs`. German names are hashed whatever the extra list holds.
    pub fn from_parts_with<S: AsRef<str>>(
        events: Vec<AthleteEvent>,
        regions: &[NocRegion],
        extra_nocs: &[S],
    ) -> Self {
        let mut records = clean(join_regions(events, regions));
        anonymize(&mut records, &GERMAN_NOCS);
        anonymize(&mut records, extra_nocs);

        let all = Frame::new(records);
        let germany_all = all.with_nocs(&GERMAN_NOCS);
        let germany = germany_all.with_noc(GERMANY_NOC);

        info!(
            all = all.len(),
            germany_all = germany_all.len(),
            germany = germany.len(),
            "Dataset ready"
        );

        Self {
            all,
            germany_all,
            germany,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use olympics_common::test_utils::{
        fixture_dir, ATHLETE_EVENTS_CSV, CLEAN_ROW_COUNT, GERMANY_ALL_ROW_COUNT,
        GERMANY_ROW_COUNT, NOC_REGIONS_CSV,
    };

    #[test]
    fn test_split_sizes() {
        let bundle =
            DatasetBundle::from_readers(ATHLETE_EVENTS_CSV.as_bytes(), NOC_REGIONS_CSV.as_bytes())
                .unwrap();

        assert_eq!(bundle.all.len(), CLEAN_ROW_COUNT);
        assert_eq!(bundle.germany_all.len(), GERMANY_ALL_ROW_COUNT);
        assert_eq!(bundle.germany.len(), GERMANY_ROW_COUNT);
        assert!(bundle.germany.iter().all(|r| r.noc == "GER"));
    }

    #[test]
    fn test_load_from_files() {
        let (_dir, athletes, regions) = fixture_dir();
        let bundle = DatasetBundle::load(&athletes, &regions).unwrap();
        assert_eq!(bundle.all.len(), CLEAN_ROW_COUNT);
    }

    #[test]
    fn test_extra_nocs_add_to_german_ones() {
        let (_dir, athletes, regions) = fixture_dir();
        let bundle = DatasetBundle::load_with(&athletes, &regions, &["NOR"]).unwrap();

        let norway: Vec<_> = bundle.all.iter().filter(|r| r.noc == "NOR").collect();
        assert!(!norway.is_empty());
        assert!(norway.iter().all(|r| r.name.is_hashed()));
        assert_eq!(bundle.germany_all.len(), GERMANY_ALL_ROW_COUNT);
        assert!(bundle.germany_all.iter().all(|r| r.name.is_hashed()));
    }

    #[test]
    fn test_german_names_hashed_without_extras() {
        let (_dir, athletes, regions) = fixture_dir();
        let bundle = DatasetBundle::load_with::<&str>(&athletes, &regions, &[]).unwrap();

        assert!(bundle.germany_all.iter().all(|r| r.name.is_hashed()));
        assert!(bundle
            .all
            .iter()
            .filter(|r| !GERMAN_NOCS.contains(&r.noc.as_str()))
            .all(|r| !r.name.is_hashed()));
    }
}
