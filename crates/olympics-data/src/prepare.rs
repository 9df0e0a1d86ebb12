//! Region join, row cleaning and name anonymization

use crate::model::{AthleteName, AthleteEvent, JoinedRow, NocRegion, OlympicRecord};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Left join of events onto regions by NOC.
///
/// Events whose NOC has no mapping keep `region = None`. When a NOC appears
/// more than once in `regions` the first mapping wins.
pub fn join_regions(events: Vec<AthleteEvent>, regions: &[NocRegion]) -> Vec<JoinedRow> {
    let mut by_noc: HashMap<&str, &NocRegion> = HashMap::with_capacity(regions.len());
    for region in regions {
        if by_noc.contains_key(region.noc.as_str()) {
            warn!(noc = %region.noc, "Duplicate NOC in region mapping");
            continue;
        }
        by_noc.insert(region.noc.as_str(), region);
    }

    let joined: Vec<JoinedRow> = events
        .into_iter()
        .map(|event| {
            let mapping = event.noc.as_deref().and_then(|noc| by_noc.get(noc));
            JoinedRow {
                region: mapping.and_then(|m| m.region.clone()),
                notes: mapping.and_then(|m| m.notes.clone()),
                event,
            }
        })
        .collect();

    let unmapped = joined.iter().filter(|row| row.region.is_none()).count();
    debug!(rows = joined.len(), unmapped, "Joined regions");
    joined
}

/// Drop rows missing NOC, region or name and turn the rest into records
pub fn clean(rows: Vec<JoinedRow>) -> Vec<OlympicRecord> {
    let total = rows.len();
    let records: Vec<OlympicRecord> = rows
        .into_iter()
        .filter_map(|row| {
            let JoinedRow { event, region, notes } = row;
            let (Some(noc), Some(region), Some(name)) = (event.noc, region, event.name) else {
                return None;
            };
            Some(OlympicRecord {
                id: event.id,
                name: AthleteName::Plain(name),
                sex: event.sex,
                age: event.age,
                height: event.height,
                weight: event.weight,
                team: event.team,
                noc,
                games: event.games,
                year: event.year,
                season: event.season,
                city: event.city,
                sport: event.sport,
                event: event.event,
                medal: event.medal,
                region,
                notes,
            })
        })
        .collect();

    info!(kept = records.len(), dropped = total - records.len(), "Cleaned rows");
    records
}

/// Replace the name of every record whose NOC is in `nocs` by its SHA-256
/// digest. Returns how many names were replaced.
pub fn anonymize<S: AsRef<str>>(records: &mut [OlympicRecord], nocs: &[S]) -> usize {
    let mut replaced = 0;
    for record in records.iter_mut() {
        if record.name.is_hashed() || !nocs.iter().any(|noc| noc.as_ref() == record.noc) {
            continue;
        }
        let name = std::mem::replace(&mut record.name, AthleteName::Plain(String::new()));
        record.name = name.hashed();
        replaced += 1;
    }

    info!(replaced, "Anonymized athlete names");
    replaced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::GERMAN_NOCS;
    use crate::loader::{read_athlete_events, read_noc_regions};
    use crate::model::NameDigest;
    use olympics_common::test_utils::{
        ATHLETE_EVENTS_CSV, CLEAN_ROW_COUNT, NOC_REGIONS_CSV,
    };

    fn fixture_rows() -> Vec<JoinedRow> {
        let events = read_athlete_events(ATHLETE_EVENTS_CSV.as_bytes()).unwrap();
        let regions = read_noc_regions(NOC_REGIONS_CSV.as_bytes()).unwrap();
        join_regions(events, &regions)
    }

    #[test]
    fn test_join_keeps_every_event() {
        let rows = fixture_rows();
        assert_eq!(rows.len(), 18);

        let ghost = rows.iter().find(|r| r.event.id == 15).unwrap();
        assert_eq!(ghost.region, None);

        let refugee = rows.iter().find(|r| r.event.id == 16).unwrap();
        assert_eq!(refugee.region, None);
        assert_eq!(refugee.notes.as_deref(), Some("Refugee Olympic Team"));

        let frg = rows.iter().find(|r| r.event.id == 7).unwrap();
        assert_eq!(frg.region.as_deref(), Some("Germany"));
    }

    #[test]
    fn test_first_region_mapping_wins() {
        let regions = vec![
            NocRegion { noc: "GER".into(), region: Some("Germany".into()), notes: None },
            NocRegion { noc: "GER".into(), region: Some("Other".into()), notes: None },
        ];
        let events = read_athlete_events(ATHLETE_EVENTS_CSV.as_bytes()).unwrap();
        let rows = join_regions(events, &regions);
        assert_eq!(rows[0].region.as_deref(), Some("Germany"));
    }

    #[test]
    fn test_clean_drops_incomplete_rows() {
        let records = clean(fixture_rows());
        assert_eq!(records.len(), CLEAN_ROW_COUNT);

        let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
        assert!(!ids.contains(&15));
        assert!(!ids.contains(&16));
        assert!(!ids.contains(&17));
        // Input order survives.
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_anonymize_only_listed_nocs() {
        let mut records = clean(fixture_rows());
        let replaced = anonymize(&mut records, &GERMAN_NOCS);
        assert_eq!(replaced, 11);

        for record in &records {
            let german = GERMAN_NOCS.contains(&record.noc.as_str());
            assert_eq!(record.name.is_hashed(), german, "{}", record.id);
        }

        let anna = records.iter().find(|r| r.id == 1).unwrap();
        assert_eq!(anna.name.as_str(), NameDigest::of("Anna Schmidt").as_str());

        // Already hashed names are left alone.
        assert_eq!(anonymize(&mut records, &GERMAN_NOCS), 0);
    }
}
