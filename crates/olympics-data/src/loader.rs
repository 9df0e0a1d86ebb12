//! CSV readers for `athlete_events.csv` and `noc_regions.csv`
//!
//! Both files use `NA` or an empty field for missing values.

use crate::model::{AthleteEvent, NocRegion};
use olympics_common::{DashboardError, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::{info, instrument};

#[derive(Debug, Deserialize)]
struct RawAthleteEvent {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Sex")]
    sex: String,
    #[serde(rename = "Age")]
    age: String,
    #[serde(rename = "Height")]
    height: String,
    #[serde(rename = "Weight")]
    weight: String,
    #[serde(rename = "Team")]
    team: String,
    #[serde(rename = "NOC")]
    noc: String,
    #[serde(rename = "Games")]
    games: String,
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "Season")]
    season: String,
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "Sport")]
    sport: String,
    #[serde(rename = "Event")]
    event: String,
    #[serde(rename = "Medal")]
    medal: String,
}

#[derive(Debug, Deserialize)]
struct RawNocRegion {
    #[serde(rename = "NOC")]
    noc: String,
    region: String,
    #[serde(default)]
    notes: String,
}

fn present(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == "NA" {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_optional<T>(value: String, field: &str, line: u64) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    present(value)
        .map(|v| {
            v.parse::<T>().map_err(|e| {
                DashboardError::data_at_line(format!("invalid {field} '{v}': {e}"), line)
            })
        })
        .transpose()
}

fn parse_required<T>(value: String, field: &str, line: u64) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    parse_optional(value, field, line)?
        .ok_or_else(|| DashboardError::data_at_line(format!("missing {field}"), line))
}

/// Ages are whole years but some exports write them as `24.0`.
fn parse_age(value: String, line: u64) -> Result<Option<u32>> {
    match parse_optional::<f64>(value, "age", line)? {
        Some(age) if age.is_finite() && age >= 0.0 => Ok(Some(age.round() as u32)),
        Some(age) => Err(DashboardError::data_at_line(format!("invalid age '{age}'"), line)),
        None => Ok(None),
    }
}

impl RawAthleteEvent {
    fn into_event(self, line: u64) -> Result<AthleteEvent> {
        Ok(AthleteEvent {
            id: parse_required(self.id, "ID", line)?,
            name: present(self.name),
            sex: parse_optional(self.sex, "sex", line)?,
            age: parse_age(self.age, line)?,
            height: parse_optional(self.height, "height", line)?,
            weight: parse_optional(self.weight, "weight", line)?,
            team: self.team,
            noc: present(self.noc),
            games: self.games,
            year: parse_required(self.year, "year", line)?,
            season: parse_required(self.season, "season", line)?,
            city: self.city,
            sport: self.sport,
            event: self.event,
            medal: parse_optional(self.medal, "medal", line)?,
        })
    }
}

/// Parse athlete events from any reader holding the CSV with its header row
pub fn read_athlete_events<R: Read>(reader: R) -> Result<Vec<AthleteEvent>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut events = Vec::new();
    let mut record = csv::StringRecord::new();
    while csv_reader.read_record(&mut record)? {
        let line = record.position().map_or(0, csv::Position::line);
        let raw: RawAthleteEvent = record.deserialize(Some(&headers))?;
        events.push(raw.into_event(line)?);
    }
    Ok(events)
}

/// Parse NOC region mappings from any reader holding the CSV with its header row
pub fn read_noc_regions<R: Read>(reader: R) -> Result<Vec<NocRegion>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut regions = Vec::new();

    for row in csv_reader.deserialize::<RawNocRegion>() {
        let raw = row?;
        regions.push(NocRegion {
            noc: raw.noc.trim().to_string(),
            region: present(raw.region),
            notes: present(raw.notes),
        });
    }
    Ok(regions)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        DashboardError::Data {
            message: format!("cannot open {}", path.display()),
            line: None,
            source: Some(Box::new(e)),
        }
    })
}

/// Load `athlete_events.csv`
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_athlete_events(path: impl AsRef<Path>) -> Result<Vec<AthleteEvent>> {
    let events = read_athlete_events(open(path.as_ref())?)?;
    info!(rows = events.len(), "Loaded athlete events");
    Ok(events)
}

/// Load `noc_regions.csv`
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_noc_regions(path: impl AsRef<Path>) -> Result<Vec<NocRegion>> {
    let regions = read_noc_regions(open(path.as_ref())?)?;
    info!(rows = regions.len(), "Loaded NOC regions");
    Ok(regions)
}
