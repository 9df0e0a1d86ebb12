//! Ordered row collections and the filters the figures are built from

use crate::model::{OlympicRecord, Sex};
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;

/// An ordered collection of cleaned records.
///
/// Rows are shared, so filtering copies pointers, never records. Every
/// filter keeps the input order.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    rows: Vec<Arc<OlympicRecord>>,
}

impl Frame {
    pub fn new(records: Vec<OlympicRecord>) -> Self {
        Self {
            rows: records.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OlympicRecord> + '_ {
        self.rows.iter().map(|row| row.as_ref())
    }

    /// Rows matching `predicate`
    pub fn filter(&self, predicate: impl Fn(&OlympicRecord) -> bool) -> Self {
        Self {
            rows: self
                .rows
                .iter()
                .filter(|row| predicate(row))
                .cloned()
                .collect(),
        }
    }

    /// Rows whose NOC is one of `nocs`
    pub fn with_nocs<S: AsRef<str>>(&self, nocs: &[S]) -> Self {
        self.filter(|r| nocs.iter().any(|noc| noc.as_ref() == r.noc))
    }

    pub fn with_noc(&self, noc: &str) -> Self {
        self.filter(|r| r.noc == noc)
    }

    pub fn with_team(&self, team: &str) -> Self {
        self.filter(|r| r.team == team)
    }

    pub fn in_sport(&self, sport: &str) -> Self {
        self.filter(|r| r.sport == sport)
    }

    pub fn with_sex(&self, sex: Sex) -> Self {
        self.filter(|r| r.sex == Some(sex))
    }

    /// Rows with a medal
    pub fn medalists(&self) -> Self {
        self.filter(OlympicRecord::has_medal)
    }

    pub fn in_year(&self, year: i32) -> Self {
        self.filter(|r| r.year == year)
    }

    /// Rows with `first <= year <= last`
    pub fn years_between(&self, first: i32, last: i32) -> Self {
        self.filter(|r| (first..=last).contains(&r.year))
    }

    /// Known ages, in row order
    pub fn ages(&self) -> Vec<f64> {
        self.iter().filter_map(|r| r.age).map(f64::from).collect()
    }

    /// Known heights in centimetres, in row order
    pub fn heights(&self) -> Vec<f64> {
        self.iter().filter_map(|r| r.height).collect()
    }

    /// Known weights in kilograms, in row order
    pub fn weights(&self) -> Vec<f64> {
        self.iter().filter_map(|r| r.weight).collect()
    }

    /// Distinct sports, sorted by name
    pub fn sports(&self) -> Vec<String> {
        self.iter()
            .map(|r| r.sport.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn has_sport(&self, sport: &str) -> bool {
        self.iter().any(|r| r.sport == sport)
    }

    /// Number of distinct participants, compared by name or digest
    pub fn distinct_names(&self) -> usize {
        self.iter()
            .map(|r| r.name.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }

    pub fn medal_count(&self) -> usize {
        self.iter().filter(|r| r.has_medal()).count()
    }
}

impl FromIterator<OlympicRecord> for Frame {
    fn from_iter<I: IntoIterator<Item = OlympicRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Serialize for Frame {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
