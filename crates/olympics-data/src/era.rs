//! Year bands that make East, West and unified Germany comparable

use crate::model::OlympicRecord;
use serde::{Deserialize, Serialize};

/// A NOC together with an inclusive range of Games years
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EraBand {
    pub noc: String,
    pub first_year: i32,
    pub last_year: i32,
    pub label: String,
}

impl EraBand {
    pub fn new(noc: &str, first_year: i32, last_year: i32, label: &str) -> Self {
        Self {
            noc: noc.to_string(),
            first_year,
            last_year,
            label: label.to_string(),
        }
    }

    /// NOC matches and `first_year <= year <= last_year`
    pub fn contains(&self, record: &OlympicRecord) -> bool {
        record.noc == self.noc && (self.first_year..=self.last_year).contains(&record.year)
    }

    /// West, East, then unified Germany
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("FRG", 1968, 1988, "West Germany (FRG, 1968-1988)"),
            Self::new("GDR", 1968, 1988, "East Germany (GDR, 1968-1988)"),
            Self::new("GER", 1956, 1996, "Germany (1956-1996)"),
        ]
    }
}
