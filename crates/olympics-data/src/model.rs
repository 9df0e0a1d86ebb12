//! Row types for the Olympic history datasets

use serde::{Deserialize, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Athlete sex as recorded in the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sex {
    M,
    F,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::M => "M",
            Self::F => "F",
        }
    }

    /// Display order used by every sex split
    pub fn all() -> [Self; 2] {
        [Self::M, Self::F]
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Self::M),
            "F" => Ok(Self::F),
            other => Err(format!("unknown sex '{other}'")),
        }
    }
}

/// Summer or Winter Games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Season {
    Summer,
    Winter,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summer => "Summer",
            Self::Winter => "Winter",
        }
    }

    pub fn all() -> [Self; 2] {
        [Self::Summer, Self::Winter]
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Summer" => Ok(Self::Summer),
            "Winter" => Ok(Self::Winter),
            other => Err(format!("unknown season '{other}'")),
        }
    }
}

/// Medal awarded for an entry. Ordered for display: Gold first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gold => "Gold",
            Self::Silver => "Silver",
            Self::Bronze => "Bronze",
        }
    }

    pub fn all() -> [Self; 3] {
        [Self::Gold, Self::Silver, Self::Bronze]
    }
}

impl FromStr for Medal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Gold" => Ok(Self::Gold),
            "Silver" => Ok(Self::Silver),
            "Bronze" => Ok(Self::Bronze),
            other => Err(format!("unknown medal '{other}'")),
        }
    }
}

macro_rules! impl_display_as_str {
    ($($ty:ty),+) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })+
    };
}

impl_display_as_str!(Sex, Season, Medal);

/// One row of `athlete_events.csv`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AthleteEvent {
    pub id: u64,
    pub name: Option<String>,
    pub sex: Option<Sex>,
    pub age: Option<u32>,
    /// Centimetres
    pub height: Option<f64>,
    /// Kilograms
    pub weight: Option<f64>,
    pub team: String,
    pub noc: Option<String>,
    pub games: String,
    pub year: i32,
    pub season: Season,
    pub city: String,
    pub sport: String,
    pub event: String,
    pub medal: Option<Medal>,
}

/// One row of `noc_regions.csv`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NocRegion {
    pub noc: String,
    pub region: Option<String>,
    pub notes: Option<String>,
}

/// Lowercase hex SHA-256 of an athlete name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NameDigest(String);

impl NameDigest {
    /// Digest of the UTF-8 bytes of `name`
    pub fn of(name: &str) -> Self {
        Self(format!("{:x}", Sha256::digest(name.as_bytes())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NameDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Athlete name, either as recorded or replaced by its digest
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AthleteName {
    Plain(String),
    Hashed(NameDigest),
}

impl AthleteName {
    /// The name or digest text; equal text means the same participant
    pub fn as_str(&self) -> &str {
        match self {
            Self::Plain(name) => name,
            Self::Hashed(digest) => digest.as_str(),
        }
    }

    pub fn is_hashed(&self) -> bool {
        matches!(self, Self::Hashed(_))
    }

    /// Replace a plain name by its digest. Hashed names stay as they are.
    pub fn hashed(self) -> Self {
        match self {
            Self::Plain(name) => Self::Hashed(NameDigest::of(&name)),
            hashed @ Self::Hashed(_) => hashed,
        }
    }
}

impl Serialize for AthleteName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// An athlete event after the region join, before cleaning
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedRow {
    pub event: AthleteEvent,
    pub region: Option<String>,
    pub notes: Option<String>,
}

/// A joined and cleaned row: NOC, region and name are always present
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OlympicRecord {
    pub id: u64,
    pub name: AthleteName,
    pub sex: Option<Sex>,
    pub age: Option<u32>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub team: String,
    pub noc: String,
    pub games: String,
    pub year: i32,
    pub season: Season,
    pub city: String,
    pub sport: String,
    pub event: String,
    pub medal: Option<Medal>,
    pub region: String,
    pub notes: Option<String>,
}

impl OlympicRecord {
    pub fn has_medal(&self) -> bool {
        self.medal.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medal_display_order() {
        let mut medals = vec![Medal::Bronze, Medal::Gold, Medal::Silver];
        medals.sort();
        assert_eq!(medals, Medal::all());
    }

    #[test]
    fn test_parse_enums() {
        assert_eq!("F".parse::<Sex>().unwrap(), Sex::F);
        assert_eq!("Winter".parse::<Season>().unwrap(), Season::Winter);
        assert_eq!("Bronze".parse::<Medal>().unwrap(), Medal::Bronze);
        assert!("gold".parse::<Medal>().is_err());
        assert!("X".parse::<Sex>().is_err());
    }

    #[test]
    fn test_known_digest() {
        // sha256("abc")
        assert_eq!(
            NameDigest::of("abc").as_str(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_hashing_is_idempotent() {
        let once = AthleteName::Plain("Jens Weissflog".to_string()).hashed();
        let twice = once.clone().hashed();
        assert!(once.is_hashed());
        assert_eq!(once, twice);
        assert_eq!(once.as_str().len(), 64);
    }

    #[test]
    fn test_name_serializes_as_text() {
        let name = AthleteName::Plain("Anna".to_string());
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Anna\"");
    }
}
