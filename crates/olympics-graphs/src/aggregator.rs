//! Aggregations behind every dashboard figure
//!
//! Each function is a filter, group and count (or mean) over a [`Frame`].
//! Results are plain serializable structs so they can be charted and
//! served as JSON alike.

use crate::bins::{mean, Histogram};
use olympics_data::{EraBand, Frame, Medal, Season, Sex};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::{debug, instrument};

/// Bins used for every age histogram
pub const AGE_BINS: usize = 20;

/// Bins used for the weight and height histograms
pub const BODY_BINS: usize = 15;

/// A named count, used by every "top N" ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// Sort counts descending, ties by name ascending, and keep the first `top_n`
fn rank(counts: HashMap<String, usize>, top_n: usize) -> Vec<CategoryCount> {
    let mut ranked: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(name, count)| CategoryCount { name, count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    ranked.truncate(top_n);
    ranked
}

fn count_by<'a>(keys: impl Iterator<Item = &'a str>) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for key in keys {
        *counts.entry(key.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Medal rows grouped by sport, most medals first
#[instrument(skip_all, fields(rows = frame.len(), top_n))]
pub fn medals_per_sport(frame: &Frame, top_n: usize) -> Vec<CategoryCount> {
    let medalists = frame.medalists();
    let ranked = rank(count_by(medalists.iter().map(|r| r.sport.as_str())), top_n);
    debug!(sports = ranked.len(), "Ranked sports by medals");
    ranked
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearNocCount {
    pub year: i32,
    pub noc: String,
    pub medals: usize,
}

/// Medals per (year, NOC) for `nocs`.
///
/// A team event awards one medal per athlete row, so rows are first reduced
/// to distinct (year, event, medal, NOC) before counting.
#[instrument(skip_all, fields(rows = frame.len()))]
pub fn medals_per_year<S: AsRef<str>>(frame: &Frame, nocs: &[S]) -> Vec<YearNocCount> {
    let medalists = frame.with_nocs(nocs).medalists();

    let distinct: BTreeSet<(i32, &str, Medal, &str)> = medalists
        .iter()
        .filter_map(|r| Some((r.year, r.event.as_str(), r.medal?, r.noc.as_str())))
        .collect();

    let mut counts: BTreeMap<(i32, &str), usize> = BTreeMap::new();
    for (year, _, _, noc) in &distinct {
        *counts.entry((*year, noc)).or_insert(0) += 1;
    }

    debug!(medals = distinct.len(), groups = counts.len(), "Counted medals per year");
    counts
        .into_iter()
        .map(|((year, noc), medals)| YearNocCount {
            year,
            noc: noc.to_string(),
            medals,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantCount {
    pub year: i32,
    pub noc: String,
    pub season: Season,
    pub participants: usize,
}

/// Distinct athletes per (year, NOC, season), compared by name or digest
#[instrument(skip_all, fields(rows = frame.len()))]
pub fn participants_per_games(frame: &Frame) -> Vec<ParticipantCount> {
    let mut names: BTreeMap<(i32, &str, Season), BTreeSet<&str>> = BTreeMap::new();
    for record in frame.iter() {
        names
            .entry((record.year, record.noc.as_str(), record.season))
            .or_default()
            .insert(record.name.as_str());
    }

    names
        .into_iter()
        .map(|((year, noc, season), athletes)| ParticipantCount {
            year,
            noc: noc.to_string(),
            season,
            participants: athletes.len(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SexHistograms {
    pub male: Histogram,
    pub female: Histogram,
}

/// Age histograms of male and female rows that have an age
#[instrument(skip_all, fields(rows = frame.len(), bins))]
pub fn age_histograms_by_sex(frame: &Frame, bins: usize) -> SexHistograms {
    SexHistograms {
        male: Histogram::from_values(&frame.with_sex(Sex::M).ages(), bins),
        female: Histogram::from_values(&frame.with_sex(Sex::F).ages(), bins),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonCount {
    pub season: Season,
    pub medals: usize,
}

/// Medal rows of `nocs` per season. Seasons without medals are left out.
#[instrument(skip_all, fields(rows = frame.len()))]
pub fn medals_per_season<S: AsRef<str>>(frame: &Frame, nocs: &[S]) -> Vec<SeasonCount> {
    let medalists = frame.with_nocs(nocs).medalists();
    Season::all()
        .into_iter()
        .map(|season| SeasonCount {
            season,
            medals: medalists.iter().filter(|r| r.season == season).count(),
        })
        .filter(|count| count.medals > 0)
        .collect()
}

/// Male and female row counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SexCounts {
    pub male: usize,
    pub female: usize,
}

impl SexCounts {
    /// Rows with unknown sex are not counted
    pub fn of(frame: &Frame) -> Self {
        frame.iter().fold(Self::default(), |mut counts, record| {
            match record.sex {
                Some(Sex::M) => counts.male += 1,
                Some(Sex::F) => counts.female += 1,
                None => {}
            }
            counts
        })
    }

    pub fn total(&self) -> usize {
        self.male + self.female
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearSexSplit {
    pub noc: String,
    pub year: i32,
    pub counts: SexCounts,
}

/// NOCs compared in the division-era splits, West first
pub const DIVIDED_NOCS: [&str; 2] = ["FRG", "GDR"];

/// Sex counts for FRG then GDR in each of `years`. A NOC that did not
/// compete in a year gets zero counts.
#[instrument(skip_all, fields(rows = frame.len(), years = years.len()))]
pub fn sex_split_by_year(frame: &Frame, years: &[i32]) -> Vec<YearSexSplit> {
    DIVIDED_NOCS
        .iter()
        .flat_map(|noc| {
            let rows = frame.with_noc(noc);
            years.iter().map(move |&year| YearSexSplit {
                noc: noc.to_string(),
                year,
                counts: SexCounts::of(&rows.in_year(year)),
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EraSexSplit {
    pub band: EraBand,
    pub counts: SexCounts,
}

/// Sex counts of the rows inside each era band
#[instrument(skip_all, fields(rows = frame.len(), bands = bands.len()))]
pub fn sex_split_by_era(frame: &Frame, bands: &[EraBand]) -> Vec<EraSexSplit> {
    bands
        .iter()
        .map(|band| EraSexSplit {
            band: band.clone(),
            counts: SexCounts::of(&frame.filter(|r| band.contains(r))),
        })
        .collect()
}

/// Per-year counts of one medal for East and West Germany
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MedalComparison {
    pub medal: Medal,
    pub east: Vec<usize>,
    pub west: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EastWestMedals {
    /// Sorted union of the years either NOC won a medal
    pub years: Vec<i32>,
    /// Gold, Silver, Bronze
    pub medals: Vec<MedalComparison>,
}

/// GDR against FRG medal counts per year and medal
#[instrument(skip_all, fields(rows = frame.len()))]
pub fn medals_east_vs_west(frame: &Frame) -> EastWestMedals {
    let tally = |noc: &str| {
        let mut counts: HashMap<(i32, Medal), usize> = HashMap::new();
        for record in frame.with_noc(noc).iter() {
            if let Some(medal) = record.medal {
                *counts.entry((record.year, medal)).or_insert(0) += 1;
            }
        }
        counts
    };
    let east = tally("GDR");
    let west = tally("FRG");

    let years: Vec<i32> = east
        .keys()
        .chain(west.keys())
        .map(|(year, _)| *year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let series = |counts: &HashMap<(i32, Medal), usize>, medal: Medal| -> Vec<usize> {
        years
            .iter()
            .map(|year| counts.get(&(*year, medal)).copied().unwrap_or(0))
            .collect()
    };

    let medals = Medal::all()
        .into_iter()
        .map(|medal| MedalComparison {
            medal,
            east: series(&east, medal),
            west: series(&west, medal),
        })
        .collect();

    EastWestMedals { years, medals }
}

/// Groups compared in the efficiency figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EfficiencyGroup {
    Men,
    Women,
    Global,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Efficiency {
    pub group: EfficiencyGroup,
    pub entries: usize,
    pub medals: usize,
    /// Medals per 100 entries; `None` without entries
    pub per_hundred: Option<f64>,
}

impl Efficiency {
    fn of(group: EfficiencyGroup, frame: &Frame) -> Self {
        let entries = frame.len();
        let medals = frame.medal_count();
        Self {
            group,
            entries,
            medals,
            per_hundred: (entries > 0).then(|| medals as f64 * 100.0 / entries as f64),
        }
    }
}

/// Medals per 100 entries for the country's men, its women and the global
/// field in `sport`
#[instrument(skip(global, country), fields(global = global.len(), country = country.len()))]
pub fn medal_efficiency(global: &Frame, country: &Frame, sport: &str) -> Vec<Efficiency> {
    let country = country.in_sport(sport);
    vec![
        Efficiency::of(EfficiencyGroup::Men, &country.with_sex(Sex::M)),
        Efficiency::of(EfficiencyGroup::Women, &country.with_sex(Sex::F)),
        Efficiency::of(EfficiencyGroup::Global, &global.in_sport(sport)),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NocMedals {
    pub noc: String,
    pub gold: usize,
    pub silver: usize,
    pub bronze: usize,
}

impl NocMedals {
    pub fn total(&self) -> usize {
        self.gold + self.silver + self.bronze
    }

    pub fn get(&self, medal: Medal) -> usize {
        match medal {
            Medal::Gold => self.gold,
            Medal::Silver => self.silver,
            Medal::Bronze => self.bronze,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MedalDistribution {
    pub sport: String,
    pub focus_noc: String,
    pub nocs: Vec<NocMedals>,
}

/// Medal breakdown of the `top_n` NOCs in `sport`. The focus NOC is always
/// shown: when it is not among the top it is appended, with zero counts if
/// it never medalled.
#[instrument(skip(frame), fields(rows = frame.len()))]
pub fn medal_distribution(
    frame: &Frame,
    sport: &str,
    focus_noc: &str,
    top_n: usize,
) -> MedalDistribution {
    let medalists = frame.in_sport(sport).medalists();

    let mut per_noc: HashMap<&str, NocMedals> = HashMap::new();
    for record in medalists.iter() {
        let entry = per_noc.entry(record.noc.as_str()).or_insert_with(|| NocMedals {
            noc: record.noc.clone(),
            gold: 0,
            silver: 0,
            bronze: 0,
        });
        match record.medal {
            Some(Medal::Gold) => entry.gold += 1,
            Some(Medal::Silver) => entry.silver += 1,
            Some(Medal::Bronze) => entry.bronze += 1,
            None => {}
        }
    }

    let focus = per_noc.get(focus_noc).cloned().unwrap_or_else(|| NocMedals {
        noc: focus_noc.to_string(),
        gold: 0,
        silver: 0,
        bronze: 0,
    });

    let mut nocs: Vec<NocMedals> = per_noc.into_values().collect();
    nocs.sort_by(|a, b| b.total().cmp(&a.total()).then_with(|| a.noc.cmp(&b.noc)));
    nocs.truncate(top_n);
    if !nocs.iter().any(|n| n.noc == focus_noc) {
        nocs.push(focus);
    }

    MedalDistribution {
        sport: sport.to_string(),
        focus_noc: focus_noc.to_string(),
        nocs,
    }
}

/// Age summary of one group of athletes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeGroup {
    pub athletes: usize,
    pub mean: Option<f64>,
    pub histogram: Histogram,
}

impl AgeGroup {
    fn of(frame: &Frame) -> Self {
        let ages = frame.ages();
        Self {
            athletes: ages.len(),
            mean: mean(&ages),
            histogram: Histogram::from_values(&ages, AGE_BINS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeBySex {
    pub sport: String,
    pub men: AgeGroup,
    pub women: AgeGroup,
    pub global: AgeGroup,
}

/// Ages of the country's men and women in `sport` next to the global field
#[instrument(skip(global, country), fields(global = global.len(), country = country.len()))]
pub fn age_by_sex_in_sport(global: &Frame, country: &Frame, sport: &str) -> AgeBySex {
    let country = country.in_sport(sport);
    AgeBySex {
        sport: sport.to_string(),
        men: AgeGroup::of(&country.with_sex(Sex::M)),
        women: AgeGroup::of(&country.with_sex(Sex::F)),
        global: AgeGroup::of(&global.in_sport(sport)),
    }
}

/// Medal ranking plus age histogram for a team or a sport
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedStats {
    /// Team name or sport
    pub subject: String,
    pub ranking: Vec<CategoryCount>,
    pub ages: Histogram,
}

/// Rows of `team`: medals per sport and all ages
#[instrument(skip(frame), fields(rows = frame.len()))]
pub fn stats_for_team(frame: &Frame, team: &str, top_n: usize) -> RankedStats {
    let rows = frame.with_team(team);
    let medalists = rows.medalists();
    RankedStats {
        subject: team.to_string(),
        ranking: rank(count_by(medalists.iter().map(|r| r.sport.as_str())), top_n),
        ages: Histogram::from_values(&rows.ages(), AGE_BINS),
    }
}

/// Rows in `sport`: medals per team and all ages
#[instrument(skip(frame), fields(rows = frame.len()))]
pub fn stats_for_sport(frame: &Frame, sport: &str, top_n: usize) -> RankedStats {
    let rows = frame.in_sport(sport);
    let medalists = rows.medalists();
    RankedStats {
        subject: sport.to_string(),
        ranking: rank(count_by(medalists.iter().map(|r| r.team.as_str())), top_n),
        ages: Histogram::from_values(&rows.ages(), AGE_BINS),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyMetrics {
    pub sport: String,
    pub medalists: usize,
    pub weight: Histogram,
    pub height: Histogram,
}

/// Weight and height histograms of the medal rows in `sport`
#[instrument(skip(frame), fields(rows = frame.len()))]
pub fn medalist_body_metrics(frame: &Frame, sport: &str) -> BodyMetrics {
    let medalists = frame.in_sport(sport).medalists();
    BodyMetrics {
        sport: sport.to_string(),
        medalists: medalists.len(),
        weight: Histogram::from_values(&medalists.weights(), BODY_BINS),
        height: Histogram::from_values(&medalists.heights(), BODY_BINS),
    }
}
