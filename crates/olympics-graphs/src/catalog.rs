//! The dashboard's figures, built from a dataset bundle

use crate::aggregator::{
    age_by_sex_in_sport, age_histograms_by_sex, medal_distribution, medal_efficiency,
    medalist_body_metrics, medals_east_vs_west, medals_per_season, medals_per_sport,
    medals_per_year, participants_per_games, sex_split_by_era, sex_split_by_year,
    stats_for_sport, stats_for_team, EfficiencyGroup, RankedStats, SexCounts, AGE_BINS,
};
use crate::bins::Histogram;
use crate::charts::{BarChart, BarSeries, HistogramChart, LineChart, PieChart};
use crate::figure::Figure;
use crate::palette;
use crate::{ColorScheme, StyleConfig};
use olympics_common::{DashboardError, Result};
use olympics_config::{Config, DashboardSettings, GraphSettings};
use olympics_data::{DatasetBundle, EraBand, Frame, Medal, Season, Sex, GERMANY_NOC, GERMAN_NOCS};
use olympics_i18n::Localizer;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use tracing::{info, instrument};

/// Every figure the dashboard can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum FigureId {
    TopSports,
    MedalsPerYear,
    Participants,
    AgeDistribution,
    SummerVsWinter,
    SexByYear,
    SexByEra,
    EastVsWest,
    MedalEfficiency,
    MedalDistribution,
    CountryStats,
    AgeBySex,
    SportStats,
    WeightHeight,
}

impl FigureId {
    /// Figures built once at start-up, in page order
    pub const STATIC: [Self; 11] = [
        Self::TopSports,
        Self::MedalsPerYear,
        Self::Participants,
        Self::AgeDistribution,
        Self::SummerVsWinter,
        Self::SexByYear,
        Self::SexByEra,
        Self::EastVsWest,
        Self::MedalEfficiency,
        Self::MedalDistribution,
        Self::CountryStats,
    ];

    /// Figures rebuilt for every sport selection
    pub const SPORT: [Self; 3] = [Self::AgeBySex, Self::SportStats, Self::WeightHeight];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TopSports => "top-sports",
            Self::MedalsPerYear => "medals-per-year",
            Self::Participants => "participants",
            Self::AgeDistribution => "age-distribution",
            Self::SummerVsWinter => "summer-vs-winter",
            Self::SexByYear => "sex-by-year",
            Self::SexByEra => "sex-by-era",
            Self::EastVsWest => "east-vs-west",
            Self::MedalEfficiency => "medal-efficiency",
            Self::MedalDistribution => "medal-distribution",
            Self::CountryStats => "country-stats",
            Self::AgeBySex => "age-by-sex",
            Self::SportStats => "sport-stats",
            Self::WeightHeight => "weight-height",
        }
    }

    pub fn is_sport_figure(&self) -> bool {
        Self::SPORT.contains(self)
    }
}

impl From<FigureId> for &'static str {
    fn from(id: FigureId) -> Self {
        id.as_str()
    }
}

impl fmt::Display for FigureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FigureId {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        Self::STATIC
            .into_iter()
            .chain(Self::SPORT)
            .find(|id| id.as_str() == s)
            .ok_or_else(|| DashboardError::not_found(format!("figure '{s}'")))
    }
}

/// A built figure together with the aggregate it was drawn from
#[derive(Debug, Clone, Serialize)]
pub struct DashboardFigure {
    pub id: FigureId,
    pub figure: Figure,
    pub data: serde_json::Value,
}

impl DashboardFigure {
    fn new(id: FigureId, figure: Figure, data: &impl Serialize) -> Result<Self> {
        Ok(Self {
            id,
            figure,
            data: serde_json::to_value(data)?,
        })
    }

    pub fn title(&self) -> &str {
        &self.figure.title
    }

    pub fn render_svg(&self) -> Result<String> {
        self.figure.render_svg()
    }
}

/// Builds figures with the configured focus country, sizes and labels
#[derive(Debug)]
pub struct FigureCatalog {
    settings: DashboardSettings,
    style: StyleConfig,
    size: (u32, u32),
    bands: Vec<EraBand>,
    localizer: Localizer,
}

impl FigureCatalog {
    pub fn new(settings: DashboardSettings, graph: &GraphSettings, localizer: Localizer) -> Self {
        let mut style = StyleConfig::from(graph);
        style.no_data_label = localizer.text("no-data");
        style.missing_value_label = localizer.text("value-missing");

        Self {
            settings,
            style,
            size: (graph.width, graph.height),
            bands: EraBand::defaults(),
            localizer,
        }
    }

    /// Catalog for the dashboard and graph sections of `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        let localizer = Localizer::for_code(&config.dashboard.locale)?;
        Ok(Self::new(config.dashboard.clone(), &config.graph, localizer))
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    pub fn localizer(&self) -> &Localizer {
        &self.localizer
    }

    /// Build every static figure in page order
    #[instrument(skip_all)]
    pub fn static_figures(&self, bundle: &DatasetBundle) -> Result<Vec<DashboardFigure>> {
        let figures = FigureId::STATIC
            .into_iter()
            .map(|id| self.build(id, bundle, None))
            .collect::<Result<Vec<_>>>()?;
        info!(count = figures.len(), "Built static figures");
        Ok(figures)
    }

    /// Build the sport figures for `sport`; unknown sports are not found
    #[instrument(skip(self, bundle))]
    pub fn sport_figures(&self, bundle: &DatasetBundle, sport: &str) -> Result<Vec<DashboardFigure>> {
        if !bundle.all.has_sport(sport) {
            return Err(DashboardError::not_found(format!("sport '{sport}'")));
        }
        FigureId::SPORT
            .into_iter()
            .map(|id| self.build(id, bundle, Some(sport)))
            .collect()
    }

    /// Build one figure. Sport figures use `sport`, or the default sport.
    #[instrument(skip(self, bundle))]
    pub fn build(
        &self,
        id: FigureId,
        bundle: &DatasetBundle,
        sport: Option<&str>,
    ) -> Result<DashboardFigure> {
        let sport = sport.unwrap_or(&self.settings.default_sport);
        match id {
            FigureId::TopSports => self.top_sports(bundle),
            FigureId::MedalsPerYear => self.medals_per_year(bundle),
            FigureId::Participants => self.participants(bundle),
            FigureId::AgeDistribution => self.age_distribution(bundle),
            FigureId::SummerVsWinter => self.summer_vs_winter(bundle),
            FigureId::SexByYear => self.sex_by_year(bundle),
            FigureId::SexByEra => self.sex_by_era(bundle),
            FigureId::EastVsWest => self.east_vs_west(bundle),
            FigureId::MedalEfficiency => self.medal_efficiency(bundle),
            FigureId::MedalDistribution => self.medal_distribution(bundle),
            FigureId::CountryStats => self.country_stats(bundle),
            FigureId::AgeBySex => self.age_by_sex(bundle, sport),
            FigureId::SportStats => self.sport_stats(bundle, sport),
            FigureId::WeightHeight => self.weight_height(bundle, sport),
        }
    }

    fn text(&self, id: &str) -> String {
        self.localizer.text(id)
    }

    fn text_with(&self, id: &str, args: &[(&str, String)]) -> String {
        self.localizer.text_with(id, args)
    }

    fn figure(&self, title: String) -> Figure {
        Figure::new(title, self.size, &self.style)
    }

    fn sex_label(&self, sex: Sex) -> String {
        self.text(match sex {
            Sex::M => "sex-male",
            Sex::F => "sex-female",
        })
    }

    fn season_label(&self, season: Season) -> String {
        self.text(match season {
            Season::Summer => "season-summer",
            Season::Winter => "season-winter",
        })
    }

    fn medal_label(&self, medal: Medal) -> String {
        self.text(match medal {
            Medal::Gold => "medal-gold",
            Medal::Silver => "medal-silver",
            Medal::Bronze => "medal-bronze",
        })
    }

    fn sex_pie(&self, counts: SexCounts) -> PieChart {
        PieChart::new()
            .slice(self.sex_label(Sex::M), counts.male as f64, palette::sex_slice_color(Sex::M))
            .slice(self.sex_label(Sex::F), counts.female as f64, palette::sex_slice_color(Sex::F))
    }

    /// Horizontal ranking next to an age histogram
    fn ranked_figure(
        &self,
        title: String,
        stats: &RankedStats,
        (ranking_title, category_axis): (String, String),
        ages_title: String,
    ) -> Figure {
        let bars = BarChart::new(stats.ranking.iter().map(|c| c.name.clone()).collect())
            .series(BarSeries::new(
                self.text("axis-medals"),
                stats.ranking.iter().map(|c| c.count as f64).collect(),
                palette::STEELBLUE,
            ))
            .horizontal()
            .axes(self.text("axis-medals"), category_axis);
        let ages = HistogramChart::new(self.text("axis-age"), self.text("axis-athletes")).layer(
            self.text("axis-age"),
            stats.ages.clone(),
            palette::SKYBLUE,
        );

        self.figure(title)
            .grid(1, 2)
            .panel(ranking_title, bars)
            .panel(ages_title, ages)
    }

    /// Rows of the configured focus NOC
    fn focus_rows<'b>(&self, bundle: &'b DatasetBundle) -> Cow<'b, Frame> {
        if self.settings.noc == GERMANY_NOC {
            Cow::Borrowed(&bundle.germany)
        } else {
            Cow::Owned(bundle.all.with_noc(&self.settings.noc))
        }
    }

    fn top_sports(&self, bundle: &DatasetBundle) -> Result<DashboardFigure> {
        let top_n = self.settings.top_n;
        let top = medals_per_sport(&self.focus_rows(bundle), top_n);

        let chart = BarChart::new(top.iter().map(|c| c.name.clone()).collect())
            .series(BarSeries::new(
                self.text("axis-medals"),
                top.iter().map(|c| c.count as f64).collect(),
                palette::VIRIDIS[0],
            ))
            .color_by_category(ColorScheme::Viridis)
            .axes(self.text("axis-sport"), self.text("axis-medals"));

        let title = if self.settings.noc == GERMANY_NOC {
            self.text_with("top-sports-title", &[("n", top_n.to_string())])
        } else {
            self.text_with(
                "top-sports-title-country",
                &[("n", top_n.to_string()), ("country", self.settings.country.clone())],
            )
        };
        let figure = self.figure(title).panel("", chart);
        DashboardFigure::new(FigureId::TopSports, figure, &top)
    }

    fn medals_per_year(&self, bundle: &DatasetBundle) -> Result<DashboardFigure> {
        let counts = medals_per_year(&bundle.all, &GERMAN_NOCS);

        let years: Vec<i32> = counts.iter().map(|c| c.year).collect::<BTreeSet<_>>().into_iter().collect();
        let nocs: BTreeSet<&str> = counts.iter().map(|c| c.noc.as_str()).collect();

        let mut chart = BarChart::new(years.iter().map(i32::to_string).collect())
            .axes(self.text("axis-year"), self.text("axis-medals"))
            .with_legend();
        for (i, noc) in nocs.iter().enumerate() {
            let values = years
                .iter()
                .map(|year| {
                    counts
                        .iter()
                        .find(|c| c.year == *year && c.noc == *noc)
                        .map_or(0.0, |c| c.medals as f64)
                })
                .collect();
            chart = chart.series(BarSeries::new(*noc, values, palette::category_color(i)));
        }

        let figure = self.figure(self.text("medals-per-year-title")).panel("", chart);
        DashboardFigure::new(FigureId::MedalsPerYear, figure, &counts)
    }

    fn participants(&self, bundle: &DatasetBundle) -> Result<DashboardFigure> {
        let counts = participants_per_games(&bundle.germany_all);
        let nocs: Vec<&str> = counts
            .iter()
            .map(|c| c.noc.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut chart = LineChart::new(self.text("axis-year"), self.text("axis-participants"));
        for (i, noc) in nocs.iter().enumerate() {
            for season in Season::all() {
                let points: Vec<(f64, f64)> = counts
                    .iter()
                    .filter(|c| c.noc == *noc && c.season == season)
                    .map(|c| (f64::from(c.year), c.participants as f64))
                    .collect();
                if points.is_empty() {
                    continue;
                }
                let name = format!("{noc} {}", self.season_label(season));
                chart = chart.series(name, points, palette::category_color(i), season == Season::Winter);
            }
        }

        let figure = self.figure(self.text("participants-title")).panel("", chart);
        DashboardFigure::new(FigureId::Participants, figure, &counts)
    }

    fn age_distribution(&self, bundle: &DatasetBundle) -> Result<DashboardFigure> {
        let hist = age_histograms_by_sex(&self.focus_rows(bundle), AGE_BINS);
        let panel = |histogram: Histogram, color: &str| {
            HistogramChart::new(self.text("axis-age"), self.text("axis-athletes"))
                .layer(self.text("axis-athletes"), histogram, color)
                .with_opacity(0.75)
        };

        let figure = self
            .figure(self.text("age-distribution-title"))
            .grid(1, 2)
            .panel(self.text("panel-male-athletes"), panel(hist.male.clone(), palette::STEELBLUE))
            .panel(self.text("panel-female-athletes"), panel(hist.female.clone(), palette::HOTPINK));
        DashboardFigure::new(FigureId::AgeDistribution, figure, &hist)
    }

    fn summer_vs_winter(&self, bundle: &DatasetBundle) -> Result<DashboardFigure> {
        let seasons = medals_per_season(&bundle.all, &GERMAN_NOCS);

        let chart = BarChart::new(seasons.iter().map(|s| self.season_label(s.season)).collect())
            .series(BarSeries::new(
                self.text("axis-medals"),
                seasons.iter().map(|s| s.medals as f64).collect(),
                palette::SET1[0],
            ))
            .color_by_category(ColorScheme::Custom(
                seasons.iter().map(|s| palette::season_color(s.season).to_string()).collect(),
            ))
            .axes(self.text("axis-season"), self.text("axis-medals"));

        let (width, height) = self.size;
        let figure = Figure::new(self.text("summer-vs-winter-title"), (width * 7 / 10, height * 4 / 5), &self.style)
            .panel("", chart);
        DashboardFigure::new(FigureId::SummerVsWinter, figure, &seasons)
    }

    fn sex_by_year(&self, bundle: &DatasetBundle) -> Result<DashboardFigure> {
        let years = &self.settings.division_years;
        let splits = sex_split_by_year(&bundle.germany_all, years);

        let (width, height) = self.size;
        let size = (width.max(300 * years.len() as u32), height * 6 / 5);
        let mut figure = Figure::new(self.text("sex-by-year-title"), size, &self.style)
            .grid(2, years.len());
        for (i, split) in splits.iter().enumerate() {
            let title = self.text_with(
                "panel-noc-year",
                &[("noc", split.noc.clone()), ("year", split.year.to_string())],
            );
            let pie = self.sex_pie(split.counts);
            figure = figure.panel(title, if i == 0 { pie.with_legend() } else { pie });
        }
        DashboardFigure::new(FigureId::SexByYear, figure, &splits)
    }

    fn sex_by_era(&self, bundle: &DatasetBundle) -> Result<DashboardFigure> {
        let splits = sex_split_by_era(&bundle.all, &self.bands);

        let mut figure = self.figure(self.text("sex-by-era-title")).grid(1, splits.len());
        for split in &splits {
            figure = figure.panel(split.band.label.clone(), self.sex_pie(split.counts).with_legend());
        }
        DashboardFigure::new(FigureId::SexByEra, figure, &splits)
    }

    fn east_vs_west(&self, bundle: &DatasetBundle) -> Result<DashboardFigure> {
        let medals = medals_east_vs_west(&bundle.all);
        let years: Vec<String> = medals.years.iter().map(i32::to_string).collect();

        let (width, height) = self.size;
        let mut figure = Figure::new(self.text("east-vs-west-title"), (width * 6 / 5, height), &self.style)
            .grid(1, medals.medals.len());
        for (i, comparison) in medals.medals.iter().enumerate() {
            let as_f64 = |counts: &[usize]| -> Vec<f64> { counts.iter().map(|&c| c as f64).collect() };
            let mut chart = BarChart::new(years.clone())
                .series(BarSeries::new(self.text("legend-east"), as_f64(&comparison.east), palette::GREEN))
                .series(BarSeries::new(self.text("legend-west"), as_f64(&comparison.west), palette::RED))
                .axes(self.text("axis-year"), self.text("axis-medals"));
            if i == 0 {
                chart = chart.with_legend();
            }
            let title = self.text_with("panel-medal", &[("medal", self.medal_label(comparison.medal))]);
            figure = figure.panel(title, chart);
        }
        DashboardFigure::new(FigureId::EastVsWest, figure, &medals)
    }

    fn medal_efficiency(&self, bundle: &DatasetBundle) -> Result<DashboardFigure> {
        let sport = &self.settings.efficiency_sport;
        let country = &self.settings.country;
        let groups = medal_efficiency(&bundle.all, &self.focus_rows(bundle), sport);

        let names = groups
            .iter()
            .map(|g| match g.group {
                EfficiencyGroup::Men => self.text_with("group-men", &[("country", country.clone())]),
                EfficiencyGroup::Women => {
                    self.text_with("group-women", &[("country", country.clone())])
                }
                EfficiencyGroup::Global => self.text("group-global"),
            })
            .collect();
        let values: Vec<Option<f64>> = groups.iter().map(|g| g.per_hundred).collect();
        let highest = values.iter().flatten().copied().fold(0.0, f64::max);

        let mut chart = BarChart::new(names)
            .series(BarSeries::optional(self.text("axis-efficiency"), values, palette::BLACK))
            .color_by_category(ColorScheme::Custom(vec![
                palette::BLACK.to_string(),
                palette::ORANGE.to_string(),
                palette::SKYBLUE.to_string(),
            ]))
            .axes("", self.text("axis-efficiency"))
            .with_value_labels();
        if highest > 0.0 {
            chart = chart.with_value_range(0.0, highest * 1.2);
        }

        let title = self.text_with(
            "efficiency-title",
            &[("country", country.clone()), ("sport", sport.clone())],
        );
        let figure = self.figure(title).panel("", chart);
        DashboardFigure::new(FigureId::MedalEfficiency, figure, &groups)
    }

    fn medal_distribution(&self, bundle: &DatasetBundle) -> Result<DashboardFigure> {
        let sport = &self.settings.efficiency_sport;
        let dist = medal_distribution(&bundle.all, sport, &self.settings.noc, self.settings.top_n);

        let mut chart = BarChart::new(dist.nocs.iter().map(|n| n.noc.clone()).collect())
            .axes(self.text("axis-noc"), self.text("axis-medals"))
            .stacked()
            .with_legend();
        for medal in Medal::all() {
            let values = dist.nocs.iter().map(|n| n.get(medal) as f64).collect();
            chart = chart.series(BarSeries::new(self.medal_label(medal), values, palette::medal_color(medal)));
        }

        let title = self.text_with("medal-distribution-title", &[("sport", sport.clone())]);
        let figure = self.figure(title).panel("", chart);
        DashboardFigure::new(FigureId::MedalDistribution, figure, &dist)
    }

    fn country_stats(&self, bundle: &DatasetBundle) -> Result<DashboardFigure> {
        let country = &self.settings.country;
        let top_n = self.settings.top_n;
        let stats = stats_for_team(&bundle.all, country, top_n);

        let figure = self.ranked_figure(
            self.text_with("country-stats-title", &[("country", country.clone())]),
            &stats,
            (
                self.text_with(
                    "panel-top-sports",
                    &[("n", top_n.to_string()), ("country", country.clone())],
                ),
                self.text("axis-sport"),
            ),
            self.text_with("panel-athlete-ages", &[("name", country.clone())]),
        );
        DashboardFigure::new(FigureId::CountryStats, figure, &stats)
    }

    fn age_by_sex(&self, bundle: &DatasetBundle, sport: &str) -> Result<DashboardFigure> {
        let country = &self.settings.country;
        let ages = age_by_sex_in_sport(&bundle.all, &self.focus_rows(bundle), sport);

        let caption = |group: &str, mean: Option<f64>| {
            let value = mean.map_or_else(|| self.text("value-missing"), |m| format!("{m:.1}"));
            self.text_with("mean-caption", &[("group", self.text(group)), ("value", value)])
        };

        let country_panel = HistogramChart::new(self.text("axis-age"), self.text("axis-contenders-percent"))
            .layer(self.text("legend-men"), ages.men.histogram.clone(), palette::BLACK)
            .layer(self.text("legend-women"), ages.women.histogram.clone(), palette::ORANGE)
            .mean_line(ages.men.mean, palette::BLACK, caption("legend-men", ages.men.mean))
            .mean_line(ages.women.mean, palette::ORANGE, caption("legend-women", ages.women.mean))
            .with_opacity(0.5)
            .as_percent()
            .with_legend();
        let global_panel = HistogramChart::new(self.text("axis-age"), self.text("axis-contenders-percent"))
            .layer(self.text("legend-global"), ages.global.histogram.clone(), palette::SKYBLUE)
            .mean_line(ages.global.mean, palette::BLUE, caption("legend-global", ages.global.mean))
            .as_percent()
            .with_legend();

        let sport_arg = ("sport", sport.to_string());
        let country_arg = ("country", country.clone());
        let figure = self
            .figure(self.text_with("age-by-sex-title", &[country_arg.clone(), sport_arg.clone()]))
            .grid(1, 2)
            .panel(self.text_with("panel-country-age", &[country_arg, sport_arg.clone()]), country_panel)
            .panel(self.text_with("panel-global-age", &[sport_arg]), global_panel);
        DashboardFigure::new(FigureId::AgeBySex, figure, &ages)
    }

    fn sport_stats(&self, bundle: &DatasetBundle, sport: &str) -> Result<DashboardFigure> {
        let top_n = self.settings.top_n;
        let stats = stats_for_sport(&bundle.all, sport, top_n);

        let figure = self.ranked_figure(
            self.text_with("sport-stats-title", &[("sport", sport.to_string())]),
            &stats,
            (
                self.text_with(
                    "panel-top-countries",
                    &[("n", top_n.to_string()), ("sport", sport.to_string())],
                ),
                self.text("axis-country"),
            ),
            self.text_with("panel-athlete-ages", &[("name", sport.to_string())]),
        );
        DashboardFigure::new(FigureId::SportStats, figure, &stats)
    }

    fn weight_height(&self, bundle: &DatasetBundle, sport: &str) -> Result<DashboardFigure> {
        let metrics = medalist_body_metrics(&bundle.all, sport);
        let sport_arg = [("sport", sport.to_string())];

        let weight = HistogramChart::new(self.text("axis-weight"), self.text("axis-medals"))
            .layer(self.text("axis-weight"), metrics.weight.clone(), palette::SKYBLUE);
        let height = HistogramChart::new(self.text("axis-height"), self.text("axis-medals"))
            .layer(self.text("axis-height"), metrics.height.clone(), palette::LIGHTGREEN);

        let figure = self
            .figure(self.text_with("weight-height-title", &sport_arg))
            .grid(1, 2)
            .panel(self.text_with("panel-weight", &sport_arg), weight)
            .panel(self.text_with("panel-height", &sport_arg), height);
        DashboardFigure::new(FigureId::WeightHeight, figure, &metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use olympics_common::test_utils::{ATHLETE_EVENTS_CSV, NOC_REGIONS_CSV};
    use olympics_i18n::Locale;

    fn bundle() -> DatasetBundle {
        DatasetBundle::from_readers(ATHLETE_EVENTS_CSV.as_bytes(), NOC_REGIONS_CSV.as_bytes())
            .unwrap()
    }

    fn catalog(locale: Locale) -> FigureCatalog {
        FigureCatalog::new(
            DashboardSettings::default(),
            &GraphSettings::default(),
            Localizer::new(locale).unwrap(),
        )
    }

    #[test]
    fn test_figure_ids_round_trip() {
        for id in FigureId::STATIC.into_iter().chain(FigureId::SPORT) {
            assert_eq!(id.as_str().parse::<FigureId>().unwrap(), id);
        }
        assert!("no-such-figure".parse::<FigureId>().unwrap_err().is_not_found());
        assert!(FigureId::WeightHeight.is_sport_figure());
        assert!(!FigureId::CountryStats.is_sport_figure());
        assert_eq!(serde_json::to_string(&FigureId::TopSports).unwrap(), "\"top-sports\"");
    }

    #[test]
    fn test_static_figures_in_page_order() {
        let figures = catalog(Locale::English).static_figures(&bundle()).unwrap();
        let ids: Vec<FigureId> = figures.iter().map(|f| f.id).collect();
        assert_eq!(ids, FigureId::STATIC.to_vec());
    }

    #[test]
    fn test_titles_are_localized() {
        let b = bundle();
        let english = catalog(Locale::English).build(FigureId::TopSports, &b, None).unwrap();
        assert_eq!(english.title(), "Top 10 German Sports by Medal Count");

        let efficiency = catalog(Locale::English)
            .build(FigureId::MedalEfficiency, &b, None)
            .unwrap();
        assert_eq!(efficiency.title(), "Germany - Medal Efficiency in Ski Jumping");

        let swedish = catalog(Locale::Swedish).build(FigureId::TopSports, &b, None).unwrap();
        assert_ne!(swedish.title(), english.title());
    }

    #[test]
    fn test_focus_noc_drives_country_figures() {
        let b = bundle();
        let settings = DashboardSettings {
            country: "Norway".to_string(),
            noc: "NOR".to_string(),
            ..DashboardSettings::default()
        };
        let catalog = FigureCatalog::new(
            settings,
            &GraphSettings::default(),
            Localizer::new(Locale::English).unwrap(),
        );

        let top = catalog.build(FigureId::TopSports, &b, None).unwrap();
        assert_eq!(top.title(), "Top 10 Sports of Norway by Medal Count");
        assert_eq!(top.data, serde_json::json!([{"name": "Ski Jumping", "count": 1}]));

        let efficiency = catalog.build(FigureId::MedalEfficiency, &b, None).unwrap();
        assert_eq!(efficiency.title(), "Norway - Medal Efficiency in Ski Jumping");
        assert_eq!(efficiency.data[0]["entries"], 2);
        assert_eq!(efficiency.data[0]["medals"], 1);
        assert_eq!(efficiency.data[1]["entries"], 0);

        let german = FigureCatalog::new(
            DashboardSettings::default(),
            &GraphSettings::default(),
            Localizer::new(Locale::English).unwrap(),
        )
        .build(FigureId::MedalEfficiency, &b, None)
        .unwrap();
        assert_eq!(german.data[0]["entries"], 3);
    }

    #[test]
    fn test_data_carries_the_aggregate() {
        let figure = catalog(Locale::English)
            .build(FigureId::SummerVsWinter, &bundle(), None)
            .unwrap();
        assert_eq!(
            figure.data,
            serde_json::json!([
                {"season": "Summer", "medals": 5},
                {"season": "Winter", "medals": 4}
            ])
        );
    }

    #[test]
    fn test_sex_by_year_grid_matches_years() {
        let figure = catalog(Locale::English)
            .build(FigureId::SexByYear, &bundle(), None)
            .unwrap();
        assert_eq!(figure.figure.rows, 2);
        assert_eq!(figure.figure.cols, 4);
        assert_eq!(figure.figure.panels.len(), 8);
        assert_eq!(figure.figure.panels[0].title, "FRG 1968");
        assert_eq!(figure.figure.panels[4].title, "GDR 1968");
    }

    #[test]
    fn test_sport_figures() {
        let b = bundle();
        let figures = catalog(Locale::English).sport_figures(&b, "Swimming").unwrap();
        let ids: Vec<FigureId> = figures.iter().map(|f| f.id).collect();
        assert_eq!(ids, FigureId::SPORT.to_vec());
        assert_eq!(figures[2].title(), "Medal Distribution by Weight and Height in Swimming");
        assert_eq!(figures[2].data["medalists"], 5);
    }

    #[test]
    fn test_unknown_sport_is_not_found() {
        let err = catalog(Locale::English).sport_figures(&bundle(), "Curling").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_every_figure_renders() {
        let b = bundle();
        let catalog = catalog(Locale::English);
        let figures = catalog.static_figures(&b).unwrap();
        for figure in figures.iter().chain(&catalog.sport_figures(&b, "Ski Jumping").unwrap()) {
            let svg = figure.render_svg().unwrap();
            assert!(svg.contains("<svg"), "{}", figure.id);
        }
    }
}
