//! Shared application state: the dataset and its prerendered figures

use olympics_common::Result;
use olympics_config::Config;
use olympics_data::DatasetBundle;
use olympics_graphs::{DashboardFigure, FigureCatalog, FigureId};
use std::sync::Arc;
use tracing::{info, instrument};

/// A built figure and its SVG document
#[derive(Debug, Clone)]
pub struct RenderedFigure {
    pub figure: DashboardFigure,
    pub svg: String,
}

impl RenderedFigure {
    pub fn render(figure: DashboardFigure) -> Result<Self> {
        let svg = figure.render_svg()?;
        Ok(Self { figure, svg })
    }

    pub fn id(&self) -> FigureId {
        self.figure.id
    }

    pub fn title(&self) -> &str {
        self.figure.title()
    }
}

#[derive(Debug)]
struct Inner {
    config: Config,
    bundle: DatasetBundle,
    catalog: FigureCatalog,
    figures: Vec<RenderedFigure>,
}

/// Cheaply cloneable handle given to every request handler
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

impl AppState {
    /// Build the catalog and render every static figure
    #[instrument(skip_all, fields(rows = bundle.all.len()))]
    pub fn new(config: Config, bundle: DatasetBundle) -> Result<Self> {
        let catalog = FigureCatalog::from_config(&config)?;
        let figures = catalog
            .static_figures(&bundle)?
            .into_iter()
            .map(RenderedFigure::render)
            .collect::<Result<Vec<_>>>()?;
        info!(figures = figures.len(), "Static figures rendered");

        Ok(Self {
            inner: Arc::new(Inner {
                config,
                bundle,
                catalog,
                figures,
            }),
        })
    }

    /// Load the configured CSV files, then build as in [`AppState::new`]
    pub fn load(config: Config) -> Result<Self> {
        let data = &config.data;
        let bundle =
            DatasetBundle::load_with(&data.athletes_path, &data.regions_path, &data.anonymized_nocs)?;
        Self::new(config, bundle)
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    pub fn bundle(&self) -> &DatasetBundle {
        &self.inner.bundle
    }

    pub fn catalog(&self) -> &FigureCatalog {
        &self.inner.catalog
    }

    /// Static figures in page order
    pub fn figures(&self) -> &[RenderedFigure] {
        &self.inner.figures
    }

    pub fn figure(&self, id: FigureId) -> Option<&RenderedFigure> {
        self.inner.figures.iter().find(|f| f.id() == id)
    }

    /// Build and render the sport figures for `sport`
    #[instrument(skip(self))]
    pub fn sport_figures(&self, sport: &str) -> Result<Vec<RenderedFigure>> {
        self.catalog()
            .sport_figures(self.bundle(), sport)?
            .into_iter()
            .map(RenderedFigure::render)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use olympics_common::test_utils::{
        fixture_dir, ATHLETE_EVENTS_CSV, CLEAN_ROW_COUNT, GERMANY_ALL_ROW_COUNT, NOC_REGIONS_CSV,
    };

    fn state() -> AppState {
        let bundle =
            DatasetBundle::from_readers(ATHLETE_EVENTS_CSV.as_bytes(), NOC_REGIONS_CSV.as_bytes())
                .unwrap();
        AppState::new(Config::default(), bundle).unwrap()
    }

    #[test]
    fn test_static_figures_are_prerendered() {
        let state = state();
        assert_eq!(state.bundle().all.len(), CLEAN_ROW_COUNT);
        assert_eq!(state.figures().len(), FigureId::STATIC.len());
        assert!(state.figures().iter().all(|f| f.svg.starts_with("<svg")));
        assert!(state.figure(FigureId::EastVsWest).is_some());
        assert!(state.figure(FigureId::AgeBySex).is_none());
    }

    #[test]
    fn test_sport_figures() {
        let state = state();
        let figures = state.sport_figures("Biathlon").unwrap();
        assert_eq!(
            figures.iter().map(RenderedFigure::id).collect::<Vec<_>>(),
            FigureId::SPORT.to_vec()
        );
        assert!(state.sport_figures("Curling").unwrap_err().is_not_found());
    }

    #[test]
    fn test_load_missing_files() {
        let mut config = Config::default();
        config.data.athletes_path = "/nonexistent/athlete_events.csv".to_string();
        assert!(AppState::load(config).is_err());
    }

    #[test]
    fn test_configured_nocs_never_expose_german_names() {
        let (_dir, athletes, regions) = fixture_dir();
        let mut config = Config::default();
        config.data.athletes_path = athletes.display().to_string();
        config.data.regions_path = regions.display().to_string();
        config.data.anonymized_nocs = vec!["NOR".to_string()];
        assert!(config.validate_all().is_ok());

        let state = AppState::load(config).unwrap();
        let germans = &state.bundle().germany_all;
        assert_eq!(germans.len(), GERMANY_ALL_ROW_COUNT);
        let plain: Vec<_> = germans
            .iter()
            .filter(|r| !r.name.is_hashed())
            .map(|r| format!("{} {}", r.noc, r.name.as_str()))
            .collect();
        assert!(plain.is_empty(), "plain German names: {plain:?}");
        assert!(state.bundle().all.iter().filter(|r| r.noc == "NOR").all(|r| r.name.is_hashed()));
    }
}
