//! Exporting figures into a directory

use olympics_common::test_utils::{fixture_dir, CLEAN_ROW_COUNT, GERMANY_ROW_COUNT};
use olympics_config::Config;
use olympics_dashboard::export::MANIFEST_FILE;
use olympics_dashboard::{export_figures, AppState, Manifest};
use olympics_graphs::FigureId;

fn state() -> (tempfile::TempDir, AppState) {
    let (dir, athletes, regions) = fixture_dir();
    let mut config = Config::default();
    config.data.athletes_path = athletes.display().to_string();
    config.data.regions_path = regions.display().to_string();
    (dir, AppState::load(config).unwrap())
}

#[test]
fn test_export_writes_every_figure_and_manifest() {
    let (_data, state) = state();
    let out = tempfile::tempdir().unwrap();
    let target = out.path().join("figures");

    let manifest = export_figures(&state, &target, "Swimming").unwrap();
    assert_eq!(
        manifest.figures.len(),
        FigureId::STATIC.len() + FigureId::SPORT.len()
    );
    assert_eq!(manifest.sport, "Swimming");
    assert_eq!(manifest.rows.all, CLEAN_ROW_COUNT);
    assert_eq!(manifest.rows.germany, GERMANY_ROW_COUNT);

    for figure in &manifest.figures {
        let svg = std::fs::read_to_string(target.join(&figure.svg)).unwrap();
        assert!(svg.starts_with("<svg"), "{}", figure.id);
        let json = std::fs::read_to_string(target.join(&figure.json)).unwrap();
        serde_json::from_str::<serde_json::Value>(&json).unwrap();
    }

    let written: Manifest =
        serde_json::from_str(&std::fs::read_to_string(target.join(MANIFEST_FILE)).unwrap())
            .unwrap();
    assert_eq!(written.figures, manifest.figures);
    assert_eq!(written.locale, "en-US");
}

#[test]
fn test_export_unknown_sport_writes_nothing() {
    let (_data, state) = state();
    let out = tempfile::tempdir().unwrap();
    let target = out.path().join("figures");

    let err = export_figures(&state, &target, "Curling").unwrap_err();
    assert!(err.is_not_found());
    assert!(!target.exists());
}
