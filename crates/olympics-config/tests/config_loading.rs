use olympics_config::{Config, ConfigLoader, CONFIG_PATH_VAR};
use std::fs;
use std::path::Path;

fn env_with(pairs: &[(&str, String)]) -> impl Fn(&str) -> Option<String> {
    let pairs: Vec<(String, String)> =
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect();
    move |var| pairs.iter().find(|(k, _)| k == var).map(|(_, v)| v.clone())
}

fn write_port(path: &Path, port: u16) {
    fs::write(path, format!("server:\n  port: {port}\n")).unwrap();
}

#[test]
fn explicit_path_wins() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.yaml");
    fs::write(
        &path,
        "dashboard:\n  sport_options: [\"Biathlon\", \"Football\"]\n  default_sport: \"Biathlon\"\n",
    )
    .unwrap();

    let config = ConfigLoader::load(Some(path.as_path())).expect("explicit config should load");
    assert_eq!(config.dashboard.default_sport, "Biathlon");
    assert_eq!(config.dashboard.sport_options, vec!["Biathlon", "Football"]);
}

#[test]
fn defaults_round_trip_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashboard.yaml");
    fs::write(&path, serde_yaml::to_string(&Config::default()).unwrap()).unwrap();

    let config = ConfigLoader::load_config_with_env(&path, |_| None).unwrap();
    assert_eq!(config.data.athletes_path, "athlete_events.csv");
    assert_eq!(config.data.regions_path, "noc_regions.csv");
    assert_eq!(config.server.port, 8050);
}

#[test]
fn invalid_file_is_a_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashboard.yaml");
    fs::write(&path, "graph:\n  font_size: 2\n").unwrap();

    let err = ConfigLoader::load(Some(path.as_path())).unwrap_err();
    assert!(err.to_string().contains("validation failed"));
}

#[test]
fn example_file_is_valid() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../dashboard.example.yaml");
    let config = ConfigLoader::load_config_with_env(&path, |_| None).unwrap();
    assert_eq!(config.data.athletes_path, "data/athlete_events.csv");
    assert_eq!(config.dashboard.default_sport, "Ski Jumping");
    assert_eq!(config.dashboard.division_years, vec![1968, 1972, 1980, 1988]);
}

#[test]
fn config_path_variable_is_used_before_local_files() {
    let dir = tempfile::tempdir().unwrap();
    write_port(&dir.path().join("dashboard.yaml"), 9001);
    let elsewhere = dir.path().join("elsewhere.yaml");
    write_port(&elsewhere, 9002);

    let env = env_with(&[(CONFIG_PATH_VAR, elsewhere.display().to_string())]);
    assert_eq!(ConfigLoader::locate(None, dir.path(), &env), Some(elsewhere.clone()));
    let config = ConfigLoader::load_from(None, dir.path(), &env).unwrap();
    assert_eq!(config.server.port, 9002);
}

#[test]
fn explicit_path_beats_config_path_variable() {
    let dir = tempfile::tempdir().unwrap();
    let explicit = dir.path().join("explicit.yaml");
    write_port(&explicit, 9003);
    let from_env = dir.path().join("env.yaml");
    write_port(&from_env, 9004);

    let env = env_with(&[(CONFIG_PATH_VAR, from_env.display().to_string())]);
    let config = ConfigLoader::load_from(Some(explicit.as_path()), dir.path(), env).unwrap();
    assert_eq!(config.server.port, 9003);
}

#[test]
fn yaml_extension_is_probed_before_yml() {
    let dir = tempfile::tempdir().unwrap();
    write_port(&dir.path().join("dashboard.yml"), 9005);

    let config = ConfigLoader::load_from(None, dir.path(), |_| None).unwrap();
    assert_eq!(config.server.port, 9005);

    write_port(&dir.path().join("dashboard.yaml"), 9006);
    assert_eq!(
        ConfigLoader::locate(None, dir.path(), |_| None),
        Some(dir.path().join("dashboard.yaml"))
    );
    let config = ConfigLoader::load_from(None, dir.path(), |_| None).unwrap();
    assert_eq!(config.server.port, 9006);
}

#[test]
fn defaults_apply_when_nothing_is_found() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(ConfigLoader::locate(None, dir.path(), |_| None), None);

    let env = env_with(&[("OLYMPICS_PORT", "9007".to_string())]);
    let config = ConfigLoader::load_from(None, dir.path(), env).unwrap();
    assert_eq!(config.server.port, 9007);
    assert_eq!(config.dashboard.default_sport, "Ski Jumping");
}

#[test]
fn missing_file_named_by_variable_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write_port(&dir.path().join("dashboard.yaml"), 9008);
    let env = env_with(&[(
        CONFIG_PATH_VAR,
        dir.path().join("absent.yaml").display().to_string(),
    )]);

    assert!(ConfigLoader::load_from(None, dir.path(), env).is_err());
}
