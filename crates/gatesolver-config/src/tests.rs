//! Tests for solver configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        strategy = "plain_bfs"
        progress_interval = 10

        [iterated_width]
        max_width = 3
    "#;

    let config = SolverConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.strategy, StrategyType::PlainBfs);
    assert_eq!(config.progress_interval, 10);
    assert_eq!(config.max_width(), Some(3));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        strategy: iterated_width
        iterated_width:
          max_width: 2
    "#;

    let config = SolverConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.strategy, StrategyType::IteratedWidth);
    assert_eq!(config.max_width(), Some(2));
    assert_eq!(config.progress_interval, DEFAULT_PROGRESS_INTERVAL);
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config = SolverConfig::from_toml_str("").unwrap();
    assert_eq!(config.strategy, StrategyType::IteratedWidth);
    assert_eq!(config.max_width(), None);
    assert_eq!(config.progress_interval, DEFAULT_PROGRESS_INTERVAL);
}

#[test]
fn test_unknown_strategy_rejected() {
    let result = SolverConfig::from_toml_str(r#"strategy = "dfs""#);
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn test_builder() {
    let config = SolverConfig::new()
        .with_strategy(StrategyType::MemoizedBfs)
        .with_max_width(4)
        .with_progress_interval(0);

    assert_eq!(config.strategy, StrategyType::MemoizedBfs);
    assert_eq!(config.max_width(), Some(4));
    assert_eq!(config.progress_interval, 0);
}

#[test]
fn test_validate_rejects_zero_width() {
    let config = SolverConfig::new().with_max_width(0);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    assert!(SolverConfig::new().validate().is_ok());
}

#[test]
fn test_load_missing_file() {
    let result = SolverConfig::load("does-not-exist.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

fn write_config(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        "solver.toml",
        "strategy = \"memoized_bfs\"\nprogress_interval = 7\n",
    );

    let config = SolverConfig::load(&path).unwrap();
    assert_eq!(config.strategy, StrategyType::MemoizedBfs);
    assert_eq!(config.progress_interval, 7);
    assert_eq!(config.max_width(), None);
}

#[test]
fn test_load_yml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        "solver.yml",
        "strategy: plain_bfs\niterated_width:\n  max_width: 3\n",
    );

    let config = SolverConfig::load(&path).unwrap();
    assert_eq!(config.strategy, StrategyType::PlainBfs);
    assert_eq!(config.max_width(), Some(3));
}

#[test]
fn test_load_picks_parser_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    // YAML text under a .toml name goes to the TOML parser.
    let path = write_config(&dir, "solver.toml", "strategy: plain_bfs\n");
    assert!(matches!(
        SolverConfig::load(&path),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn test_load_rejects_zero_width() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "solver.toml", "[iterated_width]\nmax_width = 0\n");

    assert!(SolverConfig::from_toml_file(&path).is_ok());
    assert!(matches!(
        SolverConfig::load(&path),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_strategy_display() {
    assert_eq!(format!("{}", StrategyType::PlainBfs), "PlainBfs");
    assert_eq!(format!("{}", StrategyType::MemoizedBfs), "MemoizedBfs");
    assert_eq!(format!("{}", StrategyType::IteratedWidth), "IteratedWidth");
}
