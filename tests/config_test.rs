use clap::{CommandFactory, FromArgMatches, Parser};
use lexiday::config::{Config, DailyParams, ScoringWeights, SpanParams, DEFAULT_EPOCH};
use lexiday::daily::WrapMode;
use lexiday::scorer::StatSpan;
use lexiday::LexidayError;
use std::fs;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: Config,
}

fn parse(args: &[&str]) -> (TestCli, clap::ArgMatches) {
    let mut argv = vec!["test"];
    argv.extend_from_slice(args);
    let matches = TestCli::command().get_matches_from(argv);
    let cli = TestCli::from_arg_matches(&matches).unwrap();
    (cli, matches)
}

#[test]
fn test_defaults_match_reference_constants() {
    let config = Config::default();
    assert_eq!(config.weights.guess_weight, 0.70);
    assert_eq!(config.weights.success_weight, 0.14);
    assert_eq!(config.weights.speed_weight, 0.16);
    assert_eq!(config.weights.max_speed_score, 300.0);
    assert_eq!(config.weights.score_scale, 1000.0);
    assert_eq!(config.span.all_time_impact_cap, 120.0);
    assert_eq!(config.span.all_time_penalty_games, 10.0);
    assert_eq!(config.span.windowed_impact_cap, 3.0);
    assert_eq!(config.span.windowed_penalty_games, 3.0);
    assert_eq!(config.daily.epoch, DEFAULT_EPOCH);
    assert_eq!(config.daily.wrap, WrapMode::Modulo);
    assert!((config.weights.weight_sum() - 1.0).abs() < 1e-12);
}

#[test]
fn test_clap_defaults_agree_with_default_impl() {
    let (cli, _) = parse(&[]);
    assert_eq!(cli.config, Config::default());
}

#[test]
fn test_span_limits_dispatch() {
    let span = SpanParams::default();
    let all = span.limits(StatSpan::AllTime);
    assert_eq!((all.impact_cap, all.penalty_games), (120.0, 10.0));
    let windowed = span.limits(StatSpan::Windowed(7));
    assert_eq!((windowed.impact_cap, windowed.penalty_games), (3.0, 3.0));
}

#[test]
fn test_epoch_parsing() {
    let params = DailyParams::default();
    let epoch = params.get_epoch().unwrap();
    assert_eq!(epoch.to_string(), "2022-04-09");

    let bad = DailyParams {
        epoch: "2022-13-40".to_string(),
        ..Default::default()
    };
    assert!(matches!(bad.get_epoch(), Err(LexidayError::Config(_))));
}

#[test]
fn test_load_partial_json_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{ "weights": { "guess_weight": 0.5 }, "daily": { "wrap": "legacy" } }"#,
    )
    .unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.weights.guess_weight, 0.5);
    assert_eq!(config.weights.success_weight, 0.14);
    assert_eq!(config.span, SpanParams::default());
    assert_eq!(config.daily.wrap, WrapMode::Legacy);
    assert_eq!(config.daily.epoch, DEFAULT_EPOCH);
}

#[test]
fn test_load_weights_only_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weights.json");
    fs::write(&path, r#"{ "max_speed_score": 600.0 }"#).unwrap();

    let weights = ScoringWeights::load_from_file(&path).unwrap();
    assert_eq!(weights.max_speed_score, 600.0);
    assert_eq!(weights.guess_weight, 0.70);
}

#[test]
fn test_load_errors_are_typed() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    assert!(matches!(
        Config::load_from_file(&missing),
        Err(LexidayError::Io(_))
    ));

    let garbage = dir.path().join("garbage.json");
    fs::write(&garbage, "{ not json").unwrap();
    assert!(matches!(
        Config::load_from_file(&garbage),
        Err(LexidayError::Json(_))
    ));
}

#[test]
fn test_merge_only_applies_typed_flags() {
    let mut base = Config::default();
    base.weights.guess_weight = 0.5;
    base.weights.speed_weight = 0.3;
    base.span.all_time_impact_cap = 50.0;

    let (cli, matches) = parse(&["--speed-weight", "0.2", "--wrap", "legacy"]);
    base.merge_from_cli(&cli.config, &matches);

    // Kept from the file
    assert_eq!(base.weights.guess_weight, 0.5);
    assert_eq!(base.span.all_time_impact_cap, 50.0);
    // Overridden on the command line
    assert_eq!(base.weights.speed_weight, 0.2);
    assert_eq!(base.daily.wrap, WrapMode::Legacy);
}

#[test]
fn test_config_serializes_round_trip() {
    let mut config = Config::default();
    config.daily.epoch = "2023-01-01".to_string();
    let json = serde_json::to_string(&config).unwrap();
    let back: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(config, back);
}
