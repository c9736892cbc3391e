use super::{apply_config, load_config_file, types::ConfigFile};
use chrono::NaiveDate;
use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tempfile::tempdir;

use crate::args::{AnalysisKind, CliArgs, OutputFormat};
use crate::error::{AppError, AppResult, ConfigError};
use crate::records::{CatalogKind, HourRange, MetricKey, RecordFormat};

fn parse_cli(argv: &[&str]) -> AppResult<(CliArgs, ArgMatches)> {
    let matches = CliArgs::command().try_get_matches_from(argv)?;
    let args = CliArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn write_config(name: &str, content: &str) -> AppResult<(tempfile::TempDir, std::path::PathBuf)> {
    let dir = tempdir()?;
    let path = dir.path().join(name);
    std::fs::write(&path, content)?;
    Ok((dir, path))
}

#[test]
fn parse_toml_config_with_custom_metrics() -> AppResult<()> {
    let (_dir, path) = write_config(
        "metricorr.toml",
        r#"
input = "air.csv"
selection = ["pm25", "co2"]
analysis = "correlations"
from = "2024-03-01"
to = "2024-03-07"
hours = "6-18"

[[metrics]]
key = "pm25"
label = "PM2.5"
unit = "µg/m³"

[[metrics]]
key = "co2"
label = "CO2"
"#,
    )?;

    let config = load_config_file(&path)?;
    if config.input.as_deref() != Some(std::path::Path::new("air.csv")) {
        return Err(AppError::config("Unexpected input"));
    }
    let metrics = config
        .metrics
        .as_ref()
        .ok_or_else(|| AppError::config("Expected metrics"))?;
    let first = metrics
        .first()
        .ok_or_else(|| AppError::config("Missing first metric"))?;
    if first.key != MetricKey::from("pm25") || first.unit.as_deref() != Some("µg/m³") {
        return Err(AppError::config(format!("Unexpected metric: {:?}", first)));
    }
    if metrics.get(1).and_then(|metric| metric.unit.as_ref()).is_some() {
        return Err(AppError::config("Unit is optional"));
    }
    if config.analysis != Some(AnalysisKind::Correlations) {
        return Err(AppError::config("Unexpected analysis"));
    }
    Ok(())
}

#[test]
fn parse_json_config() -> AppResult<()> {
    let (_dir, path) = write_config(
        "metricorr.json",
        r#"{
  "input": "vitals.jsonl",
  "format": "jsonl",
  "catalog": "health",
  "timestamp_field": "recorded_at",
  "last_days": 7,
  "output_format": "json"
}"#,
    )?;
    let config = load_config_file(&path)?;
    if config.format != Some(RecordFormat::Jsonl) || config.catalog != Some(CatalogKind::Health) {
        return Err(AppError::config("Unexpected format or catalog"));
    }
    if config.last_days != Some(7) || config.output_format != Some(OutputFormat::Json) {
        return Err(AppError::config("Unexpected window or output"));
    }
    if config.timestamp_field.as_deref() != Some("recorded_at") {
        return Err(AppError::config("Unexpected timestamp field"));
    }
    Ok(())
}

#[test]
fn load_config_rejects_unknown_extension() -> AppResult<()> {
    let (_dir, path) = write_config("metricorr.yaml", "input: x")?;
    match load_config_file(&path) {
        Err(AppError::Config(ConfigError::UnsupportedExtension { ext })) if ext == "yaml" => Ok(()),
        other => Err(AppError::config(format!("Expected extension error, got {:?}", other))),
    }
}

#[test]
fn load_config_reports_parse_errors() -> AppResult<()> {
    let (_dir, path) = write_config("metricorr.toml", "input = [")?;
    match load_config_file(&path) {
        Err(AppError::Config(ConfigError::ParseToml { .. })) => Ok(()),
        other => Err(AppError::config(format!("Expected TOML error, got {:?}", other))),
    }
}

#[test]
fn apply_config_fills_unset_values() -> AppResult<()> {
    let (mut args, matches) = parse_cli(&["metricorr"])?;
    let config = ConfigFile {
        input: Some("readings.json".into()),
        catalog: Some(CatalogKind::Health),
        selection: Some(vec!["beat_avg".to_owned(), " ir_value ".to_owned()]),
        from: Some("2024-03-01".to_owned()),
        hours: Some("22-5".to_owned()),
        output_format: Some(OutputFormat::Json),
        ..ConfigFile::default()
    };
    apply_config(&mut args, &matches, &config)?;

    if args.input.as_deref() != Some(std::path::Path::new("readings.json")) {
        return Err(AppError::config("Input should come from config"));
    }
    if args.catalog != CatalogKind::Health || args.output_format != OutputFormat::Json {
        return Err(AppError::config("Enums should come from config"));
    }
    if args.metrics != [MetricKey::from("beat_avg"), MetricKey::from("ir_value")] {
        return Err(AppError::config(format!("Unexpected metrics: {:?}", args.metrics)));
    }
    if args.from != NaiveDate::from_ymd_opt(2024, 3, 1) || args.hours != Some(HourRange::new(22, 5)?) {
        return Err(AppError::config("Window should come from config"));
    }
    Ok(())
}

#[test]
fn apply_config_cli_wins() -> AppResult<()> {
    let (mut args, matches) = parse_cli(&[
        "metricorr",
        "--input",
        "cli.json",
        "--catalog",
        "sensor",
        "--metrics",
        "light,moisture",
        "--output-format",
        "text",
    ])?;
    let config = ConfigFile {
        input: Some("config.json".into()),
        catalog: Some(CatalogKind::Health),
        selection: Some(vec!["beat_avg".to_owned()]),
        output_format: Some(OutputFormat::Json),
        ..ConfigFile::default()
    };
    apply_config(&mut args, &matches, &config)?;

    if args.input.as_deref() != Some(std::path::Path::new("cli.json")) {
        return Err(AppError::config("CLI input must win"));
    }
    if args.catalog != CatalogKind::Sensor || args.output_format != OutputFormat::Text {
        return Err(AppError::config("CLI enums must win"));
    }
    if args.metrics != [MetricKey::from("light"), MetricKey::from("moisture")] {
        return Err(AppError::config("CLI metrics must win"));
    }
    Ok(())
}

#[test]
fn apply_config_cli_window_replaces_config_window() -> AppResult<()> {
    let (mut args, matches) = parse_cli(&["metricorr", "--last-days", "3"])?;
    let config = ConfigFile {
        from: Some("2024-03-01".to_owned()),
        to: Some("2024-03-07".to_owned()),
        ..ConfigFile::default()
    };
    apply_config(&mut args, &matches, &config)?;
    if args.from.is_some() || args.to.is_some() {
        return Err(AppError::config("Config dates must not mix with --last-days"));
    }
    Ok(())
}

#[test]
fn apply_config_metrics_select_custom_catalog() -> AppResult<()> {
    let (_dir, path) = write_config(
        "metricorr.toml",
        r#"
[[metrics]]
key = "pm25"
label = "PM2.5"
"#,
    )?;
    let config = load_config_file(&path)?;
    let (mut args, matches) = parse_cli(&["metricorr"])?;
    apply_config(&mut args, &matches, &config)?;
    if args.catalog != CatalogKind::Custom {
        return Err(AppError::config("Custom metrics should select the custom catalog"));
    }
    if args.custom_metrics.len() != 1 {
        return Err(AppError::config("Custom metrics should be carried over"));
    }
    Ok(())
}

#[test]
fn apply_config_rejects_invalid_values() -> AppResult<()> {
    let cases = [
        (
            ConfigFile {
                from: Some("March 1st".to_owned()),
                ..ConfigFile::default()
            },
            "from",
        ),
        (
            ConfigFile {
                hours: Some("6-30".to_owned()),
                ..ConfigFile::default()
            },
            "hours",
        ),
        (
            ConfigFile {
                last_days: Some(0),
                ..ConfigFile::default()
            },
            "last_days",
        ),
        (
            ConfigFile {
                selection: Some(vec![String::new()]),
                ..ConfigFile::default()
            },
            "selection",
        ),
    ];
    for (config, expected) in cases {
        let (mut args, matches) = parse_cli(&["metricorr"])?;
        match apply_config(&mut args, &matches, &config) {
            Err(AppError::Config(ConfigError::InvalidField { field, .. })) if field == expected => {}
            other => {
                return Err(AppError::config(format!(
                    "Expected invalid '{}', got {:?}",
                    expected, other
                )));
            }
        }
    }
    Ok(())
}
