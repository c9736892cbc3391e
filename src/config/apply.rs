use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{CliArgs, PositiveU32, parse_date, parse_metric_key};
use crate::error::{AppError, AppResult, ConfigError, ValidationError};
use crate::records::{CatalogKind, HourRange};

use super::types::ConfigFile;

/// Window flags that, when any is given on the command line, replace the
/// config file's window as a whole.
const WINDOW_ARGS: [&str; 3] = ["from", "to", "last_days"];

/// Applies configuration values to CLI arguments. Values given on the
/// command line win.
///
/// # Errors
///
/// Returns an error when a config value is invalid.
pub fn apply_config(args: &mut CliArgs, matches: &ArgMatches, config: &ConfigFile) -> AppResult<()> {
    if !is_cli(matches, "input")
        && let Some(input) = config.input.clone()
    {
        args.input = Some(input);
    }

    if !is_cli(matches, "format")
        && let Some(format) = config.format
    {
        args.format = Some(format);
    }

    if !is_cli(matches, "timestamp_field")
        && let Some(field) = config.timestamp_field.clone()
    {
        args.timestamp_field = field;
    }

    if let Some(metrics) = config.metrics.as_ref() {
        args.custom_metrics = metrics.clone();
    }

    if !is_cli(matches, "catalog") {
        if let Some(catalog) = config.catalog {
            args.catalog = catalog;
        } else if config.metrics.is_some() {
            args.catalog = CatalogKind::Custom;
        }
    }

    if !is_cli(matches, "metrics")
        && let Some(selection) = config.selection.as_ref()
    {
        let mut parsed = Vec::with_capacity(selection.len());
        for key in selection {
            parsed.push(parse_metric_key(key).map_err(|err| invalid_field("selection", err))?);
        }
        args.metrics = parsed;
    }

    if !is_cli(matches, "analysis")
        && let Some(analysis) = config.analysis
    {
        args.analysis = analysis;
    }

    if !WINDOW_ARGS.iter().any(|name| is_cli(matches, name)) {
        if let Some(from) = config.from.as_deref() {
            args.from = Some(parse_date(from).map_err(|err| invalid_field("from", err))?);
        }
        if let Some(to) = config.to.as_deref() {
            args.to = Some(parse_date(to).map_err(|err| invalid_field("to", err))?);
        }
        if let Some(days) = config.last_days {
            args.last_days =
                Some(PositiveU32::try_from(days).map_err(|err| invalid_field("last_days", err))?);
        }
    }

    if !is_cli(matches, "hours")
        && let Some(hours) = config.hours.as_deref()
    {
        args.hours = Some(
            hours
                .parse::<HourRange>()
                .map_err(|err| invalid_field("hours", err))?,
        );
    }

    if !is_cli(matches, "output")
        && let Some(output) = config.output.clone()
    {
        args.output = Some(output);
    }

    if !is_cli(matches, "output_format")
        && let Some(format) = config.output_format
    {
        args.output_format = format;
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn invalid_field(field: &'static str, source: ValidationError) -> AppError {
    AppError::config(ConfigError::InvalidField { field, source })
}
