use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use clap::{ArgMatches, CommandFactory, FromArgMatches};

use metricorr::app::{AnalysisPlan, run_analysis};
use metricorr::args::{CliArgs, Command, OutputFormat};
use metricorr::error::{AppError, AppResult, ValidationError};
use metricorr::records::{FileRecordSource, MetricCatalog, TimeWindow};
use metricorr::report::{render, render_catalog, write_output};

struct OutputPlan {
    format: OutputFormat,
    path: Option<PathBuf>,
}

enum RunPlan {
    ListMetrics {
        catalog: MetricCatalog,
        output: OutputPlan,
    },
    Analyze {
        source: FileRecordSource,
        plan: AnalysisPlan,
        output: OutputPlan,
    },
}

pub(crate) fn run() -> AppResult<()> {
    let (args, matches) = parse_args()?;

    crate::logger::init_logging(args.verbose);

    let plan = build_plan(args, &matches)?;
    execute_plan(plan)
}

fn parse_args() -> AppResult<(CliArgs, ArgMatches)> {
    let matches = CliArgs::command().get_matches();
    let args = CliArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn build_plan(mut args: CliArgs, matches: &ArgMatches) -> AppResult<RunPlan> {
    if let Some(config) = metricorr::config::load_config(args.config.as_deref())? {
        metricorr::config::apply_config(&mut args, matches, &config)?;
    }

    let catalog = MetricCatalog::for_kind(args.catalog, &args.custom_metrics)?;
    let output = OutputPlan {
        format: args.output_format,
        path: args.output.clone(),
    };

    if let Some(Command::Metrics) = args.command {
        return Ok(RunPlan::ListMetrics { catalog, output });
    }

    let Some(input) = args.input.clone() else {
        tracing::error!("Missing input (set --input or provide it in config).");
        return Err(AppError::validation(ValidationError::MissingInput));
    };
    let metrics = catalog.resolve(&args.metrics)?;
    let window = build_window(&args, Utc::now().date_naive())?;
    let source =
        FileRecordSource::new(input, args.format)?.with_timestamp_field(args.timestamp_field);

    Ok(RunPlan::Analyze {
        source,
        plan: AnalysisPlan {
            catalog,
            metrics,
            window,
            analysis: args.analysis,
        },
        output,
    })
}

/// Resolves the window flags against `today` (UTC).
fn build_window(args: &CliArgs, today: NaiveDate) -> AppResult<Option<TimeWindow>> {
    let hours = args.hours.unwrap_or_default();
    match (args.last_days, args.from, args.to) {
        (Some(_), Some(_), _) | (Some(_), None, Some(_)) => Err(AppError::validation(
            ValidationError::LastDaysWithDates,
        )),
        (Some(days), None, None) => Ok(Some(TimeWindow::last_days(days.get(), today, hours)?)),
        (None, Some(from), to) => Ok(Some(TimeWindow::new(from, to.unwrap_or(today), hours)?)),
        (None, None, Some(_)) => Err(AppError::validation(ValidationError::WindowMissingStart)),
        (None, None, None) if args.hours.is_some() => {
            Err(AppError::validation(ValidationError::HoursRequireDates))
        }
        (None, None, None) => Ok(None),
    }
}

fn execute_plan(plan: RunPlan) -> AppResult<()> {
    match plan {
        RunPlan::ListMetrics { catalog, output } => {
            let rendered = render_catalog(&catalog, output.format)?;
            write_output(&rendered, output.path.as_deref())
        }
        RunPlan::Analyze {
            source,
            plan,
            output,
        } => {
            tracing::debug!(
                "Analyzing {} ({}) for {} metrics",
                source.path().display(),
                source.format().as_str(),
                plan.metrics.len()
            );
            let report = run_analysis(&source, &plan)?;
            let rendered = render(&report, output.format)?;
            write_output(&rendered, output.path.as_deref())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn date(year: i32, month: u32, day: u32) -> AppResult<NaiveDate> {
        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| AppError::validation(ValidationError::WindowMissingStart))
    }

    fn window_for(argv: &[&str]) -> AppResult<Option<TimeWindow>> {
        let args = CliArgs::try_parse_from(argv)?;
        build_window(&args, date(2024, 3, 10)?)
    }

    #[test]
    fn no_window_flags_select_everything() -> Result<(), String> {
        match window_for(&["metricorr"]) {
            Ok(None) => Ok(()),
            other => Err(format!("Expected no window, got {:?}", other)),
        }
    }

    #[test]
    fn from_alone_runs_through_today() -> Result<(), String> {
        let window = window_for(&["metricorr", "--from", "2024-03-04"])
            .map_err(|err| err.to_string())?
            .ok_or_else(|| "Expected a window".to_owned())?;
        if window.end_date().to_string() != "2024-03-10" {
            return Err(format!("Unexpected end date: {}", window.end_date()));
        }
        Ok(())
    }

    #[test]
    fn last_days_ends_today() -> Result<(), String> {
        let window = window_for(&["metricorr", "--last-days", "7", "--hours", "6-18"])
            .map_err(|err| err.to_string())?
            .ok_or_else(|| "Expected a window".to_owned())?;
        if window.start_date().to_string() != "2024-03-03" || window.hours().start() != 6 {
            return Err(format!("Unexpected window: {}", window));
        }
        Ok(())
    }

    #[test]
    fn to_without_from_is_rejected() -> Result<(), String> {
        match window_for(&["metricorr", "--to", "2024-03-04"]) {
            Err(AppError::Validation(ValidationError::WindowMissingStart)) => Ok(()),
            other => Err(format!("Expected missing start, got {:?}", other)),
        }
    }

    #[test]
    fn hours_without_dates_are_rejected() -> Result<(), String> {
        match window_for(&["metricorr", "--hours", "6-18"]) {
            Err(AppError::Validation(ValidationError::HoursRequireDates)) => Ok(()),
            other => Err(format!("Expected hours error, got {:?}", other)),
        }
    }

    #[test]
    fn inverted_single_day_is_rejected() -> Result<(), String> {
        let argv = [
            "metricorr", "--from", "2024-03-04", "--to", "2024-03-04", "--hours", "20-4",
        ];
        match window_for(&argv) {
            Err(AppError::Window(_)) => Ok(()),
            other => Err(format!("Expected window error, got {:?}", other)),
        }
    }
}
