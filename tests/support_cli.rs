use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Output};

/// Runs the `metricorr` binary inside `dir` so no stray config file is
/// picked up from the repository.
///
/// # Errors
///
/// Returns an error when the binary cannot be located or started.
pub fn run_metricorr<I, S>(dir: &Path, args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = metricorr_bin()?;
    Command::new(bin)
        .args(args)
        .current_dir(dir)
        .env("RUST_LOG", "error")
        .env_remove("METRICORR_LOG")
        .output()
        .map_err(|err| format!("run metricorr failed: {}", err))
}

fn metricorr_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_metricorr").map_or_else(
        || Err("CARGO_BIN_EXE_metricorr missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}

/// Stdout of a successful run.
///
/// # Errors
///
/// Returns an error carrying stderr when the run failed.
pub fn success_stdout(output: &Output) -> Result<String, String> {
    if !output.status.success() {
        return Err(format!(
            "metricorr failed: {}",
            String::from_utf8_lossy(&output.stderr)
        ));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
