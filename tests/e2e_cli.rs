mod support_cli;

use std::fs;

use tempfile::tempdir;

use support_cli::{run_metricorr, success_stdout};

const SENSOR_JSON: &str = r#"[
  {"id": 3, "created_at": "2024-03-01T10:00:00Z", "temperature": 24.0, "humidity": 46.0, "moisture": 30.0, "light": null},
  {"id": 1, "created_at": "2024-03-01T08:00:00Z", "temperature": 20.0, "humidity": 50.0, "moisture": 34.0, "light": null},
  {"id": 2, "created_at": "2024-03-01T09:00:00Z", "temperature": 22.0, "humidity": 48.0, "moisture": 32.0, "light": null},
  {"id": 4, "created_at": "2024-03-02T23:00:00Z", "temperature": 15.0, "humidity": 70.0, "moisture": 40.0, "light": 0.0}
]"#;

#[test]
fn e2e_sensor_json_text_report() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    fs::write(dir.path().join("sensor.json"), SENSOR_JSON)
        .map_err(|err| format!("write failed: {}", err))?;

    let output = run_metricorr(
        dir.path(),
        [
            "--input",
            "sensor.json",
            "--metrics",
            "temperature,humidity,light",
            "--from",
            "2024-03-01",
            "--to",
            "2024-03-01",
        ],
    )?;
    let stdout = success_stdout(&output)?;
    let expected = [
        "  Temperature (°C): avg 22.00 °C, min 20.00 °C, max 24.00 °C (3 records)",
        "  Light (lux): no data (0 records)",
        "  Temperature (°C) vs Humidity (%): r = -1.000, Strong Negative (3 data points)",
        "  Humidity (%) vs Light (lux): N/A (Insufficient Data) (0 data points)",
    ];
    for line in expected {
        if !stdout.lines().any(|candidate| candidate == line) {
            return Err(format!("Missing '{}' in:\n{}", line, stdout));
        }
    }
    Ok(())
}

#[test]
fn e2e_csv_json_output_to_file() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let csv = "\
created_at,beat_avg,temperature_c,humidity,ir_value
2024-03-01T08:00:00Z,70,36.5,40,50000
2024-03-01T09:00:00Z,80,36.9,,51000
2024-03-01T10:00:00Z,90,37.3,42,
";
    fs::write(dir.path().join("vitals.csv"), csv).map_err(|err| format!("write failed: {}", err))?;

    let output = run_metricorr(
        dir.path(),
        [
            "-i",
            "vitals.csv",
            "--catalog",
            "health",
            "--analysis",
            "correlations",
            "--output-format",
            "json",
            "-o",
            "report.json",
        ],
    )?;
    success_stdout(&output)?;
    let content = fs::read_to_string(dir.path().join("report.json"))
        .map_err(|err| format!("read report failed: {}", err))?;
    let value: serde_json::Value =
        serde_json::from_str(&content).map_err(|err| format!("invalid JSON: {}", err))?;

    let correlations = value
        .get("correlations")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| "Missing correlations".to_owned())?;
    if correlations.len() != 6 {
        return Err(format!("Expected 6 pairs, got {}", correlations.len()));
    }
    let first = correlations
        .first()
        .ok_or_else(|| "Missing first pair".to_owned())?;
    if first.get("label").and_then(serde_json::Value::as_str) != Some("Strong Positive") {
        return Err(format!("Unexpected first pair: {}", first));
    }
    let statistics = value
        .get("statistics")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| "Missing statistics".to_owned())?;
    if !statistics.is_empty() {
        return Err("Statistics were not requested".to_owned());
    }
    Ok(())
}

#[test]
fn e2e_too_few_metrics_fails() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    fs::write(dir.path().join("sensor.json"), SENSOR_JSON)
        .map_err(|err| format!("write failed: {}", err))?;

    let output = run_metricorr(dir.path(), ["-i", "sensor.json", "-m", "temperature"])?;
    if output.status.success() {
        return Err("Expected failure with a single metric".to_owned());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.contains("Please select at least two metrics to correlate") {
        return Err(format!("Unexpected stderr: {}", stderr));
    }
    Ok(())
}

#[test]
fn e2e_stats_only_accepts_single_metric() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    fs::write(dir.path().join("sensor.json"), SENSOR_JSON)
        .map_err(|err| format!("write failed: {}", err))?;

    let output = run_metricorr(
        dir.path(),
        ["-i", "sensor.json", "-m", "moisture", "--analysis", "stats"],
    )?;
    let stdout = success_stdout(&output)?;
    if !stdout.contains("  Soil Moisture (%): avg 34.00 %, min 30.00 %, max 40.00 % (4 records)") {
        return Err(format!("Unexpected output:\n{}", stdout));
    }
    Ok(())
}

#[test]
fn e2e_stats_only_rejects_repeated_metric() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    fs::write(dir.path().join("sensor.json"), SENSOR_JSON)
        .map_err(|err| format!("write failed: {}", err))?;

    let output = run_metricorr(
        dir.path(),
        ["-i", "sensor.json", "-m", "moisture,moisture", "--analysis", "stats"],
    )?;
    if output.status.success() {
        return Err("Expected failure for a repeated metric".to_owned());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.contains("'moisture' is selected more than once") {
        return Err(format!("Unexpected stderr: {}", stderr));
    }
    Ok(())
}

#[test]
fn e2e_unknown_metric_fails() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    fs::write(dir.path().join("sensor.json"), SENSOR_JSON)
        .map_err(|err| format!("write failed: {}", err))?;

    let output = run_metricorr(dir.path(), ["-i", "sensor.json", "-m", "temperature,beat_avg"])?;
    if output.status.success() {
        return Err("Expected failure for a metric outside the catalog".to_owned());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.contains("beat_avg") {
        return Err(format!("Unexpected stderr: {}", stderr));
    }
    Ok(())
}

#[test]
fn e2e_missing_input_fails() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let output = run_metricorr(dir.path(), ["--analysis", "stats"])?;
    if output.status.success() {
        return Err("Expected failure without input".to_owned());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.contains("Missing input") {
        return Err(format!("Unexpected stderr: {}", stderr));
    }
    Ok(())
}

#[test]
fn e2e_metrics_subcommand_lists_catalog() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let output = run_metricorr(dir.path(), ["metrics", "--catalog", "health"])?;
    let stdout = success_stdout(&output)?;
    for key in ["beat_avg", "temperature_c", "humidity", "ir_value"] {
        if !stdout.contains(key) {
            return Err(format!("Missing '{}' in:\n{}", key, stdout));
        }
    }
    Ok(())
}

#[test]
fn e2e_default_config_file_with_custom_metrics() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let jsonl = "\
{\"ts\": \"2024-03-01T08:00:00Z\", \"pm25\": 10, \"co2\": 400}
{\"ts\": \"2024-03-01T09:00:00Z\", \"pm25\": 20, \"co2\": 500}
{\"ts\": \"2024-03-01T10:00:00Z\", \"pm25\": 30, \"co2\": 600}
";
    fs::write(dir.path().join("air.jsonl"), jsonl).map_err(|err| format!("write failed: {}", err))?;
    let config = r#"
input = "air.jsonl"
timestamp_field = "ts"

[[metrics]]
key = "pm25"
label = "PM2.5"
unit = "µg/m³"

[[metrics]]
key = "co2"
label = "CO2"
unit = "ppm"
"#;
    fs::write(dir.path().join("metricorr.toml"), config)
        .map_err(|err| format!("write config failed: {}", err))?;

    let output = run_metricorr(dir.path(), ["--output-format", "text"])?;
    let stdout = success_stdout(&output)?;
    if !stdout.contains("  PM2.5 (µg/m³) vs CO2 (ppm): r = 1.000, Strong Positive (3 data points)") {
        return Err(format!("Unexpected output:\n{}", stdout));
    }
    if !stdout.contains("catalog: custom") {
        return Err(format!("Expected custom catalog in:\n{}", stdout));
    }
    Ok(())
}
