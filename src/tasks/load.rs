use anyhow::Result;
use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use log::{debug, error, warn};
use std::{fs::File, path::Path};

pub const SCENARIO_COLUMN: &str = "scenario";

/// One sampled observation of a time-series metric.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesRow {
    pub scenario: String,
    pub timestamp: f64,
    pub value: f64,
}

/// One HTTP probe issued with a stolen token.
#[derive(Clone, Debug, PartialEq)]
pub struct MisuseRow {
    pub scenario: String,
    pub elapsed_s: f64,
    pub http_code: i64,
}

/// One client-observed token refresh latency.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientLatencyRow {
    pub scenario: String,
    pub latency_ms: f64,
}

/// Open a CSV file for reading, or `None` if it does not exist. Returns the
/// position of each required column in the header.
fn open_reader(path: &Path, columns: &[&str]) -> Result<Option<(Reader<File>, Vec<usize>)>> {
    if !path.exists() {
        warn!("WARNING: missing {}", path.display());
        return Ok(None);
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let mut indices = Vec::with_capacity(columns.len());
    for column in columns {
        match headers.iter().position(|h| h == *column) {
            Some(idx) => indices.push(idx),
            None => {
                let reason = format!(
                    "missing column in csv (path={}, column={column})",
                    path.display()
                );
                error!("{reason}");
                anyhow::bail!(reason);
            }
        }
    }

    Ok(Some((reader, indices)))
}

fn coerce_scenario(cell: Option<&str>) -> Option<String> {
    let scenario = cell?.trim();
    if scenario.is_empty() {
        None
    } else {
        Some(scenario.to_string())
    }
}

/// Parse a numeric cell. Empty, unparsable, and NaN cells are all treated
/// as missing.
pub fn coerce_number(cell: Option<&str>) -> Option<f64> {
    let value: f64 = cell?.trim().parse().ok()?;
    if value.is_nan() {
        None
    } else {
        Some(value)
    }
}

/// Parse an HTTP status code. Codes may be written as floats (`401.0`) by
/// some exporters, but must be integral.
pub fn coerce_code(cell: Option<&str>) -> Option<i64> {
    let value = coerce_number(cell)?;
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    Some(value as i64)
}

fn series_row(record: &StringRecord, idx: &[usize]) -> Option<SeriesRow> {
    Some(SeriesRow {
        scenario: coerce_scenario(record.get(idx[0]))?,
        timestamp: coerce_number(record.get(idx[1]))?,
        value: coerce_number(record.get(idx[2]))?,
    })
}

fn misuse_row(record: &StringRecord, idx: &[usize]) -> Option<MisuseRow> {
    Some(MisuseRow {
        scenario: coerce_scenario(record.get(idx[0]))?,
        elapsed_s: coerce_number(record.get(idx[1]))?,
        http_code: coerce_code(record.get(idx[2]))?,
    })
}

fn client_latency_row(record: &StringRecord, idx: &[usize]) -> Option<ClientLatencyRow> {
    Some(ClientLatencyRow {
        scenario: coerce_scenario(record.get(idx[0]))?,
        latency_ms: coerce_number(record.get(idx[1]))?,
    })
}

/// Read every record of `path`, keeping the rows that coerce. Rows with a
/// missing or malformed cell in a required column are dropped silently.
fn load_rows<T>(
    path: &Path,
    columns: &[&str],
    parse_row: fn(&StringRecord, &[usize]) -> Option<T>,
) -> Result<Vec<T>> {
    let Some((mut reader, indices)) = open_reader(path, columns)? else {
        return Ok(vec![]);
    };

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        if let Some(row) = parse_row(&record, &indices) {
            rows.push(row);
        }
    }
    debug!("loaded {} rows from {}", rows.len(), path.display());

    Ok(rows)
}

/// Load a `scenario,timestamp,value` series, sorted by scenario and then by
/// timestamp.
pub fn load_series(path: &Path) -> Result<Vec<SeriesRow>> {
    let mut rows = load_rows(path, &[SCENARIO_COLUMN, "timestamp", "value"], series_row)?;
    rows.sort_by(|a, b| {
        a.scenario
            .cmp(&b.scenario)
            .then(a.timestamp.total_cmp(&b.timestamp))
    });

    Ok(rows)
}

/// Load the `scenario,elapsed_s,http_code` probes of the misuse simulation,
/// in file order.
pub fn load_misuse(path: &Path) -> Result<Vec<MisuseRow>> {
    load_rows(path, &[SCENARIO_COLUMN, "elapsed_s", "http_code"], misuse_row)
}

pub fn load_client_latency(path: &Path) -> Result<Vec<ClientLatencyRow>> {
    load_rows(path, &[SCENARIO_COLUMN, "latency_ms"], client_latency_row)
}
