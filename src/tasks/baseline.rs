use crate::tasks::{
    load::{ClientLatencyRow, SeriesRow},
    scenario::Scenario,
};
use log::debug;

/// Append the assumed control data point to a time series. When a constant
/// is configured the row is added unconditionally, even if the harness did
/// run a literal control pass.
pub fn with_constant_control(mut rows: Vec<SeriesRow>, control: Option<f64>) -> Vec<SeriesRow> {
    if let Some(value) = control {
        rows.push(SeriesRow {
            scenario: Scenario::CONTROL_NAME.to_string(),
            timestamp: 0.0,
            value,
        });
    }

    rows
}

/// Add a control sample to the client latencies if none was measured, using
/// the fastest observed refresh as a stand-in (or 0 for an empty table).
pub fn with_derived_control(mut rows: Vec<ClientLatencyRow>) -> Vec<ClientLatencyRow> {
    if rows.iter().any(|r| r.scenario == Scenario::CONTROL_NAME) {
        return rows;
    }

    let min_latency = rows
        .iter()
        .map(|r| r.latency_ms)
        .reduce(f64::min)
        .unwrap_or(0.0);
    debug!("synthesizing client latency control (latency_ms={min_latency})");

    rows.push(ClientLatencyRow {
        scenario: Scenario::CONTROL_NAME.to_string(),
        latency_ms: min_latency,
    });

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(scenario: &str, timestamp: f64, value: f64) -> SeriesRow {
        SeriesRow {
            scenario: scenario.to_string(),
            timestamp,
            value,
        }
    }

    fn latency(scenario: &str, latency_ms: f64) -> ClientLatencyRow {
        ClientLatencyRow {
            scenario: scenario.to_string(),
            latency_ms,
        }
    }

    #[test]
    fn test_constant_control_is_always_appended() {
        let rows = with_constant_control(vec![], Some(20.0));
        assert_eq!(rows, vec![series("control", 0.0, 20.0)]);

        let rows = with_constant_control(
            vec![series("control", 3.0, 7.0), series("short", 1.0, 40.0)],
            Some(100.0),
        );
        assert_eq!(rows.len(), 3);
        assert_eq!(rows.last(), Some(&series("control", 0.0, 100.0)));
    }

    #[test]
    fn test_no_constant_leaves_series_untouched() {
        let rows = with_constant_control(vec![series("short", 1.0, 40.0)], None);
        assert_eq!(rows, vec![series("short", 1.0, 40.0)]);
    }

    #[test]
    fn test_derived_control_uses_minimum_latency() {
        let rows = with_derived_control(vec![latency("short", 12.0), latency("balanced", 3.5)]);
        assert_eq!(rows.last(), Some(&latency("control", 3.5)));

        let rows = with_derived_control(vec![]);
        assert_eq!(rows, vec![latency("control", 0.0)]);
    }

    #[test]
    fn test_measured_control_is_kept() {
        let rows = with_derived_control(vec![latency("control", 9.0), latency("short", 1.0)]);
        assert_eq!(rows, vec![latency("control", 9.0), latency("short", 1.0)]);
    }
}
