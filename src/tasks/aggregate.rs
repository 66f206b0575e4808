use crate::tasks::{
    load::{ClientLatencyRow, MisuseRow, SeriesRow},
    metric::Metric,
    scenario::Scenario,
};
use anyhow::Result;
use csv::WriterBuilder;
use serde::Serialize;
use std::{collections::BTreeMap, path::Path};

pub const HTTP_UNAUTHORIZED: i64 = 401;

/// Assumed lifetime of a token in the control scenario. There is no literal
/// control run of the misuse simulation, so its window is fixed.
pub const CONTROL_TTL_SECONDS: f64 = 86400.0;

pub const MISUSE_WINDOW_COLUMN: &str = "misuse_window_seconds";

pub const SUMMARY_COLUMNS: [&str; 10] = [
    "scenario",
    MISUSE_WINDOW_COLUMN,
    "p95_gateway_ms_mean",
    "p95_gateway_ms_median",
    "avg_gateway_ms_mean",
    "avg_gateway_ms_median",
    "rps_gateway_mean",
    "rps_gateway_median",
    "p95_introspect_ms_mean",
    "p95_introspect_ms_median",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stats {
    pub mean: f64,
    pub median: f64,
}

/// Per-scenario mean and median of one metric.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricSummary {
    pub metric_name: String,
    pub stats: BTreeMap<String, Stats>,
}

impl MetricSummary {
    pub fn mean_column(&self) -> String {
        format!("{}_mean", self.metric_name)
    }

    pub fn median_column(&self) -> String {
        format!("{}_median", self.metric_name)
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

/// One row of `summary_stats.csv`. Absent values serialize as empty cells.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SummaryRow {
    pub scenario: String,
    pub misuse_window_seconds: Option<f64>,
    pub p95_gateway_ms_mean: Option<f64>,
    pub p95_gateway_ms_median: Option<f64>,
    pub avg_gateway_ms_mean: Option<f64>,
    pub avg_gateway_ms_median: Option<f64>,
    pub rps_gateway_mean: Option<f64>,
    pub rps_gateway_median: Option<f64>,
    pub p95_introspect_ms_mean: Option<f64>,
    pub p95_introspect_ms_median: Option<f64>,
}

impl SummaryRow {
    fn new(scenario: &str) -> Self {
        Self {
            scenario: scenario.to_string(),
            ..Default::default()
        }
    }

    /// Mean and median columns of `metric`.
    pub fn metric(&self, metric: &Metric) -> (Option<f64>, Option<f64>) {
        match metric {
            Metric::P95Gateway => (self.p95_gateway_ms_mean, self.p95_gateway_ms_median),
            Metric::AvgGateway => (self.avg_gateway_ms_mean, self.avg_gateway_ms_median),
            Metric::RpsGateway => (self.rps_gateway_mean, self.rps_gateway_median),
            Metric::P95Introspect => (self.p95_introspect_ms_mean, self.p95_introspect_ms_median),
        }
    }

    fn set_metric(&mut self, metric: &Metric, stats: &Stats) {
        let (mean, median) = match metric {
            Metric::P95Gateway => (&mut self.p95_gateway_ms_mean, &mut self.p95_gateway_ms_median),
            Metric::AvgGateway => (&mut self.avg_gateway_ms_mean, &mut self.avg_gateway_ms_median),
            Metric::RpsGateway => (&mut self.rps_gateway_mean, &mut self.rps_gateway_median),
            Metric::P95Introspect => (
                &mut self.p95_introspect_ms_mean,
                &mut self.p95_introspect_ms_median,
            ),
        };
        *mean = Some(stats.mean);
        *median = Some(stats.median);
    }
}

/// Outer join of every per-scenario aggregate, one row per scenario in
/// display order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SummaryTable {
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, scenario: &str) -> Option<&SummaryRow> {
        self.rows.iter().find(|r| r.scenario == scenario)
    }

    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
        writer.write_record(SUMMARY_COLUMNS)?;
        for row in &self.rows {
            writer.serialize(row)?;
        }
        writer.flush()?;

        Ok(())
    }
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

fn group_by_scenario<'a, T, F>(rows: &'a [T], key: F) -> BTreeMap<&'a str, Vec<&'a T>>
where
    F: Fn(&'a T) -> &'a str,
{
    let mut grouped = BTreeMap::<&str, Vec<&T>>::new();
    for row in rows {
        grouped.entry(key(row)).or_default().push(row);
    }
    grouped
}

/// Mean and median of `value` for each scenario in `series`.
pub fn summarize(series: &[SeriesRow], metric_name: &str) -> MetricSummary {
    let stats = group_by_scenario(series, |r| r.scenario.as_str())
        .into_iter()
        .filter_map(|(scenario, rows)| {
            let values: Vec<f64> = rows.iter().map(|r| r.value).collect();
            Some((
                scenario.to_string(),
                Stats {
                    mean: mean(&values)?,
                    median: median(&values)?,
                },
            ))
        })
        .collect();

    MetricSummary {
        metric_name: metric_name.to_string(),
        stats,
    }
}

/// Time until a replayed token is first rejected, per scenario. Scenarios
/// that never see a 401 report the longest observed probe time. The control
/// scenario always reports `control_ttl_s`, whether or not it was probed.
pub fn misuse_windows(rows: &[MisuseRow], control_ttl_s: f64) -> BTreeMap<String, f64> {
    let mut windows = BTreeMap::new();

    for (scenario, mut probes) in group_by_scenario(rows, |r| r.scenario.as_str()) {
        if scenario == Scenario::CONTROL_NAME {
            continue;
        }

        probes.sort_by(|a, b| a.elapsed_s.total_cmp(&b.elapsed_s));
        let window = match probes.iter().find(|p| p.http_code == HTTP_UNAUTHORIZED) {
            Some(probe) => probe.elapsed_s,
            None => probes
                .iter()
                .map(|p| p.elapsed_s)
                .fold(f64::NEG_INFINITY, f64::max),
        };
        windows.insert(scenario.to_string(), window);
    }
    windows.insert(Scenario::CONTROL_NAME.to_string(), control_ttl_s);

    windows
}

/// Outer-join the misuse windows and every metric summary on scenario.
pub fn merge_summary(
    windows: &BTreeMap<String, f64>,
    summaries: &BTreeMap<Metric, MetricSummary>,
) -> SummaryTable {
    let mut rows = BTreeMap::<String, SummaryRow>::new();

    for (scenario, window) in windows {
        rows.entry(scenario.clone())
            .or_insert_with(|| SummaryRow::new(scenario))
            .misuse_window_seconds = Some(*window);
    }
    for (metric, summary) in summaries {
        for (scenario, stats) in &summary.stats {
            rows.entry(scenario.clone())
                .or_insert_with(|| SummaryRow::new(scenario))
                .set_metric(metric, stats);
        }
    }

    let mut rows: Vec<SummaryRow> = rows.into_values().collect();
    rows.sort_by(|a, b| Scenario::cmp_names(&a.scenario, &b.scenario));

    SummaryTable { rows }
}

/// Total refresh cost (mean latency times sample count) of each known
/// scenario, as a percentage of the most expensive one. Scenarios without
/// samples have no value.
pub fn client_cost_percentages(rows: &[ClientLatencyRow]) -> Vec<(Scenario, Option<f64>)> {
    let grouped = group_by_scenario(rows, |r| r.scenario.as_str());

    let totals: Vec<(Scenario, Option<f64>)> = Scenario::iter_variants()
        .map(|scenario| {
            let total = grouped.get(scenario.to_string().as_str()).and_then(|rows| {
                let values: Vec<f64> = rows.iter().map(|r| r.latency_ms).collect();
                Some(mean(&values)? * values.len() as f64)
            });
            (*scenario, total)
        })
        .collect();

    let max_total = totals
        .iter()
        .filter_map(|(_, total)| *total)
        .reduce(f64::max)
        .filter(|max| *max != 0.0)
        .unwrap_or(1.0);

    totals
        .into_iter()
        .map(|(scenario, total)| (scenario, total.map(|t| t / max_total * 100.0)))
        .collect()
}

/// Trailing moving average over `window` samples. The first values average
/// over however many samples are available.
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    let mut averages = Vec::with_capacity(values.len());
    let mut sum = 0.0;

    for (i, value) in values.iter().enumerate() {
        sum += value;
        if i >= window {
            sum -= values[i - window];
        }
        averages.push(sum / (i + 1).min(window) as f64);
    }

    averages
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Equal-width histogram over the range of `values`. The last bin is closed
/// on both ends.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let (Some(min), Some(max)) = (
        finite.iter().copied().reduce(f64::min),
        finite.iter().copied().reduce(f64::max),
    ) else {
        return vec![];
    };

    let bins = bins.max(1);
    let (lower, upper) = if min == max {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    };
    let width = (upper - lower) / bins as f64;

    let mut counts = vec![0; bins];
    for value in finite {
        let idx = (((value - lower) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: lower + i as f64 * width,
            upper: lower + (i + 1) as f64 * width,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(scenario: &str, value: f64) -> SeriesRow {
        SeriesRow {
            scenario: scenario.to_string(),
            timestamp: 0.0,
            value,
        }
    }

    fn probe(scenario: &str, elapsed_s: f64, http_code: i64) -> MisuseRow {
        MisuseRow {
            scenario: scenario.to_string(),
            elapsed_s,
            http_code,
        }
    }

    fn latency(scenario: &str, latency_ms: f64) -> ClientLatencyRow {
        ClientLatencyRow {
            scenario: scenario.to_string(),
            latency_ms,
        }
    }

    #[test]
    fn test_summarize_mean_and_median() {
        let summary = summarize(
            &[
                series("short", 1.0),
                series("short", 2.0),
                series("short", 10.0),
                series("balanced", 4.0),
                series("balanced", 6.0),
            ],
            "p95_gateway_ms",
        );

        assert_eq!(summary.mean_column(), "p95_gateway_ms_mean");
        assert_eq!(summary.median_column(), "p95_gateway_ms_median");
        assert_eq!(
            summary.stats.get("short"),
            Some(&Stats {
                mean: 13.0 / 3.0,
                median: 2.0
            })
        );
        assert_eq!(
            summary.stats.get("balanced"),
            Some(&Stats {
                mean: 5.0,
                median: 5.0
            })
        );
    }

    #[test]
    fn test_summarize_empty_keeps_column_names() {
        let summary = summarize(&[], "rps_gateway");
        assert!(summary.is_empty());
        assert_eq!(summary.mean_column(), "rps_gateway_mean");
        assert_eq!(summary.median_column(), "rps_gateway_median");
    }

    #[test]
    fn test_misuse_window_is_first_401_regardless_of_order() {
        let windows = misuse_windows(
            &[
                probe("short", 30.0, 200),
                probe("short", 12.5, 401),
                probe("short", 1.0, 200),
                probe("short", 40.0, 401),
            ],
            CONTROL_TTL_SECONDS,
        );
        assert_eq!(windows.get("short"), Some(&12.5));
    }

    #[test]
    fn test_misuse_window_without_401_is_max_elapsed() {
        let windows = misuse_windows(
            &[
                probe("moderate", 5.0, 200),
                probe("moderate", 9.0, 200),
                probe("moderate", 2.0, 403),
            ],
            CONTROL_TTL_SECONDS,
        );
        assert_eq!(windows.get("moderate"), Some(&9.0));
    }

    #[test]
    fn test_control_misuse_window_is_fixed() {
        let windows = misuse_windows(&[], CONTROL_TTL_SECONDS);
        assert_eq!(windows.len(), 1);
        assert_eq!(windows.get("control"), Some(&86400.0));

        let windows = misuse_windows(&[probe("control", 3.0, 401)], CONTROL_TTL_SECONDS);
        assert_eq!(windows.get("control"), Some(&86400.0));
    }

    #[test]
    fn test_merge_summary_is_an_outer_join_in_display_order() {
        let mut windows = BTreeMap::new();
        windows.insert("short".to_string(), 3.0);
        windows.insert("control".to_string(), CONTROL_TTL_SECONDS);

        let mut summaries = BTreeMap::new();
        summaries.insert(
            Metric::P95Gateway,
            summarize(&[series("balanced", 8.0), series("control", 20.0)], "p95_gateway_ms"),
        );
        summaries.insert(Metric::RpsGateway, summarize(&[], "rps_gateway"));

        let table = merge_summary(&windows, &summaries);
        let scenarios: Vec<&str> = table.rows.iter().map(|r| r.scenario.as_str()).collect();
        assert_eq!(scenarios, vec!["control", "balanced", "short"]);

        let balanced = table.get("balanced").unwrap();
        assert_eq!(balanced.misuse_window_seconds, None);
        assert_eq!(balanced.metric(&Metric::P95Gateway), (Some(8.0), Some(8.0)));
        assert_eq!(balanced.metric(&Metric::RpsGateway), (None, None));

        let short = table.get("short").unwrap();
        assert_eq!(short.misuse_window_seconds, Some(3.0));
        assert_eq!(short.metric(&Metric::P95Gateway), (None, None));

        let control = table.get("control").unwrap();
        assert_eq!(control.misuse_window_seconds, Some(86400.0));
        assert_eq!(control.metric(&Metric::P95Gateway), (Some(20.0), Some(20.0)));
    }

    #[test]
    fn test_client_cost_is_percentage_of_max() {
        let costs = client_cost_percentages(&[
            latency("control", 1.0),
            latency("short", 10.0),
            latency("short", 30.0),
            latency("balanced", 20.0),
            latency("unknown", 1000.0),
        ]);

        let costs: BTreeMap<Scenario, Option<f64>> = costs.into_iter().collect();
        assert_eq!(costs[&Scenario::Short], Some(100.0));
        assert_eq!(costs[&Scenario::Balanced], Some(50.0));
        assert_eq!(costs[&Scenario::Control], Some(2.5));
        assert_eq!(costs[&Scenario::Aggressive], None);
    }

    #[test]
    fn test_client_cost_with_zero_max_does_not_divide_by_zero() {
        let costs = client_cost_percentages(&[latency("control", 0.0)]);
        assert_eq!(costs[0], (Scenario::Control, Some(0.0)));
    }

    #[test]
    fn test_moving_average_starts_with_one_sample() {
        let averages = moving_average(&[2.0, 4.0, 6.0, 8.0], 2);
        assert_eq!(averages, vec![2.0, 3.0, 5.0, 7.0]);

        let averages = moving_average(&[2.0, 4.0, 6.0], 20);
        assert_eq!(averages, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_histogram_counts_every_value() {
        let bins = histogram(&[0.0, 1.0, 2.0, 3.0, 4.0], 4);
        assert_eq!(bins.len(), 4);
        assert_eq!(bins[0].lower, 0.0);
        assert_eq!(bins[3].upper, 4.0);
        let counts: Vec<usize> = bins.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![1, 1, 1, 2]);

        let bins = histogram(&[7.0, 7.0], 20);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 2);
        assert_eq!(bins[0].lower, 6.5);

        assert!(histogram(&[], 20).is_empty());
    }
}
