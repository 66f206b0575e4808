use crate::{
    env::Env,
    tasks::{
        aggregate::{self, MetricSummary, SummaryTable, CONTROL_TTL_SECONDS},
        baseline,
        load::{self, ClientLatencyRow, MisuseRow, SeriesRow},
        metric::Metric,
        plot,
    },
};
use anyhow::Result;
use clap::Args;
use log::{error, info};
use std::{collections::BTreeMap, fs, path::Path};

pub const DEFAULT_MOVING_AVG_WINDOW: usize = 20;
pub const DEFAULT_HISTOGRAM_BINS: usize = 20;

/// Tunables of a report run. The control values are assumptions about the
/// baseline deployment, not measurements.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportConfig {
    pub control_p95_gateway: Option<f64>,
    pub control_avg_gateway: Option<f64>,
    pub control_rps_gateway: Option<f64>,
    pub control_p95_introspect: Option<f64>,
    pub control_ttl_s: f64,
    pub moving_avg_window: usize,
    pub histogram_bins: usize,
    pub render_charts: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            control_p95_gateway: Some(Metric::P95Gateway.default_control()),
            control_avg_gateway: Some(Metric::AvgGateway.default_control()),
            control_rps_gateway: Some(Metric::RpsGateway.default_control()),
            control_p95_introspect: Some(Metric::P95Introspect.default_control()),
            control_ttl_s: CONTROL_TTL_SECONDS,
            moving_avg_window: DEFAULT_MOVING_AVG_WINDOW,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            render_charts: true,
        }
    }
}

impl ReportConfig {
    pub fn control_for(&self, metric: &Metric) -> Option<f64> {
        match metric {
            Metric::P95Gateway => self.control_p95_gateway,
            Metric::AvgGateway => self.control_avg_gateway,
            Metric::RpsGateway => self.control_rps_gateway,
            Metric::P95Introspect => self.control_p95_introspect,
        }
    }
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Assumed gateway p95 latency of the control scenario (ms)
    #[arg(long, default_value = "20")]
    control_p95_gateway: f64,
    /// Assumed gateway average latency of the control scenario (ms)
    #[arg(long, default_value = "10")]
    control_avg_gateway: f64,
    /// Assumed gateway throughput of the control scenario (req/s)
    #[arg(long, default_value = "100")]
    control_rps_gateway: f64,
    /// Assumed auth introspection p95 latency of the control scenario (ms)
    #[arg(long, default_value = "5")]
    control_p95_introspect: f64,
    /// Do not add the assumed control values to the time series
    #[arg(long)]
    no_control_baseline: bool,
    /// Token lifetime reported as the control scenario's misuse window (s)
    #[arg(long, default_value = "86400")]
    control_ttl_secs: f64,
    /// Number of samples in the client latency moving average
    #[arg(long, default_value = "20")]
    moving_avg_window: usize,
    /// Number of bins in the client latency histograms
    #[arg(long, default_value = "20")]
    histogram_bins: usize,
    /// Only write the summary table, skip every chart
    #[arg(long)]
    no_plots: bool,
}

impl From<&ReportArgs> for ReportConfig {
    fn from(args: &ReportArgs) -> Self {
        let control = |value: f64| (!args.no_control_baseline).then_some(value);

        Self {
            control_p95_gateway: control(args.control_p95_gateway),
            control_avg_gateway: control(args.control_avg_gateway),
            control_rps_gateway: control(args.control_rps_gateway),
            control_p95_introspect: control(args.control_p95_introspect),
            control_ttl_s: args.control_ttl_secs,
            moving_avg_window: args.moving_avg_window,
            histogram_bins: args.histogram_bins,
            render_charts: !args.no_plots,
        }
    }
}

/// Every table loaded from an aggregate run directory, with the control
/// baselines already in place.
#[derive(Clone, Debug, Default)]
pub struct ReportInputs {
    pub series: BTreeMap<Metric, Vec<SeriesRow>>,
    pub misuse: Vec<MisuseRow>,
    pub client_latency: Vec<ClientLatencyRow>,
}

#[derive(Clone, Debug)]
pub struct ReportAggregates {
    pub misuse_windows: BTreeMap<String, f64>,
    pub summaries: BTreeMap<Metric, MetricSummary>,
    pub summary: SummaryTable,
}

#[derive(Debug)]
pub struct Report {}

impl Report {
    pub fn load(agg_dir: &Path, config: &ReportConfig) -> Result<ReportInputs> {
        let misuse = load::load_misuse(&Env::input_path(agg_dir, Env::MISUSE_FILE))?;

        let mut series = BTreeMap::new();
        for metric in Metric::iter_variants() {
            let rows = load::load_series(&Env::input_path(agg_dir, metric.input_file()))?;
            series.insert(
                *metric,
                baseline::with_constant_control(rows, config.control_for(metric)),
            );
        }

        let client_latency = baseline::with_derived_control(load::load_client_latency(
            &Env::input_path(agg_dir, Env::CLIENT_LATENCY_FILE),
        )?);

        Ok(ReportInputs {
            series,
            misuse,
            client_latency,
        })
    }

    /// Pure aggregation step: misuse windows, per-metric summaries, and the
    /// merged summary table.
    pub fn aggregate(inputs: &ReportInputs, config: &ReportConfig) -> ReportAggregates {
        let misuse_windows = aggregate::misuse_windows(&inputs.misuse, config.control_ttl_s);

        let summaries: BTreeMap<Metric, MetricSummary> = Metric::iter_variants()
            .map(|metric| {
                let rows = inputs
                    .series
                    .get(metric)
                    .map(|rows| rows.as_slice())
                    .unwrap_or_default();
                (*metric, aggregate::summarize(rows, metric.summary_name()))
            })
            .collect();

        let summary = aggregate::merge_summary(&misuse_windows, &summaries);

        ReportAggregates {
            misuse_windows,
            summaries,
            summary,
        }
    }

    fn render_inputs(inputs: &ReportInputs, plots_dir: &Path, config: &ReportConfig) -> Result<()> {
        plot::plot_client_latency_summary(
            &inputs.client_latency,
            &plots_dir.join("client_refresh_latency_summary.png"),
        )?;
        plot::plot_client_latency_moving_avg(
            &inputs.client_latency,
            config.moving_avg_window,
            &plots_dir.join("client_refresh_latency_moving_avg.png"),
        )?;
        plot::plot_client_latency_histogram(
            &inputs.client_latency,
            config.histogram_bins,
            &plots_dir.join("client_refresh_latency_histogram.png"),
        )?;

        for (metric, rows) in &inputs.series {
            plot::plot_timeseries(rows, metric, &plots_dir.join(metric.timeseries_file()))?;
        }

        Ok(())
    }

    /// Load, aggregate, and render every output of one aggregate run
    /// directory into `<agg_dir>/plots`.
    pub fn run(agg_dir: &Path, config: &ReportConfig) -> Result<()> {
        let plots_dir = Env::plots_root(agg_dir);
        fs::create_dir_all(&plots_dir).map_err(|e| {
            let reason = format!(
                "error creating plots directory (path={}, error={e:?})",
                plots_dir.display()
            );
            error!("{reason}");
            anyhow::anyhow!(reason)
        })?;

        let inputs = Self::load(agg_dir, config)?;
        let aggregates = Self::aggregate(&inputs, config);

        if config.render_charts {
            Self::render_inputs(&inputs, &plots_dir, config)?;
            plot::plot_misuse_windows(
                &aggregates.misuse_windows,
                &plots_dir.join("misuse_window_bars.png"),
            )?;
        }

        let summary_path = plots_dir.join(Env::SUMMARY_FILE);
        aggregates.summary.write_csv(&summary_path)?;
        info!("Wrote {}", summary_path.display());

        if config.render_charts {
            for metric in Metric::iter_variants() {
                plot::plot_summary_metric(
                    &aggregates.summary,
                    metric,
                    &plots_dir.join(metric.summary_file()),
                )?;
            }
        }

        info!("All done.");

        Ok(())
    }
}
