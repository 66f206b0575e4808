use crate::env::Env;
use std::fmt;

/// Time-series metrics exported by the load-testing harness. Each one has
/// its own input file, summary columns, and charts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Metric {
    P95Gateway,
    AvgGateway,
    RpsGateway,
    P95Introspect,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::P95Gateway => write!(f, "p95_gateway"),
            Metric::AvgGateway => write!(f, "avg_gateway"),
            Metric::RpsGateway => write!(f, "rps_gateway"),
            Metric::P95Introspect => write!(f, "p95_introspect"),
        }
    }
}

impl Metric {
    pub const DEFAULT_CONTROL_P95_GATEWAY_MS: f64 = 20.0;
    pub const DEFAULT_CONTROL_AVG_GATEWAY_MS: f64 = 10.0;
    pub const DEFAULT_CONTROL_RPS_GATEWAY: f64 = 100.0;
    pub const DEFAULT_CONTROL_P95_INTROSPECT_MS: f64 = 5.0;

    pub fn iter_variants() -> std::slice::Iter<'static, Metric> {
        static VARIANTS: [Metric; 4] = [
            Metric::P95Gateway,
            Metric::AvgGateway,
            Metric::RpsGateway,
            Metric::P95Introspect,
        ];
        VARIANTS.iter()
    }

    pub fn input_file(&self) -> &'static str {
        match self {
            Metric::P95Gateway => Env::P95_GATEWAY_FILE,
            Metric::AvgGateway => Env::AVG_GATEWAY_FILE,
            Metric::RpsGateway => Env::RPS_GATEWAY_FILE,
            Metric::P95Introspect => Env::P95_INTROSPECT_FILE,
        }
    }

    /// Prefix of the `_mean`/`_median` columns in the summary table.
    pub fn summary_name(&self) -> &'static str {
        match self {
            Metric::P95Gateway => "p95_gateway_ms",
            Metric::AvgGateway => "avg_gateway_ms",
            Metric::RpsGateway => "rps_gateway",
            Metric::P95Introspect => "p95_introspect_ms",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Metric::RpsGateway => "req/s",
            _ => "ms",
        }
    }

    pub fn timeseries_title(&self) -> &'static str {
        match self {
            Metric::P95Gateway => "Gateway p95 latency (ms)",
            Metric::AvgGateway => "Gateway avg latency (ms)",
            Metric::RpsGateway => "Gateway throughput (req/s)",
            Metric::P95Introspect => "Auth introspection p95 (ms)",
        }
    }

    pub fn timeseries_file(&self) -> &'static str {
        match self {
            Metric::P95Gateway => "p95_gateway_latency_timeseries.png",
            Metric::AvgGateway => "avg_gateway_latency_timeseries.png",
            Metric::RpsGateway => "rps_gateway_timeseries.png",
            Metric::P95Introspect => "p95_introspect_timeseries.png",
        }
    }

    pub fn summary_title(&self) -> &'static str {
        match self {
            Metric::P95Gateway => "Gateway p95 Latency by Scenario",
            Metric::AvgGateway => "Gateway Average Latency by Scenario",
            Metric::RpsGateway => "Gateway Throughput by Scenario",
            Metric::P95Introspect => "Auth Introspect p95 by Scenario",
        }
    }

    pub fn summary_ylabel(&self) -> &'static str {
        match self {
            Metric::P95Gateway => "p95 Latency (ms)",
            Metric::AvgGateway => "Avg Latency (ms)",
            Metric::RpsGateway => "Throughput (req/s)",
            Metric::P95Introspect => "p95 Introspect (ms)",
        }
    }

    pub fn summary_file(&self) -> &'static str {
        match self {
            Metric::P95Gateway => "summary_p95_gateway_latency.png",
            Metric::AvgGateway => "summary_avg_gateway_latency.png",
            Metric::RpsGateway => "summary_rps_gateway.png",
            Metric::P95Introspect => "summary_p95_introspect.png",
        }
    }

    pub fn default_control(&self) -> f64 {
        match self {
            Metric::P95Gateway => Self::DEFAULT_CONTROL_P95_GATEWAY_MS,
            Metric::AvgGateway => Self::DEFAULT_CONTROL_AVG_GATEWAY_MS,
            Metric::RpsGateway => Self::DEFAULT_CONTROL_RPS_GATEWAY,
            Metric::P95Introspect => Self::DEFAULT_CONTROL_P95_INTROSPECT_MS,
        }
    }
}
