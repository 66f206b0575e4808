use std::path::{Path, PathBuf};

pub struct Env {}

impl Env {
    pub const SYS_NAME: &'static str = "aggplot";
    pub const PLOTS_DIR: &'static str = "plots";

    pub const P95_GATEWAY_FILE: &'static str = "agg_p95_gateway_latency.csv";
    pub const AVG_GATEWAY_FILE: &'static str = "agg_avg_gateway_latency.csv";
    pub const RPS_GATEWAY_FILE: &'static str = "agg_rps_gateway.csv";
    pub const P95_INTROSPECT_FILE: &'static str = "agg_p95_introspect.csv";
    pub const MISUSE_FILE: &'static str = "agg_misuse_window.csv";
    pub const CLIENT_LATENCY_FILE: &'static str = "agg_client_latency.csv";

    pub const SUMMARY_FILE: &'static str = "summary_stats.csv";

    pub fn usage() -> String {
        format!("Usage: {} runs/_aggregate/<timestamp>/", Self::SYS_NAME)
    }

    pub fn input_path(agg_dir: &Path, file_name: &str) -> PathBuf {
        let mut path = agg_dir.to_path_buf();
        path.push(file_name);
        path
    }

    /// Output directory for every chart and the summary table of a run.
    pub fn plots_root(agg_dir: &Path) -> PathBuf {
        let mut path = agg_dir.to_path_buf();
        path.push(Self::PLOTS_DIR);
        path
    }
}
