use aggplot::env::Env;
use anyhow::Result;
use std::{
    fs,
    process::{Command, Output},
};
use tempfile::tempdir;

// ===============================================================================================
// Helper Functions
// ===============================================================================================

fn run_aggplot(args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_aggplot"))
        .args(args)
        .env("RUST_LOG", "info")
        .output()?)
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ===============================================================================================
// Tests
// ===============================================================================================

#[test]
fn test_missing_directory_argument_prints_usage() -> Result<()> {
    let output = run_aggplot(&[])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("Usage:"));

    Ok(())
}

#[test]
fn test_each_absent_input_is_warned_once() -> Result<()> {
    let temp_dir = tempdir()?;
    let agg_dir = temp_dir.path();
    fs::write(
        agg_dir.join(Env::MISUSE_FILE),
        "scenario,elapsed_s,http_code\nbalanced,1.0,200\nbalanced,4.0,401\naggressive,0.5,401\n",
    )?;

    let agg_dir_arg = agg_dir.display().to_string();
    let output = run_aggplot(&[agg_dir_arg.as_str(), "--no-plots"])?;
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    let warnings: Vec<&str> = stdout
        .lines()
        .filter(|line| line.contains("WARNING: missing"))
        .collect();
    assert_eq!(warnings.len(), 5);
    for file_name in [
        Env::P95_GATEWAY_FILE,
        Env::AVG_GATEWAY_FILE,
        Env::RPS_GATEWAY_FILE,
        Env::P95_INTROSPECT_FILE,
        Env::CLIENT_LATENCY_FILE,
    ] {
        assert_eq!(
            warnings.iter().filter(|line| line.contains(file_name)).count(),
            1,
            "expected one warning for {file_name}"
        );
    }
    assert!(!stdout.contains(Env::MISUSE_FILE));
    assert!(stdout.contains("All done."));
    assert!(Env::plots_root(agg_dir).join(Env::SUMMARY_FILE).exists());

    Ok(())
}
