//! Custom cargo commands for postlens.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests (parallel and sequential builds)
//!   cargo xtask check     - Quick check
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::env;
use std::path::PathBuf;
use std::process::Command;

const FIXTURE_CORPUS: &str = "data/fixtures/blog";
const SMOKE_OUTPUT: &str = "target/xtask/analysis";

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (tests + clippy + fixture smoke run)
  test      Run all Rust tests, with and without the parallel feature
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("postlens Verification Suite");
    println!("==========================================\n");

    // Step 1: Fixture corpus is complete
    println!("[1/4] Checking fixture corpus...");
    check_fixture_corpus()?;
    println!("✓ Fixture corpus complete\n");

    // Step 2: Run tests
    println!("[2/4] Running Rust tests...");
    test()?;
    println!("✓ All Rust tests passed\n");

    // Step 3: Clippy
    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    // Step 4: Run the CLI against the fixture corpus
    println!("[4/4] Analyzing fixture corpus...");
    smoke_analyze()?;
    println!("✓ analysis.json written\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
    println!("\nSafe to commit changes.");

    Ok(())
}

/// Run all tests, once per feature set
fn test() -> Result<()> {
    run_cargo(&["test", "--quiet"])?;
    run_cargo(&["test", "--quiet", "--no-default-features"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// Every file the fixture manifest lists must exist.
fn check_fixture_corpus() -> Result<()> {
    let dir = project_root()?.join(FIXTURE_CORPUS);
    let manifest_path = dir.join("manifest.json");
    let manifest = std::fs::read_to_string(&manifest_path)
        .with_context(|| format!("Failed to read {}", manifest_path.display()))?;

    let listed = listed_documents(&manifest)?;
    if listed.is_empty() {
        bail!("{} lists no documents", manifest_path.display());
    }

    let missing: Vec<_> = listed
        .iter()
        .filter(|name| !dir.join(name).exists())
        .collect();
    if !missing.is_empty() {
        bail!("Fixture documents missing: {:?}", missing);
    }

    Ok(())
}

fn listed_documents(manifest: &str) -> Result<Vec<String>> {
    let manifest: Value = serde_json::from_str(manifest).context("Invalid manifest JSON")?;
    Ok(manifest["documents"]
        .as_array()
        .map(|docs| {
            docs.iter()
                .filter_map(|doc| doc.as_str().map(str::to_owned))
                .collect()
        })
        .unwrap_or_default())
}

fn smoke_analyze() -> Result<()> {
    let root = project_root()?;
    run_cargo(&[
        "run",
        "--quiet",
        "--",
        "analyze",
        "--input",
        FIXTURE_CORPUS,
        "--output",
        SMOKE_OUTPUT,
    ])?;

    let report = root.join(SMOKE_OUTPUT).join("analysis.json");
    if !report.exists() {
        bail!("{} was not written", report.display());
    }
    Ok(())
}
