//! Console summaries and JSON series export for external plotting.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tireheat_core::experiments::{SlipSweepResult, TimeDomainSummary};

pub const SWEEP_FILE: &str = "slip_sweep.json";
pub const TIME_DOMAIN_FILE: &str = "time_domain.json";

pub fn format_time_domain_summary(summary: &TimeDomainSummary) -> String {
    format!(
        "Time-Domain Experiment Summary:\n  \
         Max Fx: {:.2} N\n  \
         Max Pdiss: {:.2} W\n  \
         Total Ediss: {:.2} J\n  \
         Final kappa: {:.3}",
        summary.max_force, summary.max_power, summary.total_energy, summary.final_slip
    )
}

pub fn format_sweep_summary(result: &SlipSweepResult) -> String {
    let mut out = String::from("Slip Sweep Summary:");
    for curve in &result.curves {
        let peak_force = curve.force.iter().fold(0.0_f64, |m, f| m.max(f.abs()));
        let peak_power = curve.power.iter().copied().fold(0.0_f64, f64::max);
        out.push_str(&format!(
            "\n  Fz = {:.0} N: peak |Fx| {:.2} N, peak Pdiss {:.2} W",
            curve.load, peak_force, peak_power
        ));
    }
    out
}

/// Writes `value` as pretty JSON to `dir/name`, creating `dir` if needed.
pub fn write_json<T: Serialize>(dir: &Path, name: &str, value: &T) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    let path = dir.join(name);
    let json = serde_json::to_string_pretty(value).context("Serialization error")?;
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
