//! Terminal and JSON rendering of diagnostic reports.
//!
//! The assertion layer sitting on top of the engine owns pass/fail message
//! conventions; these helpers give it a ready-made block with the scale, the
//! gathered indicators, and the probed range.

use colored::Colorize;

use crate::result::{Report, ResultSet};

/// Format a report and its result set as a human-readable block.
///
/// # Example output
///
/// ```text
/// Complexity report
///   scale:      0.021400
///   samples:    18 of n = 1..=20
///   indicators: min 0.019800  max 0.442000  mean 0.186300
///   values:     [0.0198, 0.0402, 0.0617, ...]
/// ```
pub fn format_report(report: &Report, set: &ResultSet) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "Complexity report".bold()));
    match report.scale {
        Some(scale) => out.push_str(&format!("  scale:      {scale:.6}\n")),
        None => out.push_str(&format!("  scale:      {}\n", "uncalibrated".yellow())),
    }
    out.push_str(&format!(
        "  samples:    {} of n = {}..={}\n",
        report.samples, report.range_start, report.range_end
    ));
    if let (Some(min), Some(max), Some(mean)) = (report.min, report.max, report.mean) {
        out.push_str(&format!(
            "  indicators: min {min:.6}  max {max:.6}  mean {mean:.6}\n"
        ));
    }
    if !set.is_empty() {
        let values: Vec<String> = set.iter().map(|(_, v)| format!("{v:.4}")).collect();
        out.push_str(&format!("  values:     [{}]\n", values.join(", ")));
    }

    out
}

/// Serialize a report as pretty-printed JSON.
pub fn report_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
