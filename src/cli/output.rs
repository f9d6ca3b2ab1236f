//! Output formatting for CLI

use crate::models::{CorpusInventory, ScrambleReport};

/// Format a finished run as pretty JSON
#[must_use]
pub fn format_report_json(report: &ScrambleReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}

/// Format a corpus inventory as pretty JSON
#[must_use]
pub fn format_inventory_json(inventory: &CorpusInventory) -> String {
    let files: Vec<serde_json::Value> = inventory
        .files
        .iter()
        .map(|file| {
            serde_json::json!({
                "path": file.path.to_string_lossy(),
                "line_count": file.line_count,
                "eligible_lines": file.eligible_lines(),
            })
        })
        .collect();

    let output = serde_json::json!({
        "root": inventory.root,
        "file_count": inventory.files.len(),
        "eligible_lines": inventory.eligible_lines,
        "files": files,
    });

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}

/// One-line human summary of a report, for stderr
#[must_use]
pub fn format_report_text(report: &ScrambleReport) -> String {
    format!(
        "Sampled {}/{} lines from {} files ({} eligible, p={:.6}) in {} passes",
        report.emitted,
        report.requested,
        report.files,
        report.eligible_lines,
        report.selection_probability,
        report.passes
    )
}
