pub mod classify;
pub mod extract;
pub mod messages;
pub mod reference;

pub use classify::*;
pub use extract::*;
pub use messages::*;
pub use reference::*;

use std::time::Instant;

use crate::models::report::AnalysisResult;

/// Analyze a report's extracted text and log a summary.
/// Thin wrapper over [`analyze_text`] used by the upload path; same
/// contract, never fails, empty text yields an empty list.
pub fn analyze_report_text(text: &str) -> Vec<AnalysisResult> {
    let start = Instant::now();
    let results = extract::analyze_text(text);

    tracing::info!(
        findings = results.len(),
        chars_scanned = text.len(),
        processing_ms = start.elapsed().as_millis() as u64,
        "Lab report analysis complete"
    );

    results
}
