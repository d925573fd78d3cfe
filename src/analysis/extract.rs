use crate::models::enums::TestCategory;
use crate::models::report::AnalysisResult;

use super::classify::classify;
use super::reference::{CategoryRule, CATEGORY_RULES};

/// An extracted but unclassified clinical value.
/// Lives only within one scan pass; only the derived [`AnalysisResult`] is
/// ever persisted.
#[derive(Debug, Clone)]
pub struct RawMeasurement {
    pub category: TestCategory,
    /// Numeric capture, still textual; the classifier owns the parse.
    pub value: String,
    /// Unit token as captured, e.g. "mg/dl"; possibly non-standard.
    pub unit: String,
}

/// Scan free-form OCR text line by line and return classified findings in
/// encounter order.
///
/// Matching is line-scoped: a value split across lines is not found. A line
/// may contribute one finding per category; repeats across lines are kept,
/// not deduplicated. Infallible by contract: empty or unrecognizable text
/// yields an empty list.
pub fn analyze_text(text: &str) -> Vec<AnalysisResult> {
    let mut results = Vec::new();

    for raw_line in text.lines() {
        let lowered = raw_line.to_lowercase();
        let line = lowered.trim();
        if line.is_empty() {
            continue;
        }

        for rule in CATEGORY_RULES.iter() {
            if let Some(measurement) = first_match(rule, line) {
                results.push(to_result(rule, &measurement));
            }
        }
    }

    results
}

/// Try a category's patterns in priority order; the first one that matches
/// wins for this line, later patterns are not consulted.
fn first_match(rule: &CategoryRule, line: &str) -> Option<RawMeasurement> {
    for pattern in &rule.patterns {
        let Some(caps) = pattern.captures(line) else {
            continue;
        };
        let (Some(value), Some(unit)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        return Some(RawMeasurement {
            category: rule.category.clone(),
            value: value.as_str().to_string(),
            unit: unit.as_str().to_string(),
        });
    }
    None
}

fn to_result(rule: &CategoryRule, measurement: &RawMeasurement) -> AnalysisResult {
    let classification = classify(&measurement.category, &measurement.value, &measurement.unit);

    AnalysisResult {
        test_name: rule.canonical_name.to_string(),
        value: format!("{} {}", measurement.value, measurement.unit),
        unit: measurement.unit.clone(),
        reference_range: rule.reference_range.to_string(),
        status: classification.status,
        recommendation: classification.recommendation.to_string(),
    }
}
