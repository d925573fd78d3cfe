use std::sync::LazyLock;

use regex::Regex;

use crate::models::enums::TestCategory;

/// One scanned test category: display metadata plus its extraction patterns
/// in priority order.
pub struct CategoryRule {
    pub category: TestCategory,
    /// Canonical display name used in every emitted result.
    pub canonical_name: &'static str,
    /// Fixed clinical band shown alongside the value.
    pub reference_range: &'static str,
    /// Tried in order; the first match wins for this category on a line.
    pub patterns: Vec<Regex>,
}

/// Ordered extraction dispatch table.
///
/// Category order and per-category pattern order are part of the output
/// contract: the scanner walks this table top to bottom for every line, so
/// identical input text always yields an identically ordered result list.
/// Patterns are lowercase because lines are lowercased before matching.
pub static CATEGORY_RULES: LazyLock<Vec<CategoryRule>> = LazyLock::new(|| {
    vec![
        CategoryRule {
            category: TestCategory::BloodSugar,
            canonical_name: "Blood Glucose",
            reference_range: "70-100 mg/dL (fasting)",
            patterns: compile(&[
                r"glucose.*?(\d+\.?\d*)\s*(mg/dl|mmol/l)",
                r"sugar.*?(\d+\.?\d*)\s*(mg/dl|mmol/l)",
                r"fbs.*?(\d+\.?\d*)\s*(mg/dl|mmol/l)",
                r"rbs.*?(\d+\.?\d*)\s*(mg/dl|mmol/l)",
            ]),
        },
        CategoryRule {
            category: TestCategory::Cholesterol,
            canonical_name: "Total Cholesterol",
            reference_range: "<200 mg/dL",
            patterns: compile(&[
                r"cholesterol.*?(\d+\.?\d*)\s*(mg/dl)",
                r"total cholesterol.*?(\d+\.?\d*)\s*(mg/dl)",
            ]),
        },
        CategoryRule {
            category: TestCategory::Hemoglobin,
            canonical_name: "Hemoglobin",
            reference_range: "12-15 g/dL",
            patterns: compile(&[
                r"hemoglobin.*?(\d+\.?\d*)\s*(g/dl|gm/dl)",
                r"hb.*?(\d+\.?\d*)\s*(g/dl|gm/dl)",
            ]),
        },
    ]
});

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
}
