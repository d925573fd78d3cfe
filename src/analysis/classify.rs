use crate::models::enums::{ResultStatus, TestCategory};

use super::messages::Recommendations;

/// A severity status and its advisory, produced together by a single
/// classification branch.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub status: ResultStatus,
    pub recommendation: &'static str,
}

impl Classification {
    fn new(status: ResultStatus, recommendation: &'static str) -> Self {
        Self {
            status,
            recommendation,
        }
    }

    fn unknown(recommendation: &'static str) -> Self {
        Self::new(ResultStatus::Unknown, recommendation)
    }
}

/// Classify a blood sugar reading. Values in mmol/L are converted to mg/dL
/// (factor 18) before thresholding; unit comparison is case-insensitive
/// since captures arrive lowercased.
pub fn classify_blood_sugar(value: &str, unit: &str) -> Classification {
    let Ok(raw) = value.trim().parse::<f64>() else {
        return Classification::unknown(Recommendations::unknown_value());
    };

    let mg_dl = if unit.trim().eq_ignore_ascii_case("mmol/l") {
        raw * 18.0
    } else {
        raw
    };

    if mg_dl < 70.0 {
        Classification::new(ResultStatus::Low, Recommendations::blood_sugar_low())
    } else if mg_dl <= 100.0 {
        Classification::new(ResultStatus::Normal, Recommendations::blood_sugar_normal())
    } else if mg_dl <= 125.0 {
        Classification::new(ResultStatus::High, Recommendations::blood_sugar_high())
    } else {
        Classification::new(ResultStatus::Critical, Recommendations::blood_sugar_critical())
    }
}

/// Classify a blood pressure reading pair.
/// The branch order is load-bearing: low is evaluated before normal, normal
/// before high, and the conditions are not a clean partition (the high
/// branch is an OR). Downstream behavior depends on this exact precedence.
pub fn classify_blood_pressure(systolic: &str, diastolic: &str) -> Classification {
    let (Ok(sys), Ok(dia)) = (
        systolic.trim().parse::<f64>(),
        diastolic.trim().parse::<f64>(),
    ) else {
        return Classification::unknown(Recommendations::blood_pressure_unknown());
    };

    if sys < 90.0 || dia < 60.0 {
        Classification::new(ResultStatus::Low, Recommendations::blood_pressure_low())
    } else if sys <= 120.0 && dia <= 80.0 {
        Classification::new(ResultStatus::Normal, Recommendations::blood_pressure_normal())
    } else if sys <= 139.0 || dia <= 89.0 {
        Classification::new(ResultStatus::High, Recommendations::blood_pressure_high())
    } else {
        Classification::new(
            ResultStatus::Critical,
            Recommendations::blood_pressure_critical(),
        )
    }
}

/// Classify total cholesterol. HDL/LDL are accepted by the upstream report
/// but do not participate in the decision.
pub fn classify_cholesterol(total: &str) -> Classification {
    let Ok(val) = total.trim().parse::<f64>() else {
        return Classification::unknown(Recommendations::cholesterol_unknown());
    };

    if val < 200.0 {
        Classification::new(ResultStatus::Normal, Recommendations::cholesterol_normal())
    } else if val <= 239.0 {
        Classification::new(ResultStatus::High, Recommendations::cholesterol_high())
    } else {
        Classification::new(ResultStatus::Critical, Recommendations::cholesterol_critical())
    }
}

/// Classify a hemoglobin value (g/dL).
pub fn classify_hemoglobin(value: &str) -> Classification {
    let Ok(val) = value.trim().parse::<f64>() else {
        return Classification::unknown(Recommendations::unknown_value());
    };

    if val < 12.0 {
        Classification::new(ResultStatus::Low, Recommendations::hemoglobin_low())
    } else if val <= 15.0 {
        Classification::new(ResultStatus::Normal, Recommendations::hemoglobin_normal())
    } else {
        Classification::new(ResultStatus::High, Recommendations::hemoglobin_high())
    }
}

/// Single-value dispatch used by the extraction scanner.
/// Categories without a single-value contract (blood pressure needs a pair,
/// creatinine has no thresholds on record) land in the unknown branch, the
/// same branch any unexpected input shape falls into.
pub fn classify(category: &TestCategory, value: &str, unit: &str) -> Classification {
    match category {
        TestCategory::BloodSugar => classify_blood_sugar(value, unit),
        TestCategory::Cholesterol => classify_cholesterol(value),
        TestCategory::Hemoglobin => classify_hemoglobin(value),
        TestCategory::Creatinine | TestCategory::BloodPressure => {
            Classification::unknown(Recommendations::unknown_value())
        }
    }
}
