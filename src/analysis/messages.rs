/// Advisory template builder.
/// One fixed string per (category, status) branch; the UI and stored
/// documents show these verbatim, so the wording is load-bearing.
pub struct Recommendations;

impl Recommendations {
    // --- Blood sugar ---

    pub fn blood_sugar_low() -> &'static str {
        "Low blood sugar - consult doctor immediately. Have some glucose/sugar."
    }

    pub fn blood_sugar_normal() -> &'static str {
        "Normal fasting blood sugar level. Maintain healthy diet."
    }

    pub fn blood_sugar_high() -> &'static str {
        "Pre-diabetic range. Consider lifestyle changes and doctor consultation."
    }

    pub fn blood_sugar_critical() -> &'static str {
        "Diabetic range. Immediate medical attention required."
    }

    // --- Blood pressure ---

    pub fn blood_pressure_low() -> &'static str {
        "Low blood pressure. Monitor and consult doctor if symptoms persist."
    }

    pub fn blood_pressure_normal() -> &'static str {
        "Normal blood pressure. Maintain healthy lifestyle."
    }

    pub fn blood_pressure_high() -> &'static str {
        "Pre-hypertension. Consider lifestyle modifications."
    }

    pub fn blood_pressure_critical() -> &'static str {
        "High blood pressure. Medical attention recommended."
    }

    pub fn blood_pressure_unknown() -> &'static str {
        "Unable to analyze blood pressure values."
    }

    // --- Cholesterol ---

    pub fn cholesterol_normal() -> &'static str {
        "Good cholesterol level. Maintain healthy diet."
    }

    pub fn cholesterol_high() -> &'static str {
        "Borderline high cholesterol. Consider dietary changes."
    }

    pub fn cholesterol_critical() -> &'static str {
        "High cholesterol. Medical consultation recommended."
    }

    pub fn cholesterol_unknown() -> &'static str {
        "Unable to analyze cholesterol values."
    }

    // --- Hemoglobin ---

    pub fn hemoglobin_low() -> &'static str {
        "Low hemoglobin. Iron-rich foods and medical consultation recommended."
    }

    pub fn hemoglobin_normal() -> &'static str {
        "Normal hemoglobin level."
    }

    pub fn hemoglobin_high() -> &'static str {
        "High hemoglobin. Further investigation may be needed."
    }

    /// Shared fallback for values that cannot be analyzed.
    pub fn unknown_value() -> &'static str {
        "Unable to analyze this value."
    }
}
