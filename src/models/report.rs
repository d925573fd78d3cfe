use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::ResultStatus;

/// A single classified finding extracted from a lab report.
///
/// `status` and `recommendation` always come from the same classification
/// branch; construction goes through the classifier, never field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Canonical display name, e.g. "Blood Glucose".
    pub test_name: String,
    /// Display string as captured, e.g. "110 mg/dl".
    pub value: String,
    pub unit: String,
    /// Fixed clinical band used for classification, not per-patient.
    pub reference_range: String,
    pub status: ResultStatus,
    pub recommendation: String,
}

/// An analyzed lab report document.
///
/// `analysis_results` is embedded verbatim in scan order and never mutated
/// after creation; a re-upload produces a new document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabReport {
    pub id: Uuid,
    pub user_id: Uuid,
    pub report_name: String,
    pub test_date: NaiveDate,
    pub lab_name: Option<String>,
    pub doctor_name: Option<String>,
    pub notes: Option<String>,
    /// Opaque reference into the external file store.
    pub file_path: String,
    pub file_type: String,
    pub extracted_text: String,
    pub analysis_results: Vec<AnalysisResult>,
    pub uploaded_at: NaiveDateTime,
}
