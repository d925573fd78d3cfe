use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::models::report::{AnalysisResult, LabReport};

/// Maximum characters of extracted text echoed back to the uploader.
const TEXT_PREVIEW_MAX: usize = 500;

/// Upload metadata collected by the enclosing API layer before analysis.
#[derive(Debug, Clone)]
pub struct ReportDraft {
    pub report_name: String,
    pub test_date: NaiveDate,
    pub lab_name: Option<String>,
    pub doctor_name: Option<String>,
    pub notes: Option<String>,
    /// Where the collaborator saved the upload; opaque to this crate.
    pub file_path: String,
    pub file_type: String,
}

impl ReportDraft {
    /// Assemble the immutable report document. Findings are embedded in the
    /// order the scanner produced them and never revised afterwards; a
    /// re-upload creates a new document instead.
    pub fn into_report(
        self,
        user_id: Uuid,
        extracted_text: String,
        analysis_results: Vec<AnalysisResult>,
    ) -> LabReport {
        LabReport {
            id: Uuid::new_v4(),
            user_id,
            report_name: self.report_name,
            test_date: self.test_date,
            lab_name: self.lab_name,
            doctor_name: self.doctor_name,
            notes: self.notes,
            file_path: self.file_path,
            file_type: self.file_type,
            extracted_text,
            analysis_results,
            uploaded_at: Utc::now().naive_utc(),
        }
    }
}

/// Truncated preview of extracted text for upload responses.
/// Char-based so multibyte OCR output cannot split a code point.
pub fn text_preview(text: &str) -> String {
    if text.chars().count() > TEXT_PREVIEW_MAX {
        let head: String = text.chars().take(TEXT_PREVIEW_MAX).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_text;

    fn draft() -> ReportDraft {
        ReportDraft {
            report_name: "Annual checkup".into(),
            test_date: NaiveDate::from_ymd_opt(2026, 5, 2).unwrap(),
            lab_name: Some("City Lab".into()),
            doctor_name: None,
            notes: None,
            file_path: "uploaded_reports/annual.jpg".into(),
            file_type: "jpg".into(),
        }
    }

    #[test]
    fn report_embeds_findings_in_scan_order() {
        let text = "Glucose: 110 mg/dL\nTotal Cholesterol: 250 mg/dL";
        let results = analyze_text(text);
        let user = Uuid::new_v4();

        let report = draft().into_report(user, text.to_string(), results.clone());

        assert_eq!(report.user_id, user);
        assert_eq!(report.analysis_results, results);
        assert_eq!(report.extracted_text, text);
        assert_eq!(report.report_name, "Annual checkup");
        assert_eq!(report.lab_name.as_deref(), Some("City Lab"));
    }

    #[test]
    fn report_with_no_findings_is_valid() {
        let report = draft().into_report(Uuid::new_v4(), String::new(), vec![]);
        assert!(report.analysis_results.is_empty());
    }

    #[test]
    fn short_text_passes_through_preview() {
        assert_eq!(text_preview("Glucose: 95 mg/dL"), "Glucose: 95 mg/dL");
    }

    #[test]
    fn long_text_is_truncated_with_ellipsis() {
        let text = "x".repeat(600);
        let preview = text_preview(&text);
        assert_eq!(preview.len(), 503);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn preview_respects_char_boundaries() {
        let text = "é".repeat(501);
        let preview = text_preview(&text);
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), 503);
    }
}
