use std::sync::RwLock;

use thiserror::Error;
use uuid::Uuid;

use crate::models::report::LabReport;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Report store lock poisoned")]
    LockFailed,

    #[error("Duplicate report id: {0}")]
    DuplicateReport(Uuid),
}

/// In-memory report store backed by RwLock.
/// Stands in for the document database the enclosing service provides; the
/// query semantics (user scoping, orderings) are the contract the real
/// storage layer must keep.
pub struct ReportStore {
    reports: RwLock<Vec<LabReport>>,
}

impl ReportStore {
    pub fn new() -> Self {
        Self {
            reports: RwLock::new(Vec::new()),
        }
    }

    /// Persist a report document. Report ids are unique; a duplicate id is
    /// rejected rather than silently replacing history.
    pub fn insert(&self, report: LabReport) -> Result<(), StoreError> {
        let mut reports = self.reports.write().map_err(|_| StoreError::LockFailed)?;

        if reports.iter().any(|r| r.id == report.id) {
            return Err(StoreError::DuplicateReport(report.id));
        }

        tracing::debug!(
            report_id = %report.id,
            findings = report.analysis_results.len(),
            "Stored lab report"
        );
        reports.push(report);
        Ok(())
    }

    /// All reports for a user, newest upload first (listing order).
    pub fn reports_for_user(&self, user_id: &Uuid) -> Result<Vec<LabReport>, StoreError> {
        let reports = self.reports.read().map_err(|_| StoreError::LockFailed)?;

        let mut result: Vec<LabReport> = reports
            .iter()
            .filter(|r| r.user_id == *user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        Ok(result)
    }

    /// All reports for a user, oldest test date first (analytics order).
    pub fn history_for_user(&self, user_id: &Uuid) -> Result<Vec<LabReport>, StoreError> {
        let reports = self.reports.read().map_err(|_| StoreError::LockFailed)?;

        let mut result: Vec<LabReport> = reports
            .iter()
            .filter(|r| r.user_id == *user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.test_date.cmp(&b.test_date));
        Ok(result)
    }

    /// Fetch one report, scoped to its owner.
    pub fn get(&self, report_id: &Uuid, user_id: &Uuid) -> Result<Option<LabReport>, StoreError> {
        let reports = self.reports.read().map_err(|_| StoreError::LockFailed)?;

        Ok(reports
            .iter()
            .find(|r| r.id == *report_id && r.user_id == *user_id)
            .cloned())
    }

    /// Remove a report owned by the user. Returns whether anything was
    /// removed; deleting the underlying file is the collaborator's job and
    /// happens atomically with this call on its side.
    pub fn delete(&self, report_id: &Uuid, user_id: &Uuid) -> Result<bool, StoreError> {
        let mut reports = self.reports.write().map_err(|_| StoreError::LockFailed)?;

        let before = reports.len();
        reports.retain(|r| !(r.id == *report_id && r.user_id == *user_id));
        Ok(reports.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn make_report(user_id: Uuid, name: &str, test_date: NaiveDate, day: u32) -> LabReport {
        LabReport {
            id: Uuid::new_v4(),
            user_id,
            report_name: name.into(),
            test_date,
            lab_name: None,
            doctor_name: None,
            notes: None,
            file_path: format!("uploaded_reports/{name}.png"),
            file_type: "png".into(),
            extracted_text: String::new(),
            analysis_results: vec![],
            uploaded_at: NaiveDate::from_ymd_opt(2026, 6, day)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn insert_and_fetch_scoped_to_owner() {
        let store = ReportStore::new();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();

        let report = make_report(owner, "cbc", NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(), 2);
        let id = report.id;
        store.insert(report).unwrap();

        assert!(store.get(&id, &owner).unwrap().is_some());
        assert!(store.get(&id, &stranger).unwrap().is_none());
        assert!(store.reports_for_user(&stranger).unwrap().is_empty());
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let store = ReportStore::new();
        let report = make_report(
            Uuid::new_v4(),
            "cbc",
            NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            2,
        );
        store.insert(report.clone()).unwrap();

        let err = store.insert(report).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateReport(_)));
    }

    #[test]
    fn listing_is_newest_upload_first() {
        let store = ReportStore::new();
        let user = Uuid::new_v4();
        let date = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();

        store.insert(make_report(user, "first", date, 1)).unwrap();
        store.insert(make_report(user, "second", date, 5)).unwrap();
        store.insert(make_report(user, "third", date, 3)).unwrap();

        let names: Vec<String> = store
            .reports_for_user(&user)
            .unwrap()
            .into_iter()
            .map(|r| r.report_name)
            .collect();
        assert_eq!(names, vec!["second", "third", "first"]);
    }

    #[test]
    fn history_is_oldest_test_date_first() {
        let store = ReportStore::new();
        let user = Uuid::new_v4();

        for (name, month) in [("march", 3), ("january", 1), ("june", 6)] {
            let date = NaiveDate::from_ymd_opt(2026, month, 10).unwrap();
            store.insert(make_report(user, name, date, 20)).unwrap();
        }

        let names: Vec<String> = store
            .history_for_user(&user)
            .unwrap()
            .into_iter()
            .map(|r| r.report_name)
            .collect();
        assert_eq!(names, vec!["january", "march", "june"]);
    }

    #[test]
    fn delete_is_owner_scoped_and_reports_outcome() {
        let store = ReportStore::new();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();

        let report = make_report(owner, "cbc", NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(), 2);
        let id = report.id;
        store.insert(report).unwrap();

        assert!(!store.delete(&id, &stranger).unwrap());
        assert!(store.delete(&id, &owner).unwrap());
        // second delete finds nothing
        assert!(!store.delete(&id, &owner).unwrap());
    }
}
