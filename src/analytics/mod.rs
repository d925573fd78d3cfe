use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::enums::ResultStatus;
use crate::models::report::LabReport;

/// One point in a per-category trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    /// Display value as stored, e.g. "110 mg/dl".
    pub value: String,
    pub status: ResultStatus,
}

/// Rollup of a user's report history for the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthTrends {
    pub blood_sugar: Vec<TrendPoint>,
    pub cholesterol: Vec<TrendPoint>,
    pub hemoglobin: Vec<TrendPoint>,
    pub total_reports: usize,
    pub critical_alerts: usize,
    pub normal_results: usize,
}

/// Percentage of classified findings that were normal rather than critical,
/// across every result embedded in the given reports.
/// Low/high/unknown findings do not participate. Defined as 0 when nothing
/// was classified either way; the division-by-zero guard is part of the
/// contract, not an accident.
pub fn health_score(reports: &[LabReport]) -> u8 {
    let mut normal = 0u32;
    let mut critical = 0u32;

    for report in reports {
        for result in &report.analysis_results {
            match result.status {
                ResultStatus::Normal => normal += 1,
                ResultStatus::Critical => critical += 1,
                _ => {}
            }
        }
    }

    let classified = normal + critical;
    if classified == 0 {
        return 0;
    }

    (f64::from(normal) / f64::from(classified) * 100.0).round() as u8
}

/// Tally per-category trend series and status counters across a user's
/// reports. Reports are consumed in the order given; pass them sorted by
/// test date (see `ReportStore::history_for_user`) for chronological series.
/// Pure reduction over already-classified data; nothing is re-classified.
pub fn health_trends(reports: &[LabReport]) -> HealthTrends {
    let mut trends = HealthTrends {
        total_reports: reports.len(),
        ..Default::default()
    };

    for report in reports {
        for result in &report.analysis_results {
            let test_name = result.test_name.to_lowercase();
            let point = TrendPoint {
                date: report.test_date,
                value: result.value.clone(),
                status: result.status.clone(),
            };

            if test_name.contains("glucose") || test_name.contains("sugar") {
                trends.blood_sugar.push(point);
            } else if test_name.contains("cholesterol") {
                trends.cholesterol.push(point);
            } else if test_name.contains("hemoglobin") {
                trends.hemoglobin.push(point);
            }

            match result.status {
                ResultStatus::Critical => trends.critical_alerts += 1,
                ResultStatus::Normal => trends.normal_results += 1,
                _ => {}
            }
        }
    }

    trends
}
