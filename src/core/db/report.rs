use std::sync::Arc;

use uuid::Uuid;

use crate::models::{NewReport, Report};

/// Daily reports, newest first. Reports are never edited or removed.
#[derive(Debug, Clone, Default)]
pub struct ReportStore {
    reports: Arc<[Report]>,
}

impl ReportStore {
    /// `reports` must already be ordered newest first.
    pub fn new(reports: Vec<Report>) -> Self {
        Self {
            reports: reports.into(),
        }
    }

    pub fn add(&mut self, fields: NewReport) -> Report {
        let report = fields.into_report(Uuid::new_v4().to_string());
        let mut next = Vec::with_capacity(self.reports.len() + 1);
        next.push(report.clone());
        next.extend(self.reports.iter().cloned());
        self.reports = next.into();
        report
    }

    pub fn list(&self) -> &[Report] {
        &self.reports
    }

    /// At most `limit` of the newest reports.
    pub fn recent(&self, limit: usize) -> &[Report] {
        &self.reports[..limit.min(self.reports.len())]
    }

    pub fn snapshot(&self) -> Arc<[Report]> {
        self.reports.clone()
    }
}

pub trait ReportRepository {
    fn get_reports(&self) -> &[Report];
    fn get_recent_reports(&self, limit: usize) -> &[Report];
    fn add_report(&mut self, report: NewReport) -> impl Future<Output = Report>;
}
