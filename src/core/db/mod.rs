mod prospect;
mod report;
mod seed;
mod state;
mod storage;

use serde::{Serialize, de::DeserializeOwned};
use time::{Date, OffsetDateTime};

use crate::{
    core::dashboard::{self, Dashboard},
    error::StoreError,
    models::{NewProspect, NewReport, Prospect, Report},
};

pub use prospect::{ProspectRepository, ProspectStore};
pub use report::{ReportRepository, ReportStore};
pub use seed::{seed_prospects, seed_reports};
pub use state::SqliteStorage;
pub use storage::{LocalStorage, MemoryStorage};

pub const PROSPECTS_KEY: &str = "prospects";
pub const REPORTS_KEY: &str = "reports";

/// Root owner of the prospect and report collections. Every mutation is
/// written back to `storage` as a whole JSON array.
#[derive(Debug)]
pub struct Workspace<S> {
    storage: S,
    prospects: ProspectStore,
    reports: ReportStore,
}

impl<S: LocalStorage> Workspace<S> {
    /// Read both collections from `storage`. Missing or unreadable data
    /// falls back to the seed set dated relative to `today`.
    pub async fn load(storage: S, today: Date) -> Self {
        let prospects =
            load_collection(&storage, PROSPECTS_KEY, || seed_prospects(today)).await;
        let reports = load_collection(&storage, REPORTS_KEY, || seed_reports(today)).await;
        Self {
            storage,
            prospects: ProspectStore::new(prospects),
            reports: ReportStore::new(reports),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    pub fn prospect_store(&self) -> &ProspectStore {
        &self.prospects
    }

    pub fn report_store(&self) -> &ReportStore {
        &self.reports
    }

    pub fn dashboard(&self, now: OffsetDateTime) -> Dashboard<'_> {
        dashboard::summarize(now, self.prospects.list())
    }

    async fn persist_prospects(&self) {
        persist_collection(&self.storage, PROSPECTS_KEY, self.prospects.list()).await;
    }

    async fn persist_reports(&self) {
        persist_collection(&self.storage, REPORTS_KEY, self.reports.list()).await;
    }
}

impl<S: LocalStorage> ProspectRepository for Workspace<S> {
    fn get_prospects(&self) -> &[Prospect] {
        self.prospects.list()
    }

    fn get_prospect_by_id(&self, id: &str) -> Option<&Prospect> {
        self.prospects.get(id)
    }

    async fn add_prospect(&mut self, prospect: NewProspect) -> Prospect {
        let prospect = self.prospects.add(prospect);
        tracing::debug!(id = %prospect.id, "added prospect");
        self.persist_prospects().await;
        prospect
    }

    async fn update_prospect(
        &mut self,
        id: &str,
        update: NewProspect,
    ) -> Result<Prospect, StoreError> {
        let prospect = self.prospects.update(id, update)?;
        tracing::debug!(id = %prospect.id, status = %prospect.status, "updated prospect");
        self.persist_prospects().await;
        Ok(prospect)
    }

    async fn delete_prospect(&mut self, id: &str) -> bool {
        if !self.prospects.remove(id) {
            tracing::debug!(id, "delete ignored, no such prospect");
            return false;
        }
        tracing::debug!(id, "deleted prospect");
        self.persist_prospects().await;
        true
    }
}

impl<S: LocalStorage> ReportRepository for Workspace<S> {
    fn get_reports(&self) -> &[Report] {
        self.reports.list()
    }

    fn get_recent_reports(&self, limit: usize) -> &[Report] {
        self.reports.recent(limit)
    }

    async fn add_report(&mut self, report: NewReport) -> Report {
        let report = self.reports.add(report);
        tracing::debug!(id = %report.id, "added report");
        self.persist_reports().await;
        report
    }
}

async fn load_collection<S, T>(storage: &S, key: &str, seed: impl FnOnce() -> Vec<T>) -> Vec<T>
where
    S: LocalStorage,
    T: DeserializeOwned,
{
    match storage.get_item(key).await {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(key, error = %e, "stored collection is malformed, using seed data");
                seed()
            }
        },
        Ok(None) => {
            tracing::debug!(key, "nothing stored, using seed data");
            seed()
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read stored collection, using seed data");
            seed()
        }
    }
}

async fn persist_collection<S, T>(storage: &S, key: &str, items: &[T])
where
    S: LocalStorage,
    T: Serialize,
{
    let result = match serde_json::to_string(items) {
        Ok(json) => storage.set_item(key, &json).await,
        Err(e) => Err(e.into()),
    };
    if let Err(e) = result {
        tracing::warn!(key, error = %e, "failed to persist collection");
    }
}
