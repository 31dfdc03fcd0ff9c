use salesboard::core::db::{LocalStorage, MemoryStorage, SqliteStorage, Workspace};
use salesboard::{NewProspect, NewReport, ProspectStatus};
use time::{Date, Duration, macros::date};

/// Fixed "today" so seed dates and follow-up tiers are deterministic.
pub const TODAY: Date = date!(2024 - 06 - 12);

pub fn days_ago(days: i64) -> Date {
    TODAY - Duration::days(days)
}

/// Workspace over empty in-memory storage, i.e. holding the seed data.
pub async fn create_test_workspace() -> Workspace<MemoryStorage> {
    Workspace::load(MemoryStorage::new(), TODAY).await
}

/// Opens a SQLite store in a fresh temp directory.
/// Returns both the storage and the temp directory (which must be kept alive).
pub async fn create_test_store() -> (SqliteStorage, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("test.db");
    let storage = SqliteStorage::open(&path)
        .await
        .expect("Failed to open test store");
    (storage, dir)
}

pub fn make_new_prospect(business_name: &str, status: ProspectStatus, last_contact: Date) -> NewProspect {
    NewProspect {
        business_name: business_name.to_string(),
        contact_person: "Test Person".to_string(),
        contact_info: format!("{}@example.com", business_name.to_lowercase().replace(' ', ".")),
        status,
        last_contact_date: last_contact,
        notes: String::new(),
    }
}

pub fn make_new_report(date: Date, contacted: u32) -> NewReport {
    NewReport {
        date,
        contacted,
        follow_ups: 1,
        positive: 0,
        calls: 2,
        closed: 0,
        challenges: String::new(),
        plan: "Call back tomorrow".to_string(),
    }
}

/// Storage whose reads and writes always fail.
#[derive(Debug, Default)]
pub struct FailingStorage;

impl LocalStorage for FailingStorage {
    async fn get_item(&self, _key: &str) -> anyhow::Result<Option<String>> {
        anyhow::bail!("storage unavailable")
    }

    async fn set_item(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
        anyhow::bail!("storage unavailable")
    }
}
