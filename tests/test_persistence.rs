//! Integration tests for loading and saving the collections.
//!
//! Tests cover:
//! - Seed fallback for missing, malformed and unreadable data
//! - Every mutation written back under its key
//! - Data surviving a close/reopen of the SQLite store
//! - Write failures leaving the in-memory collections intact

mod common;

use common::*;

#[tokio::test]
async fn test_invalid_prospects_json_falls_back_to_seed() -> anyhow::Result<()> {
    let storage = MemoryStorage::with_items([("prospects", "{not json")]);
    let workspace = Workspace::load(storage, TODAY).await;

    let names: Vec<&str> = workspace
        .get_prospects()
        .iter()
        .map(|p| p.business_name.as_str())
        .collect();
    assert_eq!(names, ["Innovate Tech", "Sunrise Cafe", "Apex Gym"]);

    Ok(())
}

#[tokio::test]
async fn test_wrong_shape_falls_back_to_seed() -> anyhow::Result<()> {
    let storage = MemoryStorage::with_items([
        ("prospects", r#"[{"id":"9","businessName":"Half"}]"#),
        ("reports", "null"),
    ]);
    let workspace = Workspace::load(storage, TODAY).await;

    assert_eq!(workspace.get_prospects().len(), 3);
    assert_eq!(workspace.get_reports().len(), 1);
    assert_eq!(workspace.get_reports()[0].date, days_ago(1));

    Ok(())
}

#[tokio::test]
async fn test_unreadable_storage_falls_back_to_seed() -> anyhow::Result<()> {
    let mut workspace = Workspace::load(FailingStorage, TODAY).await;
    assert_eq!(workspace.get_prospects().len(), 3);

    // Failed writes are not fatal and keep the in-memory change.
    let added = workspace
        .add_prospect(make_new_prospect("Harbor Dental", ProspectStatus::Prospecting, TODAY))
        .await;
    assert_eq!(workspace.get_prospect_by_id(&added.id), Some(&added));

    Ok(())
}

#[tokio::test]
async fn test_seed_dates_follow_today() -> anyhow::Result<()> {
    let workspace = create_test_workspace().await;
    let dates: Vec<_> = workspace
        .get_prospects()
        .iter()
        .map(|p| (p.id.as_str(), p.status, p.last_contact_date))
        .collect();
    assert_eq!(
        dates,
        [
            ("1", ProspectStatus::Pitched, days_ago(3)),
            ("2", ProspectStatus::Contacted, days_ago(1)),
            ("3", ProspectStatus::Closed, TODAY),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_empty_array_is_kept() -> anyhow::Result<()> {
    let storage = MemoryStorage::with_items([("prospects", "[]"), ("reports", "[]")]);
    let workspace = Workspace::load(storage, TODAY).await;

    assert!(workspace.get_prospects().is_empty());
    assert!(workspace.get_reports().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_mutations_are_written_as_json() -> anyhow::Result<()> {
    let mut workspace = create_test_workspace().await;
    let added = workspace
        .add_prospect(make_new_prospect("Harbor Dental", ProspectStatus::Qualified, days_ago(4)))
        .await;
    workspace.delete_prospect("2").await;
    workspace.add_report(make_new_report(TODAY, 6)).await;

    let raw = workspace
        .storage()
        .get_item("prospects")
        .await?
        .expect("prospects should be persisted");
    let json: serde_json::Value = serde_json::from_str(&raw)?;
    let ids: Vec<&str> = json
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|p| p["id"].as_str())
        .collect();
    assert_eq!(ids, ["1", "3", added.id.as_str()]);
    assert_eq!(json[2]["businessName"], "Harbor Dental");
    assert_eq!(json[2]["status"], "Qualified");
    assert_eq!(json[2]["lastContactDate"], "2024-06-08");

    let raw = workspace
        .storage()
        .get_item("reports")
        .await?
        .expect("reports should be persisted");
    let reports: Vec<Report> = serde_json::from_str(&raw)?;
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].contacted, 6);
    assert!(raw.contains("\"followUps\":1"));

    Ok(())
}

#[tokio::test]
async fn test_nothing_written_until_a_mutation() -> anyhow::Result<()> {
    let mut workspace = create_test_workspace().await;
    assert!(workspace.storage().get_item("prospects").await?.is_none());

    // Unknown ids change nothing, so nothing is written.
    workspace.delete_prospect("missing").await;
    assert!(workspace.storage().get_item("prospects").await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_data_persists_after_reopen() -> anyhow::Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let store_path = temp_dir.path().join("persist_test.db");

    // 1. Open store, edit a seed prospect and add a report
    let added_id = {
        let storage = SqliteStorage::open(&store_path).await?;
        let mut workspace = Workspace::load(storage, TODAY).await;

        let mut edit = NewProspect::from(
            workspace
                .get_prospect_by_id("1")
                .expect("seed prospect should exist"),
        );
        edit.status = ProspectStatus::Cold;
        workspace.update_prospect("1", edit).await?;
        let added = workspace
            .add_prospect(make_new_prospect("Harbor Dental", ProspectStatus::Contacted, TODAY))
            .await;
        workspace.add_report(make_new_report(TODAY, 9)).await;

        workspace.into_storage().close().await?;
        added.id
    };

    // 2. Reopen on a later day; stored data wins over the seed
    {
        let storage = SqliteStorage::open(&store_path).await?;
        let workspace = Workspace::load(storage, days_ago(-5)).await;

        let prospects = workspace.get_prospects();
        assert_eq!(prospects.len(), 4);
        assert_eq!(prospects[0].status, ProspectStatus::Cold);
        assert_eq!(prospects[0].last_contact_date, days_ago(3));
        assert_eq!(prospects[3].id, added_id);

        let reports = workspace.get_reports();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].contacted, 9);
    }

    Ok(())
}

#[tokio::test]
async fn test_sqlite_storage_overwrites_keys() -> anyhow::Result<()> {
    let (storage, _temp_dir) = create_test_store().await;

    assert!(storage.get_item("prospects").await?.is_none());
    storage.set_item("prospects", "[1]").await?;
    storage.set_item("prospects", "[2]").await?;
    assert_eq!(storage.get_item("prospects").await?.as_deref(), Some("[2]"));

    Ok(())
}

#[tokio::test]
async fn test_store_in_missing_directory_fails() -> anyhow::Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let path = temp_dir.path().join("missing").join("store.db");

    let result = SqliteStorage::open(&path).await;
    assert!(result.is_err(), "Opening a store in a missing directory should fail");

    Ok(())
}
