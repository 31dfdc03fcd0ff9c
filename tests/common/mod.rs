mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from salesboard for tests
pub use salesboard::core::db::{
    LocalStorage, MemoryStorage, ProspectRepository, ReportRepository, SqliteStorage, Workspace,
};
pub use salesboard::{FollowUp, NewProspect, NewReport, Prospect, ProspectStatus, Report};
