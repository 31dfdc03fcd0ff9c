pub mod core;
pub mod error;
pub mod guideline;
pub mod models;
pub mod outreach;

pub use crate::core::dashboard::{Dashboard, DueFollowUp, summarize};
pub use crate::core::db::{LocalStorage, MemoryStorage, SqliteStorage, Workspace};
pub use crate::core::followup::{FollowUp, classify};
pub use error::{FormError, GenerationError, StoreError};
pub use models::{NewProspect, NewReport, Prospect, ProspectStatus, Report};
