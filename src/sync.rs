//! Directory synchronization: planning and executing per-playlist actions.

mod execute;
mod plan;
mod stores;

pub use execute::{ActionOutcome, SyncContext, SyncReport, execute, run};
pub use plan::{SyncAction, plan};
pub use stores::list_store;
