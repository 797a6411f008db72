//! Step status persistence.
//!
//! This module provides the status table behind every sequence:
//!
//! - [`StepStatus`] - `unknown`, `failed` or `finished`
//! - [`StatusStore`] - the store contract
//! - [`SqliteStatusStore`] - durable backend keyed by step name
//! - [`ShadowStatusStore`] - in-memory overlay used during dry runs

pub mod shadow;
pub mod sqlite;
pub mod status;
pub mod store;

pub use shadow::ShadowStatusStore;
pub use sqlite::SqliteStatusStore;
pub use status::StepStatus;
pub use store::{StatusStore, StoreIdentity};
