//! Activity registry: the in-memory store of extracurricular activities.
//!
//! This module holds the data model, the store itself, and the error
//! taxonomy. It knows nothing about HTTP; the web layer adapts it.

mod activity;
mod error;
mod store;

pub use activity::Activity;
pub use error::RegistryError;
pub use store::ActivityRegistry;
