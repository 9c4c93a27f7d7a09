pub mod config;
pub mod registry;
pub mod web;

pub use config::Config;
pub use registry::{Activity, ActivityRegistry, RegistryError};
pub use web::{build_router, run_server, AppState, WebError};
