mod seed;
mod settings;

pub use seed::default_activities;
pub use settings::Config;
