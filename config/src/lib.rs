//! Configuration parsing for aigate.
//!
//! - [`parse_service_settings`] resolves the raw per-configuration settings blob
//!   into an [`AiServiceSettings`] record.
//! - [`load_service_configs`] reads the TOML file listing AI service
//!   configurations and their raw settings.

mod services;
mod settings;

pub use aigate_types::AiServiceSettings;
pub use services::{
    ConfigError, ServiceConfig, ServiceConfigFile, load_service_configs, parse_service_configs,
};
pub use settings::{SettingsError, parse_service_settings};
