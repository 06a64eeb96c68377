//! Service layer for aigate.
//!
//! [`AiService`] turns a configuration identity, its raw settings blob and an
//! AI client into a client that respects the configuration's concurrency limit.

mod service;

pub use aigate_config::{ServiceConfig, SettingsError};
pub use aigate_providers::{AiClient, AiError, LimiterRegistry};
pub use service::AiService;
