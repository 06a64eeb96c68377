//! Core domain types for aigate.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies:
//! configuration identities, per-configuration settings, the concurrency limit policy,
//! and the chat request shape shared by AI clients.

mod ids;
mod request;
mod settings;

pub use ids::ConfigId;
pub use request::{ChatCompletionRequest, ChatMessage, ChatRole, RequestOption, RequestOptions};
pub use settings::{AiServiceSettings, ConcurrencyLimit};
