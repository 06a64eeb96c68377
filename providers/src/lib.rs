//! AI client capability and per-configuration concurrency gating.
//!
//! # Architecture
//!
//! - [`AiClient`] - the capability every provider client implements
//! - [`limiter`] - [`ConcurrencyLimiter`], a fixed-capacity admission gate
//! - [`registry`] - [`LimiterRegistry`], one limiter per configuration identity
//! - [`limited`] - [`LimitedAiClient`], a decorator that runs every call through a limiter
//!
//! The gate only changes timing. Arguments reach the wrapped client untouched
//! and its results, including errors, come back verbatim. Callers over the
//! limit wait for a slot; they are never rejected.

pub mod limited;
pub mod limiter;
pub mod registry;

use std::future::Future;
use std::pin::Pin;

pub use aigate_types::RequestOptions;
pub use limited::{LimitedAiClient, wrap_with_limiter};
pub use limiter::{ConcurrencyLimiter, LimiterPermit};
pub use registry::LimiterRegistry;

/// Boxed future returned by [`AiClient`] methods.
pub type AiFut<'a, T> = Pin<Box<dyn Future<Output = Result<T, AiError>> + Send + 'a>>;

/// Errors reported by an AI client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AiError {
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
    #[error("connection error: {0}")]
    Connection(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("unsupported operation: {0}")]
    Unsupported(String),
}

/// An AI backend able to generate text and images.
///
/// Object safe so clients can be swapped behind `Arc<dyn AiClient>`.
pub trait AiClient: Send + Sync {
    fn generate_text<'a>(
        &'a self,
        prompt: &'a str,
        system_prompt: &'a str,
        options: RequestOptions,
    ) -> AiFut<'a, String>;

    /// Returns image URLs or provider-side image ids.
    fn generate_image<'a>(
        &'a self,
        prompt: &'a str,
        size: &'a str,
        n: u32,
    ) -> AiFut<'a, Vec<String>>;

    fn test_connection(&self) -> AiFut<'_, ()>;
}
