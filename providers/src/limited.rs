//! Decorator that runs every [`AiClient`] call through a [`ConcurrencyLimiter`].

use std::sync::Arc;

use crate::limiter::ConcurrencyLimiter;
use crate::{AiClient, AiFut, RequestOptions};

/// Wrap `client` so its calls are gated by `limiter`.
///
/// With no limiter the same `Arc` comes back; unbounded configurations pay
/// nothing.
#[must_use]
pub fn wrap_with_limiter(
    client: Arc<dyn AiClient>,
    limiter: Option<Arc<ConcurrencyLimiter>>,
) -> Arc<dyn AiClient> {
    match limiter {
        Some(limiter) => Arc::new(LimitedAiClient::new(client, limiter)),
        None => client,
    }
}

/// [`AiClient`] that holds a limiter slot for the duration of each call.
///
/// Arguments and results pass through untouched. The slot is held by a
/// permit that lives inside the call's future, so it is released whether the
/// inner call succeeds, fails, panics, or the future is dropped.
pub struct LimitedAiClient {
    client: Arc<dyn AiClient>,
    limiter: Arc<ConcurrencyLimiter>,
}

impl LimitedAiClient {
    #[must_use]
    pub fn new(client: Arc<dyn AiClient>, limiter: Arc<ConcurrencyLimiter>) -> Self {
        Self { client, limiter }
    }

    #[must_use]
    pub fn limiter(&self) -> &Arc<ConcurrencyLimiter> {
        &self.limiter
    }
}

impl std::fmt::Debug for LimitedAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LimitedAiClient")
            .field("limiter", &self.limiter)
            .finish_non_exhaustive()
    }
}

impl AiClient for LimitedAiClient {
    fn generate_text<'a>(
        &'a self,
        prompt: &'a str,
        system_prompt: &'a str,
        options: RequestOptions,
    ) -> AiFut<'a, String> {
        Box::pin(async move {
            let _permit = self.limiter.acquire().await;
            self.client
                .generate_text(prompt, system_prompt, options)
                .await
        })
    }

    fn generate_image<'a>(
        &'a self,
        prompt: &'a str,
        size: &'a str,
        n: u32,
    ) -> AiFut<'a, Vec<String>> {
        Box::pin(async move {
            let _permit = self.limiter.acquire().await;
            self.client.generate_image(prompt, size, n).await
        })
    }

    fn test_connection(&self) -> AiFut<'_, ()> {
        Box::pin(async move {
            let _permit = self.limiter.acquire().await;
            self.client.test_connection().await
        })
    }
}
