use std::sync::Arc;

use aigate_config::{ServiceConfig, SettingsError, parse_service_settings};
use aigate_providers::{AiClient, LimiterRegistry, wrap_with_limiter};
use aigate_types::ConfigId;

/// Builds concurrency-gated AI clients from service configurations.
///
/// The registry is injected, so every service sharing one registry also shares
/// limiters, and tests can use a fresh registry each.
#[derive(Debug, Clone)]
pub struct AiService {
    registry: Arc<LimiterRegistry>,
}

impl AiService {
    #[must_use]
    pub fn new(registry: Arc<LimiterRegistry>) -> Self {
        Self { registry }
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<LimiterRegistry> {
        &self.registry
    }

    /// Gate `client` according to the settings stored for `config_id`.
    ///
    /// Unbounded settings hand `client` back unchanged. A malformed settings
    /// blob is returned as an error before any limiter is created; whether to
    /// fall back to an ungated client is the caller's decision.
    pub fn limited_client(
        &self,
        config_id: ConfigId,
        raw_settings: &str,
        client: Arc<dyn AiClient>,
    ) -> Result<Arc<dyn AiClient>, SettingsError> {
        let settings = parse_service_settings(raw_settings)?;
        let limit = settings.concurrency_limit();
        tracing::debug!(%config_id, %limit, "Resolved AI concurrency limit");

        let limiter = self.registry.get_or_create(config_id, limit);
        Ok(wrap_with_limiter(client, limiter))
    }

    /// [`Self::limited_client`] for a loaded configuration entry.
    pub fn client_for(
        &self,
        config: &ServiceConfig,
        client: Arc<dyn AiClient>,
    ) -> Result<Arc<dyn AiClient>, SettingsError> {
        self.limited_client(config.id, &config.settings, client)
    }
}

impl Default for AiService {
    fn default() -> Self {
        Self::new(Arc::new(LimiterRegistry::new()))
    }
}
