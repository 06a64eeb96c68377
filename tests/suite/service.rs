//! AiService wiring: settings resolution, registry sharing, pass-through

use std::sync::Arc;

use aigate_core::{AiError, AiService, LimiterRegistry, SettingsError};
use aigate_providers::RequestOptions;
use aigate_types::ConfigId;

use crate::common::RecordingClient;

#[tokio::test]
async fn delegated_failure_is_returned_verbatim_and_slot_released() {
    let service = AiService::default();
    let error = AiError::Api {
        status: 429,
        message: "rate limited by upstream".to_string(),
    };
    let fake = RecordingClient::failing(error.clone());
    let client = service
        .limited_client(ConfigId::new(4), r#"{"max_concurrency": 1}"#, fake)
        .unwrap();
    let limiter = service.registry().get(ConfigId::new(4)).unwrap();
    let before = limiter.in_flight();

    let got = client
        .generate_text("hello", "", RequestOptions::new())
        .await
        .unwrap_err();
    assert_eq!(got, error);
    assert_eq!(limiter.in_flight(), before);

    assert_eq!(client.test_connection().await.unwrap_err(), error);
    assert_eq!(
        client.generate_image("x", "256x256", 1).await.unwrap_err(),
        error
    );
    assert_eq!(limiter.in_flight(), before);
}

#[tokio::test]
async fn options_reach_the_underlying_client() {
    let service = AiService::default();
    let fake = RecordingClient::sleeping(std::time::Duration::ZERO);
    let client = service
        .limited_client(ConfigId::new(8), r#"{"max_concurrency": 2}"#, fake.clone())
        .unwrap();

    let reply = client
        .generate_text(
            "outline episode 3",
            "you write drama",
            RequestOptions::new().temperature(0.7).max_tokens(512),
        )
        .await
        .unwrap();
    assert_eq!(reply, "reply to outline episode 3");

    let requests = fake.requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].temperature, Some(0.7));
    assert_eq!(requests[0].max_tokens, Some(512));
    assert_eq!(requests[0].messages[0].content, "you write drama");
}

#[test]
fn malformed_settings_fail_without_creating_a_limiter() {
    let service = AiService::default();
    let fake = RecordingClient::sleeping(std::time::Duration::ZERO);

    let result = service.limited_client(ConfigId::new(2), "{not json", fake);
    assert!(matches!(result, Err(SettingsError::Malformed { .. })));
    assert!(service.registry().is_empty());
}

#[test]
fn explicit_enable_overrides_max() {
    let service = AiService::default();
    let fake = RecordingClient::sleeping(std::time::Duration::ZERO);

    service
        .limited_client(
            ConfigId::new(6),
            r#"{"concurrency_enabled": true, "max_concurrency": 3}"#,
            fake,
        )
        .unwrap();
    assert!(service.registry().get(ConfigId::new(6)).is_none());
}

#[test]
fn services_sharing_a_registry_share_limiters() {
    let registry = Arc::new(LimiterRegistry::new());
    let a = AiService::new(Arc::clone(&registry));
    let b = AiService::new(Arc::clone(&registry));
    let isolated = AiService::default();
    let fake = RecordingClient::sleeping(std::time::Duration::ZERO);
    let settings = r#"{"max_concurrency": 2}"#;

    a.limited_client(ConfigId::new(1), settings, fake.clone())
        .unwrap();
    b.limited_client(ConfigId::new(1), settings, fake.clone())
        .unwrap();
    isolated
        .limited_client(ConfigId::new(1), settings, fake)
        .unwrap();

    assert_eq!(registry.len(), 1);
    assert!(Arc::ptr_eq(
        &a.registry().get(ConfigId::new(1)).unwrap(),
        &b.registry().get(ConfigId::new(1)).unwrap()
    ));
    assert!(!Arc::ptr_eq(
        &a.registry().get(ConfigId::new(1)).unwrap(),
        &isolated.registry().get(ConfigId::new(1)).unwrap()
    ));
}
