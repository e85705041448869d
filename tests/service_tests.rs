//! 翻译服务测试

mod common;

use common::StubGenerator;
use lingo::domain::error::{ErrorKind, GenerateError};
use lingo::domain::model::{DetectionRequest, TranslationRequest, UNKNOWN_LANGUAGE};
use lingo::{ConfigError, ServiceState, TranslationError, TranslationService};
use std::sync::Arc;
use std::time::Duration;

fn ready_service(stub: Arc<StubGenerator>) -> TranslationService {
    let mut service = TranslationService::new(stub);
    service
        .configure(Some("test-key"), "gemini-2.0-flash")
        .expect("configure with a valid key");
    service
}

#[test]
fn test_configure_requires_api_key() {
    let stub = StubGenerator::replying("x");
    let mut service = TranslationService::new(stub);

    assert!(matches!(
        service.configure(None, "gemini-2.0-flash"),
        Err(ConfigError::MissingApiKey)
    ));
    assert!(matches!(
        service.configure(Some("   "), "gemini-2.0-flash"),
        Err(ConfigError::MissingApiKey)
    ));
    assert!(matches!(
        service.configure(Some("key"), ""),
        Err(ConfigError::MissingModel)
    ));
    assert_eq!(service.state(), ServiceState::Unconfigured);
}

#[test]
fn test_configure_twice_is_allowed() {
    let stub = StubGenerator::replying("x");
    let mut service = TranslationService::new(stub);

    assert_eq!(
        service.configure(Some("key"), "model-a").unwrap(),
        ServiceState::Ready
    );
    assert_eq!(
        service.configure(Some("key"), "model-a").unwrap(),
        ServiceState::Ready
    );
    assert_eq!(service.model(), Some("model-a"));

    // a failed reconfiguration keeps the service ready
    assert!(service.configure(None, "model-b").is_err());
    assert_eq!(service.state(), ServiceState::Ready);
    assert_eq!(service.model(), Some("model-a"));
}

#[tokio::test]
async fn test_unconfigured_service_is_unavailable() {
    let stub = StubGenerator::replying("Bonjour");
    let service = TranslationService::new(stub.clone());

    let err = service
        .translate(&TranslationRequest::new("Hello", "French"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unavailable);
    assert!(err.is_config_error());

    let err = service
        .detect_language(&DetectionRequest::new("Hello"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unavailable);

    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn test_translate_returns_trimmed_reply() {
    let stub = StubGenerator::replying("  Bonjour\n");
    let service = ready_service(stub.clone());

    let result = service
        .translate(&TranslationRequest::new("Hello", "French"))
        .await
        .unwrap();

    assert_eq!(result.translated_text, "Bonjour");
    assert_eq!(stub.calls(), 1);
    assert_eq!(stub.last_model().as_deref(), Some("gemini-2.0-flash"));
}

#[tokio::test]
async fn test_translate_prompt_carries_text_and_language() {
    let stub = StubGenerator::replying("Hola");
    let service = ready_service(stub.clone());

    service
        .translate(&TranslationRequest::new("Good morning", "Spanish"))
        .await
        .unwrap();

    let prompt = stub.last_prompt().unwrap();
    assert!(prompt.contains("Spanish"));
    assert!(prompt.contains("Good morning"));
    assert!(!prompt.contains("from"));
}

#[tokio::test]
async fn test_translate_explicit_source_language() {
    let stub = StubGenerator::replying("Guten Tag");
    let service = ready_service(stub.clone());

    service
        .translate(&TranslationRequest::new("Bonjour", "German").from_language("French"))
        .await
        .unwrap();

    assert!(stub.last_prompt().unwrap().contains("from French to German"));
}

#[tokio::test]
async fn test_empty_text_is_rejected_without_remote_call() {
    let stub = StubGenerator::replying("Bonjour");
    let service = ready_service(stub.clone());

    for text in ["", "   ", "\n\t"] {
        let err = service
            .translate(&TranslationRequest::new(text, "French"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidInput);
    }

    let err = service
        .translate(&TranslationRequest::new("Hello", " "))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidInput);

    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn test_remote_failures_are_classified() {
    let cases: [(fn() -> GenerateError, ErrorKind); 4] = [
        (
            || GenerateError::Unauthenticated("bad key".to_string()),
            ErrorKind::Unauthenticated,
        ),
        (
            || GenerateError::Unavailable("connection refused".to_string()),
            ErrorKind::Unavailable,
        ),
        (
            || GenerateError::Remote {
                status: 429,
                message: "quota exceeded".to_string(),
            },
            ErrorKind::RemoteError,
        ),
        (
            || GenerateError::Malformed("expected value".to_string()),
            ErrorKind::RemoteError,
        ),
    ];

    for (make, expected) in cases {
        let stub = StubGenerator::failing(make);
        let service = ready_service(stub.clone());

        let err = service
            .translate(&TranslationRequest::new("Hello", "French"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, expected);
        // no retry
        assert_eq!(stub.calls(), 1);
    }
}

#[tokio::test]
async fn test_blank_reply_is_empty_response() {
    let stub = StubGenerator::replying("   \n ");
    let service = ready_service(stub);

    let err = service
        .translate(&TranslationRequest::new("Hello", "French"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::EmptyResponse);
}

#[tokio::test]
async fn test_identical_requests_are_not_cached() {
    let stub = StubGenerator::replying("Bonjour");
    let service = ready_service(stub.clone());
    let request = TranslationRequest::new("Hello", "French");

    service.translate(&request).await.unwrap();
    service.translate(&request).await.unwrap();

    assert_eq!(stub.calls(), 2);
}

#[tokio::test]
async fn test_slow_remote_times_out_as_unavailable() {
    let stub = StubGenerator::slow(Duration::from_secs(5));
    let service = ready_service(stub).with_timeout(Duration::from_millis(50));

    let err = service
        .translate(&TranslationRequest::new("Hello", "French"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unavailable);
}

#[tokio::test]
async fn test_detect_language_truncates_sample() {
    let stub = StubGenerator::replying("English");
    let service = ready_service(stub.clone());
    let sample = "a".repeat(500);

    let result = service
        .detect_language(&DetectionRequest::new(sample))
        .await
        .unwrap();
    assert_eq!(result.language_name, "English");

    let prompt = stub.last_prompt().unwrap();
    let (_, tail) = prompt.split_once(": ").unwrap();
    assert_eq!(tail.chars().count(), 200);
}

#[tokio::test]
async fn test_detection_failure_degrades_to_unknown() {
    let stub = StubGenerator::failing(|| GenerateError::Unavailable("offline".to_string()));
    let service = ready_service(stub);

    let result = service
        .detect_language_or_unknown(&DetectionRequest::new("Bonjour"))
        .await;
    assert_eq!(result.language_name, UNKNOWN_LANGUAGE);
    assert!(result.is_unknown());
}

#[tokio::test]
async fn test_shared_service_serves_concurrent_callers() {
    let stub = StubGenerator::replying("ok");
    let service = Arc::new(ready_service(stub.clone()));

    let mut handles = Vec::new();
    for i in 0..8 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service
                .translate(&TranslationRequest::new(format!("text {}", i), "Italian"))
                .await
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap().translated_text, "ok");
    }
    assert_eq!(stub.calls(), 8);
}

#[tokio::test]
async fn test_zero_timeout_is_ignored() {
    let stub = StubGenerator::slow(Duration::from_millis(1));
    let service = ready_service(stub).with_timeout(Duration::ZERO);

    let result = service
        .translate(&TranslationRequest::new("Hello", "French"))
        .await
        .unwrap();
    assert_eq!(result.translated_text, "too late");
}

#[test]
fn test_config_error_is_marked_structurally() {
    assert!(TranslationError::not_configured().is_config_error());
    assert_eq!(TranslationError::not_configured().kind, ErrorKind::Unavailable);

    // same kind and text, but not produced by an unconfigured service
    let lookalike = TranslationError::new(
        ErrorKind::Unavailable,
        TranslationError::not_configured().message,
    );
    assert!(!lookalike.is_config_error());
    assert!(!TranslationError::new(ErrorKind::Unavailable, "offline").is_config_error());
}
