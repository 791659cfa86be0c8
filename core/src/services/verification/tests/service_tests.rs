//! Tests for the verification service flow

use std::sync::Arc;
use std::time::Duration;

use crate::errors::{DomainError, ProviderError, ValidationError};
use crate::services::verification::config::VerificationConfig;
use crate::services::verification::service::VerificationService;
use crate::services::verification::store::{PendingStore, PENDING_TTL};

use super::mocks::ScriptedProvider;

const PHONE: &str = "9876543210";
const CODE: &str = "482916";

fn service_with(provider: Arc<ScriptedProvider>) -> VerificationService {
    VerificationService::new(provider, PendingStore::new(), VerificationConfig::default())
}

#[tokio::test(start_paused = true)]
async fn test_start_verification_stores_pending_entry() {
    let provider = Arc::new(ScriptedProvider::accepting(CODE));
    let service = service_with(provider.clone());

    service.start_verification(PHONE).await.unwrap();

    let pending = service.store().get(PHONE).expect("entry should be stored");
    assert_eq!(pending.verification_id, "ver-1");
    assert_eq!(pending.auth_token, "token-1");
    assert_eq!(provider.dispatch_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_start_verification_normalizes_phone() {
    let provider = Arc::new(ScriptedProvider::accepting(CODE));
    let service = service_with(provider);

    service.start_verification("(987) 654-3210").await.unwrap();

    assert!(service.store().get(PHONE).is_some());
}

#[tokio::test(start_paused = true)]
async fn test_start_verification_rejects_empty_phone() {
    let provider = Arc::new(ScriptedProvider::accepting(CODE));
    let service = service_with(provider.clone());

    let error = service.start_verification("").await.unwrap_err();
    assert!(matches!(
        error,
        DomainError::Validation(ValidationError::MissingPhone)
    ));
    assert_eq!(provider.dispatch_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_start_verification_rejects_wrong_length() {
    let provider = Arc::new(ScriptedProvider::accepting(CODE));
    let service = service_with(provider);

    let error = service.start_verification("12345").await.unwrap_err();
    assert!(matches!(
        error,
        DomainError::Validation(ValidationError::InvalidPhone)
    ));
}

#[tokio::test(start_paused = true)]
async fn test_dispatch_failure_stores_nothing() {
    let provider = Arc::new(ScriptedProvider::accepting(CODE));
    provider.fail_next_dispatch(ProviderError::Upstream("send returned 502".into()));
    let service = service_with(provider);

    let error = service.start_verification(PHONE).await.unwrap_err();
    assert!(matches!(error, DomainError::Provider(_)));
    assert!(service.store().get(PHONE).is_none());
}

#[tokio::test(start_paused = true)]
async fn test_confirm_with_correct_code_consumes_entry() {
    let provider = Arc::new(ScriptedProvider::accepting(CODE));
    let service = service_with(provider.clone());

    service.start_verification(PHONE).await.unwrap();
    service.confirm_verification(PHONE, CODE).await.unwrap();

    assert!(service.store().get(PHONE).is_none());

    // Validation used the handle and the dispatch-time token snapshot
    let last = provider.last_validation.lock().unwrap().clone();
    assert_eq!(last, Some(("ver-1".to_string(), "token-1".to_string())));
}

#[tokio::test(start_paused = true)]
async fn test_confirm_with_wrong_code_preserves_entry() {
    let provider = Arc::new(ScriptedProvider::accepting(CODE));
    let service = service_with(provider);

    service.start_verification(PHONE).await.unwrap();

    let error = service.confirm_verification(PHONE, "000000").await.unwrap_err();
    assert!(matches!(error, DomainError::InvalidOtp));
    assert!(service.store().get(PHONE).is_some());

    // Retry with the correct code still succeeds
    service.confirm_verification(PHONE, CODE).await.unwrap();
    assert!(service.store().get(PHONE).is_none());
}

#[tokio::test(start_paused = true)]
async fn test_confirm_without_prior_send_is_not_found() {
    let provider = Arc::new(ScriptedProvider::accepting(CODE));
    let service = service_with(provider);

    let error = service.confirm_verification(PHONE, CODE).await.unwrap_err();
    assert!(matches!(error, DomainError::OtpNotFoundOrExpired));
}

#[tokio::test(start_paused = true)]
async fn test_confirm_after_expiry_is_not_found() {
    let provider = Arc::new(ScriptedProvider::accepting(CODE));
    let service = service_with(provider);

    service.start_verification(PHONE).await.unwrap();
    tokio::time::advance(PENDING_TTL + Duration::from_secs(1)).await;
    tokio::task::yield_now().await;
    tokio::task::yield_now().await;

    let error = service.confirm_verification(PHONE, CODE).await.unwrap_err();
    assert!(matches!(error, DomainError::OtpNotFoundOrExpired));
}

#[tokio::test(start_paused = true)]
async fn test_confirm_rejects_empty_code() {
    let provider = Arc::new(ScriptedProvider::accepting(CODE));
    let service = service_with(provider);

    service.start_verification(PHONE).await.unwrap();

    let error = service.confirm_verification(PHONE, "  ").await.unwrap_err();
    assert!(matches!(
        error,
        DomainError::Validation(ValidationError::MissingOtp)
    ));
    // Challenge untouched by input validation
    assert!(service.store().get(PHONE).is_some());
}

#[tokio::test(start_paused = true)]
async fn test_validate_transport_failure_preserves_entry() {
    let provider = Arc::new(ScriptedProvider::accepting(CODE));
    let service = service_with(provider.clone());

    service.start_verification(PHONE).await.unwrap();
    provider.fail_next_validate(ProviderError::Upstream("validate timed out".into()));

    let error = service.confirm_verification(PHONE, CODE).await.unwrap_err();
    assert!(matches!(error, DomainError::Provider(_)));
    assert!(service.store().get(PHONE).is_some());
}

#[tokio::test(start_paused = true)]
async fn test_resend_replaces_pending_challenge() {
    let provider = Arc::new(ScriptedProvider::accepting(CODE));
    let service = service_with(provider);

    service.start_verification(PHONE).await.unwrap();
    service.start_verification(PHONE).await.unwrap();

    let pending = service.store().get(PHONE).expect("entry should exist");
    assert_eq!(pending.verification_id, "ver-2");
    assert_eq!(service.store().len(), 1);
}
