use crate::{AuthError, WebhookSecret};

use googletest::prelude::*;

#[test]
fn given_no_configured_secret_when_verify_then_any_request_passes() {
    let secret = WebhookSecret::new(None);

    assert!(!secret.is_enabled());
    assert!(secret.verify(None).is_ok());
    assert!(secret.verify(Some("whatever")).is_ok());
}

#[test]
fn given_empty_configured_secret_when_built_then_disabled() {
    assert!(!WebhookSecret::new(Some("")).is_enabled());
}

#[test]
fn given_matching_header_when_verify_then_ok() {
    let secret = WebhookSecret::new(Some("s3cret_token"));

    assert!(secret.verify(Some("s3cret_token")).is_ok());
}

#[test]
fn given_missing_header_when_verify_then_missing_error() {
    let secret = WebhookSecret::new(Some("s3cret_token"));

    let err = secret.verify(None).unwrap_err();

    assert!(matches!(err, AuthError::MissingWebhookSecret { .. }));
}

#[test]
fn given_wrong_header_when_verify_then_invalid_error() {
    let secret = WebhookSecret::new(Some("s3cret_token"));

    let err = secret.verify(Some("s3cret_tokeN")).unwrap_err();

    assert_that!(err.error_code(), eq("INVALID_WEBHOOK_SECRET"));
}

#[test]
fn given_prefix_of_secret_when_verify_then_rejected() {
    let secret = WebhookSecret::new(Some("s3cret_token"));

    assert!(secret.verify(Some("s3cret")).is_err());
}

#[test]
fn given_secret_when_debug_formatted_then_value_not_printed() {
    let secret = WebhookSecret::new(Some("s3cret_token"));

    assert_that!(format!("{secret:?}"), not(contains_substring("s3cret")));
}
