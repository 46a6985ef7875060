use crate::TelegramConfig;

use googletest::prelude::*;

fn valid() -> TelegramConfig {
    TelegramConfig {
        bot_token: Some("123:abc".to_string()),
        ..TelegramConfig::default()
    }
}

#[test]
fn given_token_when_validate_then_ok() {
    assert_that!(valid().validate(), ok(anything()));
}

#[test]
fn given_missing_token_when_validate_then_error() {
    let err_msg = TelegramConfig::default()
        .validate()
        .unwrap_err()
        .to_string();

    assert_that!(err_msg, contains_substring("bot_token"));
}

#[test]
fn given_blank_token_when_validate_then_error() {
    let config = TelegramConfig {
        bot_token: Some("   ".to_string()),
        ..valid()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_relative_webhook_path_when_validate_then_error() {
    let config = TelegramConfig {
        webhook_path: "webhook".to_string(),
        ..valid()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_webhook_secret_with_illegal_chars_when_validate_then_error() {
    let config = TelegramConfig {
        webhook_secret: Some("not allowed!".to_string()),
        ..valid()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_empty_webhook_secret_when_validate_then_error() {
    let config = TelegramConfig {
        webhook_secret: Some(String::new()),
        ..valid()
    };

    let err_msg = config.validate().unwrap_err().to_string();

    assert_that!(err_msg, contains_substring("webhook_secret"));
}
