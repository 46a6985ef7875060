use crate::BroadcastConfig;
use crate::broadcast_config::{MIN_INTERVAL_MS, OperatorList};

use googletest::prelude::*;

fn valid() -> BroadcastConfig {
    BroadcastConfig {
        operators: vec![1],
        ..BroadcastConfig::default()
    }
}

#[test]
fn given_defaults_with_operator_when_validate_then_ok() {
    assert_that!(valid().validate(), ok(anything()));
}

#[test]
fn given_no_operators_when_validate_then_error() {
    let config = BroadcastConfig::default();

    let err_msg = config.validate().unwrap_err().to_string();

    assert_that!(err_msg, contains_substring("operators"));
}

#[test]
fn given_zero_progress_interval_when_validate_then_error() {
    let config = BroadcastConfig {
        progress_every: 0,
        ..valid()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_zero_min_interval_when_validate_then_error() {
    let config = BroadcastConfig {
        min_interval_ms: 0,
        ..valid()
    };

    let err_msg = config.validate().unwrap_err().to_string();

    assert_that!(err_msg, contains_substring("min_interval_ms"));
}

#[test]
fn given_min_interval_at_floor_when_validate_then_ok() {
    let config = BroadcastConfig {
        min_interval_ms: MIN_INTERVAL_MS,
        ..valid()
    };

    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_min_interval_below_floor_when_validate_then_error() {
    let config = BroadcastConfig {
        min_interval_ms: MIN_INTERVAL_MS - 1,
        ..valid()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_excessive_min_interval_when_validate_then_error() {
    let config = BroadcastConfig {
        min_interval_ms: 120_000,
        ..valid()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_operator_list_with_blanks_when_parsed_then_blanks_skipped() {
    let parsed: OperatorList = "1, ,2,".parse().unwrap();

    assert_that!(parsed, eq(&OperatorList(vec![1, 2])));
}

#[test]
fn given_operator_list_with_garbage_when_parsed_then_error() {
    assert!("1,abc".parse::<OperatorList>().is_err());
}
