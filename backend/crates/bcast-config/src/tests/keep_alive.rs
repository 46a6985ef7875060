use crate::KeepAliveConfig;

use googletest::prelude::*;

#[test]
fn given_disabled_keep_alive_when_interval_invalid_then_still_ok() {
    let config = KeepAliveConfig {
        enabled: false,
        interval_secs: 0,
        url: None,
    };

    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_enabled_keep_alive_with_tiny_interval_when_validate_then_error() {
    let config = KeepAliveConfig {
        interval_secs: 1,
        ..KeepAliveConfig::default()
    };

    assert_that!(config.validate(), err(anything()));
}
