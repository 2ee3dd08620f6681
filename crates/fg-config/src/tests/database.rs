use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Database
// =========================================================================

#[test]
#[serial]
fn given_max_connections_zero_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _max = EnvGuard::set("FG_DATABASE_MAX_CONNECTIONS", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_max_connections_at_max_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _max = EnvGuard::set("FG_DATABASE_MAX_CONNECTIONS", "32");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_busy_timeout_over_max_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _timeout = EnvGuard::set("FG_DATABASE_BUSY_TIMEOUT_SECS", "61");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_empty_database_path_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _path = EnvGuard::set("FG_DATABASE_PATH", "  ");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}
