use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err};
use serial_test::serial;

#[test]
#[serial]
fn given_blank_default_display_name_when_validate_then_error() {
    let _temp = setup_config_dir();
    let _name = EnvGuard::set("FG_PROFILE_DEFAULT_DISPLAY_NAME", "   ");

    let config = Config::load().unwrap();

    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_overlong_default_display_name_when_validate_then_error() {
    let _temp = setup_config_dir();
    let long_name = "x".repeat(65);
    let _name = EnvGuard::set("FG_PROFILE_DEFAULT_DISPLAY_NAME", &long_name);

    let config = Config::load().unwrap();

    assert_that!(config.validate(), err(anything()));
}
