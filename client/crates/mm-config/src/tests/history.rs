use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_page_size_zero_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _size = EnvGuard::set("MOODMUSE_HISTORY_PAGE_SIZE", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_page_size_over_max_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _size = EnvGuard::set("MOODMUSE_HISTORY_PAGE_SIZE", "101");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_valid_page_size_env_when_load_then_applied() {
    // Given
    let _temp = setup_config_dir();
    let _size = EnvGuard::set("MOODMUSE_HISTORY_PAGE_SIZE", "25");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.history.page_size, eq(25));
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_unparseable_page_size_env_when_load_then_default_kept() {
    // Given
    let _temp = setup_config_dir();
    let _size = EnvGuard::set("MOODMUSE_HISTORY_PAGE_SIZE", "lots");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.history.page_size, eq(9));
}
