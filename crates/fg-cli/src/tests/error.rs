use crate::CliError;

use fg_core::CoreError;

use googletest::prelude::*;

#[test]
fn given_missing_argument_when_reported_then_player_sees_flag_name_only() {
    let err = CliError::missing_argument("email");
    let mut out = Vec::new();

    err.report(&mut out);

    let text = String::from_utf8(out).unwrap();
    assert_that!(text, eq("Error: Please provide --email.\n"));
    assert_that!(err.to_string(), contains_substring("Missing argument: email"));
}

#[test]
fn given_core_error_when_reported_then_core_message_printed() {
    let err = CliError::from(CoreError::not_signed_in());
    let mut out = Vec::new();

    err.report(&mut out);

    let text = String::from_utf8(out).unwrap();
    assert_that!(text, eq("Error: Please log in first.\n"));
}
