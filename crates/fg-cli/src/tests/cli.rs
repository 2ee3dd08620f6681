use crate::{Cli, Commands, ProviderArg};

use fg_core::AuthProvider;

use clap::Parser;
use googletest::prelude::*;

#[test]
fn given_play_with_seed_when_parsed_then_seed_captured() {
    let cli = Cli::try_parse_from(["flag-game", "play", "--seed", "7"]).unwrap();

    assert_that!(cli.command, eq(&Commands::Play { seed: Some(7) }));
}

#[test]
fn given_login_without_provider_when_parsed_then_password_login() {
    let cli = Cli::try_parse_from([
        "flag-game",
        "login",
        "--email",
        "ada@example.com",
        "--password",
        "hunter22",
    ])
    .unwrap();

    let Commands::Login {
        provider,
        email,
        password,
    } = cli.command
    else {
        panic!("expected login");
    };
    assert_that!(provider, eq(ProviderArg::Password));
    assert_that!(email, some(eq("ada@example.com")));
    assert_that!(password, some(eq("hunter22")));
}

#[test]
fn given_github_provider_when_converted_then_github_auth_provider() {
    let cli = Cli::try_parse_from(["flag-game", "login", "--provider", "github"]).unwrap();

    let Commands::Login { provider, .. } = cli.command else {
        panic!("expected login");
    };
    assert_that!(AuthProvider::from(provider), eq(AuthProvider::GitHub));
}

#[test]
fn given_register_without_confirmation_when_parsed_then_rejected() {
    let result = Cli::try_parse_from([
        "flag-game",
        "register",
        "--email",
        "ada@example.com",
        "--password",
        "hunter22",
    ]);

    assert!(result.is_err());
}

#[test]
fn given_scores_json_flag_when_parsed_then_json_output() {
    let cli = Cli::try_parse_from(["flag-game", "scores", "--json"]).unwrap();

    assert_that!(cli.command, eq(&Commands::Scores { json: true }));
}
