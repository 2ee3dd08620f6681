use crate::commands::{Commands, ProviderArg};
use crate::error::{CliError, Result as CliResult};
use crate::game_client::GameClient;
use crate::output::{write_scores_json, write_scores_table};
use crate::play::play_round;

use fg_core::{AppContext, AuthProvider, AuthState, CoreError, Destination, RegistrationForm};

use std::io::{BufRead, Write};

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Execute one subcommand against `client`.
pub async fn run<I, O>(
    command: Commands,
    client: &GameClient,
    input: &mut I,
    output: &mut O,
) -> CliResult<()>
where
    I: BufRead,
    O: Write,
{
    match command {
        Commands::Register {
            name,
            email,
            password,
            confirm_password,
        } => {
            let form = RegistrationForm {
                name: name.unwrap_or_default(),
                email,
                password,
                confirm_password,
            };
            register(client, &form, output).await
        }
        Commands::Login {
            provider,
            email,
            password,
        } => login(client, provider, email, password, output).await,
        Commands::Logout => {
            client.accounts().sign_out().await?;
            writeln!(output, "Logged out.")?;
            Ok(())
        }
        Commands::Whoami => whoami(client, output).await,
        Commands::Play { seed } => play(client, seed, input, output).await,
        Commands::Scores { json } => scores(client, json, output).await,
    }
}

async fn register<O: Write>(
    client: &GameClient,
    form: &RegistrationForm,
    output: &mut O,
) -> CliResult<()> {
    let profile = client.accounts().register(form).await?;
    writeln!(
        output,
        "Welcome, {}! Your account is ready.",
        profile.display_name
    )?;
    Ok(())
}

async fn login<O: Write>(
    client: &GameClient,
    provider: ProviderArg,
    email: Option<String>,
    password: Option<String>,
    output: &mut O,
) -> CliResult<()> {
    let profile = match AuthProvider::from(provider) {
        AuthProvider::Password => {
            let email = email.ok_or_else(|| CliError::missing_argument("email"))?;
            let password = password.ok_or_else(|| CliError::missing_argument("password"))?;
            client
                .accounts()
                .sign_in_with_password(&email, &password)
                .await?;
            client.accounts().current_profile().await?
        }
        oauth => client.accounts().sign_in_with_oauth(oauth).await?,
    };

    writeln!(
        output,
        "Logged in as {} <{}>",
        profile.display_name, profile.email
    )?;
    Ok(())
}

async fn whoami<O: Write>(client: &GameClient, output: &mut O) -> CliResult<()> {
    let Some(session) = client.accounts().current_session().await? else {
        writeln!(output, "Not logged in.")?;
        return Ok(());
    };

    let profile = client.accounts().current_profile().await?;
    writeln!(output, "{} <{}>", profile.display_name, profile.email)?;
    writeln!(
        output,
        "Signed in with {}",
        session.provider.display_name()
    )?;
    Ok(())
}

async fn play<I: BufRead, O: Write>(
    client: &GameClient,
    seed: Option<u64>,
    input: &mut I,
    output: &mut O,
) -> CliResult<()> {
    let mut context = AppContext::new();
    context.set_session(client.accounts().current_session().await?);
    let AuthState::SignedIn(_) = context.auth_state() else {
        return Err(CoreError::not_signed_in().into());
    };
    let profile = client.accounts().current_profile().await?;

    context.navigate(Destination::Game)?;
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut round = client.new_round(rng)?;
    let score = play_round(&mut round, input, output)?;

    let decision = client.record_score(&profile, score).await?;
    let capacity = client.high_scores().ledger().capacity();
    writeln!(output)?;
    if decision.qualified() {
        writeln!(output, "New high score! It made your top {capacity}.")?;
    } else {
        writeln!(output, "Not a top {capacity} score this time.")?;
    }

    context.navigate(Destination::HighScores)?;
    let entries = client.high_scores().top_scores(profile.id).await?;
    write_scores_table(output, &entries)?;
    Ok(())
}

async fn scores<O: Write>(client: &GameClient, json: bool, output: &mut O) -> CliResult<()> {
    let profile = client.accounts().current_profile().await?;
    let entries = client.high_scores().top_scores(profile.id).await?;

    if json {
        write_scores_json(output, &entries)
    } else {
        write_scores_table(output, &entries)
    }
}
