use fg_cli::{Cli, CliResult, GameClient, logger, runner};

use fg_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            e.report(&mut std::io::stderr());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    info!("Starting flag-game v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let client = GameClient::open(&config).await?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    let result = runner::run(cli.command, &client, &mut input, &mut output).await;
    client.close().await;
    result
}
