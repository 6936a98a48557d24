mod config;
mod domain;
mod ingestion;
mod output;
mod rejections;
mod session;

use std::{
    fs::File,
    io::{self, BufReader},
    process::ExitCode,
};

use clap::Parser;
use rust_decimal::Decimal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::domain::{Account, CommandStream, Error, Outcome, Output};
use crate::ingestion::{ConsoleInput, CsvScript};
use crate::output::ConsoleOutput;
use crate::rejections::StdErrRejections;
use crate::session::Session;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    // logs go to stderr so they never interleave with the menu
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.default_log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "shutting down");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let initial_balance = config.initial_balance.map(Decimal::from);

    match config.script {
        Some(path) => {
            tracing::info!(script = %path.display(), "running script");
            let file = File::open(&path)?;
            let input = CsvScript::new(file);
            serve(
                config.account_id,
                initial_balance.unwrap_or(Decimal::ZERO),
                input,
            )
            .await
        }
        None => {
            let mut input = ConsoleInput::new(BufReader::new(io::stdin()), io::stdout());
            let balance = match initial_balance {
                Some(balance) => balance,
                None => input.read_initial_balance()?,
            };
            serve(config.account_id, balance, input).await
        }
    }
}

async fn serve<I: CommandStream>(id: String, balance: Decimal, input: I) -> Result<(), Error> {
    let mut account = Account::new(id, balance)?;
    tracing::info!(account = account.id(), %balance, "account opened");

    let mut output = ConsoleOutput::stdout();
    output.report(&Outcome::Opened {
        id: account.id().to_string(),
        balance: account.balance(),
    });

    let mut session = Session::new(input, output, StdErrRejections::default());
    session.process(&mut account).await?;

    tracing::info!(
        account = account.id(),
        active = account.is_active(),
        balance = %account.balance(),
        "session finished"
    );

    Ok(())
}
