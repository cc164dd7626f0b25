use std::io;
use std::process::ExitCode;

use pwd_forge::{Config, Menu};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pwd_forge=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> ExitCode {
    init_logger();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(rng = ?config.rng, seeded = config.seed.is_some(), "config loaded");

    let mut menu = Menu::new(io::stdin().lock(), io::stdout().lock(), config.rng());
    if let Err(e) = menu.run() {
        tracing::error!("{e}");
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
