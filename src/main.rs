use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use lunch_core::{App, AppError, ConfigError};
use lunch_services::LunchSession;

mod cli;
mod commands;
mod error_mapping;
mod render;

use cli::{Cli, Command};
use error_mapping::IntoAppError;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    lunch_core::init()?;
    tracing::info!("Starting lunch");

    let mut app = match App::new(cli.config.as_deref()) {
        Ok(app) => app,
        Err(e) => {
            let err = AppError::Config(ConfigError::Invalid(format!("{e:#}")));
            eprintln!("⚠ {}", err.user_message());
            return Err(err.into());
        }
    };
    for warning in &app.config_warnings().warnings {
        eprintln!("⚠ config {}: {}", warning.field, warning.message);
    }
    app.override_paths(cli.restaurants, cli.ratings);

    let (mut session, load_error) = LunchSession::open(app.restaurants_path(), app.ratings_path());
    if let Some(e) = load_error {
        let err = e.into_app_error();
        eprintln!("⚠ {}", err.user_message());
        if !commands::proceed_after_load_failure(app.config().storage.on_load_failure, &err) {
            return Err(err.into());
        }
    }

    let command = cli.command.unwrap_or(Command::Home);
    let mut stdout = std::io::stdout().lock();
    let code = match commands::run(command, &mut session, app.config(), &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("⚠ {}", e.user_message());
            if let AppError::Validation(detail) = &e {
                eprintln!("  {detail}");
            }
            if e.state_applied() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    };

    app.shutdown();
    Ok(code)
}
