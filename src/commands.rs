//! Command handlers. Each one works on the open session and writes its
//! output to `out`; errors come back as `AppError` for the caller to report.

use rand::Rng;
use std::io::Write;
use std::time::Duration;

use lunch_core::{AppError, Config, LoadFailurePolicy, WeatherConfig, WeatherError};
use lunch_services::LunchSession;
use lunch_weather::{Location, WeatherProvider};

use crate::cli::{AddArgs, Command, EditArgs};
use crate::error_mapping::IntoAppError;
use crate::render;

pub type CommandResult = Result<(), AppError>;

pub async fn run(
    command: Command,
    session: &mut LunchSession,
    config: &Config,
    out: &mut impl Write,
) -> CommandResult {
    match command {
        Command::Home => home(session, config, out).await,
        Command::Weather => weather(&config.weather, out).await,
        Command::Pick => pick(session, config, &mut rand::thread_rng(), out),
        Command::List => list(session, out),
        Command::Add(args) => add(session, args, out),
        Command::Edit(args) => edit(session, &args, out),
        Command::Delete { name } => delete(session, &name, out),
        Command::Rate { name, score } => rate(session, &name, score, out),
    }
}

/// Whether to go on with the command after the restaurant table failed to load.
pub fn proceed_after_load_failure(policy: LoadFailurePolicy, error: &AppError) -> bool {
    match policy {
        LoadFailurePolicy::Continue => {
            tracing::warn!("Continuing with an empty table: {}", error);
            true
        }
        LoadFailurePolicy::Halt => {
            tracing::error!("Halting on load failure: {}", error);
            false
        }
    }
}

/// Weather panel first, then the table. A weather failure only costs the panel.
async fn home(session: &LunchSession, config: &Config, out: &mut impl Write) -> CommandResult {
    let settings = &config.weather;
    if settings.enabled {
        let snapshot = match provider_for(settings) {
            Ok(provider) => provider.fetch_or_unavailable(&office(settings)).await,
            Err(e) => {
                tracing::warn!("Weather panel skipped: {}", e);
                None
            }
        };
        match snapshot {
            Some(snapshot) => writeln!(
                out,
                "{}",
                render::weather_panel(&snapshot, &settings.location_label)
            )?,
            None => writeln!(
                out,
                "⚠ {}",
                WeatherError::ServiceUnavailable.user_message()
            )?,
        }
        writeln!(out)?;
    }
    list(session, out)
}

fn provider_for(settings: &WeatherConfig) -> Result<WeatherProvider, AppError> {
    WeatherProvider::new(
        settings.base_url.as_str(),
        settings.timezone.as_str(),
        Duration::from_secs(settings.timeout_secs),
    )
    .map_err(IntoAppError::into_app_error)
}

fn office(settings: &WeatherConfig) -> Location {
    Location::new(settings.latitude, settings.longitude)
        .with_label(settings.location_label.as_str())
}

async fn weather(settings: &WeatherConfig, out: &mut impl Write) -> CommandResult {
    let snapshot = provider_for(settings)?
        .fetch(&office(settings))
        .await
        .map_err(IntoAppError::into_app_error)?;

    writeln!(out, "{}", render::weather_panel(&snapshot, &settings.location_label))?;
    Ok(())
}

fn pick<R: Rng + ?Sized>(
    session: &LunchSession,
    config: &Config,
    rng: &mut R,
    out: &mut impl Write,
) -> CommandResult {
    match session.recommend(rng) {
        Some(record) => {
            tracing::debug!(place = %record.place_name, "Recommended");
            writeln!(
                out,
                "{}",
                render::recommendation(record, &config.weather.location_label)
            )?;
        }
        None => writeln!(out, "맛집 데이터가 비어있습니다. 먼저 가게를 추가해 주세요.")?,
    }
    Ok(())
}

fn list(session: &LunchSession, out: &mut impl Write) -> CommandResult {
    if session.table().is_empty() {
        writeln!(out, "맛집 데이터가 비어있습니다.")?;
        return Ok(());
    }
    writeln!(out, "{}", render::restaurant_table(&session.rated_rows()))?;
    Ok(())
}

fn add(session: &mut LunchSession, args: AddArgs, out: &mut impl Write) -> CommandResult {
    let record = args.into_record();
    let name = record.place_name.clone();
    session
        .add_restaurant(record)
        .map_err(IntoAppError::into_app_error)?;
    writeln!(out, "'{name}' 추가 완료!")?;
    Ok(())
}

fn edit(session: &mut LunchSession, args: &EditArgs, out: &mut impl Write) -> CommandResult {
    let len = session.table().len();
    if args.row == 0 || args.row > len {
        return Err(AppError::Validation(format!(
            "row {} is out of range (1..={len})",
            args.row
        )));
    }
    if !args.has_changes() {
        return Err(AppError::Validation("nothing to change".to_string()));
    }

    let mut rows = session.table().rows().to_vec();
    let index = args.row - 1;
    rows[index] = args.apply(&rows[index]);

    session
        .replace_table(rows)
        .map_err(IntoAppError::into_app_error)?;
    writeln!(out, "{}번 행 수정 완료!", args.row)?;
    Ok(())
}

fn delete(session: &mut LunchSession, name: &str, out: &mut impl Write) -> CommandResult {
    let removed = session
        .delete_restaurant(name)
        .map_err(IntoAppError::into_app_error)?;
    if removed == 0 {
        writeln!(out, "'{name}' 이름의 가게가 없습니다.")?;
    } else {
        writeln!(out, "'{name}' {removed}건 삭제 완료!")?;
    }
    Ok(())
}

fn rate(session: &LunchSession, name: &str, score: f64, out: &mut impl Write) -> CommandResult {
    if !session.place_names().contains(&name) {
        return Err(AppError::Validation(format!("'{name}' is not in the table")));
    }

    let average = session
        .submit_rating(name, score)
        .map_err(IntoAppError::into_app_error)?;

    writeln!(out, "'{name}'에 {score:.1}점 평가 완료!")?;
    writeln!(out, "현재 평균: {}", render::rating_label(average))?;
    Ok(())
}
