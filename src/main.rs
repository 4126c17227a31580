use actix_web::{App, HttpServer, web};
use anyhow::Context;
use clinic_slots_backend::config::AppConfig;
use clinic_slots_backend::{AppState, routes};
use dotenv::dotenv;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    if dotenv().is_err() {
        tracing::debug!("No .env file, using process environment");
    }

    let config = AppConfig::from_env();
    let state = web::Data::new(AppState::from_config(&config));

    tracing::info!(
        "Serving schedules from {} and appointments from {} on {}:{}",
        config.schedules_path.display(),
        config.appointments_path.display(),
        config.host,
        config.port
    );

    HttpServer::new(move || App::new().app_data(state.clone()).configure(routes::init))
        .bind((config.host.as_str(), config.port))
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?
        .run()
        .await
        .context("server terminated")
}
