use anyhow::Result;
use intro_scorer::scoring::{DisabledScorer, EmbeddingHandle, EngineOptions};
use intro_scorer::server;
use intro_scorer::settings::settings;
use intro_scorer::utils::{log_ml_step, log_startup_config};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let s = settings();
    let host = std::env::var("HOST").unwrap_or_else(|_| s.server.host.clone());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(s.server.port);

    log_startup_config(
        &host,
        port,
        s.semantic.enabled,
        s.semantic.timeout_ms,
        s.semantic.on_failure,
    );

    let options = EngineOptions::from_settings(s);
    let addr = format!("{host}:{port}");

    if s.semantic.enabled {
        log_ml_step("Spawning embedding worker thread...");
        log_ml_step("Model will load in background (this may take a while on first run)");
        let handle = EmbeddingHandle::spawn()?;
        server::run(&addr, handle, options).await
    } else {
        server::run(&addr, DisabledScorer, options).await
    }
}
