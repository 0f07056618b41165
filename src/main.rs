use std::path::Path;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &mufattish::config::CONFIG;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        listen_addr = %cfg.listen_addr,
        loglevel = %cfg.loglevel,
        mail_configured = cfg.gmail_user.is_some() && cfg.gmail_app_password.is_some(),
    );

    // SQLite creates the file but not its parent directory.
    if let Some(db_path) = cfg.database_url.strip_prefix("sqlite:")
        && let Some(parent) = Path::new(db_path).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let store = mufattish::Storage::connect(&cfg.database_url).await?;
    store.init_schema().await?;
    store.ensure_default_account().await?;

    tokio::spawn(mufattish::service::reminder::run(store.clone()));

    let mailer = mufattish::Mailer::from_config(cfg);
    let state = mufattish::router::AppState::new(store, mailer);
    let app = mufattish::router::dashboard_router(state);

    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("HTTP server listening on {}", cfg.listen_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
