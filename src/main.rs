use collapsebar::{app::App, config::ScreenConfig, error, Result, APP_NAME, LOG_FILE};
use std::fs::{self, File};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log to a file: the terminal belongs to the UI
fn init_logging() -> Result<()> {
    let Some(dir) = dirs::data_local_dir().map(|d| d.join(APP_NAME)) else {
        return Ok(());
    };
    fs::create_dir_all(&dir)?;
    let file = File::create(dir.join(LOG_FILE))?;

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

async fn launch() -> Result<()> {
    let config = ScreenConfig::load()?;
    let mut app = App::new(config)?;
    app.init()?;
    app.run().await
}

#[tokio::main]
async fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Logging disabled: {}", e);
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");

    if let Err(e) = launch().await {
        tracing::error!(error = %e, "application error");
        eprintln!("{}", error::user_friendly_message(&e));
        std::process::exit(1);
    }
}
