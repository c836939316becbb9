use console_lib::MockData;
use console_tui::config::{ConsoleConfig, PlatformSettings};
use console_tui::settings::SettingsProvider;
use console_tui::{App, AppError, app, paths};
use simplelog::{Config, LevelFilter, WriteLogger};

/// Log to `latest.log` in the cache directory. The console runs without a log
/// when the file cannot be opened.
fn init_logging() {
    let Some(Ok(file)) = paths::open_log() else { return };
    let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
}

async fn start() -> Result<(), AppError> {
    let settings = SettingsProvider::in_memory();
    let config = ConsoleConfig::load(&settings).await?;
    let platform = PlatformSettings::load(&settings).await?;
    let data = MockData::load()?;
    log::info!(
        "Loaded {} tenants, {} users, {} invoices",
        data.tenants.len(),
        data.users.len(),
        data.invoices.len()
    );
    app::run(App::new(data, settings, config, platform)?).await
}

#[tokio::main]
async fn main() {
    init_logging();
    log::info!("Starting console v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = start().await {
        log::error!("Console exited with error: {}", e);
        eprintln!("Error: {}", e);
    }
}
