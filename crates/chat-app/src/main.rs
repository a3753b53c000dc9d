//! Desktop chat client entry point

use anyhow::{Context as _, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use chat_ui::Theme;

mod config;
mod window;

use config::AppConfig;
use window::ChatWindow;

fn main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("Invalid log level")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(title = %config.window.title, "Starting chat client");

    let window_config = &config.window;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(window_config.title.clone())
            .with_inner_size([window_config.width, window_config.height])
            .with_min_inner_size([window_config.min_width, window_config.min_height])
            .with_decorations(window_config.decorated),
        ..Default::default()
    };

    let app_config = config.clone();
    eframe::run_native(
        &config.window.title,
        options,
        Box::new(move |cc| {
            chat_ui::apply_theme(&cc.egui_ctx, &Theme::default());
            Box::new(ChatWindow::new(&cc.egui_ctx, &app_config))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
