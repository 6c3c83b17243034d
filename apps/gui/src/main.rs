 // hide console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod backend;
mod cli;
mod component;
mod config;
mod constants;
mod error;
mod ui;

use clap::Parser;
use error::{Context, Result, error};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    setup_tracing(cli.verbose);

    let mut cfg = config::Config::load(cli.config.as_deref()).context("Load configuration error")?;
    cfg.override_base_url(
        cli.base_url
            .or_else(|| ::config::env_override(::config::constants::ENV_SERVICE_URL)),
    );

    info!("Using configuration at {}", cfg.config_path.display());

    let base_url = cfg.service.url()?;
    let service = api::HttpSearchService::new(base_url).context("Build HTTP client error")?;
    info!("Using search service at {}", service.base_url());

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([cfg.app.width, cfg.app.height])
        .with_min_inner_size([480.0, 360.0])
         // Wayland user can use app-id to customize window's behavior
        .with_app_id(constants::APP_ID);

    let options = eframe::NativeOptions {
        viewport,
        centered: true,
        renderer: eframe::Renderer::Glow,
        ..Default::default()
    };

    eframe::run_native(
        constants::APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(app::App::new(cc, cfg, service)))),
    )
    .map_err(|e| error!("Failed to run the application: {e}"))
}

fn setup_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
