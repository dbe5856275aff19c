mod common;
mod config;
mod network;
mod ui;

use clap::Parser;
use dotenvy::dotenv;
use eframe::egui;
use network::{ApiClient, ChatWorker};
use tokio::sync::mpsc;
use ui::ChatApp;
use ui::palette::Palette;

#[derive(Parser)]
#[command(
    name = "sentiment_chat",
    version,
    about = "Chat client for a sentiment-analysis backend"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Backend origin, overrides the config file and environment
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> eframe::Result<()> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config)
        .with_overrides(std::env::var(config::BASE_URL_ENV).ok(), cli.base_url);

    // UI -> worker
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // worker -> UI
    let (event_tx, event_rx) = mpsc::channel(100);

    let api = ApiClient::new(app_config.base_url.clone());
    tokio::spawn(ChatWorker::new(api, event_tx, cmd_rx).run());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(app_config.window_title.clone())
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };
    let palette = Palette::from_config(&app_config.palette);
    let base_url = app_config.base_url;

    eframe::run_native(
        &app_config.window_title,
        options,
        Box::new(move |cc| {
            log::info!("Client started against {base_url}");

            Ok(Box::new(ChatApp::new(cc, palette, cmd_tx, event_rx)))
        }),
    )
}
