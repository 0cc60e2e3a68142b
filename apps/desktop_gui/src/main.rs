use std::{path::PathBuf, sync::Arc};

mod runtime;
mod ui;

use anyhow::Context;
use clap::Parser;
use client_core::{config::DEFAULT_LOG_FILTER, load_settings, HttpDocumentApi, InteractionController};
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::ui::{PdfAssistantApp, StartupConfig};

const APP_TITLE: &str = "PDF Assistant";

#[derive(Parser, Debug)]
#[command(name = "pdf-assistant-gui", about = "Desktop client for the PDF assistant backend")]
struct Args {
    /// Backend base URL; takes precedence over the config file and environment.
    #[arg(long)]
    api_base_url: Option<String>,
}

/// Per-user directory searched for `pdf_assistant.toml` when neither the
/// environment nor the working directory provides one.
fn user_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pdf_assistant"))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = load_settings(user_config_dir().as_deref())
        .context("failed to load client settings")?
        .with_api_base_url_override(args.api_base_url);

    let filter = EnvFilter::try_new(&settings.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let api = HttpDocumentApi::new(&settings.api_base_url)
        .with_context(|| format!("cannot use backend url '{}'", settings.api_base_url))?;
    let startup = StartupConfig {
        api_base_url: api.base_url().to_string(),
    };
    let runtime = runtime::build().context("failed to start request runtime")?;
    let controller = InteractionController::new(Arc::new(api), runtime.handle().clone());
    tracing::info!(api_base_url = %startup.api_base_url, "starting desktop client");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([900.0, 720.0])
            .with_min_inner_size([560.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(PdfAssistantApp::new(controller, startup)))),
    )
    .map_err(|err| anyhow::anyhow!("desktop client exited with an error: {err}"))?;

    drop(runtime);
    Ok(())
}
