//! Bioelectric Potentials Playground - Desktop Application

mod app;
mod scope;
mod ui;

use anyhow::Context;
use app::BepApp;
use bep_core::ContentBundle;

const CONTENT_JSON: &str = include_str!("../assets/content.json");

fn load_content() -> anyhow::Result<ContentBundle> {
    ContentBundle::from_json(CONTENT_JSON).context("parsing embedded content document")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // A broken content document costs us the text, not the app
    let content = match load_content() {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("content bundle unavailable, showing blanks: {e:#}");
            ContentBundle::default()
        }
    };
    tracing::info!(signals = content.len(), "starting potentials playground");

    // Configure egui for a phone-shaped window
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([390.0, 760.0])
            .with_min_inner_size([375.0, 650.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Potentials of You",
        options,
        Box::new(|_cc| Ok(Box::new(BepApp::new(content)))),
    )
    .map_err(|e| format!("Failed to run native app: {}", e))?;

    Ok(())
}
