use anyhow::Context as _;
use eframe::egui;
use icon_strip_rs::{DemoApp, StripTheme};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Icon Strip")
            .with_inner_size([420.0, 640.0])
            .with_min_inner_size([240.0, 320.0]),
        ..Default::default()
    };

    tracing::info!("Starting icon strip demo");

    eframe::run_native(
        "Icon Strip",
        options,
        Box::new(|cc| {
            StripTheme::dark().apply(&cc.egui_ctx);
            let app = DemoApp::new(cc.egui_ctx.screen_rect())?;
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{}", e))
    .context("Demo window exited with an error")
}
