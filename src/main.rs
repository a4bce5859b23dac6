use activity_signup::api::HttpDataClient;
use activity_signup::config::Config;
use activity_signup::gui::SignupApp;
use clap::Parser;
use eframe::egui;
use log::info;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let client = HttpDataClient::new(config.base_url.clone())?;
    info!("Using activities backend at {}", config.base_url);

    let builder = egui::ViewportBuilder::default()
        .with_title("Extracurricular Activities")
        .with_inner_size(egui::vec2(config.window_width, config.window_height));

    let options = eframe::NativeOptions {
        viewport: builder,
        ..Default::default()
    };

    eframe::run_native(
        "Extracurricular Activities",
        options,
        Box::new(move |cc| Ok(Box::new(SignupApp::new(cc, client)))),
    )
    .map_err(|e| anyhow::anyhow!("Window exited with an error: {e}"))
}
