mod app;
mod model;

use app::{configure_fonts, DesktopApp};
use product_form::config::Config;
use product_form_common::{FormSettings, ProductFormState};
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    // CLI と同じ設定ファイル・環境変数を使う
    let settings = settings_or_default(Config::load());
    tracing::debug!(?settings, "desktop session started");

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Product Form",
        options,
        Box::new(move |cc| {
            configure_fonts(&cc.egui_ctx);
            Box::new(DesktopApp::new(ProductFormState::new(settings)))
        }),
    )
}

/// 設定が読めなければ警告を出して既定値で起動する
fn settings_or_default(loaded: product_form::error::Result<Config>) -> FormSettings {
    match loaded {
        Ok(config) => config.settings(),
        Err(err) => {
            tracing::warn!("config ignored: {}", err);
            FormSettings::default()
        }
    }
}
