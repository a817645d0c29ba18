//! SlowCalc - A calculator for the Slow Computer
//!
//! Four-function calculator with a keypad and keyboard input.

mod app;

use app::SlowCalcApp;
use eframe::NativeOptions;
use slowcalc::settings::CalcSettings;

fn main() -> eframe::Result<()> {
    slowcore::logging::init("slowcalc");
    let settings = CalcSettings::load();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting slowcalc");

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_position([settings.window_x, settings.window_y])
            .with_resizable(settings.resizable)
            .with_title("calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "calculator",
        options,
        Box::new(move |cc| {
            slowcore::SlowTheme::default().apply(&cc.egui_ctx);
            Box::new(SlowCalcApp::new(cc, settings))
        }),
    )
}
