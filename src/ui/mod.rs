//! Desktop shell built with egui/eframe.

mod app;
pub mod components;
pub mod state;
mod theme;

pub use app::FloatChatApp;
pub use state::AppState;
pub use theme::Theme;

use crate::config::AppConfig;
use crate::session;

/// Run the FloatChat application.
pub fn run() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("FloatChat - ARGO Data Explorer"),
        ..Default::default()
    };

    eframe::run_native(
        "FloatChat",
        options,
        Box::new(|cc| {
            let handle = session::start(AppConfig::from_env())?;
            Ok(Box::new(FloatChatApp::new(cc, handle)))
        }),
    )
}
