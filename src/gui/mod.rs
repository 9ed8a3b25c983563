// --- GUI MODULE ---
// Window, panels and theming for the viewer.

pub mod app;
pub mod icon;
pub mod utils;

pub use app::ViewerApp;

pub fn window_title(page_title: &str) -> String {
    format!("{page_title} - Scrollspy")
}
