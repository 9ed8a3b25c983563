#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

use scrollspy::config::load_config;
use scrollspy::gui::{self, ViewerApp};
use scrollspy::page::Page;
use scrollspy::{log_info, log_warn};

// Window dimensions
pub const WINDOW_WIDTH: f32 = 980.0;
pub const WINDOW_HEIGHT: f32 = 640.0;

fn main() -> eframe::Result<()> {
    log_info!("========================================");
    log_info!("Scrollspy v{} STARTUP", env!("CARGO_PKG_VERSION"));
    log_info!("========================================");

    // Check for a page file among the arguments
    let args: Vec<String> = std::env::args().collect();
    let mut page_path: Option<PathBuf> = None;

    for arg in args.iter().skip(1) {
        if arg.starts_with("--") {
            continue;
        }
        let path = PathBuf::from(arg);
        if path.exists() && path.is_file() {
            log_info!("Check arguments: Found valid file path: {:?}", path);
            page_path = Some(path);
            break;
        } else {
            log_info!("Check arguments: Invalid path or not a file: {:?}", arg);
        }
    }

    let config = load_config();

    let page = match &page_path {
        Some(path) => match Page::load_file(path) {
            Ok(page) => page,
            Err(err) => {
                log_warn!("{:#}, showing the built-in tour instead", err);
                Page::demo()
            }
        },
        None => Page::demo(),
    };

    // Resolve initial theme
    let effective_dark = gui::utils::effective_dark(config.theme_mode);

    let viewport_builder = eframe::egui::ViewportBuilder::default()
        .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
        .with_min_inner_size([520.0, 360.0])
        .with_resizable(true)
        .with_icon(std::sync::Arc::new(gui::icon::window_icon(effective_dark)));

    let options = eframe::NativeOptions {
        viewport: viewport_builder,
        ..Default::default()
    };

    let title = gui::window_title(&page.title);
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(ViewerApp::new(cc, config, page)))),
    )
}
