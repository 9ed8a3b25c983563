// --- APP MODULE ---
// Frame loop: input, scroll animation, the monitor pass, then panels.

mod rendering;
mod types;

use eframe::egui;

pub use types::ViewerApp;

use crate::config::save_config;
use crate::nav::rebuild_menu;
use crate::page::{Page, PageSource};
use crate::scroll::ScrollAnimation;
use crate::spy;

const SECTION_KEYS: [egui::Key; 9] = [
    egui::Key::Num1,
    egui::Key::Num2,
    egui::Key::Num3,
    egui::Key::Num4,
    egui::Key::Num5,
    egui::Key::Num6,
    egui::Key::Num7,
    egui::Key::Num8,
    egui::Key::Num9,
];

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);
        self.advance_animation(ctx);

        // Re-derive every active flag from scratch before any panel
        // reads it. Geometry comes from the previous content pass.
        let offset = self.monitored_offset();
        let band = self.band();
        spy::monitor_pass(&mut self.page.sections, &self.geometry, offset, band);

        self.render_footer(ctx);
        self.render_nav_panel(ctx);
        self.render_content(ctx);
    }
}

impl ViewerApp {
    fn handle_keys(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);

        for (index, key) in SECTION_KEYS.iter().enumerate() {
            if ctx.input(|i| i.key_pressed(*key)) && index < self.page.sections.len() {
                self.request_scroll_to_index(index, now);
            }
        }

        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.toggle_nav();
        }
        if ctx.input(|i| i.key_pressed(egui::Key::T)) {
            self.cycle_theme(ctx);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::R)) {
            self.reload_page(ctx);
        }
    }

    /// Step the in-flight scroll animation, or drop it the moment the
    /// user takes over with the wheel.
    fn advance_animation(&mut self, ctx: &egui::Context) {
        let Some(animation) = self.animation else {
            return;
        };

        if ctx.input(|i| i.raw_scroll_delta.y != 0.0) {
            self.animation = None;
            return;
        }

        let now = ctx.input(|i| i.time);
        self.scroll_override = Some(animation.sample(now));
        if animation.finished(now) {
            self.animation = None;
        } else {
            ctx.request_repaint();
        }
    }

    pub(crate) fn request_scroll_to_id(&mut self, id: &str, now: f64) {
        let Some(index) = self.page.section_index(id) else {
            crate::log_warn!("scroll request for unknown section id '{}' ignored", id);
            return;
        };
        self.request_scroll_to_index(index, now);
    }

    pub(crate) fn request_scroll_to_index(&mut self, index: usize, now: f64) {
        let Some(top) = self.geometry.top(index) else {
            crate::log_warn!(
                "section {} has no measured position yet, scroll skipped",
                index + 1
            );
            return;
        };
        let duration = if self.config.smooth_scroll {
            self.config.scroll_duration_s
        } else {
            0.0
        };
        self.animation = Some(ScrollAnimation::new(
            self.current_offset(now),
            top,
            now,
            duration,
        ));
    }

    /// Where the viewport is right now, mid-animation included. A new
    /// request starts from here so replacing a scroll never jumps.
    fn current_offset(&self, now: f64) -> f32 {
        let offset = match &self.animation {
            Some(animation) => animation.sample(now),
            None => self.viewport_offset,
        };
        offset.clamp(0.0, self.scroll_limit)
    }

    pub(crate) fn toggle_nav(&mut self) {
        self.config.show_nav = !self.config.show_nav;
        save_config(&self.config);
    }

    pub(crate) fn cycle_theme(&mut self, ctx: &egui::Context) {
        self.config.theme_mode = self.config.theme_mode.next();
        crate::gui::utils::apply_theme(ctx, self.config.theme_mode);
        save_config(&self.config);
    }

    /// Re-read a file-backed page and rebuild everything derived from
    /// it: sections, nav entries, measured geometry.
    fn reload_page(&mut self, ctx: &egui::Context) {
        let path = match &self.page.source {
            PageSource::File(path) => path.clone(),
            PageSource::Demo => return,
        };
        match Page::load_file(&path) {
            Ok(page) => {
                crate::log_info!(
                    "Reloaded '{}': {} sections",
                    page.title,
                    page.sections.len()
                );
                self.page = page;
                rebuild_menu(self.nav.as_mut(), &self.page.sections);
                self.geometry.reset(self.page.sections.len());
                self.animation = None;
                self.scroll_override = None;
                ctx.send_viewport_cmd(egui::ViewportCommand::Title(crate::gui::window_title(
                    &self.page.title,
                )));
            }
            Err(err) => {
                crate::log_warn!("reload of {:?} failed: {:#}", path, err);
            }
        }
    }
}
