// --- FOOTER RENDERING ---
// Status strip: page title, section totals, the active set, theme and
// nav toggles.

use eframe::egui;

use super::super::types::ViewerApp;
use crate::config::ThemeMode;

impl ViewerApp {
    pub(crate) fn render_footer(&mut self, ctx: &egui::Context) {
        let visuals = ctx.style().visuals.clone();
        let footer_bg = if visuals.dark_mode {
            egui::Color32::from_gray(20)
        } else {
            egui::Color32::from_gray(240)
        };

        let active_labels: Vec<&str> = self
            .page
            .sections
            .iter()
            .filter(|section| section.active)
            .map(|section| section.label.as_str())
            .collect();

        let mut toggle_nav = false;
        let mut cycle_theme = false;

        egui::TopBottomPanel::bottom("footer_panel")
            .resizable(false)
            .show_separator_line(false)
            .frame(
                egui::Frame::default()
                    .inner_margin(egui::Margin::symmetric(10, 4))
                    .fill(footer_bg)
                    .stroke(egui::Stroke::NONE),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    // The title stays visible here even with the nav
                    // panel hidden.
                    ui.label(egui::RichText::new(&self.page.title).strong());
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!("{} sections", self.page.sections.len()))
                            .weak(),
                    );
                    ui.separator();
                    let status = if active_labels.is_empty() {
                        "nothing in view".to_string()
                    } else {
                        format!("in view: {}", active_labels.join(", "))
                    };
                    ui.label(status);

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let theme_text = match self.config.theme_mode {
                            ThemeMode::Dark => "Theme: dark",
                            ThemeMode::Light => "Theme: light",
                            ThemeMode::System => "Theme: system",
                        };
                        if ui
                            .small_button(theme_text)
                            .on_hover_text("Cycle theme (T)")
                            .clicked()
                        {
                            cycle_theme = true;
                        }
                        let nav_text = if self.config.show_nav {
                            "Hide nav"
                        } else {
                            "Show nav"
                        };
                        if ui
                            .small_button(nav_text)
                            .on_hover_text("Toggle the nav panel (N)")
                            .clicked()
                        {
                            toggle_nav = true;
                        }
                    });
                });
            });

        if toggle_nav {
            self.toggle_nav();
        }
        if cycle_theme {
            self.cycle_theme(ctx);
        }
    }
}
