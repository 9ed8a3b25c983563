// --- NAV PANEL ---
// One entry per section, highlighted while its section is active.

use eframe::egui;

use super::super::types::ViewerApp;

impl ViewerApp {
    pub(crate) fn render_nav_panel(&mut self, ctx: &egui::Context) {
        let mut clicked: Option<String> = None;

        if let Some(menu) = self.nav.as_ref() {
            egui::SidePanel::left("nav_panel")
                .resizable(true)
                .default_width(220.0)
                .width_range(160.0..=340.0)
                .show_animated(ctx, self.config.show_nav, |ui| {
                    ui.add_space(8.0);
                    ui.heading(&self.page.title);
                    ui.separator();
                    egui::ScrollArea::vertical()
                        .auto_shrink([false; 2])
                        .show(ui, |ui| {
                            for (index, entry) in menu.entries().iter().enumerate() {
                                let active = self
                                    .page
                                    .sections
                                    .get(index)
                                    .map(|section| section.active)
                                    .unwrap_or(false);
                                if ui.selectable_label(active, &entry.label).clicked() {
                                    clicked = Some(entry.target_id.clone());
                                }
                            }
                        });
                });
        }

        // Deferred to avoid borrow issues inside the panel closure
        if let Some(id) = clicked {
            let now = ctx.input(|i| i.time);
            self.request_scroll_to_id(&id, now);
        }
    }
}
