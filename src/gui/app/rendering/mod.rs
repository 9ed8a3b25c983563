// --- RENDERING MODULE ---
// Main content layout plus the nav and footer submodules.

mod footer;
mod nav_panel;

use eframe::egui;

use super::types::ViewerApp;
use crate::page::Section;

impl ViewerApp {
    pub(crate) fn render_content(&mut self, ctx: &egui::Context) {
        let dark = ctx.style().visuals.dark_mode;

        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(ctx.style().visuals.panel_fill)
                    .inner_margin(egui::Margin {
                        left: 16,
                        right: 16,
                        top: 8,
                        bottom: 0,
                    }),
            )
            .show(ctx, |ui| {
                let mut area = egui::ScrollArea::vertical().auto_shrink([false; 2]);
                if let Some(offset) = self.scroll_override.take() {
                    area = area.vertical_scroll_offset(offset.max(0.0));
                }

                let output = area.show(ui, |ui| {
                    let content_top = ui.max_rect().top();
                    for (index, section) in self.page.sections.iter().enumerate() {
                        // Tops are stored in content space so they stay
                        // valid wherever the viewport is.
                        let rect = render_section(ui, section, dark);
                        self.geometry.record(index, rect.top() - content_top);
                        ui.add_space(12.0);
                    }
                    // Run-out room so the last section can reach the band.
                    ui.add_space(160.0);
                });

                self.viewport_offset = output.state.offset.y;
                self.scroll_limit =
                    (output.content_size.y - output.inner_rect.height()).max(0.0);
            });
    }
}

fn render_section(ui: &mut egui::Ui, section: &Section, dark: bool) -> egui::Rect {
    let inner = egui::Frame::default()
        .fill(section_fill(section.active, dark))
        .inner_margin(egui::Margin::symmetric(14, 12))
        .corner_radius(egui::CornerRadius::same(6))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.heading(&section.label);
            ui.add_space(6.0);
            for paragraph in &section.body {
                ui.label(egui::RichText::new(paragraph).size(14.0));
                ui.add_space(8.0);
            }
            ui.add_space(60.0);
        });
    inner.response.rect
}

/// Translucent yellow for active sections, a faint neutral wash for
/// the rest.
fn section_fill(active: bool, dark: bool) -> egui::Color32 {
    if active {
        egui::Color32::from_rgba_unmultiplied(255, 255, 0, 70)
    } else if dark {
        egui::Color32::from_rgba_unmultiplied(255, 255, 255, 18)
    } else {
        egui::Color32::from_rgba_unmultiplied(0, 0, 0, 10)
    }
}
