// --- APP STATE ---
// Everything the viewer renders from lives on this struct; panels read
// and mutate it through &mut self, never through globals.

use crate::config::Config;
use crate::nav::NavMenu;
use crate::page::Page;
use crate::scroll::ScrollAnimation;
use crate::spy::{ActivationBand, PageGeometry};

pub struct ViewerApp {
    pub(crate) config: Config,
    pub(crate) page: Page,
    pub(crate) nav: Option<NavMenu>,
    /// Section tops measured during the previous content pass.
    pub(crate) geometry: PageGeometry,
    /// Scroll offset the content panel reported last frame.
    pub(crate) viewport_offset: f32,
    /// Largest offset the scroll area could reach last frame.
    pub(crate) scroll_limit: f32,
    /// Offset to force onto the scroll area this frame, if any.
    pub(crate) scroll_override: Option<f32>,
    pub(crate) animation: Option<ScrollAnimation>,
}

impl ViewerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config, page: Page) -> Self {
        crate::gui::utils::apply_theme(&cc.egui_ctx, config.theme_mode);

        let nav = Some(NavMenu::from_sections(&page.sections));
        let mut geometry = PageGeometry::default();
        geometry.reset(page.sections.len());

        crate::log_info!(
            "Viewer ready: '{}' with {} sections",
            page.title,
            page.sections.len()
        );

        Self {
            config,
            page,
            nav,
            geometry,
            viewport_offset: 0.0,
            scroll_limit: f32::INFINITY,
            scroll_override: None,
            animation: None,
        }
    }

    pub(crate) fn band(&self) -> ActivationBand {
        ActivationBand::new(self.config.band_lower_px, self.config.band_upper_px)
    }

    /// Offset for this frame's monitor pass. Clamped to the reachable
    /// scroll range: while an animation overshoots the page end the
    /// viewport sits pinned at the limit, and the monitor has to judge
    /// sections against that, not the raw sample.
    pub(crate) fn monitored_offset(&self) -> f32 {
        self.scroll_override
            .unwrap_or(self.viewport_offset)
            .clamp(0.0, self.scroll_limit)
    }
}
