//! Scroll-spy core: viewport geometry in, activation state out.
//!
//! Everything here is pure and UI-free. The egui layer measures section
//! tops and the current scroll offset each frame and hands them to
//! [`monitor_pass`]; rendering then only consumes the resulting booleans.

use crate::page::Section;

/// Default activation band edges, pixels from the viewport top.
/// A section counts as "in view" while its top sits inside
/// `[BAND_LOWER_PX, BAND_UPPER_PX)`.
pub const BAND_LOWER_PX: i32 = -150;
pub const BAND_UPPER_PX: i32 = 150;

/// Half-open pixel interval around the viewport top. `lower` is
/// inclusive, `upper` exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActivationBand {
    pub lower: i32,
    pub upper: i32,
}

impl Default for ActivationBand {
    fn default() -> Self {
        Self {
            lower: BAND_LOWER_PX,
            upper: BAND_UPPER_PX,
        }
    }
}

impl ActivationBand {
    pub fn new(lower: i32, upper: i32) -> Self {
        Self { lower, upper }
    }

    pub fn contains(&self, offset: i32) -> bool {
        self.lower <= offset && offset < self.upper
    }
}

/// Distance from the viewport top to a section top, floored to whole
/// pixels. Negative once the section top has scrolled past the viewport
/// top. Flooring goes toward negative infinity, so `-0.25` becomes `-1`.
pub fn bounding_top(section_top: f32, viewport_offset: f32) -> i32 {
    (section_top - viewport_offset).floor() as i32
}

/// Per-section layout measured by the renderer: the content-space y of
/// each section's top, in the same order as the page's sections. `None`
/// until the section has been laid out at least once.
#[derive(Clone, Debug, Default)]
pub struct PageGeometry {
    tops: Vec<Option<f32>>,
}

impl PageGeometry {
    /// Drop all measurements and size for a page with `len` sections.
    pub fn reset(&mut self, len: usize) {
        self.tops.clear();
        self.tops.resize(len, None);
    }

    pub fn record(&mut self, index: usize, top: f32) {
        if let Some(slot) = self.tops.get_mut(index) {
            *slot = Some(top);
        }
    }

    pub fn top(&self, index: usize) -> Option<f32> {
        self.tops.get(index).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.tops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tops.is_empty()
    }
}

/// One full monitor pass: every section is deactivated first, then
/// activated iff its floored offset falls inside the band. Sections
/// without a measured top stay inactive. There is no memoization: the
/// pass runs the same work whether or not anything changed, and several
/// sections may end up active at once when their tops share the band.
pub fn monitor_pass(
    sections: &mut [Section],
    geometry: &PageGeometry,
    viewport_offset: f32,
    band: ActivationBand,
) {
    for (index, section) in sections.iter_mut().enumerate() {
        section.active = false;
        if let Some(top) = geometry.top(index) {
            let offset = bounding_top(top, viewport_offset);
            if band.contains(offset) {
                section.active = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Section;

    fn section(id: &str) -> Section {
        Section::new(id, id)
    }

    fn geometry_of(tops: &[f32]) -> PageGeometry {
        let mut geometry = PageGeometry::default();
        geometry.reset(tops.len());
        for (i, &top) in tops.iter().enumerate() {
            geometry.record(i, top);
        }
        geometry
    }

    #[test]
    fn band_boundaries_are_half_open() {
        let band = ActivationBand::default();
        assert!(band.contains(-150));
        assert!(band.contains(149));
        assert!(band.contains(0));
        assert!(!band.contains(150));
        assert!(!band.contains(-151));
    }

    #[test]
    fn bounding_top_floors_toward_negative_infinity() {
        assert_eq!(bounding_top(100.0, 0.0), 100);
        assert_eq!(bounding_top(99.75, 0.0), 99);
        assert_eq!(bounding_top(100.0, 100.25), -1);
        assert_eq!(bounding_top(0.0, 150.5), -151);
        assert_eq!(bounding_top(0.0, 0.0), 0);
    }

    #[test]
    fn fractional_offsets_respect_band_edges() {
        let band = ActivationBand::default();
        // Top exactly 150.0 below the viewport top: floored to 150, out.
        assert!(!band.contains(bounding_top(150.0, 0.0)));
        // A hair less than 150: floored to 149, in.
        assert!(band.contains(bounding_top(149.999, 0.0)));
        // Exactly -150: in.
        assert!(band.contains(bounding_top(0.0, 150.0)));
        // Half a pixel past -150 floors to -151: out.
        assert!(!band.contains(bounding_top(0.0, 150.5)));
    }

    #[test]
    fn pass_activates_only_sections_in_band() {
        let mut sections = vec![section("a"), section("b"), section("c")];
        let geometry = geometry_of(&[0.0, 400.0, 800.0]);

        monitor_pass(&mut sections, &geometry, 0.0, ActivationBand::default());
        let active: Vec<bool> = sections.iter().map(|s| s.active).collect();
        assert_eq!(active, vec![true, false, false]);

        // Scroll down 400px: section b lands at offset 0, a at -400.
        monitor_pass(&mut sections, &geometry, 400.0, ActivationBand::default());
        let active: Vec<bool> = sections.iter().map(|s| s.active).collect();
        assert_eq!(active, vec![false, true, false]);
    }

    #[test]
    fn pass_is_idempotent_for_unchanged_geometry() {
        let mut sections = vec![section("a"), section("b")];
        let geometry = geometry_of(&[10.0, 500.0]);

        monitor_pass(&mut sections, &geometry, 0.0, ActivationBand::default());
        let first: Vec<bool> = sections.iter().map(|s| s.active).collect();
        monitor_pass(&mut sections, &geometry, 0.0, ActivationBand::default());
        let second: Vec<bool> = sections.iter().map(|s| s.active).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn stale_activation_is_cleared_by_the_next_pass() {
        let mut sections = vec![section("a")];
        let geometry = geometry_of(&[0.0]);

        monitor_pass(&mut sections, &geometry, 0.0, ActivationBand::default());
        assert!(sections[0].active);

        // Section top now 300px above the viewport top: out of band.
        monitor_pass(&mut sections, &geometry, 300.0, ActivationBand::default());
        assert!(!sections[0].active);
    }

    #[test]
    fn short_sections_can_share_the_band() {
        let mut sections = vec![section("a"), section("b"), section("c")];
        // Two tops within 300px of each other both fit the default band.
        let geometry = geometry_of(&[0.0, 140.0, 900.0]);

        monitor_pass(&mut sections, &geometry, 0.0, ActivationBand::default());
        assert!(sections[0].active);
        assert!(sections[1].active);
        assert!(!sections[2].active);
    }

    #[test]
    fn unmeasured_sections_stay_inactive() {
        let mut sections = vec![section("a"), section("b")];
        let mut geometry = PageGeometry::default();
        geometry.reset(2);
        geometry.record(0, 0.0);
        // Section b never laid out.

        monitor_pass(&mut sections, &geometry, 0.0, ActivationBand::default());
        assert!(sections[0].active);
        assert!(!sections[1].active);
    }

    #[test]
    fn custom_band_is_honored() {
        let band = ActivationBand::new(-10, 10);
        assert!(band.contains(-10));
        assert!(band.contains(9));
        assert!(!band.contains(10));
        assert!(!band.contains(-11));
    }
}
