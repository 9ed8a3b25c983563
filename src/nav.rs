//! Menu Builder: the navigation list generated from the page's sections.
//!
//! The entry list is always the image of the section list: one entry
//! per section, in section order, with matching id and label. It is
//! rebuilt wholesale (never patched in place) and only when the page
//! changes.

use crate::page::Section;

/// One navigation link. `target_id` names the section it scrolls to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub target_id: String,
    pub label: String,
}

/// Build the entry list for a section list.
pub fn build_entries(sections: &[Section]) -> Vec<NavEntry> {
    sections
        .iter()
        .map(|section| NavEntry {
            target_id: section.id.clone(),
            label: section.label.clone(),
        })
        .collect()
}

/// The navigation menu. The app owns at most one; an app built without a
/// navigation container simply has none, and menu operations through the
/// absent menu are no-ops rather than errors.
#[derive(Clone, Debug, Default)]
pub struct NavMenu {
    entries: Vec<NavEntry>,
}

impl NavMenu {
    pub fn from_sections(sections: &[Section]) -> Self {
        Self {
            entries: build_entries(sections),
        }
    }

    /// Replace the whole entry list from the current sections.
    pub fn rebuild(&mut self, sections: &[Section]) {
        self.entries = build_entries(sections);
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Rebuild an optional menu. A missing menu is the "no navigation
/// container" case: the call completes without touching anything.
pub fn rebuild_menu(menu: Option<&mut NavMenu>, sections: &[Section]) {
    if let Some(menu) = menu {
        menu.rebuild(sections);
    }
}
