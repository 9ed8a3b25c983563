//! Page model: the ordered list of sections the viewer displays.
//!
//! Sections are fixed at load time. The only field that changes while a
//! page is on screen is each section's `active` flag, rewritten by every
//! monitor pass.

mod markdown;

pub use markdown::parse as parse_markdown;

use anyhow::Context;
use std::path::{Path, PathBuf};

/// One content region of the page. `id` is unique within a page.
#[derive(Clone, Debug)]
pub struct Section {
    pub id: String,
    pub label: String,
    pub body: Vec<String>,
    /// Derived: whether the section currently sits in the activation band.
    pub active: bool,
}

impl Section {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            body: Vec::new(),
            active: false,
        }
    }

    pub fn with_body(
        id: impl Into<String>,
        label: impl Into<String>,
        body: Vec<String>,
    ) -> Self {
        Self {
            body,
            ..Self::new(id, label)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageSource {
    Demo,
    File(PathBuf),
}

#[derive(Clone, Debug)]
pub struct Page {
    pub title: String,
    pub sections: Vec<Section>,
    pub source: PageSource,
}

impl Page {
    pub fn section_index(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    pub fn section_by_id(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Read a Markdown file and turn its headings into sections.
    pub fn load_file(path: &Path) -> anyhow::Result<Page> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading page file {}", path.display()))?;
        let fallback = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string());
        let mut page = markdown::parse(&fallback, &text);
        page.source = PageSource::File(path.to_path_buf());
        Ok(page)
    }

    /// Built-in page shown when no file is given: a short tour of the
    /// viewer itself, long enough to scroll.
    pub fn demo() -> Page {
        let sections = vec![
            Section::with_body(
                "overview",
                "Overview",
                vec![
                    "Scrollspy renders a sectioned page next to a navigation list \
                     generated from those sections. While you scroll, the sections \
                     whose tops sit inside the activation band are highlighted, both \
                     in place and in the navigation list."
                        .to_string(),
                    "Everything on this screen is derived from the section list: one \
                     nav entry per section, in the same order, labeled the same way. \
                     Reloading a page rebuilds the whole list from scratch."
                        .to_string(),
                ],
            ),
            Section::with_body(
                "navigation",
                "Navigation",
                vec![
                    "Click any entry in the left panel to scroll its section to the \
                     top of the viewport. The jump is animated; clicking another entry \
                     mid-flight simply retargets the animation, and the last click \
                     wins."
                        .to_string(),
                    "Entries never jump instantly and never address anything but their \
                     own section. If an entry's target were ever missing, the click \
                     would log a warning and do nothing rather than fail."
                        .to_string(),
                ],
            ),
            Section::with_body(
                "activation-band",
                "Activation band",
                vec![
                    "A section counts as in view while its top edge lies between \
                     150 pixels above and 150 pixels below the top of the viewport. \
                     The lower edge is inclusive, the upper edge exclusive."
                        .to_string(),
                    "Short sections can occupy that band together, so more than one \
                     highlight at a time is expected, not a glitch. Both edges can be \
                     changed in the config file."
                        .to_string(),
                ],
            ),
            Section::with_body(
                "smooth-scrolling",
                "Smooth scrolling",
                vec![
                    "Animated jumps ease in and out over a configurable duration. \
                     Scrolling by hand while an animation is running cancels it \
                     immediately; the viewer never fights the wheel."
                        .to_string(),
                    "Set smooth_scroll to false in the config to make every jump \
                     land in a single step instead."
                        .to_string(),
                ],
            ),
            Section::with_body(
                "loading-pages",
                "Loading pages",
                vec![
                    "Pass a Markdown file on the command line to view it here. Level \
                     one and two headings open sections; their text becomes the \
                     section label and a slug of it becomes the id."
                        .to_string(),
                    "Text before the first heading is kept as a preamble section, and \
                     headings inside fenced code blocks are left alone."
                        .to_string(),
                ],
            ),
            Section::with_body(
                "shortcuts",
                "Shortcuts",
                vec![
                    "Digits 1 through 9 jump to the matching section. The letter n \
                     hides or shows the navigation panel, and t cycles the theme \
                     between dark, light, and following the system."
                        .to_string(),
                    "When a file is loaded, r re-reads it from disk and rebuilds the \
                     sections and the navigation list."
                        .to_string(),
                ],
            ),
        ];

        Page {
            title: "Scrollspy tour".to_string(),
            sections,
            source: PageSource::Demo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_page_ids_are_unique() {
        let page = Page::demo();
        let mut ids: Vec<&str> = page.sections.iter().map(|s| s.id.as_str()).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
        assert!(before >= 4);
    }

    #[test]
    fn section_index_resolves_in_order() {
        let page = Page::demo();
        assert_eq!(page.section_index("overview"), Some(0));
        assert_eq!(page.section_index("navigation"), Some(1));
        assert_eq!(page.section_index("no-such-section"), None);
    }

    #[test]
    fn section_by_id_matches_index() {
        let page = Page::demo();
        let section = page.section_by_id("activation-band").unwrap();
        assert_eq!(section.label, "Activation band");
        assert!(!section.active);
    }
}
