//! Markdown → page: level 1-2 headings open sections, everything else
//! is flattened into display paragraphs.

use std::collections::HashSet;

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use super::{Page, PageSource, Section};

/// Parse Markdown text into a page. The first H1 becomes the page title
/// (sections still get one entry each); text before the first heading is
/// kept as a preamble section labeled with the fallback title.
pub fn parse(fallback_title: &str, input: &str) -> Page {
    let mut page = Page {
        title: fallback_title.to_string(),
        sections: Vec::new(),
        source: PageSource::Demo,
    };

    let mut used_ids: HashSet<String> = HashSet::new();
    let mut title_taken = false;

    // Some while inside an H1/H2; collects the heading's inline text.
    let mut heading: Option<String> = None;
    let mut paragraph = String::new();

    for event in Parser::new_ext(input, Options::empty()) {
        match event {
            Event::Start(Tag::Heading { level, .. }) if is_section_heading(level) => {
                flush_paragraph(&mut page, fallback_title, &mut used_ids, &mut paragraph);
                heading = Some(String::new());
            }
            Event::End(TagEnd::Heading(level)) if is_section_heading(level) => {
                let text = heading.take().unwrap_or_default();
                let label = text.trim();
                let label = if label.is_empty() { "Untitled" } else { label };
                if !title_taken && level == HeadingLevel::H1 {
                    page.title = label.to_string();
                    title_taken = true;
                }
                let id = unique_slug(label, &mut used_ids);
                page.sections.push(Section::new(id, label));
            }
            // Minor headings (H3+) just break the paragraph; their text
            // flows into the body like any other line.
            Event::Start(Tag::Heading { .. }) | Event::End(TagEnd::Heading(_)) => {
                flush_paragraph(&mut page, fallback_title, &mut used_ids, &mut paragraph);
            }
            Event::Text(text) | Event::Code(text) => {
                match heading.as_mut() {
                    Some(h) => h.push_str(&text),
                    None => paragraph.push_str(&text),
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                match heading.as_mut() {
                    Some(h) => h.push(' '),
                    None => paragraph.push(' '),
                }
            }
            Event::Start(Tag::Item) => {
                flush_paragraph(&mut page, fallback_title, &mut used_ids, &mut paragraph);
                paragraph.push_str("\u{2022} ");
            }
            Event::End(TagEnd::Paragraph)
            | Event::End(TagEnd::Item)
            | Event::Start(Tag::CodeBlock(_))
            | Event::End(TagEnd::CodeBlock)
            | Event::Rule => {
                flush_paragraph(&mut page, fallback_title, &mut used_ids, &mut paragraph);
            }
            _ => {}
        }
    }
    flush_paragraph(&mut page, fallback_title, &mut used_ids, &mut paragraph);

    page
}

fn is_section_heading(level: HeadingLevel) -> bool {
    matches!(level, HeadingLevel::H1 | HeadingLevel::H2)
}

/// Push the accumulated paragraph into the last section, opening a
/// preamble section when text appears before the first heading.
fn flush_paragraph(
    page: &mut Page,
    fallback_title: &str,
    used_ids: &mut HashSet<String>,
    paragraph: &mut String,
) {
    let text = paragraph.trim();
    if text.is_empty() {
        paragraph.clear();
        return;
    }
    if page.sections.is_empty() {
        let id = unique_slug("preamble", used_ids);
        page.sections.push(Section::new(id, fallback_title));
    }
    if let Some(section) = page.sections.last_mut() {
        section.body.push(text.to_string());
    }
    paragraph.clear();
}

fn slugify(text: &str) -> String {
    let mut slug = String::new();
    let mut pending_dash = false;
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        "section".to_string()
    } else {
        slug
    }
}

fn unique_slug(label: &str, used_ids: &mut HashSet<String>) -> String {
    let base = slugify(label);
    let mut id = base.clone();
    let mut n = 1;
    while !used_ids.insert(id.clone()) {
        n += 1;
        id = format!("{}-{}", base, n);
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_become_sections_in_order() {
        let page = parse(
            "doc",
            "# First\n\nalpha beta\n\n## Second\n\ngamma\n\n## Third\n",
        );
        let ids: Vec<&str> = page.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
        let labels: Vec<&str> = page.sections.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["First", "Second", "Third"]);
        assert_eq!(page.sections[0].body, vec!["alpha beta"]);
        assert_eq!(page.sections[1].body, vec!["gamma"]);
    }

    #[test]
    fn first_h1_sets_the_title() {
        let page = parse("fallback", "# Real Title\n\nbody\n\n# Another\n");
        assert_eq!(page.title, "Real Title");
        assert_eq!(page.sections.len(), 2);
        assert_eq!(page.sections[1].label, "Another");
    }

    #[test]
    fn text_before_first_heading_is_preamble() {
        let page = parse("My Notes", "intro line\n\n# Start\n\nbody\n");
        assert_eq!(page.sections.len(), 2);
        assert_eq!(page.sections[0].id, "preamble");
        assert_eq!(page.sections[0].label, "My Notes");
        assert_eq!(page.sections[0].body, vec!["intro line"]);
        assert_eq!(page.sections[1].id, "start");
    }

    #[test]
    fn duplicate_headings_get_unique_ids() {
        let page = parse("doc", "## Setup\n\n## Setup\n\n## Setup\n");
        let ids: Vec<&str> = page.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["setup", "setup-2", "setup-3"]);
    }

    #[test]
    fn fenced_headings_do_not_open_sections() {
        let page = parse("doc", "# Only\n\n```\n# not a heading\n```\n");
        assert_eq!(page.sections.len(), 1);
        assert_eq!(page.sections[0].body, vec!["# not a heading"]);
    }

    #[test]
    fn minor_headings_flow_into_the_body() {
        let page = parse("doc", "# Top\n\n### Detail\n\ntext\n");
        assert_eq!(page.sections.len(), 1);
        assert_eq!(page.sections[0].body, vec!["Detail", "text"]);
    }

    #[test]
    fn list_items_become_bulleted_paragraphs() {
        let page = parse("doc", "# L\n\n- one\n- two\n");
        assert_eq!(
            page.sections[0].body,
            vec!["\u{2022} one", "\u{2022} two"]
        );
    }

    #[test]
    fn empty_input_has_no_sections() {
        let page = parse("doc", "");
        assert!(page.sections.is_empty());
        assert_eq!(page.title, "doc");
    }

    #[test]
    fn slugs_are_lowercased_and_dashed() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  Rust & Co. "), "rust-co");
        assert_eq!(slugify("!!!"), "section");
        assert_eq!(slugify("Étude 3"), "étude-3");
    }

    #[test]
    fn heading_ends_at_the_line_break() {
        // ATX headings are single-line; the following line is body text.
        let page = parse("doc", "## Two\nLine\n\nbody\n");
        assert_eq!(page.sections[0].label, "Two");
        assert_eq!(page.sections[0].body, vec!["Line", "body"]);
    }
}
