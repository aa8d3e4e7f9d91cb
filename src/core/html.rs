// src/core/html.rs
// Small query layer over a parsed `scraper::Html` tree.
// Everything site-specific lives in `specs`; these only know about tags and text.

use scraper::{ElementRef, Html, Selector};

/// Parse a full HTML document.
pub fn parse(doc: &str) -> Html {
    Html::parse_document(doc)
}

fn selector_for(tags: &[&str]) -> Option<Selector> {
    Selector::parse(&tags.join(", ")).ok()
}

/// All elements matching any of `tags`, in document order.
pub fn elements<'a>(doc: &'a Html, tags: &[&str]) -> Vec<ElementRef<'a>> {
    match selector_for(tags) {
        Some(sel) => doc.select(&sel).collect(),
        None => Vec::new(),
    }
}

/// First element (document order) with the given tag.
pub fn first_element<'a>(doc: &'a Html, tag: &str) -> Option<ElementRef<'a>> {
    elements(doc, &[tag]).into_iter().next()
}

/// Descendants of `el` with tag `tag`, in document order.
pub fn elements_within<'a>(el: ElementRef<'a>, tag: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(tag) {
        Ok(sel) => el.select(&sel).collect(),
        Err(_) => Vec::new(),
    }
}

/// Which text of a heading to compare against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextScope {
    /// All descendant text
    Full,
    /// Only the element's own text nodes
    Direct,
}

/// First heading among `levels` whose trimmed text equals `text` exactly.
/// `levels` are tag names ("h2", "h3", …); order of the list does not matter,
/// the search is always in document order.
pub fn find_heading_with_text<'a>(
    doc: &'a Html,
    levels: &[&str],
    text: &str,
    scope: TextScope,
) -> Option<ElementRef<'a>> {
    elements(doc, levels).into_iter().find(|h| {
        let own = match scope {
            TextScope::Full => full_text(*h),
            TextScope::Direct => direct_text(*h),
        };
        own.trim() == text
    })
}

/// Next sibling element (not necessarily adjacent) with tag `tag`.
pub fn next_sibling_matching<'a>(el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    el.next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sib| sib.value().name().eq_ignore_ascii_case(tag))
}

/// Next element with tag `tag` anywhere after `el` in document order
/// (its own descendants included).
pub fn next_in_document<'a>(doc: &'a Html, el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    let target = *el;
    doc.root_element()
        .descendants()
        .skip_while(move |node| *node != target)
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name().eq_ignore_ascii_case(tag))
}

/// Concatenated text of all descendants.
pub fn full_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Concatenated text of the element's own text children, trimmed.
/// Text wrapped in nested tags is ignored, so `<h1><span>X</span></h1>` yields "".
pub fn direct_text(el: ElementRef<'_>) -> String {
    let own: String = el
        .children()
        .filter_map(|child| child.value().as_text().map(|t| &**t))
        .collect();
    own.trim().to_string()
}

/// Logical lines of an element's text: every text node, split again on newlines.
pub fn text_lines(el: ElementRef<'_>) -> Vec<&str> {
    el.text().flat_map(|t| t.lines()).collect()
}
