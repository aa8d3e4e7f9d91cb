// src/specs/module_page.rs
// Module detail page: view_by_moduleid

use scraper::{ElementRef, Html};

use crate::config::consts::UNKNOWN;
use crate::config::options::NetOptions;
use crate::core::html::{
    direct_text, elements_within, find_heading_with_text, first_element, next_in_document,
    next_sibling_matching, parse, text_lines, TextScope,
};
use crate::core::net;
use crate::error::Result;

/// Heading levels the site has used for the "Info" block over time.
pub const INFO_HEADING_LEVELS: [&str; 4] = ["h6", "h3", "h2", "h4"];
pub const INFO_HEADING: &str = "Info";
pub const ARTIST_HEADING: &str = "Registered Artist(s):";

#[derive(Clone, Copy, Debug)]
enum InfoField { ModId, Md5, Format, Channels, Genre }

// Checked in this order; first label contained in a line wins.
const INFO_LABELS: [(&str, InfoField); 5] = [
    ("Mod Archive ID:", InfoField::ModId),
    ("MD5:", InfoField::Md5),
    ("Format:", InfoField::Format),
    ("Channels:", InfoField::Channels),
    ("Genre:", InfoField::Genre),
];

/// What the page told us. Anything not found stays `"Unknown"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapedMetadata {
    pub mod_id: String,
    pub md5: String,
    pub format: String,
    pub channels: String,
    pub genre: String,
    pub artist: String,
}

impl Default for ScrapedMetadata {
    fn default() -> Self {
        Self {
            mod_id: s!(UNKNOWN),
            md5: s!(UNKNOWN),
            format: s!(UNKNOWN),
            channels: s!(UNKNOWN),
            genre: s!(UNKNOWN),
            artist: s!(UNKNOWN),
        }
    }
}

impl ScrapedMetadata {
    fn field_mut(&mut self, field: InfoField) -> &mut String {
        match field {
            InfoField::ModId => &mut self.mod_id,
            InfoField::Md5 => &mut self.md5,
            InfoField::Format => &mut self.format,
            InfoField::Channels => &mut self.channels,
            InfoField::Genre => &mut self.genre,
        }
    }

    /// Apply one logical line of the info block. Value is everything after the
    /// line's first colon, trimmed. Lines without a known label are ignored.
    fn apply_info_line(&mut self, line: &str) {
        let Some(&(_, field)) = INFO_LABELS.iter().find(|(label, _)| line.contains(label)) else {
            return;
        };
        if let Some((_, value)) = line.split_once(':') {
            *self.field_mut(field) = value.trim().to_string();
        }
    }
}

/// GET and parse the detail page for `module_id`.
pub fn fetch(module_id: u32, net: &NetOptions) -> Result<Html> {
    let url = net.page_url(module_id);
    logf!("Fetching module page #{module_id}: {url}");
    let body = net::http_get(net, &url)?;
    logd!("Module page #{module_id}: {} bytes", body.len());
    Ok(parse(&body))
}

/// Extract the metadata fields. Never fails; see `ScrapedMetadata`.
pub fn scrape(doc: &Html) -> ScrapedMetadata {
    let mut meta = ScrapedMetadata::default();

    match info_section(doc) {
        Some(section) => {
            for line in text_lines(section) {
                meta.apply_info_line(line);
            }
        }
        None => logd!("No \"{INFO_HEADING}\" section on page"),
    }

    match registered_artists(doc) {
        Some(artists) => meta.artist = artists,
        None => logd!("No \"{ARTIST_HEADING}\" list on page"),
    }

    meta
}

/// The list after the "Info" heading, else the next paragraph after it.
fn info_section(doc: &Html) -> Option<ElementRef<'_>> {
    let heading = find_heading_with_text(doc, &INFO_HEADING_LEVELS, INFO_HEADING, TextScope::Full)?;
    next_sibling_matching(heading, "ul").or_else(|| next_in_document(doc, heading, "p"))
}

/// Artist names from the list following the first "Registered Artist(s):" h2,
/// joined with ", ". `None` if the heading or its list is missing.
fn registered_artists(doc: &Html) -> Option<String> {
    let heading = find_heading_with_text(doc, &["h2"], ARTIST_HEADING, TextScope::Direct)?;
    let list = next_sibling_matching(heading, "ul")?;
    let names: Vec<String> = elements_within(list, "li")
        .into_iter()
        .map(|li| li.text().collect::<String>().trim().to_string())
        .collect();
    Some(names.join(", "))
}

/// Page title: own text of the first h1, or of the first h2 when the page has
/// no h1 at all. An h1 whose text sits in nested tags yields `None`; the h2 is
/// not consulted in that case.
pub fn page_title(doc: &Html) -> Option<String> {
    let heading = first_element(doc, "h1").or_else(|| first_element(doc, "h2"))?;
    let title = direct_text(heading);
    if title.is_empty() { None } else { Some(title) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrape_str(html: &str) -> ScrapedMetadata {
        scrape(&parse(html))
    }

    #[test]
    fn no_headings_means_all_unknown() {
        let meta = scrape_str("<html><body><p>Mod Archive ID: 1</p></body></html>");
        assert_eq!(meta, ScrapedMetadata::default());
        assert_eq!(meta.genre, "Unknown");
        assert_eq!(meta.artist, "Unknown");
    }

    #[test]
    fn extracts_labelled_info_lines() {
        let meta = scrape_str(
            r#"<h3>Info</h3>
               <ul>
                 <li>Mod Archive ID: 1234</li>
                 <li>MD5: abcd1234</li>
                 <li>Format: IT</li>
                 <li>Channels: 8</li>
                 <li>Genre: Chiptune</li>
               </ul>"#,
        );
        assert_eq!(
            meta,
            ScrapedMetadata {
                mod_id: s!("1234"),
                md5: s!("abcd1234"),
                format: s!("IT"),
                channels: s!("8"),
                genre: s!("Chiptune"),
                artist: s!("Unknown"),
            }
        );
    }

    #[test]
    fn falls_back_to_next_paragraph() {
        let meta = scrape_str(
            "<div><h4> Info </h4></div><p>Format: XM<br>Channels: 16</p>",
        );
        assert_eq!(meta.format, "XM");
        assert_eq!(meta.channels, "16");
        assert_eq!(meta.md5, "Unknown");
    }

    #[test]
    fn later_lines_win_and_value_is_after_first_colon() {
        let meta = scrape_str(
            "<h2>Info</h2><ul><li>Genre: Old</li><li>Genre: Demo Style: Trance</li>\
             <li>Downloads: 99</li></ul>",
        );
        assert_eq!(meta.genre, "Demo Style: Trance");
        assert_eq!(meta.mod_id, "Unknown");
    }

    #[test]
    fn first_matching_label_wins_per_line() {
        // Contains both labels; "MD5:" is checked before "Genre:".
        let meta = scrape_str("<h2>Info</h2><ul><li>Genre: x MD5: y</li></ul>");
        assert_eq!(meta.md5, "x MD5: y");
        assert_eq!(meta.genre, "Unknown");
    }

    #[test]
    fn info_heading_must_match_exactly() {
        let meta = scrape_str("<h2>Info box</h2><ul><li>Format: IT</li></ul><h5>Info</h5><ul><li>Format: S3M</li></ul>");
        assert_eq!(meta.format, "Unknown");
    }

    #[test]
    fn registered_artists_are_joined() {
        let meta = scrape_str(
            r#"<h2>Registered Artist(s): <span class="count">2</span></h2>
               <p>noise</p>
               <ul><li> <a href="/a">Purple Motion</a> </li><li>Skaven</li></ul>"#,
        );
        assert_eq!(meta.artist, "Purple Motion, Skaven");
    }

    #[test]
    fn artist_heading_without_list_stays_unknown() {
        let meta = scrape_str("<div><h2>Registered Artist(s):</h2></div><ul><li>Elsewhere</li></ul>");
        assert_eq!(meta.artist, "Unknown");
    }

    #[test]
    fn title_prefers_h1_then_h2() {
        let doc = parse("<h2>Second</h2><h1>Space Debris <span>(debris.mod)</span></h1>");
        assert_eq!(page_title(&doc).as_deref(), Some("Space Debris"));

        let doc = parse("<h2>Only h2</h2><p>body</p>");
        assert_eq!(page_title(&doc).as_deref(), Some("Only h2"));

        let doc = parse("<p>nothing</p>");
        assert_eq!(page_title(&doc), None);
    }

    #[test]
    fn wrapped_h1_text_does_not_fall_through_to_h2() {
        let doc = parse("<h1><span>Real Title</span></h1><h2>Info</h2><ul><li>Format: IT</li></ul>");
        assert_eq!(page_title(&doc), None);

        let doc = parse("<h1>   </h1><h2>Member Comments</h2>");
        assert_eq!(page_title(&doc), None);
    }

    #[test]
    fn info_heading_without_list_or_paragraph_stays_unknown() {
        let meta = scrape_str("<div><h3>Info</h3><div>Format: IT</div></div><span>Genre: Chip</span>");
        assert_eq!(meta, ScrapedMetadata::default());
    }
}
