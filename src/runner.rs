// src/runner.rs
use std::path::PathBuf;

use crate::{
    catalog::{self, ModuleRecord},
    config::consts::{FALLBACK_EXT, UNKNOWN},
    config::options::{Overrides, RunOptions},
    download::download,
    error::Result,
    file::{ensure_parent, module_destination},
    progress::Progress,
    specs::module_page::{self, ScrapedMetadata},
};

/// Everything a run resolved, as written to the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub module_id: u32,
    pub record: ModuleRecord,
    pub dest_path: PathBuf,
    pub catalog_path: PathBuf,
    pub bytes: u64,
}

impl RunSummary {
    /// Multi-line report for the console.
    pub fn report(&self) -> String {
        let r = &self.record;
        format!(
            "Metadata appended to {}:\n  ID: {}\n  Title: {}\n  MD5: {}\n  Format: {}\n  Channels: {}\n  Genre: {}\n  Artist: {}\n  File location: {}",
            self.catalog_path.display(),
            r.mod_archive_id,
            r.name,
            r.md5,
            r.format,
            r.channels,
            r.genre,
            r.artist,
            self.dest_path.display(),
        )
    }
}

/// Title, artist, genre and extension after applying overrides and fallbacks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved {
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub ext: String,
}

/// Apply caller overrides over scraped values.
/// `page_title` is the page's own heading text, if it had a usable one.
pub fn resolve(
    module_id: u32,
    meta: &ScrapedMetadata,
    page_title: Option<String>,
    overrides: &Overrides,
) -> Resolved {
    let title = overrides
        .name
        .clone()
        .or(page_title)
        .unwrap_or_else(|| format!("module_{module_id}"));

    let artist = overrides.artist.clone().unwrap_or_else(|| meta.artist.clone());

    let genre = match &overrides.genre {
        Some(g) => g.clone(),
        None if meta.genre.is_empty() => s!(UNKNOWN),
        None => meta.genre.clone(),
    };

    let ext = match meta.format.to_lowercase() {
        f if f.is_empty() => s!(FALLBACK_EXT),
        f => f,
    };

    Resolved { title, artist, genre, ext }
}

/// Fetch, scrape, download and catalog one module.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(opts: &RunOptions, mut progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let id = opts.module_id;

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Fetching metadata for module #{id}"));
    }
    let doc = module_page::fetch(id, &opts.net)?;
    let meta = module_page::scrape(&doc);
    let page_title = module_page::page_title(&doc);
    logd!("Scraped #{id}: {meta:?}, title {page_title:?}");

    let resolved = resolve(id, &meta, page_title, &opts.overrides);

    let dest = module_destination(&opts.out_root, &resolved.genre, &resolved.title, &resolved.artist, &resolved.ext);
    ensure_parent(&dest)?;

    if let Some(p) = progress.as_deref_mut() {
        p.downloading(id, &dest);
    }
    let bytes = download(id, &dest, &opts.net)?;

    let record = ModuleRecord {
        mod_archive_id: meta.mod_id,
        name: resolved.title,
        md5: meta.md5,
        format: meta.format,
        channels: meta.channels,
        genre: resolved.genre,
        artist: resolved.artist,
        relative_path: dest.display().to_string(),
    };
    if let Err(e) = ensure_parent(&opts.catalog_path).and_then(|_| catalog::upsert(&opts.catalog_path, &record)) {
        // File is already on disk; nothing to roll back.
        loge!("Catalog update failed after download of {}: {e}", dest.display());
        return Err(e);
    }

    let summary = RunSummary {
        module_id: id,
        record,
        dest_path: dest,
        catalog_path: opts.catalog_path.clone(),
        bytes,
    };
    if let Some(p) = progress.as_deref_mut() {
        p.finish(&summary);
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(format: &str, genre: &str, artist: &str) -> ScrapedMetadata {
        ScrapedMetadata {
            format: s!(format),
            genre: s!(genre),
            artist: s!(artist),
            ..Default::default()
        }
    }

    #[test]
    fn overrides_win_over_scraped() {
        let o = Overrides {
            artist: Some(s!("Override Artist")),
            name: Some(s!("Override Name")),
            genre: Some(s!("")),
        };
        let r = resolve(5, &meta("IT", "Trance", "Scraped"), Some(s!("Page")), &o);
        assert_eq!(r.title, "Override Name");
        assert_eq!(r.artist, "Override Artist");
        assert_eq!(r.genre, ""); // empty override is still an override
        assert_eq!(r.ext, "it");
    }

    #[test]
    fn title_falls_back_to_page_then_synthesized() {
        let m = meta("XM", "Chip", "A");
        let none = Overrides::default();
        assert_eq!(resolve(7, &m, Some(s!("Page Title")), &none).title, "Page Title");
        assert_eq!(resolve(7, &m, None, &none).title, "module_7");
    }

    #[test]
    fn genre_and_extension_fallbacks() {
        let none = Overrides::default();
        let r = resolve(1, &meta("", "", "A"), None, &none);
        assert_eq!(r.genre, "Unknown");
        assert_eq!(r.ext, "mod");

        let r = resolve(1, &ScrapedMetadata::default(), None, &none);
        assert_eq!(r.genre, "Unknown");
        assert_eq!(r.ext, "unknown");
        assert_eq!(r.artist, "Unknown");
    }

    #[test]
    fn report_lists_every_field() {
        let summary = RunSummary {
            module_id: 9,
            record: ModuleRecord {
                mod_archive_id: s!("9"),
                name: s!("Tune"),
                md5: s!("ff"),
                format: s!("MOD"),
                channels: s!("4"),
                genre: s!("Demo"),
                artist: s!("Me"),
                relative_path: s!("./Demo/Tune-Me.mod"),
            },
            dest_path: PathBuf::from("./Demo/Tune-Me.mod"),
            catalog_path: PathBuf::from("modules_catalog.csv"),
            bytes: 3,
        };
        let text = summary.report();
        assert!(text.starts_with("Metadata appended to modules_catalog.csv:"));
        for needle in ["ID: 9", "Title: Tune", "MD5: ff", "Format: MOD", "Channels: 4", "Genre: Demo", "Artist: Me", "File location: ./Demo/Tune-Me.mod"] {
            assert!(text.contains(needle), "missing {needle}");
        }
    }
}
