// src/catalog.rs
//! Local CSV index of downloaded modules.
//!
//! One semicolon-delimited file, one row per `ModArchiveID`. Every upsert is a
//! full read-then-rewrite; there is no locking, so only one process should
//! touch a given catalog at a time.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::consts::{CATALOG_HEADERS, CATALOG_SEP};
use crate::csv::{parse_rows, split_header, write_row};
use crate::error::{Error, Result};

/// One catalog row. Field order matches `CATALOG_HEADERS`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModuleRecord {
    pub mod_archive_id: String,
    pub name: String,
    pub md5: String,
    pub format: String,
    pub channels: String,
    pub genre: String,
    pub artist: String,
    pub relative_path: String,
}

impl ModuleRecord {
    fn to_row(&self) -> [&str; 8] {
        [
            self.mod_archive_id.as_str(),
            self.name.as_str(),
            self.md5.as_str(),
            self.format.as_str(),
            self.channels.as_str(),
            self.genre.as_str(),
            self.artist.as_str(),
            self.relative_path.as_str(),
        ]
    }

    /// Build from a parsed row, locating columns through the file's own header.
    /// Columns the header doesn't name come back empty.
    fn from_row(columns: &ColumnMap, row: &[String]) -> Self {
        let get = |ix: Option<usize>| ix.and_then(|i| row.get(i)).cloned().unwrap_or_default();
        Self {
            mod_archive_id: get(columns.0[0]),
            name: get(columns.0[1]),
            md5: get(columns.0[2]),
            format: get(columns.0[3]),
            channels: get(columns.0[4]),
            genre: get(columns.0[5]),
            artist: get(columns.0[6]),
            relative_path: get(columns.0[7]),
        }
    }
}

/// Index of each canonical column within a file's header row.
struct ColumnMap([Option<usize>; 8]);

impl ColumnMap {
    fn from_header(header: &[String]) -> Self {
        Self(CATALOG_HEADERS.map(|name| header.iter().position(|h| h.trim() == name)))
    }
}

/// Create the catalog with just a header row if it doesn't exist yet.
pub fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    logf!("Creating catalog {}", path.display());
    write_all(path, &[])
}

/// Read every record. A missing or empty file reads as no records.
pub fn load(path: &Path) -> Result<Vec<ModuleRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let text = fs::read_to_string(path).map_err(Error::io("reading", path))?;
    let (header, rows) = split_header(parse_rows(&text, CATALOG_SEP));
    let Some(header) = header else {
        return Ok(Vec::new());
    };
    let columns = ColumnMap::from_header(&header);
    Ok(rows.iter().map(|r| ModuleRecord::from_row(&columns, r)).collect())
}

/// Insert `record`, replacing any existing row with the same `ModArchiveID`.
pub fn upsert(path: &Path, record: &ModuleRecord) -> Result<()> {
    ensure_exists(path)?;

    let existing = load(path)?;
    let before = existing.len();
    let mut rows: Vec<ModuleRecord> = existing
        .into_iter()
        .filter(|r| r.mod_archive_id != record.mod_archive_id)
        .collect();
    if rows.len() != before {
        logd!("Replacing {} row(s) for ModArchiveID {}", before - rows.len(), record.mod_archive_id);
    }
    rows.push(record.clone());

    write_all(path, &rows)?;
    logf!("Catalog {} now holds {} row(s)", path.display(), rows.len());
    Ok(())
}

fn write_all(path: &Path, rows: &[ModuleRecord]) -> Result<()> {
    let write = || -> std::io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?); // truncate/overwrite
        write_row(&mut out, &CATALOG_HEADERS, CATALOG_SEP)?;
        for r in rows {
            write_row(&mut out, &r.to_row(), CATALOG_SEP)?;
        }
        out.flush()
    };
    write().map_err(Error::io("writing", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn tmp_file(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("modarchive_dl_catalog_{name}.csv"));
        let _ = fs::remove_file(&p);
        p
    }

    #[test]
    fn fresh_file_gets_header_only() {
        let p = tmp_file("fresh");
        ensure_exists(&p).unwrap();
        assert_eq!(
            fs::read_to_string(&p).unwrap(),
            "ModArchiveID;Name;MD5;Format;Channels;Genre;Artist;RelativePath\n"
        );
        assert!(load(&p).unwrap().is_empty());
    }

    #[test]
    fn columns_found_by_header_name() {
        let p = tmp_file("reordered");
        fs::write(&p, "Name;ModArchiveID;Extra\nTune;42;x\n").unwrap();
        let recs = load(&p).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].mod_archive_id, "42");
        assert_eq!(recs[0].name, "Tune");
        assert_eq!(recs[0].md5, "");
    }

    #[test]
    fn empty_existing_file_is_rewritten_with_header() {
        let p = tmp_file("empty");
        fs::write(&p, "").unwrap();
        let rec = ModuleRecord { mod_archive_id: s!("1"), ..Default::default() };
        upsert(&p, &rec).unwrap();
        let text = fs::read_to_string(&p).unwrap();
        assert!(text.starts_with("ModArchiveID;Name;"));
        assert_eq!(load(&p).unwrap(), vec![rec]);
    }
}
