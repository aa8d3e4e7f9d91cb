// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::core::sanitize::sanitize_filename;
use crate::error::{Error, Result};

/// Where one module lands: `<root>/<genre>/<title>-<artist>.<ext>`.
/// Title, artist and genre are sanitized here; `ext` is used as given.
pub fn module_destination(root: &Path, genre: &str, title: &str, artist: &str, ext: &str) -> PathBuf {
    let dir = root.join(sanitize_filename(genre));
    let filename = format!("{}-{}.{}", sanitize_filename(title), sanitize_filename(artist), ext);
    dir.join(filename)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        logd!("Creating directory {}", dir.display());
        fs::create_dir_all(dir).map_err(Error::io("creating directory", dir))?;
    }
    Ok(())
}

/// Ensure the parent of `path` exists (no-op for bare filenames).
pub fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_sanitizes_each_part() {
        let p = module_destination(Path::new("."), "Chip Tune", "My Song!", "DJ/Foo", "it");
        assert_eq!(p, Path::new("./Chip Tune/My Song-DJFoo.it"));
        assert_eq!(p.to_string_lossy(), "./Chip Tune/My Song-DJFoo.it");
    }

    #[test]
    fn ensure_directory_rejects_files() {
        let mut p = std::env::temp_dir();
        p.push("modarchive_dl_not_a_dir");
        fs::write(&p, b"x").unwrap();
        assert!(matches!(ensure_directory(&p), Err(Error::NotADirectory(_))));
        let _ = fs::remove_file(&p);
    }

    #[test]
    fn ensure_directory_is_recursive() {
        let mut p = std::env::temp_dir();
        p.push("modarchive_dl_nested");
        let _ = fs::remove_dir_all(&p);
        let deep = p.join("a").join("b");
        ensure_directory(&deep).unwrap();
        assert!(deep.is_dir());
        ensure_directory(&deep).unwrap();
        let _ = fs::remove_dir_all(&p);
    }
}
