// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

/// Everything one download run needs. The CLI fills this in; tests point the
/// URL templates at a local server and the output paths at a temp dir.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub module_id: u32,
    pub overrides: Overrides,
    pub net: NetOptions,
    /// Catalog CSV (working-directory relative by default)
    pub catalog_path: PathBuf,
    /// Root the `<genre>/` directories are created under
    pub out_root: PathBuf,
}

impl RunOptions {
    pub fn new(module_id: u32) -> Self {
        Self {
            module_id,
            overrides: Overrides::default(),
            net: NetOptions::default(),
            catalog_path: PathBuf::from(CATALOG_FILENAME),
            out_root: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

/// Caller-supplied values that win over scraped ones.
/// `Some("")` is a real override, distinct from `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    pub artist: Option<String>,
    pub name: Option<String>,
    pub genre: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetOptions {
    pub page_template: String,
    pub download_template: String,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            page_template: s!(MODULE_PAGE_TEMPLATE),
            download_template: s!(DOWNLOAD_URL_TEMPLATE),
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT_SECS),
            read_timeout: Duration::from_secs(READ_TIMEOUT_SECS),
        }
    }
}

impl NetOptions {
    pub fn page_url(&self, module_id: u32) -> String {
        fill_template(&self.page_template, module_id)
    }

    pub fn download_url(&self, module_id: u32) -> String {
        fill_template(&self.download_template, module_id)
    }
}

fn fill_template(template: &str, module_id: u32) -> String {
    template.replace(ID_PLACEHOLDER, &module_id.to_string())
}
