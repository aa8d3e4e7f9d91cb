// src/config/consts.rs

// Net config
pub const MODULE_PAGE_TEMPLATE: &str =
    "https://modarchive.org/index.php?request=view_by_moduleid&query={mod_id}";
pub const DOWNLOAD_URL_TEMPLATE: &str =
    "https://api.modarchive.org/downloads.php?moduleid={mod_id}";
pub const ID_PLACEHOLDER: &str = "{mod_id}";
pub const USER_AGENT: &str = concat!("modarchive_dl/", env!("CARGO_PKG_VERSION"));
pub const CONNECT_TIMEOUT_SECS: u64 = 10;
pub const READ_TIMEOUT_SECS: u64 = 60;

// Catalog
pub const CATALOG_FILENAME: &str = "modules_catalog.csv";
pub const CATALOG_SEP: char = ';';
pub const CATALOG_HEADERS: [&str; 8] = [
    "ModArchiveID", "Name", "MD5", "Format", "Channels", "Genre", "Artist", "RelativePath",
];

// Scrape
pub const UNKNOWN: &str = "Unknown";
pub const FALLBACK_EXT: &str = "mod";

// Output
pub const DEFAULT_OUT_DIR: &str = ".";

// Local cache / logs
pub const LOG_FILE: &str = ".store/debug.log";
