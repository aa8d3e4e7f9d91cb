// src/download.rs
use std::fs;
use std::path::Path;

use crate::config::options::NetOptions;
use crate::core::net;
use crate::error::{Error, Result};

/// Fetch the module binary and write it to `dest`, overwriting any file there.
/// The parent directory must already exist. Returns bytes written.
pub fn download(module_id: u32, dest: &Path, net: &NetOptions) -> Result<u64> {
    let url = net.download_url(module_id);
    logf!("Downloading module #{module_id}: {url}");
    let body = net::http_get_bytes(net, &url)?;
    fs::write(dest, &body).map_err(Error::io("writing", dest))?;
    logf!("Wrote {} bytes to {}", body.len(), dest.display());
    Ok(body.len() as u64)
}
