// src/core/net.rs
// Blocking HTTP GET via ureq. One request per call, no retries.

use std::io::Read;

use crate::config::options::NetOptions;
use crate::error::{Error, Result};

fn agent(net: &NetOptions) -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout_connect(net.connect_timeout)
        .timeout_read(net.read_timeout)
        .user_agent(crate::config::consts::USER_AGENT)
        .build()
}

fn get(net: &NetOptions, url: &str) -> Result<ureq::Response> {
    logd!("GET {url}");
    match agent(net).get(url).call() {
        Ok(resp) => {
            logd!("{} {url}", resp.status());
            Ok(resp)
        }
        Err(ureq::Error::Status(status, _)) => {
            loge!("HTTP error: {status} {url}");
            Err(Error::HttpStatus { status, url: s!(url) })
        }
        Err(ureq::Error::Transport(t)) => {
            loge!("Transport error: {t} ({url})");
            Err(Error::Network { url: s!(url), message: t.to_string() })
        }
    }
}

/// GET `url` and return the body as text.
pub fn http_get(net: &NetOptions, url: &str) -> Result<String> {
    get(net, url)?
        .into_string()
        .map_err(|source| Error::Body { url: s!(url), source })
}

/// GET `url` and return the raw body bytes.
pub fn http_get_bytes(net: &NetOptions, url: &str) -> Result<Vec<u8>> {
    let resp = get(net, url)?;
    let mut buf = Vec::new();
    resp.into_reader()
        .read_to_end(&mut buf)
        .map_err(|source| Error::Body { url: s!(url), source })?;
    Ok(buf)
}
