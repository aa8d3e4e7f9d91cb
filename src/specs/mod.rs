// src/specs/mod.rs
//! # Page scraping specs
//!
//! Page-specific knowledge of the Mod Archive site lives here: which URL to
//! hit, which heading labels a block, and which text labels carry which
//! field. Generic tree walking is in `core::html`; this layer only decides
//! *what* to look for.
//!
//! ## Conventions
//! - Missing markup is never an error. A label that isn't on the page leaves
//!   its field at `"Unknown"`.
//! - Parsing is pure (`&Html` in, values out) so it can be tested offline
//!   against captured or synthetic pages.
//! - Fetching and parsing are separate calls; the runner owns the document
//!   between them.
pub mod module_page;
