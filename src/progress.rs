// src/progress.rs
use std::path::Path;

/// Progress reporting for a run. Frontends implement this to surface status
/// to users; every method has a no-op default.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called right before the module binary is requested.
    fn downloading(&mut self, _module_id: u32, _dest: &Path) {}

    /// Called once the file is written and the catalog updated.
    fn finish(&mut self, _summary: &crate::runner::RunSummary) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
