// src/cli.rs
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::consts::{CATALOG_FILENAME, DEFAULT_OUT_DIR};
use crate::config::options::{Overrides, RunOptions};
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

/// Download a module from The Mod Archive and record it in a CSV catalog
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Mod Archive module ID
    pub mod_id: u32,

    /// Artist to use instead of the scraped one
    #[arg(long)]
    pub artist: Option<String>,

    /// Title to use instead of the page heading
    #[arg(long)]
    pub name: Option<String>,

    /// Genre (and output directory) to use instead of the scraped one
    #[arg(long)]
    pub genre: Option<String>,

    /// Catalog CSV to update
    #[arg(long, default_value = CATALOG_FILENAME)]
    pub catalog: PathBuf,

    /// Directory the genre folders are created in
    #[arg(long, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Write the debug log here instead of .store/debug.log
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn into_options(self) -> RunOptions {
        let mut opts = RunOptions::new(self.mod_id);
        opts.overrides = Overrides {
            artist: self.artist,
            name: self.name,
            genre: self.genre,
        };
        opts.catalog_path = self.catalog;
        opts.out_root = self.out_dir;
        opts
    }
}

/// Prints progress lines to stdout.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn downloading(&mut self, module_id: u32, dest: &Path) {
        println!("Downloading module #{module_id} → {}", dest.display());
    }

    fn finish(&mut self, summary: &RunSummary) {
        println!("{}", summary.report());
    }
}

pub fn run(args: Args) -> crate::error::Result<RunSummary> {
    if let Some(path) = &args.log_file {
        crate::log::set_log_file(path).map_err(crate::error::Error::io("setting log file", path))?;
    }
    logf!("Starting modarchive_dl {} for module #{}", env!("CARGO_PKG_VERSION"), args.mod_id);

    let opts = args.into_options();
    let mut console = ConsoleProgress;
    runner::run(&opts, Some(&mut console))
}
