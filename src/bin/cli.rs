// src/bin/cli.rs
use clap::Parser;
use modarchive_dl::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = cli::Args::parse();
    if let Err(e) = cli::run(args) {
        modarchive_dl::loge!("Run failed: {e}");
        return Err(e.into());
    }
    Ok(())
}
