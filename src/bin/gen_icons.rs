//! App icon generator.
//!
//! Draws the 4×4 tier grid and writes it as PNG. With no arguments it
//! produces the two web-app icons:
//!   public/icon-192.png
//!   public/icon-512.png
//!
//! Example:
//!   cargo run --bin gen_icons -- --out-dir dist --size 48 --size 96 --create-dirs
//!
//! Set `RUST_LOG=debug` to see layout values and content digests.

use std::{fs, path::PathBuf};
use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use grid_icons::{create_icon, IconConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate the grid app icons", long_about=None)]
struct Args {
    /// RON file with `out_dir` and `targets` overrides. Falls back to the
    /// defaults (with a warning) if it cannot be read or parsed.
    #[arg(long)] config: Option<PathBuf>,
    /// Write every icon into this directory instead.
    #[arg(long)] out_dir: Option<PathBuf>,
    /// Edge length in pixels; repeat to render several (`icon-<N>.png`).
    #[arg(long = "size")] sizes: Vec<u32>,
    /// Create each target's parent directory if it is missing.
    #[arg(long)] create_dirs: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut cfg = match &args.config {
        Some(path) => {
            let (cfg, err) = IconConfig::load_or_default(path);
            if let Some(e) = err { warn!("{}: {e}; using default targets", path.display()); }
            cfg
        }
        None => IconConfig::default(),
    };
    if let Some(dir) = args.out_dir { cfg.out_dir = dir; }
    if !args.sizes.is_empty() { cfg = cfg.with_sizes(args.sizes); }
    for w in cfg.validate() { warn!("config: {w}"); }

    let targets = cfg.resolved_targets();
    for (size, path) in &targets {
        if args.create_dirs {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).with_context(|| format!("create {:?}", parent))?;
            }
        }
        create_icon(*size, path)?;
    }
    info!("{} icon(s) in {}", targets.len(), cfg.out_dir.display());
    println!("Icons created!");
    Ok(())
}
