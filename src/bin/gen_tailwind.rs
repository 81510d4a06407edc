//! Writes the canonical CSS build configuration to disk.
//!
//! The typed value in `tailwind::TailwindConfig` is authoritative; this tool
//! renders it so the asset pipeline and the crate can never disagree. With
//! `--check` it verifies the on-disk file instead of writing it.

use anyhow::{bail, Context};
use clap::Parser;
use mettwasser_api::tailwind::TailwindConfig;
use std::{fs, path::PathBuf};

#[derive(Parser)]
#[command(name = "gen-tailwind", about = "Generate tailwind.config.js from the canonical schema")]
struct Args {
    #[arg(long, default_value = "tailwind.config.js")]
    out: PathBuf,

    /// Verify the existing file matches the canonical configuration instead
    /// of writing it.
    #[arg(long)]
    check: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = TailwindConfig::canonical();
    config.validate()?;
    let source = config.to_module_source();

    if args.check {
        let existing = fs::read_to_string(&args.out)
            .with_context(|| format!("{} does not exist", args.out.display()))?;
        if existing != source {
            bail!(
                "{} diverges from the canonical build configuration; regenerate it with gen-tailwind",
                args.out.display()
            );
        }
        println!("{} is up to date", args.out.display());
    } else {
        fs::write(&args.out, &source)
            .with_context(|| format!("Failed to write {}", args.out.display()))?;
        println!("wrote {}", args.out.display());
    }

    Ok(())
}
