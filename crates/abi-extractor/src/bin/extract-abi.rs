//! ABI extraction CLI
//!
//! Pulls the `"abi"` field out of a compiled Truffle artifact and stores it
//! next to the build output (or wherever `--outputdir` points).

use abi_extractor::ExtractConfig;
use anyhow::{Context, Result};
use clap::Parser;
use std::{env, path::PathBuf};

#[derive(Parser)]
#[command(name = "extract-abi")]
#[command(about = "Extract the ABI from a compiled Truffle contract artifact", long_about = None)]
struct Cli {
    /// JSON filename of the compiled contract in the build folder
    #[arg(long)]
    jsonfile: String,

    /// Path where extracted ABIs should be stored
    #[arg(long, default_value = "build")]
    outputdir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ExtractConfig {
        project_root: env::current_dir().context("Failed to resolve current directory")?,
        jsonfile: cli.jsonfile,
        output_dir: cli.outputdir,
    };

    let written = abi_extractor::run(&config)
        .context(format!("Failed to extract ABI from {}", config.jsonfile))?;

    println!("Wrote ABI to {}", written.display());

    Ok(())
}
