//! Truffle ABI Extractor
//!
//! Reads a compiled contract artifact from `build/contracts/` and writes its
//! `"abi"` field to a standalone JSON file, so frontends can consume the
//! interface without shipping the full artifact (bytecode, source maps,
//! compiler metadata).

pub mod artifact;
pub mod error;
pub mod output;

pub use artifact::{artifact_path, extract_abi, load_artifact, CONTRACTS_DIR};
pub use error::{ExtractError, Result};
pub use output::{ensure_output_dir, output_filename, write_fragment};

use std::path::PathBuf;

/// One extraction run, fully described.
///
/// Configuration is passed explicitly rather than read from ambient state;
/// tests point `project_root` at a temporary directory.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Directory containing `build/contracts/`.
    pub project_root: PathBuf,
    /// Artifact filename (not a path), e.g. `Token.json`.
    pub jsonfile: String,
    /// Destination directory for the extracted fragment.
    pub output_dir: PathBuf,
}

/// Runs the full pipeline: locate, load, extract, write.
///
/// Returns the path of the written fragment. Any failure propagates
/// untouched; nothing is retried and no partial output is cleaned up.
pub fn run(config: &ExtractConfig) -> Result<PathBuf> {
    let path = artifact_path(&config.project_root, &config.jsonfile);
    println!("{}", path.display());

    let document = load_artifact(&path)?;
    let fragment = extract_abi(&document, &path)?;

    ensure_output_dir(&config.output_dir)?;
    write_fragment(&fragment, &config.jsonfile, &config.output_dir)
}
