//! Output naming and writing

use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::{ExtractError, Result};

/// Derives the output filename: every `".json"` occurrence in the artifact
/// name becomes `"_abi.json"`, so `Token.json` yields `Token_abi.json`.
pub fn output_filename(jsonfile: &str) -> String {
    jsonfile.replace(".json", "_abi.json")
}

/// Creates the output directory and any missing parents.
///
/// An already-existing directory is fine; any other failure (permissions,
/// a file occupying the path) propagates.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Serializes the ABI fragment into `dir`, overwriting any previous output.
///
/// The fragment is written compact (no indentation), matching what Truffle
/// consumers expect to feed straight into web3 tooling.
pub fn write_fragment(fragment: &Value, jsonfile: &str, dir: &Path) -> Result<PathBuf> {
    let out_path = dir.join(output_filename(jsonfile));
    // serde_json only errors on non-string map keys, which a `Value` cannot
    // hold; the conversion exists to satisfy the error type.
    let content = serde_json::to_string(fragment).map_err(|e| ExtractError::Io(e.into()))?;
    fs::write(&out_path, content)?;

    Ok(out_path)
}
