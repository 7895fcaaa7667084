//! Build artifact loading
//!
//! Truffle writes one JSON artifact per contract under `build/contracts/`.
//! Only the top-level `"abi"` key matters here; everything else in the
//! artifact (bytecode, source maps, compiler metadata) is ignored.

use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::{ExtractError, Result};

/// Location of compiled artifacts relative to the project root.
pub const CONTRACTS_DIR: &str = "build/contracts";

/// Resolves the artifact path for `jsonfile` under `root`.
///
/// No existence check is done here; a missing file surfaces from the
/// subsequent read.
pub fn artifact_path(root: &Path, jsonfile: &str) -> PathBuf {
    root.join(CONTRACTS_DIR).join(jsonfile)
}

/// Reads and parses an artifact file as JSON.
pub fn load_artifact(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ExtractError::NotFound { path: path.to_path_buf() },
        _ => ExtractError::Io(e),
    })?;

    serde_json::from_str(&content)
        .map_err(|source| ExtractError::Parse { path: path.to_path_buf(), source })
}

/// Pulls the `"abi"` value out of a parsed artifact.
///
/// The fragment is treated as opaque JSON; conventionally it is an array of
/// function/event descriptors, but nothing here depends on that.
pub fn extract_abi(document: &Value, path: &Path) -> Result<Value> {
    document
        .get("abi")
        .cloned()
        .ok_or_else(|| ExtractError::MissingAbi { path: path.to_path_buf() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_artifact_path_joins_contracts_dir() {
        let path = artifact_path(Path::new("/project"), "Token.json");
        assert_eq!(path, PathBuf::from("/project/build/contracts/Token.json"));
    }

    #[test]
    fn test_load_artifact_valid() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"contractName": "Token", "abi": []}}"#).unwrap();

        let document = load_artifact(file.path()).unwrap();
        assert_eq!(document["contractName"], "Token");
    }

    #[test]
    fn test_load_artifact_missing_file() {
        let result = load_artifact(Path::new("/nonexistent/Token.json"));
        assert!(matches!(result, Err(ExtractError::NotFound { .. })));
    }

    #[test]
    fn test_load_artifact_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid json").unwrap();

        let result = load_artifact(file.path());
        assert!(matches!(result, Err(ExtractError::Parse { .. })));
    }

    #[test]
    fn test_extract_abi_present() {
        let document = json!({"abi": [{"name": "transfer", "type": "function"}]});

        let abi = extract_abi(&document, Path::new("Token.json")).unwrap();
        assert_eq!(abi, json!([{"name": "transfer", "type": "function"}]));
    }

    #[test]
    fn test_extract_abi_opaque_value() {
        // The fragment is copied as-is even when it is not an array.
        let document = json!({"abi": {"custom": true}});

        let abi = extract_abi(&document, Path::new("Token.json")).unwrap();
        assert_eq!(abi, json!({"custom": true}));
    }

    #[test]
    fn test_extract_abi_missing_key() {
        let document = json!({"contractName": "Token", "bytecode": "0x"});

        let result = extract_abi(&document, Path::new("Token.json"));
        assert!(matches!(result, Err(ExtractError::MissingAbi { .. })));
    }
}
