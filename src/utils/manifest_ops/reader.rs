use super::types::ManifestDocument;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

pub struct ManifestReader;

impl ManifestReader {
    pub fn read_file<P: AsRef<Path>>(file_path: P) -> Result<ManifestDocument> {
        let path = file_path.as_ref();

        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::ManifestNotFound {
                path: path.to_path_buf(),
            },
            _ => Error::FileReadError {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        Self::parse_string(&content, path)
    }

    pub fn parse_string<P: AsRef<Path>>(content: &str, file_path: P) -> Result<ManifestDocument> {
        let path = file_path.as_ref();

        let toml_value = content
            .parse::<toml::Value>()
            .map_err(|e| Error::ManifestParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(ManifestDocument::new(path.to_path_buf(), toml_value))
    }

    pub fn read_crate_manifest<P: AsRef<Path>>(directory: P) -> Result<ManifestDocument> {
        let manifest_path = directory.as_ref().join("Cargo.toml");
        Self::read_file(manifest_path)
    }
}

/// read the `package.version` string from a manifest file
pub fn crate_version<P: AsRef<Path>>(manifest_path: P) -> Result<String> {
    ManifestReader::read_file(manifest_path)?.package_version()
}
