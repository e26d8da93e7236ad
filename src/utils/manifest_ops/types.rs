use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// a parsed manifest file together with the path it was read from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestDocument {
    pub path: PathBuf,
    pub content: toml::Value,
}

impl ManifestDocument {
    pub fn new(path: PathBuf, content: toml::Value) -> Self {
        Self { path, content }
    }

    pub fn get_table(&self, table_name: &str) -> Option<&toml::value::Table> {
        self.content.get(table_name)?.as_table()
    }

    pub fn get_string(&self, field_name: &str) -> Option<String> {
        self.content
            .get(field_name)?
            .as_str()
            .map(|s| s.to_string())
    }

    pub fn has_table(&self, table_name: &str) -> bool {
        self.get_table(table_name).is_some()
    }

    /// the declared version of the package, from `package.version`
    pub fn package_version(&self) -> Result<String> {
        let package = self.get_table("package").ok_or_else(|| Error::MissingField {
            path: self.path.clone(),
            field: "package".to_string(),
        })?;

        // a non-string version is treated the same as a missing one
        package
            .get("version")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| Error::MissingField {
                path: self.path.clone(),
                field: "package.version".to_string(),
            })
    }
}
