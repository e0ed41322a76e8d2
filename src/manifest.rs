use crate::error::Error;
use crate::result::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct PackageJson {
    #[serde(default)]
    pub version: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct MetadataToml {
    #[serde(default)]
    pub version: Option<toml::Value>,
    #[serde(default)]
    pub package: Option<PackageSection>,
}

#[derive(Debug, Deserialize)]
pub struct PackageSection {
    #[serde(default)]
    pub version: Option<toml::Value>,
}

/// Metadata extracted from the project file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub version: String,
}

impl Manifest {
    /// Load the metadata file and extract its `version`.
    ///
    /// `.toml` files accept a top-level `version` or a Cargo-style
    /// `[package].version`; everything else is read as JSON.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::missing("Metadata file", path));
        }

        let content = fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let version = if is_toml {
            Self::version_from_toml(path, &content)?
        } else {
            Self::version_from_json(path, &content)?
        };

        Ok(Manifest { version })
    }

    fn version_from_json(path: &Path, content: &str) -> Result<String> {
        let package: PackageJson = serde_json::from_str(content)
            .map_err(|e| Error::malformed(path, e.to_string()))?;

        match package.version {
            Some(serde_json::Value::String(version)) => Ok(version),
            Some(other) => Err(Error::malformed(
                path,
                format!("`version` must be a string, found {}", other),
            )),
            None => Err(Error::malformed(path, "missing `version` field")),
        }
    }

    fn version_from_toml(path: &Path, content: &str) -> Result<String> {
        let metadata: MetadataToml =
            toml::from_str(content).map_err(|e| Error::malformed(path, e.to_string()))?;

        let value = metadata
            .version
            .or_else(|| metadata.package.and_then(|p| p.version))
            .ok_or_else(|| Error::malformed(path, "missing `version` field"))?;

        match value {
            toml::Value::String(version) => Ok(version),
            other => Err(Error::malformed(
                path,
                format!("`version` must be a string, found {}", other.type_str()),
            )),
        }
    }
}
