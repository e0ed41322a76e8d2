use std::path::{Path, PathBuf};

/// Source tree packaged into every release
pub const SOURCE_DIR: &str = "src";

/// Project metadata carrying the `version` key
pub const METADATA_FILE: &str = "package.json";

/// License shipped at the top of the packaged tree
pub const LICENSE_FILE: &str = "LICENSE";

/// Output directory holding versioned trees and archives
pub const BUILD_DIR: &str = "build";

/// Default product name used for the destination folder and archive prefix
pub const PRODUCT_NAME: &str = "neptune";

/// Context passed throughout the application containing the resolved inputs
#[derive(Debug, Clone)]
pub struct Context {
    /// Enable verbose output (show each filesystem step)
    pub verbose: bool,

    /// Project root all default paths are resolved against
    pub project_root: PathBuf,

    /// Directory whose contents are packaged
    pub source_dir: PathBuf,

    /// Metadata file supplying the version
    pub metadata_path: PathBuf,

    /// License file copied into the destination tree
    pub license_path: PathBuf,

    /// Top-level output directory
    pub build_root: PathBuf,

    /// Name of the destination folder and archive prefix
    pub product_name: String,
}

impl Context {
    pub fn new(project_root: PathBuf, verbose: bool) -> Self {
        Self {
            verbose,
            source_dir: project_root.join(SOURCE_DIR),
            metadata_path: project_root.join(METADATA_FILE),
            license_path: project_root.join(LICENSE_FILE),
            build_root: project_root.join(BUILD_DIR),
            product_name: PRODUCT_NAME.to_string(),
            project_root,
        }
    }

    /// Use an alternative metadata file, relative to the project root unless absolute
    pub fn with_metadata(mut self, path: &Path) -> Self {
        self.metadata_path = self.project_root.join(path);
        self
    }

    pub fn with_product_name<T: Into<String>>(mut self, name: T) -> Self {
        self.product_name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let ctx = Context::new(PathBuf::from("project"), false);

        assert_eq!(ctx.source_dir, Path::new("project").join("src"));
        assert_eq!(ctx.metadata_path, Path::new("project").join("package.json"));
        assert_eq!(ctx.license_path, Path::new("project").join("LICENSE"));
        assert_eq!(ctx.build_root, Path::new("project").join("build"));
        assert_eq!(ctx.product_name, "neptune");
    }

    #[test]
    fn test_metadata_override() {
        let ctx = Context::new(PathBuf::from("project"), false).with_metadata(Path::new("Cargo.toml"));
        assert_eq!(ctx.metadata_path, Path::new("project").join("Cargo.toml"));

        let absolute = std::env::temp_dir().join("meta.json");
        let ctx = Context::new(PathBuf::from("project"), false).with_metadata(&absolute);
        assert_eq!(ctx.metadata_path, absolute);
    }
}
