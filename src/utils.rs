use crate::error::Error;
use crate::result::Result;
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Copy a directory tree into `destination`, which must not exist yet.
///
/// Symbolic links are followed. Returns the number of files copied.
pub fn copy_tree(source: &Path, destination: &Path) -> Result<usize> {
    if destination.exists() {
        return Err(Error::custom(format!(
            "Refusing to copy into existing directory {}",
            destination.display()
        )));
    }

    let mut files = 0;
    for entry in WalkDir::new(source).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        let relative = relative_to(source, entry.path())?;
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            files += 1;
        }
    }

    Ok(files)
}

/// Copy a single file into `directory`, keeping its file name
pub fn copy_file_into(file: &Path, directory: &Path) -> Result<PathBuf> {
    let name = file
        .file_name()
        .ok_or_else(|| Error::custom(format!("{} has no file name", file.display())))?;
    let target = directory.join(name);
    fs::copy(file, &target)?;
    Ok(target)
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Remove a directory and everything below it. Absent paths are a no-op.
///
/// Returns whether anything was removed.
pub fn remove_dir_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err.into()),
    }
}

/// Path of `path` below `base`
pub fn relative_to<'a>(base: &Path, path: &'a Path) -> Result<&'a Path> {
    path.strip_prefix(base).map_err(|_| {
        Error::custom(format!(
            "{} is not inside {}",
            path.display(),
            base.display()
        ))
    })
}

/// Check that `value` names exactly one normal path component
pub fn validate_component(what: &'static str, value: &str) -> Result<()> {
    let mut components = Path::new(value).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !value.contains(['/', '\\']) => Ok(()),
        _ => Err(Error::InvalidName {
            what,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copy_tree_nested() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("sub").join("deep")).unwrap();
        fs::create_dir_all(src.join("empty")).unwrap();
        fs::write(src.join("a.txt"), "hello").unwrap();
        fs::write(src.join("sub").join("deep").join("b.txt"), "world").unwrap();

        let dst = dir.path().join("out").join("copy");
        fs::create_dir_all(dir.path().join("out")).unwrap();
        let files = copy_tree(&src, &dst).unwrap();

        assert_eq!(files, 2);
        assert_eq!(fs::read_to_string(dst.join("a.txt")).unwrap(), "hello");
        assert_eq!(
            fs::read_to_string(dst.join("sub").join("deep").join("b.txt")).unwrap(),
            "world"
        );
        assert!(dst.join("empty").is_dir());
    }

    #[test]
    fn test_copy_tree_refuses_existing_destination() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(&src).unwrap();
        let dst = dir.path().join("dst");
        fs::create_dir_all(&dst).unwrap();

        assert!(copy_tree(&src, &dst).is_err());
    }

    #[test]
    fn test_copy_file_into() {
        let dir = TempDir::new().unwrap();
        let license = dir.path().join("LICENSE");
        fs::write(&license, "MIT").unwrap();
        let target_dir = dir.path().join("target");
        fs::create_dir_all(&target_dir).unwrap();

        let copied = copy_file_into(&license, &target_dir).unwrap();

        assert_eq!(copied, target_dir.join("LICENSE"));
        assert_eq!(fs::read_to_string(copied).unwrap(), "MIT");
    }

    #[test]
    fn test_remove_dir_if_exists() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("1.0.0").join("neptune");
        fs::create_dir_all(target.join("sub")).unwrap();
        fs::write(target.join("sub").join("stray.txt"), "x").unwrap();

        assert!(remove_dir_if_exists(&target).unwrap());
        assert!(!target.exists());
        assert!(dir.path().join("1.0.0").is_dir());
    }

    #[test]
    fn test_remove_missing_dir_is_noop() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("never").join("created");

        assert!(!remove_dir_if_exists(&target).unwrap());
    }

    #[test]
    fn test_ensure_dir_reuses_existing() {
        let dir = TempDir::new().unwrap();
        let build = dir.path().join("build");
        fs::create_dir_all(&build).unwrap();
        fs::write(build.join("keep.txt"), "keep").unwrap();

        ensure_dir(&build).unwrap();

        assert_eq!(fs::read_to_string(build.join("keep.txt")).unwrap(), "keep");
    }

    #[test]
    fn test_validate_component() {
        assert!(validate_component("version", "1.0.0").is_ok());
        assert!(validate_component("version", "2.0.0-rc.1").is_ok());

        for bad in ["", ".", "..", "1.0/evil", "../1.0.0", "a\\b", "/abs"] {
            assert!(validate_component("version", bad).is_err(), "{bad:?} accepted");
        }
    }
}
