use crate::archive;
use crate::context::Context;
use crate::error::Error;
use crate::manifest::Manifest;
use crate::result::Result;
use crate::utils;
use std::path::PathBuf;

/// Paths produced by a packaging run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackOutput {
    pub version: String,
    /// `<build-root>/<version>/<product>`
    pub dest_dir: PathBuf,
    /// `<build-root>/<product>-<version>.zip`
    pub archive_path: PathBuf,
    /// Number of files written into the archive
    pub files: usize,
}

/// Package the source tree into a versioned destination tree and zip archive.
///
/// Inputs are checked before anything on disk is touched. After that the
/// steps run strictly in order and the first failure aborts the run, leaving
/// whatever was already written in place.
pub fn pack(ctx: &Context) -> Result<PackOutput> {
    if !ctx.source_dir.is_dir() {
        return Err(Error::missing("Source directory", &ctx.source_dir));
    }
    if !ctx.license_path.is_file() {
        return Err(Error::missing("License file", &ctx.license_path));
    }
    utils::validate_component("product name", &ctx.product_name)?;

    utils::ensure_dir(&ctx.build_root)?;

    let Manifest { version } = Manifest::load(&ctx.metadata_path)?;
    utils::validate_component("version", &version)?;

    let dest_dir = ctx.build_root.join(&version).join(&ctx.product_name);
    let archive_path = ctx
        .build_root
        .join(format!("{}-{}.zip", ctx.product_name, version));

    if utils::remove_dir_if_exists(&dest_dir)? && ctx.verbose {
        println!("Removed previous {}", dest_dir.display());
    }

    if let Some(parent) = dest_dir.parent() {
        utils::ensure_dir(parent)?;
    }
    if ctx.verbose {
        println!(
            "Copying {} to {}",
            ctx.source_dir.display(),
            dest_dir.display()
        );
    }
    utils::copy_tree(&ctx.source_dir, &dest_dir)?;

    let license = utils::copy_file_into(&ctx.license_path, &dest_dir)?;
    if ctx.verbose {
        println!("Copied {}", license.display());
    }

    if ctx.verbose {
        println!("Archiving {} to {}", dest_dir.display(), archive_path.display());
    }
    let files = archive::create_zip_file(&dest_dir, &archive_path)?;

    Ok(PackOutput {
        version,
        dest_dir,
        archive_path,
        files,
    })
}
