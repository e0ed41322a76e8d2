use crate::result::Result;
use crate::utils;
use std::fs::File;
use std::io;
use std::path::Path;
use walkdir::WalkDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Zip the contents of `source_dir` into `output_path`.
///
/// The archive root is the contents of `source_dir`, not the directory
/// itself. Entry names always use `/` separators. Returns the number of
/// files written.
pub fn create_zip_file(source_dir: &Path, output_path: &Path) -> Result<usize> {
    let file = File::create(output_path)?;
    let mut zip = ZipWriter::new(file);

    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .unix_permissions(0o755);

    let mut files = 0;
    for entry in WalkDir::new(source_dir).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        let relative = utils::relative_to(source_dir, path)?;
        if relative.as_os_str().is_empty() {
            continue;
        }
        let name = entry_name(relative);

        if entry.file_type().is_dir() {
            zip.add_directory(name, options)?;
        } else {
            zip.start_file(name, options)?;
            let mut f = File::open(path)?;
            io::copy(&mut f, &mut zip)?;
            files += 1;
        }
    }

    zip.finish()?;
    Ok(files)
}

fn entry_name(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
