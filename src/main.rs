mod archive;
mod args;
mod context;
mod error;
mod manifest;
mod pack;
mod result;
mod utils;

use args::Args;
use context::Context;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> result::Result<()> {
    let Args {
        verbose,
        path,
        manifest,
        name,
    } = Args::parse();

    // The working directory is only consulted here; packaging itself takes an explicit root
    let project_root = match path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    let mut ctx = Context::new(project_root, verbose);
    if let Some(manifest) = manifest {
        ctx = ctx.with_metadata(&manifest);
    }
    if let Some(name) = name {
        ctx = ctx.with_product_name(name);
    }

    cliclack::intro("neptune-pack")?;

    let spinner = cliclack::spinner();
    spinner.start(format!("Packaging {}...", ctx.source_dir.display()));
    let output = match pack::pack(&ctx) {
        Ok(output) => {
            spinner.stop(format!(
                "Packaged version {} into {}",
                output.version,
                output.dest_dir.display()
            ));
            output
        }
        Err(e) => {
            spinner.error("Packaging failed");
            return Err(e);
        }
    };

    cliclack::outro(format!(
        "Archive created: {} ({} files)",
        output.archive_path.display(),
        output.files
    ))?;
    Ok(())
}
