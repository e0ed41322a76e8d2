use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

/// Command-line arguments for the packaging tool
#[derive(Debug)]
pub struct Args {
    /// Enable verbose output
    pub verbose: bool,

    /// Project root containing src/, package.json and LICENSE
    pub path: Option<PathBuf>,

    /// Alternative metadata file supplying the version
    pub manifest: Option<PathBuf>,

    /// Product name used for the destination folder and archive prefix
    pub name: Option<String>,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        let matches = Command::new("neptune-pack")
            .version(clap::crate_version!())
            .about("Package the source tree into a versioned zip archive")
            .arg(
                Arg::new("path")
                    .short('p')
                    .long("path")
                    .value_name("PATH")
                    .help("Project root (defaults to the current directory)")
            )
            .arg(
                Arg::new("manifest")
                    .short('m')
                    .long("manifest")
                    .value_name("FILE")
                    .help("Metadata file supplying the version (package.json or a .toml file)")
            )
            .arg(
                Arg::new("name")
                    .short('n')
                    .long("name")
                    .value_name("NAME")
                    .help("Product name for the destination folder and archive prefix")
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::SetTrue)
                    .help("Enable verbose output")
            )
            .get_matches();

        Self {
            verbose: matches.get_flag("verbose"),
            path: matches.get_one::<String>("path").map(PathBuf::from),
            manifest: matches.get_one::<String>("manifest").map(PathBuf::from),
            name: matches.get_one::<String>("name").cloned(),
        }
    }
}
