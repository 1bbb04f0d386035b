//! Command-line interface implementation for ingestify.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::path::sanitize_path;

/// Command-line arguments structure for ingestify.
#[derive(Parser, Debug)]
#[command(author, version, about = "ingestify: concatenate a directory tree into a single file", long_about = None)]
pub struct Args {
    /// Directory to ingest
    #[arg(value_name = "DIRECTORY", value_parser = parse_path)]
    pub directory: PathBuf,

    /// File that receives the concatenated contents
    #[arg(value_name = "OUTPUT_FILE", value_parser = parse_path)]
    pub output_file: PathBuf,

    /// Ignore file with one gitignore-style pattern per line.
    /// Defaults to DIRECTORY/.ingestifyignore when present.
    #[arg(value_name = "IGNORE_FILE", value_parser = parse_path)]
    pub ignore_file: Option<PathBuf>,

    /// Settings file (JSON or YAML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Absolute cap on the output size in bytes.
    /// Overrides the default cap of twice the input directory size.
    #[arg(long, value_name = "BYTES")]
    pub max_output_size: Option<u64>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_path(raw: &str) -> Result<PathBuf, String> {
    match sanitize_path(raw) {
        "" => Ok(PathBuf::from(".")),
        path => Ok(PathBuf::from(path)),
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                // Nothing useful can be done if stdout is gone.
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
