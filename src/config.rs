//! Settings handling for ingestify.
//! An optional JSON or YAML settings file supplies defaults; command-line
//! arguments override them.

use crate::cli::Args;
use crate::constants::DEFAULT_SIZE_MULTIPLIER;
use crate::error::{IngestifyError, IngestifyResult};
use crate::ignore::resolve_ignore_file;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Contents of a settings file. Every field is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub ignore_file: Option<PathBuf>,
    pub size_multiplier: Option<u64>,
    pub max_output_size: Option<u64>,
}

/// How large the output artifact may grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputLimit {
    /// Absolute number of bytes
    Fixed(u64),
    /// Multiple of the input directory size
    Relative(u64),
}

impl OutputLimit {
    pub fn resolve(self, input_size: u64) -> u64 {
        match self {
            OutputLimit::Fixed(bytes) => bytes,
            OutputLimit::Relative(factor) => input_size.saturating_mul(factor),
        }
    }
}

impl Default for OutputLimit {
    fn default() -> Self {
        OutputLimit::Relative(DEFAULT_SIZE_MULTIPLIER)
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub directory: PathBuf,
    pub output_file: PathBuf,
    pub ignore_file: Option<PathBuf>,
    pub output_limit: OutputLimit,
}

/// Parses settings file content.
///
/// # Arguments
/// * `content` - Raw settings file content
///
/// # Returns
/// * `IngestifyResult<FileConfig>` - Parsed settings
///
/// # Errors
/// * `IngestifyError::ConfigError` if the content is neither valid JSON nor valid YAML
pub fn parse_config(content: &str) -> IngestifyResult<FileConfig> {
    // Try parsing as JSON first
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| IngestifyError::ConfigError(format!("Invalid settings format: {}", e))),
    }
}

/// Loads a settings file.
///
/// # Errors
/// * `IngestifyError::ConfigError` if the file cannot be read or parsed
pub fn load_config<P: AsRef<Path>>(config_path: P) -> IngestifyResult<FileConfig> {
    let config_path = config_path.as_ref();
    debug!("Loading settings from {}", config_path.display());
    let content = std::fs::read_to_string(config_path).map_err(|e| {
        IngestifyError::ConfigError(format!("cannot read {}: {}", config_path.display(), e))
    })?;
    parse_config(&content)
}

impl Settings {
    /// Merges command-line arguments over an optional settings file.
    ///
    /// Precedence for the ignore file is: positional argument, settings file,
    /// then the input directory's own ignore file.
    pub fn resolve(args: &Args) -> IngestifyResult<Self> {
        let file_config = match &args.config {
            Some(path) => load_config(path)?,
            None => FileConfig::default(),
        };
        Self::merge(args, file_config)
    }

    pub fn merge(args: &Args, file_config: FileConfig) -> IngestifyResult<Self> {
        let output_limit = match (args.max_output_size, file_config.max_output_size) {
            (Some(bytes), _) | (None, Some(bytes)) => OutputLimit::Fixed(bytes),
            (None, None) => match file_config.size_multiplier {
                Some(0) => {
                    return Err(IngestifyError::ConfigError(
                        "size_multiplier must be greater than zero".to_string(),
                    ))
                }
                Some(factor) => OutputLimit::Relative(factor),
                None => OutputLimit::default(),
            },
        };

        let explicit = args.ignore_file.as_deref().or(file_config.ignore_file.as_deref());
        let ignore_file = resolve_ignore_file(explicit, &args.directory);

        Ok(Settings {
            directory: args.directory.clone(),
            output_file: args.output_file.clone(),
            ignore_file,
            output_limit,
        })
    }
}
