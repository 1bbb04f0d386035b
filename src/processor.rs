//! Concatenation of a walked directory tree into a single output artifact.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Read, Write};

use log::{debug, warn};

use crate::config::Settings;
use crate::constants::HEADER_RULE;
use crate::error::{IngestifyError, IngestifyResult};
use crate::ignore::read_ignore_file;
use crate::matcher::IgnoreList;
use crate::walk::{directory_size, Visit, Walker};

const CHUNK_SIZE: usize = 8 * 1024;

/// Action reported for each walked entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Writing,
    Ignoring,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Writing => write!(f, "Writing: "),
            Action::Ignoring => write!(f, "Ignoring:"),
        }
    }
}

/// Totals for a finished run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IngestSummary {
    pub files_written: usize,
    pub entries_ignored: usize,
    pub bytes_written: u64,
    pub limit: u64,
}

/// Header line written before each file's contents.
pub fn file_header(display: &str) -> String {
    format!("\nFILE \"{}\" {}:\n", display, HEADER_RULE)
}

/// Appends one file to the output, keeping track of the byte budget.
///
/// Only file contents count against the budget; headers and separators are free.
///
/// # Arguments
/// * `out` - Output sink
/// * `display` - Path shown in the file header
/// * `input` - Contents to copy
/// * `written` - Content bytes already written to `out`
/// * `limit` - Maximum content bytes `out` may receive
///
/// # Returns
/// * `IngestifyResult<u64>` - The new total of content bytes written
///
/// # Errors
/// * `IngestifyError::OutputLimitExceeded` if the next chunk would cross `limit`;
///   everything before that chunk has already been written
/// * `IngestifyError::IoError` if reading `input` or writing `out` fails
pub fn append_file<W: Write, R: Read>(
    out: &mut W,
    display: &str,
    input: &mut R,
    mut written: u64,
    limit: u64,
) -> IngestifyResult<u64> {
    out.write_all(file_header(display).as_bytes())?;

    let mut buffer = [0u8; CHUNK_SIZE];
    loop {
        let n = input.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        written = emit(out, &buffer[..n], written, limit)?;
    }

    out.write_all(b"\n")?;
    Ok(written)
}

fn emit<W: Write>(out: &mut W, bytes: &[u8], written: u64, limit: u64) -> IngestifyResult<u64> {
    let total = written + bytes.len() as u64;
    if total > limit {
        return Err(IngestifyError::OutputLimitExceeded { limit });
    }
    out.write_all(bytes)?;
    Ok(total)
}

/// Drives one ingestion: walk, filter and concatenate.
pub struct Processor<'a> {
    settings: &'a Settings,
    ignore: IgnoreList,
}

impl<'a> Processor<'a> {
    /// Loads the ignore list once for the whole traversal.
    pub fn new(settings: &'a Settings) -> Self {
        let ignore = match &settings.ignore_file {
            Some(path) => read_ignore_file(path),
            None => IgnoreList::default(),
        };
        Self { settings, ignore }
    }

    pub fn with_ignore_list(settings: &'a Settings, ignore: IgnoreList) -> Self {
        Self { settings, ignore }
    }

    pub fn ignore_list(&self) -> &IgnoreList {
        &self.ignore
    }

    /// Walks the input directory and writes every kept file to the output file.
    ///
    /// The output file is truncated before the input is sized, so a stale
    /// output inside the tree never inflates the limit.
    ///
    /// # Errors
    /// * `IngestifyError::WalkError` if the input directory cannot be sized
    /// * `IngestifyError::IoError` if the output file cannot be created or written
    /// * `IngestifyError::OutputLimitExceeded` once the output budget is spent
    pub fn run(&self) -> IngestifyResult<IngestSummary> {
        let output = File::create(&self.settings.output_file)?;

        let input_size = directory_size(&self.settings.directory)?;
        let limit = self.settings.output_limit.resolve(input_size);
        debug!("Input size {} bytes, output limit {} bytes", input_size, limit);

        let mut out = BufWriter::new(output);
        let summary = self.write_all(&mut out, limit)?;
        out.flush()?;
        Ok(summary)
    }

    /// Walks the input directory and writes every kept file to `out`.
    pub fn write_all<W: Write>(&self, out: &mut W, limit: u64) -> IngestifyResult<IngestSummary> {
        let mut summary = IngestSummary {
            limit,
            ..IngestSummary::default()
        };

        let walker =
            Walker::new(&self.settings.directory, &self.ignore).skip(&self.settings.output_file);
        for visit in walker {
            let visit = match visit {
                Ok(visit) => visit,
                Err(e) => {
                    warn!("{}", e);
                    continue;
                }
            };

            match &visit {
                Visit::Ignored { path, .. } => {
                    println!("{} \"{}\"", Action::Ignoring, path.display());
                    summary.entries_ignored += 1;
                }
                Visit::File { path, .. } => {
                    let display = path.display().to_string();
                    let mut input = match File::open(path) {
                        Ok(input) => input,
                        Err(e) => {
                            warn!("Could not open file {}: {}", display, e);
                            continue;
                        }
                    };
                    println!("{} \"{}\"", Action::Writing, display);
                    summary.bytes_written =
                        append_file(out, &display, &mut input, summary.bytes_written, limit)?;
                    summary.files_written += 1;
                    debug!(
                        "Appended '{}', {} content bytes so far",
                        visit.relative(),
                        summary.bytes_written
                    );
                }
            }
        }

        Ok(summary)
    }
}
