//! ingestify's main application entry point.
//! Parses arguments, resolves settings and runs the ingestion.

use ingestify::{
    cli::{get_args, Args},
    config::Settings,
    error::{default_error_handler, IngestifyResult},
    logger::init_logger,
    processor::Processor,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves settings from arguments and the optional settings file
/// 2. Loads the ignore list once for the traversal
/// 3. Walks the input directory, writing every kept file to the output file
fn run(args: Args) -> IngestifyResult<()> {
    let settings = Settings::resolve(&args)?;
    log::debug!("Resolved settings: {:?}", settings);

    let processor = Processor::new(&settings);
    let summary = processor.run()?;

    log::info!(
        "Wrote {} file(s), {} of {} allowed bytes, to {} ({} entries ignored)",
        summary.files_written,
        summary.bytes_written,
        summary.limit,
        settings.output_file.display(),
        summary.entries_ignored
    );
    Ok(())
}
