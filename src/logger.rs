/// Initializes the global logger.
///
/// `verbose` lowers the threshold to `Debug`; a `RUST_LOG` setting, when
/// present, takes precedence over both defaults.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_target(false)
        .parse_default_env()
        .init();
}
