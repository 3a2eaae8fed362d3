//! Logging setup shared by binaries

/// Padded label for a log level.
fn level_label(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "ERROR",
        log::Level::Warn => "WARN ",
        log::Level::Info => "INFO ",
        log::Level::Debug => "DEBUG",
        log::Level::Trace => "TRACE",
    }
}

/// Initialize logging for a pipeline run.
///
/// Level defaults: `warn` when quiet, `debug` with --debug, `info` otherwise;
/// `RUST_LOG` still overrides.
pub fn init_logging(quiet: bool, debug: bool) {
    use std::io::Write;

    let default_level = if debug {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format(|buf, record| writeln!(buf, "[{}] {}", level_label(record.level()), record.args()))
        .init();
}
