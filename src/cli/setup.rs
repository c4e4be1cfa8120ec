//! Setup and initialization functions for CLI
//!
//! Logging is configured once at startup. `-v` flags pick the default level
//! and `RUST_LOG`, when set, takes precedence.

use log::LevelFilter;

/// Log level for a `-v` count
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. Calling it twice is harmless.
pub fn init_logging(verbosity: u8) {
    let result = env_logger::Builder::new()
        .filter_level(level_for_verbosity(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .try_init();

    if let Err(e) = result {
        eprintln!("Note: logger already configured: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_for_verbosity(0), LevelFilter::Warn);
        assert_eq!(level_for_verbosity(1), LevelFilter::Info);
        assert_eq!(level_for_verbosity(2), LevelFilter::Debug);
        assert_eq!(level_for_verbosity(9), LevelFilter::Trace);
    }
}
