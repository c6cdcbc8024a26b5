//! Tracing subscriber setup for the command-line binary.
//!
//! Events go to stderr. `RUST_LOG` takes precedence over the `-v` count;
//! `log` records from the config loader are forwarded through the same
//! subscriber.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// `-v` count to the default level: none = warn, `-v` = info, `-vv` = debug,
/// anything more = trace.
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber. Calling it twice is harmless; the second
/// call leaves the first subscriber in place.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "secbudget={}",
            level_for_verbosity(verbosity).as_str().to_ascii_lowercase()
        ))
    });

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if installed.is_ok() {
        tracing::debug!(verbosity, "Tracing initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for_verbosity(0), Level::WARN);
        assert_eq!(level_for_verbosity(1), Level::INFO);
        assert_eq!(level_for_verbosity(2), Level::DEBUG);
        assert_eq!(level_for_verbosity(7), Level::TRACE);
    }

    #[test]
    fn repeated_init_does_not_panic() {
        init_tracing(0);
        init_tracing(3);
    }
}
