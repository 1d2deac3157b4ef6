//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`, so table and export output on
//! stdout stay clean. `RUST_LOG` takes precedence over the verbosity flag.

use tracing_subscriber::{fmt, EnvFilter};

/// Map the number of `-v` flags to a default filter directive
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global tracing subscriber
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "info");
        assert_eq!(default_directive(2), "debug");
        assert_eq!(default_directive(9), "trace");
    }

    #[test]
    fn test_init_twice() {
        init(0);
        init(2);
    }
}
