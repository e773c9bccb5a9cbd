//! Stderr tracing for the `sambat` binary.
//!
//! Stdout carries command results only, so diagnostics never mix into
//! piped output. `RUST_LOG` replaces the `-v` directive when set.

use tracing_subscriber::EnvFilter;

const TARGETS: [&str; 3] = ["sambat", "sambat_calendar", "sambat_format"];

/// Installs the global subscriber for `-v` repeated `verbosity` times.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive(verbosity)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity > 1)
        .init();
}

/// Builds the filter directive: warnings by default, one level per `-v`.
fn directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    TARGETS.map(|target| format!("{target}={level}")).join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_by_default() {
        assert_eq!(
            directive(0),
            "sambat=warn,sambat_calendar=warn,sambat_format=warn"
        );
    }

    #[test]
    fn each_flag_raises_level() {
        assert!(directive(1).starts_with("sambat=info,"));
        assert!(directive(2).ends_with("sambat_format=debug"));
        assert_eq!(directive(3), directive(9));
        assert!(directive(3).contains("sambat_calendar=trace"));
    }

    #[test]
    fn directive_parses() {
        for verbosity in 0..4 {
            assert!(EnvFilter::try_new(directive(verbosity)).is_ok());
        }
    }
}
