use tracing_subscriber::EnvFilter;

/// Crate targets that should receive log output: the `chinese_days` library
/// (conversion, solar term and festival spans) and this binary, whose target
/// is the same crate name.
const CRATE_TARGETS: &[&str] = &["chinese_days"];

/// Filter directives for the crate targets at a CLI verbosity level.
///
/// Mapping:
/// - 0 (none) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
fn default_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize tracing on stderr, keeping stdout for JSON results.
///
/// `RUST_LOG` env var overrides the CLI flag if set.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_per_verbosity() {
        for (verbosity, std) in [
            (0, "chinese_days=warn"),
            (1, "chinese_days=info"),
            (2, "chinese_days=debug"),
            (3, "chinese_days=trace"),
            (9, "chinese_days=trace"),
        ] {
            assert_eq!(std, default_filter(verbosity));
        }
    }
}
