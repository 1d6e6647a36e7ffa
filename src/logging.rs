use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the stderr logger used by every demo binary.
///
/// `RUST_LOG` wins when set; otherwise the crate logs at `info`, or `debug`
/// when `verbose` is on. Calling this twice keeps the first subscriber.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("design_patterns=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("design_patterns=info"))
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

/// `-v`/`--verbose` on the command line, or `PATTERNS_VERBOSE` set to `1`/`true`.
pub fn verbose_requested() -> bool {
    let flag = std::env::args().skip(1).any(|arg| arg == "-v" || arg == "--verbose");
    let env = std::env::var("PATTERNS_VERBOSE")
        .map(|value| matches!(value.as_str(), "1" | "true"))
        .unwrap_or(false);
    flag || env
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init(false);
        init(true);
        tracing::debug!("still alive after double init");
    }
}
