use tracing::Subscriber;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, EnvFilter};

/// Map a verbosity count to a log filter.
fn filter_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Creates a subscriber that writes log lines to stderr, so grid output on stdout stays clean.
pub fn create_tracing_subscriber(verbosity: u8) -> impl Subscriber {
    fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::new(filter_directive(verbosity)))
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::NONE)
        .without_time()
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(0), "warn");
        assert_eq!(filter_directive(1), "info");
        assert_eq!(filter_directive(2), "debug");
        assert_eq!(filter_directive(3), "trace");
        assert_eq!(filter_directive(9), "trace");
    }
}
