use anyhow::Context;
use const_views::{increment_all, print_all, Span, SpanMut};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging() {
    // RUST_LOG controls verbosity; warn when unset. Logs go to stderr so stdout stays clean.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let mut numbers = [10, 20, 30];
    debug!(?numbers, "before increment");

    increment_all(SpanMut::new(&mut numbers));
    debug!(?numbers, "after increment");

    print_all(Span::new(&numbers)).context("failed to write numbers to stdout")?;
    Ok(())
}
