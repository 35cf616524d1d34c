// Runs the built-in and self-registered Pandora tests.
// Usage: cargo run --bin pandora   (RUST_LOG=debug for per-test events)

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    pandora::cli::run();
}
