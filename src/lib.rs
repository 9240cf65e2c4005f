pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod matcher;
pub mod pipeline;
pub mod probe;
pub mod store;

/// Install the fmt subscriber, honouring `RUST_LOG` and defaulting to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();
}
