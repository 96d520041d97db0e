pub mod entities;
pub mod error;
pub mod hashers;
pub mod manager;
pub mod phone;

pub use error::{Result, UserError};

// Re-export tracing for use in this crate
pub use tracing;

// Initialize tracing if not already initialized
#[cfg(not(test))]
pub fn init_tracing() {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    // The log level is controlled via the RUST_LOG environment variable,
    // falling back to info for this workspace's crates
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("phoneauth=info,model=info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .init();
}
