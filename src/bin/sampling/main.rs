//! sampling - Terminal sampling theorem explorer
//!
//! Run with: cargo run --bin sampling
//!
//! Set RUST_LOG=debug and redirect stderr to a file to trace recomputes.

mod app;
mod ui;

use app::SamplingDemo;
use tracing_subscriber::EnvFilter;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    SamplingDemo::new().period(0.1).run()
}
