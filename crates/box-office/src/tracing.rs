/// Initializes structured logging for the application.
///
/// Filtering is controlled through `RUST_LOG`:
/// - `RUST_LOG=info` - lifecycle events and completed purchases
/// - `RUST_LOG=debug` - every request the box office processes
/// - `RUST_LOG=box_office=debug` - debug only for this crate
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
