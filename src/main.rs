//! GRREENCraft
//!
//! Main entry point that delegates to the app module.

fn main() {
    // Frames go to stdout, so logs stay on stderr
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting GRREENCraft...");
    grreencraft::app::run_game();
}
