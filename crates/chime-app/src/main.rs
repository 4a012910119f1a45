mod app;
mod cli;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn main() {
    let args = cli::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or("chime=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "chime=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Chime v{} starting...", env!("CARGO_PKG_VERSION"));

    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app::ChimeApp::new(app::AppOptions { devtools: args.dev });

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
