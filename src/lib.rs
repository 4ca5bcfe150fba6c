pub mod app;
mod config;
pub mod crop;
pub mod error;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod ui;

pub use error::{AppError, AppResult};

/// Entrypoint used by the binary and higher-level integrations.
pub fn run() -> AppResult<()> {
    logging::init();
    tracing::info!("starting cropline");

    let mut app = app::App::new();
    app.start()?;

    tracing::info!("shutdown complete");
    Ok(())
}
