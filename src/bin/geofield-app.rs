//! GeoField desktop client entry point.
//!
//! Boots the egui application shell: login gate, sidebar navigation, data
//! entry forms, the compilation sheet and CSV/text exports.
//!
//! Logs are written to the platform data directory (e.g.
//! `~/.local/share/geofield/logs/` on Linux) with a daily-rolling file;
//! when that directory cannot be created, logging falls back to stderr.
//! `RUST_LOG` overrides the filter either way.

use eframe::egui;
use tracing_appender::non_blocking::WorkerGuard;

use geofield::config::{self, AppConfig};
use geofield::ui::GeoFieldApp;

/// Initialize tracing with a rolling file appender.
///
/// Returns the appender guard; dropping it stops the background log
/// writer, so `main` holds it for the program's lifetime.
fn init_logging() -> Option<WorkerGuard> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "geofield=info".to_string()),
    );

    let log_dir = config::log_dir();
    let log_dir = match log_dir {
        Some(dir) => match std::fs::create_dir_all(&dir) {
            Ok(()) => Some(dir),
            Err(e) => {
                eprintln!("Failed to create log directory {:?}: {}", dir, e);
                None
            }
        },
        None => None,
    };

    match log_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(&dir, "geofield.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            tracing_subscriber::fmt()
                .with_writer(non_blocking)
                .with_env_filter(filter)
                .with_ansi(false) // No ANSI colors in log files
                .init();
            tracing::info!("Logging initialized to {:?}", dir);
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
            None
        }
    }
}

fn main() -> eframe::Result<()> {
    let _log_guard = init_logging();

    tracing::info!("GeoField v{} starting", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load();

    // Tokio runtime for async work (the AI summary call). Owned by main so
    // it outlives the application loop.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime");
    let handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "GeoField",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(GeoFieldApp::new(cc, handle, config)))
        }),
    )
}
