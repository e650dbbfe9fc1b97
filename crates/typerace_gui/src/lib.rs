//! Desktop typing-practice window.
//!
//! Exposes `run` so the workspace root can launch the window with a config
//! it resolved itself (CLI flags on top of the environment).

mod app;

use app::TypeRaceApp;
use eframe::egui;
use tracing_subscriber::EnvFilter;
use typerace_core::Config;

const DEFAULT_LOG_FILTER: &str = "typerace=warn,typerace_core=info,typerace_gui=info";

/// Install the global tracing subscriber.
///
/// `RUST_LOG` overrides the default filter. Calling this twice is a no-op.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init();
}

/// Open the typing window for `config`.
///
/// # Returns
/// The result of `eframe::run_native`.
///
/// # Errors
/// Propagates any `eframe` initialization or runtime error.
pub fn run(config: Config) -> eframe::Result<()> {
    let app = TypeRaceApp::new(&config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(app::DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(app::MIN_WINDOW_SIZE)
            .with_title("Type Speed Race"),
        ..Default::default()
    };

    eframe::run_native("typerace", options, Box::new(|_cc| Ok(Box::new(app))))
}

/// Load configuration from the environment and open the typing window.
///
/// # Errors
/// Configuration failures surface as `eframe::Error::AppCreation`.
pub fn run_from_env() -> eframe::Result<()> {
    let config = Config::from_env().map_err(|err| eframe::Error::AppCreation(Box::new(err)))?;
    run(config)
}
