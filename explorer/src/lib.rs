use activities::ActivityCatalog;
use config::Config;
use errors::ExplorerError;
use geocoder::Gazetteer;
use logger::{Color, Logger};

pub mod activities;
pub mod config;
pub mod errors;
pub mod geo;
pub mod geocoder;
mod map;
mod plugins;
pub mod results;
pub mod state;
pub mod surface;
pub mod types;
pub mod viewport;
mod widgets;
mod windows;
use map::ExplorerApp;

const SESSION_NAME: &str = "venture-map";

/// Opens the explorer window and blocks until it is closed.
pub fn run(config: Config) -> Result<(), ExplorerError> {
    let logger = Logger::new(&config.log_dir, SESSION_NAME)?
        .with_console(true)
        .with_threshold(config.log_level);
    let gazetteer = load_gazetteer(&config, &logger);
    let catalog = ActivityCatalog::bundled().unwrap_or_else(|e| {
        let _ = logger.error(&format!("sample activities unreadable: {e}"));
        ActivityCatalog::default()
    });
    let _ = logger.debug(&format!("{} sample activities loaded", catalog.len()));

    eframe::run_native(
        "Venture Map",
        Default::default(),
        Box::new(move |cc| {
            Ok(Box::new(ExplorerApp::new(
                cc.egui_ctx.clone(),
                &config,
                gazetteer,
                catalog,
                logger,
            )))
        }),
    )?;
    Ok(())
}

/// The configured place list, or the bundled one if that cannot be read.
fn load_gazetteer(config: &Config, logger: &Logger) -> Gazetteer {
    if let Some(path) = &config.gazetteer_path {
        match Gazetteer::from_path(path) {
            Ok(gazetteer) => {
                let _ = logger.info(
                    &format!("loaded {} places from {}", gazetteer.len(), path.display()),
                    Color::Green,
                );
                return gazetteer;
            }
            Err(e) => {
                let _ = logger.warn(&format!("{e}; using the bundled places"));
            }
        }
    }

    Gazetteer::bundled().unwrap_or_else(|e| {
        let _ = logger.error(&format!("bundled places unreadable: {e}"));
        Gazetteer::default()
    })
}
