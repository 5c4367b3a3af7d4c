use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::cli::Cli;
use crate::config::config::*;
use crate::core::gallery::{builtin_asset_dir, Gallery, GalleryError};
use crate::ui::gallery_navigator::NavigatorError;
use crate::ui::viewer::ArtSpaceApp;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to initialise logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    #[error(transparent)]
    Gallery(#[from] GalleryError),

    #[error(transparent)]
    Navigator(#[from] NavigatorError),

    #[error("failed to start the window: {0}")]
    Window(#[from] eframe::Error),
}

fn init_logging(cli: &Cli) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.to_string()));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()?;
    Ok(())
}

fn load_gallery(cli: &Cli) -> Result<Gallery, GalleryError> {
    match &cli.gallery {
        Some(path) => Gallery::load(path),
        None => {
            let asset_dir = builtin_asset_dir();
            if !asset_dir.is_dir() {
                warn!(
                    path = %asset_dir.display(),
                    "Built-in artwork images not found; pass --gallery to use a manifest"
                );
            }
            Ok(Gallery::builtin())
        }
    }
}

fn launch(cli: Cli) -> Result<(), AppError> {
    info!(version = APP_VERSION, "Starting {}", APP_NAME);

    let navigation = load_gallery(&cli)?.into_navigator(cli.start)?;
    info!(
        artworks = navigation.len(),
        start = navigation.current_index(),
        "Gallery ready"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(WINDOW_MIN_SIZE),
        ..Default::default()
    };

    let preload_range = cli.preload_range;
    let cache_size = cli.cache_size;
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            Ok(Box::new(ArtSpaceApp::new(&cc.egui_ctx, navigation, preload_range, cache_size)))
        }),
    )?;
    Ok(())
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match launch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Art Space stopped");
            ExitCode::FAILURE
        }
    }
}
