//! Command-line interface and the end-to-end mosaic run

use crate::catalog::{SelectionPolicy, WindowMiss};
use crate::io::configuration::USAGE_MESSAGE;
use crate::io::error::{ErrorKind, MosaicError, Result};
use crate::io::image::{load_image, save_png};
use crate::io::progress::ProgressManager;
use crate::mosaic::compose::compose_mosaic_with_progress;
use crate::mosaic::sampling::{SamplingPolicy, Shortage, build_catalog_with_progress};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tilemosaic")]
#[command(
    author,
    version,
    about = "Build a photo mosaic from a directory of tile images"
)]
/// Command-line arguments for the mosaic tool
pub struct Cli {
    /// Source image to turn into a mosaic
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory of tile images
    #[arg(value_name = "TILES_DIR")]
    pub tiles_dir: PathBuf,

    /// Maximum intensity difference between a pixel and its tile
    #[arg(value_name = "TOLERANCE", allow_negative_numbers = true)]
    pub tolerance: f64,

    /// Path of the PNG mosaic to write
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Fail instead of warning when the tiles directory is shorter than the sampling cap
    #[arg(short = 's', long)]
    pub strict_sampling: bool,

    /// Strategy once every in-tolerance tile near a match is overused
    #[arg(short = 'w', long, value_enum, default_value_t = WindowMiss::KeepNarrowing)]
    pub window_miss: WindowMiss,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Sampling policy selected by the flags
    pub fn sampling_policy(&self) -> SamplingPolicy {
        SamplingPolicy {
            shortage: if self.strict_sampling {
                Shortage::Fail
            } else {
                Shortage::Clamp
            },
            ..SamplingPolicy::default()
        }
    }

    /// Selection policy selected by the flags
    pub fn selection_policy(&self) -> SelectionPolicy {
        SelectionPolicy {
            on_window_miss: self.window_miss,
            ..SelectionPolicy::default()
        }
    }
}

/// Runs load, catalog, compose and save for one set of arguments
pub struct MosaicRunner {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl MosaicRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        let progress_manager = ProgressManager::new(cli.should_show_progress());
        Self {
            cli,
            progress_manager,
        }
    }

    /// Build the mosaic and write it, returning the output path
    ///
    /// # Errors
    ///
    /// Returns the first error of loading, catalog construction, composition
    /// or export; nothing is written on failure
    pub fn run(&self) -> Result<PathBuf> {
        let source = load_image(&self.cli.input)?;
        tracing::debug!(
            input = %self.cli.input.display(),
            width = source.width(),
            height = source.height(),
            "Source image loaded"
        );

        let catalog = build_catalog_with_progress(
            &self.cli.tiles_dir,
            &source,
            &self.cli.sampling_policy(),
            &self.progress_manager.loading_bar(0),
        )?;
        let mut catalog = catalog.with_policy(self.cli.selection_policy());

        let mosaic = compose_mosaic_with_progress(
            &source,
            &mut catalog,
            self.cli.tolerance,
            &self.progress_manager.compose_bar(source.width()),
        )?;

        save_png(mosaic.image(), &self.cli.output)?;
        Ok(self.cli.output.clone())
    }
}

/// One-line description of an error category
pub const fn failure_headline(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::InvalidImage => "An image could not be used",
        ErrorKind::InvalidArgument => "An argument was rejected",
        ErrorKind::IndexOutOfRange => "Not enough tiles or a tile is too small",
        ErrorKind::Io => "Reading or writing a file failed",
    }
}

/// Usage text, headline and detail printed for a failed run
pub fn failure_report(error: &MosaicError) -> String {
    format!(
        "{USAGE_MESSAGE}\n- Problem: {}: {error} -",
        failure_headline(error.kind())
    )
}
