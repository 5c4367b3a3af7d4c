//! The artwork list: the built-in set or one read from a TOML manifest.
//!
//! A manifest is an array of `[[artwork]]` tables:
//!
//! ```toml
//! [[artwork]]
//! image = "monalisa.jpg"
//! title = "Mona Lisa"
//! artist = "Leonardo da Vinci"
//! year = "1503"
//! ```
//!
//! Relative image paths are resolved against the manifest's directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::config::config::BUILTIN_ASSET_DIR;
use crate::core::artwork::Artwork;
use crate::core::image_format::ImageFormat;
use crate::i18n::en::*;
use crate::ui::gallery_navigator::{GalleryNavigator, NavigatorError};

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("failed to read gallery manifest {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid gallery manifest: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("gallery manifest lists no artworks")]
    Empty,

    #[error("unsupported image format: {}", path.display())]
    UnsupportedImage { path: PathBuf },
}

/// `BUILTIN_ASSET_DIR` next to the executable, or under the working
/// directory when the executable path is unknown.
pub fn builtin_asset_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_default()
        .join(BUILTIN_ASSET_DIR)
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    artwork: Vec<Artwork>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    artworks: Vec<Artwork>,
}

impl Gallery {
    /// The five artworks the application ships with.
    pub fn builtin() -> Self {
        let base_dir = builtin_asset_dir();
        let base = base_dir.as_path();
        let artworks = vec![
            Artwork::new(base.join("monalisa.jpg"), MONA_LISA, MONA_LISA_ARTIST, MONA_LISA_YEAR),
            Artwork::new(
                base.join("girl_earring.jpg"),
                GIRL_EARRING,
                GIRL_EARRING_ARTIST,
                GIRL_EARRING_YEAR,
            ),
            Artwork::new(
                base.join("night_watch.jpg"),
                NIGHT_WATCH,
                NIGHT_WATCH_ARTIST,
                NIGHT_WATCH_YEAR,
            ),
            Artwork::new(base.join("ophelia.jpg"), OPHELIA, OPHELIA_ARTIST, OPHELIA_YEAR),
            Artwork::new(base.join("feel_you.jpg"), FEEL_YOU, FEEL_YOU_ARTIST, FEEL_YOU_YEAR),
        ];
        Self { artworks }
    }

    pub fn load(path: &Path) -> Result<Self, GalleryError> {
        let text = fs::read_to_string(path).map_err(|source| GalleryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        let gallery = Self::from_toml_str(&text, base_dir)?;
        info!(path = %path.display(), artworks = gallery.len(), "Loaded gallery manifest");
        Ok(gallery)
    }

    pub fn from_toml_str(text: &str, base_dir: &Path) -> Result<Self, GalleryError> {
        let manifest: Manifest = toml::from_str(text)?;
        if manifest.artwork.is_empty() {
            return Err(GalleryError::Empty);
        }

        let artworks = manifest
            .artwork
            .into_iter()
            .map(|art| {
                if ImageFormat::is_supported(art.image()) {
                    Ok(art.resolve_image(base_dir))
                } else {
                    Err(GalleryError::UnsupportedImage {
                        path: art.image().to_path_buf(),
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { artworks })
    }

    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    pub(crate) fn len(&self) -> usize {
        self.artworks().len()
    }

    pub fn into_navigator(self, initial_index: usize) -> Result<GalleryNavigator<Artwork>, NavigatorError> {
        GalleryNavigator::with_initial_index(self.artworks, initial_index)
    }
}
