use std::path::{Path, PathBuf};

use serde::Deserialize;

/// One displayable artwork: where its image lives and the text shown under it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Artwork {
    image: PathBuf,
    title: String,
    artist: String,
    year: String,
}

impl Artwork {
    pub fn new(
        image: impl Into<PathBuf>,
        title: impl Into<String>,
        artist: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            image: image.into(),
            title: title.into(),
            artist: artist.into(),
            year: year.into(),
        }
    }

    pub fn image(&self) -> &Path {
        &self.image
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    /// "Artist (Year)" line shown under the title.
    pub fn caption(&self) -> String {
        format!("{} ({})", self.artist(), self.year())
    }

    pub(crate) fn resolve_image(mut self, base_dir: &Path) -> Self {
        if self.image.is_relative() {
            self.image = base_dir.join(&self.image);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_joins_artist_and_year() {
        let art = Artwork::new("a.png", "Ophelia", "John Everett Millais", "1852");
        assert_eq!(art.caption(), "John Everett Millais (1852)");
    }

    #[test]
    fn resolve_image_keeps_absolute_paths() {
        let absolute = std::env::temp_dir().join("a.png");
        let art = Artwork::new(absolute.clone(), "t", "a", "y").resolve_image(Path::new("base"));
        assert_eq!(art.image(), absolute.as_path());

        let art = Artwork::new("a.png", "t", "a", "y").resolve_image(Path::new("base"));
        assert_eq!(art.image(), Path::new("base").join("a.png").as_path());
    }
}
