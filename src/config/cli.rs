//! Command-line configuration.

use std::fmt;
use std::path::PathBuf;

use clap::Parser;

use crate::config::config::{DEFAULT_CACHE_SIZE, DEFAULT_PRELOAD_RANGE};

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Browse a gallery of artworks one at a time.
#[derive(Debug, Clone, Parser)]
#[command(name = "art-space", version, about)]
pub struct Cli {
    /// TOML manifest listing the artworks. When omitted, the built-in gallery
    /// reads its images from `assets/artworks/` next to the executable.
    #[arg(long, value_name = "PATH")]
    pub gallery: Option<PathBuf>,

    /// Index of the artwork shown first.
    #[arg(long, value_name = "INDEX", default_value_t = 0)]
    pub start: usize,

    /// Log verbosity. `RUST_LOG` takes precedence when set.
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Number of artworks decoded ahead in each direction.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_PRELOAD_RANGE)]
    pub preload_range: usize,

    /// Maximum number of artwork textures kept in memory.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_CACHE_SIZE,
          value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub cache_size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_arguments() {
        let cli = Cli::try_parse_from(["art-space"]).unwrap();
        assert!(cli.gallery.is_none());
        assert_eq!(cli.start, 0);
        assert_eq!(cli.log_level, LogLevel::Info);
        assert_eq!(cli.preload_range, DEFAULT_PRELOAD_RANGE);
        assert_eq!(cli.cache_size, DEFAULT_CACHE_SIZE);
    }

    #[test]
    fn parses_gallery_and_start() {
        let cli = Cli::try_parse_from([
            "art-space",
            "--gallery",
            "museum.toml",
            "--start",
            "3",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.gallery, Some(PathBuf::from("museum.toml")));
        assert_eq!(cli.start, 3);
        assert_eq!(cli.log_level.to_string(), "debug");
    }

    #[test]
    fn rejects_negative_start() {
        assert!(Cli::try_parse_from(["art-space", "--start", "-1"]).is_err());
    }

    #[test]
    fn rejects_zero_cache_size() {
        assert!(Cli::try_parse_from(["art-space", "--cache-size", "0"]).is_err());
    }
}
