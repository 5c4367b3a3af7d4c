pub const APP_NAME: &str = "Art Space";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const WINDOW_SIZE: [f32; 2] = [480.0, 760.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [320.0, 480.0];

/// Built-in gallery images, relative to the executable's directory.
pub const BUILTIN_ASSET_DIR: &str = "assets/artworks";

// Largest decoded image; anything bigger is downscaled before upload.
pub const MAX_IMAGE_WIDTH: u32 = 1920;
pub const MAX_IMAGE_HEIGHT: u32 = 1080;

pub const DEFAULT_PRELOAD_RANGE: usize = 1;
pub const DEFAULT_CACHE_SIZE: usize = 8;

pub const ARTWORK_FRAME_ASPECT: f32 = 0.8;
pub const ARTWORK_FRAME_PADDING: f32 = 20.0;
pub const TITLE_FONT_SIZE: f32 = 32.0;
pub const CAPTION_FONT_SIZE: f32 = 16.0;
