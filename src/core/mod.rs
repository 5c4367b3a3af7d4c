pub mod artwork;
pub mod gallery;
pub mod image_cache;
pub mod image_format;
pub mod image_loader;
pub mod preload_manager;
