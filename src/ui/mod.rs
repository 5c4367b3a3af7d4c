pub mod gallery_navigator;
pub mod viewer;
