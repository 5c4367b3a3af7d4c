use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Arc, Mutex, PoisonError};
use std::thread;

use egui::{ColorImage, Context, TextureHandle};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::core::image_cache::ImageCache;
use crate::core::image_loader::{ImageLoader, LoadError};

type LoadResult = (PathBuf, Result<ColorImage, LoadError>);
type Notify = Arc<dyn Fn() + Send + Sync>;

/// Decodes artwork images off the UI thread.
///
/// Each path is decoded at most once at a time; paths that failed are
/// remembered and not requested again.
pub struct PreloadManager {
    image_receiver: mpsc::Receiver<LoadResult>,
    image_sender: mpsc::Sender<LoadResult>,
    loading_paths: Arc<Mutex<HashSet<PathBuf>>>,
    failed_paths: HashSet<PathBuf>,
    loader: Arc<dyn ImageLoader>,
    notify: Option<Notify>,
}

impl PreloadManager {
    pub fn new(loader: Arc<dyn ImageLoader>) -> Self {
        let (sender, receiver) = mpsc::channel();

        Self {
            image_receiver: receiver,
            image_sender: sender,
            loading_paths: Arc::new(Mutex::new(HashSet::new())),
            failed_paths: HashSet::new(),
            loader,
            notify: None,
        }
    }

    /// Calls `notify` from the worker after every result is sent, so the UI
    /// wakes up to drain it.
    pub fn with_notify(mut self, notify: impl Fn() + Send + Sync + 'static) -> Self {
        self.notify = Some(Arc::new(notify));
        self
    }

    /// Queues `paths` for decoding, skipping any already in flight or known to fail.
    pub fn preload(&self, paths: impl IntoIterator<Item = PathBuf>) {
        let paths_to_load: Vec<PathBuf> = {
            let mut loading = self
                .loading_paths
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            paths
                .into_iter()
                .filter(|path| !self.failed_paths.contains(path))
                .filter(|path| loading.insert(path.clone()))
                .collect()
        };

        if !paths_to_load.is_empty() {
            debug!(count = paths_to_load.len(), "Preloading artwork");
            self.spawn_loading_thread(paths_to_load);
        }
    }

    fn spawn_loading_thread(&self, paths: Vec<PathBuf>) {
        let sender = self.image_sender.clone();
        let loading_paths = Arc::clone(&self.loading_paths);
        let loader = Arc::clone(&self.loader);
        let notify = self.notify.clone();

        thread::spawn(move || {
            paths
                .into_par_iter()
                .map(|path| {
                    let result = loader.load(&path);
                    loading_paths
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .remove(&path);
                    (path, result)
                })
                .for_each_with(sender, |sender, loaded| {
                    // receiver gone means the viewer was closed
                    if sender.send(loaded).is_ok() {
                        if let Some(notify) = &notify {
                            notify();
                        }
                    }
                });
        });
    }

    /// Takes every finished decode, recording failures and returning the successes.
    pub fn drain_loaded(&mut self) -> Vec<(PathBuf, ColorImage)> {
        let mut loaded = Vec::new();
        while let Ok((path, result)) = self.image_receiver.try_recv() {
            match result {
                Ok(color_image) => loaded.push((path, color_image)),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to load artwork");
                    self.failed_paths.insert(path);
                }
            }
        }
        loaded
    }

    /// Uploads finished decodes as textures. Returns true if anything changed.
    pub fn process_loaded_images(
        &mut self,
        ctx: &Context,
        image_cache: &mut ImageCache<TextureHandle>,
    ) -> bool {
        let failures_before = self.failed_paths.len();
        let loaded = self.drain_loaded();
        let changed = !loaded.is_empty() || self.failed_paths.len() != failures_before;

        for (path, color_image) in loaded {
            let texture = ctx.load_texture(
                format!("artwork_{}", path.display()),
                color_image,
                egui::TextureOptions::LINEAR,
            );
            image_cache.insert(path, texture);
        }
        changed
    }

    pub fn has_failed(&self, path: &Path) -> bool {
        self.failed_paths.contains(path)
    }

    pub fn is_loading(&self, path: &Path) -> bool {
        self.loading_paths
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(path)
    }
}
