use std::path::PathBuf;
use std::sync::Arc;

use eframe::egui;
use egui::{RichText, TextureHandle};
use tracing::debug;

use crate::config::config::*;
use crate::core::artwork::Artwork;
use crate::core::image_cache::ImageCache;
use crate::core::image_loader::RasterImageLoader;
use crate::core::preload_manager::PreloadManager;
use crate::i18n::en::*;
use crate::ui::gallery_navigator::GalleryNavigator;

/// Text shown for the artwork on display. Every field comes from the
/// navigator's current item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkLabels {
    pub title: String,
    pub caption: String,
    pub position: String,
}

impl ArtworkLabels {
    pub fn for_current(navigation: &GalleryNavigator<Artwork>) -> Self {
        let artwork = navigation.current();
        Self {
            title: artwork.title().to_owned(),
            caption: artwork.caption(),
            position: navigation.position_label(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavAction {
    Previous,
    Next,
}

/// First navigation key pressed this frame, if any.
fn nav_action(events: &[egui::Event]) -> Option<NavAction> {
    events.iter().find_map(|event| match event {
        egui::Event::Key {
            key: egui::Key::ArrowRight,
            pressed: true,
            ..
        } => Some(NavAction::Next),
        egui::Event::Key {
            key: egui::Key::ArrowLeft,
            pressed: true,
            ..
        } => Some(NavAction::Previous),
        _ => None,
    })
}

/// The cache must hold the whole preload window, otherwise a batch of
/// neighbours can evict the artwork on display.
fn effective_cache_size(cache_size: usize, preload_range: usize) -> usize {
    cache_size.max(preload_range.saturating_mul(2).saturating_add(1))
}

pub struct ArtSpaceApp {
    navigation: GalleryNavigator<Artwork>,
    image_cache: ImageCache<TextureHandle>,
    preload_manager: PreloadManager,
    preload_range: usize,
}

impl ArtSpaceApp {
    pub fn new(
        ctx: &egui::Context,
        navigation: GalleryNavigator<Artwork>,
        preload_range: usize,
        cache_size: usize,
    ) -> Self {
        let repaint_ctx = ctx.clone();
        let preload_manager = PreloadManager::new(Arc::new(RasterImageLoader))
            .with_notify(move || repaint_ctx.request_repaint());

        let capacity = effective_cache_size(cache_size, preload_range);
        if capacity != cache_size {
            debug!(requested = cache_size, capacity, "Raised texture cache size to fit preload range");
        }

        let app = Self {
            navigation,
            image_cache: ImageCache::new(capacity),
            preload_manager,
            preload_range,
        };
        app.preload_images();
        app
    }

    fn next_artwork(&mut self) {
        self.navigation.advance();
        self.preload_images();
    }

    fn previous_artwork(&mut self) {
        self.navigation.retreat();
        self.preload_images();
    }

    fn preload_images(&self) {
        let items = self.navigation.items();
        let paths: Vec<PathBuf> = self
            .navigation
            .neighbours(self.preload_range)
            .into_iter()
            .map(|index| items[index].image().to_path_buf())
            .filter(|path| !self.image_cache.contains(path))
            .collect();
        self.preload_manager.preload(paths);
    }

    /// Requests the artwork on display again if it is neither cached,
    /// in flight nor known to fail.
    fn ensure_current_requested(&self) {
        let path = self.navigation.current().image();
        if !self.image_cache.contains(path)
            && !self.preload_manager.is_loading(path)
            && !self.preload_manager.has_failed(path)
        {
            self.preload_manager.preload([path.to_path_buf()]);
        }
    }

    fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        let action = ctx.input(|i| nav_action(&i.events));

        match action {
            Some(NavAction::Next) => self.next_artwork(),
            Some(NavAction::Previous) => self.previous_artwork(),
            None => {}
        }
    }

    fn show_main_content(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    self.show_artwork_frame(ui);
                    ui.add_space(16.0);
                    let labels = ArtworkLabels::for_current(&self.navigation);
                    Self::show_artwork_title(ui, &labels);
                    ui.add_space(24.0);
                    self.show_navigation_controls(ui, &labels);
                });
            });
        });
    }

    fn show_artwork_frame(&mut self, ui: &mut egui::Ui) {
        let width = (ui.available_width() - 2.0 * ARTWORK_FRAME_PADDING).max(1.0);
        let frame_size = egui::vec2(width, width / ARTWORK_FRAME_ASPECT);

        let path = self.navigation.current().image().to_path_buf();
        let failed = self.preload_manager.has_failed(&path);
        let texture = self.image_cache.get(&path).cloned();

        egui::Frame::canvas(ui.style())
            .inner_margin(ARTWORK_FRAME_PADDING)
            .show(ui, |ui| {
                let (rect, _) = ui.allocate_exact_size(frame_size, egui::Sense::hover());
                match texture {
                    Some(texture) => Self::render_image(ui, rect, &texture),
                    None => {
                        let text = if failed { TEXT_IMG_UNAVAILABLE } else { TEXT_LOADINGIMG };
                        ui.painter().text(
                            rect.center(),
                            egui::Align2::CENTER_CENTER,
                            text,
                            egui::FontId::proportional(CAPTION_FONT_SIZE),
                            ui.visuals().weak_text_color(),
                        );
                    }
                }
            });
    }

    fn render_image(ui: &mut egui::Ui, rect: egui::Rect, texture: &TextureHandle) {
        let image_size = texture.size_vec2();
        let scale = (rect.width() / image_size.x).min(rect.height() / image_size.y);
        let scaled = egui::Rect::from_center_size(rect.center(), image_size * scale);

        egui::Image::from_texture(texture)
            .fit_to_exact_size(scaled.size())
            .paint_at(ui, scaled);
    }

    fn show_artwork_title(ui: &mut egui::Ui, labels: &ArtworkLabels) {
        ui.label(RichText::new(&labels.title).size(TITLE_FONT_SIZE));
        ui.label(RichText::new(&labels.caption).size(CAPTION_FONT_SIZE).strong());
    }

    fn show_navigation_controls(&mut self, ui: &mut egui::Ui, labels: &ArtworkLabels) {
        ui.horizontal(|ui| {
            if ui.button(BTN_PREV).clicked() {
                self.previous_artwork();
            }
            if ui.button(BTN_NEXT).clicked() {
                self.next_artwork();
            }
        });
        ui.label(RichText::new(&labels.position).weak());
    }
}

impl eframe::App for ArtSpaceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_input(ctx);

        if self
            .preload_manager
            .process_loaded_images(ctx, &mut self.image_cache)
        {
            ctx.request_repaint();
        }
        self.ensure_current_requested();

        let current = self.navigation.current().image();
        if self.preload_manager.is_loading(current) {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }

        self.show_main_content(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gallery::Gallery;
    use std::time::{Duration, Instant};
    use tempfile::tempdir;

    fn key(key: egui::Key, pressed: bool) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn arrow_keys_map_to_navigation() {
        assert_eq!(nav_action(&[key(egui::Key::ArrowRight, true)]), Some(NavAction::Next));
        assert_eq!(nav_action(&[key(egui::Key::ArrowLeft, true)]), Some(NavAction::Previous));
        assert_eq!(nav_action(&[key(egui::Key::ArrowLeft, false)]), None);
        assert_eq!(nav_action(&[key(egui::Key::Space, true)]), None);
        assert_eq!(nav_action(&[]), None);
        assert_eq!(
            nav_action(&[key(egui::Key::A, true), key(egui::Key::ArrowLeft, true)]),
            Some(NavAction::Previous)
        );
    }

    #[test]
    fn cache_holds_the_whole_preload_window() {
        assert_eq!(effective_cache_size(1, 1), 3);
        assert_eq!(effective_cache_size(8, 1), 8);
        assert_eq!(effective_cache_size(1, 0), 1);
        assert_eq!(effective_cache_size(2, usize::MAX), usize::MAX);
    }

    #[test]
    fn current_artwork_reaches_the_cache_with_small_cache() {
        let dir = tempdir().expect("failed to create temp dir");
        let artworks: Vec<Artwork> = ["a.png", "b.png", "c.png"]
            .iter()
            .map(|name| {
                let path = dir.path().join(name);
                image::RgbaImage::new(2, 2)
                    .save(&path)
                    .expect("failed to write png");
                Artwork::new(path, *name, "artist", "2000")
            })
            .collect();
        let navigation = GalleryNavigator::new(artworks).unwrap();

        let ctx = egui::Context::default();
        let mut app = ArtSpaceApp::new(&ctx, navigation, 1, 1);

        let current = app.navigation.current().image().to_path_buf();
        let deadline = Instant::now() + Duration::from_secs(5);
        while !app.image_cache.contains(&current) && Instant::now() < deadline {
            app.preload_manager
                .process_loaded_images(&ctx, &mut app.image_cache);
            app.ensure_current_requested();
            std::thread::sleep(Duration::from_millis(10));
        }

        assert!(app.image_cache.contains(&current));
        assert!(!app.preload_manager.has_failed(&current));
    }

    #[test]
    fn current_artwork_is_requested_again_after_eviction() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("only.png");
        image::RgbaImage::new(2, 2)
            .save(&path)
            .expect("failed to write png");
        let navigation = GalleryNavigator::new(vec![Artwork::new(&path, "Only", "artist", "2000")]).unwrap();

        let ctx = egui::Context::default();
        let mut app = ArtSpaceApp::new(&ctx, navigation, 0, 1);

        let deadline = Instant::now() + Duration::from_secs(5);
        while !app.image_cache.contains(&path) && Instant::now() < deadline {
            app.preload_manager
                .process_loaded_images(&ctx, &mut app.image_cache);
            std::thread::sleep(Duration::from_millis(10));
        }
        assert!(app.image_cache.contains(&path));

        // push the artwork out of the single-slot cache
        app.image_cache.insert(
            dir.path().join("other.png"),
            ctx.load_texture("other", egui::ColorImage::new([1, 1], egui::Color32::WHITE), egui::TextureOptions::LINEAR),
        );
        assert!(!app.image_cache.contains(&path));

        app.ensure_current_requested();
        let deadline = Instant::now() + Duration::from_secs(5);
        while !app.image_cache.contains(&path) && Instant::now() < deadline {
            app.preload_manager
                .process_loaded_images(&ctx, &mut app.image_cache);
            std::thread::sleep(Duration::from_millis(10));
        }
        assert!(app.image_cache.contains(&path));
    }

    #[test]
    fn labels_follow_the_cursor() {
        let mut navigation = Gallery::builtin().into_navigator(0).unwrap();

        let labels = ArtworkLabels::for_current(&navigation);
        assert_eq!(labels.title, MONA_LISA);
        assert_eq!(labels.caption, format!("{} ({})", MONA_LISA_ARTIST, MONA_LISA_YEAR));
        assert_eq!(labels.position, "1 / 5");

        navigation.advance();
        let labels = ArtworkLabels::for_current(&navigation);
        assert_eq!(labels.title, GIRL_EARRING);
        assert_eq!(labels.caption, format!("{} ({})", GIRL_EARRING_ARTIST, GIRL_EARRING_YEAR));

        navigation.retreat();
        navigation.retreat();
        let labels = ArtworkLabels::for_current(&navigation);
        assert_eq!(labels.title, FEEL_YOU);
        assert_eq!(labels.position, "5 / 5");
    }
}
