use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Least-recently-used store for decoded artwork, keyed by image path.
pub struct ImageCache<T> {
    textures: HashMap<PathBuf, T>,
    max_cache_size: usize,
    access_order: Vec<PathBuf>,
}

impl<T> ImageCache<T> {
    pub fn new(max_size: usize) -> Self {
        Self {
            textures: HashMap::new(),
            max_cache_size: max_size.max(1),
            access_order: Vec::new(),
        }
    }

    pub fn get(&mut self, path: &Path) -> Option<&T> {
        if !self.textures.contains_key(path) {
            return None;
        }
        self.touch(path);
        self.textures.get(path)
    }

    pub fn insert(&mut self, path: PathBuf, texture: T) {
        if self.textures.contains_key(&path) {
            self.touch(&path);
            self.textures.insert(path, texture);
            return;
        }

        while self.textures.len() >= self.max_cache_size && !self.access_order.is_empty() {
            let oldest = self.access_order.remove(0);
            self.textures.remove(&oldest);
        }

        self.textures.insert(path.clone(), texture);
        self.access_order.push(path);
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.textures.contains_key(path)
    }

    fn touch(&mut self, path: &Path) {
        if let Some(pos) = self.access_order.iter().position(|p| p == path) {
            let path = self.access_order.remove(pos);
            self.access_order.push(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_least_recently_used() {
        let mut cache = ImageCache::new(2);
        cache.insert(PathBuf::from("a"), 1);
        cache.insert(PathBuf::from("b"), 2);

        // reading "a" makes "b" the oldest
        assert_eq!(cache.get(Path::new("a")), Some(&1));
        cache.insert(PathBuf::from("c"), 3);

        assert!(cache.contains(Path::new("a")));
        assert!(!cache.contains(Path::new("b")));
        assert!(cache.contains(Path::new("c")));
        assert_eq!(cache.textures.len(), 2);
    }

    #[test]
    fn reinserting_replaces_without_evicting() {
        let mut cache = ImageCache::new(2);
        cache.insert(PathBuf::from("a"), 1);
        cache.insert(PathBuf::from("b"), 2);
        cache.insert(PathBuf::from("a"), 10);

        assert_eq!(cache.textures.len(), 2);
        assert_eq!(cache.get(Path::new("a")), Some(&10));
        assert_eq!(cache.get(Path::new("b")), Some(&2));
    }

    #[test]
    fn zero_capacity_still_holds_one_entry() {
        let mut cache = ImageCache::new(0);
        cache.insert(PathBuf::from("a"), 1);
        cache.insert(PathBuf::from("b"), 2);
        assert_eq!(cache.textures.len(), 1);
        assert!(cache.contains(Path::new("b")));
    }

    #[test]
    fn missing_entry_is_none() {
        let mut cache: ImageCache<u8> = ImageCache::new(1);
        assert!(cache.get(Path::new("nowhere")).is_none());
    }
}
