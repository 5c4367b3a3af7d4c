//! Cursor over a fixed, non-empty gallery with circular wraparound.

use thiserror::Error;
use tracing::debug;

/// Raised when a navigator cannot be built from the supplied items.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigatorError {
    #[error("invalid gallery configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

impl NavigatorError {
    #[must_use]
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// Holds the gallery items and the index of the one on display.
///
/// The item list is fixed at construction and never empty, so `current`,
/// `advance` and `retreat` cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryNavigator<T> {
    items: Vec<T>,
    current_index: usize,
}

impl<T> GalleryNavigator<T> {
    /// Builds a navigator positioned on the first item.
    pub fn new(items: Vec<T>) -> Result<Self, NavigatorError> {
        Self::with_initial_index(items, 0)
    }

    /// Builds a navigator positioned on `initial_index`.
    ///
    /// Fails when `items` is empty or the index is past the end.
    pub fn with_initial_index(items: Vec<T>, initial_index: usize) -> Result<Self, NavigatorError> {
        if items.is_empty() {
            return Err(NavigatorError::invalid_configuration(
                "gallery must contain at least one item",
            ));
        }
        if initial_index >= items.len() {
            return Err(NavigatorError::invalid_configuration(format!(
                "initial index {} is out of range for {} items",
                initial_index,
                items.len()
            )));
        }
        Ok(Self {
            items,
            current_index: initial_index,
        })
    }

    pub fn current(&self) -> &T {
        &self.items[self.current_index]
    }

    /// Moves to the next item, wrapping from the last to the first.
    pub fn advance(&mut self) -> &T {
        self.current_index = (self.current_index + 1) % self.items.len();
        debug!(index = self.current_index, "advanced");
        self.current()
    }

    /// Moves to the previous item, wrapping from the first to the last.
    pub fn retreat(&mut self) -> &T {
        let len = self.items.len();
        self.current_index = (self.current_index + len - 1) % len;
        debug!(index = self.current_index, "retreated");
        self.current()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    /// One-based "n / total" label for the cursor.
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.current_index + 1, self.items.len())
    }

    /// Indices within `range` steps of the cursor in either direction,
    /// nearest first, starting with the cursor itself. Wraps at both ends
    /// and never repeats an index.
    pub fn neighbours(&self, range: usize) -> Vec<usize> {
        let len = self.items.len();
        let mut indices = vec![self.current_index];

        for step in 1..=range {
            if indices.len() == len {
                break;
            }
            let step = step % len;
            let forward = (self.current_index + step) % len;
            let backward = (self.current_index + len - step) % len;
            for index in [forward, backward] {
                if !indices.contains(&index) {
                    indices.push(index);
                }
            }
        }

        indices
    }
}
