//! Lightbox
//!
//! State of the full-screen viewer: the list being browsed and the position
//! in it. A closed viewer has no position.
//!
//! ```
//! use energiya::lightbox::Lightbox;
//!
//! let mut viewer = Lightbox::new();
//! viewer.open(vec!["a.jpg", "b.jpg", "c.jpg"], 0);
//! viewer.prev();
//! assert_eq!(viewer.index(), Some(2));
//! assert_eq!(viewer.counter().as_deref(), Some("3 / 3"));
//! ```

/// Viewer over an ordered list of items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lightbox<T> {
    items: Vec<T>,
    current: Option<usize>,
}

impl<T> Default for Lightbox<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current: None,
        }
    }
}

impl<T> Lightbox<T> {
    /// Closed viewer with nothing loaded
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `items` starting at `index`.
    ///
    /// An empty list or an out-of-range index leaves the viewer closed.
    pub fn open(&mut self, items: Vec<T>, index: usize) {
        if index < items.len() {
            self.items = items;
            self.current = Some(index);
        } else {
            tracing::debug!(index, len = items.len(), "Ignoring lightbox open out of range");
            self.close();
        }
    }

    /// Advance, wrapping from the last item to the first
    pub fn next(&mut self) {
        let len = self.items.len();
        if let Some(index) = self.current.filter(|_| len > 0) {
            self.current = Some((index + 1) % len);
        }
    }

    /// Step back, wrapping from the first item to the last
    pub fn prev(&mut self) {
        let len = self.items.len();
        if let Some(index) = self.current.filter(|_| len > 0) {
            self.current = Some((index + len - 1) % len);
        }
    }

    pub fn close(&mut self) {
        self.current = None;
        self.items.clear();
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn index(&self) -> Option<usize> {
        self.current
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Item currently on screen
    pub fn current_item(&self) -> Option<&T> {
        self.current.and_then(|i| self.items.get(i))
    }

    /// Position label shown under the media, e.g. `"2 / 5"`
    pub fn counter(&self) -> Option<String> {
        self.current
            .map(|i| format!("{} / {}", i + 1, self.items.len()))
    }
}
