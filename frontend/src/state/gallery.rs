//! Selected images and the carousel position.
//!
//! Invariants:
//! - `current_index < len` whenever the gallery is non-empty, 0 otherwise.
//! - Each entry owns its [`DisplayHandle`]; removing, clearing or dropping
//!   the gallery releases it exactly once.
//! - Batches encoded before a [`Gallery::clear`] never land after it.

use crate::error::{GalleryError, GalleryResult};
use crate::services::DisplayHandle;

/// One image picked by the user.
#[derive(Debug)]
pub struct SelectedImage {
    name: String,
    handle: DisplayHandle,
    payload: String,
}

impl SelectedImage {
    pub fn new(name: impl Into<String>, handle: DisplayHandle, payload: String) -> Self {
        Self {
            name: name.into(),
            handle,
            payload,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Object URL for `<img src>`.
    pub fn url(&self) -> &str {
        self.handle.url()
    }

    /// Encoded content sent with the listing.
    pub fn payload(&self) -> &str {
        &self.payload
    }
}

/// Carousel step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// What the preview renderer needs to draw the carousel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselView {
    pub current_url: Option<String>,
    pub total: usize,
    pub current_index: usize,
}

impl CarouselView {
    /// Arrows only make sense with something to cycle through.
    pub fn has_navigation(&self) -> bool {
        self.total > 1
    }
}

/// Ordered images plus the one currently shown.
#[derive(Debug, Default)]
pub struct Gallery {
    images: Vec<SelectedImage>,
    current_index: usize,
    generation: u64,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn images(&self) -> &[SelectedImage] {
        &self.images
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current(&self) -> Option<&SelectedImage> {
        self.images.get(self.current_index)
    }

    /// Append an encoded batch, keeping its order. The focus does not move.
    pub fn append(&mut self, batch: Vec<SelectedImage>) {
        self.images.extend(batch);
    }

    /// Bumped by every [`Gallery::clear`].
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Append a batch whose encoding started at `generation`.
    ///
    /// If the gallery was cleared since, the batch is dropped (releasing its
    /// handles) and `false` is returned.
    pub fn append_from(&mut self, generation: u64, batch: Vec<SelectedImage>) -> bool {
        if generation != self.generation {
            log::debug!("Discarding {} image(s) selected before reset", batch.len());
            return false;
        }
        self.append(batch);
        true
    }

    /// Remove the image at `index` and release its handle.
    pub fn remove(&mut self, index: usize) -> GalleryResult<()> {
        self.check_index(index)?;

        let removed = self.images.remove(index);
        log::info!("🗑️ Removed image '{}'", removed.name());
        drop(removed);

        if self.current_index >= self.images.len() {
            self.current_index = self.images.len().saturating_sub(1);
        }
        Ok(())
    }

    /// Step the carousel, wrapping at both ends. No-op with fewer than two images.
    pub fn advance(&mut self, direction: Direction) {
        let len = self.images.len();
        if len <= 1 {
            return;
        }
        self.current_index = match direction {
            Direction::Next => (self.current_index + 1) % len,
            Direction::Previous => (self.current_index + len - 1) % len,
        };
    }

    pub fn jump_to(&mut self, index: usize) -> GalleryResult<()> {
        self.check_index(index)?;
        self.current_index = index;
        Ok(())
    }

    /// Encoded payloads in gallery order.
    pub fn payloads(&self) -> Vec<String> {
        self.images.iter().map(|img| img.payload.clone()).collect()
    }

    /// Drop every image, releasing all handles.
    pub fn clear(&mut self) {
        self.images.clear();
        self.current_index = 0;
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn view(&self) -> CarouselView {
        CarouselView {
            current_url: self.current().map(|img| img.url().to_string()),
            total: self.images.len(),
            current_index: self.current_index,
        }
    }

    fn check_index(&self, index: usize) -> GalleryResult<()> {
        if index < self.images.len() {
            Ok(())
        } else {
            Err(GalleryError::IndexOutOfRange {
                index,
                len: self.images.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::HandleLedger;

    fn gallery_of(ledger: &HandleLedger, names: &[&str]) -> Gallery {
        let mut gallery = Gallery::new();
        gallery.append(names.iter().map(|n| ledger.image(n)).collect());
        gallery
    }

    fn names(gallery: &Gallery) -> Vec<&str> {
        gallery.images().iter().map(|img| img.name()).collect()
    }

    #[test]
    fn test_append_preserves_order_across_batches() {
        let ledger = HandleLedger::new();
        let mut gallery = gallery_of(&ledger, &["a", "b"]);
        gallery.append(vec![]);
        gallery.append(vec![ledger.image("c"), ledger.image("d"), ledger.image("e")]);

        assert_eq!(gallery.len(), 5);
        assert_eq!(names(&gallery), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_append_does_not_move_focus() {
        let ledger = HandleLedger::new();
        let mut gallery = gallery_of(&ledger, &["a", "b"]);
        gallery.jump_to(1).unwrap();
        gallery.append(vec![ledger.image("c")]);
        assert_eq!(gallery.current_index(), 1);
        assert_eq!(gallery.current().map(|i| i.name()), Some("b"));
    }

    #[test]
    fn test_remove_last_clamps_index() {
        let ledger = HandleLedger::new();
        let mut gallery = gallery_of(&ledger, &["a", "b", "c"]);
        gallery.jump_to(2).unwrap();

        gallery.remove(2).unwrap();

        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery.current_index(), 1);
        assert_eq!(ledger.released_urls(), ["blob:test/c"]);
    }

    #[test]
    fn test_remove_before_current_keeps_index() {
        let ledger = HandleLedger::new();
        let mut gallery = gallery_of(&ledger, &["a", "b", "c"]);
        gallery.jump_to(1).unwrap();

        gallery.remove(0).unwrap();

        assert_eq!(gallery.current_index(), 1);
        assert_eq!(names(&gallery), ["b", "c"]);
    }

    #[test]
    fn test_remove_only_image_empties_gallery() {
        let ledger = HandleLedger::new();
        let mut gallery = gallery_of(&ledger, &["a"]);

        gallery.remove(0).unwrap();

        assert!(gallery.is_empty());
        assert_eq!(gallery.current_index(), 0);
        assert!(gallery.current().is_none());
        assert_eq!(ledger.released(), 1);
    }

    #[test]
    fn test_clamp_holds_for_every_removal() {
        for n in 2..6 {
            for current in 0..n {
                for i in 0..n {
                    let ledger = HandleLedger::new();
                    let all: Vec<String> = (0..n).map(|k| k.to_string()).collect();
                    let refs: Vec<&str> = all.iter().map(String::as_str).collect();
                    let mut gallery = gallery_of(&ledger, &refs);
                    gallery.jump_to(current).unwrap();

                    gallery.remove(i).unwrap();

                    assert_eq!(gallery.len(), n - 1);
                    assert!(gallery.current_index() < gallery.len());
                    assert_eq!(ledger.released(), 1);
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let ledger = HandleLedger::new();
        let mut gallery = gallery_of(&ledger, &["a", "b"]);

        assert_eq!(
            gallery.remove(2),
            Err(GalleryError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            gallery.jump_to(5),
            Err(GalleryError::IndexOutOfRange { index: 5, len: 2 })
        );
        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery.current_index(), 0);
        assert_eq!(ledger.released(), 0);

        let mut empty = Gallery::new();
        assert!(empty.remove(0).is_err());
        assert!(empty.jump_to(0).is_err());
    }

    #[test]
    fn test_advance_wraps() {
        let ledger = HandleLedger::new();
        let mut gallery = gallery_of(&ledger, &["a", "b", "c"]);

        gallery.advance(Direction::Previous);
        assert_eq!(gallery.current_index(), 2);

        gallery.advance(Direction::Next);
        assert_eq!(gallery.current_index(), 0);

        gallery.advance(Direction::Next);
        gallery.advance(Direction::Next);
        assert_eq!(gallery.current_index(), 2);
        gallery.advance(Direction::Next);
        assert_eq!(gallery.current_index(), 0);
    }

    #[test]
    fn test_advance_is_noop_with_one_or_zero_images() {
        let mut empty = Gallery::new();
        empty.advance(Direction::Next);
        empty.advance(Direction::Previous);
        assert_eq!(empty.current_index(), 0);

        let ledger = HandleLedger::new();
        let mut single = gallery_of(&ledger, &["a"]);
        single.advance(Direction::Next);
        single.advance(Direction::Previous);
        assert_eq!(single.current_index(), 0);
    }

    #[test]
    fn test_payloads_follow_gallery_order() {
        let ledger = HandleLedger::new();
        let mut gallery = gallery_of(&ledger, &["a", "b", "c"]);
        gallery.remove(1).unwrap();

        let expected: Vec<String> = ["a", "c"]
            .iter()
            .map(|n| crate::services::PayloadFormat::Base64.encode("", n.as_bytes()))
            .collect();
        assert_eq!(gallery.payloads(), expected);
    }

    #[test]
    fn test_clear_and_drop_release_everything() {
        let ledger = HandleLedger::new();
        let mut gallery = gallery_of(&ledger, &["a", "b"]);
        gallery.jump_to(1).unwrap();

        gallery.clear();
        assert!(gallery.is_empty());
        assert_eq!(gallery.current_index(), 0);
        assert_eq!(ledger.released(), 2);

        gallery.append(vec![ledger.image("c")]);
        drop(gallery);
        assert_eq!(ledger.created(), 3);
        assert_eq!(ledger.released(), 3);
    }

    #[test]
    fn test_view() {
        let ledger = HandleLedger::new();
        let mut gallery = Gallery::new();
        let view = gallery.view();
        assert_eq!(view.current_url, None);
        assert_eq!(view.total, 0);
        assert!(!view.has_navigation());

        gallery.append(vec![ledger.image("a")]);
        assert!(!gallery.view().has_navigation());

        gallery.append(vec![ledger.image("b")]);
        gallery.advance(Direction::Next);
        let view = gallery.view();
        assert_eq!(view.current_url.as_deref(), Some("blob:test/b"));
        assert_eq!(view.total, 2);
        assert_eq!(view.current_index, 1);
        assert!(view.has_navigation());
    }

    #[test]
    fn test_batch_started_before_clear_is_discarded() {
        let ledger = HandleLedger::new();
        let mut gallery = gallery_of(&ledger, &["a"]);
        let started = gallery.generation();

        gallery.clear();
        let accepted = gallery.append_from(started, vec![ledger.image("late")]);

        assert!(!accepted);
        assert!(gallery.is_empty());
        assert_eq!(ledger.created(), 2);
        assert_eq!(ledger.released(), 2);

        let current = gallery.generation();
        assert!(gallery.append_from(current, vec![ledger.image("b")]));
        assert_eq!(names(&gallery), ["b"]);
    }
}
