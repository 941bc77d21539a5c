// src/gallery.rs
//
// Navigation state of an open gallery modal. The view only renders what
// this reports; every transition is clamped here.

use crate::portfolio::GalleryImage;
use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryAction {
    Previous,
    Next,
    Select(usize),
}

/// What a keydown means while the modal is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Navigate(GalleryAction),
    Close,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    images: Vec<GalleryImage>,
    index: usize,
}

impl GalleryState {
    /// Opens at the first image. An empty list is replaced by the placeholder
    /// so there is always something to show.
    pub fn new(images: Vec<GalleryImage>) -> Self {
        let images = if images.is_empty() {
            vec![GalleryImage::placeholder()]
        } else {
            images
        };
        Self { images, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    pub fn current(&self) -> &GalleryImage {
        &self.images[self.index]
    }

    pub fn can_go_previous(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.index + 1 < self.images.len()
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.index
    }

    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.index + 1, self.len())
    }

    /// Applies `action`, returning whether the index moved.
    pub fn apply(&mut self, action: GalleryAction) -> bool {
        let target = match action {
            GalleryAction::Previous if self.can_go_previous() => self.index - 1,
            GalleryAction::Next if self.can_go_next() => self.index + 1,
            GalleryAction::Select(i) if i < self.images.len() => i,
            _ => return false,
        };
        let moved = target != self.index;
        self.index = target;
        moved
    }
}

impl Reducible for GalleryState {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

pub fn key_command(key: &str) -> Option<KeyCommand> {
    match key {
        "ArrowLeft" => Some(KeyCommand::Navigate(GalleryAction::Previous)),
        "ArrowRight" => Some(KeyCommand::Navigate(GalleryAction::Next)),
        "Escape" => Some(KeyCommand::Close),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<GalleryImage> {
        (0..n)
            .map(|i| GalleryImage::new(&format!("images/{}.jpg", i), &format!("Imagem {}", i)))
            .collect()
    }

    #[test]
    fn test_opens_at_first_image() {
        let state = GalleryState::new(images(4));
        assert_eq!(state.index(), 0);
        assert_eq!(state.len(), 4);
        assert!(!state.can_go_previous());
        assert!(state.can_go_next());
        assert_eq!(state.counter_label(), "1 / 4");
    }

    #[test]
    fn test_next_clamps_at_last_image() {
        let mut state = GalleryState::new(images(4));
        for _ in 0..3 {
            assert!(state.apply(GalleryAction::Next));
        }
        assert_eq!(state.index(), 3);
        assert!(!state.can_go_next());
        assert!(!state.apply(GalleryAction::Next));
        assert_eq!(state.index(), 3);
        assert_eq!(state.counter_label(), "4 / 4");
    }

    #[test]
    fn test_previous_at_start_is_noop() {
        let mut state = GalleryState::new(images(3));
        assert!(!state.apply(GalleryAction::Previous));
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn test_select_thumbnail() {
        let mut state = GalleryState::new(images(5));
        assert!(state.apply(GalleryAction::Select(3)));
        assert_eq!(state.current().caption, "Imagem 3");
        assert!(state.is_active(3));
        assert!(!state.is_active(0));
        assert!(!state.apply(GalleryAction::Select(3)));
        assert!(!state.apply(GalleryAction::Select(5)));
        assert_eq!(state.index(), 3);
    }

    #[test]
    fn test_single_image_disables_both_controls() {
        let state = GalleryState::new(images(1));
        assert!(!state.can_go_previous());
        assert!(!state.can_go_next());
    }

    #[test]
    fn test_empty_gallery_shows_placeholder() {
        let state = GalleryState::new(Vec::new());
        assert_eq!(state.len(), 1);
        assert_eq!(state.current(), &GalleryImage::placeholder());
    }

    #[test]
    fn test_reducer_keeps_rc_when_unchanged() {
        let state = Rc::new(GalleryState::new(images(2)));
        let same = state.clone().reduce(GalleryAction::Previous);
        assert!(Rc::ptr_eq(&state, &same));
        let moved = state.reduce(GalleryAction::Next);
        assert_eq!(moved.index(), 1);
    }

    #[test]
    fn test_key_commands() {
        assert_eq!(
            key_command("ArrowLeft"),
            Some(KeyCommand::Navigate(GalleryAction::Previous))
        );
        assert_eq!(
            key_command("ArrowRight"),
            Some(KeyCommand::Navigate(GalleryAction::Next))
        );
        assert_eq!(key_command("Escape"), Some(KeyCommand::Close));
        assert_eq!(key_command("a"), None);
    }

    #[test]
    fn test_left_arrow_from_start_is_noop() {
        let mut state = GalleryState::new(images(4));
        if let Some(KeyCommand::Navigate(action)) = key_command("ArrowLeft") {
            assert!(!state.apply(action));
        }
        assert_eq!(state.index(), 0);
    }
}
