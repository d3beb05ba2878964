//! Labels and keyboard bindings for the carousel controls.

use super::state::{CarouselState, Direction, NavInput};

/// One navigation dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotTarget {
    pub index: usize,
    pub active: bool,
    pub label: String,
}

/// Keys the carousel listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselKey {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Space,
    Enter,
}

/// Element that had focus when the key was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOrigin {
    /// The carousel region itself.
    Container,
    /// One of its buttons: play toggle, arrows or dots.
    Control,
}

/// Keyboard commands understood by a focused carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Previous,
    Next,
    First,
    Last,
    ToggleAutoplay,
}

impl KeyCommand {
    /// Command for `key` pressed on `origin`.
    ///
    /// Space and Enter toggle autoplay only on the container. On a control
    /// they activate that control, so no command is produced.
    pub fn resolve(key: CarouselKey, origin: KeyOrigin) -> Option<Self> {
        match key {
            CarouselKey::ArrowLeft => Some(Self::Previous),
            CarouselKey::ArrowRight => Some(Self::Next),
            CarouselKey::Home => Some(Self::First),
            CarouselKey::End => Some(Self::Last),
            CarouselKey::Space | CarouselKey::Enter => match origin {
                KeyOrigin::Container => Some(Self::ToggleAutoplay),
                KeyOrigin::Control => None,
            },
        }
    }
}

impl CarouselState {
    /// "current / total", one-based.
    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.current_index() + 1, self.len())
    }

    /// Label for the play/pause button.
    pub fn toggle_label(&self) -> &'static str {
        if self.is_auto_playing() {
            "Pause slideshow"
        } else {
            "Start slideshow"
        }
    }

    /// Whether to show the "AUTO" badge next to the counter.
    pub fn shows_auto_badge(&self) -> bool {
        self.is_auto_playing() && self.len() > 1
    }

    /// Whether navigation chrome (arrows, dots, play button) makes sense.
    pub fn has_navigation(&self) -> bool {
        self.len() > 1
    }

    /// Alt text for the image in `slot`.
    pub fn image_alt(&self, alt: &str, slot: usize) -> String {
        format!("{} - Image {}", alt, slot + 1)
    }

    /// One dot per image, in order.
    pub fn dots(&self) -> Vec<DotTarget> {
        (0..self.len())
            .map(|index| DotTarget {
                index,
                active: index == self.current_index(),
                label: format!("Go to image {}", index + 1),
            })
            .collect()
    }

    /// Applies a keyboard command. Navigation keys cancel autoplay like any
    /// other explicit input.
    pub fn apply_key(&mut self, command: KeyCommand) -> Option<usize> {
        match command {
            KeyCommand::Previous => self.navigate(Direction::Backward, NavInput::Keyboard),
            KeyCommand::Next => self.navigate(Direction::Forward, NavInput::Keyboard),
            KeyCommand::First => self.jump(0, NavInput::Keyboard),
            KeyCommand::Last => self.jump(self.len().saturating_sub(1), NavInput::Keyboard),
            KeyCommand::ToggleAutoplay => {
                self.toggle_autoplay();
                None
            }
        }
    }
}
