//! User motion preference.

use serde::{Deserialize, Serialize};

/// Whether the platform (or the user, via config) asked for reduced motion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    /// Maps a `prefers-reduced-motion` media query result.
    pub fn from_reduced(reduced: bool) -> Self {
        if reduced { Self::Reduced } else { Self::Full }
    }

    pub fn is_reduced(self) -> bool {
        self == Self::Reduced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reduced() {
        assert_eq!(MotionPreference::from_reduced(true), MotionPreference::Reduced);
        assert_eq!(MotionPreference::from_reduced(false), MotionPreference::Full);
        assert!(!MotionPreference::default().is_reduced());
    }
}
