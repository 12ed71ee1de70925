//! Game settings: difficulty selection and motion scaling.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Difficulty levels, selected on the start screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Vehicle speed cap for this difficulty
    pub fn max_speed(&self) -> f32 {
        match self {
            Difficulty::Easy => 8.0,
            Difficulty::Medium => consts::DEFAULT_MAX_SPEED,
            Difficulty::Hard => 12.0,
        }
    }
}

/// Session settings, fixed between start commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Selected difficulty (applied to the vehicle at game start)
    pub difficulty: Difficulty,
    /// Scale motion by elapsed frame time instead of ticking in
    /// per-frame-constant units. Off by default: the game's feel was tuned
    /// against a 60 Hz tick and the constant-step behavior is kept as-is.
    pub time_scaled_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            time_scaled_motion: false,
        }
    }
}

impl Settings {
    /// Settings for a difficulty, other options at defaults
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_maps_to_max_speed() {
        assert_eq!(Difficulty::Easy.max_speed(), 8.0);
        assert_eq!(Difficulty::Medium.max_speed(), 10.0);
        assert_eq!(Difficulty::Hard.max_speed(), 12.0);
    }

    #[test]
    fn unknown_difficulty_falls_back_to_medium() {
        let parsed = Difficulty::from_str("nightmare").unwrap_or_default();
        assert_eq!(parsed, Difficulty::Medium);
        assert_eq!(parsed.max_speed(), 10.0);
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!(Difficulty::from_str("EASY"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_str("Hard"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("med"), Some(Difficulty::Medium));
    }
}
