//! Game mode selection.

use super::Mark;
use serde::{Deserialize, Serialize};

/// Game mode - who is the opponent?
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Mode {
    /// Two humans sharing one board.
    #[default]
    Duo,
    /// Human plays X against the CPU playing O.
    Solo,
}

impl Mode {
    /// Returns display name.
    pub fn title(self) -> &'static str {
        match self {
            Mode::Duo => "Local Duel",
            Mode::Solo => "Solo vs CPU",
        }
    }

    /// One-line description shown under the title.
    pub fn description(self) -> &'static str {
        match self {
            Mode::Duo => "Two players, one board",
            Mode::Solo => "You play X, CPU plays O",
        }
    }

    /// The mark played by the CPU in this mode.
    pub fn cpu_mark(self) -> Option<Mark> {
        match self {
            Mode::Duo => None,
            Mode::Solo => Some(Mark::O),
        }
    }

    /// Scoreboard label for the given mark.
    pub fn label(self, mark: Mark) -> &'static str {
        match (self, mark) {
            (Mode::Solo, Mark::X) => "You (X)",
            (Mode::Solo, Mark::O) => "CPU (O)",
            (Mode::Duo, Mark::X) => "Player X",
            (Mode::Duo, Mark::O) => "Player O",
        }
    }

    /// Toggles between `Duo` and `Solo`.
    pub fn toggle(self) -> Self {
        match self {
            Mode::Duo => Mode::Solo,
            Mode::Solo => Mode::Duo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_labels_follow_mode() {
        assert_eq!(Mode::Solo.label(Mark::X), "You (X)");
        assert_eq!(Mode::Solo.label(Mark::O), "CPU (O)");
        assert_eq!(Mode::Duo.label(Mark::X), "Player X");
        assert_eq!(Mode::Duo.label(Mark::O), "Player O");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Mode::from_str("solo"), Ok(Mode::Solo));
        assert_eq!(Mode::from_str("Duo"), Ok(Mode::Duo));
        assert!(Mode::from_str("trio").is_err());
    }

    #[test]
    fn test_only_solo_has_a_cpu() {
        assert_eq!(Mode::Duo.cpu_mark(), None);
        assert_eq!(Mode::Solo.cpu_mark(), Some(Mark::O));
    }
}
