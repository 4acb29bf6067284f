//! Thematic mode enumeration

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Thematic modes supported by the buildings visualization.
///
/// Exactly one mode is active at any time; it selects which classification
/// rule derives a building's fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThematicMode {
    /// Color buildings by construction date (Spectral ramp)
    #[serde(rename = "construction-date")]
    ConstructionDate,

    /// Color buildings by current use category (Bold palette)
    #[serde(rename = "current-use")]
    CurrentUse,
}

/// Error returned when parsing a value outside the thematic mode set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown thematic mode '{0}'")]
pub struct ParseThematicModeError(pub String);

impl ThematicMode {
    /// All selectable modes, in the order the UI presents them
    pub const ALL: [ThematicMode; 2] = [ThematicMode::ConstructionDate, ThematicMode::CurrentUse];

    /// Stable token used for update triggers and serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            ThematicMode::ConstructionDate => "construction-date",
            ThematicMode::CurrentUse => "current-use",
        }
    }

    /// Human-readable label for the mode selector
    pub fn label(&self) -> &'static str {
        match self {
            ThematicMode::ConstructionDate => "Construction Date",
            ThematicMode::CurrentUse => "Current Use",
        }
    }
}

impl Default for ThematicMode {
    fn default() -> Self {
        ThematicMode::ConstructionDate
    }
}

impl fmt::Display for ThematicMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThematicMode {
    type Err = ParseThematicModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThematicMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ParseThematicModeError(s.to_string()))
    }
}
