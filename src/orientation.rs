//! Window orientation vocabulary.
//!
//! Orientation angles are relative to the natural drawing direction of the
//! display. Window placement code consumes the angle; higher layers usually
//! only care about the portrait/landscape classification derived from it.

use serde::{Deserialize, Serialize};

/// Orientation angle of a window, relative to natural drawing direction.
///
/// Only the four quarter-turn angles are valid; arbitrary degrees are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrientationAngle {
    /// No rotation
    Angle0,
    /// Quarter turn clockwise
    Angle90,
    /// Half turn
    Angle180,
    /// Three-quarter turn clockwise
    Angle270,
}

impl Default for OrientationAngle {
    fn default() -> Self {
        Self::Angle0
    }
}

impl OrientationAngle {
    /// The angle in degrees.
    pub fn degrees(self) -> i32 {
        match self {
            Self::Angle0 => 0,
            Self::Angle90 => 90,
            Self::Angle180 => 180,
            Self::Angle270 => 270,
        }
    }

    /// Parse an angle from degrees. Only 0, 90, 180 and 270 are legal;
    /// anything else returns `None`.
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        match degrees {
            0 => Some(Self::Angle0),
            90 => Some(Self::Angle90),
            180 => Some(Self::Angle180),
            270 => Some(Self::Angle270),
            _ => None,
        }
    }

    /// Whether this angle presents the display in landscape.
    pub fn is_landscape(self) -> bool {
        matches!(self, Self::Angle0 | Self::Angle180)
    }

    /// Whether this angle presents the display in portrait.
    pub fn is_portrait(self) -> bool {
        !self.is_landscape()
    }
}

/// Coarse orientation of a window.
///
/// Derived from [`OrientationAngle`]; kept for callers that only branch on
/// portrait vs landscape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Angle90 or Angle270
    Portrait,
    /// Angle0 or Angle180
    Landscape,
}

impl From<OrientationAngle> for Orientation {
    fn from(angle: OrientationAngle) -> Self {
        if angle.is_landscape() {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }
}
