//! Preedit formatting model.
//!
//! An engine decorates the composition string with [`PreeditTextFormat`]
//! spans; the renderer asks [`PreeditFormatting::face_at`] which face
//! applies at a character offset. A new composition event replaces the
//! whole span sequence atomically, so readers never observe a partial
//! update.

use serde::{Deserialize, Serialize};

/// Visual style of a stretch of preedit text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PreeditFace {
    /// Ordinary composition text
    Default,
    /// Composition with no candidates available
    NoCandidates,
    /// The hardware key just pressed
    KeyPress,
}

impl Default for PreeditFace {
    fn default() -> Self {
        Self::Default
    }
}

impl PreeditFace {
    /// Decode a raw boundary value, degrading unknown values to `Default`.
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::NoCandidates,
            2 => Self::KeyPress,
            _ => Self::Default,
        }
    }
}

/// A face applied to characters `[start, start + length)` of the current
/// composition string.
///
/// Zero-length spans are inert (they style no character) but are accepted;
/// engines legitimately use them as cursor-adjacent markers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreeditTextFormat {
    /// First character offset the face applies to
    pub start: usize,
    /// Number of characters covered
    pub length: usize,
    /// The face to apply
    pub face: PreeditFace,
}

impl PreeditTextFormat {
    /// Create a span covering `[start, start + length)`.
    pub fn new(start: usize, length: usize, face: PreeditFace) -> Self {
        Self { start, length, face }
    }

    /// Whether `offset` falls inside this span. The end bound saturates, so
    /// an absurdly large span never overflows; it simply covers everything
    /// from `start` on.
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.start.saturating_add(self.length)
    }
}

/// The ordered span sequence for the current composition string.
///
/// Spans apply in insertion order; on overlap, the last applied span wins.
/// The only mutation is replacing the whole sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreeditFormatting {
    spans: Vec<PreeditTextFormat>,
}

impl PreeditFormatting {
    /// Create an empty formatting sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole span sequence for a new composition event.
    pub fn replace(&mut self, spans: Vec<PreeditTextFormat>) {
        self.spans = spans;
    }

    /// The current spans in application order.
    pub fn spans(&self) -> &[PreeditTextFormat] {
        &self.spans
    }

    /// The face applying at `offset`.
    ///
    /// Scans spans in application order; the last span containing `offset`
    /// wins. Offsets no span covers, including out-of-range ones, get
    /// [`PreeditFace::Default`].
    pub fn face_at(&self, offset: usize) -> PreeditFace {
        self.spans
            .iter()
            .rev()
            .find(|span| span.contains(offset))
            .map(|span| span.face)
            .unwrap_or_default()
    }
}
