//! Window platform abstraction.
//!
//! A [`Platform`] implementation translates the three capability calls into
//! native window-manager requests for one windowing backend. The shell
//! drives backends through [`PanelController`], which treats backend
//! failures as non-fatal (the surface may end up mispositioned, the shell
//! keeps running) and deduplicates repeated identical requests so placement
//! is idempotent.
//!
//! All calls here are synchronous and must stay on the thread owning the
//! windowing connection; callers serialize access themselves.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Opaque native window handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

/// Placement anchor for the input-surface window.
///
/// Opaque to the core; each backend maps it to native coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Anchored to the bottom edge, horizontally centered
    CenterBottom,
    /// Overlaid on the application, position chosen by the backend
    Overlay,
}

impl Default for Position {
    fn default() -> Self {
        Self::CenterBottom
    }
}

/// An axis-aligned rectangle in window-local coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a rectangle.
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Whether the rectangle covers no area.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether the point lies inside the rectangle.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let (x, y) = (i64::from(x), i64::from(y));
        x >= i64::from(self.x)
            && y >= i64::from(self.y)
            && x - i64::from(self.x) < i64::from(self.width)
            && y - i64::from(self.y) < i64::from(self.height)
    }
}

/// The subset of a window's area that accepts pointer and touch input.
///
/// Everything outside the region is click-through. An empty region means
/// the window accepts no input at all; a region equal to the full window
/// bounds makes it behave as an ordinary opaque window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    rects: Vec<Rect>,
}

impl Region {
    /// The empty region: fully click-through.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A region made of the given rectangles. Empty rectangles contribute
    /// nothing and are dropped.
    pub fn from_rects(rects: Vec<Rect>) -> Self {
        Self {
            rects: rects.into_iter().filter(|r| !r.is_empty()).collect(),
        }
    }

    /// Whether the region accepts no input anywhere.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// The rectangles making up the region.
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Whether the point is inside the input-accepting area.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.rects.iter().any(|r| r.contains(x, y))
    }
}

/// A backend request that could not be applied.
///
/// Never fatal to the caller: the shell continues with best-effort
/// placement.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The windowing connection is gone or was never established.
    #[error("windowing connection unavailable")]
    ConnectionUnavailable,
    /// The window system rejected the request.
    #[error("window system rejected {request} for window {window:?}")]
    RequestRejected {
        request: &'static str,
        window: WindowId,
    },
}

/// Capability interface to one windowing backend.
///
/// Implemented once per backend (an X-protocol one, a compositor-protocol
/// one, ...), selected at startup by the host shell. The core never
/// branches on backend identity.
pub trait Platform {
    /// Position the input-surface window per the placement anchor.
    /// Idempotent: applying the same position twice leaves the window in
    /// the same placed state.
    fn setup_input_panel(&mut self, window: WindowId, position: Position)
        -> Result<(), PlatformError>;

    /// Declare which part of the window accepts pointer/touch input; the
    /// rest is click-through.
    fn set_input_region(&mut self, window: WindowId, region: &Region)
        -> Result<(), PlatformError>;

    /// Record which application window this input surface serves, for
    /// stacking and activation coordination. `None` detaches the
    /// association.
    fn set_application_window(
        &mut self,
        window: WindowId,
        app_window: Option<WindowId>,
    ) -> Result<(), PlatformError>;
}

/// Backend that applies nothing.
///
/// Used headless and in tests; every request succeeds without effect.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPlatform;

impl Platform for NullPlatform {
    fn setup_input_panel(&mut self, _window: WindowId, _position: Position)
        -> Result<(), PlatformError> {
        Ok(())
    }

    fn set_input_region(&mut self, _window: WindowId, _region: &Region)
        -> Result<(), PlatformError> {
        Ok(())
    }

    fn set_application_window(
        &mut self,
        _window: WindowId,
        _app_window: Option<WindowId>,
    ) -> Result<(), PlatformError> {
        Ok(())
    }
}

/// Best-effort driver for a windowing backend.
///
/// Remembers the last state applied per window and skips byte-identical
/// repeats, so a backend sees each distinct request once and repeated
/// calls observably equal a single call. Failed requests are logged and
/// forgotten, so the next call retries.
pub struct PanelController {
    platform: Box<dyn Platform>,
    placements: HashMap<WindowId, Position>,
    regions: HashMap<WindowId, Region>,
    attachments: HashMap<WindowId, Option<WindowId>>,
}

impl PanelController {
    /// Create a controller driving the given backend.
    pub fn new(platform: Box<dyn Platform>) -> Self {
        Self {
            platform,
            placements: HashMap::new(),
            regions: HashMap::new(),
            attachments: HashMap::new(),
        }
    }

    /// Place the input-surface window. Returns whether the placement is in
    /// effect.
    pub fn place(&mut self, window: WindowId, position: Position) -> bool {
        if self.placements.get(&window) == Some(&position) {
            debug!(?window, ?position, "placement unchanged, skipping");
            return true;
        }
        match self.platform.setup_input_panel(window, position) {
            Ok(()) => {
                self.placements.insert(window, position);
                true
            }
            Err(err) => {
                warn!(?window, %err, "input panel placement failed");
                self.placements.remove(&window);
                false
            }
        }
    }

    /// Declare the window's input-accepting region. Returns whether the
    /// region is in effect.
    pub fn set_region(&mut self, window: WindowId, region: Region) -> bool {
        if self.regions.get(&window) == Some(&region) {
            debug!(?window, "input region unchanged, skipping");
            return true;
        }
        match self.platform.set_input_region(window, &region) {
            Ok(()) => {
                self.regions.insert(window, region);
                true
            }
            Err(err) => {
                warn!(?window, %err, "input region update failed");
                self.regions.remove(&window);
                false
            }
        }
    }

    /// Associate the input surface with the application window it serves.
    /// Returns whether the association is in effect.
    pub fn attach(&mut self, window: WindowId, app_window: WindowId) -> bool {
        self.apply_attachment(window, Some(app_window))
    }

    /// Detach the input surface from any application window.
    pub fn detach(&mut self, window: WindowId) -> bool {
        self.apply_attachment(window, None)
    }

    fn apply_attachment(&mut self, window: WindowId, app_window: Option<WindowId>) -> bool {
        if self.attachments.get(&window) == Some(&app_window) {
            debug!(?window, ?app_window, "attachment unchanged, skipping");
            return true;
        }
        match self.platform.set_application_window(window, app_window) {
            Ok(()) => {
                self.attachments.insert(window, app_window);
                true
            }
            Err(err) => {
                warn!(?window, %err, "application window attachment failed");
                self.attachments.remove(&window);
                false
            }
        }
    }

    /// The placement last applied for `window`, if any.
    pub fn placement(&self, window: WindowId) -> Option<Position> {
        self.placements.get(&window).copied()
    }

    /// The input region last applied for `window`, if any.
    pub fn region(&self, window: WindowId) -> Option<&Region> {
        self.regions.get(&window)
    }

    /// The application window `window` is attached to, if any.
    pub fn attachment(&self, window: WindowId) -> Option<WindowId> {
        self.attachments.get(&window).copied().flatten()
    }
}
