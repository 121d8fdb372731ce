//! imframe-core
//!
//! Core model of an input-method framework: the typed vocabulary of
//! on-screen toolbar controls and the actions they trigger, the preedit
//! formatting model, and the capability interface a windowing backend
//! implements to place the input surface.
//!
//! Public API:
//! - `ToolbarItem` / `Toolbar` - on-screen controls supplied by an engine
//! - `HostState` / `Effect` / `CopyPasteState` - toolbar evaluation model
//! - `PreeditFormatting` - span-based styling of the composition string
//! - `Platform` / `PanelController` - per-backend window management
//! - `QueryKey` / `InputMethodQuery` - typed query-key registry
//! - `Config` - host-tunable defaults
//!
//! Everything except the platform layer is pure call-and-return over
//! caller-supplied snapshots; no component holds hidden state or performs
//! I/O. Platform calls are best-effort local window-system requests and
//! stay on the thread owning the connection.

use serde::{Deserialize, Serialize};

pub mod orientation;
pub use orientation::{Orientation, OrientationAngle};

pub mod content;
pub use content::{
    EventRequestType, HandlerState, InputMethodMode, InputModeIndicator, SwitchDirection,
    TextContentType,
};

pub mod query;
pub use query::{InputMethodQuery, QueryKey};

pub mod toolbar;
pub use toolbar::{
    ActionType, CopyPasteState, Effect, HostState, ItemType, Toolbar, ToolbarItem, VisibleType,
};

pub mod preedit;
pub use preedit::{PreeditFace, PreeditFormatting, PreeditTextFormat};

pub mod platform;
pub use platform::{
    NullPlatform, PanelController, Platform, PlatformError, Position, Rect, Region, WindowId,
};

/// Host-tunable defaults for the input surface.
///
/// Loaded by the shell at startup; everything has a sensible default so an
/// absent or partial file works.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Where the input surface is anchored by default
    pub panel_position: Position,

    /// Treat the whole panel as input-accepting when no region has been
    /// declared yet
    pub full_window_input: bool,

    /// Toolbar groups hidden at startup; a `ShowGroup` effect reveals them
    pub hidden_groups: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            panel_position: Position::CenterBottom,
            full_window_input: true,
            hidden_groups: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.panel_position, Position::CenterBottom);
        assert!(config.full_window_input);
        assert!(config.hidden_groups.is_empty());
    }

    #[test]
    fn test_config_toml_round_trip() {
        let mut config = Config::default();
        config.panel_position = Position::Overlay;
        config.hidden_groups = vec!["extras".to_string()];

        let toml_str = config.to_toml_string().unwrap();
        let parsed = Config::from_toml_str(&toml_str).unwrap();
        assert_eq!(parsed.panel_position, Position::Overlay);
        assert_eq!(parsed.hidden_groups, vec!["extras".to_string()]);
    }

    #[test]
    fn test_config_partial_toml_uses_defaults() {
        let parsed = Config::from_toml_str("full_window_input = false\n").unwrap();
        assert!(!parsed.full_window_input);
        assert_eq!(parsed.panel_position, Position::CenterBottom);
    }
}
