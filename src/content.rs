//! Content and input-mode vocabulary shared between host shell and engines.
//!
//! These enums travel across a process boundary as plain data: the host
//! attaches a [`TextContentType`] and [`InputMethodMode`] to a focused text
//! entry, the active engine publishes an [`InputModeIndicator`], and the
//! shell routes toolbar visibility and dispatch by [`HandlerState`].
//!
//! Values received from an older or newer peer may be out of range; every
//! enum therefore has a lenient `from_raw` decoder that degrades unknown
//! values to its neutral member instead of failing.

use serde::{Deserialize, Serialize};

/// Content type of the text in a text-entry widget.
///
/// Owned by the text-entry target, not the input method. Engines use it to
/// pick input affordances, e.g. a numeric pad for [`TextContentType::Number`]
/// or URL-friendly symbols for [`TextContentType::Url`], and may adjust word
/// prediction and error correction accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextContentType {
    /// All characters allowed
    FreeText,
    /// Only integer numbers allowed
    Number,
    /// Numbers and certain other characters used in phone numbers
    PhoneNumber,
    /// Only characters permitted in an email address
    Email,
    /// Only characters permitted in a URL
    Url,
    /// Content with a user-defined format
    Custom,
}

impl Default for TextContentType {
    fn default() -> Self {
        Self::FreeText
    }
}

impl TextContentType {
    /// Decode a raw boundary value, degrading unknown values to `FreeText`.
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::FreeText,
            1 => Self::Number,
            2 => Self::PhoneNumber,
            3 => Self::Email,
            4 => Self::Url,
            5 => Self::Custom,
            _ => Self::FreeText,
        }
    }
}

/// How the input method mediates key input for the focused text entry.
///
/// Attached to a text-entry target for the duration of its focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputMethodMode {
    /// Preedit and error correction are available
    Normal,
    /// Raw key events are forwarded for every press and release
    Direct,
    /// Input is mediated through a proxy widget
    Proxy,
}

impl Default for InputMethodMode {
    fn default() -> Self {
        Self::Normal
    }
}

impl InputMethodMode {
    /// Decode a raw boundary value, degrading unknown values to `Normal`.
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::Normal,
            1 => Self::Direct,
            2 => Self::Proxy,
            _ => Self::Normal,
        }
    }
}

/// Which category of input surface currently owns focus.
///
/// Used to route toolbar visibility and action dispatch to the active
/// surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandlerState {
    /// On-screen (virtual) input surface
    OnScreen,
    /// Hardware keyboard
    Hardware,
    /// Accessory input device
    Accessory,
}

impl Default for HandlerState {
    fn default() -> Self {
        Self::OnScreen
    }
}

impl HandlerState {
    /// Decode a raw boundary value, degrading unknown values to `OnScreen`.
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::OnScreen,
            1 => Self::Hardware,
            2 => Self::Accessory,
            _ => Self::OnScreen,
        }
    }
}

/// Direction for switching between input-engine plugins.
///
/// A stateless directive, not persisted anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwitchDirection {
    /// Uninitialized / no switch requested
    Undefined,
    /// Activate the next plugin
    Forward,
    /// Activate the previous plugin
    Backward,
}

impl Default for SwitchDirection {
    fn default() -> Self {
        Self::Undefined
    }
}

impl SwitchDirection {
    /// Decode a raw boundary value, degrading unknown values to `Undefined`.
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::Undefined,
            1 => Self::Forward,
            2 => Self::Backward,
            _ => Self::Undefined,
        }
    }
}

/// Composition-mode glyph to show in the shell's status indicator.
///
/// Produced by the active input engine, consumed by the indicator widget;
/// purely descriptive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputModeIndicator {
    /// No indicator should be shown
    None,
    /// Latin lower case mode
    LatinLower,
    /// Latin upper case mode
    LatinUpper,
    /// Latin caps locked mode
    LatinLocked,
    /// Cyrillic lower case mode
    CyrillicLower,
    /// Cyrillic upper case mode
    CyrillicUpper,
    /// Cyrillic caps locked mode
    CyrillicLocked,
    /// Arabic mode
    Arabic,
    /// Pinyin mode
    Pinyin,
    /// Zhuyin mode
    Zhuyin,
    /// Cangjie mode
    Cangjie,
    /// Number and symbol latched mode
    NumAndSymLatched,
    /// Number and symbol locked mode
    NumAndSymLocked,
    /// Dead key acute mode
    DeadKeyAcute,
    /// Dead key caron mode
    DeadKeyCaron,
    /// Dead key circumflex mode
    DeadKeyCircumflex,
    /// Dead key diaeresis mode
    DeadKeyDiaeresis,
    /// Dead key grave mode
    DeadKeyGrave,
    /// Dead key tilde mode
    DeadKeyTilde,
}

impl Default for InputModeIndicator {
    fn default() -> Self {
        Self::None
    }
}

impl InputModeIndicator {
    /// Decode a raw boundary value, degrading unknown values to `None`.
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::None,
            1 => Self::LatinLower,
            2 => Self::LatinUpper,
            3 => Self::LatinLocked,
            4 => Self::CyrillicLower,
            5 => Self::CyrillicUpper,
            6 => Self::CyrillicLocked,
            7 => Self::Arabic,
            8 => Self::Pinyin,
            9 => Self::Zhuyin,
            10 => Self::Cangjie,
            11 => Self::NumAndSymLatched,
            12 => Self::NumAndSymLocked,
            13 => Self::DeadKeyAcute,
            14 => Self::DeadKeyCaron,
            15 => Self::DeadKeyCircumflex,
            16 => Self::DeadKeyDiaeresis,
            17 => Self::DeadKeyGrave,
            18 => Self::DeadKeyTilde,
            _ => Self::None,
        }
    }
}

/// How a key event should be delivered to the application side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventRequestType {
    /// Deliver both a key event and a signal
    Both,
    /// Deliver only a signal
    SignalOnly,
    /// Deliver only a key event
    EventOnly,
}

impl Default for EventRequestType {
    fn default() -> Self {
        Self::Both
    }
}

impl EventRequestType {
    /// Decode a raw boundary value, degrading unknown values to `Both`.
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::Both,
            1 => Self::SignalOnly,
            2 => Self::EventOnly,
            _ => Self::Both,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_lenient_decode() {
        assert_eq!(TextContentType::from_raw(3), TextContentType::Email);
        assert_eq!(TextContentType::from_raw(99), TextContentType::FreeText);
    }

    #[test]
    fn test_handler_state_lenient_decode() {
        assert_eq!(HandlerState::from_raw(1), HandlerState::Hardware);
        assert_eq!(HandlerState::from_raw(7), HandlerState::OnScreen);
    }

    #[test]
    fn test_indicator_lenient_decode() {
        assert_eq!(InputModeIndicator::from_raw(8), InputModeIndicator::Pinyin);
        assert_eq!(
            InputModeIndicator::from_raw(18),
            InputModeIndicator::DeadKeyTilde
        );
        assert_eq!(InputModeIndicator::from_raw(19), InputModeIndicator::None);
    }

    #[test]
    fn test_defaults_are_neutral() {
        assert_eq!(TextContentType::default(), TextContentType::FreeText);
        assert_eq!(InputMethodMode::default(), InputMethodMode::Normal);
        assert_eq!(SwitchDirection::default(), SwitchDirection::Undefined);
        assert_eq!(InputModeIndicator::default(), InputModeIndicator::None);
    }
}
