//! Typed registry of input-method query keys.
//!
//! Hosts and engines exchange a small set of per-entry properties (is
//! correction enabled, which attribute extension applies, and so on). The
//! registry keeps these keys typed instead of dispatching on free-form
//! strings, with an explicit escape hatch so keys introduced by a newer
//! peer round-trip losslessly.

use serde::{Deserialize, Serialize};

/// Base raw value of the numeric query extension range.
const QUERY_EXTENSION_BASE: i32 = 10001;

/// Numeric query extensions a host can issue against a focused text entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputMethodQuery {
    /// Whether the input method widget wants visualization priority; a
    /// honoring engine stays out of the widget's space.
    VisualizationPriority,
    /// Bounding rectangle of the current preedit text.
    PreeditRectangle,
    /// Explicit correction enabling for the text entry.
    CorrectionEnabled,
    /// The entry's input-method mode: normal, direct or proxy.
    Mode,
    /// Attribute extension identifier for the text entry.
    AttributeExtensionId,
    /// Attribute extension file name for the text entry.
    AttributeExtension,
    /// Overrides localized numeric input with western numeric input.
    WesternNumericInputEnforced,
}

impl InputMethodQuery {
    /// The raw wire value of this query.
    pub fn raw(self) -> i32 {
        QUERY_EXTENSION_BASE
            + match self {
                Self::VisualizationPriority => 0,
                Self::PreeditRectangle => 1,
                Self::CorrectionEnabled => 2,
                Self::Mode => 3,
                Self::AttributeExtensionId => 4,
                Self::AttributeExtension => 5,
                Self::WesternNumericInputEnforced => 6,
            }
    }

    /// Decode a raw wire value. Values outside the extension range are not
    /// queries of this registry and yield `None`; the caller treats them as
    /// unanswerable rather than as an error. Any `i32` is safe to pass,
    /// including values far below the extension base.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw.checked_sub(QUERY_EXTENSION_BASE)? {
            0 => Some(Self::VisualizationPriority),
            1 => Some(Self::PreeditRectangle),
            2 => Some(Self::CorrectionEnabled),
            3 => Some(Self::Mode),
            4 => Some(Self::AttributeExtensionId),
            5 => Some(Self::AttributeExtension),
            6 => Some(Self::WesternNumericInputEnforced),
            _ => None,
        }
    }
}

/// A string-named per-entry property key.
///
/// Known keys are closed variants; anything else is carried verbatim in
/// [`QueryKey::Unknown`] so a newer peer's keys survive a round trip through
/// this registry untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueryKey {
    /// Whether error correction is enabled for the entry.
    CorrectionEnabled,
    /// ID of the entry's attribute extension.
    AttributeExtensionId,
    /// File name of the entry's attribute extension.
    AttributeExtension,
    /// Override localized numeric input with western numeric input.
    WesternNumericInputEnforced,
    /// Render the input surface translucently.
    TranslucentInputMethod,
    /// Suppress the input surface even while the entry is focused.
    SuppressInputMethod,
    /// A key this registry does not know; preserved for forward
    /// compatibility, never dispatched on.
    Unknown(String),
}

impl QueryKey {
    /// The property name of this key.
    pub fn name(&self) -> &str {
        match self {
            Self::CorrectionEnabled => "im-correction-enabled",
            Self::AttributeExtensionId => "im-attribute-extension-id",
            Self::AttributeExtension => "im-attribute-extension",
            Self::WesternNumericInputEnforced => "im-western-numeric-input-enforced",
            Self::TranslucentInputMethod => "im-translucent-input-method",
            Self::SuppressInputMethod => "im-suppress-input-method",
            Self::Unknown(name) => name,
        }
    }

    /// Look up a key by property name. Total: unknown names come back as
    /// [`QueryKey::Unknown`] rather than failing.
    pub fn from_name(name: &str) -> Self {
        match name {
            "im-correction-enabled" => Self::CorrectionEnabled,
            "im-attribute-extension-id" => Self::AttributeExtensionId,
            "im-attribute-extension" => Self::AttributeExtension,
            "im-western-numeric-input-enforced" => Self::WesternNumericInputEnforced,
            "im-translucent-input-method" => Self::TranslucentInputMethod,
            "im-suppress-input-method" => Self::SuppressInputMethod,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Whether this key is one the registry knows.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_raw_round_trip() {
        for query in [
            InputMethodQuery::VisualizationPriority,
            InputMethodQuery::PreeditRectangle,
            InputMethodQuery::CorrectionEnabled,
            InputMethodQuery::Mode,
            InputMethodQuery::AttributeExtensionId,
            InputMethodQuery::AttributeExtension,
            InputMethodQuery::WesternNumericInputEnforced,
        ] {
            assert_eq!(InputMethodQuery::from_raw(query.raw()), Some(query));
        }
    }

    #[test]
    fn test_query_range_starts_at_10001() {
        assert_eq!(InputMethodQuery::VisualizationPriority.raw(), 10001);
        assert_eq!(InputMethodQuery::from_raw(10000), None);
        assert_eq!(InputMethodQuery::from_raw(0), None);
    }

    #[test]
    fn test_extreme_raw_values_decode_to_none() {
        assert_eq!(InputMethodQuery::from_raw(i32::MIN), None);
        assert_eq!(InputMethodQuery::from_raw(i32::MAX), None);
        assert_eq!(InputMethodQuery::from_raw(-1), None);
    }

    #[test]
    fn test_key_name_round_trip() {
        let key = QueryKey::from_name("im-correction-enabled");
        assert_eq!(key, QueryKey::CorrectionEnabled);
        assert_eq!(QueryKey::from_name(key.name()), key);
    }

    #[test]
    fn test_unknown_key_is_preserved() {
        let key = QueryKey::from_name("vendor-x-future-key");
        assert_eq!(key, QueryKey::Unknown("vendor-x-future-key".to_string()));
        assert_eq!(key.name(), "vendor-x-future-key");
        assert!(!key.is_known());
    }
}
