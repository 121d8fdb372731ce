//! Toolbar action model.
//!
//! An input engine describes its on-screen controls as [`ToolbarItem`]
//! values; the hosting shell evaluates visibility against the current
//! [`HostState`] snapshot and, on activation, resolves the item to an
//! [`Effect`] it then carries out (inject keys, copy, show a group, ...).
//!
//! Everything here is a pure function of its arguments. In particular the
//! copy/paste button state has no history: it is recomputed from the host
//! snapshot on every selection, focus or clipboard change, never carried
//! forward. A toolbar definition is advisory UI data, so unknown enumerant
//! values received over a boundary decay to `Undefined` and dispatch to a
//! no-op instead of failing.

use serde::{Deserialize, Serialize};

use crate::content::HandlerState;

/// How a toolbar item should be visualized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    /// Not yet configured
    Undefined,
    /// Visualized as a button
    Button,
    /// Visualized as a label
    Label,
}

impl Default for ItemType {
    fn default() -> Self {
        Self::Undefined
    }
}

impl ItemType {
    /// Decode a raw boundary value, degrading unknown values to `Undefined`.
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::Button,
            2 => Self::Label,
            _ => Self::Undefined,
        }
    }
}

/// Visibility policy of a toolbar item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisibleType {
    /// Not yet configured; the item is never shown automatically
    Undefined,
    /// Shown if and only if a text selection exists
    WhenSelectingText,
    /// Always shown
    Always,
}

impl Default for VisibleType {
    fn default() -> Self {
        Self::Undefined
    }
}

impl VisibleType {
    /// Decode a raw boundary value, degrading unknown values to `Undefined`.
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::WhenSelectingText,
            2 => Self::Always,
            _ => Self::Undefined,
        }
    }
}

/// Action triggered when a toolbar item is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    /// Do nothing
    Undefined,
    /// Send a key sequence like Ctrl+D
    SendKeySequence,
    /// Send a literal string
    SendString,
    /// Reserved: dispatches to a no-op until a command protocol exists
    SendCommand,
    /// Copy the selected text
    Copy,
    /// Paste text from the clipboard
    Paste,
    /// Show a named group of items
    ShowGroup,
    /// Hide a named group of items
    HideGroup,
    /// Close the input surface
    Close,
    /// Combined copy/paste button; resolves per [`CopyPasteState`]
    CopyPaste,
}

impl Default for ActionType {
    fn default() -> Self {
        Self::Undefined
    }
}

impl ActionType {
    /// Decode a raw boundary value, degrading unknown values to `Undefined`.
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::SendKeySequence,
            2 => Self::SendString,
            3 => Self::SendCommand,
            4 => Self::Copy,
            5 => Self::Paste,
            6 => Self::ShowGroup,
            7 => Self::HideGroup,
            8 => Self::Close,
            9 => Self::CopyPaste,
            _ => Self::Undefined,
        }
    }
}

/// State of the combined copy/paste button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CopyPasteState {
    /// The button is hidden
    NoCopyPaste,
    /// Copy is accessible
    Copy,
    /// Paste is accessible
    Paste,
}

impl Default for CopyPasteState {
    fn default() -> Self {
        Self::NoCopyPaste
    }
}

impl CopyPasteState {
    /// Resolve the copy/paste state from the current host snapshot.
    ///
    /// Memoryless: a selection wins over clipboard content, clipboard
    /// content alone means paste, and neither means the button is hidden.
    /// The result depends only on `host`, never on a previous state.
    pub fn resolve(host: &HostState) -> Self {
        if host.has_selection {
            Self::Copy
        } else if host.clipboard_available {
            Self::Paste
        } else {
            Self::NoCopyPaste
        }
    }

    /// Decode a raw boundary value, degrading unknown values to
    /// `NoCopyPaste`.
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::Copy,
            2 => Self::Paste,
            _ => Self::NoCopyPaste,
        }
    }
}

/// Snapshot of the host state relevant to toolbar evaluation.
///
/// Supplied by the shell on every selection, focus or clipboard change.
/// Plain data; the model never mutates it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostState {
    /// A non-empty text selection exists in the focused entry
    pub has_selection: bool,
    /// The clipboard holds pasteable content
    pub clipboard_available: bool,
    /// Which input surface category owns focus
    pub handler: HandlerState,
}

impl HostState {
    /// Snapshot with a live selection.
    pub fn with_selection() -> Self {
        Self {
            has_selection: true,
            ..Self::default()
        }
    }

    /// Snapshot with clipboard content and no selection.
    pub fn with_clipboard() -> Self {
        Self {
            clipboard_available: true,
            ..Self::default()
        }
    }
}

/// The concrete consequence of activating a toolbar item.
///
/// Returned to the shell, which implements the real-world behavior:
/// injecting key events, driving the clipboard, showing or hiding named
/// groups, or closing the input surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Nothing to do
    None,
    /// Inject a key sequence, e.g. "Ctrl+C"
    SendKeySequence(String),
    /// Inject a literal string
    SendString(String),
    /// Copy the current selection
    Copy,
    /// Paste the clipboard content
    Paste,
    /// Show the named item group
    ShowGroup(String),
    /// Hide the named item group
    HideGroup(String),
    /// Close the input surface
    Close,
}

/// One on-screen control of an input engine's toolbar.
///
/// The payload fields feed the matching action: `key_sequence` for
/// [`ActionType::SendKeySequence`], `text` for [`ActionType::SendString`]
/// and as the rendered label, `group` for the Show/Hide group actions.
/// An item whose action needs a payload it does not have dispatches to a
/// no-op. `group_membership` names the group the item itself belongs to,
/// so the shell can resolve a `ShowGroup`/`HideGroup` effect (or startup
/// hidden-group configuration) back to the affected items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolbarItem {
    /// Identifier, unique within its toolbar
    pub name: String,
    /// Rendering hint
    pub item_type: ItemType,
    /// Visibility policy
    pub visible_type: VisibleType,
    /// Activation semantics
    pub action_type: ActionType,
    /// Key sequence payload for `SendKeySequence`
    pub key_sequence: Option<String>,
    /// Label text, also the payload for `SendString`
    pub text: Option<String>,
    /// Target group name for `ShowGroup` / `HideGroup`
    pub group: Option<String>,
    /// Group this item belongs to, if any
    pub group_membership: Option<String>,
}

impl ToolbarItem {
    /// Create an item with the given name and types; payloads start empty.
    pub fn new(
        name: &str,
        item_type: ItemType,
        visible_type: VisibleType,
        action_type: ActionType,
    ) -> Self {
        Self {
            name: name.to_string(),
            item_type,
            visible_type,
            action_type,
            ..Self::default()
        }
    }

    /// Whether this item is shown under the given host snapshot.
    ///
    /// `Always` is always shown, `WhenSelectingText` follows the selection
    /// state, and `Undefined` is treated as not yet configured and stays
    /// hidden.
    pub fn is_visible(&self, host: &HostState) -> bool {
        match self.visible_type {
            VisibleType::Always => true,
            VisibleType::WhenSelectingText => host.has_selection,
            VisibleType::Undefined => false,
        }
    }

    /// Resolve activation of this item to its [`Effect`].
    ///
    /// Stateless: every call is reproducible from the item and the host
    /// snapshot alone. A `CopyPaste` item resolves through
    /// [`CopyPasteState::resolve`]; its rendered state must come from there
    /// as well, never from a fixed label.
    pub fn dispatch(&self, host: &HostState) -> Effect {
        match self.action_type {
            ActionType::Undefined => Effect::None,
            ActionType::SendKeySequence => match &self.key_sequence {
                Some(keys) if !keys.is_empty() => Effect::SendKeySequence(keys.clone()),
                _ => Effect::None,
            },
            ActionType::SendString => match &self.text {
                Some(text) if !text.is_empty() => Effect::SendString(text.clone()),
                _ => Effect::None,
            },
            // Reserved until a concrete command protocol is specified.
            ActionType::SendCommand => Effect::None,
            ActionType::Copy => Effect::Copy,
            ActionType::Paste => Effect::Paste,
            ActionType::ShowGroup => match &self.group {
                Some(group) if !group.is_empty() => Effect::ShowGroup(group.clone()),
                _ => Effect::None,
            },
            ActionType::HideGroup => match &self.group {
                Some(group) if !group.is_empty() => Effect::HideGroup(group.clone()),
                _ => Effect::None,
            },
            ActionType::Close => Effect::Close,
            ActionType::CopyPaste => match CopyPasteState::resolve(host) {
                CopyPasteState::Copy => Effect::Copy,
                CopyPasteState::Paste => Effect::Paste,
                CopyPasteState::NoCopyPaste => Effect::None,
            },
        }
    }
}

/// An ordered collection of toolbar items, as supplied by an input engine.
///
/// The shell renders `visible_items` for the current host snapshot and
/// re-evaluates on every snapshot change. Item order is presentation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toolbar {
    items: Vec<ToolbarItem>,
}

impl Toolbar {
    /// Create an empty toolbar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item.
    pub fn push(&mut self, item: ToolbarItem) {
        self.items.push(item);
    }

    /// All items in presentation order.
    pub fn items(&self) -> &[ToolbarItem] {
        &self.items
    }

    /// Look up an item by name.
    pub fn item(&self, name: &str) -> Option<&ToolbarItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// The items visible under the given host snapshot, in presentation
    /// order.
    ///
    /// Group hiding is the shell's bookkeeping: combine this with
    /// [`Toolbar::group_items`] to drop members of currently hidden groups.
    pub fn visible_items(&self, host: &HostState) -> Vec<&ToolbarItem> {
        self.items.iter().filter(|item| item.is_visible(host)).collect()
    }

    /// The items belonging to the named group, in presentation order.
    ///
    /// This is how a `ShowGroup`/`HideGroup` effect resolves to the items
    /// it affects.
    pub fn group_items(&self, group: &str) -> Vec<&ToolbarItem> {
        self.items
            .iter()
            .filter(|item| item.group_membership.as_deref() == Some(group))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn copy_button() -> ToolbarItem {
        ToolbarItem::new(
            "copy",
            ItemType::Button,
            VisibleType::WhenSelectingText,
            ActionType::Copy,
        )
    }

    fn button(name: &str, action_type: ActionType) -> ToolbarItem {
        ToolbarItem::new(name, ItemType::Button, VisibleType::Always, action_type)
    }

    #[test]
    fn test_visibility_without_selection() {
        let host = HostState::default();
        for visible_type in [
            VisibleType::Undefined,
            VisibleType::WhenSelectingText,
            VisibleType::Always,
        ] {
            let item = ToolbarItem::new("x", ItemType::Button, visible_type, ActionType::Close);
            assert_eq!(item.is_visible(&host), visible_type == VisibleType::Always);
        }
    }

    #[test]
    fn test_visibility_with_selection() {
        let host = HostState::with_selection();
        for (visible_type, expected) in [
            (VisibleType::Undefined, false),
            (VisibleType::WhenSelectingText, true),
            (VisibleType::Always, true),
        ] {
            let item = ToolbarItem::new("x", ItemType::Button, visible_type, ActionType::Close);
            assert_eq!(item.is_visible(&host), expected);
        }
    }

    #[test]
    fn test_copy_paste_resolution() {
        assert_eq!(
            CopyPasteState::resolve(&HostState {
                has_selection: true,
                clipboard_available: true,
                ..HostState::default()
            }),
            CopyPasteState::Copy
        );
        assert_eq!(
            CopyPasteState::resolve(&HostState::with_selection()),
            CopyPasteState::Copy
        );
        assert_eq!(
            CopyPasteState::resolve(&HostState::with_clipboard()),
            CopyPasteState::Paste
        );
        assert_eq!(
            CopyPasteState::resolve(&HostState::default()),
            CopyPasteState::NoCopyPaste
        );
    }

    #[test]
    fn test_dispatch_payload_actions() {
        let host = HostState::default();

        let mut keys = button("undo", ActionType::SendKeySequence);
        keys.key_sequence = Some("Ctrl+Z".to_string());
        assert_eq!(
            keys.dispatch(&host),
            Effect::SendKeySequence("Ctrl+Z".to_string())
        );

        let mut smiley = button("smiley", ActionType::SendString);
        smiley.text = Some(":-)".to_string());
        assert_eq!(smiley.dispatch(&host), Effect::SendString(":-)".to_string()));

        let mut more = button("more", ActionType::ShowGroup);
        more.group = Some("extras".to_string());
        assert_eq!(more.dispatch(&host), Effect::ShowGroup("extras".to_string()));
    }

    #[test]
    fn test_dispatch_missing_payload_is_noop() {
        let host = HostState::default();
        let keys = button("undo", ActionType::SendKeySequence);
        assert_eq!(keys.dispatch(&host), Effect::None);

        let show = button("more", ActionType::ShowGroup);
        assert_eq!(show.dispatch(&host), Effect::None);
    }

    #[test]
    fn test_dispatch_reserved_and_undefined_are_noops() {
        let host = HostState::with_selection();
        let command = button("cmd", ActionType::SendCommand);
        assert_eq!(command.dispatch(&host), Effect::None);

        let undefined = button("x", ActionType::Undefined);
        assert_eq!(undefined.dispatch(&host), Effect::None);
    }

    #[test]
    fn test_copy_paste_dispatch_follows_resolution() {
        let combined = button("copypaste", ActionType::CopyPaste);

        assert_eq!(combined.dispatch(&HostState::with_selection()), Effect::Copy);
        assert_eq!(combined.dispatch(&HostState::with_clipboard()), Effect::Paste);
        assert_eq!(combined.dispatch(&HostState::default()), Effect::None);
    }

    #[test]
    fn test_unknown_enumerants_decay_to_undefined() {
        assert_eq!(ItemType::from_raw(42), ItemType::Undefined);
        assert_eq!(VisibleType::from_raw(42), VisibleType::Undefined);
        assert_eq!(ActionType::from_raw(42), ActionType::Undefined);
        assert_eq!(CopyPasteState::from_raw(42), CopyPasteState::NoCopyPaste);
    }

    #[test]
    fn test_toolbar_lookup_and_filtering() {
        let mut toolbar = Toolbar::new();
        toolbar.push(copy_button());
        toolbar.push(ToolbarItem::new(
            "close",
            ItemType::Button,
            VisibleType::Always,
            ActionType::Close,
        ));

        assert!(toolbar.item("copy").is_some());
        assert!(toolbar.item("missing").is_none());

        let hidden = toolbar.visible_items(&HostState::default());
        assert_eq!(hidden.len(), 1);
        assert_eq!(hidden[0].name, "close");

        let shown = toolbar.visible_items(&HostState::with_selection());
        assert_eq!(shown.len(), 2);
    }

    #[test]
    fn test_group_membership_resolves_affected_items() {
        let mut toolbar = Toolbar::new();
        toolbar.push(button("close", ActionType::Close));

        let mut smiley = button("smiley", ActionType::SendString);
        smiley.text = Some(":-)".to_string());
        smiley.group_membership = Some("extras".to_string());
        toolbar.push(smiley);

        let mut frowny = button("frowny", ActionType::SendString);
        frowny.text = Some(":-(".to_string());
        frowny.group_membership = Some("extras".to_string());
        toolbar.push(frowny);

        let mut more = button("more", ActionType::ShowGroup);
        more.group = Some("extras".to_string());
        toolbar.push(more);

        // A ShowGroup effect names the group; membership maps it back to
        // the items the shell reveals or hides.
        let host = HostState::default();
        let effect = toolbar.item("more").unwrap().dispatch(&host);
        let Effect::ShowGroup(group) = effect else {
            panic!("expected ShowGroup, got {effect:?}");
        };
        let members: Vec<&str> = toolbar
            .group_items(&group)
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(members, vec!["smiley", "frowny"]);

        // Membership never overrides the visibility policy; the shell
        // intersects the two. With "extras" hidden, it drops the members
        // from the policy-visible set.
        let visible = toolbar.visible_items(&host);
        assert_eq!(visible.len(), 4);
        let rendered: Vec<&str> = visible
            .iter()
            .filter(|item| item.group_membership.as_deref() != Some("extras"))
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(rendered, vec!["close", "more"]);
    }
}
