//! Keyboard shortcut resolution, kept free of any toolkit types so the
//! mapping stays testable.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutKey {
    Character(char),
    Enter,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    ConfirmCrop,
    ResetSelection,
    Quit,
}

pub fn resolve_shortcut(key: ShortcutKey) -> Option<ShortcutAction> {
    match key {
        ShortcutKey::Enter => Some(ShortcutAction::ConfirmCrop),
        ShortcutKey::Escape | ShortcutKey::Character('q') => Some(ShortcutAction::Quit),
        ShortcutKey::Character('r') => Some(ShortcutAction::ResetSelection),
        ShortcutKey::Character(_) => None,
    }
}
