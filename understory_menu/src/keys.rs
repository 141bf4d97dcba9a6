// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key classification for menus. Values are DOM `KeyboardEvent.key` / `code` strings.

/// Keys that move between menu items and in and out of submenus.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MenuNavigationKey {
    /// `ArrowUp`.
    Up,
    /// `ArrowDown`.
    Down,
    /// `ArrowRight`.
    Right,
    /// `ArrowLeft`.
    Left,
}

impl MenuNavigationKey {
    /// Classify a key value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            "ArrowRight" => Some(Self::Right),
            "ArrowLeft" => Some(Self::Left),
            _ => None,
        }
    }
}

/// `Space` key code.
pub const SPACE: &str = "Space";
/// `Enter` key code.
pub const ENTER: &str = "Enter";
/// `Escape` key code.
pub const ESCAPE: &str = "Escape";

/// Keys that select the active item.
pub const SELECTION_KEYS: [&str; 2] = [SPACE, ENTER];

/// Keys that close the menu.
pub const CLOSE_KEYS: [&str; 3] = [ESCAPE, SPACE, ENTER];

/// Whether `code` closes a menu.
pub fn is_closable_key(code: &str) -> bool {
    CLOSE_KEYS.contains(&code)
}

/// Whether `code` selects a menu item.
pub fn is_selectable_key(code: &str) -> bool {
    SELECTION_KEYS.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert!(is_closable_key("Escape"));
        assert!(is_closable_key("Enter"));
        assert!(is_closable_key("Space"));
        assert!(!is_closable_key("Tab"));
        assert!(is_selectable_key("Space"));
        assert!(!is_selectable_key("Escape"));
        assert_eq!(
            MenuNavigationKey::from_key("ArrowLeft"),
            Some(MenuNavigationKey::Left)
        );
        assert_eq!(MenuNavigationKey::from_key("Home"), None);
    }
}
