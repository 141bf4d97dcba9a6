// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keydown dispatch for roving focus.

use crate::item::ListItem;
use crate::navigate::{
    activate_first_item, activate_last_item, active_item, next_item, prev_item,
};

/// Keys that move the roving focus.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum NavigationKey {
    /// Next enabled item, wrapping.
    ArrowDown,
    /// Previous enabled item, wrapping.
    ArrowUp,
    /// First enabled item.
    Home,
    /// Last enabled item.
    End,
}

impl NavigationKey {
    /// Classify a DOM `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(Self::ArrowDown),
            "ArrowUp" => Some(Self::ArrowUp),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            _ => None,
        }
    }
}

/// What the host should do with the keyboard event after dispatch.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum KeyOutcome {
    /// Not a navigation key for this list; leave the default action alone.
    Ignored,
    /// The list handled the key; suppress the default action (scrolling, caret moves).
    PreventDefault,
}

/// Handle a keydown on a list.
///
/// Unknown keys and empty lists are [`Ignored`](KeyOutcome::Ignored). Otherwise the active
/// item is cleared first and then a new item is chosen, so at most one item is active
/// afterwards (assuming at most one was before).
///
/// ```
/// use understory_list::{ItemFlags, KeyOutcome, ListItem, handle_keydown};
///
/// let mut items = [ItemFlags::empty(); 3];
/// assert_eq!(handle_keydown("End", &mut items), KeyOutcome::PreventDefault);
/// assert!(items[2].is_active());
/// assert_eq!(handle_keydown("Tab", &mut items), KeyOutcome::Ignored);
/// ```
pub fn handle_keydown<I: ListItem>(key: &str, items: &mut [I]) -> KeyOutcome {
    match NavigationKey::from_key(key) {
        Some(key) => handle_navigation_key(key, items),
        None => KeyOutcome::Ignored,
    }
}

/// Move the roving focus for an already classified key.
///
/// `ArrowUp` with no active item activates the last item even when it is disabled.
/// The other keys skip disabled items in that case.
pub fn handle_navigation_key<I: ListItem>(key: NavigationKey, items: &mut [I]) -> KeyOutcome {
    if items.is_empty() {
        return KeyOutcome::Ignored;
    }

    let previous = active_item(items).map(|record| record.index);
    if let Some(index) = previous {
        items[index].set_active(false);
    }

    let activated = match (key, previous) {
        (NavigationKey::ArrowDown, Some(index)) => {
            let next = next_item(items, index);
            activate(items, next)
        }
        (NavigationKey::ArrowDown, None) | (NavigationKey::Home, _) => activate_first_item(items),
        (NavigationKey::ArrowUp, Some(index)) => {
            let prev = prev_item(items, index);
            activate(items, prev)
        }
        (NavigationKey::ArrowUp, None) => {
            let last = items.len() - 1;
            activate(items, Some(last))
        }
        (NavigationKey::End, _) => activate_last_item(items),
    };
    log::trace!("{key:?}: {previous:?} -> {activated:?}");

    KeyOutcome::PreventDefault
}

fn activate<I: ListItem>(items: &mut [I], index: Option<usize>) -> Option<usize> {
    let index = index?;
    items[index].set_active(true);
    Some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemFlags;

    const ON: ItemFlags = ItemFlags::empty();
    const OFF: ItemFlags = ItemFlags::DISABLED;
    const ACTIVE: ItemFlags = ItemFlags::ACTIVE;

    fn active_indices(items: &[ItemFlags]) -> alloc::vec::Vec<usize> {
        items
            .iter()
            .enumerate()
            .filter(|(_, i)| i.is_active())
            .map(|(n, _)| n)
            .collect()
    }

    #[test]
    fn classifies_navigation_keys() {
        assert_eq!(
            NavigationKey::from_key("ArrowDown"),
            Some(NavigationKey::ArrowDown)
        );
        assert_eq!(NavigationKey::from_key("End"), Some(NavigationKey::End));
        assert_eq!(NavigationKey::from_key("arrowdown"), None);
        assert_eq!(NavigationKey::from_key("ArrowLeft"), None);
    }

    #[test]
    fn other_keys_are_ignored_without_side_effects() {
        let mut items = [ON, ACTIVE, ON];
        assert_eq!(handle_keydown("Enter", &mut items), KeyOutcome::Ignored);
        assert_eq!(items, [ON, ACTIVE, ON]);
    }

    #[test]
    fn empty_list_does_not_prevent_default() {
        let mut items: [ItemFlags; 0] = [];
        assert_eq!(handle_keydown("ArrowDown", &mut items), KeyOutcome::Ignored);
    }

    #[test]
    fn all_disabled_still_prevents_default() {
        let mut items = [OFF, OFF];
        assert_eq!(handle_keydown("Home", &mut items), KeyOutcome::PreventDefault);
        assert!(active_indices(&items).is_empty());
    }

    #[test]
    fn arrow_down_skips_disabled() {
        let mut items = [ACTIVE, OFF, ON];
        handle_keydown("ArrowDown", &mut items);
        assert_eq!(active_indices(&items), [2]);
        handle_keydown("ArrowDown", &mut items);
        assert_eq!(active_indices(&items), [0], "wraps past the end");
    }

    #[test]
    fn arrow_down_without_active_picks_first_enabled() {
        let mut items = [OFF, ON, ON];
        handle_keydown("ArrowDown", &mut items);
        assert_eq!(active_indices(&items), [1]);
    }

    #[test]
    fn arrow_up_wraps_to_end() {
        let mut items = [ACTIVE, ON, OFF];
        handle_keydown("ArrowUp", &mut items);
        assert_eq!(active_indices(&items), [1]);
    }

    // Documented quirk: with nothing active, ArrowUp takes the last item even if disabled,
    // unlike ArrowDown, Home, and End.
    #[test]
    fn arrow_up_without_active_takes_last_item_even_if_disabled() {
        let mut items = [ON, ON, OFF];
        handle_keydown("ArrowUp", &mut items);
        assert_eq!(active_indices(&items), [2]);
    }

    #[test]
    fn lone_active_item_is_cleared_when_nothing_else_is_enabled() {
        let mut items = [OFF, ACTIVE, OFF];
        assert_eq!(
            handle_keydown("ArrowDown", &mut items),
            KeyOutcome::PreventDefault
        );
        assert!(active_indices(&items).is_empty());
    }

    #[test]
    fn end_up_home_scenario() {
        let mut items = [ON; 5];
        handle_keydown("End", &mut items);
        assert_eq!(active_indices(&items), [4]);
        handle_keydown("ArrowUp", &mut items);
        assert_eq!(active_indices(&items), [3]);
        handle_keydown("Home", &mut items);
        assert_eq!(active_indices(&items), [0]);
    }

    #[test]
    fn at_most_one_active_after_any_sequence() {
        let mut items = [ON, OFF, ON, ON, OFF, ON];
        for key in [
            "ArrowDown", "ArrowDown", "End", "ArrowUp", "Home", "ArrowUp", "ArrowUp", "x",
            "ArrowDown", "End", "ArrowDown",
        ] {
            handle_keydown(key, &mut items);
            assert!(
                active_indices(&items).len() <= 1,
                "more than one active item after {key}"
            );
        }
    }
}
