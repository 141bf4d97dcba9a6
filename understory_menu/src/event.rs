// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Upward messages from menu items to the menus that contain them.
//!
//! ## Overview
//!
//! A menu item asks its ancestors to close by building a [`CloseMenuEvent`] and passing it to
//! [`bubble`] together with its ancestor chain, innermost first. Each ancestor is a
//! [`MenuEventHandler`]; a submenu item typically appends itself to
//! [`CloseMenuEvent::item_path`] and closes its submenu, and a menu closes itself.
//! [`DeactivateItemsEvent`] asks the nearest menu to clear every item's active flag.
//!
//! Handlers return an [`Outcome`]; [`Outcome::Stop`] ends the walk.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::keys::is_closable_key;

/// Why a close was requested.
pub trait Reason {
    /// Reason kind, e.g. `"CLICK_SELECTION"`.
    fn kind(&self) -> &str;
}

/// Kind string of [`DefaultReason::ClickSelection`].
pub const CLICK_SELECTION: &str = "CLICK_SELECTION";
/// Kind string of [`DefaultReason::Keydown`].
pub const KEYDOWN: &str = "KEYDOWN";

/// The built-in close reasons.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DefaultReason {
    /// An item was selected by click.
    ClickSelection,
    /// A closing key was pressed; see [`is_closable_key`].
    Keydown {
        /// The key code that closed the menu.
        key: String,
    },
}

impl Reason for DefaultReason {
    fn kind(&self) -> &str {
        match self {
            Self::ClickSelection => CLICK_SELECTION,
            Self::Keydown { .. } => KEYDOWN,
        }
    }
}

/// Request that the menus containing `initiator` close.
#[derive(Clone, Debug, PartialEq)]
pub struct CloseMenuEvent<K, R = DefaultReason> {
    /// The item that requested the close.
    pub initiator: K,
    /// Why.
    pub reason: R,
    /// The initiator followed by every submenu item the event passed through.
    pub item_path: Vec<K>,
}

impl<K: Clone, R> CloseMenuEvent<K, R> {
    /// A close request whose path starts at `initiator`.
    pub fn new(initiator: K, reason: R) -> Self {
        Self {
            item_path: vec![initiator.clone()],
            initiator,
            reason,
        }
    }
}

impl<K: Clone> CloseMenuEvent<K, DefaultReason> {
    /// A close request for a click selection.
    pub fn click(initiator: K) -> Self {
        Self::new(initiator, DefaultReason::ClickSelection)
    }

    /// A close request for `code`, or `None` if that key does not close menus.
    pub fn keydown(initiator: K, code: &str) -> Option<Self> {
        is_closable_key(code).then(|| {
            Self::new(
                initiator,
                DefaultReason::Keydown {
                    key: String::from(code),
                },
            )
        })
    }
}

/// Request that the nearest menu deactivate all of its items.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct DeactivateItemsEvent;

/// Messages carried up the ancestor chain.
#[derive(Clone, Debug, PartialEq)]
pub enum MenuEvent<K, R = DefaultReason> {
    /// See [`CloseMenuEvent`].
    CloseMenu(CloseMenuEvent<K, R>),
    /// See [`DeactivateItemsEvent`].
    DeactivateItems(DeactivateItemsEvent),
}

/// Handler outcome controlling propagation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Pass the event on to the next ancestor.
    Continue,
    /// Stop here.
    Stop,
}

/// Something in the ancestor chain of a menu item.
pub trait MenuEventHandler<K, R = DefaultReason> {
    /// Handle `event`, which may be modified for outer ancestors.
    fn handle_menu_event(&mut self, event: &mut MenuEvent<K, R>) -> Outcome;
}

/// Deliver `event` to `ancestors`, innermost first, until one returns [`Outcome::Stop`].
///
/// Returns [`Outcome::Stop`] if a handler stopped the event.
///
/// ```
/// use understory_menu::{CloseMenuEvent, MenuEvent, MenuEventHandler, Outcome, bubble};
///
/// struct Submenu(u32);
/// impl MenuEventHandler<u32> for Submenu {
///     fn handle_menu_event(&mut self, event: &mut MenuEvent<u32>) -> Outcome {
///         if let MenuEvent::CloseMenu(close) = event {
///             close.item_path.push(self.0);
///         }
///         Outcome::Continue
///     }
/// }
///
/// let mut event = MenuEvent::CloseMenu(CloseMenuEvent::click(7));
/// let (mut a, mut b) = (Submenu(3), Submenu(1));
/// assert_eq!(bubble(&mut event, &mut [&mut a, &mut b]), Outcome::Continue);
/// let MenuEvent::CloseMenu(close) = event else { unreachable!() };
/// assert_eq!(close.item_path, [7, 3, 1]);
/// ```
pub fn bubble<K, R>(
    event: &mut MenuEvent<K, R>,
    ancestors: &mut [&mut dyn MenuEventHandler<K, R>],
) -> Outcome {
    for handler in ancestors.iter_mut() {
        if handler.handle_menu_event(event) == Outcome::Stop {
            return Outcome::Stop;
        }
    }
    Outcome::Continue
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        id: u32,
        stop: bool,
        seen: Vec<u32>,
    }

    impl MenuEventHandler<u32> for Recorder {
        fn handle_menu_event(&mut self, event: &mut MenuEvent<u32>) -> Outcome {
            if let MenuEvent::CloseMenu(close) = event {
                self.seen.extend_from_slice(&close.item_path);
                close.item_path.push(self.id);
            }
            if self.stop {
                Outcome::Stop
            } else {
                Outcome::Continue
            }
        }
    }

    fn recorder(id: u32, stop: bool) -> Recorder {
        Recorder {
            id,
            stop,
            seen: Vec::new(),
        }
    }

    #[test]
    fn close_event_path_starts_with_initiator() {
        let e = CloseMenuEvent::click(4_u32);
        assert_eq!(e.initiator, 4);
        assert_eq!(e.item_path, [4]);
        assert_eq!(e.reason.kind(), CLICK_SELECTION);
    }

    #[test]
    fn keydown_close_only_for_closing_keys() {
        let e = CloseMenuEvent::keydown(1_u32, "Escape").unwrap();
        assert_eq!(
            e.reason,
            DefaultReason::Keydown {
                key: String::from("Escape")
            }
        );
        assert_eq!(e.reason.kind(), KEYDOWN);
        assert!(CloseMenuEvent::keydown(1_u32, "ArrowDown").is_none());
    }

    #[test]
    fn bubble_walks_inner_to_outer() {
        let mut inner = recorder(10, false);
        let mut outer = recorder(20, false);
        let mut event = MenuEvent::CloseMenu(CloseMenuEvent::click(1));
        let out = bubble(&mut event, &mut [&mut inner, &mut outer]);
        assert_eq!(out, Outcome::Continue);
        assert_eq!(inner.seen, [1]);
        assert_eq!(outer.seen, [1, 10]);
    }

    #[test]
    fn bubble_stops() {
        let mut inner = recorder(10, true);
        let mut outer = recorder(20, false);
        let mut event = MenuEvent::CloseMenu(CloseMenuEvent::click(1));
        let out = bubble(&mut event, &mut [&mut inner, &mut outer]);
        assert_eq!(out, Outcome::Stop);
        assert!(outer.seen.is_empty(), "outer never sees a stopped event");
    }

    #[test]
    fn custom_reason() {
        struct Timeout;
        impl Reason for Timeout {
            fn kind(&self) -> &str {
                "TIMEOUT"
            }
        }
        let e: CloseMenuEvent<u8, Timeout> = CloseMenuEvent::new(2, Timeout);
        assert_eq!(e.reason.kind(), "TIMEOUT");
    }
}
