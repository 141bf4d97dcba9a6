// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_menu --heading-base-level=0

//! Understory Menu: the menu protocol on top of lists and anchored surfaces.
//!
//! ## Overview
//!
//! A menu is a list of [`MenuItem`]s shown in a floating surface next to an anchor.
//! This crate connects the pieces:
//!
//! - [`Menu`] holds the open flag, anchoring inputs, and items. [`Menu::properties`] feeds a
//!   [`SurfacePositionController`](understory_surface::SurfacePositionController), and
//!   [`Menu::handle_keydown`] drives roving focus via [`understory_list`].
//! - Items talk to the menus around them with upward messages: [`CloseMenuEvent`] and
//!   [`DeactivateItemsEvent`], delivered innermost first by [`bubble`].
//! - [`keys`] classifies selection and closing keys.
//!
//! ## Example
//!
//! ```
//! use understory_list::{ItemFlags, ListItem};
//! use understory_menu::{CloseMenuEvent, Menu, MenuEvent, MenuItem, bubble};
//!
//! #[derive(Debug)]
//! struct Item(&'static str, ItemFlags);
//!
//! impl ListItem for Item {
//!     fn is_active(&self) -> bool { self.1.is_active() }
//!     fn set_active(&mut self, active: bool) { self.1.set_active(active) }
//!     fn is_disabled(&self) -> bool { self.1.is_disabled() }
//! }
//!
//! impl MenuItem for Item {
//!     fn headline(&self) -> &str { self.0 }
//! }
//!
//! let mut menu: Menu<u32, Item> = Menu::new();
//! menu.items = vec![Item("Cut", ItemFlags::empty()), Item("Copy", ItemFlags::empty())];
//! menu.show();
//!
//! menu.handle_keydown("End");
//! assert_eq!(menu.active_item().map(|i| i.headline()), Some("Copy"));
//!
//! // Enter on the active item closes every menu up the chain.
//! let mut event = MenuEvent::CloseMenu(CloseMenuEvent::keydown(1_u32, "Enter").unwrap());
//! bubble(&mut event, &mut [&mut menu]);
//! assert!(!menu.open);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod event;
mod item;
mod menu;

pub mod keys;

pub use event::{
    CLICK_SELECTION, CloseMenuEvent, DeactivateItemsEvent, DefaultReason, KEYDOWN, MenuEvent,
    MenuEventHandler, Outcome, Reason, bubble,
};
pub use item::MenuItem;
pub use menu::{DefaultFocus, Menu};
