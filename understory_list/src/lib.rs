// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_list --heading-base-level=0

//! Understory List: roving focus over ordered, disableable items.
//!
//! ## Overview
//!
//! In a roving focus group exactly one item holds focus at a time and the arrow keys move it.
//! This crate implements that traversal over any slice of [`ListItem`]s:
//!
//! - [`handle_keydown`] maps `ArrowDown`, `ArrowUp`, `Home`, and `End` to a move and reports
//!   whether the host should suppress the key's default action.
//! - The [`navigate`](crate::navigate) helpers (`active_item`, `next_item`, `activate_first_item`, …)
//!   are the building blocks, usable on their own for menus and similar widgets.
//! - [`List`] carries the list widget's own attributes, reflected from markup through the
//!   small [`reflect`](crate::reflect) table helper.
//!
//! No item collection is cached. The host re-queries its items for every event and passes
//! them in, so membership can change freely between calls.
//!
//! ## Example
//!
//! ```
//! use understory_list::{ItemFlags, KeyOutcome, ListItem, handle_keydown};
//!
//! let mut items = [ItemFlags::empty(), ItemFlags::DISABLED, ItemFlags::empty()];
//!
//! // Nothing active yet: ArrowDown picks the first enabled item.
//! assert_eq!(handle_keydown("ArrowDown", &mut items), KeyOutcome::PreventDefault);
//! assert!(items[0].is_active());
//!
//! // The disabled item is skipped.
//! handle_keydown("ArrowDown", &mut items);
//! assert!(items[2].is_active());
//! assert!(!items[0].is_active());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod item;
mod keyboard;
mod list;

pub mod navigate;
pub mod reflect;

pub use item::{ItemFlags, ListItem};
pub use keyboard::{KeyOutcome, NavigationKey, handle_keydown, handle_navigation_key};
pub use list::{DEFAULT_ROLE, List};
pub use navigate::{
    ItemRecord, activate_first_item, activate_last_item, active_item, deactivate_active_item,
    first_activatable_item, last_activatable_item, next_item, prev_item,
};
pub use reflect::{
    AttributeBinding, AttributeKind, AttributeValue, ReflectError, reflect_attribute,
};
