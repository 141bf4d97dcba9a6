// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu items: list items with a headline and an optional submenu.

use understory_list::ListItem;

/// An item that can live in a menu.
///
/// Every menu item is also a [`ListItem`], so menus navigate with the same roving focus
/// helpers as lists. The two capabilities are checked together by this bound rather than
/// by any base type.
pub trait MenuItem: ListItem {
    /// The visible headline text.
    fn headline(&self) -> &str;

    /// Close this item's submenu, if it has one.
    fn close(&mut self) {}
}

impl<T: MenuItem + ?Sized> MenuItem for &mut T {
    fn headline(&self) -> &str {
        (**self).headline()
    }

    fn close(&mut self) {
        (**self).close();
    }
}
