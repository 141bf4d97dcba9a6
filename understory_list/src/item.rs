// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The list item contract and a flag-based item for simple lists.

/// An item that can take part in roving focus.
///
/// The navigator reads [`is_disabled`](Self::is_disabled) and flips
/// [`set_active`](Self::set_active). Everything else about the item belongs to the host.
pub trait ListItem {
    /// Whether this item currently holds the roving focus.
    fn is_active(&self) -> bool;
    /// Set or clear the roving focus on this item.
    fn set_active(&mut self, active: bool);
    /// Disabled items are skipped by navigation.
    fn is_disabled(&self) -> bool;
}

bitflags::bitflags! {
    /// Item state flags.
    ///
    /// Implements [`ListItem`] directly, so a `[ItemFlags]` slice is a usable list.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        /// Item holds the roving focus.
        const ACTIVE   = 0b0000_0001;
        /// Item is skipped by navigation.
        const DISABLED = 0b0000_0010;
    }
}

impl ListItem for ItemFlags {
    #[inline]
    fn is_active(&self) -> bool {
        self.contains(Self::ACTIVE)
    }

    #[inline]
    fn set_active(&mut self, active: bool) {
        self.set(Self::ACTIVE, active);
    }

    #[inline]
    fn is_disabled(&self) -> bool {
        self.contains(Self::DISABLED)
    }
}

impl<T: ListItem + ?Sized> ListItem for &mut T {
    fn is_active(&self) -> bool {
        (**self).is_active()
    }

    fn set_active(&mut self, active: bool) {
        (**self).set_active(active);
    }

    fn is_disabled(&self) -> bool {
        (**self).is_disabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_drive_item_state() {
        let mut f = ItemFlags::DISABLED;
        assert!(f.is_disabled());
        assert!(!f.is_active());
        f.set_active(true);
        assert!(f.is_active());
        assert!(f.is_disabled(), "activation leaves other flags alone");
        f.set_active(false);
        assert_eq!(f, ItemFlags::DISABLED);
    }
}
