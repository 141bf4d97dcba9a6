// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Roving focus queries and moves over an ordered item slice.
//!
//! ## Overview
//!
//! Nothing here keeps state. The active item is whichever item reports
//! [`is_active`](crate::ListItem::is_active), and callers pass the current items on every call.
//!
//! Lookups return indices so callers can keep mutating the slice. Lookups that scan
//! from an index are circular and never land on the index they started from.
//!
//! The `activate_*` helpers do not clear the previously active item. Call
//! [`deactivate_active_item`] first when only one item may be active.

use crate::item::ListItem;

/// An item together with its position in the list.
#[derive(Debug)]
pub struct ItemRecord<'a, I> {
    /// The item.
    pub item: &'a I,
    /// Index of the item in the slice it was found in.
    pub index: usize,
}

impl<I> Clone for ItemRecord<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for ItemRecord<'_, I> {}

/// The first active item, or `None` if no item is active.
///
/// When several items are active the lowest index wins.
pub fn active_item<I: ListItem>(items: &[I]) -> Option<ItemRecord<'_, I>> {
    items
        .iter()
        .enumerate()
        .find(|(_, item)| item.is_active())
        .map(|(index, item)| ItemRecord { item, index })
}

/// Index of the first item that is not disabled.
pub fn first_activatable_item<I: ListItem>(items: &[I]) -> Option<usize> {
    items.iter().position(|item| !item.is_disabled())
}

/// Index of the last item that is not disabled.
pub fn last_activatable_item<I: ListItem>(items: &[I]) -> Option<usize> {
    items.iter().rposition(|item| !item.is_disabled())
}

/// Index of the next item after `index` that is not disabled, wrapping around the end.
///
/// `index` itself is never returned; with no other enabled item this returns `None`.
pub fn next_item<I: ListItem>(items: &[I], index: usize) -> Option<usize> {
    let len = items.len();
    (1..len)
        .map(|step| (index % len + step) % len)
        .find(|&i| !items[i].is_disabled())
}

/// Index of the previous item before `index` that is not disabled, wrapping around the start.
///
/// `index` itself is never returned; with no other enabled item this returns `None`.
pub fn prev_item<I: ListItem>(items: &[I], index: usize) -> Option<usize> {
    let len = items.len();
    (1..len)
        .map(|step| (index % len + len - step) % len)
        .find(|&i| !items[i].is_disabled())
}

/// Activate the first item that is not disabled and return its index.
pub fn activate_first_item<I: ListItem>(items: &mut [I]) -> Option<usize> {
    let index = first_activatable_item(items)?;
    items[index].set_active(true);
    log::trace!("activated first item {index}");
    Some(index)
}

/// Activate the last item that is not disabled and return its index.
pub fn activate_last_item<I: ListItem>(items: &mut [I]) -> Option<usize> {
    let index = last_activatable_item(items)?;
    items[index].set_active(true);
    log::trace!("activated last item {index}");
    Some(index)
}

/// Clear the first active item and return it.
pub fn deactivate_active_item<I: ListItem>(items: &mut [I]) -> Option<ItemRecord<'_, I>> {
    let index = active_item(items)?.index;
    items[index].set_active(false);
    Some(ItemRecord {
        item: &items[index],
        index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemFlags;
    use alloc::vec;
    use alloc::vec::Vec;

    const ON: ItemFlags = ItemFlags::empty();
    const OFF: ItemFlags = ItemFlags::DISABLED;
    const ACTIVE: ItemFlags = ItemFlags::ACTIVE;

    fn active_count(items: &[ItemFlags]) -> usize {
        items.iter().filter(|i| i.is_active()).count()
    }

    #[test]
    fn active_item_prefers_lowest_index() {
        let items = [ON, ACTIVE, ON, ACTIVE];
        let record = active_item(&items).unwrap();
        assert_eq!(record.index, 1);
        assert!(record.item.is_active());
        assert!(active_item(&[ON, ON]).is_none());
        assert!(active_item::<ItemFlags>(&[]).is_none());
    }

    #[test]
    fn first_and_last_skip_disabled() {
        let items = [OFF, ON, ON, OFF];
        assert_eq!(first_activatable_item(&items), Some(1));
        assert_eq!(last_activatable_item(&items), Some(2));
        assert_eq!(first_activatable_item(&[OFF, OFF]), None);
        assert_eq!(last_activatable_item::<ItemFlags>(&[]), None);
    }

    #[test]
    fn next_and_prev_wrap() {
        let items = [ON; 4];
        assert_eq!(next_item(&items, 3), Some(0));
        assert_eq!(prev_item(&items, 0), Some(3));
        assert_eq!(next_item(&items, 1), Some(2));
        assert_eq!(prev_item(&items, 2), Some(1));
    }

    #[test]
    fn next_and_prev_skip_disabled() {
        let items = [ON, OFF, ON, OFF];
        assert_eq!(next_item(&items, 0), Some(2));
        assert_eq!(next_item(&items, 2), Some(0));
        assert_eq!(prev_item(&items, 0), Some(2));
        assert_eq!(prev_item(&items, 2), Some(0));
    }

    #[test]
    fn next_and_prev_never_return_start() {
        let items = [OFF, ON, OFF];
        assert_eq!(next_item(&items, 1), None);
        assert_eq!(prev_item(&items, 1), None);
        assert_eq!(next_item(&[ON], 0), None);
        assert_eq!(prev_item::<ItemFlags>(&[], 0), None);
    }

    #[test]
    fn out_of_range_start_wraps_without_overflow() {
        let items = [ON; 3];
        // usize::MAX % 3 == 0
        assert_eq!(next_item(&items, usize::MAX), Some(1));
        assert_eq!(prev_item(&items, usize::MAX), Some(2));
        assert_eq!(next_item(&items, 4), Some(2));
    }

    #[test]
    fn activate_helpers_are_noops_when_all_disabled() {
        let mut items = vec![OFF; 3];
        assert_eq!(activate_first_item(&mut items), None);
        assert_eq!(activate_last_item(&mut items), None);
        assert_eq!(items, vec![OFF; 3]);
    }

    #[test]
    fn activate_does_not_deactivate_previous() {
        let mut items = vec![ON, ON, ACTIVE];
        assert_eq!(activate_first_item(&mut items), Some(0));
        assert_eq!(active_count(&items), 2);
    }

    #[test]
    fn deactivate_returns_record() {
        let mut items: Vec<ItemFlags> = vec![ON, ACTIVE, ON];
        let record = deactivate_active_item(&mut items).unwrap();
        assert_eq!(record.index, 1);
        assert!(!record.item.is_active());
        assert_eq!(active_count(&items), 0);
        assert!(deactivate_active_item(&mut items).is_none());
    }
}
