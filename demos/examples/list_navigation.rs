// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Roving focus over a list with a disabled item.
//!
//! Presses a fixed key sequence and prints which item is active after each key.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_demos --example list_navigation`

use understory_list::{ItemFlags, KeyOutcome, List, ListItem, active_item};

fn main() {
    env_logger::init();

    let names = ["Apple", "Banana", "Cherry", "Durian", "Elderberry"];
    let mut items = [ItemFlags::empty(); 5];
    items[2] = ItemFlags::DISABLED;

    let mut list = List::new();
    list.attribute_changed("data-aria-label", Some("Fruit"))
        .expect("label is a plain string");

    for key in ["ArrowDown", "ArrowDown", "ArrowDown", "End", "ArrowUp", "Home", "Tab"] {
        let outcome = list.handle_keydown(key, &mut items);
        let active = active_item(&items).map(|r| names[r.index]);
        println!("{key:>9}: {outcome:?}, active = {active:?}");
        if outcome == KeyOutcome::Ignored {
            assert_eq!(key, "Tab");
        }
    }

    assert!(items[0].is_active());
    assert_eq!(items.iter().filter(|i| i.is_active()).count(), 1);
}
