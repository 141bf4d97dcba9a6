// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu state: open flag, anchoring inputs, and items.

use alloc::vec::Vec;

use understory_list::reflect::{
    AttributeBinding, AttributeKind, AttributeValue, ReflectError, reflect_attribute,
};
use understory_list::{KeyOutcome, activate_first_item, activate_last_item, handle_keydown};
use understory_surface::{Corner, PositionRequest};

use crate::event::{MenuEvent, MenuEventHandler, Outcome};
use crate::item::MenuItem;

/// Which item receives focus when the menu opens.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum DefaultFocus {
    /// Leave items alone; focus stays on the list root.
    #[default]
    ListRoot,
    /// Activate the first enabled item.
    FirstItem,
    /// Activate the last enabled item.
    LastItem,
    /// Do not move focus at all.
    None,
}

/// A menu anchored to another element.
///
/// `E` is the host's element handle, `I` the item type. The host renders the surface with
/// the styles of a [`SurfacePositionController`](understory_surface::SurfacePositionController)
/// whose [`SurfaceHost::properties`](understory_surface::SurfaceHost::properties) come from
/// [`Menu::properties`].
#[derive(Clone, Debug)]
pub struct Menu<E, I> {
    /// Corner of the anchor the menu aligns to (`anchor-corner`).
    pub anchor_corner: Corner,
    /// Corner of the menu placed on the anchor corner (`menu-corner`).
    pub menu_corner: Corner,
    /// Inline offset in pixels (`x-offset`).
    pub x_offset: f64,
    /// Block offset in pixels (`y-offset`).
    pub y_offset: f64,
    /// Position relative to the viewport rather than a positioned ancestor (`fixed`).
    pub fixed: bool,
    /// Whether the menu is open (`open`).
    pub open: bool,
    /// Focus behavior on open (`default-focus`).
    pub default_focus: DefaultFocus,
    /// The element the menu is anchored to.
    pub anchor: Option<E>,
    /// The menu's own surface element.
    pub surface: Option<E>,
    /// The menu's items, in order.
    pub items: Vec<I>,
}

impl<E, I> Default for Menu<E, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, I> Menu<E, I> {
    /// Attributes reflected into menu fields.
    pub fn attributes() -> [AttributeBinding<Self>; 7] {
        [
            AttributeBinding {
                attribute: "anchor-corner",
                field: "anchor_corner",
                kind: AttributeKind::String,
                apply: |m, v| set_corner(&mut m.anchor_corner, v, Corner::EndStart),
                on_change: None,
            },
            AttributeBinding {
                attribute: "menu-corner",
                field: "menu_corner",
                kind: AttributeKind::String,
                apply: |m, v| set_corner(&mut m.menu_corner, v, Corner::StartStart),
                on_change: None,
            },
            AttributeBinding {
                attribute: "x-offset",
                field: "x_offset",
                kind: AttributeKind::Number,
                apply: |m, v| set_number(&mut m.x_offset, v),
                on_change: None,
            },
            AttributeBinding {
                attribute: "y-offset",
                field: "y_offset",
                kind: AttributeKind::Number,
                apply: |m, v| set_number(&mut m.y_offset, v),
                on_change: None,
            },
            AttributeBinding {
                attribute: "fixed",
                field: "fixed",
                kind: AttributeKind::Boolean,
                apply: |m, v| set_bool(&mut m.fixed, v),
                on_change: None,
            },
            AttributeBinding {
                attribute: "open",
                field: "open",
                kind: AttributeKind::Boolean,
                apply: |m, v| set_bool(&mut m.open, v),
                on_change: None,
            },
            AttributeBinding {
                attribute: "default-focus",
                field: "default_focus",
                kind: AttributeKind::String,
                apply: set_default_focus,
                on_change: None,
            },
        ]
    }

    /// A closed menu below its anchor, start edges aligned.
    pub const fn new() -> Self {
        Self {
            anchor_corner: Corner::EndStart,
            menu_corner: Corner::StartStart,
            x_offset: 0.0,
            y_offset: 0.0,
            fixed: false,
            open: false,
            default_focus: DefaultFocus::ListRoot,
            anchor: None,
            surface: None,
            items: Vec::new(),
        }
    }

    /// Reflect an attribute change from markup. `value` is `None` on removal.
    pub fn attribute_changed(
        &mut self,
        name: &str,
        value: Option<&str>,
    ) -> Result<bool, ReflectError> {
        reflect_attribute(&Self::attributes(), self, name, value)
    }
}

impl<E: Copy, I> Menu<E, I> {
    /// The positioning inputs for this menu's surface.
    pub fn properties(&self) -> PositionRequest<E> {
        PositionRequest {
            anchor_corner: self.anchor_corner,
            surface_corner: self.menu_corner,
            surface: self.surface,
            anchor: self.anchor,
            is_top_layer: self.fixed,
            is_open: self.open,
            x_offset: self.x_offset,
            y_offset: self.y_offset,
        }
    }
}

impl<E, I: MenuItem> Menu<E, I> {
    /// Open the menu.
    pub fn show(&mut self) {
        self.open = true;
    }

    /// Close the menu and any open submenus of its items.
    pub fn close(&mut self) {
        self.open = false;
        for item in &mut self.items {
            item.close();
        }
    }

    /// Apply [`default_focus`](Self::default_focus). Call once the surface has opened.
    ///
    /// Returns the index of the item that became active, if any.
    pub fn focus_on_open(&mut self) -> Option<usize> {
        match self.default_focus {
            DefaultFocus::FirstItem => activate_first_item(&mut self.items),
            DefaultFocus::LastItem => activate_last_item(&mut self.items),
            DefaultFocus::ListRoot | DefaultFocus::None => None,
        }
    }

    /// Move the roving focus between items.
    pub fn handle_keydown(&mut self, key: &str) -> KeyOutcome {
        handle_keydown(key, &mut self.items)
    }

    /// Clear every item's active flag.
    pub fn deactivate_items(&mut self) {
        for item in &mut self.items {
            item.set_active(false);
        }
    }

    /// The currently active item, if any.
    pub fn active_item(&self) -> Option<&I> {
        understory_list::active_item(&self.items).map(|record| record.item)
    }
}

impl<K, R, E, I: MenuItem> MenuEventHandler<K, R> for Menu<E, I> {
    /// Close requests close this menu and keep bubbling so outer menus close too.
    /// Deactivation requests are handled here and stop.
    fn handle_menu_event(&mut self, event: &mut MenuEvent<K, R>) -> Outcome {
        match event {
            MenuEvent::CloseMenu(_) => {
                log::debug!("menu closing on request");
                self.close();
                Outcome::Continue
            }
            MenuEvent::DeactivateItems(_) => {
                self.deactivate_items();
                Outcome::Stop
            }
        }
    }
}

fn set_corner(field: &mut Corner, value: AttributeValue<'_>, default: Corner) -> Option<bool> {
    let AttributeValue::String(raw) = value else {
        return None;
    };
    let corner = match raw {
        Some(raw) => raw.parse().ok()?,
        None => default,
    };
    let changed = *field != corner;
    *field = corner;
    Some(changed)
}

fn set_number(field: &mut f64, value: AttributeValue<'_>) -> Option<bool> {
    let AttributeValue::Number(n) = value else {
        return None;
    };
    let n = n.unwrap_or(0.0);
    let changed = *field != n;
    *field = n;
    Some(changed)
}

fn set_bool(field: &mut bool, value: AttributeValue<'_>) -> Option<bool> {
    let AttributeValue::Boolean(b) = value else {
        return None;
    };
    let changed = *field != b;
    *field = b;
    Some(changed)
}

fn set_default_focus<E, I>(menu: &mut Menu<E, I>, value: AttributeValue<'_>) -> Option<bool> {
    let AttributeValue::String(raw) = value else {
        return None;
    };
    let focus = match raw.map(str::trim) {
        None | Some("list-root") => DefaultFocus::ListRoot,
        Some("first-item") => DefaultFocus::FirstItem,
        Some("last-item") => DefaultFocus::LastItem,
        Some("none") => DefaultFocus::None,
        Some(_) => return None,
    };
    let changed = menu.default_focus != focus;
    menu.default_focus = focus;
    Some(changed)
}
