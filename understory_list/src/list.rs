// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! List widget state.

use alloc::string::String;

use crate::item::ListItem;
use crate::keyboard::{KeyOutcome, handle_keydown};
use crate::reflect::{
    AttributeBinding, AttributeKind, AttributeValue, ReflectError, reflect_attribute,
    set_optional_string,
};

/// Default accessibility role of a list.
pub const DEFAULT_ROLE: &str = "list";

/// State of a list widget.
///
/// The host owns the items and renders them; the list only carries its own attributes and
/// dispatches keyboard navigation over whatever items the host passes in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct List {
    /// Accessible label (`data-aria-label`).
    pub aria_label: Option<String>,
    /// Id of the active descendant (`data-aria-activedescendant`).
    pub aria_activedescendant: Option<String>,
    /// Accessibility role (`data-role`), `"list"` by default.
    pub role: String,
    /// Tab index of the list root (`listtabindex`).
    pub list_tab_index: i32,
    needs_render: bool,
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

impl List {
    /// Attributes reflected into list fields.
    pub const ATTRIBUTES: &'static [AttributeBinding<Self>] = &[
        AttributeBinding {
            attribute: "data-aria-label",
            field: "aria_label",
            kind: AttributeKind::String,
            apply: |l, v| set_optional_string(&mut l.aria_label, v),
            on_change: Some(Self::mark_dirty),
        },
        AttributeBinding {
            attribute: "data-aria-activedescendant",
            field: "aria_activedescendant",
            kind: AttributeKind::String,
            apply: |l, v| set_optional_string(&mut l.aria_activedescendant, v),
            on_change: Some(Self::mark_dirty),
        },
        AttributeBinding {
            attribute: "data-role",
            field: "role",
            kind: AttributeKind::String,
            apply: Self::set_role,
            on_change: Some(Self::mark_dirty),
        },
        AttributeBinding {
            attribute: "listtabindex",
            field: "list_tab_index",
            kind: AttributeKind::Number,
            apply: Self::set_tab_index,
            on_change: Some(Self::mark_dirty),
        },
    ];

    /// A list with the default role and tab index 0.
    pub fn new() -> Self {
        Self {
            aria_label: None,
            aria_activedescendant: None,
            role: String::from(DEFAULT_ROLE),
            list_tab_index: 0,
            needs_render: false,
        }
    }

    /// Handle a keydown on the list. See [`handle_keydown`](crate::handle_keydown).
    ///
    /// Pass the current items on every call; the list does not keep them.
    pub fn handle_keydown<I: ListItem>(&self, key: &str, items: &mut [I]) -> KeyOutcome {
        handle_keydown(key, items)
    }

    /// Reflect an attribute change from markup. `value` is `None` on removal.
    ///
    /// Returns whether a field changed.
    pub fn attribute_changed(
        &mut self,
        name: &str,
        value: Option<&str>,
    ) -> Result<bool, ReflectError> {
        reflect_attribute(Self::ATTRIBUTES, self, name, value)
    }

    /// Whether a reflected field changed since the last [`take_needs_render`](Self::take_needs_render).
    pub fn needs_render(&self) -> bool {
        self.needs_render
    }

    /// Clear and return the render flag.
    pub fn take_needs_render(&mut self) -> bool {
        core::mem::take(&mut self.needs_render)
    }

    fn mark_dirty(&mut self, _field: &'static str) {
        self.needs_render = true;
    }

    fn set_role(&mut self, value: AttributeValue<'_>) -> Option<bool> {
        let AttributeValue::String(raw) = value else {
            return None;
        };
        let role = raw.unwrap_or(DEFAULT_ROLE);
        if self.role == role {
            return Some(false);
        }
        self.role = String::from(role);
        Some(true)
    }

    fn set_tab_index(&mut self, value: AttributeValue<'_>) -> Option<bool> {
        let AttributeValue::Number(n) = value else {
            return None;
        };
        let n = n.unwrap_or(0.0);
        if !n.is_finite() {
            return None;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "tab indices are small integers; fractions truncate like markup does"
        )]
        let index = n as i32;
        let changed = self.list_tab_index != index;
        self.list_tab_index = index;
        Some(changed)
    }
}
