// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The style descriptor the host applies to the surface element.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::types::Side;

/// Where the surface ended up, expressed as two logical insets.
///
/// The inset sides follow the surface corner: a `START_END` surface is placed with
/// `inset-block-start` and `inset-inline-end`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Which block inset property carries [`block`](Self::block).
    pub block_side: Side,
    /// Block-axis inset in pixels.
    pub block: f64,
    /// Which inline inset property carries [`inline`](Self::inline).
    pub inline_side: Side,
    /// Inline-axis inset in pixels.
    pub inline: f64,
}

impl Placement {
    /// CSS logical property name for the block inset.
    pub const fn block_property(&self) -> &'static str {
        match self.block_side {
            Side::Start => "inset-block-start",
            Side::End => "inset-block-end",
        }
    }

    /// CSS logical property name for the inline inset.
    pub const fn inline_property(&self) -> &'static str {
        match self.inline_side {
            Side::Start => "inset-inline-start",
            Side::End => "inset-inline-end",
        }
    }
}

/// Visibility and position of the surface.
///
/// - [`Hidden`](Self::Hidden): `display: none`.
/// - [`Measuring`](Self::Measuring): laid out but transparent so it can be measured.
/// - [`Placed`](Self::Placed): visible at the computed insets.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum SurfaceStyles {
    /// `display: none`.
    #[default]
    Hidden,
    /// `display: block; opacity: 0`.
    Measuring,
    /// `display: block; opacity: 1` plus one block and one inline inset.
    Placed(Placement),
}

impl SurfaceStyles {
    /// Whether the surface takes part in layout.
    pub const fn is_displayed(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// The descriptor as ordered `(property, value)` pairs.
    ///
    /// ```
    /// use understory_surface::{Placement, Side, SurfaceStyles};
    ///
    /// let styles = SurfaceStyles::Placed(Placement {
    ///     block_side: Side::Start,
    ///     block: 48.0,
    ///     inline_side: Side::End,
    ///     inline: 12.5,
    /// });
    /// let props = styles.properties();
    /// assert_eq!(props[2], ("inset-block-start", "48px".to_string()));
    /// assert_eq!(props[3], ("inset-inline-end", "12.5px".to_string()));
    /// ```
    pub fn properties(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Hidden => alloc::vec![("display", String::from("none"))],
            Self::Measuring => alloc::vec![
                ("display", String::from("block")),
                ("opacity", String::from("0")),
            ],
            Self::Placed(p) => alloc::vec![
                ("display", String::from("block")),
                ("opacity", String::from("1")),
                (p.block_property(), px(p.block)),
                (p.inline_property(), px(p.inline)),
            ],
        }
    }
}

impl fmt::Display for SurfaceStyles {
    /// Formats as a CSS declaration list, e.g. `display: block; opacity: 0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.properties().iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        Ok(())
    }
}

fn px(v: f64) -> String {
    // `-0` would otherwise print with its sign.
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{v}px")
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn hidden_and_measuring_descriptors() {
        assert_eq!(SurfaceStyles::Hidden.to_string(), "display: none");
        assert_eq!(
            SurfaceStyles::Measuring.to_string(),
            "display: block; opacity: 0"
        );
        assert!(!SurfaceStyles::Hidden.is_displayed());
        assert!(SurfaceStyles::Measuring.is_displayed());
    }

    #[test]
    fn placed_descriptor_uses_surface_sides() {
        let styles = SurfaceStyles::Placed(Placement {
            block_side: Side::End,
            block: 10.0,
            inline_side: Side::Start,
            inline: -4.25,
        });
        assert_eq!(
            styles.to_string(),
            "display: block; opacity: 1; inset-block-end: 10px; inset-inline-start: -4.25px"
        );
    }

    #[test]
    fn negative_zero_prints_plain() {
        assert_eq!(px(-0.0), "0px");
        assert_eq!(px(3.0), "3px");
    }
}
