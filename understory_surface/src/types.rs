// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for surface positioning: logical sides, corners, text direction, and requests.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

/// One end of a logical axis.
///
/// On the block axis `Start` is the top and `End` is the bottom.
/// On the inline axis the physical side depends on the [`Direction`] of the surface.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    /// The start edge of the axis.
    Start,
    /// The end edge of the axis.
    End,
}

impl Side {
    /// Token used in corner names and CSS logical property suffixes.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "START",
            Self::End => "END",
        }
    }
}

/// A corner of a box in logical `<block>_<inline>` form.
///
/// Parse from the familiar tokens with [`str::parse`]; parsing ignores ASCII case and
/// surrounding whitespace:
///
/// ```
/// use understory_surface::{Corner, Side};
///
/// let corner: Corner = "  end_start ".parse().unwrap();
/// assert_eq!(corner, Corner::EndStart);
/// assert_eq!(corner.block(), Side::End);
/// assert_eq!(corner.inline(), Side::Start);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Corner {
    /// Block start, inline start.
    StartStart,
    /// Block start, inline end.
    StartEnd,
    /// Block end, inline start.
    EndStart,
    /// Block end, inline end.
    EndEnd,
}

impl Corner {
    /// Build a corner from its block and inline sides.
    pub const fn from_sides(block: Side, inline: Side) -> Self {
        match (block, inline) {
            (Side::Start, Side::Start) => Self::StartStart,
            (Side::Start, Side::End) => Self::StartEnd,
            (Side::End, Side::Start) => Self::EndStart,
            (Side::End, Side::End) => Self::EndEnd,
        }
    }

    /// The block-axis (vertical) component.
    pub const fn block(self) -> Side {
        match self {
            Self::StartStart | Self::StartEnd => Side::Start,
            Self::EndStart | Self::EndEnd => Side::End,
        }
    }

    /// The inline-axis (horizontal, direction aware) component.
    pub const fn inline(self) -> Side {
        match self {
            Self::StartStart | Self::EndStart => Side::Start,
            Self::StartEnd | Self::EndEnd => Side::End,
        }
    }

    /// The canonical token, e.g. `"END_START"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StartStart => "START_START",
            Self::StartEnd => "START_END",
            Self::EndStart => "END_START",
            Self::EndEnd => "END_END",
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a corner token is not one of the four known names.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown corner `{token}`, expected one of START_START, START_END, END_START, END_END")]
pub struct ParseCornerError {
    /// The trimmed token that failed to parse.
    pub token: String,
}

impl FromStr for Corner {
    type Err = ParseCornerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        [
            Self::StartStart,
            Self::StartEnd,
            Self::EndStart,
            Self::EndEnd,
        ]
        .into_iter()
        .find(|c| c.as_str().eq_ignore_ascii_case(token))
        .ok_or_else(|| ParseCornerError {
            token: String::from(token),
        })
    }
}

/// Resolved text direction of an element.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Left to right; inline start is the left edge.
    #[default]
    Ltr,
    /// Right to left; inline start is the right edge.
    Rtl,
}

/// Inputs to a positioning pass, read fresh from the host every cycle.
///
/// `E` is the host's element handle (a node id, a pointer-sized key, …).
/// Equality over every field is what the controller's dirty check compares.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PositionRequest<E> {
    /// The corner of the anchor to align to.
    pub anchor_corner: Corner,
    /// The corner of the surface that lands on `anchor_corner`.
    pub surface_corner: Corner,
    /// The surface being positioned, if resolved.
    pub surface: Option<E>,
    /// The anchor to align against, if resolved.
    pub anchor: Option<E>,
    /// Compute relative to the viewport rather than a positioned ancestor.
    ///
    /// This is the right choice when the surface is fixed, lives in the top
    /// layer, or shares no positioned ancestor with the anchor.
    pub is_top_layer: bool,
    /// Whether the surface should be open and visible.
    pub is_open: bool,
    /// Inline-axis offset in pixels. Positive moves toward inline end.
    pub x_offset: f64,
    /// Block-axis offset in pixels. Positive moves down.
    pub y_offset: f64,
}

impl<E> PositionRequest<E> {
    /// A closed request with no elements, aligning the surface's top start
    /// corner to the anchor's bottom start corner.
    pub const fn new() -> Self {
        Self {
            anchor_corner: Corner::EndStart,
            surface_corner: Corner::StartStart,
            surface: None,
            anchor: None,
            is_top_layer: false,
            is_open: false,
            x_offset: 0.0,
            y_offset: 0.0,
        }
    }
}

impl<E> Default for PositionRequest<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_components() {
        assert_eq!(Corner::StartEnd.block(), Side::Start);
        assert_eq!(Corner::StartEnd.inline(), Side::End);
        assert_eq!(Corner::EndEnd.block(), Side::End);
        assert_eq!(Corner::EndEnd.inline(), Side::End);
        for c in [
            Corner::StartStart,
            Corner::StartEnd,
            Corner::EndStart,
            Corner::EndEnd,
        ] {
            assert_eq!(Corner::from_sides(c.block(), c.inline()), c);
        }
    }

    #[test]
    fn corner_parse_normalizes_case_and_whitespace() {
        assert_eq!("START_END".parse::<Corner>(), Ok(Corner::StartEnd));
        assert_eq!("\tstart_start\n".parse::<Corner>(), Ok(Corner::StartStart));
        assert_eq!(" End_End".parse::<Corner>(), Ok(Corner::EndEnd));
    }

    #[test]
    fn corner_parse_rejects_unknown() {
        let err = "middle_start ".parse::<Corner>().unwrap_err();
        assert_eq!(err.token, "middle_start");
        assert!("START-START".parse::<Corner>().is_err());
        assert!("".parse::<Corner>().is_err());
    }

    #[test]
    fn corner_display_round_trips_token() {
        assert_eq!(alloc::format!("{}", Corner::EndStart), "END_START");
    }

    #[test]
    fn request_equality_tracks_every_field() {
        let a: PositionRequest<u32> = PositionRequest::new();
        let mut b = a;
        assert_eq!(a, b);
        b.y_offset = 2.0;
        assert_ne!(a, b);
        let mut c = a;
        c.anchor = Some(1);
        assert_ne!(a, c);
    }
}
