// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corner alignment and viewport clamping.
//!
//! ## Overview
//!
//! Given measured anchor and surface rectangles, this computes the two logical insets that
//! put the surface's corner on the anchor's corner, then pulls the surface back inside the
//! viewport if it would overflow past the inline end or block end.
//!
//! ```text
//! ┌───── top-layer offset
//! │     ┌─────────────────────────────┐ viewport
//! └──►  │  ┌──────┐                    │
//!       │  │anchor│                    │
//!       │  └──────┘                    │
//!       │     ┌────────────────────────┼────┐
//!       │     │ surface                │    │
//!       └─────┼────────────────────────┘    │ ◄── out of bounds correction
//!             └─────────────────────────────┘
//! ```
//!
//! The correction is never positive: a surface that fits is left where the alignment put it.

use kurbo::{Rect, Size};

use crate::style::Placement;
use crate::types::{Direction, PositionRequest, Side};

/// Measured inputs for a single positioning pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Measurements {
    /// Anchor bounds in viewport coordinates.
    pub anchor: Rect,
    /// Surface bounds in viewport coordinates, measured while transparent.
    pub surface: Rect,
    /// Resolved text direction of the surface (not the anchor).
    pub direction: Direction,
    /// Current viewport (window) size.
    pub viewport: Size,
}

/// Compute where the surface goes for `request` given `m`.
///
/// Element handles in `request` are not consulted; only corners, offsets, and the top layer
/// flag are. Values are plain pixels and are not rounded.
///
/// ```
/// use kurbo::{Rect, Size};
/// use understory_surface::{compute_placement, Corner, Direction, Measurements, PositionRequest};
///
/// let request = PositionRequest::<()> {
///     anchor_corner: Corner::EndStart,
///     surface_corner: Corner::StartStart,
///     is_top_layer: true,
///     ..PositionRequest::new()
/// };
/// let m = Measurements {
///     anchor: Rect::new(40.0, 20.0, 140.0, 60.0),
///     surface: Rect::new(0.0, 0.0, 200.0, 300.0),
///     direction: Direction::Ltr,
///     viewport: Size::new(1000.0, 800.0),
/// };
/// let p = compute_placement(&request, &m);
/// // Flush with the anchor's left edge, just below its bottom edge.
/// assert_eq!(p.inline, 40.0);
/// assert_eq!(p.block, 60.0);
/// ```
pub fn compute_placement<E>(request: &PositionRequest<E>, m: &Measurements) -> Placement {
    let surface_block = request.surface_corner.block();
    let surface_inline = request.surface_corner.inline();
    let anchor_block = request.anchor_corner.block();
    let anchor_inline = request.anchor_corner.inline();

    // Opposite sides: skip past the anchor's full extent.
    let inline_anchor_offset = if anchor_inline != surface_inline {
        m.anchor.width()
    } else {
        0.0
    } + request.x_offset;

    // Distance of the anchor from the viewport edge the surface's inline inset measures from.
    let inline_top_layer_offset = match (m.direction, surface_inline) {
        (Direction::Ltr, Side::Start) | (Direction::Rtl, Side::End) => m.anchor.x0,
        (Direction::Ltr, Side::End) | (Direction::Rtl, Side::Start) => {
            m.viewport.width - m.anchor.x1
        }
    };
    let inline_correction = 0.0_f64.min(
        m.viewport.width - inline_top_layer_offset - inline_anchor_offset - m.surface.width(),
    );
    let inline = top_layer(request.is_top_layer, inline_top_layer_offset)
        + inline_anchor_offset
        + inline_correction;

    let block_anchor_offset = if anchor_block != surface_block {
        m.anchor.height()
    } else {
        0.0
    } + request.y_offset;
    let block_top_layer_offset = match surface_block {
        Side::Start => m.anchor.y0,
        Side::End => m.viewport.height - m.anchor.y1,
    };
    let block_correction = 0.0_f64.min(
        m.viewport.height - block_top_layer_offset - block_anchor_offset - m.surface.height(),
    );
    let block = top_layer(request.is_top_layer, block_top_layer_offset)
        + block_anchor_offset
        + block_correction;

    Placement {
        block_side: surface_block,
        block,
        inline_side: surface_inline,
        inline,
    }
}

// Outside the top layer the insets are relative to a positioned ancestor, which already
// accounts for the anchor's position.
fn top_layer(is_top_layer: bool, offset: f64) -> f64 {
    if is_top_layer { offset } else { 0.0 }
}
