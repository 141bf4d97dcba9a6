// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_surface --heading-base-level=0

//! Understory Surface: anchored positioning for floating surfaces.
//!
//! Menus, popovers, and tooltips are surfaces that float next to an anchor element.
//! This crate computes where such a surface goes.
//!
//! - Aligns a logical [`Corner`] of the surface to a logical corner of the anchor.
//! - Respects text direction: inline start is the left edge in LTR and the right edge in RTL.
//! - Clamps the result so the surface does not overflow the viewport's inline or block end.
//! - Re-runs only when its inputs change, via [`SurfacePositionController`].
//!
//! ## Not a layout engine
//!
//! This crate solves one alignment-and-clamp problem. It does not measure anything itself:
//! the host reports element bounds, text direction, and the viewport size through
//! [`SurfaceHost`], and applies the resulting [`SurfaceStyles`] to its surface element.
//!
//! ## Measure then place
//!
//! A hidden surface has no size. [`SurfacePositionController::position`] therefore first
//! shows the surface transparently ([`SurfaceStyles::Measuring`]), asks the host to render,
//! awaits [`SurfaceHost::update_complete`], and only then measures and places it.
//! This is the only suspension point; hosts with synchronous measurement can call
//! [`compute_placement`] directly.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Rect, Size};
//! use understory_surface::{
//!     Corner, Direction, PositionRequest, SurfaceHost, SurfacePositionController, SurfaceStyles,
//! };
//!
//! struct Host {
//!     open: bool,
//! }
//!
//! impl SurfaceHost<u32> for Host {
//!     fn properties(&self) -> PositionRequest<u32> {
//!         PositionRequest {
//!             anchor_corner: Corner::EndStart,
//!             surface_corner: Corner::StartStart,
//!             anchor: Some(1),
//!             surface: Some(2),
//!             is_top_layer: true,
//!             is_open: self.open,
//!             ..PositionRequest::new()
//!         }
//!     }
//!     fn request_update(&mut self) {}
//!     fn update_complete(&mut self) -> impl Future<Output = ()> {
//!         core::future::ready(())
//!     }
//!     fn bounding_rect(&self, element: &u32) -> Rect {
//!         match element {
//!             1 => Rect::new(10.0, 10.0, 90.0, 40.0),
//!             _ => Rect::new(0.0, 0.0, 120.0, 200.0),
//!         }
//!     }
//!     fn direction(&self, _: &u32) -> Direction {
//!         Direction::Ltr
//!     }
//!     fn viewport(&self) -> Size {
//!         Size::new(800.0, 600.0)
//!     }
//! }
//!
//! let mut host = Host { open: true };
//! let mut controller = SurfacePositionController::new();
//! pollster::block_on(controller.host_updated(&mut host));
//! assert_eq!(
//!     controller.surface_styles().to_string(),
//!     "display: block; opacity: 1; inset-block-start: 40px; inset-inline-start: 10px"
//! );
//!
//! host.open = false;
//! pollster::block_on(controller.host_updated(&mut host));
//! assert_eq!(*controller.surface_styles(), SurfaceStyles::Hidden);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod geometry;
mod style;
mod types;

pub use controller::{SurfaceHost, SurfacePositionController};
pub use geometry::{Measurements, compute_placement};
pub use style::{Placement, SurfaceStyles};
pub use types::{Corner, Direction, ParseCornerError, PositionRequest, Side};
