// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reactive controller: dirty checking, measure-then-place, and close sequencing.
//!
//! ## Lifecycle
//!
//! The host calls [`SurfacePositionController::host_update`] before it renders and
//! [`SurfacePositionController::host_updated`] after. Both run the same dirty check:
//!
//! | changed | anchor and surface | open | action |
//! |---|---|---|---|
//! | no | any | any | nothing |
//! | yes | missing | any | nothing |
//! | yes | present | yes | snapshot the request, [`position`](SurfacePositionController::position), then `on_open` |
//! | yes | present | no, was open | await `before_close`, hide, then `on_close` |
//! | yes | present | no, was closed | nothing |
//!
//! Only the open flag is remembered while closed, so a closed surface whose other inputs
//! change is not measured again until it opens.
//!
//! ## Reentrancy
//!
//! Every entry point borrows the controller mutably for its whole duration, including the
//! wait for the host to settle. Overlapping update cycles are therefore serialized by the
//! borrow checker rather than raced.

use core::future::Future;

use kurbo::{Rect, Size};

use crate::geometry::{Measurements, compute_placement};
use crate::style::SurfaceStyles;
use crate::types::{Direction, PositionRequest};

/// What the controller needs from the element that owns it.
///
/// `E` is the element handle type shared with [`PositionRequest`].
pub trait SurfaceHost<E> {
    /// The current inputs. Called fresh on every check and every positioning pass.
    fn properties(&self) -> PositionRequest<E>;

    /// Mark the host dirty so that it re-renders with the controller's new styles.
    fn request_update(&mut self);

    /// Resolves once the pending render (if any) has been committed and laid out.
    fn update_complete(&mut self) -> impl Future<Output = ()>;

    /// Bounds of `element` in viewport coordinates.
    fn bounding_rect(&self, element: &E) -> Rect;

    /// Resolved text direction of `element`.
    fn direction(&self, element: &E) -> Direction;

    /// Current viewport size.
    fn viewport(&self) -> Size;

    /// Called after the surface has been positioned.
    fn on_open(&mut self) {}

    /// Called before the surface is hidden, while it is still visible.
    ///
    /// The close sequence waits for this to resolve; a good time to run exit animations.
    fn before_close(&mut self) -> impl Future<Output = ()> {
        core::future::ready(())
    }

    /// Called after the surface has been hidden.
    fn on_close(&mut self) {}
}

#[derive(Copy, Clone, Debug)]
struct LastValues<E> {
    // Full snapshot from the last reposition; `None` until the first open.
    request: Option<PositionRequest<E>>,
    is_open: bool,
}

/// Positions a surface against an anchor whenever its inputs change.
///
/// Read [`surface_styles`](Self::surface_styles) when rendering the surface.
#[derive(Clone, Debug)]
pub struct SurfacePositionController<E> {
    styles: SurfaceStyles,
    last_values: LastValues<E>,
}

impl<E> Default for SurfacePositionController<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> SurfacePositionController<E> {
    /// Create a controller with a hidden surface and nothing remembered.
    pub const fn new() -> Self {
        Self {
            styles: SurfaceStyles::Hidden,
            last_values: LastValues {
                request: None,
                is_open: false,
            },
        }
    }

    /// The styles to apply to the surface element.
    pub fn surface_styles(&self) -> &SurfaceStyles {
        &self.styles
    }

    /// Hide the surface.
    ///
    /// Change detection state is kept, so reopening with identical inputs still counts as a
    /// change of the open flag.
    pub fn close<H: SurfaceHost<E>>(&mut self, host: &mut H) {
        self.styles = SurfaceStyles::Hidden;
        host.request_update();
    }
}

impl<E: Copy + PartialEq> SurfacePositionController<E> {
    /// Measure the surface and anchor and place the surface.
    ///
    /// Does nothing when either element is missing. Otherwise the surface is first displayed
    /// transparently, the host is asked to render and awaited so that real sizes can be
    /// measured, and the final placement is then committed with another update request.
    pub async fn position<H: SurfaceHost<E>>(&mut self, host: &mut H) {
        let request = host.properties();
        let (Some(surface), Some(anchor)) = (request.surface, request.anchor) else {
            return;
        };

        self.styles = SurfaceStyles::Measuring;
        host.request_update();
        host.update_complete().await;

        let m = Measurements {
            anchor: host.bounding_rect(&anchor),
            surface: host.bounding_rect(&surface),
            direction: host.direction(&surface),
            viewport: host.viewport(),
        };
        let placement = compute_placement(&request, &m);
        log::debug!(
            "surface {} -> anchor {}: block {} inline {}",
            request.surface_corner,
            request.anchor_corner,
            placement.block,
            placement.inline
        );

        self.styles = SurfaceStyles::Placed(placement);
        host.request_update();
    }

    /// Run the dirty check. Call before the host renders.
    pub async fn host_update<H: SurfaceHost<E>>(&mut self, host: &mut H) {
        self.on_update(host).await;
    }

    /// Run the dirty check. Call after the host has rendered.
    pub async fn host_updated<H: SurfaceHost<E>>(&mut self, host: &mut H) {
        self.on_update(host).await;
    }

    /// Reposition if the inputs changed while open, or close if the surface just closed.
    ///
    /// See the module docs for the full decision table.
    pub async fn on_update<H: SurfaceHost<E>>(&mut self, host: &mut H) {
        let props = host.properties();
        let has_changed = self.has_changed(&props);
        let open_changed = self.last_values.is_open != props.is_open;
        if !has_changed || props.anchor.is_none() || props.surface.is_none() {
            return;
        }

        self.last_values.is_open = props.is_open;
        if props.is_open {
            log::trace!("surface inputs changed while open, repositioning");
            self.last_values.request = Some(props);
            self.position(host).await;
            host.on_open();
        } else if open_changed {
            log::trace!("surface closing");
            host.before_close().await;
            self.close(host);
            host.on_close();
        }
    }

    fn has_changed(&self, props: &PositionRequest<E>) -> bool {
        match self.last_values.request {
            None => true,
            Some(prev) => {
                let prev = PositionRequest {
                    is_open: self.last_values.is_open,
                    ..prev
                };
                prev != *props
            }
        }
    }
}
