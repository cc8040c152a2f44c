// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag controller: routes pointer events, tracks the drag phase, and
//! reports positions as [`DraggingUpdate`]s.
//!
//! ## Wiring
//!
//! | host event | handler |
//! |---|---|
//! | element `mouseenter` | [`DraggableManager::handle_mouse_enter`] |
//! | element `mouseleave` | [`DraggableManager::handle_mouse_leave`] |
//! | element `mousemove` | [`DraggableManager::handle_mouse_move`] |
//! | element `mousedown` | [`DraggableManager::handle_mouse_down`] |
//! | window `mousemove` / `mouseup` (while subscribed) | [`DraggableManager::handle_drag_event`] |
//! | window `resize` (while subscribed) | [`DraggableManager::handle_resize`] |
//!
//! Window subscriptions are requested from the [`DragHost`] as described in the
//! [`host`](crate::host) module.
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use kurbo::Point;
//! use understory_draggable::event::{MouseEvent, MouseEventKind};
//! use understory_draggable::host::ListenerTable;
//! use understory_draggable::{DraggableBounds, DraggableManager, DraggableOptions};
//!
//! let values = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&values);
//!
//! let host = Rc::new(ListenerTable::new());
//! let options: DraggableOptions = DraggableOptions::new(|_tag| {
//!     DraggableBounds::new(100.0, 200.0).with_value_range(0.0, 1.0)
//! })
//! .on_drag_move(move |update| sink.borrow_mut().push(update.value));
//! let mut manager = DraggableManager::new(Rc::clone(&host), options);
//!
//! let at = |kind, x| MouseEvent::new(kind, Point::new(x, 0.0));
//! manager.handle_mouse_down(&at(MouseEventKind::MouseDown, 150.0)).unwrap();
//! manager.handle_drag_event(&at(MouseEventKind::MouseMove, 200.0)).unwrap();
//! manager.handle_drag_event(&at(MouseEventKind::MouseMove, 400.0)).unwrap();
//! manager.handle_drag_event(&at(MouseEventKind::MouseUp, 400.0)).unwrap();
//!
//! assert_eq!(*values.borrow(), [0.5, 1.0]);
//! assert!(!manager.is_dragging());
//! ```

use alloc::string::String;
use core::fmt;

use crate::bounds::{BoundsCache, DraggableBounds, Position};
use crate::drag::DragPhase;
use crate::error::{EventChannel, InvalidEventKind};
use crate::event::{MouseEvent, MouseEventKind, PointerEvent};
use crate::host::{DragHost, GlobalListener, ManagerId};
use crate::options::{Callbacks, DraggableOptions};
use crate::update::{DraggingUpdate, UpdateKind};

/// Turns pointer events on one draggable element into [`DraggingUpdate`]s.
///
/// One controller handles one drag gesture at a time. It is created with the
/// element and must be [disposed](Self::dispose) when the element goes away;
/// dropping an undisposed controller disposes it.
pub struct DraggableManager<H: DragHost, E = MouseEvent> {
    id: ManagerId,
    host: H,
    tag: Option<String>,
    bounds: BoundsCache,
    phase: DragPhase,
    callbacks: Callbacks<E>,
    reset_bounds_on_resize: bool,
    disposed: bool,
}

impl<H: DragHost, E> fmt::Debug for DraggableManager<H, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DraggableManager")
            .field("id", &self.id)
            .field("tag", &self.tag)
            .field("bounds", &self.bounds)
            .field("phase", &self.phase)
            .field("callbacks", &self.callbacks)
            .field("reset_bounds_on_resize", &self.reset_bounds_on_resize)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}

impl<H: DragHost, E: PointerEvent> DraggableManager<H, E> {
    /// Creates a controller and, if resize invalidation is enabled, subscribes
    /// it to the host's resize notifications.
    pub fn new(host: H, options: DraggableOptions<E>) -> Self {
        let DraggableOptions {
            get_bounds,
            tag,
            reset_bounds_on_resize,
            callbacks,
        } = options;
        let id = ManagerId::next();
        if reset_bounds_on_resize {
            host.add_listener(id, GlobalListener::Resize);
        }
        tracing::debug!(%id, ?tag, reset_bounds_on_resize, "created draggable manager");
        Self {
            id,
            host,
            tag,
            bounds: BoundsCache::from_boxed(get_bounds),
            phase: DragPhase::Idle,
            callbacks,
            reset_bounds_on_resize,
            disposed: false,
        }
    }

    /// This controller's identity, as carried on its updates.
    #[must_use]
    pub fn id(&self) -> ManagerId {
        self.id
    }

    /// The configured tag.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// The host this controller registers listeners with.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns `true` while a drag gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase.is_dragging()
    }

    /// Returns `true` once [`dispose`](Self::dispose) has run.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// The bounds for the current interaction, measured on first use and
    /// cached until [`reset_bounds`](Self::reset_bounds) or a resize.
    pub fn bounds(&mut self) -> DraggableBounds {
        self.bounds.get(self.tag.as_deref())
    }

    /// Maps a client X coordinate through the current bounds.
    pub fn position(&mut self, client_x: f64) -> Position {
        self.bounds().position_for(client_x)
    }

    /// Forgets the cached bounds; the next mapping measures again.
    pub fn reset_bounds(&mut self) {
        self.bounds.reset();
    }

    /// Element `mouseenter` handler.
    pub fn handle_mouse_enter(&mut self, event: &E) -> Result<(), InvalidEventKind> {
        self.handle_hover_event(event)
    }

    /// Element `mousemove` handler. Ignored while dragging; window moves
    /// during a drag arrive through [`handle_drag_event`](Self::handle_drag_event).
    pub fn handle_mouse_move(&mut self, event: &E) -> Result<(), InvalidEventKind> {
        self.handle_hover_event(event)
    }

    /// Element `mouseleave` handler.
    pub fn handle_mouse_leave(&mut self, event: &E) -> Result<(), InvalidEventKind> {
        self.handle_hover_event(event)
    }

    /// Element `mousedown` handler.
    pub fn handle_mouse_down(&mut self, event: &E) -> Result<(), InvalidEventKind> {
        self.handle_drag_event(event)
    }

    /// Window resize handler. Drops cached bounds when resize invalidation is
    /// enabled.
    pub fn handle_resize(&mut self) {
        if self.reset_bounds_on_resize {
            tracing::trace!(id = %self.id, "window resized, dropping cached bounds");
            self.reset_bounds();
        }
    }

    /// Hover channel: enter, leave and move over the element.
    ///
    /// Does nothing while dragging or when the button is not the primary one.
    /// Any other event kind is a wiring error.
    fn handle_hover_event(&mut self, event: &E) -> Result<(), InvalidEventKind> {
        if self.is_dragging() || !event.button().is_primary() {
            return Ok(());
        }
        let kind = match event.kind() {
            MouseEventKind::MouseEnter => UpdateKind::MouseEnter,
            MouseEventKind::MouseLeave => UpdateKind::MouseLeave,
            MouseEventKind::MouseMove => UpdateKind::MouseMove,
            kind => {
                return Err(InvalidEventKind {
                    channel: EventChannel::Hover,
                    kind,
                });
            }
        };
        self.emit(kind, event);
        Ok(())
    }

    /// Drag channel: element `mousedown` plus window `mousemove` / `mouseup`.
    ///
    /// A primary press while idle starts a drag; a primary release while
    /// dragging ends it. Moves only count while dragging. Enter and leave are
    /// wiring errors. After [`dispose`](Self::dispose) every event is ignored,
    /// so a stale press cannot register window listeners again.
    pub fn handle_drag_event(&mut self, event: &E) -> Result<(), InvalidEventKind> {
        if self.disposed {
            return Ok(());
        }
        let kind = match event.kind() {
            MouseEventKind::MouseDown => {
                if !event.button().is_primary() || !self.phase.start(&self.host, self.id) {
                    return Ok(());
                }
                tracing::debug!(id = %self.id, client_x = event.client_x(), "drag started");
                UpdateKind::DragStart
            }
            MouseEventKind::MouseMove => {
                if !self.is_dragging() {
                    return Ok(());
                }
                UpdateKind::DragMove
            }
            MouseEventKind::MouseUp => {
                if !event.button().is_primary() || !self.phase.end(&self.host) {
                    return Ok(());
                }
                tracing::debug!(id = %self.id, client_x = event.client_x(), "drag ended");
                UpdateKind::DragEnd
            }
            kind => {
                return Err(InvalidEventKind {
                    channel: EventChannel::Drag,
                    kind,
                });
            }
        };
        self.emit(kind, event);
        Ok(())
    }

    /// Tears the controller down.
    ///
    /// An active drag is stopped without a [`UpdateKind::DragEnd`] update, the
    /// resize subscription is removed, cached bounds are dropped, and all
    /// callbacks are released so nothing fires afterwards. Calling this again
    /// does nothing.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        let was_dragging = self.release_host();
        self.bounds.reset();
        self.callbacks.clear();
        tracing::debug!(id = %self.id, was_dragging, "disposed draggable manager");
    }

    /// Builds an update for `event` and hands it to the callback for `kind`.
    ///
    /// Bounds are only measured when a callback is registered.
    fn emit(&mut self, kind: UpdateKind, event: &E) {
        let Some(callback) = self.callbacks.get_mut(kind) else {
            return;
        };
        let tag = self.tag.as_deref();
        let Position { value, x } = self.bounds.get(tag).position_for(event.client_x());
        tracing::trace!(id = %self.id, %kind, value, x, "dragging update");
        callback(&DraggingUpdate {
            kind,
            value,
            x,
            event,
            manager: self.id,
            tag,
        });
    }
}

impl<H: DragHost, E> DraggableManager<H, E> {
    /// Ends any drag without an update and drops every host subscription.
    /// Returns whether a drag was in progress.
    fn release_host(&mut self) -> bool {
        self.disposed = true;
        let was_dragging = self.phase.end(&self.host);
        if self.reset_bounds_on_resize {
            self.host.remove_listener(self.id, GlobalListener::Resize);
        }
        was_dragging
    }
}

impl<H: DragHost, E> Drop for DraggableManager<H, E> {
    fn drop(&mut self) {
        if !self.disposed {
            self.release_host();
        }
    }
}
