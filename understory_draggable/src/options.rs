// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction options for a [`DraggableManager`](crate::DraggableManager).

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::bounds::{BoundsProvider, DraggableBounds};
use crate::event::MouseEvent;
use crate::update::{DraggingUpdate, UpdateKind};

/// A boxed update callback.
pub type Callback<E> = Box<dyn FnMut(&DraggingUpdate<'_, E>)>;

/// The optional callbacks, one per [`UpdateKind`].
pub(crate) struct Callbacks<E> {
    on_mouse_enter: Option<Callback<E>>,
    on_mouse_leave: Option<Callback<E>>,
    on_mouse_move: Option<Callback<E>>,
    on_drag_start: Option<Callback<E>>,
    on_drag_move: Option<Callback<E>>,
    on_drag_end: Option<Callback<E>>,
}

impl<E> Default for Callbacks<E> {
    fn default() -> Self {
        Self {
            on_mouse_enter: None,
            on_mouse_leave: None,
            on_mouse_move: None,
            on_drag_start: None,
            on_drag_move: None,
            on_drag_end: None,
        }
    }
}

impl<E> Callbacks<E> {
    fn slot_mut(&mut self, kind: UpdateKind) -> &mut Option<Callback<E>> {
        match kind {
            UpdateKind::MouseEnter => &mut self.on_mouse_enter,
            UpdateKind::MouseLeave => &mut self.on_mouse_leave,
            UpdateKind::MouseMove => &mut self.on_mouse_move,
            UpdateKind::DragStart => &mut self.on_drag_start,
            UpdateKind::DragMove => &mut self.on_drag_move,
            UpdateKind::DragEnd => &mut self.on_drag_end,
        }
    }

    /// The callback registered for `kind`, if any.
    pub(crate) fn get_mut(&mut self, kind: UpdateKind) -> Option<&mut Callback<E>> {
        self.slot_mut(kind).as_mut()
    }

    /// Drops every callback.
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }

    fn registered(&self) -> usize {
        [
            &self.on_mouse_enter,
            &self.on_mouse_leave,
            &self.on_mouse_move,
            &self.on_drag_start,
            &self.on_drag_move,
            &self.on_drag_end,
        ]
        .into_iter()
        .filter(|slot| slot.is_some())
        .count()
    }
}

impl<E> fmt::Debug for Callbacks<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("registered", &self.registered())
            .finish_non_exhaustive()
    }
}

/// Configuration for a drag controller.
///
/// Only the bounds provider is required. Every callback is optional; an
/// update with no registered callback is dropped without measuring bounds.
///
/// ```
/// use understory_draggable::{DraggableBounds, DraggableOptions};
///
/// let options: DraggableOptions = DraggableOptions::new(|_tag| DraggableBounds::new(0.0, 640.0))
///     .with_tag("minimap")
///     .with_reset_bounds_on_resize(false)
///     .on_drag_move(|update| {
///         assert!(update.kind.is_drag());
///     });
/// assert_eq!(options.tag(), Some("minimap"));
/// ```
pub struct DraggableOptions<E = MouseEvent> {
    pub(crate) get_bounds: Box<dyn BoundsProvider>,
    pub(crate) tag: Option<String>,
    pub(crate) reset_bounds_on_resize: bool,
    pub(crate) callbacks: Callbacks<E>,
}

impl<E> fmt::Debug for DraggableOptions<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DraggableOptions")
            .field("tag", &self.tag)
            .field("reset_bounds_on_resize", &self.reset_bounds_on_resize)
            .field("callbacks", &self.callbacks)
            .finish_non_exhaustive()
    }
}

impl<E> DraggableOptions<E> {
    /// Options with the given bounds provider, no tag, resize invalidation
    /// enabled, and no callbacks.
    pub fn new<F>(get_bounds: F) -> Self
    where
        F: FnMut(Option<&str>) -> DraggableBounds + 'static,
    {
        Self::with_provider(get_bounds)
    }

    /// Like [`new`](Self::new), for providers that are not closures.
    pub fn with_provider(provider: impl BoundsProvider + 'static) -> Self {
        Self {
            get_bounds: Box::new(provider),
            tag: None,
            reset_bounds_on_resize: true,
            callbacks: Callbacks::default(),
        }
    }

    /// Sets the tag forwarded on every update and to the bounds provider.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Whether to drop cached bounds whenever the host window resizes.
    ///
    /// Defaults to `true`.
    #[must_use]
    pub fn with_reset_bounds_on_resize(mut self, reset: bool) -> Self {
        self.reset_bounds_on_resize = reset;
        self
    }

    /// The configured tag.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Whether resize-based invalidation is enabled.
    #[must_use]
    pub fn reset_bounds_on_resize(&self) -> bool {
        self.reset_bounds_on_resize
    }

    fn on(mut self, kind: UpdateKind, callback: Callback<E>) -> Self {
        *self.callbacks.slot_mut(kind) = Some(callback);
        self
    }

    /// Called when the pointer enters the element while idle.
    #[must_use]
    pub fn on_mouse_enter(self, f: impl FnMut(&DraggingUpdate<'_, E>) + 'static) -> Self {
        self.on(UpdateKind::MouseEnter, Box::new(f))
    }

    /// Called when the pointer leaves the element while idle.
    #[must_use]
    pub fn on_mouse_leave(self, f: impl FnMut(&DraggingUpdate<'_, E>) + 'static) -> Self {
        self.on(UpdateKind::MouseLeave, Box::new(f))
    }

    /// Called when the pointer hovers over the element while idle.
    #[must_use]
    pub fn on_mouse_move(self, f: impl FnMut(&DraggingUpdate<'_, E>) + 'static) -> Self {
        self.on(UpdateKind::MouseMove, Box::new(f))
    }

    /// Called when a drag starts.
    #[must_use]
    pub fn on_drag_start(self, f: impl FnMut(&DraggingUpdate<'_, E>) + 'static) -> Self {
        self.on(UpdateKind::DragStart, Box::new(f))
    }

    /// Called for every window move during a drag.
    #[must_use]
    pub fn on_drag_move(self, f: impl FnMut(&DraggingUpdate<'_, E>) + 'static) -> Self {
        self.on(UpdateKind::DragMove, Box::new(f))
    }

    /// Called when a drag ends with a button release.
    ///
    /// Not called when a drag is cut short by
    /// [`dispose`](crate::DraggableManager::dispose).
    #[must_use]
    pub fn on_drag_end(self, f: impl FnMut(&DraggingUpdate<'_, E>) + 'static) -> Self {
        self.on(UpdateKind::DragEnd, Box::new(f))
    }
}
