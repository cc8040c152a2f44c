// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The record a drag controller hands to its callbacks.

use core::fmt;

use crate::event::MouseEvent;
use crate::host::ManagerId;

/// What happened, from the controller's point of view.
///
/// The first three kinds come from the hover channel and only fire while no
/// drag is active; the last three bracket a drag gesture.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UpdateKind {
    /// The pointer entered the element.
    MouseEnter,
    /// The pointer left the element.
    MouseLeave,
    /// The pointer moved over the element.
    MouseMove,
    /// A primary-button press started a drag.
    DragStart,
    /// The pointer moved while dragging.
    DragMove,
    /// A primary-button release ended the drag.
    DragEnd,
}

impl UpdateKind {
    /// Stable upper-snake-case name, e.g. `DRAG_START`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MouseEnter => "MOUSE_ENTER",
            Self::MouseLeave => "MOUSE_LEAVE",
            Self::MouseMove => "MOUSE_MOVE",
            Self::DragStart => "DRAG_START",
            Self::DragMove => "DRAG_MOVE",
            Self::DragEnd => "DRAG_END",
        }
    }

    /// Returns `true` for the drag lifecycle kinds.
    #[must_use]
    pub const fn is_drag(self) -> bool {
        matches!(self, Self::DragStart | Self::DragMove | Self::DragEnd)
    }
}

impl fmt::Display for UpdateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One update produced by a drag controller.
///
/// `value` and `x` always agree: `x` is the pixel offset (from the left of the
/// bounds) that maps to `value`, clamping included.
#[derive(Debug)]
pub struct DraggingUpdate<'a, E = MouseEvent> {
    /// What happened.
    pub kind: UpdateKind,
    /// Normalized, clamped position.
    pub value: f64,
    /// Pixel offset matching `value`.
    pub x: f64,
    /// The event that produced this update, untouched.
    pub event: &'a E,
    /// The controller that produced this update.
    pub manager: ManagerId,
    /// The controller's tag, if it has one.
    pub tag: Option<&'a str>,
}

impl<E> Clone for DraggingUpdate<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for DraggingUpdate<'_, E> {}
