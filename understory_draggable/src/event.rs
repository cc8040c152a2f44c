// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input accepted by the drag controller.
//!
//! The controller only needs three things from an event: what kind of event it
//! is, which button it carries, and its horizontal client coordinate. Those are
//! described by the [`PointerEvent`] trait, so hosts can feed their native event
//! type straight through and get it back, unmodified, on every
//! [`DraggingUpdate`](crate::DraggingUpdate).
//!
//! [`MouseEvent`] is a ready-made implementation for hosts that translate their
//! input into a plain value first.
//!
//! ```
//! use kurbo::Point;
//! use understory_draggable::event::{Modifiers, MouseButton, MouseEvent, MouseEventKind, PointerEvent};
//!
//! let down = MouseEvent::new(MouseEventKind::MouseDown, Point::new(150.0, 12.0))
//!     .with_modifiers(Modifiers::SHIFT);
//! assert_eq!(down.button(), MouseButton::Primary);
//! assert_eq!(down.client_x(), 150.0);
//! assert!(down.modifiers.contains(Modifiers::SHIFT));
//! ```

use core::fmt;

use kurbo::Point;

/// The kind of a raw pointer event, named after the DOM event types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    /// The pointer entered the draggable element (`mouseenter`).
    MouseEnter,
    /// The pointer left the draggable element (`mouseleave`).
    MouseLeave,
    /// The pointer moved (`mousemove`), either over the element or the window.
    MouseMove,
    /// A button was pressed (`mousedown`).
    MouseDown,
    /// A button was released (`mouseup`).
    MouseUp,
}

impl MouseEventKind {
    /// The DOM event type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MouseEnter => "mouseenter",
            Self::MouseLeave => "mouseleave",
            Self::MouseMove => "mousemove",
            Self::MouseDown => "mousedown",
            Self::MouseUp => "mouseup",
        }
    }
}

impl fmt::Display for MouseEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// The button associated with a pointer event.
///
/// For move, enter and leave events the DOM reports the primary button, so
/// those events pass the primary-button check unless the host says otherwise.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Main button, usually the left button.
    #[default]
    Primary,
    /// Auxiliary button, usually the wheel or middle button.
    Auxiliary,
    /// Secondary button, usually the right button.
    Secondary,
    /// Fourth button, typically "browser back".
    Back,
    /// Fifth button, typically "browser forward".
    Forward,
    /// Any other button index.
    Other(i16),
}

impl MouseButton {
    /// Maps the DOM `MouseEvent.button` numbering to a button.
    #[must_use]
    pub const fn from_dom_index(index: i16) -> Self {
        match index {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            3 => Self::Back,
            4 => Self::Forward,
            other => Self::Other(other),
        }
    }

    /// Returns `true` for the main (left) button.
    #[must_use]
    pub const fn is_primary(self) -> bool {
        matches!(self, Self::Primary)
    }
}

bitflags::bitflags! {
    /// Keyboard modifiers held while the event was generated.
    ///
    /// The controller never inspects these; they ride along for callbacks that
    /// want to vary behavior (for example, snapping while `SHIFT` is held).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift key.
        const SHIFT   = 0b0000_0001;
        /// Control key.
        const CONTROL = 0b0000_0010;
        /// Alt / Option key.
        const ALT     = 0b0000_0100;
        /// Meta / Command / Windows key.
        const META    = 0b0000_1000;
    }
}

/// What the drag controller needs to know about a pointer event.
pub trait PointerEvent {
    /// The event kind.
    fn kind(&self) -> MouseEventKind;

    /// The button that triggered the event.
    fn button(&self) -> MouseButton;

    /// Horizontal position in client (viewport) coordinates.
    fn client_x(&self) -> f64;
}

/// A plain pointer event value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MouseEvent {
    /// Event kind.
    pub kind: MouseEventKind,
    /// Triggering button.
    pub button: MouseButton,
    /// Position in client coordinates.
    pub client: Point,
    /// Modifiers held at the time of the event.
    pub modifiers: Modifiers,
}

impl MouseEvent {
    /// Creates a primary-button event with no modifiers.
    #[must_use]
    pub fn new(kind: MouseEventKind, client: Point) -> Self {
        Self {
            kind,
            button: MouseButton::Primary,
            client,
            modifiers: Modifiers::empty(),
        }
    }

    /// Sets the triggering button.
    #[must_use]
    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }

    /// Sets the held modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

impl PointerEvent for MouseEvent {
    fn kind(&self) -> MouseEventKind {
        self.kind
    }

    fn button(&self) -> MouseButton {
        self.button
    }

    fn client_x(&self) -> f64 {
        self.client.x
    }
}

impl<T: PointerEvent + ?Sized> PointerEvent for &T {
    fn kind(&self) -> MouseEventKind {
        (**self).kind()
    }

    fn button(&self) -> MouseButton {
        (**self).button()
    }

    fn client_x(&self) -> f64 {
        (**self).client_x()
    }
}
