// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the drag controller.

use core::fmt;

use crate::event::MouseEventKind;

/// Which of the controller's dispatch paths an event arrived on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventChannel {
    /// Hover handlers: `mouseenter`, `mouseleave` and element `mousemove`.
    Hover,
    /// Drag handlers: element `mousedown`, window `mousemove` and `mouseup`.
    Drag,
}

/// An event reached a handler that never expects that kind.
///
/// This is a wiring mistake in the host (for example, `mouseup` bound to the
/// hover handler). The controller's state is left untouched, but the event is
/// not processed either.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InvalidEventKind {
    /// The channel the event was delivered to.
    pub channel: EventChannel,
    /// The offending event kind.
    pub kind: MouseEventKind,
}

impl fmt::Display for InvalidEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let channel = match self.channel {
            EventChannel::Hover => "hover",
            EventChannel::Drag => "drag",
        };
        write!(f, "invalid event type for the {channel} handler: {}", self.kind)
    }
}

impl core::error::Error for InvalidEventKind {}
