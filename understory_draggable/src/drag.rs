// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag phase: the two-state machine behind a controller.
//!
//! A controller is either idle or dragging. The dragging state owns the
//! window-level [`DragCapture`], so the listeners it registered live exactly as
//! long as the drag does.

use crate::host::{DragCapture, DragHost, ManagerId};

/// Tracks whether a drag gesture is in progress.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) enum DragPhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A gesture is in progress and holds window listeners.
    Dragging(DragCapture),
}

impl DragPhase {
    /// Enters the dragging state, acquiring window listeners for `owner`.
    ///
    /// Returns `false` (and does nothing) if a drag is already in progress.
    pub(crate) fn start(&mut self, host: &impl DragHost, owner: ManagerId) -> bool {
        if self.is_dragging() {
            return false;
        }
        *self = Self::Dragging(DragCapture::acquire(host, owner));
        true
    }

    /// Returns to idle, releasing window listeners.
    ///
    /// Returns `false` if no drag was in progress.
    pub(crate) fn end(&mut self, host: &impl DragHost) -> bool {
        match core::mem::take(self) {
            Self::Dragging(capture) => {
                capture.release(host);
                true
            }
            Self::Idle => false,
        }
    }

    /// Returns `true` while a drag operation is active.
    pub(crate) fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{GlobalListener, ListenerTable};

    #[test]
    fn new_phase_is_idle() {
        let phase = DragPhase::default();
        assert!(!phase.is_dragging());
        assert_eq!(phase, DragPhase::Idle);
    }

    #[test]
    fn start_acquires_listeners() {
        let host = ListenerTable::new();
        let owner = ManagerId::next();
        let mut phase = DragPhase::default();

        assert!(phase.start(&host, owner));

        assert!(phase.is_dragging());
        assert!(host.is_subscribed(owner, GlobalListener::MouseMove));
        assert!(host.is_subscribed(owner, GlobalListener::MouseUp));
    }

    #[test]
    fn start_while_dragging_is_rejected() {
        let host = ListenerTable::new();
        let owner = ManagerId::next();
        let mut phase = DragPhase::default();
        phase.start(&host, owner);

        assert!(!phase.start(&host, owner));
        assert_eq!(host.len(), 2);
        phase.end(&host);
        assert!(!host.is_text_selection_suppressed());
    }

    #[test]
    fn end_releases_listeners() {
        let host = ListenerTable::new();
        let mut phase = DragPhase::default();
        phase.start(&host, ManagerId::next());

        assert!(phase.end(&host));

        assert!(!phase.is_dragging());
        assert!(host.is_empty());
        assert!(!host.is_text_selection_suppressed());
    }

    #[test]
    fn end_on_idle_is_safe() {
        let host = ListenerTable::new();
        let mut phase = DragPhase::default();

        assert!(!phase.end(&host));
        assert_eq!(phase, DragPhase::Idle);
    }

    #[test]
    fn restart_after_end() {
        let host = ListenerTable::new();
        let owner = ManagerId::next();
        let mut phase = DragPhase::default();

        phase.start(&host, owner);
        phase.end(&host);
        assert!(phase.start(&host, owner));
        assert_eq!(host.subscribers(GlobalListener::MouseUp), [owner]);
    }
}
