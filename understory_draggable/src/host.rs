// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between a drag controller and the window/document it lives in.
//!
//! A controller never owns the window. Instead it asks a [`DragHost`] to route
//! window-level events to it (and to stop doing so), and to suppress or restore
//! document text selection around a drag. Every request carries the
//! controller's [`ManagerId`], so one host can serve many controllers.
//!
//! ## Listener discipline
//!
//! - [`GlobalListener::Resize`] is registered at construction when
//!   resize-based bounds invalidation is enabled, and removed on dispose.
//! - [`GlobalListener::MouseMove`] and [`GlobalListener::MouseUp`] are
//!   registered on drag start and removed on drag end or dispose, whichever
//!   comes first. Every add has exactly one matching remove.
//!
//! ## Ready-made host
//!
//! [`ListenerTable`] records subscriptions in memory. Hosts that do not have
//! their own event registry can use it to decide which controllers receive a
//! window event:
//!
//! ```
//! use understory_draggable::host::{DragHost, GlobalListener, ListenerTable, ManagerId};
//!
//! let table = ListenerTable::new();
//! let id = ManagerId::next();
//! table.add_listener(id, GlobalListener::MouseUp);
//! assert_eq!(table.subscribers(GlobalListener::MouseUp), vec![id]);
//!
//! table.remove_listener(id, GlobalListener::MouseUp);
//! assert!(table.is_empty());
//! ```

use alloc::rc::Rc;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

/// Identity of a drag controller.
///
/// Ids are unique for the lifetime of the process and are never reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ManagerId(u64);

impl ManagerId {
    /// Allocates a fresh id.
    #[must_use]
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ManagerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "draggable#{}", self.0)
    }
}

/// A window-level listener a controller can ask for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GlobalListener {
    /// Window `mousemove`, delivered to `handle_drag_event`.
    MouseMove,
    /// Window `mouseup`, delivered to `handle_drag_event`.
    MouseUp,
    /// Window `resize`, delivered to `handle_resize`.
    Resize,
}

/// Window and document services a drag controller relies on.
///
/// Methods take `&self` so a single host can be shared by several controllers
/// (see the impls for `&T`, [`Rc`] and [`Arc`]); implementations use interior
/// mutability as needed.
pub trait DragHost {
    /// Starts routing `listener` events to `owner`.
    fn add_listener(&self, owner: ManagerId, listener: GlobalListener);

    /// Stops routing `listener` events to `owner`.
    fn remove_listener(&self, owner: ManagerId, listener: GlobalListener);

    /// Disables text selection on the document body for the duration of a drag.
    fn suppress_text_selection(&self);

    /// Undoes one prior [`suppress_text_selection`](Self::suppress_text_selection).
    fn restore_text_selection(&self);
}

impl<T: DragHost + ?Sized> DragHost for &T {
    fn add_listener(&self, owner: ManagerId, listener: GlobalListener) {
        (**self).add_listener(owner, listener);
    }

    fn remove_listener(&self, owner: ManagerId, listener: GlobalListener) {
        (**self).remove_listener(owner, listener);
    }

    fn suppress_text_selection(&self) {
        (**self).suppress_text_selection();
    }

    fn restore_text_selection(&self) {
        (**self).restore_text_selection();
    }
}

impl<T: DragHost + ?Sized> DragHost for Rc<T> {
    fn add_listener(&self, owner: ManagerId, listener: GlobalListener) {
        (**self).add_listener(owner, listener);
    }

    fn remove_listener(&self, owner: ManagerId, listener: GlobalListener) {
        (**self).remove_listener(owner, listener);
    }

    fn suppress_text_selection(&self) {
        (**self).suppress_text_selection();
    }

    fn restore_text_selection(&self) {
        (**self).restore_text_selection();
    }
}

impl<T: DragHost + ?Sized> DragHost for Arc<T> {
    fn add_listener(&self, owner: ManagerId, listener: GlobalListener) {
        (**self).add_listener(owner, listener);
    }

    fn remove_listener(&self, owner: ManagerId, listener: GlobalListener) {
        (**self).remove_listener(owner, listener);
    }

    fn suppress_text_selection(&self) {
        (**self).suppress_text_selection();
    }

    fn restore_text_selection(&self) {
        (**self).restore_text_selection();
    }
}

/// Reference-counted ownership of the document-wide text-selection flag.
///
/// Text selection is process-wide state, so two controllers dragging at once
/// would otherwise race: the first to finish would re-enable selection under
/// the other. The lock counts holders; only the first [`acquire`](Self::acquire)
/// and the last [`release`](Self::release) report a change.
#[derive(Debug, Default)]
pub struct TextSelectionLock {
    holders: Cell<usize>,
}

impl TextSelectionLock {
    /// Creates an unheld lock.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            holders: Cell::new(0),
        }
    }

    /// Adds a holder. Returns `true` if selection should now be disabled.
    pub fn acquire(&self) -> bool {
        let holders = self.holders.get();
        self.holders.set(holders + 1);
        holders == 0
    }

    /// Removes a holder. Returns `true` if selection should now be restored.
    ///
    /// Releasing an unheld lock does nothing and returns `false`.
    pub fn release(&self) -> bool {
        match self.holders.get() {
            0 => false,
            holders => {
                self.holders.set(holders - 1);
                holders == 1
            }
        }
    }

    /// Returns `true` while at least one holder exists.
    #[must_use]
    pub fn is_held(&self) -> bool {
        self.holders.get() > 0
    }
}

/// An in-memory [`DragHost`] that records who listens to what.
///
/// Subscriptions are kept in registration order, and the same
/// `(owner, listener)` pair is stored at most once.
#[derive(Debug, Default)]
pub struct ListenerTable {
    entries: RefCell<Vec<(ManagerId, GlobalListener)>>,
    selection: TextSelectionLock,
}

impl ListenerTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Owners currently subscribed to `listener`, in registration order.
    #[must_use]
    pub fn subscribers(&self, listener: GlobalListener) -> Vec<ManagerId> {
        self.entries
            .borrow()
            .iter()
            .filter(|(_, l)| *l == listener)
            .map(|(owner, _)| *owner)
            .collect()
    }

    /// Returns `true` if `owner` is subscribed to `listener`.
    #[must_use]
    pub fn is_subscribed(&self, owner: ManagerId, listener: GlobalListener) -> bool {
        self.entries.borrow().contains(&(owner, listener))
    }

    /// Total number of subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns `true` when nothing is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Returns `true` while any drag holds text selection suppressed.
    #[must_use]
    pub fn is_text_selection_suppressed(&self) -> bool {
        self.selection.is_held()
    }
}

impl DragHost for ListenerTable {
    fn add_listener(&self, owner: ManagerId, listener: GlobalListener) {
        let mut entries = self.entries.borrow_mut();
        if !entries.contains(&(owner, listener)) {
            entries.push((owner, listener));
        }
    }

    fn remove_listener(&self, owner: ManagerId, listener: GlobalListener) {
        self.entries
            .borrow_mut()
            .retain(|entry| *entry != (owner, listener));
    }

    fn suppress_text_selection(&self) {
        if self.selection.acquire() {
            tracing::trace!("text selection disabled");
        }
    }

    fn restore_text_selection(&self) {
        if self.selection.release() {
            tracing::trace!("text selection restored");
        }
    }
}

/// The window-level resources held for the duration of one drag.
///
/// Acquiring registers window move/up listeners and suppresses text selection;
/// [`release`](Self::release) undoes both. The capture is stored inside the
/// dragging state, so leaving that state is the only way to give it up.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a drag capture must be released to detach its listeners"]
pub(crate) struct DragCapture {
    owner: ManagerId,
}

impl DragCapture {
    pub(crate) fn acquire(host: &impl DragHost, owner: ManagerId) -> Self {
        host.add_listener(owner, GlobalListener::MouseMove);
        host.add_listener(owner, GlobalListener::MouseUp);
        host.suppress_text_selection();
        Self { owner }
    }

    pub(crate) fn release(self, host: &impl DragHost) {
        host.remove_listener(self.owner, GlobalListener::MouseMove);
        host.remove_listener(self.owner, GlobalListener::MouseUp);
        host.restore_text_selection();
    }
}
