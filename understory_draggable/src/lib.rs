// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_draggable --heading-base-level=0

//! Understory Draggable: a pointer-drag controller for UI elements.
//!
//! [`DraggableManager`] turns raw pointer events on one element into
//! [`DraggingUpdate`]s: hover updates while idle, and a start / move / end
//! sequence for each drag gesture. Every update carries a normalized value in
//! caller-supplied [`DraggableBounds`], clamped if the bounds ask for it, plus
//! the matching pixel offset.
//!
//! The crate does not render anything, measure layout, or own a window:
//!
//! - Bounds come from a [`BoundsProvider`](bounds::BoundsProvider) the caller
//!   supplies; they are measured lazily and cached until reset or a resize.
//! - Window-level listeners and document text selection are requested through
//!   a [`DragHost`](host::DragHost). [`ListenerTable`](host::ListenerTable) is a
//!   ready-made in-memory host.
//! - Input arrives as any type implementing
//!   [`PointerEvent`](event::PointerEvent); [`MouseEvent`](event::MouseEvent)
//!   is provided.
//!
//! ## Modules
//!
//! - [`bounds`]: bounds, the client-X to value mapping, and the bounds cache
//! - [`event`]: pointer event kinds, buttons and modifiers
//! - [`host`]: the window/document seam and listener bookkeeping
//! - [`update`]: the update record passed to callbacks
//!
//! ## State machine
//!
//! A controller is either idle or dragging.
//!
//! - Idle: element enter / leave / move (primary button) produce
//!   [`UpdateKind::MouseEnter`], [`UpdateKind::MouseLeave`] and
//!   [`UpdateKind::MouseMove`]. A primary `mousedown` registers window move/up
//!   listeners, suppresses text selection, and produces
//!   [`UpdateKind::DragStart`].
//! - Dragging: hover events are ignored. Window moves produce
//!   [`UpdateKind::DragMove`]. A primary `mouseup` releases the window
//!   listeners, restores selection, and produces [`UpdateKind::DragEnd`].
//!
//! An event kind that a handler never expects (for example `mouseup` wired to
//! the hover handler) is reported as [`InvalidEventKind`].
//!
//! ## Example
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use kurbo::Point;
//! use understory_draggable::event::{MouseEvent, MouseEventKind};
//! use understory_draggable::host::{GlobalListener, ListenerTable};
//! use understory_draggable::{DraggableBounds, DraggableManager, DraggableOptions, UpdateKind};
//!
//! let host = Rc::new(ListenerTable::new());
//! let options: DraggableOptions = DraggableOptions::new(|_tag| {
//!     DraggableBounds::new(100.0, 200.0).with_value_range(0.0, 1.0)
//! })
//! .with_tag("timeline")
//! .on_drag_start(|update| {
//!     assert_eq!(update.kind, UpdateKind::DragStart);
//!     assert_eq!((update.value, update.x), (0.25, 50.0));
//!     assert_eq!(update.tag, Some("timeline"));
//! });
//!
//! let mut manager = DraggableManager::new(Rc::clone(&host), options);
//! let down = MouseEvent::new(MouseEventKind::MouseDown, Point::new(150.0, 8.0));
//! manager.handle_mouse_down(&down).unwrap();
//!
//! // The host now routes window move/up events to this controller.
//! assert_eq!(host.subscribers(GlobalListener::MouseUp), vec![manager.id()]);
//!
//! manager.dispose();
//! assert!(host.is_empty());
//! ```
//!
//! ## Features
//!
//! - `std` (default): build Kurbo and `tracing` with the standard library.
//! - `libm`: use `libm` for Kurbo's float math in `no_std` builds.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod bounds;
mod drag;
mod error;
pub mod event;
pub mod host;
mod manager;
mod options;
pub mod update;

pub use bounds::{DraggableBounds, Position};
pub use error::{EventChannel, InvalidEventKind};
pub use manager::DraggableManager;
pub use options::{Callback, DraggableOptions};
pub use update::{DraggingUpdate, UpdateKind};
