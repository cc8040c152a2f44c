// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_draggable` crate.
//!
//! These drive controllers the way a host would: element events go straight
//! to a controller, window events are fanned out to whoever the
//! `ListenerTable` says is subscribed.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Point;
use understory_draggable::event::{MouseButton, MouseEvent, MouseEventKind};
use understory_draggable::host::{GlobalListener, ListenerTable, ManagerId};
use understory_draggable::{
    DraggableBounds, DraggableManager, DraggableOptions, DraggingUpdate, UpdateKind,
};

#[derive(Clone, Debug, PartialEq)]
struct Seen {
    kind: UpdateKind,
    value: f64,
    x: f64,
    manager: ManagerId,
    tag: Option<String>,
}

type Log = Rc<RefCell<Vec<Seen>>>;

fn record(log: &Log) -> impl FnMut(&DraggingUpdate<'_>) + use<> {
    let log = Rc::clone(log);
    move |u: &DraggingUpdate<'_>| {
        log.borrow_mut().push(Seen {
            kind: u.kind,
            value: u.value,
            x: u.x,
            manager: u.manager,
            tag: u.tag.map(String::from),
        });
    }
}

fn options(log: &Log, left: f64) -> DraggableOptions {
    DraggableOptions::new(move |_tag| {
        DraggableBounds::new(left, 200.0).with_value_range(0.0, 1.0)
    })
    .on_mouse_enter(record(log))
    .on_mouse_leave(record(log))
    .on_mouse_move(record(log))
    .on_drag_start(record(log))
    .on_drag_move(record(log))
    .on_drag_end(record(log))
}

fn ev(kind: MouseEventKind, x: f64) -> MouseEvent {
    MouseEvent::new(kind, Point::new(x, 10.0))
}

/// A minimal host: a listener table plus the controllers it can route to.
struct Window {
    table: Rc<ListenerTable>,
    managers: Vec<DraggableManager<Rc<ListenerTable>>>,
}

impl Window {
    fn new() -> Self {
        Self {
            table: Rc::new(ListenerTable::new()),
            managers: Vec::new(),
        }
    }

    fn add(&mut self, options: DraggableOptions) -> usize {
        self.managers
            .push(DraggableManager::new(Rc::clone(&self.table), options));
        self.managers.len() - 1
    }

    fn manager(&mut self, index: usize) -> &mut DraggableManager<Rc<ListenerTable>> {
        &mut self.managers[index]
    }

    /// Delivers a window-level move or up to every subscribed controller.
    fn dispatch(&mut self, event: &MouseEvent) {
        let listener = match event.kind {
            MouseEventKind::MouseMove => GlobalListener::MouseMove,
            MouseEventKind::MouseUp => GlobalListener::MouseUp,
            other => panic!("not a window event: {other}"),
        };
        for id in self.table.subscribers(listener) {
            let manager = self
                .managers
                .iter_mut()
                .find(|m| m.id() == id)
                .expect("subscriber should be a live controller");
            manager
                .handle_drag_event(event)
                .expect("window events are valid drag events");
        }
    }

    fn resize(&mut self) {
        for id in self.table.subscribers(GlobalListener::Resize) {
            if let Some(manager) = self.managers.iter_mut().find(|m| m.id() == id) {
                manager.handle_resize();
            }
        }
    }
}

fn kinds(log: &Log) -> Vec<UpdateKind> {
    log.borrow().iter().map(|s| s.kind).collect()
}

#[test]
fn scripted_drag_matches_expected_values() {
    let log = Log::default();
    let mut window = Window::new();
    let m = window.add(options(&log, 100.0));

    window
        .manager(m)
        .handle_mouse_down(&ev(MouseEventKind::MouseDown, 150.0))
        .unwrap();
    window.dispatch(&ev(MouseEventKind::MouseMove, 50.0));
    window.dispatch(&ev(MouseEventKind::MouseUp, 350.0));

    let seen: Vec<_> = log.borrow().iter().map(|s| (s.kind, s.value, s.x)).collect();
    assert_eq!(
        seen,
        [
            (UpdateKind::DragStart, 0.25, 50.0),
            (UpdateKind::DragMove, 0.0, 0.0),
            (UpdateKind::DragEnd, 1.0, 200.0),
        ]
    );
    assert!(!window.manager(m).is_dragging());
}

#[test]
fn every_window_move_yields_one_drag_move() {
    let log = Log::default();
    let mut window = Window::new();
    let m = window.add(options(&log, 0.0));

    window
        .manager(m)
        .handle_mouse_down(&ev(MouseEventKind::MouseDown, 10.0))
        .unwrap();
    for x in [20.0, 40.0, 60.0, 80.0, 100.0] {
        window.dispatch(&ev(MouseEventKind::MouseMove, x));
    }
    window.dispatch(&ev(MouseEventKind::MouseUp, 100.0));
    // After the release, the controller no longer hears window moves.
    window.dispatch(&ev(MouseEventKind::MouseMove, 120.0));

    let mut expected = vec![UpdateKind::DragStart];
    expected.extend([UpdateKind::DragMove; 5]);
    expected.push(UpdateKind::DragEnd);
    assert_eq!(kinds(&log), expected);
}

#[test]
fn hover_resumes_after_the_drag() {
    let log = Log::default();
    let mut window = Window::new();
    let m = window.add(options(&log, 0.0));

    window
        .manager(m)
        .handle_mouse_enter(&ev(MouseEventKind::MouseEnter, 10.0))
        .unwrap();
    window
        .manager(m)
        .handle_mouse_down(&ev(MouseEventKind::MouseDown, 10.0))
        .unwrap();
    window
        .manager(m)
        .handle_mouse_move(&ev(MouseEventKind::MouseMove, 30.0))
        .unwrap();
    window.dispatch(&ev(MouseEventKind::MouseMove, 30.0));
    window
        .manager(m)
        .handle_mouse_leave(&ev(MouseEventKind::MouseLeave, 300.0))
        .unwrap();
    window.dispatch(&ev(MouseEventKind::MouseUp, 300.0));
    window
        .manager(m)
        .handle_mouse_move(&ev(MouseEventKind::MouseMove, 50.0))
        .unwrap();

    assert_eq!(
        kinds(&log),
        [
            UpdateKind::MouseEnter,
            UpdateKind::DragStart,
            UpdateKind::DragMove,
            UpdateKind::DragEnd,
            UpdateKind::MouseMove,
        ]
    );
}

#[test]
fn right_click_while_idle_changes_nothing() {
    let log = Log::default();
    let mut window = Window::new();
    let m = window.add(options(&log, 0.0));

    let right = ev(MouseEventKind::MouseDown, 50.0).with_button(MouseButton::Secondary);
    window.manager(m).handle_mouse_down(&right).unwrap();

    assert!(!window.manager(m).is_dragging());
    assert!(log.borrow().is_empty());
    assert!(window.table.subscribers(GlobalListener::MouseMove).is_empty());
}

#[test]
fn dispose_mid_drag_silences_window_events() {
    let log = Log::default();
    let mut window = Window::new();
    let m = window.add(options(&log, 0.0));

    window
        .manager(m)
        .handle_mouse_down(&ev(MouseEventKind::MouseDown, 50.0))
        .unwrap();
    window.manager(m).dispose();

    assert!(window.table.is_empty());
    assert!(!window.table.is_text_selection_suppressed());

    // Nobody is subscribed any more, so these reach no controller.
    window.dispatch(&ev(MouseEventKind::MouseMove, 80.0));
    window.dispatch(&ev(MouseEventKind::MouseUp, 80.0));
    // Even a host that still calls the stale handler gets silence, not an error.
    window
        .manager(m)
        .handle_drag_event(&ev(MouseEventKind::MouseUp, 80.0))
        .unwrap();

    assert_eq!(kinds(&log), [UpdateKind::DragStart]);
}

#[test]
fn controllers_share_one_window_without_interfering() {
    let log = Log::default();
    let mut window = Window::new();
    let a = window.add(options(&log, 0.0).with_tag("a"));
    let b = window.add(options(&log, 0.0).with_tag("b"));
    let (id_a, id_b) = (window.manager(a).id(), window.manager(b).id());

    window
        .manager(a)
        .handle_mouse_down(&ev(MouseEventKind::MouseDown, 20.0))
        .unwrap();
    window.dispatch(&ev(MouseEventKind::MouseMove, 40.0));
    window.dispatch(&ev(MouseEventKind::MouseUp, 60.0));

    let seen = log.borrow();
    assert_eq!(seen.len(), 3);
    assert!(seen.iter().all(|s| s.manager == id_a));
    assert!(seen.iter().all(|s| s.tag.as_deref() == Some("a")));
    assert!(!window.managers[b].is_dragging());
    assert_ne!(id_a, id_b);
}

#[test]
fn overlapping_drags_keep_selection_suppressed_until_both_end() {
    let log = Log::default();
    let mut window = Window::new();
    let a = window.add(options(&log, 0.0));
    let b = window.add(options(&log, 0.0));

    window
        .manager(a)
        .handle_mouse_down(&ev(MouseEventKind::MouseDown, 20.0))
        .unwrap();
    window
        .manager(b)
        .handle_mouse_down(&ev(MouseEventKind::MouseDown, 20.0))
        .unwrap();

    window.manager(a).dispose();
    assert!(window.table.is_text_selection_suppressed());

    window.dispatch(&ev(MouseEventKind::MouseUp, 20.0));
    assert!(!window.table.is_text_selection_suppressed());
    assert!(!window.manager(b).is_dragging());
}

#[test]
fn resize_remeasures_bounds() {
    let measured = Rc::new(RefCell::new(Vec::new()));
    let lefts = Rc::new(RefCell::new(vec![100.0, 0.0]));
    let log = Log::default();
    let mut window = Window::new();

    let sink = Rc::clone(&measured);
    let m = window.add(
        DraggableOptions::new(move |tag: Option<&str>| {
            sink.borrow_mut().push(tag.map(String::from));
            let left = lefts.borrow_mut().remove(0);
            DraggableBounds::new(left, 200.0)
        })
        .with_tag("ruler")
        .on_mouse_move(record(&log)),
    );

    let hover = ev(MouseEventKind::MouseMove, 150.0);
    window.manager(m).handle_mouse_move(&hover).unwrap();
    window.manager(m).handle_mouse_move(&hover).unwrap();
    window.resize();
    window.manager(m).handle_mouse_move(&hover).unwrap();

    let values: Vec<f64> = log.borrow().iter().map(|s| s.value).collect();
    assert_eq!(values, [0.25, 0.25, 0.75]);
    assert_eq!(
        *measured.borrow(),
        [Some(String::from("ruler")), Some(String::from("ruler"))]
    );
}

#[test]
fn miswired_events_are_errors() {
    let log = Log::default();
    let mut window = Window::new();
    let m = window.add(options(&log, 0.0));

    let err = window
        .manager(m)
        .handle_mouse_leave(&ev(MouseEventKind::MouseUp, 0.0))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid event type for the hover handler: mouseup"
    );

    let err = window
        .manager(m)
        .handle_mouse_down(&ev(MouseEventKind::MouseEnter, 0.0))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid event type for the drag handler: mouseenter"
    );
    assert!(log.borrow().is_empty());
}
