// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timeline scrubber.
//!
//! Two draggable handles (the left and right edges of a time selection) share
//! one set of callbacks and tell each other apart by tag. A tiny simulated host
//! routes element events directly and window events through a `ListenerTable`.
//!
//! Run:
//! - `cargo run -p understory_draggable --example timeline_scrubber`
//! - `RUST_LOG=understory_draggable=trace cargo run -p understory_draggable --example timeline_scrubber`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_draggable::event::{MouseEvent, MouseEventKind};
use understory_draggable::host::{GlobalListener, ListenerTable};
use understory_draggable::{
    DraggableBounds, DraggableManager, DraggableOptions, DraggingUpdate, InvalidEventKind,
    UpdateKind,
};

/// Normalized selection, as the rest of a UI would see it.
#[derive(Debug)]
struct Selection {
    start: f64,
    end: f64,
}

fn main() -> Result<(), InvalidEventKind> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // The track is 400px wide, starting 40px into the viewport.
    let track = Rect::new(40.0, 100.0, 440.0, 120.0);
    let selection = Rc::new(RefCell::new(Selection {
        start: 0.2,
        end: 0.8,
    }));

    let on_update = {
        let selection = Rc::clone(&selection);
        move |update: &DraggingUpdate<'_>| {
            let mut sel = selection.borrow_mut();
            match (update.kind, update.tag) {
                (UpdateKind::DragMove | UpdateKind::DragEnd, Some("start")) => {
                    sel.start = update.value;
                }
                (UpdateKind::DragMove | UpdateKind::DragEnd, Some("end")) => {
                    sel.end = update.value;
                }
                _ => {}
            }
            println!(
                "{:<11} {:<5} value={:.3} x={:>6.1}  -> {:?}",
                update.kind,
                update.tag.unwrap_or("-"),
                update.value,
                update.x,
                *sel
            );
        }
    };

    let table = Rc::new(ListenerTable::new());
    let mut managers = vec![
        DraggableManager::new(
            Rc::clone(&table),
            handle_options("start", track, &selection, on_update.clone()),
        ),
        DraggableManager::new(
            Rc::clone(&table),
            handle_options("end", track, &selection, on_update),
        ),
    ];

    let at = |kind, x| MouseEvent::new(kind, Point::new(x, 110.0));

    // Hover the start handle, then drag it right past the end handle; it stops at the end.
    managers[0].handle_mouse_enter(&at(MouseEventKind::MouseEnter, 120.0))?;
    managers[0].handle_mouse_down(&at(MouseEventKind::MouseDown, 120.0))?;
    for x in [200.0, 300.0, 420.0] {
        dispatch(&table, &mut managers, &at(MouseEventKind::MouseMove, x))?;
    }
    dispatch(&table, &mut managers, &at(MouseEventKind::MouseUp, 420.0))?;

    // The layout changed: drop cached bounds everywhere.
    for id in table.subscribers(GlobalListener::Resize) {
        if let Some(manager) = managers.iter_mut().find(|m| m.id() == id) {
            manager.handle_resize();
        }
    }

    // Grab the end handle and abandon the drag by tearing the handles down.
    managers[1].handle_mouse_down(&at(MouseEventKind::MouseDown, 360.0))?;
    dispatch(&table, &mut managers, &at(MouseEventKind::MouseMove, 380.0))?;
    for manager in &mut managers {
        manager.dispose();
    }
    println!("listeners left after dispose: {}", table.len());
    println!("final selection: {:?}", selection.borrow());
    Ok(())
}

/// Options for one selection handle. Each handle may only move up to the other one.
fn handle_options(
    name: &'static str,
    track: Rect,
    selection: &Rc<RefCell<Selection>>,
    on_update: impl FnMut(&DraggingUpdate<'_>) + Clone + 'static,
) -> DraggableOptions {
    let selection = Rc::clone(selection);
    DraggableOptions::new(move |tag: Option<&str>| {
        let sel = selection.borrow();
        let bounds = DraggableBounds::from_rect(track);
        match tag {
            Some("start") => bounds.with_value_range(0.0, sel.end),
            _ => bounds.with_value_range(sel.start, 1.0),
        }
    })
    .with_tag(name)
    .on_mouse_enter(on_update.clone())
    .on_drag_start(on_update.clone())
    .on_drag_move(on_update.clone())
    .on_drag_end(on_update)
}

/// Routes a window-level move or up to the subscribed controllers.
fn dispatch(
    table: &ListenerTable,
    managers: &mut [DraggableManager<Rc<ListenerTable>>],
    event: &MouseEvent,
) -> Result<(), InvalidEventKind> {
    let listener = match event.kind {
        MouseEventKind::MouseUp => GlobalListener::MouseUp,
        _ => GlobalListener::MouseMove,
    };
    for id in table.subscribers(listener) {
        if let Some(manager) = managers.iter_mut().find(|m| m.id() == id) {
            manager.handle_drag_event(event)?;
        }
    }
    Ok(())
}
