// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a marquee selection over a 4×2 grid of tiles without any UI.
//!
//! Run:
//! - `RUST_LOG=understory_marquee=debug cargo run -p understory_demos --example marquee_headless`

use kurbo::Rect;
use tracing_subscriber::EnvFilter;
use understory_demos::{ElementId, MemoryHost};
use understory_marquee::{
    Callbacks, EventType, InputMode, InputScope, Marquee, MarqueeConfig, Modifiers, PointerEvent,
};

fn deliver(
    marquee: &mut Marquee<ElementId, Callbacks<ElementId>>,
    host: &mut MemoryHost,
    scope: InputScope,
    event: EventType,
    pointer: PointerEvent,
) {
    let Some(id) = host.listener_for(scope, event) else {
        println!("no listener for {}", event.name());
        return;
    };
    let response = marquee.handle_event(host, id, &pointer);
    println!("{:<10} at {:?} -> {response:?}", event.name(), pointer.position);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut host = MemoryHost::new(false);
    let container = host.insert(None, Rect::new(0.0, 0.0, 400.0, 200.0), &["board"]);
    for row in 0..2 {
        for col in 0..4 {
            let x = 10.0 + f64::from(col) * 100.0;
            let y = 10.0 + f64::from(row) * 100.0;
            host.insert(Some(container), Rect::new(x, y, x + 80.0, y + 80.0), &["tile"]);
        }
    }

    let callbacks = Callbacks::new()
        .on_select(|tile: &ElementId| println!("  select   {tile:?}"))
        .on_unselect(|tile: &ElementId| println!("  unselect {tile:?}"))
        .on_clear(|| println!("  clear"));

    let config = MarqueeConfig::new(".tile", "marquee", "selected");
    let mut marquee = match Marquee::initialize(&mut host, container, config, callbacks) {
        Ok(marquee) => marquee,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            return;
        }
    };

    let (press, motion, release) = match marquee.input_mode() {
        InputMode::Mouse => (EventType::MouseDown, EventType::MouseMove, EventType::MouseUp),
        InputMode::Touch => (EventType::TouchStart, EventType::TouchMove, EventType::TouchEnd),
    };

    println!("-- drag across the first two columns");
    deliver(&mut marquee, &mut host, InputScope::Container, press, PointerEvent::at((5.0, 5.0)));
    deliver(&mut marquee, &mut host, InputScope::Global, motion, PointerEvent::at((150.0, 150.0)));
    println!(
        "  overlay at left={:?} top={:?} width={:?} height={:?}",
        host.style(*marquee.overlay(), "left"),
        host.style(*marquee.overlay(), "top"),
        host.style(*marquee.overlay(), "width"),
        host.style(*marquee.overlay(), "height"),
    );
    deliver(&mut marquee, &mut host, InputScope::Global, release, PointerEvent::at((150.0, 150.0)));

    println!("-- ctrl-drag adds the last column");
    let ctrl = |x: f64, y: f64| PointerEvent::at((x, y)).with_modifiers(Modifiers::CTRL);
    deliver(&mut marquee, &mut host, InputScope::Container, press, ctrl(395.0, 5.0));
    deliver(&mut marquee, &mut host, InputScope::Global, motion, ctrl(350.0, 190.0));
    deliver(&mut marquee, &mut host, InputScope::Global, release, ctrl(350.0, 190.0));

    let selected: Vec<_> = marquee.snapshot().selected().collect();
    println!("selected: {selected:?}");

    println!("-- click without moving clears");
    deliver(&mut marquee, &mut host, InputScope::Container, press, PointerEvent::at((95.0, 95.0)));
    deliver(&mut marquee, &mut host, InputScope::Global, release, PointerEvent::at((95.0, 95.0)));

    marquee.destroy(&mut host);
    println!("-- after destroy");
    deliver(&mut marquee, &mut host, InputScope::Container, press, PointerEvent::at((5.0, 5.0)));
}
