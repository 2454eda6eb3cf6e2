// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection state transitions and lifecycle notifications.
//!
//! [`SelectionState`] applies collision results to the items of a [`Snapshot`],
//! mirrors the outcome onto the host with the selected class, and notifies a
//! [`SelectionListener`]. All notifications happen synchronously, in item order,
//! during the call that caused them.
//!
//! ## Transition rules for one evaluation pass
//!
//! For every item, the selection rectangle is tested against the item's cached bounds:
//!
//! - **Collided, already selected**: the item is toggled off and immediately
//!   selected again. It ends the pass selected and [`SelectionListener::on_select`]
//!   fires, so hovering a selected item re-confirms it on every move.
//! - **Collided, not selected**: the item is selected and `on_select` fires.
//! - **Not collided, drag in progress**: the item is deselected and
//!   [`SelectionListener::on_unselect`] fires, whether or not it was selected.
//!   This is a per-move notification, not an edge.
//! - **Not collided, no drag in progress** (an additive drag): nothing happens.
//!
//! ```
//! use kurbo::Rect;
//! use understory_marquee::{Item, SelectionListener, SelectionState, Snapshot};
//! # use understory_marquee::Surface;
//! # #[derive(Default)] struct Classes(Vec<(u32, bool)>);
//! # impl Surface for Classes {
//! #     type Element = u32;
//! #     fn query_items(&self, _: &u32, _: &str) -> Vec<u32> { Vec::new() }
//! #     fn bounds(&self, _: &u32) -> Rect { Rect::ZERO }
//! #     fn has_class(&self, _: &u32, _: &str) -> bool { false }
//! #     fn add_class(&mut self, e: &u32, _: &str) { self.0.push((*e, true)); }
//! #     fn remove_class(&mut self, e: &u32, _: &str) { self.0.push((*e, false)); }
//! #     fn set_style(&mut self, _: &u32, _: &str, _: &str) {}
//! #     fn create_element(&mut self, _: &str) -> u32 { 0 }
//! #     fn append_child(&mut self, _: &u32, _: &u32) {}
//! #     fn remove_element(&mut self, _: &u32) {}
//! # }
//!
//! #[derive(Default)]
//! struct Log(Vec<u32>);
//! impl SelectionListener<u32> for Log {
//!     fn on_select(&mut self, item: &u32) {
//!         self.0.push(*item);
//!     }
//! }
//!
//! let mut snapshot = Snapshot::from_items(vec![
//!     Item::new(1, Rect::new(0.0, 0.0, 10.0, 10.0), false),
//!     Item::new(2, Rect::new(40.0, 0.0, 50.0, 10.0), false),
//! ]);
//! let mut state = SelectionState::new("selected");
//! let mut surface = Classes::default();
//! let mut log = Log::default();
//!
//! state.begin_drag(false, &mut snapshot);
//! state.evaluate(Rect::new(5.0, 5.0, 15.0, 15.0), &mut snapshot, &mut surface, &mut log);
//! assert_eq!(log.0, [1]);
//! assert_eq!(snapshot.selected().collect::<Vec<_>>(), [&1]);
//! ```

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use kurbo::Rect;

use crate::geometry::intersects;
use crate::host::Surface;
use crate::snapshot::Snapshot;

/// Receives selection lifecycle notifications.
///
/// Every method defaults to a no-op, so implementors only override what they
/// care about. `()` is the listener that ignores everything.
pub trait SelectionListener<E> {
    /// `item` entered the selected state.
    fn on_select(&mut self, item: &E) {
        let _ = item;
    }

    /// `item` was outside the rectangle during a drag.
    fn on_unselect(&mut self, item: &E) {
        let _ = item;
    }

    /// The whole selection was cleared.
    fn on_clear(&mut self) {}
}

impl<E> SelectionListener<E> for () {}

impl<E, L: SelectionListener<E> + ?Sized> SelectionListener<E> for &mut L {
    fn on_select(&mut self, item: &E) {
        (**self).on_select(item);
    }

    fn on_unselect(&mut self, item: &E) {
        (**self).on_unselect(item);
    }

    fn on_clear(&mut self) {
        (**self).on_clear();
    }
}

type ItemCallback<E> = Box<dyn FnMut(&E)>;

/// A [`SelectionListener`] backed by optional closures.
///
/// ```
/// use understory_marquee::{Callbacks, SelectionListener};
///
/// let mut callbacks = Callbacks::<u32>::new().on_select(|item| assert_eq!(*item, 7));
/// SelectionListener::on_select(&mut callbacks, &7);
/// SelectionListener::on_clear(&mut callbacks); // not set: no-op
/// ```
pub struct Callbacks<E> {
    select: Option<ItemCallback<E>>,
    unselect: Option<ItemCallback<E>>,
    clear: Option<Box<dyn FnMut()>>,
}

impl<E> Callbacks<E> {
    /// Callbacks that do nothing.
    pub fn new() -> Self {
        Self {
            select: None,
            unselect: None,
            clear: None,
        }
    }

    /// Call `f` when an item is selected.
    #[must_use]
    pub fn on_select(mut self, f: impl FnMut(&E) + 'static) -> Self {
        self.select = Some(Box::new(f));
        self
    }

    /// Call `f` when an item is deselected during a drag.
    #[must_use]
    pub fn on_unselect(mut self, f: impl FnMut(&E) + 'static) -> Self {
        self.unselect = Some(Box::new(f));
        self
    }

    /// Call `f` when the whole selection is cleared.
    #[must_use]
    pub fn on_clear(mut self, f: impl FnMut() + 'static) -> Self {
        self.clear = Some(Box::new(f));
        self
    }
}

impl<E> Default for Callbacks<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Callbacks<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("select", &self.select.is_some())
            .field("unselect", &self.unselect.is_some())
            .field("clear", &self.clear.is_some())
            .finish()
    }
}

impl<E> SelectionListener<E> for Callbacks<E> {
    fn on_select(&mut self, item: &E) {
        if let Some(f) = &mut self.select {
            f(item);
        }
    }

    fn on_unselect(&mut self, item: &E) {
        if let Some(f) = &mut self.unselect {
            f(item);
        }
    }

    fn on_clear(&mut self) {
        if let Some(f) = &mut self.clear {
            f();
        }
    }
}

/// Counts from one evaluation pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PassSummary {
    /// Items that ended the pass selected (one `on_select` each).
    pub selected: usize,
    /// Items that received `on_unselect`.
    pub unselected: usize,
}

/// Per-item selection transitions plus the global "drag in progress" flag.
#[derive(Clone, Debug)]
pub struct SelectionState {
    selected_class: String,
    dragging: bool,
}

impl SelectionState {
    /// State that mirrors selection onto the host with `selected_class`.
    pub fn new(selected_class: impl Into<String>) -> Self {
        Self {
            selected_class: selected_class.into(),
            dragging: false,
        }
    }

    /// Class applied to selected items.
    pub fn selected_class(&self) -> &str {
        &self.selected_class
    }

    /// Whether non-collided items are deselected during evaluation.
    #[inline]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Start a drag pass.
    ///
    /// An additive drag does not set the dragging flag, so items outside the
    /// rectangle keep their state.
    pub fn begin_drag<E>(&mut self, additive: bool, snapshot: &mut Snapshot<E>) {
        self.dragging = !additive;
        snapshot.reset_selecting();
    }

    /// Finish the drag pass. Selection made during the drag stands.
    pub fn end_drag<E>(&mut self, snapshot: &mut Snapshot<E>) {
        self.dragging = false;
        snapshot.reset_selecting();
    }

    /// Apply one collision pass of `rect` against every item of `snapshot`.
    pub fn evaluate<S, L>(
        &mut self,
        rect: Rect,
        snapshot: &mut Snapshot<S::Element>,
        surface: &mut S,
        listener: &mut L,
    ) -> PassSummary
    where
        S: Surface + ?Sized,
        L: SelectionListener<S::Element> + ?Sized,
    {
        let class = self.selected_class.as_str();
        let mut summary = PassSummary::default();
        for item in snapshot.items_mut() {
            if intersects(&rect, &item.bounds) {
                item.selecting = true;
                if item.selected {
                    surface.remove_class(&item.element, class);
                    item.selected = false;
                }
                if !item.selected {
                    surface.add_class(&item.element, class);
                    item.selected = true;
                    listener.on_select(&item.element);
                    summary.selected += 1;
                }
            } else if self.dragging {
                surface.remove_class(&item.element, class);
                item.selected = false;
                listener.on_unselect(&item.element);
                summary.unselected += 1;
            }
        }
        tracing::trace!(
            ?rect,
            selected = summary.selected,
            unselected = summary.unselected,
            "evaluated selection pass"
        );
        summary
    }

    /// Deselect every element of `working_set` and notify `on_clear` once.
    ///
    /// The working set may hold elements the snapshot does not cover; all of
    /// them lose the selected class. Cached flags are reset to match.
    pub fn clear<S, L>(
        &mut self,
        working_set: &[S::Element],
        snapshot: &mut Snapshot<S::Element>,
        surface: &mut S,
        listener: &mut L,
    ) where
        S: Surface + ?Sized,
        L: SelectionListener<S::Element> + ?Sized,
    {
        for element in working_set {
            surface.remove_class(element, &self.selected_class);
        }
        for item in snapshot.items_mut() {
            item.selected = false;
        }
        tracing::debug!(items = working_set.len(), "cleared selection");
        listener.on_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Item;
    use crate::test_host::{Node, Notification, Recorder, TestHost};
    use alloc::vec;
    use alloc::vec::Vec;

    const SELECTED: &str = "selected";

    fn setup(items: &[(Rect, bool)]) -> (TestHost, Vec<Node>, Snapshot<Node>) {
        let mut host = TestHost::new(false);
        let nodes: Vec<Node> = items
            .iter()
            .map(|(bounds, selected)| {
                let node = host.add_item(*bounds);
                if *selected {
                    host.add_class(&node, SELECTED);
                }
                node
            })
            .collect();
        let snapshot = Snapshot::capture(&host, &nodes, SELECTED);
        (host, nodes, snapshot)
    }

    #[test]
    fn rect_outside_item_keeps_it_unselected_and_notifies_unselect() {
        let (mut host, nodes, mut snap) = setup(&[(Rect::new(0.0, 0.0, 10.0, 10.0), false)]);
        let mut state = SelectionState::new(SELECTED);
        let mut rec = Recorder::default();

        state.begin_drag(false, &mut snap);
        let summary = state.evaluate(
            Rect::new(20.0, 20.0, 30.0, 30.0),
            &mut snap,
            &mut host,
            &mut rec,
        );

        assert!(!snap.items()[0].is_selected());
        assert!(!host.has_class(&nodes[0], SELECTED));
        assert_eq!(rec.events, vec![Notification::UnSelect(nodes[0])]);
        assert_eq!(summary, PassSummary { selected: 0, unselected: 1 });
    }

    #[test]
    fn rect_overlapping_item_selects_it_once() {
        let (mut host, nodes, mut snap) = setup(&[(Rect::new(0.0, 0.0, 10.0, 10.0), false)]);
        let mut state = SelectionState::new(SELECTED);
        let mut rec = Recorder::default();

        state.begin_drag(false, &mut snap);
        state.evaluate(
            Rect::new(5.0, 5.0, 15.0, 15.0),
            &mut snap,
            &mut host,
            &mut rec,
        );

        assert!(snap.items()[0].is_selected());
        assert!(snap.items()[0].is_selecting());
        assert!(host.has_class(&nodes[0], SELECTED));
        assert_eq!(rec.events, vec![Notification::Select(nodes[0])]);
    }

    #[test]
    fn selected_item_under_rect_is_reconfirmed_every_pass() {
        let (mut host, nodes, mut snap) = setup(&[(Rect::new(0.0, 0.0, 10.0, 10.0), true)]);
        let mut state = SelectionState::new(SELECTED);
        let mut rec = Recorder::default();

        state.begin_drag(false, &mut snap);
        host.class_log.clear();
        state.evaluate(
            Rect::new(5.0, 5.0, 15.0, 15.0),
            &mut snap,
            &mut host,
            &mut rec,
        );
        state.evaluate(
            Rect::new(4.0, 4.0, 15.0, 15.0),
            &mut snap,
            &mut host,
            &mut rec,
        );

        assert!(snap.items()[0].is_selected());
        assert!(host.has_class(&nodes[0], SELECTED));
        assert_eq!(
            rec.events,
            vec![Notification::Select(nodes[0]), Notification::Select(nodes[0])]
        );
        // Toggled off, then on again, in each pass.
        assert_eq!(
            host.class_log,
            vec![
                (nodes[0], false),
                (nodes[0], true),
                (nodes[0], false),
                (nodes[0], true),
            ]
        );
    }

    #[test]
    fn unselect_fires_per_item_per_pass_in_item_order() {
        let (mut host, nodes, mut snap) = setup(&[
            (Rect::new(0.0, 0.0, 10.0, 10.0), false),
            (Rect::new(100.0, 0.0, 110.0, 10.0), true),
            (Rect::new(200.0, 0.0, 210.0, 10.0), false),
        ]);
        let mut state = SelectionState::new(SELECTED);
        let mut rec = Recorder::default();

        state.begin_drag(false, &mut snap);
        let rect = Rect::new(0.0, 0.0, 5.0, 5.0);
        state.evaluate(rect, &mut snap, &mut host, &mut rec);
        state.evaluate(rect, &mut snap, &mut host, &mut rec);

        assert_eq!(
            rec.events,
            vec![
                Notification::Select(nodes[0]),
                Notification::UnSelect(nodes[1]),
                Notification::UnSelect(nodes[2]),
                Notification::Select(nodes[0]),
                Notification::UnSelect(nodes[1]),
                Notification::UnSelect(nodes[2]),
            ]
        );
        assert!(!snap.items()[1].is_selected());
        assert!(!host.has_class(&nodes[1], SELECTED));
    }

    #[test]
    fn additive_drag_leaves_items_outside_alone() {
        let (mut host, nodes, mut snap) = setup(&[
            (Rect::new(0.0, 0.0, 10.0, 10.0), false),
            (Rect::new(100.0, 0.0, 110.0, 10.0), true),
        ]);
        let mut state = SelectionState::new(SELECTED);
        let mut rec = Recorder::default();

        state.begin_drag(true, &mut snap);
        assert!(!state.is_dragging());
        state.evaluate(
            Rect::new(0.0, 0.0, 5.0, 5.0),
            &mut snap,
            &mut host,
            &mut rec,
        );

        assert_eq!(rec.events, vec![Notification::Select(nodes[0])]);
        assert!(snap.items()[1].is_selected());
        assert!(host.has_class(&nodes[1], SELECTED));
    }

    #[test]
    fn no_drag_in_progress_means_no_unselect() {
        let (mut host, _nodes, mut snap) = setup(&[(Rect::new(0.0, 0.0, 10.0, 10.0), true)]);
        let mut state = SelectionState::new(SELECTED);
        let mut rec = Recorder::default();

        state.evaluate(
            Rect::new(50.0, 50.0, 60.0, 60.0),
            &mut snap,
            &mut host,
            &mut rec,
        );

        assert!(rec.events.is_empty());
        assert!(snap.items()[0].is_selected());
    }

    #[test]
    fn clear_covers_the_whole_working_set() {
        let (mut host, mut nodes, mut snap) = setup(&[(Rect::new(0.0, 0.0, 10.0, 10.0), true)]);
        // An element that was never captured.
        let late = host.add_item(Rect::new(50.0, 50.0, 60.0, 60.0));
        host.add_class(&late, SELECTED);
        nodes.push(late);

        let mut state = SelectionState::new(SELECTED);
        let mut rec = Recorder::default();
        state.clear(&nodes, &mut snap, &mut host, &mut rec);

        assert!(nodes.iter().all(|n| !host.has_class(n, SELECTED)));
        assert_eq!(snap.selected().count(), 0);
        assert_eq!(rec.events, vec![Notification::Clear]);
    }

    #[test]
    fn end_drag_resets_touch_markers() {
        let mut snap = Snapshot::from_items(vec![Item::new(
            Node(1),
            Rect::new(0.0, 0.0, 10.0, 10.0),
            false,
        )]);
        let mut host = TestHost::new(false);
        let mut state = SelectionState::new(SELECTED);

        state.begin_drag(false, &mut snap);
        state.evaluate(
            Rect::new(0.0, 0.0, 1.0, 1.0),
            &mut snap,
            &mut host,
            &mut (),
        );
        assert!(snap.items()[0].is_selecting());

        state.end_drag(&mut snap);
        assert!(!state.is_dragging());
        assert!(!snap.items()[0].is_selecting());
        assert!(snap.items()[0].is_selected());
    }

    #[test]
    fn closure_callbacks_receive_notifications() {
        use alloc::rc::Rc;
        use core::cell::RefCell;

        let seen = Rc::new(RefCell::new(Vec::new()));
        let cleared = Rc::new(RefCell::new(0_u32));
        let mut callbacks = Callbacks::new()
            .on_select({
                let seen = Rc::clone(&seen);
                move |n: &Node| seen.borrow_mut().push(n.0)
            })
            .on_clear({
                let cleared = Rc::clone(&cleared);
                move || *cleared.borrow_mut() += 1
            });

        let (mut host, nodes, mut snap) = setup(&[(Rect::new(0.0, 0.0, 10.0, 10.0), false)]);
        let mut state = SelectionState::new(SELECTED);
        state.begin_drag(false, &mut snap);
        state.evaluate(
            Rect::new(0.0, 0.0, 1.0, 1.0),
            &mut snap,
            &mut host,
            &mut callbacks,
        );
        state.evaluate(
            Rect::new(50.0, 50.0, 51.0, 51.0),
            &mut snap,
            &mut host,
            &mut callbacks,
        );
        state.clear(&nodes, &mut snap, &mut host, &mut callbacks);

        assert_eq!(*seen.borrow(), vec![nodes[0].0]);
        assert_eq!(*cleared.borrow(), 1);
    }
}
