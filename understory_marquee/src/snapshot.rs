// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cached item bounds and selection flags.
//!
//! Querying layout on every pointer move is expensive, so the marquee works from
//! a [`Snapshot`]: each selectable element's bounds and selection state captured
//! at one point in time. Bounds are never re-read during a drag.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::host::Surface;

/// When the snapshot is (re)taken.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RefreshPolicy {
    /// Capture once at initialization and reuse for every drag.
    ///
    /// Collision results go stale if the layout changes afterwards.
    #[default]
    Static,
    /// Capture again at the start of every drag.
    AutoRefresh,
}

impl RefreshPolicy {
    /// Policy for the `auto_refresh` configuration flag.
    #[inline]
    pub const fn from_auto_refresh(auto_refresh: bool) -> Self {
        if auto_refresh {
            Self::AutoRefresh
        } else {
            Self::Static
        }
    }
}

/// One selectable element as captured by a snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct Item<E> {
    /// Host element handle.
    pub element: E,
    /// Bounds at capture time, in surface coordinates.
    pub bounds: Rect,
    pub(crate) selected: bool,
    pub(crate) selecting: bool,
}

impl<E> Item<E> {
    /// Item with the given bounds and selection state, not touched by any drag.
    pub const fn new(element: E, bounds: Rect, selected: bool) -> Self {
        Self {
            element,
            bounds,
            selected,
            selecting: false,
        }
    }

    /// Whether the item is selected.
    #[inline]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    /// Whether the current drag has collided with this item.
    #[inline]
    pub const fn is_selecting(&self) -> bool {
        self.selecting
    }
}

/// Captured items, in working-set order.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot<E> {
    items: Vec<Item<E>>,
}

impl<E> Default for Snapshot<E> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<E: Clone> Snapshot<E> {
    /// Capture bounds and selection state for every element of `working_set`.
    ///
    /// An element counts as selected when it carries `selected_class`.
    pub fn capture<S>(surface: &S, working_set: &[E], selected_class: &str) -> Self
    where
        S: Surface<Element = E> + ?Sized,
    {
        let items = working_set
            .iter()
            .map(|element| {
                Item::new(
                    element.clone(),
                    surface.bounds(element),
                    surface.has_class(element, selected_class),
                )
            })
            .collect();
        Self { items }
    }
}

impl<E> Snapshot<E> {
    /// Build a snapshot from already captured items.
    pub fn from_items(items: Vec<Item<E>>) -> Self {
        Self { items }
    }

    /// Captured items.
    pub fn items(&self) -> &[Item<E>] {
        &self.items
    }

    pub(crate) fn items_mut(&mut self) -> &mut [Item<E>] {
        &mut self.items
    }

    /// Number of captured items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Elements currently marked selected.
    pub fn selected(&self) -> impl Iterator<Item = &E> {
        self.items
            .iter()
            .filter(|item| item.selected)
            .map(|item| &item.element)
    }

    /// Forget which items the last drag touched.
    pub(crate) fn reset_selecting(&mut self) {
        for item in &mut self.items {
            item.selecting = false;
        }
    }
}
