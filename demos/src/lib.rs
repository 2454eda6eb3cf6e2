// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scaffolding for the Understory demos.
//!
//! [`MemoryHost`] is a tiny retained "document": a flat list of elements with
//! bounds, class lists, and inline styles, plus a listener table. It implements
//! the marquee host traits so demos can drive a selection without a real UI.

use std::collections::{BTreeMap, BTreeSet};

use kurbo::Rect;
use understory_marquee::{EventType, InputScope, InputSource, ListenerId, Surface};

/// Handle of an element in a [`MemoryHost`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub u32);

#[derive(Debug, Default)]
struct Element {
    bounds: Rect,
    classes: BTreeSet<String>,
    styles: BTreeMap<String, String>,
    parent: Option<ElementId>,
}

/// An in-memory element tree and listener registry.
#[derive(Debug, Default)]
pub struct MemoryHost {
    elements: BTreeMap<ElementId, Element>,
    listeners: BTreeMap<ListenerId, (InputScope, EventType)>,
    next_listener: u64,
    touch: bool,
}

impl MemoryHost {
    /// Empty host; `touch` decides which input family the marquee binds.
    pub fn new(touch: bool) -> Self {
        Self {
            touch,
            ..Self::default()
        }
    }

    /// Add an element with `bounds` and `classes` under `parent`.
    pub fn insert(
        &mut self,
        parent: Option<ElementId>,
        bounds: Rect,
        classes: &[&str],
    ) -> ElementId {
        let id = ElementId(u32::try_from(self.elements.len()).unwrap_or(u32::MAX));
        let element = Element {
            bounds,
            classes: classes.iter().map(|c| (*c).to_owned()).collect(),
            styles: BTreeMap::new(),
            parent,
        };
        self.elements.insert(id, element);
        id
    }

    /// The listener bound to `event` on `scope`, if any.
    pub fn listener_for(&self, scope: InputScope, event: EventType) -> Option<ListenerId> {
        self.listeners
            .iter()
            .find(|(_, binding)| **binding == (scope, event))
            .map(|(id, _)| *id)
    }

    /// Inline style `property` of `element`.
    pub fn style(&self, element: ElementId, property: &str) -> Option<&str> {
        self.elements
            .get(&element)
            .and_then(|e| e.styles.get(property))
            .map(String::as_str)
    }
}

/// Matches `.class` selectors only, which is all the demos need.
fn matches(element: &Element, selector: &str) -> bool {
    selector
        .strip_prefix('.')
        .is_some_and(|class| element.classes.contains(class))
}

impl Surface for MemoryHost {
    type Element = ElementId;

    fn query_items(&self, container: &ElementId, selector: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|(_, e)| e.parent == Some(*container) && matches(e, selector))
            .map(|(id, _)| *id)
            .collect()
    }

    fn bounds(&self, element: &ElementId) -> Rect {
        self.elements
            .get(element)
            .map_or(Rect::ZERO, |e| e.bounds)
    }

    fn has_class(&self, element: &ElementId, class: &str) -> bool {
        self.elements
            .get(element)
            .is_some_and(|e| e.classes.contains(class))
    }

    fn add_class(&mut self, element: &ElementId, class: &str) {
        if let Some(e) = self.elements.get_mut(element) {
            e.classes.insert(class.to_owned());
        }
    }

    fn remove_class(&mut self, element: &ElementId, class: &str) {
        if let Some(e) = self.elements.get_mut(element) {
            e.classes.remove(class);
        }
    }

    fn set_style(&mut self, element: &ElementId, property: &str, value: &str) {
        if let Some(e) = self.elements.get_mut(element) {
            e.styles.insert(property.to_owned(), value.to_owned());
        }
    }

    fn create_element(&mut self, class: &str) -> ElementId {
        self.insert(None, Rect::ZERO, &[class])
    }

    fn append_child(&mut self, parent: &ElementId, child: &ElementId) {
        if let Some(e) = self.elements.get_mut(child) {
            e.parent = Some(*parent);
        }
    }

    fn remove_element(&mut self, element: &ElementId) {
        if let Some(e) = self.elements.get_mut(element) {
            e.parent = None;
        }
    }
}

impl InputSource for MemoryHost {
    fn supports_touch(&self) -> bool {
        self.touch
    }

    fn listen(&mut self, scope: InputScope, event: EventType) -> ListenerId {
        self.next_listener += 1;
        let id = ListenerId(self.next_listener);
        self.listeners.insert(id, (scope, event));
        id
    }

    fn unlisten(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
    }
}
