// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory host used by the unit tests.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::Rect;

use crate::host::{InputScope, InputSource, ListenerId, Surface};
use crate::input::EventType;
use crate::selection::SelectionListener;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Node(pub(crate) u32);

pub(crate) const CONTAINER: Node = Node(0);

#[derive(Debug)]
pub(crate) struct TestHost {
    next_node: u32,
    next_listener: u64,
    touch: bool,
    items: Vec<Node>,
    bounds: BTreeMap<Node, Rect>,
    classes: BTreeSet<(Node, String)>,
    /// Every class mutation: `true` for add, `false` for remove.
    pub(crate) class_log: Vec<(Node, bool)>,
    styles: BTreeMap<(Node, String), String>,
    /// Attached `(parent, child)` pairs.
    pub(crate) attached: Vec<(Node, Node)>,
    pub(crate) listeners: BTreeMap<ListenerId, (InputScope, EventType)>,
    pub(crate) unlistened: Vec<ListenerId>,
}

impl TestHost {
    pub(crate) fn new(touch: bool) -> Self {
        Self {
            next_node: 1,
            next_listener: 1,
            touch,
            items: Vec::new(),
            bounds: BTreeMap::new(),
            classes: BTreeSet::new(),
            class_log: Vec::new(),
            styles: BTreeMap::new(),
            attached: Vec::new(),
            listeners: BTreeMap::new(),
            unlistened: Vec::new(),
        }
    }

    fn node(&mut self) -> Node {
        let node = Node(self.next_node);
        self.next_node += 1;
        node
    }

    /// Add a selectable child of [`CONTAINER`].
    pub(crate) fn add_item(&mut self, bounds: Rect) -> Node {
        let node = self.node();
        self.bounds.insert(node, bounds);
        self.items.push(node);
        node
    }

    /// Change the layout bounds of `node`.
    pub(crate) fn move_item(&mut self, node: Node, bounds: Rect) {
        self.bounds.insert(node, bounds);
    }

    pub(crate) fn style(&self, node: Node, property: &str) -> Option<&str> {
        self.styles
            .get(&(node, property.to_string()))
            .map(String::as_str)
    }

    pub(crate) fn is_attached(&self, child: Node) -> bool {
        self.attached.iter().any(|(_, c)| *c == child)
    }

    /// The live listener bound to `event` on `scope`, if any.
    pub(crate) fn listener_for(&self, scope: InputScope, event: EventType) -> Option<ListenerId> {
        self.listeners
            .iter()
            .find(|(_, binding)| **binding == (scope, event))
            .map(|(id, _)| *id)
    }
}

impl Surface for TestHost {
    type Element = Node;

    fn query_items(&self, container: &Node, _selector: &str) -> Vec<Node> {
        if *container == CONTAINER {
            self.items.clone()
        } else {
            Vec::new()
        }
    }

    fn bounds(&self, element: &Node) -> Rect {
        self.bounds.get(element).copied().unwrap_or(Rect::ZERO)
    }

    fn has_class(&self, element: &Node, class: &str) -> bool {
        self.classes.contains(&(*element, class.to_string()))
    }

    fn add_class(&mut self, element: &Node, class: &str) {
        self.classes.insert((*element, class.to_string()));
        self.class_log.push((*element, true));
    }

    fn remove_class(&mut self, element: &Node, class: &str) {
        self.classes.remove(&(*element, class.to_string()));
        self.class_log.push((*element, false));
    }

    fn set_style(&mut self, element: &Node, property: &str, value: &str) {
        self.styles
            .insert((*element, property.to_string()), value.to_string());
    }

    fn create_element(&mut self, class: &str) -> Node {
        let node = self.node();
        self.classes.insert((node, class.to_string()));
        node
    }

    fn append_child(&mut self, parent: &Node, child: &Node) {
        self.attached.retain(|(_, c)| c != child);
        self.attached.push((*parent, *child));
    }

    fn remove_element(&mut self, element: &Node) {
        self.attached.retain(|(_, c)| c != element);
    }
}

impl InputSource for TestHost {
    fn supports_touch(&self) -> bool {
        self.touch
    }

    fn listen(&mut self, scope: InputScope, event: EventType) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.insert(id, (scope, event));
        id
    }

    fn unlisten(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
        self.unlistened.push(id);
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Notification {
    Select(Node),
    UnSelect(Node),
    Clear,
}

#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub(crate) events: Vec<Notification>,
}

impl SelectionListener<Node> for Recorder {
    fn on_select(&mut self, item: &Node) {
        self.events.push(Notification::Select(*item));
    }

    fn on_unselect(&mut self, item: &Node) {
        self.events.push(Notification::UnSelect(*item));
    }

    fn on_clear(&mut self) {
        self.events.push(Notification::Clear);
    }
}
