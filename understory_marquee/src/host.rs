// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator interfaces the marquee consumes from its host.
//!
//! The marquee never renders, lays out, or receives events on its own. A host
//! environment (a DOM binding, a retained-mode toolkit, a test double) provides:
//!
//! - a [`Surface`]: element queries, layout bounds, class-list and style mutation,
//!   and attaching the visible selection rectangle;
//! - an [`InputSource`]: touch capability and listener (un)subscription on two
//!   distinct scopes, the container and the global (document) scope.
//!
//! Element handles are opaque to this crate; they only need to be cloneable and
//! comparable.

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Rect;

use crate::input::EventType;

/// Element queries and mutations on the rendering surface.
pub trait Surface {
    /// Opaque handle to a visual element.
    type Element: Clone + PartialEq + Debug;

    /// Elements under `container` matching `selector`, in document order.
    fn query_items(&self, container: &Self::Element, selector: &str) -> Vec<Self::Element>;

    /// Current layout bounds of `element` in surface coordinates.
    fn bounds(&self, element: &Self::Element) -> Rect;

    /// Whether `element` carries `class`.
    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    /// Add `class` to `element`.
    fn add_class(&mut self, element: &Self::Element, class: &str);

    /// Remove `class` from `element`.
    fn remove_class(&mut self, element: &Self::Element, class: &str);

    /// Set the style property `property` of `element` to `value`.
    fn set_style(&mut self, element: &Self::Element, property: &str, value: &str);

    /// Create a detached element carrying `class`.
    fn create_element(&mut self, class: &str) -> Self::Element;

    /// Attach `child` as the last child of `parent`.
    fn append_child(&mut self, parent: &Self::Element, child: &Self::Element);

    /// Detach `element` from its parent. Detaching a detached element is a no-op.
    fn remove_element(&mut self, element: &Self::Element);
}

/// Where a listener is attached.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InputScope {
    /// The container element the marquee was initialized on.
    Container,
    /// The global (document) scope, which keeps receiving events after the
    /// pointer leaves the container.
    Global,
}

/// Identity of a subscribed listener, issued by the host.
///
/// The marquee keeps the ids it was given and hands the very same ids back to
/// [`InputSource::unlisten`] on teardown.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Input event subscription.
pub trait InputSource {
    /// Whether the environment delivers touch events.
    fn supports_touch(&self) -> bool;

    /// Subscribe to `event` on `scope`. The host delivers matching events to
    /// [`Marquee::handle_event`](crate::Marquee::handle_event) with the returned id.
    fn listen(&mut self, scope: InputScope, event: EventType) -> ListenerId;

    /// Cancel a subscription made by [`listen`](Self::listen).
    fn unlisten(&mut self, id: ListenerId);
}

/// Everything the marquee controller needs from its host.
pub trait Host: Surface + InputSource {}

impl<T: Surface + InputSource> Host for T {}
