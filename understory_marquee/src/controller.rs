// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interaction controller: drag lifecycle over host input.

use alloc::format;
use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::{Point, Rect};

use crate::config::{ConfigError, MarqueeConfig};
use crate::geometry::SelectionRect;
use crate::host::{Host, InputScope, ListenerId, Surface};
use crate::input::{EventResponse, InputMode, PointerEvent};
use crate::selection::{SelectionListener, SelectionState};
use crate::snapshot::{Item, RefreshPolicy, Snapshot};

/// Styles applied to the container so dragging does not select text.
const CONTAINER_STYLES: [(&str, &str); 6] = [
    ("-webkit-touch-callout", "none"),
    ("-webkit-user-select", "none"),
    ("-khtml-user-select", "none"),
    ("-moz-user-select", "none"),
    ("-ms-user-select", "none"),
    ("user-select", "none"),
];

/// State of one drag gesture, from press to release.
///
/// A session only exists while the pointer is down: it is dropped on release
/// or [`Marquee::destroy`], so an observable session is always active.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragSession {
    /// Anchor and current pointer position.
    pub rect: SelectionRect,
    /// The drag started with Ctrl or Meta held.
    pub additive: bool,
    /// The pointer has not been released yet. Always `true` for a live session.
    pub active: bool,
}

impl DragSession {
    fn start(anchor: Point, additive: bool) -> Self {
        Self {
            rect: SelectionRect::new(anchor),
            additive,
            active: true,
        }
    }
}

/// Listener ids for the three bound events.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Bindings {
    press: ListenerId,
    motion: ListenerId,
    release: ListenerId,
}

/// Rubber-band selection over the items of one container.
///
/// The controller owns no host resources directly. Every operation that touches
/// the host takes it as an argument, and the host delivers input by calling
/// [`handle_event`](Self::handle_event) with the [`ListenerId`] it handed out
/// from [`InputSource::listen`](crate::InputSource::listen).
///
/// Presses are listened for on the container; motion and release on the global
/// scope, so a drag keeps tracking after the pointer leaves the container.
#[derive(Debug)]
pub struct Marquee<E, L = ()> {
    config: MarqueeConfig,
    policy: RefreshPolicy,
    mode: InputMode,
    container: E,
    overlay: E,
    working_set: Vec<E>,
    snapshot: Snapshot<E>,
    state: SelectionState,
    session: Option<DragSession>,
    bindings: Option<Bindings>,
    listener: L,
}

impl<E, L> Marquee<E, L>
where
    E: Clone + PartialEq + Debug,
    L: SelectionListener<E>,
{
    /// Validate `config`, set up `container` and bind input listeners.
    ///
    /// The working set is the elements matching `config.items` at this moment.
    /// With the static refresh policy their bounds are captured now and reused
    /// for every drag.
    pub fn initialize<H>(
        host: &mut H,
        container: E,
        config: MarqueeConfig,
        listener: L,
    ) -> Result<Self, ConfigError>
    where
        H: Host<Element = E> + ?Sized,
    {
        config.validate()?;

        let policy = RefreshPolicy::from_auto_refresh(config.auto_refresh);
        let mode = InputMode::from_touch_support(host.supports_touch());
        let working_set = host.query_items(&container, &config.items);
        let snapshot = match policy {
            RefreshPolicy::Static => {
                Snapshot::capture(&*host, &working_set, &config.selected_class)
            }
            RefreshPolicy::AutoRefresh => Snapshot::default(),
        };
        let overlay = host.create_element(&config.selection_class);

        for (property, value) in CONTAINER_STYLES {
            host.set_style(&container, property, value);
        }

        let bindings = Bindings {
            press: host.listen(InputScope::Container, mode.press()),
            motion: host.listen(InputScope::Global, mode.motion()),
            release: host.listen(InputScope::Global, mode.release()),
        };

        tracing::debug!(
            items = working_set.len(),
            ?mode,
            ?policy,
            "initialized marquee"
        );

        Ok(Self {
            state: SelectionState::new(config.selected_class.clone()),
            config,
            policy,
            mode,
            container,
            overlay,
            working_set,
            snapshot,
            session: None,
            bindings: Some(bindings),
            listener,
        })
    }

    /// Deliver an input event received on listener `id`.
    ///
    /// Every event on a live binding is consumed, including presses while
    /// disabled and motion without a preceding press. Events on unknown
    /// listeners, or after [`destroy`](Self::destroy), are ignored.
    pub fn handle_event<H>(
        &mut self,
        host: &mut H,
        id: ListenerId,
        event: &PointerEvent,
    ) -> EventResponse
    where
        H: Host<Element = E> + ?Sized,
    {
        let Some(bindings) = self.bindings else {
            return EventResponse::Ignored;
        };
        if id == bindings.press {
            self.press(host, event);
        } else if id == bindings.motion {
            self.motion(host, event);
        } else if id == bindings.release {
            self.release(host, event);
        } else {
            return EventResponse::Ignored;
        }
        EventResponse::Consumed
    }

    fn press<H>(&mut self, host: &mut H, event: &PointerEvent)
    where
        H: Host<Element = E> + ?Sized,
    {
        if self.config.disable {
            return;
        }
        // A second contact or button during a drag does not restart it.
        if self.session.is_some() {
            tracing::trace!(at = ?event.position, "press during drag ignored");
            return;
        }
        if self.policy == RefreshPolicy::AutoRefresh {
            self.snapshot =
                Snapshot::capture(&*host, &self.working_set, &self.config.selected_class);
        }

        let additive = event.modifiers.is_additive();
        self.state.begin_drag(additive, &mut self.snapshot);
        self.session = Some(DragSession::start(event.position, additive));
        self.create_overlay(host, event.position);

        tracing::debug!(anchor = ?event.position, additive, "drag started");
    }

    fn motion<H>(&mut self, host: &mut H, event: &PointerEvent)
    where
        H: Host<Element = E> + ?Sized,
    {
        let Some(session) = &mut self.session else {
            return;
        };
        session.rect.update(event.position);
        let rect = session.rect.rect();

        self.draw_overlay(host, rect);
        self.state
            .evaluate(rect, &mut self.snapshot, host, &mut self.listener);
    }

    fn release<H>(&mut self, host: &mut H, event: &PointerEvent)
    where
        H: Host<Element = E> + ?Sized,
    {
        let Some(mut session) = self.session.take() else {
            return;
        };
        session.rect.update(event.position);

        self.state.end_drag(&mut self.snapshot);
        host.remove_element(&self.overlay);

        if session.rect.is_degenerate() {
            tracing::debug!(at = ?event.position, "click without movement, clearing");
            self.clear(host);
        } else {
            tracing::debug!(rect = ?session.rect.rect(), "drag finished");
        }
    }

    fn create_overlay<S>(&self, surface: &mut S, at: Point)
    where
        S: Surface<Element = E> + ?Sized,
    {
        let overlay = &self.overlay;
        surface.set_style(overlay, "position", "absolute");
        surface.set_style(overlay, "top", &format!("{}px", at.y));
        surface.set_style(overlay, "left", &format!("{}px", at.x));
        surface.set_style(overlay, "width", "0");
        surface.set_style(overlay, "height", "0");
        surface.set_style(overlay, "z-index", "999");
        surface.set_style(overlay, "overflow", "hidden");
        surface.append_child(&self.container, overlay);
    }

    fn draw_overlay<S>(&self, surface: &mut S, rect: Rect)
    where
        S: Surface<Element = E> + ?Sized,
    {
        let overlay = &self.overlay;
        surface.set_style(overlay, "width", &format!("{}px", rect.width()));
        surface.set_style(overlay, "height", &format!("{}px", rect.height()));
        surface.set_style(overlay, "top", &format!("{}px", rect.y0));
        surface.set_style(overlay, "left", &format!("{}px", rect.x0));
    }

    /// Deselect every item of the working set and notify `on_clear`.
    pub fn clear<S>(&mut self, surface: &mut S)
    where
        S: Surface<Element = E> + ?Sized,
    {
        self.state.clear(
            &self.working_set,
            &mut self.snapshot,
            surface,
            &mut self.listener,
        );
    }

    /// Re-query the working set with the item selector and capture a fresh snapshot.
    ///
    /// Bounds stay fixed for the duration of a drag, so this does nothing and
    /// returns `false` while one is in progress.
    pub fn refresh_items<S>(&mut self, surface: &mut S) -> bool
    where
        S: Surface<Element = E> + ?Sized,
    {
        if self.session.is_some() {
            return false;
        }
        self.working_set = surface.query_items(&self.container, &self.config.items);
        self.snapshot =
            Snapshot::capture(&*surface, &self.working_set, &self.config.selected_class);
        tracing::debug!(items = self.working_set.len(), "refreshed items");
        true
    }

    /// Unbind every input listener and release the selection rectangle.
    ///
    /// A drag in progress is abandoned without release-time notifications.
    /// Subsequent input events are ignored. Calling this twice is a no-op.
    pub fn destroy<H>(&mut self, host: &mut H)
    where
        H: Host<Element = E> + ?Sized,
    {
        let Some(bindings) = self.bindings.take() else {
            return;
        };
        host.unlisten(bindings.press);
        host.unlisten(bindings.motion);
        host.unlisten(bindings.release);

        if self.session.take().is_some() {
            self.state.end_drag(&mut self.snapshot);
            host.remove_element(&self.overlay);
        }
        tracing::debug!("destroyed marquee");
    }
}

impl<E, L> Marquee<E, L> {
    /// Enable or suppress drag initiation.
    pub fn set_disabled(&mut self, disable: bool) {
        self.config.disable = disable;
    }

    /// The active configuration.
    pub fn config(&self) -> &MarqueeConfig {
        &self.config
    }

    /// Input family chosen at initialization.
    pub fn input_mode(&self) -> InputMode {
        self.mode
    }

    /// The container element.
    pub fn container(&self) -> &E {
        &self.container
    }

    /// The element used to draw the selection rectangle.
    pub fn overlay(&self) -> &E {
        &self.overlay
    }

    /// The elements a [`clear`](Self::clear) affects.
    pub fn working_set(&self) -> &[E] {
        &self.working_set
    }

    /// Items of the current snapshot.
    pub fn items(&self) -> &[Item<E>] {
        self.snapshot.items()
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> &Snapshot<E> {
        &self.snapshot
    }

    /// The drag in progress, if any.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Whether [`destroy`](Self::destroy) was called.
    pub fn is_destroyed(&self) -> bool {
        self.bindings.is_none()
    }

    /// The selection listener.
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// The selection listener, mutably.
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }
}
