// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input as seen by the marquee controller.
//!
//! Hosts translate their native mouse or touch events into a [`PointerEvent`] and
//! deliver it through [`Marquee::handle_event`](crate::Marquee::handle_event)
//! together with the listener id it was subscribed under.

use kurbo::Point;

bitflags::bitflags! {
    /// Modifier keys held while an input event was generated.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift key.
        const SHIFT = 0b0000_0001;
        /// Control key.
        const CTRL  = 0b0000_0010;
        /// Alt / Option key.
        const ALT   = 0b0000_0100;
        /// Meta / Command / Super key.
        const META  = 0b0000_1000;
    }
}

impl Modifiers {
    /// Modifiers that start an additive drag.
    pub const ADDITIVE: Self = Self::CTRL.union(Self::META);

    /// Whether a press with these modifiers starts an additive drag.
    #[inline]
    pub const fn is_additive(self) -> bool {
        self.intersects(Self::ADDITIVE)
    }
}

/// Which family of input events the controller listens to.
///
/// Chosen once at construction by probing the host for touch support; the two
/// families are never bound at the same time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InputMode {
    /// `mousedown` / `mousemove` / `mouseup`.
    Mouse,
    /// `touchstart` / `touchmove` / `touchend`.
    Touch,
}

impl InputMode {
    /// Pick the input family from the host's touch capability.
    #[inline]
    pub const fn from_touch_support(touch: bool) -> Self {
        if touch { Self::Touch } else { Self::Mouse }
    }

    /// Event type that starts a drag.
    pub const fn press(self) -> EventType {
        match self {
            Self::Mouse => EventType::MouseDown,
            Self::Touch => EventType::TouchStart,
        }
    }

    /// Event type that updates a drag.
    pub const fn motion(self) -> EventType {
        match self {
            Self::Mouse => EventType::MouseMove,
            Self::Touch => EventType::TouchMove,
        }
    }

    /// Event type that ends a drag.
    pub const fn release(self) -> EventType {
        match self {
            Self::Mouse => EventType::MouseUp,
            Self::Touch => EventType::TouchEnd,
        }
    }
}

/// Native event types the controller subscribes to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventType {
    /// Mouse button pressed.
    MouseDown,
    /// Mouse moved.
    MouseMove,
    /// Mouse button released.
    MouseUp,
    /// Touch contact started.
    TouchStart,
    /// Touch contact moved.
    TouchMove,
    /// Touch contact ended.
    TouchEnd,
}

impl EventType {
    /// The host-facing event name (`"mousedown"`, `"touchend"`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::MouseDown => "mousedown",
            Self::MouseMove => "mousemove",
            Self::MouseUp => "mouseup",
            Self::TouchStart => "touchstart",
            Self::TouchMove => "touchmove",
            Self::TouchEnd => "touchend",
        }
    }
}

/// A pointer event in surface (page) coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Pointer position.
    pub position: Point,
    /// Modifier keys held when the event was generated.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Event at `position` with no modifiers held.
    pub fn at(position: impl Into<Point>) -> Self {
        Self {
            position: position.into(),
            modifiers: Modifiers::empty(),
        }
    }

    /// Replace the modifier state.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// What the host should do with a delivered event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EventResponse {
    /// The controller handled the event: suppress its default action and stop propagation.
    Consumed,
    /// The event did not belong to a live binding; let the host process it normally.
    Ignored,
}

impl EventResponse {
    /// Whether the host should prevent the default action and stop propagation.
    #[inline]
    pub const fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_or_meta_is_additive() {
        assert!(Modifiers::CTRL.is_additive());
        assert!(Modifiers::META.is_additive());
        assert!((Modifiers::SHIFT | Modifiers::META).is_additive());
        assert!(!Modifiers::SHIFT.is_additive());
        assert!(!Modifiers::ALT.is_additive());
        assert!(!Modifiers::empty().is_additive());
    }

    #[test]
    fn input_mode_event_families_do_not_mix() {
        let mouse = InputMode::from_touch_support(false);
        assert_eq!(mouse, InputMode::Mouse);
        assert_eq!(mouse.press().name(), "mousedown");
        assert_eq!(mouse.motion().name(), "mousemove");
        assert_eq!(mouse.release().name(), "mouseup");

        let touch = InputMode::from_touch_support(true);
        assert_eq!(touch, InputMode::Touch);
        assert_eq!(touch.press().name(), "touchstart");
        assert_eq!(touch.motion().name(), "touchmove");
        assert_eq!(touch.release().name(), "touchend");
    }
}
