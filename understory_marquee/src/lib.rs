// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md
// for any missing links.
// cargo rdme --workspace-project=understory_marquee --heading-base-level=0

//! Understory Marquee: rubber-band multi-selection.
//!
//! The user presses a pointer inside a container, drags out a rectangle, and every
//! item the rectangle touches becomes selected. This crate is the part of that
//! interaction with actual logic:
//!
//! - [`intersects`]: the collision test between the selection rectangle and an
//!   item's bounds (edges touching count as a hit).
//! - [`Snapshot`]: cached item bounds and selection flags, captured once
//!   ([`RefreshPolicy::Static`]) or at every drag start ([`RefreshPolicy::AutoRefresh`]).
//! - [`SelectionState`]: applies collision results to items, mirrors them with the
//!   selected class, and notifies a [`SelectionListener`].
//! - [`Marquee`]: the interaction controller. It binds press/motion/release
//!   listeners, tracks the [`DragSession`], draws the rectangle, and treats a
//!   press-release without movement as "clear the selection".
//!
//! ## Host integration
//!
//! Rendering, layout, and event delivery belong to the host. The host implements
//! [`Surface`] (element queries, bounds, class and style mutation) and
//! [`InputSource`] (touch probe and listener subscription), then forwards each
//! native event to [`Marquee::handle_event`] together with the [`ListenerId`] it
//! was subscribed under. An [`EventResponse::Consumed`] result means the host
//! should prevent the default action and stop propagation.
//!
//! Presses are listened for on the container scope; motion and release on the
//! global scope ([`InputScope::Global`]). Touch and mouse events are never bound
//! together: the family is picked once from [`InputSource::supports_touch`].
//!
//! All work runs synchronously inside the call that delivered the event. There is
//! no background work and at most one drag is in progress at a time.
//!
//! ## Configuration
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_marquee::{ConfigError, MarqueeConfig, SelectionRect, intersects};
//!
//! let config = MarqueeConfig::new("li.photo", "marquee", "selected").with_auto_refresh(true);
//! assert!(config.validate().is_ok());
//!
//! let bad = MarqueeConfig::new("li.photo", "marquee", "");
//! assert_eq!(
//!     bad.validate(),
//!     Err(ConfigError::EmptyClassName { field: "selected_class" })
//! );
//!
//! // Dragging up and to the left still yields a normalized rectangle.
//! let mut drag = SelectionRect::new((40.0, 40.0).into());
//! drag.update((5.0, 5.0).into());
//! assert_eq!(drag.rect(), Rect::new(5.0, 5.0, 40.0, 40.0));
//! assert!(intersects(&drag.rect(), &Rect::new(0.0, 0.0, 10.0, 10.0)));
//! ```
//!
//! See `demos/examples/marquee_headless.rs` for a complete in-memory host.
//!
//! ## Features
//!
//! - `std` *(default)*: enables `std` support for `kurbo`, `thiserror`, and `tracing`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//!
//! Lifecycle transitions are reported through `tracing` at `debug` level and each
//! evaluation pass at `trace` level; install a subscriber in the host to see them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod geometry;
mod host;
mod input;
mod selection;
mod snapshot;

#[cfg(test)]
mod test_host;

pub use config::{ConfigError, MarqueeConfig};
pub use controller::{DragSession, Marquee};
pub use geometry::{SelectionRect, intersects};
pub use host::{Host, InputScope, InputSource, ListenerId, Surface};
pub use input::{EventResponse, EventType, InputMode, Modifiers, PointerEvent};
pub use selection::{Callbacks, PassSummary, SelectionListener, SelectionState};
pub use snapshot::{Item, RefreshPolicy, Snapshot};
