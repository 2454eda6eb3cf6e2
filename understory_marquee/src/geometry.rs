// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collision test and the selection rectangle.

use kurbo::{Point, Rect};

/// Determines whether two rectangles overlap in any way.
///
/// Two rectangles intersect unless one lies strictly to the left, right, above,
/// or below the other. Edges are part of the rectangle, so boxes that only share
/// a boundary are considered intersecting.
///
/// Both rectangles are expected to be normalized (`x0 <= x1`, `y0 <= y1`).
///
/// # Examples
///
/// ```
/// use kurbo::Rect;
/// use understory_marquee::intersects;
///
/// let item = Rect::new(0.0, 0.0, 10.0, 10.0);
/// assert!(intersects(&Rect::new(5.0, 5.0, 15.0, 15.0), &item));
/// assert!(intersects(&Rect::new(10.0, 0.0, 20.0, 10.0), &item));
/// assert!(!intersects(&Rect::new(20.0, 20.0, 30.0, 30.0), &item));
/// ```
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    !(a.x1 < b.x0 || a.x0 > b.x1 || a.y1 < b.y0 || a.y0 > b.y1)
}

/// Rectangle spanned by a drag gesture.
///
/// The anchor is fixed when the drag starts; the current point follows the pointer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SelectionRect {
    /// Point where the drag started.
    pub anchor: Point,
    /// Latest pointer position.
    pub current: Point,
}

impl SelectionRect {
    /// Zero-sized rectangle at `anchor`.
    pub const fn new(anchor: Point) -> Self {
        Self {
            anchor,
            current: anchor,
        }
    }

    /// Move the free corner to `current`.
    #[inline]
    pub fn update(&mut self, current: Point) {
        self.current = current;
    }

    /// Axis-aligned rectangle covering both points, for a drag in any direction.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.anchor.x.min(self.current.x),
            self.anchor.y.min(self.current.y),
            self.anchor.x.max(self.current.x),
            self.anchor.y.max(self.current.y),
        )
    }

    /// Whether the pointer is back exactly where the drag started.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.anchor == self.current
    }
}
