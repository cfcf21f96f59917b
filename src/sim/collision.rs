//! Collision tests for axis-aligned geometry
//!
//! Everything in the arena is an axis-aligned box, so the whole collision
//! story is the classic AABB overlap test. Inequalities are strict on all
//! four sides: rectangles that merely share an edge do not collide.

use super::rect::Rect;

/// Strict AABB overlap test.
///
/// Returns true only when the interiors of `a` and `b` overlap; touching
/// edges or corners do not count.
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.pos.x < b.right() && a.right() > b.pos.x && a.pos.y < b.top() && a.top() > b.pos.y
}

/// True when `inner` lies entirely within `outer` (shared edges allowed).
#[inline]
pub fn contains(outer: &Rect, inner: &Rect) -> bool {
    inner.pos.x >= outer.pos.x
        && inner.pos.y >= outer.pos.y
        && inner.right() <= outer.right()
        && inner.top() <= outer.top()
}
