//! Catch and miss predicates
//!
//! All geometry here is axis-aligned: the basket is a rectangle pinned to
//! the playfield bottom, objects are square bounding boxes falling straight
//! down, so the catch test reduces to one vertical threshold plus a 1-D
//! span overlap.

use crate::consts::*;

use super::state::{Basket, FallingObject};

/// Strict 1-D overlap of two half-open spans
///
/// Touching edges do not count: an object whose left edge sits exactly on
/// the basket's right edge is not caught.
#[inline]
pub fn spans_overlap(a: (f32, f32), b: (f32, f32)) -> bool {
    a.1 > b.0 && a.0 < b.1
}

/// Catch test: object bottom has reached the basket's top edge and the
/// horizontal spans overlap. Evaluated before the miss test each tick.
#[inline]
pub fn object_caught(obj: &FallingObject, basket: &Basket) -> bool {
    obj.bottom() >= CATCH_LINE && spans_overlap(obj.span(), basket.span())
}

/// Miss test: object top edge has reached the playfield bottom uncaught
#[inline]
pub fn object_missed(obj: &FallingObject) -> bool {
    obj.pos.y >= PLAYFIELD_HEIGHT
}

/// Off-screen guard: object fully past the bottom plus its own size.
/// Unreachable once the miss test removes objects, kept as a cleanup
/// backstop for states constructed by hand.
#[inline]
pub fn object_off_screen(obj: &FallingObject) -> bool {
    obj.pos.y >= PLAYFIELD_HEIGHT + OBJECT_SIZE
}
