// SPDX-FileCopyrightText: 2022 Thomas Kramer
//
// SPDX-License-Identifier: AGPL-3.0-or-later

#![deny(missing_docs)]

//! Sweep line enumeration of line segment intersections.
//!
//! Takes a set of straight line segments and reports every point where two
//! or more of them meet, using the Bentley-Ottmann algorithm in
//! O((n + k) log n) instead of testing all O(n²) pairs. Coordinate
//! comparisons are tolerance based (see [`EPS`]), so degenerate inputs such
//! as vertical segments or several segments through one point stay stable
//! under floating-point noise.

mod event;
mod point;
mod rb_tree;
mod segment;
mod sweep;

#[cfg(feature = "generators")]
pub mod generators;

// API exports.
pub use event::{Event, EventKind};
pub use point::{Coord, Point, EPS, EPS_INC};
pub use rb_tree::{Iter, NodeId, RbTree};
pub use segment::{
    can_intersect_1d, cross_prod_sign, intersection_point, is_intersecting, Segment,
};
pub use sweep::{find_intersections, Intersection};
