// SPDX-FileCopyrightText: 2022 Thomas Kramer
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Sweep events and their queue ordering.

use std::cmp::Ordering;

use crate::point::{Point, EPS};

/// What happens to a segment at an event point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// The segment starts here.
    Begin = 0,
    /// The segment is cut here by an intersection without starting or
    /// ending here.
    Interior = 1,
    /// The segment ends here.
    End = 2,
}

/// An entry of the event queue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The point where the event occurs.
    pub p: Point,
    /// The type of event.
    pub kind: EventKind,
    /// The id of the segment the event belongs to.
    pub seg_id: usize,
}

impl Event {
    /// Create a new event.
    pub fn new(p: Point, kind: EventKind, seg_id: usize) -> Self {
        Event { p, kind, seg_id }
    }

    /// Total queue order: x, then y (both within [`EPS`]), then segment id.
    ///
    /// The id tiebreak keeps value-equal points of different segments
    /// distinct, so the queue can hold all of them at once. The kind is
    /// deliberately not part of the key: an intersection event scheduled at
    /// a segment's own endpoint collapses into the endpoint event already
    /// queued for it.
    pub fn order(&self, other: &Event) -> Ordering {
        if (self.p.x - other.p.x).abs() > EPS {
            self.p.x.partial_cmp(&other.p.x).unwrap()
        } else if (self.p.y - other.p.y).abs() > EPS {
            self.p.y.partial_cmp(&other.p.y).unwrap()
        } else {
            self.seg_id.cmp(&other.seg_id)
        }
    }
}
