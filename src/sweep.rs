// SPDX-FileCopyrightText: 2022 Thomas Kramer
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The sweep engine: Bentley-Ottmann enumeration of segment intersections.
//!
//! A vertical sweep line moves left to right over the plane. The event
//! queue (an [`RbTree`] keyed by event order) drives the sweep; the status
//! structure (an [`RbTree`] keyed by y at the current sweep position) holds
//! the non-vertical segments crossing the line. Vertical segments never
//! enter either tree: their comparator key is undefined, so they take a
//! dedicated path.
//!
//! The sweep position is owned by one engine run and shared only with the
//! status comparator, so independent runs cannot contaminate each other.

use std::cell::Cell;
use std::cmp::Ordering;
use std::rc::Rc;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::event::{Event, EventKind};
use crate::point::{Coord, Point, EPS, EPS_INC};
use crate::rb_tree::RbTree;
use crate::segment::{intersection_point, is_intersecting, Segment};

/// An intersection point together with the segments meeting there.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection {
    /// The point of intersection.
    pub point: Point,
    /// Ids of all segments passing through the point, sorted and unique in
    /// the final result.
    pub segments: Vec<usize>,
}

/// Find all points where two or more segments intersect.
///
/// Segment ids must be the positional index in `segments`, endpoints must
/// satisfy `p <= q` lexicographically, and no two segments may coincide
/// fully or partially. Intersections are reported once per point, sorted by
/// (x, y), with the sorted, deduplicated ids of every segment through that
/// point. Runs in O((n + k) log n) for n segments and k intersections.
///
/// # Example
/// ```
/// use sweepline_intersections::{find_intersections, Point, Segment};
///
/// let segments = vec![
///     Segment::new(Point::new(0.0, 0.0), Point::new(2.0, 2.0), 0),
///     Segment::new(Point::new(0.0, 2.0), Point::new(2.0, 0.0), 1),
/// ];
/// let found = find_intersections(&segments);
///
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].point, Point::new(1.0, 1.0));
/// assert_eq!(found[0].segments, vec![0, 1]);
/// ```
pub fn find_intersections(segments: &[Segment]) -> Vec<Intersection> {
    debug_assert!(
        segments.iter().enumerate().all(|(i, s)| s.id == i),
        "segment ids must be their positional index"
    );
    debug_assert!(
        segments.iter().all(|s| (s.p.x, s.p.y) <= (s.q.x, s.q.y)),
        "segment endpoints must be normalized"
    );

    let sweep_x = Rc::new(Cell::new(Coord::MIN));
    let mut status = RbTree::new({
        let x = Rc::clone(&sweep_x);
        move |a: &Segment, b: &Segment| Segment::order_at(a, b, x.get())
    });
    let mut queue = RbTree::new(|a: &Event, b: &Event| a.order(b));

    let mut verticals: Vec<Segment> = Vec::new();
    for seg in segments {
        if seg.is_vertical() {
            verticals.push(*seg);
        } else {
            queue.insert(Event::new(seg.p, EventKind::Begin, seg.id));
            queue.insert(Event::new(seg.q, EventKind::End, seg.id));
        }
    }
    verticals.sort_by(|a, b| (a.p.x, a.p.y).partial_cmp(&(b.p.x, b.p.y)).unwrap());

    let mut result: Vec<Intersection> = Vec::new();

    // Two verticals can only meet end to start; in (x, y) order such pairs
    // are adjacent.
    for (v, w) in verticals.iter().tuple_windows() {
        if v.q == w.p {
            debug!(point = ?v.q, a = v.id, b = w.id, "vertical-vertical intersection");
            result.push(Intersection {
                point: v.q,
                segments: vec![v.id, w.id],
            });
        }
    }

    let mut vert_idx = 0;

    while let Some(h) = queue.first() {
        let top = *queue.get(h);
        queue.erase_at(h);

        // Events at x-coordinates the sweep has already passed can surface
        // when several x-equal points were processed out of exact order.
        if top.p.x < sweep_x.get() {
            trace!(x = top.p.x, sweep_x = sweep_x.get(), "skipping stale event");
            continue;
        }

        while vert_idx < verticals.len() && verticals[vert_idx].p.x < sweep_x.get() - EPS {
            vert_idx += 1;
        }

        // Catch up on vertical segments at or before the next event point:
        // walk the status structure upward through the vertical's y-range.
        while vert_idx < verticals.len() && verticals[vert_idx].p.x <= top.p.x + EPS {
            let vseg = verticals[vert_idx];
            sweep_x.set(vseg.p.x);
            let probe = Segment::new(vseg.p, vseg.p, 0);
            let mut it = status.lower_bound(&probe);
            while let Some(cur) = it {
                let seg = *status.get(cur);
                let y = seg.eval_y(sweep_x.get());
                if y > vseg.q.y + EPS {
                    break;
                }
                debug!(x = sweep_x.get(), y, a = seg.id, b = vseg.id, "vertical intersection");
                result.push(Intersection {
                    point: Point::new(sweep_x.get(), y),
                    segments: vec![seg.id, vseg.id],
                });
                it = status.next(cur);
            }
            vert_idx += 1;
        }

        sweep_x.set(top.p.x);

        // Gather every event at this point, partitioned by kind.
        let mut active: [Vec<usize>; 3] = Default::default();
        active[top.kind as usize].push(top.seg_id);
        while let Some(nh) = queue.first() {
            let e = *queue.get(nh);
            if (e.p.x - top.p.x).abs() >= EPS || (e.p.y - top.p.y).abs() >= EPS {
                break;
            }
            active[e.kind as usize].push(e.seg_id);
            queue.erase_at(nh);
        }

        trace!(
            point = ?top.p,
            beginning = ?active[EventKind::Begin as usize],
            interior = ?active[EventKind::Interior as usize],
            ending = ?active[EventKind::End as usize],
            "processing event point"
        );

        // Departing and crossing segments leave under the pre-nudge position,
        // the last one at which their stored order was valid.
        for &id in &active[EventKind::End as usize] {
            status.erase(&segments[id]);
        }
        for &id in &active[EventKind::Interior as usize] {
            status.erase(&segments[id]);
        }

        // Nudge just past the event point and reinsert; this re-establishes
        // a strict local order to the right of the point.
        sweep_x.set(top.p.x + EPS_INC);
        let mut min_y = Coord::MAX;
        let mut max_y = -Coord::MAX;
        for &id in active[EventKind::Begin as usize]
            .iter()
            .chain(&active[EventKind::Interior as usize])
        {
            let y = segments[id].eval_y(sweep_x.get());
            min_y = min_y.min(y);
            max_y = max_y.max(y);
            status.insert(segments[id]);
        }

        let inserted =
            active[EventKind::Begin as usize].len() + active[EventKind::Interior as usize].len();
        if inserted == 0 {
            // Pure removal: the neighbors across the vanished segments may
            // now be adjacent.
            let probe = Segment::new(top.p, top.p, 0);
            if let Some(right) = status.lower_bound(&probe) {
                if let Some(left) = status.prev(right) {
                    schedule_if_intersecting(*status.get(left), *status.get(right), &mut queue);
                }
            }
        } else {
            // Probe just outside the extremes of the inserted block against
            // the segment just inside it.
            let above = Point::new(sweep_x.get(), max_y + 2.0 * EPS);
            let below = Point::new(sweep_x.get(), min_y - 2.0 * EPS);

            if let Some(above_outer) = status.lower_bound(&Segment::new(above, above, 0)) {
                if let Some(top_inner) = status.prev(above_outer) {
                    schedule_if_intersecting(
                        *status.get(top_inner),
                        *status.get(above_outer),
                        &mut queue,
                    );
                }
            }
            if let Some(bottom_inner) = status.lower_bound(&Segment::new(below, below, 0)) {
                if let Some(below_outer) = status.prev(bottom_inner) {
                    schedule_if_intersecting(
                        *status.get(below_outer),
                        *status.get(bottom_inner),
                        &mut queue,
                    );
                }
            }
        }

        sweep_x.set(top.p.x);

        let total: usize = active.iter().map(Vec::len).sum();
        if total > 1 {
            let ids: Vec<usize> = active.iter().flatten().copied().collect();
            debug!(point = ?top.p, ?ids, "intersection");
            result.push(Intersection {
                point: top.p,
                segments: ids,
            });
        }
    }

    merge_coincident(result)
}

/// Test a neighboring pair and enqueue the implied events.
///
/// The new events carry kind `Begin` when the computed point is the
/// segment's own first endpoint and `Interior` otherwise; an event landing
/// on a segment's end point collapses into the end event already queued.
fn schedule_if_intersecting<C>(left: Segment, right: Segment, queue: &mut RbTree<Event, C>)
where
    C: Fn(&Event, &Event) -> Ordering,
{
    if !is_intersecting(&left, &right) {
        return;
    }
    let pt = intersection_point(&left, &right);
    trace!(point = ?pt, a = left.id, b = right.id, "scheduling intersection events");
    queue.insert(Event::new(pt, kind_at(&left, pt), left.id));
    queue.insert(Event::new(pt, kind_at(&right, pt), right.id));
}

fn kind_at(seg: &Segment, pt: Point) -> EventKind {
    if seg.p == pt {
        EventKind::Begin
    } else {
        EventKind::Interior
    }
}

/// Stable-sort the recorded intersections by point and fold together the
/// records whose points coincide within tolerance.
fn merge_coincident(mut raw: Vec<Intersection>) -> Vec<Intersection> {
    raw.sort_by(|a, b| {
        (a.point.x, a.point.y)
            .partial_cmp(&(b.point.x, b.point.y))
            .unwrap()
    });

    raw.into_iter()
        .coalesce(|mut a, b| {
            if a.point == b.point {
                a.segments.extend_from_slice(&b.segments);
                Ok(a)
            } else {
                Err((a, b))
            }
        })
        .map(|mut it| {
            it.segments.sort_unstable();
            it.segments.dedup();
            it
        })
        .collect()
}
