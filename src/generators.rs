// SPDX-FileCopyrightText: 2022 Thomas Kramer
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Deterministic segment-set generators for benchmarks and stress tests.

use crate::point::{Coord, Point};
use crate::segment::Segment;

/// A grid of oblique lines: `num_rising` parallel rising lines crossed by
/// `num_falling` parallel falling lines, giving
/// `num_rising * num_falling` intersections.
pub fn oblique_grid(num_rising: usize, num_falling: usize) -> Vec<Segment> {
    const N: Coord = 1e6;
    let mut res = Vec::with_capacity(num_rising + num_falling);
    for i in 0..num_rising {
        let y1 = -N + i as Coord * N / num_rising as Coord;
        res.push(Segment::new(
            Point::new(-N, y1),
            Point::new(N, y1 + 2.0 * N),
            res.len(),
        ));
    }
    for i in 0..num_falling {
        let y1 = N + i as Coord * N / num_falling as Coord;
        res.push(Segment::new(
            Point::new(-N, y1),
            Point::new(N, y1 - 2.0 * N),
            res.len(),
        ));
    }
    res
}

/// `n` diameters of a circle around the origin, all meeting at the center.
pub fn origin_star(n: usize) -> Vec<Segment> {
    let r = 1000.0;
    (0..n)
        .map(|i| {
            let theta = std::f64::consts::PI * i as Coord / n as Coord;
            let a = Point::new(r * theta.cos(), r * theta.sin());
            let b = Point::new(-a.x, -a.y);
            // Endpoints come out of the trigonometry unordered.
            let (p, q) = if (a.x, a.y) <= (b.x, b.y) { (a, b) } else { (b, a) };
            Segment::new(p, q, i)
        })
        .collect()
}
