// SPDX-FileCopyrightText: 2026 Questmap Contributors
// SPDX-License-Identifier: MIT

use crate::model::Position;

/// One cubic Bezier span of the road, from the previous anchor to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSegment {
    c1: Position,
    c2: Position,
    to: Position,
}

impl CurveSegment {
    pub fn c1(&self) -> Position {
        self.c1
    }

    pub fn c2(&self) -> Position {
        self.c2
    }

    pub fn to(&self) -> Position {
        self.to
    }
}

/// The smooth road through all node centers, in sequence order.
///
/// Control points are generated once from the full point list
/// (Catmull-Rom-derived, endpoint-duplicated, tension 1/6). The completed
/// overlay is a prefix slice of the same segment list, never a re-fit curve,
/// so it sits exactly on top of the full road.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadGeometry {
    start: Option<Position>,
    segments: Vec<CurveSegment>,
}

impl RoadGeometry {
    pub fn new(points: &[Position]) -> Self {
        let Some(&start) = points.first() else {
            return Self {
                start: None,
                segments: Vec::new(),
            };
        };

        let mut segments = Vec::with_capacity(points.len().saturating_sub(1));
        for idx in 0..points.len().saturating_sub(1) {
            // Catmull-Rom neighbors with the first/last point duplicated at
            // the ends, converted to Bezier control points.
            let p0 = points[idx.saturating_sub(1)];
            let p1 = points[idx];
            let p2 = points[idx + 1];
            let p3 = points[(idx + 2).min(points.len() - 1)];

            let c1 = Position::new(p1.x + (p2.x - p0.x) / 6.0, p1.y + (p2.y - p0.y) / 6.0);
            let c2 = Position::new(p2.x - (p3.x - p1.x) / 6.0, p2.y - (p3.y - p1.y) / 6.0);
            segments.push(CurveSegment { c1, c2, to: p2 });
        }

        Self {
            start: Some(start),
            segments,
        }
    }

    pub fn start(&self) -> Option<Position> {
        self.start
    }

    pub fn segments(&self) -> &[CurveSegment] {
        &self.segments
    }

    /// SVG path data for the whole road. Empty for zero nodes; a bare moveto
    /// (zero-length point path) for a single node.
    pub fn full_svg_path(&self) -> String {
        self.svg_prefix(self.segments.len())
    }

    /// SVG path data for the completed overlay, through the node at
    /// `last_completed` inclusive. `None` (nothing completed) yields an empty
    /// path. Always a literal string prefix of [`Self::full_svg_path`].
    pub fn partial_svg_path(&self, last_completed: Option<usize>) -> String {
        match last_completed {
            None => String::new(),
            Some(index) => self.svg_prefix(index.min(self.segments.len())),
        }
    }

    fn svg_prefix(&self, segment_count: usize) -> String {
        let Some(start) = self.start else {
            return String::new();
        };

        let mut path = String::with_capacity(16 + segment_count * 48);
        path.push_str(&format!("M {} {}", fmt_coord(start.x), fmt_coord(start.y)));
        for segment in &self.segments[..segment_count] {
            path.push_str(&format!(
                " C {} {}, {} {}, {} {}",
                fmt_coord(segment.c1.x),
                fmt_coord(segment.c1.y),
                fmt_coord(segment.c2.x),
                fmt_coord(segment.c2.y),
                fmt_coord(segment.to.x),
                fmt_coord(segment.to.y),
            ));
        }
        path
    }

    /// Deterministic points along the curve: the start anchor plus
    /// `per_segment` samples of every segment. Used for the decoration
    /// corridor; not an arc-length parameterization.
    pub fn sample_points(&self, per_segment: usize) -> Vec<Position> {
        let Some(start) = self.start else {
            return Vec::new();
        };

        let per_segment = per_segment.max(1);
        let mut samples = Vec::with_capacity(1 + self.segments.len() * per_segment);
        samples.push(start);

        let mut from = start;
        for segment in &self.segments {
            for step in 1..=per_segment {
                let t = step as f64 / per_segment as f64;
                samples.push(cubic_point(from, segment.c1, segment.c2, segment.to, t));
            }
            from = segment.to;
        }
        samples
    }
}

fn cubic_point(p0: Position, c1: Position, c2: Position, p3: Position, t: f64) -> Position {
    let u = 1.0 - t;
    let b0 = u * u * u;
    let b1 = 3.0 * u * u * t;
    let b2 = 3.0 * u * t * t;
    let b3 = t * t * t;
    Position::new(
        b0 * p0.x + b1 * c1.x + b2 * c2.x + b3 * p3.x,
        b0 * p0.y + b1 * c1.y + b2 * c2.y + b3 * p3.y,
    )
}

fn fmt_coord(value: f64) -> String {
    // One decimal is plenty for canvas units and keeps paths stable to compare.
    format!("{value:.1}")
}
