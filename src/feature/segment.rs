//! Line-segment hypotheses and ordered segment sets.

use nalgebra::{Vector2, Vector4};

/// A landmark's current line-segment model: two image-plane endpoints.
///
/// Endpoint order is positional and meaningful. Index 0/1 of the packed
/// extremity vector is the "first" endpoint, 2/3 the "second", and every
/// consumer (prediction, tracking, endpoint correction) must preserve that
/// correspondence. Swapping endpoints is a correctness bug, not a tolerated
/// ambiguity.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentHypothesis {
    p1: Vector2<f64>,
    p2: Vector2<f64>,
}

impl SegmentHypothesis {
    pub fn new(p1: Vector2<f64>, p2: Vector2<f64>) -> Self {
        Self { p1, p2 }
    }

    /// Unpack from an `(x1, y1, x2, y2)` extremity vector.
    pub fn from_extremities(x: &Vector4<f64>) -> Self {
        Self {
            p1: Vector2::new(x[0], x[1]),
            p2: Vector2::new(x[2], x[3]),
        }
    }

    pub fn x1(&self) -> f64 {
        self.p1.x
    }

    pub fn y1(&self) -> f64 {
        self.p1.y
    }

    pub fn x2(&self) -> f64 {
        self.p2.x
    }

    pub fn y2(&self) -> f64 {
        self.p2.y
    }

    /// First endpoint.
    pub fn p1(&self) -> Vector2<f64> {
        self.p1
    }

    /// Second endpoint.
    pub fn p2(&self) -> Vector2<f64> {
        self.p2
    }

    /// Endpoints packed as `(x1, y1, x2, y2)`.
    pub fn extremities(&self) -> Vector4<f64> {
        Vector4::new(self.p1.x, self.p1.y, self.p2.x, self.p2.y)
    }

    pub fn length(&self) -> f64 {
        (self.p2 - self.p1).norm()
    }

    pub fn midpoint(&self) -> Vector2<f64> {
        (self.p1 + self.p2) * 0.5
    }

    /// Unit direction from the first to the second endpoint, or zero for a
    /// degenerate segment.
    pub fn direction(&self) -> Vector2<f64> {
        let d = self.p2 - self.p1;
        let len = d.norm();
        if len > 0.0 {
            d / len
        } else {
            Vector2::zeros()
        }
    }
}

/// An ordered set of segment hypotheses, used as the correspondence-search
/// input and output of the tracker capability.
///
/// Order is rank order: when the tracker returns several candidates, index 0
/// is the best-supported one.
#[derive(Clone, Debug, Default)]
pub struct SegmentSet {
    segments: Vec<SegmentHypothesis>,
}

impl SegmentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_segment(&mut self, segment: SegmentHypothesis) {
        self.segments.push(segment);
    }

    pub fn count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segment_at(&self, index: usize) -> Option<&SegmentHypothesis> {
        self.segments.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SegmentHypothesis> {
        self.segments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extremities_round_trip() {
        let seg = SegmentHypothesis::new(Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0));
        let x = seg.extremities();

        assert_eq!(x, Vector4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(SegmentHypothesis::from_extremities(&x), seg);
    }

    #[test]
    fn test_derived_geometry() {
        let seg = SegmentHypothesis::new(Vector2::new(0.0, 0.0), Vector2::new(3.0, 4.0));

        assert!((seg.length() - 5.0).abs() < 1e-12);
        assert_eq!(seg.midpoint(), Vector2::new(1.5, 2.0));
        let dir = seg.direction();
        assert!((dir.x - 0.6).abs() < 1e-12);
        assert!((dir.y - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_direction_is_zero() {
        let p = Vector2::new(7.0, 7.0);
        let seg = SegmentHypothesis::new(p, p);
        assert_eq!(seg.direction(), Vector2::zeros());
    }

    #[test]
    fn test_set_preserves_rank_order() {
        let mut set = SegmentSet::new();
        assert!(set.is_empty());

        let first = SegmentHypothesis::new(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0));
        let second = SegmentHypothesis::new(Vector2::new(0.0, 1.0), Vector2::new(1.0, 1.0));
        set.add_segment(first.clone());
        set.add_segment(second);

        assert_eq!(set.count(), 2);
        assert_eq!(set.segment_at(0), Some(&first));
        assert_eq!(set.segment_at(2), None);
    }
}
