//! Landmark appearance variants.
//!
//! The set of appearance kinds is closed, so polymorphism is a tagged enum
//! with typed accessors: a caller that holds the wrong variant gets `None`
//! from the accessor, never a panic.

use nalgebra::Vector2;
use opencv::core::Mat;

use crate::feature::segment::SegmentHypothesis;

/// Segment appearance: the landmark's current endpoint model, used both to
/// seed the correspondence search and to carry the matched result back.
#[derive(Clone, Debug)]
pub struct SegmentAppearance {
    hypothesis: SegmentHypothesis,
}

impl SegmentAppearance {
    pub fn new(hypothesis: SegmentHypothesis) -> Self {
        Self { hypothesis }
    }

    pub fn hypothesis(&self) -> &SegmentHypothesis {
        &self.hypothesis
    }

    pub fn set_hypothesis(&mut self, hypothesis: SegmentHypothesis) {
        self.hypothesis = hypothesis;
    }
}

/// Image-patch appearance for point-like landmarks: a pixel patch around
/// the feature plus the subpixel offset of the landmark projection within
/// the patch center pixel.
#[derive(Clone, Debug)]
pub struct PatchAppearance {
    pub patch: Mat,
    pub offset: Vector2<f64>,
}

impl PatchAppearance {
    pub fn new(patch: Mat, offset: Vector2<f64>) -> Self {
        Self { patch, offset }
    }
}

/// A landmark's visual/geometric signature.
///
/// Owned by the landmark (persistent) or by a transient detection
/// candidate. Cloning is a deep copy: for patches the pixel data is copied,
/// so a clone never aliases its source.
#[derive(Clone)]
pub enum Appearance {
    Segment(SegmentAppearance),
    ImagePatch(PatchAppearance),
}

impl Appearance {
    /// Convenience constructor for the segment variant.
    pub fn segment(hypothesis: SegmentHypothesis) -> Self {
        Appearance::Segment(SegmentAppearance::new(hypothesis))
    }

    pub fn as_segment(&self) -> Option<&SegmentAppearance> {
        match self {
            Appearance::Segment(a) => Some(a),
            Appearance::ImagePatch(_) => None,
        }
    }

    pub fn as_segment_mut(&mut self) -> Option<&mut SegmentAppearance> {
        match self {
            Appearance::Segment(a) => Some(a),
            Appearance::ImagePatch(_) => None,
        }
    }

    pub fn is_segment(&self) -> bool {
        matches!(self, Appearance::Segment(_))
    }
}

impl std::fmt::Debug for Appearance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Appearance::Segment(a) => f.debug_tuple("Segment").field(a.hypothesis()).finish(),
            Appearance::ImagePatch(_) => f.debug_tuple("ImagePatch").finish(),
        }
    }
}
