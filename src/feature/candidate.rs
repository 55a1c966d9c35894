//! Transient detection candidates.

use nalgebra::Vector2;

use crate::feature::appearance::Appearance;
use crate::feature::measurement::Measurement;
use crate::feature::segment::SegmentHypothesis;

/// A freshly detected segment candidate: a measurement plus the appearance
/// that seeded it.
///
/// Candidates are transient. The detector produces them cheaply (no patch
/// or descriptor extraction), the external map decides whether to promote
/// one to a persistent landmark, and only then does the observation builder
/// do the expensive appearance work. A rejected candidate is simply
/// dropped.
#[derive(Clone, Debug)]
pub struct FeatureSegment {
    pub measurement: Measurement,
    pub appearance: Appearance,
}

impl FeatureSegment {
    /// An empty candidate: default measurement, zero segment hypothesis.
    /// The detector capability fills in endpoints and hypothesis.
    pub fn new() -> Self {
        Self {
            measurement: Measurement::default(),
            appearance: Appearance::segment(SegmentHypothesis::new(
                Vector2::zeros(),
                Vector2::zeros(),
            )),
        }
    }
}

impl Default for FeatureSegment {
    fn default() -> Self {
        Self::new()
    }
}
