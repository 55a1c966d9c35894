//! External algorithmic capabilities consumed by the front-end.
//!
//! The consensus segment tracker and the hierarchical detector are
//! algorithmic black boxes owned by external code. They are injected as
//! trait objects at construction so tests can substitute deterministic
//! doubles. Capability-internal failures never cross this boundary as
//! errors: a failing tracker leaves its output set empty, a failing
//! detector returns `false`, and the front-end surfaces only the match
//! score / option outcome.

use opencv::core::Mat;

use crate::feature::candidate::FeatureSegment;
use crate::feature::segment::SegmentSet;
use crate::image::roi::ConvexRoi;
use crate::tracking::predictor::SegmentPredictor;

/// Robust correspondence search for known segments.
///
/// Given one target hypothesis per entry of `input` and a predictor
/// encapsulating expected inter-frame motion, appends the matched segments
/// to `output` in rank order (best-supported first). Entries without a
/// supported match contribute nothing. Consensus radii and gating
/// thresholds are part of the implementation's own configuration.
///
/// Implementations need not be reentrant; concurrent matching contexts
/// must each use their own tracker instance.
pub trait SegmentTracker: Send + Sync {
    fn track_segment(
        &self,
        image: &Mat,
        input: &SegmentSet,
        predictor: &dyn SegmentPredictor,
        output: &mut SegmentSet,
    );
}

/// Coarse-to-fine detection of a previously unknown segment.
///
/// Searches `roi` over the implementation's configured pyramid depth and,
/// on success, fills `feature`'s measurement endpoints and appearance
/// hypothesis, returning `true`. Must not touch the measurement's noise
/// std, which the caller presets. Returns `false` when the region contains
/// no detectable structure.
pub trait HierarchicalSegmentDetector: Send + Sync {
    fn detect_in(&self, image: &Mat, feature: &mut FeatureSegment, roi: &ConvexRoi) -> bool;
}
