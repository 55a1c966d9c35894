//! Correspondence matching of known segment landmarks.

use std::sync::Arc;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::feature::appearance::Appearance;
use crate::feature::measurement::Measurement;
use crate::feature::segment::SegmentSet;
use crate::image::raw::RawImage;
use crate::image::roi::ConvexRoi;
use crate::tracking::capabilities::SegmentTracker;
use crate::tracking::extremities::project_extremities;
use crate::tracking::predictor::SegmentPredictor;

/// Consensus-search and gating parameters for segment matching.
///
/// Immutable after matcher construction. The tracker capability is expected
/// to be configured against the same values; the matcher re-checks nothing
/// per call.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherParams {
    /// Bound on correspondence-search effort (consensus draws).
    pub max_search_size: u32,
    /// Search region radius for the first consensus stage, in pixels.
    pub low_innov: f64,
    /// Acceptance score cutoff.
    pub threshold: f64,
    /// Mahalanobis distance for outlier rejection.
    pub mahalanobis_th: f64,
    /// Information-gain gate: matches below carry too little information
    /// to justify acceptance.
    pub relevance_th: f64,
    /// Noise std assigned to accepted measurements, in pixels.
    pub meas_std: f64,
}

impl MatcherParams {
    /// Measurement noise variance, `meas_std^2`.
    pub fn meas_var(&self) -> f64 {
        self.meas_std * self.meas_std
    }

    /// Fail fast on degenerate configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_search_size == 0 {
            bail!("max_search_size must be positive");
        }
        if self.low_innov <= 0.0 {
            bail!("low_innov must be positive, got {}", self.low_innov);
        }
        if self.threshold <= 0.0 {
            bail!("threshold must be positive, got {}", self.threshold);
        }
        if self.mahalanobis_th <= 0.0 {
            bail!("mahalanobis_th must be positive, got {}", self.mahalanobis_th);
        }
        if self.relevance_th <= 0.0 {
            bail!("relevance_th must be positive, got {}", self.relevance_th);
        }
        if self.meas_std <= 0.0 {
            bail!("meas_std must be positive, got {}", self.meas_std);
        }
        Ok(())
    }
}

impl Default for MatcherParams {
    fn default() -> Self {
        Self {
            max_search_size: 10_000,
            low_innov: 4.0,
            threshold: 0.8,
            mahalanobis_th: 3.0,
            relevance_th: 2.0,
            meas_std: 1.0,
        }
    }
}

/// Tracks a known landmark's segment hypothesis into a new frame and emits
/// a scored, endpoint-corrected measurement.
pub struct SegmentMatcher {
    params: MatcherParams,
    tracker: Arc<dyn SegmentTracker>,
    predictor: Arc<dyn SegmentPredictor>,
}

impl SegmentMatcher {
    pub fn new(
        params: MatcherParams,
        tracker: Arc<dyn SegmentTracker>,
        predictor: Arc<dyn SegmentPredictor>,
    ) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            tracker,
            predictor,
        })
    }

    pub fn params(&self) -> &MatcherParams {
        &self.params
    }

    /// Match `target_app`'s hypothesis into `raw`, writing the outcome into
    /// `measure` and `app`.
    ///
    /// `roi` bounds the correspondence search. On a match, `measure`
    /// receives the endpoint-corrected extremities, `std = meas_std`, and
    /// `match_score = 1`, and `app`'s hypothesis is updated to the matched
    /// segment. On no match only `match_score = 0` is written; every other
    /// field keeps its caller-supplied value. The match score is the sole
    /// outcome signal - this call never fails.
    pub fn match_segment(
        &self,
        raw: &RawImage,
        target_app: &Appearance,
        roi: &ConvexRoi,
        measure: &mut Measurement,
        app: &mut Appearance,
    ) {
        let Some(target) = target_app.as_segment() else {
            warn!("segment matcher given a non-segment target appearance");
            measure.match_score = 0.0;
            return;
        };
        if app.as_segment().is_none() {
            warn!("segment matcher given a non-segment output appearance");
            measure.match_score = 0.0;
            return;
        }

        let mut input = SegmentSet::new();
        input.add_segment(target.hypothesis().clone());
        let mut output = SegmentSet::new();

        self.tracker
            .track_segment(raw.mat(), &input, self.predictor.as_ref(), &mut output);

        // At most one correspondence per target; extra candidates are
        // lower-ranked, never averaged in.
        match output.segment_at(0) {
            Some(matched) => {
                let predicted = self.predictor.predict(target.hypothesis());
                let corrected =
                    project_extremities(&matched.extremities(), &predicted.extremities());

                measure.x = corrected;
                measure.set_std(self.params.meas_std);
                measure.match_score = 1.0;
                if let Some(out) = app.as_segment_mut() {
                    out.set_hypothesis(matched.clone());
                }
                debug!(
                    candidates = output.count(),
                    roi_vertices = roi.vertices().len(),
                    "segment match accepted"
                );
            }
            None => {
                measure.match_score = 0.0;
                debug!("segment match rejected: tracker returned no correspondence");
            }
        }
    }
}
