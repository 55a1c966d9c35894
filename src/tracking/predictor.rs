//! Segment motion prediction for the correspondence search.

use nalgebra::Vector4;
use parking_lot::RwLock;

use crate::feature::segment::SegmentHypothesis;

/// Encapsulates the expected inter-frame motion of a segment.
///
/// The matcher hands the predictor to the tracker capability to seed the
/// consensus search, and uses the predicted endpoints itself for the
/// endpoint-correction step. Implementations are queried through `&self`
/// so one predictor can serve both sides of a call.
pub trait SegmentPredictor: Send + Sync {
    /// Predicted hypothesis for the upcoming frame, given the landmark's
    /// current hypothesis. Endpoint order must be preserved.
    fn predict(&self, current: &SegmentHypothesis) -> SegmentHypothesis;
}

/// Predicts no motion: the landmark is assumed stationary in the image
/// between consecutive frames. The right default for high frame rates or
/// when the filter supplies an already-predicted hypothesis.
#[derive(Debug, Default)]
pub struct StaticPredictor;

impl SegmentPredictor for StaticPredictor {
    fn predict(&self, current: &SegmentHypothesis) -> SegmentHypothesis {
        current.clone()
    }
}

/// Constant-velocity motion model in endpoint space.
///
/// Remembers the previously observed hypothesis, derives a per-frame
/// endpoint velocity from the last two updates, and extrapolates it onto
/// whatever hypothesis it is asked to predict from. Call [`update`] with
/// the matched hypothesis after each accepted frame and [`reset`] on track
/// loss.
///
/// [`update`]: ConstantVelocityPredictor::update
/// [`reset`]: ConstantVelocityPredictor::reset
#[derive(Debug, Default)]
pub struct ConstantVelocityPredictor {
    state: RwLock<CvState>,
}

#[derive(Debug, Default)]
struct CvState {
    prev: Option<SegmentHypothesis>,
    /// Endpoint displacement per frame, packed `(x1, y1, x2, y2)`.
    velocity: Vector4<f64>,
}

impl ConstantVelocityPredictor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the hypothesis observed in the frame that just finished.
    pub fn update(&self, observed: &SegmentHypothesis) {
        let mut guard = self.state.write();
        let state = &mut *guard;
        if let Some(prev) = &state.prev {
            state.velocity = observed.extremities() - prev.extremities();
        }
        state.prev = Some(observed.clone());
    }

    /// Forget the motion history (track lost or landmark re-initialized).
    pub fn reset(&self) {
        let mut state = self.state.write();
        state.prev = None;
        state.velocity = Vector4::zeros();
    }
}

impl SegmentPredictor for ConstantVelocityPredictor {
    fn predict(&self, current: &SegmentHypothesis) -> SegmentHypothesis {
        let state = self.state.read();
        SegmentHypothesis::from_extremities(&(current.extremities() + state.velocity))
    }
}
