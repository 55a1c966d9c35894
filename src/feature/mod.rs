//! Feature-level data model: segment hypotheses, appearances, measurements,
//! and transient detection candidates.

pub mod appearance;
pub mod candidate;
pub mod measurement;
pub mod segment;

pub use appearance::{Appearance, PatchAppearance, SegmentAppearance};
pub use candidate::FeatureSegment;
pub use measurement::Measurement;
pub use segment::{SegmentHypothesis, SegmentSet};
