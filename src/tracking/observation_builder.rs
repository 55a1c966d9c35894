//! Materializing accepted candidates into observations.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::feature::candidate::FeatureSegment;
use crate::map::descriptor::DescriptorFactory;
use crate::map::observation::Observation;

/// Wires a detected candidate's appearance into a new observation and
/// attaches a fresh descriptor to the observed landmark.
///
/// This is the second, expensive phase of the detection contract: it runs
/// only for candidates the external map has accepted, never during
/// detection itself.
pub struct ObservationBuilder {
    desc_factory: Arc<dyn DescriptorFactory>,
}

impl ObservationBuilder {
    pub fn new(desc_factory: Arc<dyn DescriptorFactory>) -> Self {
        Self { desc_factory }
    }

    /// Fill `obs` from an accepted candidate.
    ///
    /// The candidate's segment hypothesis is copied into the observation's
    /// appearance slot by value - later mutation of `feature` leaves the
    /// observation untouched. A new descriptor is created for every call
    /// and attached to the observed landmark; descriptors are never reused.
    ///
    /// Patch and offset data of image-patch appearances is intentionally
    /// not carried over.
    pub fn fill_data_obs(&self, feature: &FeatureSegment, obs: &mut Observation) {
        match (
            feature.appearance.as_segment(),
            obs.observed_appearance.as_segment_mut(),
        ) {
            (Some(src), Some(dst)) => {
                dst.set_hypothesis(src.hypothesis().clone());
            }
            _ => {
                warn!("observation builder given a non-segment appearance");
            }
        }

        let descriptor = self.desc_factory.create_descriptor();
        debug!(descriptor = %descriptor.id(), landmark = %obs.landmark().read().id, "descriptor attached");
        obs.landmark().write().set_descriptor(descriptor);
    }
}
