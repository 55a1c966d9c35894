//! Observations linking a landmark, a sensor, and a measurement.

use nalgebra::Vector2;

use crate::feature::appearance::Appearance;
use crate::feature::measurement::Measurement;
use crate::feature::segment::SegmentHypothesis;
use crate::map::landmark::LandmarkRef;

/// Identifier of the sensor a measurement was taken with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SensorId(pub u32);

impl SensorId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// One observation of a landmark by a sensor in a single frame.
///
/// Built by the front-end (measurement by the matcher/detector path,
/// observed appearance and descriptor by the observation builder), owned
/// thereafter by the external filter/map.
#[derive(Debug)]
pub struct Observation {
    landmark: LandmarkRef,
    pub sensor: SensorId,
    pub measurement: Measurement,
    /// Target slot for the appearance observed this frame.
    pub observed_appearance: Appearance,
}

impl Observation {
    /// A blank observation of `landmark`: default measurement, zero segment
    /// appearance.
    pub fn new(landmark: LandmarkRef, sensor: SensorId) -> Self {
        Self {
            landmark,
            sensor,
            measurement: Measurement::default(),
            observed_appearance: Appearance::segment(SegmentHypothesis::new(
                Vector2::zeros(),
                Vector2::zeros(),
            )),
        }
    }

    /// The observed landmark's shared handle.
    pub fn landmark(&self) -> &LandmarkRef {
        &self.landmark
    }
}
