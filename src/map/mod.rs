//! Map-side entities shared with the external filter/map: landmarks,
//! observations, and descriptors.
//!
//! The front-end never owns landmark or observation lifetimes; it only
//! fills measurements and attaches descriptors. Landmark handles are
//! reference-counted so the external map and in-flight observations can
//! refer to the same entity.

pub mod descriptor;
pub mod landmark;
pub mod observation;

pub use descriptor::{Descriptor, DescriptorFactory, DescriptorId, SequentialDescriptorFactory};
pub use landmark::{Landmark, LandmarkId, LandmarkRef};
pub use observation::{Observation, SensorId};
