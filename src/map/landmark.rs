//! Persistent landmark entities.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::map::descriptor::Descriptor;

/// Unique identifier for a landmark within the external map.
///
/// LandmarkIds are assigned by the map when a candidate is promoted. They
/// serve as lightweight handles for cross-referencing without needing
/// shared ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LandmarkId(pub u64);

impl LandmarkId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for LandmarkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// Shared landmark handle. The external map owns the landmark's lifetime;
/// observations hold clones of the handle. The front-end only takes the
/// write lock to attach a descriptor.
pub type LandmarkRef = Arc<RwLock<Landmark>>;

/// A persistent map entity whose geometric state is estimated over time by
/// the external filter. The front-end's view of it is narrow: an identity
/// and a descriptor slot.
#[derive(Debug)]
pub struct Landmark {
    pub id: LandmarkId,
    descriptor: Option<Descriptor>,
}

impl Landmark {
    pub fn new(id: LandmarkId) -> Self {
        Self {
            id,
            descriptor: None,
        }
    }

    /// Create a landmark behind a shared handle.
    pub fn new_shared(id: LandmarkId) -> LandmarkRef {
        Arc::new(RwLock::new(Self::new(id)))
    }

    pub fn descriptor(&self) -> Option<&Descriptor> {
        self.descriptor.as_ref()
    }

    pub fn has_descriptor(&self) -> bool {
        self.descriptor.is_some()
    }

    /// Attach a descriptor, replacing any previous one.
    pub fn set_descriptor(&mut self, descriptor: Descriptor) {
        self.descriptor = Some(descriptor);
    }
}
