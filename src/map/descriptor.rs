//! Landmark descriptors and the factory capability that creates them.

use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier of a descriptor instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DescriptorId(pub u64);

impl DescriptorId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for DescriptorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "D{}", self.0)
    }
}

/// An opaque identity/matching token attached to a landmark once an
/// observation of it is accepted.
///
/// The front-end never looks inside a descriptor; it only guarantees that
/// every accepted observation gets a fresh one. Matching semantics live in
/// the factory implementation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Descriptor {
    id: DescriptorId,
}

impl Descriptor {
    pub fn new(id: DescriptorId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> DescriptorId {
        self.id
    }
}

/// Capability constructing descriptors. Every call must return a distinct
/// instance; descriptors are never shared across observations.
pub trait DescriptorFactory: Send + Sync {
    fn create_descriptor(&self) -> Descriptor;
}

/// Built-in factory producing identity-only descriptors from a monotonic
/// counter. Sufficient wherever descriptor content is supplied by an
/// external system and the front-end only needs distinct tokens.
#[derive(Debug, Default)]
pub struct SequentialDescriptorFactory {
    next_id: AtomicU64,
}

impl SequentialDescriptorFactory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DescriptorFactory for SequentialDescriptorFactory {
    fn create_descriptor(&self) -> Descriptor {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        Descriptor::new(DescriptorId::new(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_never_reuses_ids() {
        let factory = SequentialDescriptorFactory::new();

        let a = factory.create_descriptor();
        let b = factory.create_descriptor();
        let c = factory.create_descriptor();

        assert_ne!(a.id(), b.id());
        assert_ne!(b.id(), c.id());
        assert_ne!(a.id(), c.id());
    }

    #[test]
    fn test_descriptor_id_display() {
        assert_eq!(format!("{}", DescriptorId::new(7)), "D7");
    }
}
