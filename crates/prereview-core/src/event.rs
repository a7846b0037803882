//! Domain event abstractions.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait that all domain events implement.
///
/// Events are immutable records drawn from a closed set. Each one exposes a
/// tag (its discriminator) and the correlation fields an
/// [`EventFilter`](crate::filter::EventFilter) may constrain.
pub trait DomainEvent: Send + Sync + Debug {
    /// Discriminator of the closed event set.
    type Tag: Copy + Eq + Hash + Debug + Send + Sync;
    /// Names of the fields a filter can put predicates on.
    type Field: Copy + Ord + Debug + Send + Sync;
    /// Values those fields are compared against.
    type Value: Clone + PartialEq + Debug + Send + Sync;

    /// Returns the tag of this event.
    fn tag(&self) -> Self::Tag;

    /// Returns this event's value for `field`, or `None` when this kind of
    /// event does not carry that field.
    fn field(&self, field: Self::Field) -> Option<Self::Value>;
}
