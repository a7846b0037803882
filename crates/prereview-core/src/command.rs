//! Command abstractions.

/// Trait that all commands implement.
///
/// A command carries the aggregate identifier and the desired field values;
/// it has no knowledge of the event log.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// The type name for this command (for logging/routing).
    fn command_type(&self) -> &'static str;
}
