/// Behavior hooks injected per node: leaf execution and extra completions.
pub mod behavior;
/// Inheritable configuration snapshot copied from parent to child drafts.
pub(crate) mod config;
/// The mutable draft builder and its one-time finalization.
pub mod draft;
/// JSON serialization helpers for the finalized tree shape.
pub mod dump;
/// The immutable, finalized tree vertex.
pub mod node;
/// Extra-argument slots and their consumption rule.
pub mod slots;

/// The reserved literal that triggers the built-in help listing.
///
/// It is matched case-insensitively against the first unconsumed token of a
/// node and therefore may never be used as a child name.
pub const HELP_LITERAL: &str = "help";
