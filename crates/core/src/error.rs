use thiserror::Error;

/// A build-phase configuration error.
///
/// These surface programmer mistakes while the tree is still being
/// assembled. They are never produced by end-user input at dispatch time:
/// runtime mismatches resolve to pre-rendered usage or no-permission
/// messages instead.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum BuildError {
    /// A child with the same (case-insensitive) name was already attached.
    #[error("child name \"{0}\" is already taken (names are case-insensitive)")]
    DuplicateChild(String),

    /// `"help"` is reserved for the built-in help listing.
    #[error("child name \"help\" is reserved for the built-in help listing")]
    ReservedName,

    /// The node was built without a no-permission line.
    #[error("no-permission line must be set before a node is built")]
    MissingNoPermissionLine,

    /// An extra-argument slot index was out of range.
    #[error("no extra-argument slot at index {index} (node declares {len})")]
    SlotIndexOutOfRange {
        /// The requested slot index.
        index: usize,
        /// How many slots the node declares.
        len: usize,
    },
}
