//! cmdtree core library.
//!
//! Provides a declarative, permission-gated command tree for long-running
//! host applications: nodes are assembled with [`NodeDraft`] builders, frozen
//! into immutable [`CommandNode`] values, and then walked recursively by the
//! dispatcher ([`CommandNode::execute`]) or the tab-completer
//! ([`CommandNode::complete`]). The usual entry point for hosts is
//! [`CommandRoot`], which wraps the finalized root node.

#![warn(missing_docs)]

/// Recursive dispatch and tab-completion walks over a finalized tree.
pub mod dispatch;
/// Build-phase configuration errors.
pub mod error;
/// Host entry points: the finalized root command.
pub mod root;
/// The sender abstraction: who invoked the command, and what may they do.
pub mod sender;
/// Tree vertices: drafts, finalized nodes, slots, and behavior hooks.
pub mod tree;

// ── Convenience re-exports ──────────────────────────────────────────────────
// Flat imports for the most common entry points. The full module paths
// remain available for less common types.

// Builders and nodes
pub use tree::draft::NodeDraft;
pub use tree::node::CommandNode;
pub use tree::slots::ArgSlot;

// Behavior hooks
pub use tree::behavior::{BranchOnly, Invocation, NodeBehavior, RunFn};

// Sender abstraction
pub use sender::{Sender, SenderKind, SenderKinds};

// Host entry points
pub use root::{CommandRoot, RootDraft};

// Errors
pub use error::BuildError;

// Serialization helpers
pub use tree::dump::to_pretty_json;
