use crate::sender::Sender;
use crate::tree::node::CommandNode;

/// Everything a behavior hook gets to see about one invocation.
///
/// `cursor` points at the first token the hook should process: for a leaf
/// run that is the position right after this node's extra-argument slots,
/// for [`NodeBehavior::complete_rest`] the position right after the missing
/// child name.
pub struct Invocation<'a> {
    /// The invoker.
    pub sender: &'a dyn Sender,
    /// The top-level command label the host invoked (without any leading
    /// slash or prompt character).
    pub label: &'a str,
    /// The nodes walked through to get here, root first. A node appears once
    /// per consumed token it was responsible for.
    pub trail: &'a [&'a CommandNode],
    /// All extra-argument values consumed so far, in order.
    pub extra_args: &'a [String],
    /// The full token array of the invocation.
    pub tokens: &'a [String],
    /// Index of the first unprocessed token.
    pub cursor: usize,
}

/// Per-node strategy object carrying the caller-supplied hooks.
///
/// Every method has a default so pure branch nodes can be built without any
/// behavior. Implementations must be `Send + Sync`: the tree is shared
/// read-only between host threads once built.
pub trait NodeBehavior: Send + Sync {
    /// Leaf execution: called when all slots are satisfied and no further
    /// child matches. Return `false` to signal bad usage, which makes the
    /// dispatcher send the node's usage line.
    fn run(&self, _inv: &Invocation<'_>) -> bool {
        false
    }

    /// Extra completion candidates offered alongside child names at the
    /// child-name boundary. Merged, deduplicated, and prefix-filtered by the
    /// completer.
    fn extra_tab_options(&self, _inv: &Invocation<'_>) -> Vec<String> {
        Vec::new()
    }

    /// Completions for token positions beyond the child-name boundary, i.e.
    /// for arguments only [`NodeBehavior::run`] understands. The completer
    /// sorts and deduplicates the result but does not prefix-filter it.
    fn complete_rest(&self, _inv: &Invocation<'_>) -> Vec<String> {
        Vec::new()
    }

    /// Custom gate evaluated after the structural sender-kind and permission
    /// checks pass. Return `false` to keep the sender out entirely.
    fn allows(&self, _sender: &dyn Sender) -> bool {
        true
    }
}

/// The default behavior: a pure branch node.
///
/// Direct execution reports wrong usage, no extra completions, no custom
/// gate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BranchOnly;

impl NodeBehavior for BranchOnly {}

/// Adapter turning a closure into a leaf-execution behavior.
///
/// Handy for small terminal nodes and tests:
///
/// ```
/// use cmdtree_core::{Invocation, RunFn};
/// let behavior = RunFn(|inv: &Invocation<'_>| {
///     inv.sender.send("done");
///     true
/// });
/// ```
pub struct RunFn<F>(pub F);

impl<F> NodeBehavior for RunFn<F>
where
    F: Fn(&Invocation<'_>) -> bool + Send + Sync,
{
    fn run(&self, inv: &Invocation<'_>) -> bool {
        (self.0)(inv)
    }
}
