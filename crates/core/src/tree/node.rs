use std::collections::BTreeMap;
use std::fmt;

use crate::sender::{Sender, SenderKinds};
use crate::tree::behavior::NodeBehavior;
use crate::tree::slots::ArgSlot;

/// A finalized command-tree vertex.
///
/// Produced by [`crate::NodeDraft::build`]; no field ever changes afterward,
/// so a finished tree may be shared freely between threads. All display
/// strings are fully composed at build time except for the invocation label,
/// which the original host supplies per call and which is substituted by
/// [`CommandNode::help_line`] and [`CommandNode::usage_line`].
pub struct CommandNode {
    pub(crate) name: String,
    pub(crate) permission: Option<String>,
    pub(crate) kinds: SenderKinds,
    pub(crate) slots: Vec<ArgSlot>,
    /// Display path below the root label: ancestor chain, this node's name,
    /// slot placeholders, and the param line. Empty for a bare root.
    pub(crate) path: String,
    pub(crate) help_text: String,
    /// Prefix-composed header lines sent before a help listing.
    pub(crate) help_header: Vec<String>,
    /// Fully composed no-permission message.
    pub(crate) no_permission_line: String,
    pub(crate) prefix: String,
    /// Prefix-composed usage lead-in (e.g. `[Arena] Usage:`).
    pub(crate) usage_prefix: String,
    /// Children keyed by lower-cased name.
    pub(crate) children: BTreeMap<String, CommandNode>,
    pub(crate) behavior: Box<dyn NodeBehavior>,
}

impl CommandNode {
    /// The node's name as declared (original casing preserved).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The permission required to enter, if any.
    pub fn permission(&self) -> Option<&str> {
        self.permission.as_deref()
    }

    /// The sender kinds this node admits.
    pub fn allowed_kinds(&self) -> SenderKinds {
        self.kinds
    }

    /// The declared extra-argument slots, in order.
    pub fn slots(&self) -> &[ArgSlot] {
        &self.slots
    }

    /// The direct children, in name order.
    pub fn children(&self) -> impl Iterator<Item = &CommandNode> {
        self.children.values()
    }

    /// Look up a direct child by name, case-insensitively.
    pub fn child(&self, name: &str) -> Option<&CommandNode> {
        self.children.get(&name.to_ascii_lowercase())
    }

    /// The fully composed no-permission message.
    pub fn no_permission_line(&self) -> &str {
        &self.no_permission_line
    }

    /// Whether `sender` passes this node's gate: sender kind first, then
    /// permission, then the behavior's custom gate hook. Pure predicate.
    pub fn can_enter(&self, sender: &dyn Sender) -> bool {
        if !self.kinds.allows(sender.kind()) {
            return false;
        }
        if let Some(permission) = self.permission.as_deref()
            && !sender.has_permission(permission)
        {
            return false;
        }
        self.behavior.allows(sender)
    }

    // ── Display rendering ───────────────────────────────────────────────

    /// `/label` plus this node's display path.
    fn command_text(&self, label: &str) -> String {
        if self.path.is_empty() {
            format!("/{label}")
        } else {
            format!("/{label} {}", self.path)
        }
    }

    /// The help line for this node under the given invocation label.
    pub fn help_line(&self, label: &str) -> String {
        self.prefixed(&format!("{}: {}", self.command_text(label), self.help_text))
    }

    /// The usage line for this node under the given invocation label.
    pub fn usage_line(&self, label: &str) -> String {
        let command = self.command_text(label);
        if self.usage_prefix.is_empty() {
            command
        } else {
            format!("{} {}", self.usage_prefix, command)
        }
    }

    /// Compose the node's display prefix onto a line.
    pub(crate) fn prefixed(&self, line: &str) -> String {
        if self.prefix.is_empty() {
            line.to_string()
        } else {
            format!("{} {}", self.prefix, line)
        }
    }
}

impl fmt::Debug for CommandNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandNode")
            .field("name", &self.name)
            .field("permission", &self.permission)
            .field("kinds", &self.kinds)
            .field("slots", &self.slots)
            .field("path", &self.path)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
