use std::collections::BTreeMap;
use std::fmt;

use crate::error::BuildError;
use crate::sender::SenderKinds;
use crate::tree::HELP_LITERAL;
use crate::tree::behavior::{BranchOnly, NodeBehavior};
use crate::tree::config::NodeConfig;
use crate::tree::node::CommandNode;
use crate::tree::slots::ArgSlot;

/// Append `part` to a space-joined display path.
pub(crate) fn push_part(path: &mut String, part: &str) {
    if !path.is_empty() {
        path.push(' ');
    }
    path.push_str(part);
}

/// A command node under construction.
///
/// Drafts are freely mutable. [`NodeDraft::build`] consumes the draft and
/// yields an immutable [`CommandNode`], so mutation after finalization is a
/// type error rather than a runtime check. Children must themselves be built
/// before they can be attached, which means trees are assembled bottom-up:
/// build the leaves, attach them, then build the parent.
///
/// A child draft created with [`NodeDraft::child_of`] copies the parent's
/// inheritable configuration (prefix, usage prefix, sender kinds,
/// no-permission line, command chain) and extends the parent's permission as
/// `parent.perm + "." + name`. The copy is a one-time snapshot: later edits
/// to the parent draft do not reach the child.
pub struct NodeDraft {
    name: String,
    help_text: String,
    config: NodeConfig,
    param_line: Option<String>,
    help_header: Vec<String>,
    slots: Vec<ArgSlot>,
    children: BTreeMap<String, CommandNode>,
    behavior: Box<dyn NodeBehavior>,
}

impl NodeDraft {
    /// Start a draft with no parent. Used for roots; subcommands normally go
    /// through [`NodeDraft::child_of`].
    pub fn new(name: impl Into<String>, help_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            help_text: help_text.into(),
            config: NodeConfig::default(),
            param_line: None,
            help_header: Vec::new(),
            slots: Vec::new(),
            children: BTreeMap::new(),
            behavior: Box::new(BranchOnly),
        }
    }

    /// Start a draft as a child of `parent`, copying the parent's
    /// inheritable configuration.
    ///
    /// The inherited command chain snapshots the parent's slots as declared
    /// so far, so declare a node's extra arguments before constructing its
    /// children.
    pub fn child_of(
        parent: &NodeDraft,
        name: impl Into<String>,
        help_text: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let mut chain = parent.chain_with_slots();
        push_part(&mut chain, &name);
        let config = parent.config.inherit(&name, chain);
        Self {
            config,
            ..Self::new(name, help_text)
        }
    }

    /// The draft's name as declared.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// This draft's chain including its own name and slot placeholders —
    /// what a child inherits as its ancestor chain.
    fn chain_with_slots(&self) -> String {
        let mut chain = self.config.chain.clone();
        for slot in &self.slots {
            push_part(&mut chain, &slot.placeholder());
        }
        chain
    }

    // ── Setters (draft phase only) ──────────────────────────────────────

    /// Set the display prefix composed onto every outgoing line.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.config.prefix = prefix.into();
        self
    }

    /// Set the usage-line lead-in (shown before the command path).
    pub fn set_usage_prefix(&mut self, usage_prefix: impl Into<String>) -> &mut Self {
        self.config.usage_prefix = usage_prefix.into();
        self
    }

    /// Set or clear the permission required to enter this node.
    pub fn set_permission(&mut self, permission: Option<String>) -> &mut Self {
        self.config.permission = permission;
        self
    }

    /// Allow or forbid interactive senders.
    pub fn allow_interactive(&mut self, value: bool) -> &mut Self {
        self.config.kinds.interactive = value;
        self
    }

    /// Allow or forbid non-interactive senders.
    pub fn allow_non_interactive(&mut self, value: bool) -> &mut Self {
        self.config.kinds.non_interactive = value;
        self
    }

    /// Replace the allowed sender kinds wholesale.
    pub fn set_allowed_kinds(&mut self, kinds: SenderKinds) -> &mut Self {
        self.config.kinds = kinds;
        self
    }

    /// Set the raw no-permission line. Mandatory before [`NodeDraft::build`];
    /// prefix composition happens at build time.
    pub fn set_no_permission_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.config.no_permission_line = Some(line.into());
        self
    }

    /// Set the parameter line appended after slot placeholders in usage and
    /// help text, for parameters only the leaf behavior understands. When
    /// unset, nodes with children get `<subCmd>`.
    pub fn set_param_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.param_line = Some(line.into());
        self
    }

    /// Add a raw header line shown above this node's help listing.
    pub fn add_help_header_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.help_header.push(line.into());
        self
    }

    /// Install the behavior hooks for this node.
    pub fn set_behavior(&mut self, behavior: impl NodeBehavior + 'static) -> &mut Self {
        self.behavior = Box::new(behavior);
        self
    }

    /// Declare the next extra-argument slot. Slots claim input tokens in
    /// declaration order, one token each.
    pub fn add_extra_argument<L, I, S>(&mut self, label: L, options: I) -> &mut Self
    where
        L: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.slots.push(ArgSlot::new(label, options));
        self
    }

    /// Replace the option set of an already-declared slot.
    pub fn edit_slot_options<I, S>(&mut self, index: usize, options: I) -> Result<&mut Self, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let len = self.slots.len();
        let Some(slot) = self.slots.get_mut(index) else {
            return Err(BuildError::SlotIndexOutOfRange { index, len });
        };
        slot.options = options.into_iter().map(Into::into).collect();
        Ok(self)
    }

    /// Attach a finalized child.
    ///
    /// Rejects the reserved name `"help"` and duplicate (case-insensitive)
    /// names.
    pub fn add_child(&mut self, child: CommandNode) -> Result<&mut Self, BuildError> {
        let key = child.name.to_ascii_lowercase();
        if key == HELP_LITERAL {
            return Err(BuildError::ReservedName);
        }
        if self.children.contains_key(&key) {
            return Err(BuildError::DuplicateChild(child.name.clone()));
        }
        self.children.insert(key, child);
        Ok(self)
    }

    // ── Finalization ────────────────────────────────────────────────────

    /// Freeze the draft into an immutable [`CommandNode`], deriving all
    /// display strings from the node's position in the tree.
    ///
    /// Fails with [`BuildError::MissingNoPermissionLine`] when no
    /// no-permission line was ever set. The derived strings are pure
    /// functions of the draft's fields: building two identical drafts yields
    /// identical nodes.
    pub fn build(self) -> Result<CommandNode, BuildError> {
        let Some(no_permission_raw) = self.config.no_permission_line.as_deref() else {
            return Err(BuildError::MissingNoPermissionLine);
        };

        let mut path = self.config.chain.clone();
        for slot in &self.slots {
            push_part(&mut path, &slot.placeholder());
        }
        if let Some(param_line) = &self.param_line {
            push_part(&mut path, param_line);
        } else if !self.children.is_empty() {
            push_part(&mut path, "<subCmd>");
        }

        let usage_prefix = if self.config.usage_prefix.is_empty() {
            self.config.prefix.clone()
        } else {
            self.config.prefixed(&self.config.usage_prefix)
        };

        Ok(CommandNode {
            no_permission_line: self.config.prefixed(no_permission_raw),
            help_header: self
                .help_header
                .iter()
                .map(|line| self.config.prefixed(line))
                .collect(),
            name: self.name,
            permission: self.config.permission,
            kinds: self.config.kinds,
            slots: self.slots,
            path,
            help_text: self.help_text,
            prefix: self.config.prefix,
            usage_prefix,
            children: self.children,
            behavior: self.behavior,
        })
    }
}

impl fmt::Debug for NodeDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeDraft")
            .field("name", &self.name)
            .field("slots", &self.slots)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
