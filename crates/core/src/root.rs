use std::fmt;

use tracing::debug;

use crate::error::BuildError;
use crate::sender::Sender;
use crate::tree::draft::NodeDraft;
use crate::tree::node::CommandNode;

/// Draft for the root of a command tree.
///
/// Wraps a [`NodeDraft`] whose display chain is empty — the root's own name
/// is the invocation label the host supplies per call — and adds the credit
/// lines sent when the command is invoked with no arguments at all.
pub struct RootDraft {
    node: NodeDraft,
    credit_lines: Vec<String>,
}

impl RootDraft {
    /// Start a root draft. `help_text` describes the command as a whole in
    /// help listings.
    pub fn new(name: impl Into<String>, help_text: impl Into<String>) -> Self {
        Self {
            node: NodeDraft::new(name, help_text),
            credit_lines: Vec::new(),
        }
    }

    /// The wrapped draft, for configuration and for constructing children
    /// via [`NodeDraft::child_of`].
    pub fn draft(&self) -> &NodeDraft {
        &self.node
    }

    /// The wrapped draft, mutably — all [`NodeDraft`] setters apply.
    pub fn draft_mut(&mut self) -> &mut NodeDraft {
        &mut self.node
    }

    /// Add a raw credit line (version, authorship). Prefix composition
    /// happens at build time.
    pub fn add_credit_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.credit_lines.push(line.into());
        self
    }

    /// Remove all credit lines added so far.
    pub fn clear_credit_lines(&mut self) -> &mut Self {
        self.credit_lines.clear();
        self
    }

    /// Attach a finalized child to the root.
    pub fn add_child(&mut self, child: CommandNode) -> Result<&mut Self, BuildError> {
        self.node.add_child(child)?;
        Ok(self)
    }

    /// Freeze the whole tree. After this the root — and every node below it
    /// — is immutable for the lifetime of the host.
    pub fn build(self) -> Result<CommandRoot, BuildError> {
        let node = self.node.build()?;
        let credit_lines = self
            .credit_lines
            .iter()
            .map(|line| node.prefixed(line))
            .collect();
        Ok(CommandRoot { node, credit_lines })
    }
}

impl fmt::Debug for RootDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RootDraft")
            .field("node", &self.node)
            .field("credit_lines", &self.credit_lines)
            .finish()
    }
}

/// A finalized command tree, ready for host invocations.
///
/// Both entry points are fresh, stateless walks of the immutable tree; the
/// engine always reports "handled" to the host, so neither returns a status.
pub struct CommandRoot {
    node: CommandNode,
    credit_lines: Vec<String>,
}

impl CommandRoot {
    /// The finalized root node.
    pub fn node(&self) -> &CommandNode {
        &self.node
    }

    /// Host entry point for a typed command.
    ///
    /// An empty token array sends the credit lines; anything else enters the
    /// recursive dispatch walk at cursor 0.
    pub fn dispatch(&self, sender: &dyn Sender, label: &str, tokens: &[String]) {
        if tokens.is_empty() {
            debug!(label, "dispatch: no tokens, sending credits");
            for line in &self.credit_lines {
                sender.send(line);
            }
            return;
        }
        self.node
            .execute(sender, label, Vec::new(), Vec::new(), tokens, 0);
    }

    /// Host entry point for a tab-key event. Returns sorted, deduplicated
    /// candidates for the token at the current cursor.
    pub fn complete(&self, sender: &dyn Sender, label: &str, tokens: &[String]) -> Vec<String> {
        self.node
            .complete(sender, label, Vec::new(), Vec::new(), tokens, 0)
    }
}

impl fmt::Debug for CommandRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRoot")
            .field("node", &self.node)
            .field("credit_lines", &self.credit_lines)
            .finish()
    }
}
