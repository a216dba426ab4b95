use tracing::debug;

use crate::sender::Sender;
use crate::tree::HELP_LITERAL;
use crate::tree::behavior::Invocation;
use crate::tree::node::CommandNode;
use crate::tree::slots::consume_slots;

impl CommandNode {
    /// Recursive execution walk.
    ///
    /// Applies the permission gate, handles the built-in `help` literal,
    /// consumes this node's extra-argument slots, and either recurses into a
    /// matching child or invokes the leaf behavior. Every user-input
    /// mismatch resolves to exactly one pre-rendered message on the sender;
    /// nothing propagates back to the host.
    ///
    /// `trail` carries the nodes walked through so far (root first) and is
    /// extended once per token this node is responsible for (its slots plus
    /// its name) before recursing. Hosts normally call
    /// [`crate::CommandRoot::dispatch`] instead, which starts the walk with
    /// empty state at cursor 0.
    pub fn execute<'a>(
        &'a self,
        sender: &dyn Sender,
        label: &str,
        mut trail: Vec<&'a CommandNode>,
        previous_extra: Vec<String>,
        tokens: &[String],
        cursor: usize,
    ) {
        if !self.can_enter(sender) {
            debug!(node = %self.name, "execute: sender failed gate");
            sender.send(&self.no_permission_line);
            return;
        }

        if cursor < tokens.len() && tokens[cursor].eq_ignore_ascii_case(HELP_LITERAL) {
            debug!(node = %self.name, cursor, "execute: help literal");
            self.send_help(sender, label);
            return;
        }

        let Some(extra_args) = consume_slots(&self.slots, &previous_extra, tokens, cursor) else {
            debug!(node = %self.name, cursor, "execute: slot mismatch");
            sender.send(&self.usage_line(label));
            return;
        };

        let cursor_after_slots = cursor + self.slots.len();

        if tokens.len() > cursor_after_slots
            && let Some(child) = self.child(&tokens[cursor_after_slots])
        {
            debug!(node = %self.name, child = %child.name, "execute: descending");
            // One trail entry per consumed token: the slots plus the child
            // name this node routed on.
            for _ in 0..=self.slots.len() {
                trail.push(self);
            }
            child.execute(sender, label, trail, extra_args, tokens, cursor_after_slots + 1);
            return;
        }

        debug!(node = %self.name, cursor = cursor_after_slots, "execute: leaf behavior");
        let inv = Invocation {
            sender,
            label,
            trail: &trail,
            extra_args: &extra_args,
            tokens,
            cursor: cursor_after_slots,
        };
        if !self.behavior.run(&inv) {
            sender.send(&self.usage_line(label));
        }
    }

    /// Send the help listing: header lines, then this node's own help line
    /// for a leaf, or the help line of every direct child the sender may
    /// enter for a branch.
    fn send_help(&self, sender: &dyn Sender, label: &str) {
        for line in &self.help_header {
            sender.send(line);
        }
        if self.children.is_empty() {
            sender.send(&self.help_line(label));
        } else {
            for child in self.children.values() {
                if child.can_enter(sender) {
                    sender.send(&child.help_line(label));
                }
            }
        }
    }
}
