use std::collections::BTreeSet;

use tracing::debug;

use crate::dispatch::has_prefix_ignore_case;
use crate::sender::Sender;
use crate::tree::HELP_LITERAL;
use crate::tree::behavior::Invocation;
use crate::tree::node::CommandNode;
use crate::tree::slots::consume_slots;

impl CommandNode {
    /// Recursive tab-completion walk.
    ///
    /// Mirrors the structural boundaries of [`CommandNode::execute`] but
    /// produces candidate strings instead of side effects. Malformed input
    /// degrades to an empty list — completion never throws and never sends
    /// messages. The result is lexicographically sorted and free of
    /// duplicates.
    pub fn complete<'a>(
        &'a self,
        sender: &dyn Sender,
        label: &str,
        mut trail: Vec<&'a CommandNode>,
        previous_extra: Vec<String>,
        tokens: &[String],
        cursor: usize,
    ) -> Vec<String> {
        if !self.can_enter(sender) {
            debug!(node = %self.name, "complete: sender failed gate");
            return Vec::new();
        }

        let cursor_after_slots = cursor + self.slots.len();

        if tokens.len() > cursor_after_slots {
            // Cannot complete past an invalid or unfinished slot region.
            let Some(extra_args) = consume_slots(&self.slots, &previous_extra, tokens, cursor)
            else {
                debug!(node = %self.name, cursor, "complete: slot mismatch");
                return Vec::new();
            };

            for _ in 0..self.slots.len() {
                trail.push(self);
            }

            if let Some(child) = self.child(&tokens[cursor_after_slots]) {
                debug!(node = %self.name, child = %child.name, "complete: descending");
                return child.complete(
                    sender,
                    label,
                    trail,
                    extra_args,
                    tokens,
                    cursor_after_slots + 1,
                );
            }

            if tokens.len() > cursor_after_slots + 1 {
                // Past the child-name boundary: only the leaf behavior knows
                // what comes here.
                debug!(node = %self.name, "complete: beyond child boundary");
                let inv = Invocation {
                    sender,
                    label,
                    trail: &trail,
                    extra_args: &extra_args,
                    tokens,
                    cursor: cursor_after_slots + 1,
                };
                let candidates: BTreeSet<String> =
                    self.behavior.complete_rest(&inv).into_iter().collect();
                return candidates.into_iter().collect();
            }

            // Exactly at the child-name boundary.
            let mut candidates: BTreeSet<String> = self
                .children
                .values()
                .filter(|child| child.can_enter(sender))
                .map(|child| child.name.clone())
                .collect();
            // "help" is only a valid literal where the dispatcher would
            // accept it: right at the node's cursor, i.e. with no slots in
            // front.
            if self.slots.is_empty() {
                candidates.insert(HELP_LITERAL.to_string());
            }
            let inv = Invocation {
                sender,
                label,
                trail: &trail,
                extra_args: &extra_args,
                tokens,
                cursor: cursor_after_slots,
            };
            candidates.extend(self.behavior.extra_tab_options(&inv));

            let prefix = &tokens[cursor_after_slots];
            return candidates
                .into_iter()
                .filter(|candidate| has_prefix_ignore_case(candidate, prefix))
                .collect();
        }

        if tokens.len() > cursor {
            // The last token sits inside the slot region.
            let last = tokens.len() - 1;
            let slot = &self.slots[last - cursor];
            let mut candidates: BTreeSet<String> = slot.options.clone();
            if last == cursor {
                candidates.insert(HELP_LITERAL.to_string());
            }
            return candidates
                .into_iter()
                .filter(|candidate| has_prefix_ignore_case(candidate, &tokens[last]))
                .collect();
        }

        Vec::new()
    }
}
