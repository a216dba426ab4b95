use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One declared extra-argument slot.
///
/// A slot occupies exactly one token position in the input. The token must
/// case-insensitively match one of the slot's options before the node's
/// children or leaf behavior are considered. The label only appears in
/// derived display text, wrapped as `<label>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgSlot {
    /// Placeholder label shown in usage and help text.
    pub label: String,
    /// The admissible values for this position.
    ///
    /// `BTreeSet` keeps completion candidates deterministic.
    pub options: BTreeSet<String>,
}

impl ArgSlot {
    /// Create a slot from a label and its option values.
    pub fn new<L, I, S>(label: L, options: I) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `token` case-insensitively matches one of the options.
    pub fn matches(&self, token: &str) -> bool {
        self.options.iter().any(|o| o.eq_ignore_ascii_case(token))
    }

    /// The label wrapped for display, e.g. `<state>`.
    pub(crate) fn placeholder(&self) -> String {
        format!("<{}>", self.label)
    }
}

/// Consume every slot starting at `cursor`, extending `previous` with the
/// matched tokens in order.
///
/// Returns `None` when there are not enough tokens to fill every slot
/// (`tokens.len() < cursor + n`) or when a token fails its slot's option
/// check. With no slots declared this never fails and returns a copy of
/// `previous`.
///
/// The dispatcher and the completer both go through this function, so the
/// two walks can never disagree on what counts as enough or valid input.
/// The slot region occupies token indices `[cursor, cursor + n)`; a child
/// name, if any, sits at `cursor + n`.
pub(crate) fn consume_slots(
    slots: &[ArgSlot],
    previous: &[String],
    tokens: &[String],
    cursor: usize,
) -> Option<Vec<String>> {
    if slots.is_empty() {
        return Some(previous.to_vec());
    }
    if tokens.len() < cursor + slots.len() {
        return None;
    }
    let mut consumed = previous.to_vec();
    for (slot, token) in slots.iter().zip(&tokens[cursor..cursor + slots.len()]) {
        if !slot.matches(token) {
            return None;
        }
        consumed.push(token.clone());
    }
    Some(consumed)
}
