//! Recursive dispatch and tab-completion over a finalized tree.
//!
//! Both walks share the same structural boundaries: a node's extra-argument
//! slots occupy token indices `[cursor, cursor + n)` and a child name, if
//! any, sits at `cursor + n`. Slot consumption goes through one shared
//! function so the execution path and the completion path can never disagree
//! on what counts as enough or valid input.

mod complete;
mod execute;

/// Case-insensitive prefix test used for completion filtering.
pub(crate) fn has_prefix_ignore_case(candidate: &str, prefix: &str) -> bool {
    candidate.len() >= prefix.len()
        && candidate
            .as_bytes()
            .iter()
            .zip(prefix.as_bytes())
            .all(|(c, p)| c.eq_ignore_ascii_case(p))
}
