use serde::{Deserialize, Serialize};

/// Classification of a command invoker, used for gating.
///
/// Hosts map their own invoker types onto these two kinds: an interactive
/// sender is a live user session (a player, a chat client), a non-interactive
/// sender is an automated origin (a console, a scheduler).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SenderKind {
    /// A live user session.
    Interactive,
    /// An automated origin such as a console.
    NonInteractive,
}

/// The set of sender kinds a node admits.
///
/// Both kinds are allowed by default. Copied from the parent draft when a
/// child is constructed, so restrictions flow down the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderKinds {
    /// Whether interactive senders may enter.
    pub interactive: bool,
    /// Whether non-interactive senders may enter.
    pub non_interactive: bool,
}

impl Default for SenderKinds {
    fn default() -> Self {
        Self {
            interactive: true,
            non_interactive: true,
        }
    }
}

impl SenderKinds {
    /// Whether the given kind is in the set.
    pub fn allows(&self, kind: SenderKind) -> bool {
        match kind {
            SenderKind::Interactive => self.interactive,
            SenderKind::NonInteractive => self.non_interactive,
        }
    }
}

/// A command invoker, supplied by the host.
///
/// The engine only reads the sender's kind and permissions and pushes
/// finalized display text back through [`Sender::send`]; how permissions are
/// resolved and where messages end up is entirely the host's business.
/// `send` takes `&self` so implementations that record messages use interior
/// mutability.
pub trait Sender {
    /// The invoker's kind.
    fn kind(&self) -> SenderKind;

    /// Whether the invoker holds the given permission string.
    fn has_permission(&self, permission: &str) -> bool;

    /// Deliver one line of already-composed display text to the invoker.
    fn send(&self, text: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_default_allows_both() {
        let kinds = SenderKinds::default();
        assert!(kinds.allows(SenderKind::Interactive));
        assert!(kinds.allows(SenderKind::NonInteractive));
    }

    #[test]
    fn kinds_restricted_to_interactive() {
        let kinds = SenderKinds {
            interactive: true,
            non_interactive: false,
        };
        assert!(kinds.allows(SenderKind::Interactive));
        assert!(!kinds.allows(SenderKind::NonInteractive));
    }

    #[test]
    fn sender_kind_serde_kebab_case() {
        let json = serde_json::to_string(&SenderKind::NonInteractive).unwrap();
        assert_eq!(json, "\"non-interactive\"");
        let back: SenderKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SenderKind::NonInteractive);
    }
}
