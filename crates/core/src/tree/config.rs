use crate::sender::SenderKinds;

/// Inheritable node configuration.
///
/// When a child draft is constructed, the parent's `NodeConfig` is copied
/// into it once — a snapshot, never a live reference — so later edits to the
/// parent draft do not leak into already-constructed children and ownership
/// keeps flowing strictly parent to child.
#[derive(Debug, Clone, Default)]
pub(crate) struct NodeConfig {
    /// Display prefix composed onto every outgoing line, e.g. `[Arena]`.
    pub(crate) prefix: String,
    /// Lead-in for the usage line (before the command path), e.g. `Usage:`.
    pub(crate) usage_prefix: String,
    /// Permission required to enter the node; `None` means unrestricted.
    pub(crate) permission: Option<String>,
    /// Sender kinds admitted by the gate.
    pub(crate) kinds: SenderKinds,
    /// Raw no-permission line; prefix composition happens at build time.
    pub(crate) no_permission_line: Option<String>,
    /// Command-chain text of all ancestors, including their slot
    /// placeholders, up to but not including this node's name.
    pub(crate) chain: String,
}

impl NodeConfig {
    /// Snapshot for a child named `name`: copies everything and extends the
    /// permission as `parent.perm + "." + name`. The chain handed down is the
    /// parent's chain plus the parent's own name and slot placeholders; the
    /// caller supplies that as `chain`.
    pub(crate) fn inherit(&self, name: &str, chain: String) -> Self {
        Self {
            prefix: self.prefix.clone(),
            usage_prefix: self.usage_prefix.clone(),
            permission: self.permission.as_ref().map(|p| format!("{p}.{name}")),
            kinds: self.kinds,
            no_permission_line: self.no_permission_line.clone(),
            chain,
        }
    }

    /// Compose the display prefix onto a line. Empty prefixes are a no-op so
    /// unprefixed trees do not accumulate leading spaces.
    pub(crate) fn prefixed(&self, line: &str) -> String {
        if self.prefix.is_empty() {
            line.to_string()
        } else {
            format!("{} {}", self.prefix, line)
        }
    }
}
