//! The built-in demo tree and the CLI's sender implementation.
//!
//! The tree models a small game-server style command set under the label
//! `arena`, with a permission-gated admin branch, an extra-argument slot,
//! and both completion hooks in use — enough surface to exercise every path
//! of the engine from the command line.

use std::cell::RefCell;

use cmdtree_core::{
    BuildError, CommandRoot, Invocation, NodeBehavior, NodeDraft, RootDraft, RunFn, Sender,
    SenderKind,
};

// ── CLI sender ──────────────────────────────────────────────────────────

/// A sender backed by the CLI flags: fixed kind, a fixed permission list,
/// and a buffer recording every line the engine sends.
pub(crate) struct CliSender {
    kind: SenderKind,
    permissions: Vec<String>,
    sent: RefCell<Vec<String>>,
}

impl CliSender {
    pub(crate) fn new(kind: SenderKind, permissions: Vec<String>) -> Self {
        Self {
            kind,
            permissions,
            sent: RefCell::new(Vec::new()),
        }
    }

    /// The lines received so far, in order.
    pub(crate) fn into_sent(self) -> Vec<String> {
        self.sent.into_inner()
    }
}

impl Sender for CliSender {
    fn kind(&self) -> SenderKind {
        self.kind
    }

    fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    fn send(&self, text: &str) {
        self.sent.borrow_mut().push(text.to_string());
    }
}

// ── Demo behaviors ──────────────────────────────────────────────────────

const ARENAS: [&str; 3] = ["castle", "nether", "void"];
const PLAYERS: [&str; 3] = ["alex", "casey", "steve"];

/// `kick <player>`: takes one free-form argument and suggests known players.
struct Kick;

impl NodeBehavior for Kick {
    fn run(&self, inv: &Invocation<'_>) -> bool {
        let Some(player) = inv.tokens.get(inv.cursor) else {
            return false;
        };
        inv.sender.send(&format!("Kicked {player}."));
        true
    }

    fn extra_tab_options(&self, _inv: &Invocation<'_>) -> Vec<String> {
        PLAYERS.iter().map(|p| p.to_string()).collect()
    }
}

// ── Tree assembly ───────────────────────────────────────────────────────

/// Build the demo tree. Bottom-up: leaves first, then the branches that own
/// them, then the root.
pub(crate) fn build_tree() -> Result<CommandRoot, BuildError> {
    let mut root = RootDraft::new("arena", "All arena commands.");
    root.draft_mut()
        .set_prefix("[Arena]")
        .set_usage_prefix("Usage:")
        .set_no_permission_line("You do not have permission to do that.");
    root.add_credit_line("cmdtree demo, version 0.1.0");

    let mut list = NodeDraft::child_of(root.draft(), "list", "List loaded arenas.");
    list.set_behavior(RunFn(|inv: &Invocation<'_>| {
        inv.sender
            .send(&format!("Loaded arenas: {}", ARENAS.join(", ")));
        true
    }));
    root.add_child(list.build()?)?;

    let mut join = NodeDraft::child_of(root.draft(), "join", "Join an arena.");
    join.allow_non_interactive(false)
        .add_extra_argument("arena", ARENAS)
        .set_behavior(RunFn(|inv: &Invocation<'_>| {
            // The slot guarantees at least one consumed value.
            if let Some(arena) = inv.extra_args.last() {
                inv.sender.send(&format!("Joining {arena}."));
            }
            true
        }));
    root.add_child(join.build()?)?;

    let mut spectate = NodeDraft::child_of(root.draft(), "spectate", "Toggle spectator mode.");
    spectate
        .allow_non_interactive(false)
        .add_extra_argument("state", ["on", "off"])
        .set_behavior(RunFn(|inv: &Invocation<'_>| {
            if let Some(state) = inv.extra_args.last() {
                inv.sender.send(&format!("Spectator mode {state}."));
            }
            true
        }));
    root.add_child(spectate.build()?)?;

    let mut admin = NodeDraft::child_of(root.draft(), "admin", "Administrative commands.");
    admin.set_permission(Some("arena.admin".into()));

    let mut reload = NodeDraft::child_of(&admin, "reload", "Reload the arena configuration.");
    reload.set_behavior(RunFn(|inv: &Invocation<'_>| {
        inv.sender.send("Configuration reloaded.");
        true
    }));
    admin.add_child(reload.build()?)?;

    let mut kick = NodeDraft::child_of(&admin, "kick", "Kick a player from the arena.");
    kick.set_param_line("<player>").set_behavior(Kick);
    admin.add_child(kick.build()?)?;

    root.add_child(admin.build()?)?;
    root.build()
}
