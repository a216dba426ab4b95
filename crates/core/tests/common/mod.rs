//! Shared test helpers for `cmdtree_core` integration tests.

#![allow(unreachable_pub)]
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use cmdtree_core::{Invocation, NodeBehavior, Sender, SenderKind};

// ─── Recording sender ────────────────────────────────────────────────────────

/// A sender that records every line sent to it.
pub struct RecordingSender {
    kind: SenderKind,
    permissions: Vec<String>,
    sent: Mutex<Vec<String>>,
}

impl RecordingSender {
    pub fn interactive() -> Self {
        Self::with_permissions(SenderKind::Interactive, &[])
    }

    pub fn non_interactive() -> Self {
        Self::with_permissions(SenderKind::NonInteractive, &[])
    }

    pub fn with_permissions(kind: SenderKind, permissions: &[&str]) -> Self {
        Self {
            kind,
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Everything sent so far, in order.
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

impl Sender for RecordingSender {
    fn kind(&self) -> SenderKind {
        self.kind
    }

    fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    fn send(&self, text: &str) {
        self.sent.lock().unwrap().push(text.to_string());
    }
}

// ─── Probe behavior ──────────────────────────────────────────────────────────

/// One recorded leaf invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeCall {
    pub cursor: usize,
    pub extra_args: Vec<String>,
    /// Names of the trail nodes, root first.
    pub trail: Vec<String>,
}

#[derive(Debug, Default)]
pub struct ProbeState {
    pub calls: Mutex<Vec<ProbeCall>>,
}

impl ProbeState {
    pub fn calls(&self) -> Vec<ProbeCall> {
        self.calls.lock().unwrap().clone()
    }
}

/// A leaf behavior that records every invocation and returns a fixed result.
pub struct Probe {
    state: Arc<ProbeState>,
    result: bool,
}

impl Probe {
    /// Returns the behavior and a handle to its recorded calls.
    pub fn new(result: bool) -> (Self, Arc<ProbeState>) {
        let state = Arc::new(ProbeState::default());
        (
            Self {
                state: Arc::clone(&state),
                result,
            },
            state,
        )
    }
}

impl NodeBehavior for Probe {
    fn run(&self, inv: &Invocation<'_>) -> bool {
        self.state.calls.lock().unwrap().push(ProbeCall {
            cursor: inv.cursor,
            extra_args: inv.extra_args.to_vec(),
            trail: inv.trail.iter().map(|n| n.name().to_string()).collect(),
        });
        self.result
    }
}

// ─── Token helpers ───────────────────────────────────────────────────────────

pub fn tokens(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|p| p.to_string()).collect()
}
