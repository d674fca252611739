//! Boundary check gating entry into protected views.
//!
//! Modeled as an explicit state machine with a pure decision function, kept
//! apart from any rendering lifecycle. No IO beyond the store read, no
//! panics.

use std::sync::Arc;

use crate::identity::Identity;
use crate::store::CredentialStore;

/// Where an unauthorized visitor is sent.
pub const LOGIN_ROUTE: &str = "/login";

/// Guard state for a protected view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// Evaluation has not run yet. Views hold this before mounting; the
    /// decision function never returns it.
    Checking,
    /// A session is resident; the wrapped view renders.
    Authorized,
    /// No session; render nothing and redirect to the login route.
    Unauthorized,
}

impl GuardState {
    pub fn allows_render(&self) -> bool {
        matches!(self, GuardState::Authorized)
    }

    /// The redirect target, when one applies.
    pub fn redirect_route(&self) -> Option<&'static str> {
        match self {
            GuardState::Unauthorized => Some(LOGIN_ROUTE),
            GuardState::Checking | GuardState::Authorized => None,
        }
    }
}

/// Pure decision over the current identity. Any role is enough; role-based
/// affordance gating is a separate, advisory concern.
pub fn decide(identity: Option<&Identity>) -> GuardState {
    match identity {
        Some(_) => GuardState::Authorized,
        None => GuardState::Unauthorized,
    }
}

/// Stateless boundary check bound to a credential store.
///
/// `check` re-reads the store every time it is called, so a logout is
/// observed on the very next navigation into a protected route.
#[derive(Clone)]
pub struct AccessGuard {
    store: Arc<dyn CredentialStore>,
}

impl AccessGuard {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    pub fn check(&self) -> GuardState {
        decide(self.store.read().as_ref())
    }
}
