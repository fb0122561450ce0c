use super::Route;
use crate::utils::error::{LocaleError, Result};
use serde::{Deserialize, Serialize};

/// Per-navigation state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NavigationState {
    Pending,
    Redirecting,
    Switching,
    Resolved,
}

impl NavigationState {
    pub fn can_transition_to(self, next: NavigationState) -> bool {
        use NavigationState::*;
        matches!(
            (self, next),
            (Pending, Redirecting) | (Pending, Switching) | (Redirecting, Resolved) | (Switching, Resolved)
        )
    }
}

/// What the router should do with a guarded navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Let the navigation resolve as requested
    Proceed,

    /// Abort and navigate to this route instead
    Redirect(Route),
}

impl NavigationDecision {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect(_))
    }
}

/// Tracks one navigation through the guard
#[derive(Debug, Clone)]
pub struct Navigation {
    pub to: Route,
    pub from: Option<Route>,
    state: NavigationState,
}

impl Navigation {
    pub fn new(to: Route, from: Option<Route>) -> Self {
        Self {
            to,
            from,
            state: NavigationState::Pending,
        }
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn advance(&mut self, next: NavigationState) -> Result<()> {
        if !self.state.can_transition_to(next) {
            return Err(LocaleError::InvalidTransition {
                from: self.state,
                to: next,
            });
        }

        tracing::trace!("Navigation to {}: {:?} -> {:?}", self.to, self.state, next);
        self.state = next;
        Ok(())
    }
}
