//! State store for per-session state machines.
//!
//! This module provides a thread-safe store for managing the state machine
//! of each session. It integrates with the transition function and effect
//! interpreter to handle state changes.

use std::collections::HashMap;
use std::fmt;

use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use super::event::Event;
use super::interpreter::{execute_effects, InterpreterContext};
use super::state::SessionState;
use super::transition::{transition, TransitionResult};

/// Unique identifier for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for SessionId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

/// Thread-safe store for per-session state machines.
///
/// Session state is held in memory only: a restart of the service forgets
/// every in-flight session, while the pages they produced stay with the
/// backend.
pub struct SessionStore {
    sessions: RwLock<HashMap<SessionId, SessionState>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Create a new session at the intro stage and return its id.
    pub async fn create_session(&self) -> SessionId {
        let id = SessionId::new();
        let mut sessions = self.sessions.write().await;
        sessions.insert(id, SessionState::intro());
        id
    }

    /// Get the current state for a session.
    pub async fn get(&self, id: &SessionId) -> Option<SessionState> {
        let sessions = self.sessions.read().await;
        sessions.get(id).cloned()
    }

    /// Set the state for a session.
    pub async fn set(&self, id: SessionId, state: SessionState) {
        let mut sessions = self.sessions.write().await;
        sessions.insert(id, state);
    }

    /// Remove a session.
    pub async fn remove(&self, id: &SessionId) -> Option<SessionState> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(id)
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        let sessions = self.sessions.read().await;
        sessions.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Process an event for a session: transition the state and execute
    /// effects.
    ///
    /// This is the main entry point for handling events. It:
    /// 1. Gets the current state (falling back to a fresh intro)
    /// 2. Runs the transition function
    /// 3. Executes effects via the interpreter
    /// 4. Handles result events recursively
    /// 5. Stores the final state
    ///
    /// Returns the final state after all transitions.
    pub async fn process_event(
        &self,
        id: &SessionId,
        event: Event,
        ctx: &InterpreterContext,
    ) -> SessionState {
        let mut current_state = self.get(id).await.unwrap_or_default();

        // Event loop: process the initial event and any result events from
        // effects.
        let mut events_to_process = vec![event];

        while let Some(event) = events_to_process.pop() {
            info!(
                "Processing event {} for session {} in phase {}",
                event.log_summary(),
                id,
                current_state.phase.name()
            );

            let TransitionResult { state, effects } = transition(current_state, event);
            current_state = state;

            if !effects.is_empty() {
                let result_events = execute_effects(ctx, effects).await;
                events_to_process.extend(result_events);
            }
        }

        self.set(*id, current_state.clone()).await;
        current_state
    }
}
