//! State Machine Runtime
//!
//! Flat state machines for view interaction states (menu open/closed,
//! transient flags). Supports:
//! - Simple (from, event, to) transitions, including self-transitions
//! - Entry/exit actions
//! - A bounded transition history for debugging

use std::collections::VecDeque;
use std::fmt;

use rustc_hash::FxHashMap;

/// Identifier for a state within a state machine
pub type StateId = u32;

/// Identifier for an input that drives a transition
pub type InputId = u32;

/// An action executed when a state is entered or exited
pub type Action = Box<dyn FnMut() + Send>;

/// Number of transitions kept in the history ring
const HISTORY_LIMIT: usize = 32;

/// A transition in the state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from_state: StateId,
    pub input: InputId,
    pub to_state: StateId,
}

impl Transition {
    pub fn new(from: StateId, input: InputId, to: StateId) -> Self {
        Self {
            from_state: from,
            input,
            to_state: to,
        }
    }
}

/// Builder for creating state machines
pub struct StateMachineBuilder {
    initial_state: StateId,
    transitions: Vec<Transition>,
    entry_callbacks: FxHashMap<StateId, Vec<Action>>,
    exit_callbacks: FxHashMap<StateId, Vec<Action>>,
}

impl StateMachineBuilder {
    pub fn new(initial_state: StateId) -> Self {
        Self {
            initial_state,
            transitions: Vec::new(),
            entry_callbacks: FxHashMap::default(),
            exit_callbacks: FxHashMap::default(),
        }
    }

    /// Add a transition (from, input, to)
    pub fn on(mut self, from: StateId, input: InputId, to: StateId) -> Self {
        self.transitions.push(Transition::new(from, input, to));
        self
    }

    /// Add an entry action for a state
    pub fn on_enter<F: FnMut() + Send + 'static>(mut self, state: StateId, action: F) -> Self {
        self.entry_callbacks
            .entry(state)
            .or_default()
            .push(Box::new(action));
        self
    }

    /// Add an exit action for a state
    pub fn on_exit<F: FnMut() + Send + 'static>(mut self, state: StateId, action: F) -> Self {
        self.exit_callbacks
            .entry(state)
            .or_default()
            .push(Box::new(action));
        self
    }

    pub fn build(self) -> StateMachine {
        StateMachine {
            initial_state: self.initial_state,
            current_state: self.initial_state,
            transitions: self.transitions,
            entry_callbacks: self.entry_callbacks,
            exit_callbacks: self.exit_callbacks,
            history: VecDeque::new(),
        }
    }
}

/// A state machine instance
pub struct StateMachine {
    initial_state: StateId,
    current_state: StateId,
    transitions: Vec<Transition>,
    entry_callbacks: FxHashMap<StateId, Vec<Action>>,
    exit_callbacks: FxHashMap<StateId, Vec<Action>>,
    history: VecDeque<(StateId, InputId, StateId)>,
}

impl StateMachine {
    /// Create a builder for a state machine
    pub fn builder(initial_state: StateId) -> StateMachineBuilder {
        StateMachineBuilder::new(initial_state)
    }

    pub fn current_state(&self) -> StateId {
        self.current_state
    }

    pub fn is_in(&self, state: StateId) -> bool {
        self.current_state == state
    }

    /// Most recent transitions, oldest first
    pub fn history(&self) -> impl Iterator<Item = &(StateId, InputId, StateId)> {
        self.history.iter()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Check if an input can trigger a transition from the current state
    pub fn can_send(&self, input: InputId) -> bool {
        self.find(input).is_some()
    }

    /// Send an input, potentially triggering a transition.
    ///
    /// Returns the state after the input has been processed. Inputs with no
    /// matching transition leave the machine untouched.
    pub fn send(&mut self, input: InputId) -> StateId {
        let current = self.current_state;

        let Some(to_state) = self.find(input).map(|t| t.to_state) else {
            return current;
        };

        if let Some(callbacks) = self.exit_callbacks.get_mut(&current) {
            for callback in callbacks.iter_mut() {
                callback();
            }
        }

        self.current_state = to_state;

        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back((current, input, to_state));

        if let Some(callbacks) = self.entry_callbacks.get_mut(&to_state) {
            for callback in callbacks.iter_mut() {
                callback();
            }
        }

        to_state
    }

    /// Jump back to the initial state without running any actions.
    pub fn restart(&mut self) {
        self.current_state = self.initial_state;
        self.history.clear();
    }

    fn find(&self, input: InputId) -> Option<&Transition> {
        let current = self.current_state;
        self.transitions
            .iter()
            .find(|t| t.from_state == current && t.input == input)
    }
}

impl fmt::Debug for StateMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("current_state", &self.current_state)
            .field("transitions", &self.transitions)
            .field("history_len", &self.history.len())
            .finish_non_exhaustive()
    }
}
