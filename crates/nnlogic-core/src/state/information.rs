//! Σ: the (target, context) → state map with lazy default initialisation.

use std::collections::BTreeMap;

use crate::clock::Clock;
use crate::ids::{ContextId, TargetId};
use crate::state::State;

pub type StateKey = (TargetId, ContextId);

/// A collection of independent states.
///
/// Pairs never interact through Σ, so hosts may shard it freely. The
/// functional methods (`set`, `remove`) return a new Σ; `insert` and
/// `get_or_init` update in place for hosts that cache.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InformationState {
    states: BTreeMap<StateKey, State>,
}

impl InformationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored state, or a fresh one stamped at `clock.now()`.
    /// A fresh state is not stored.
    pub fn get(&self, target_id: &TargetId, context_id: &ContextId, clock: &dyn Clock) -> State {
        self.get_existing(target_id, context_id)
            .cloned()
            .unwrap_or_else(|| State::initial(target_id.clone(), context_id.clone(), clock.now()))
    }

    /// The stored state, creating and storing a fresh one on first access.
    pub fn get_or_init(
        &mut self,
        target_id: &TargetId,
        context_id: &ContextId,
        clock: &dyn Clock,
    ) -> &State {
        self.states
            .entry((target_id.clone(), context_id.clone()))
            .or_insert_with(|| State::initial(target_id.clone(), context_id.clone(), clock.now()))
    }

    pub fn get_existing(&self, target_id: &TargetId, context_id: &ContextId) -> Option<&State> {
        self.states.get(&(target_id.clone(), context_id.clone()))
    }

    /// New Σ with `state` stored under its own key.
    pub fn set(&self, state: State) -> Self {
        let mut next = self.clone();
        next.insert(state);
        next
    }

    /// Store `state` in place, returning any state it replaced.
    pub fn insert(&mut self, state: State) -> Option<State> {
        self.states.insert(state.key(), state)
    }

    /// New Σ without the given pair. Removing an absent pair is a no-op.
    pub fn remove(&self, target_id: &TargetId, context_id: &ContextId) -> Self {
        let mut next = self.clone();
        next.states.remove(&(target_id.clone(), context_id.clone()));
        next
    }

    pub fn contains(&self, target_id: &TargetId, context_id: &ContextId) -> bool {
        self.states.contains_key(&(target_id.clone(), context_id.clone()))
    }

    pub fn keys(&self) -> Vec<StateKey> {
        self.states.keys().cloned().collect()
    }

    pub fn states(&self) -> Vec<&State> {
        self.states.values().collect()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
