//! Evaluation contexts and the in-group/out-group role partition.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::ids::{AgentId, ContextId, TargetId};

/// Position of an evidence source relative to the in-group ("I").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    I,
    NotI,
    /// Coalition member, on both sides.
    Both,
    /// Unmapped agents.
    #[default]
    Unknown,
}

/// Explicit role assignment. Agents missing from the map are `Unknown`.
pub type RoleMap = BTreeMap<AgentId, Role>;

/// An evaluation frame: who counts as in-group, when, and over which targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Context {
    pub id: ContextId,
    #[serde(default)]
    pub i_side: BTreeSet<AgentId>,
    #[serde(default)]
    pub not_i_side: BTreeSet<AgentId>,
    #[serde(default)]
    pub time_start: f64,
    #[serde(default = "open_end")]
    pub time_end: f64,
    /// Targets this context covers; empty means unrestricted.
    #[serde(default)]
    pub scope: BTreeSet<TargetId>,
    /// Explicit roles, consulted before side membership.
    #[serde(default)]
    pub roles: RoleMap,
}

fn open_end() -> f64 {
    f64::INFINITY
}

impl Context {
    pub fn new(id: impl Into<ContextId>) -> Self {
        Self {
            id: id.into(),
            i_side: BTreeSet::new(),
            not_i_side: BTreeSet::new(),
            time_start: 0.0,
            time_end: open_end(),
            scope: BTreeSet::new(),
            roles: RoleMap::new(),
        }
    }

    pub fn with_i(mut self, agent: impl Into<AgentId>) -> Self {
        self.i_side.insert(agent.into());
        self
    }

    pub fn with_not_i(mut self, agent: impl Into<AgentId>) -> Self {
        self.not_i_side.insert(agent.into());
        self
    }

    pub fn with_role(mut self, agent: impl Into<AgentId>, role: Role) -> Self {
        self.roles.insert(agent.into(), role);
        self
    }

    pub fn with_scope(mut self, target: impl Into<TargetId>) -> Self {
        self.scope.insert(target.into());
        self
    }

    pub fn with_window(mut self, start: f64, end: f64) -> Self {
        self.time_start = start;
        self.time_end = end;
        self
    }

    /// Explicit role if mapped, else derived from side membership.
    pub fn role_of(&self, agent: &AgentId) -> Role {
        if let Some(role) = self.roles.get(agent) {
            return *role;
        }
        match (self.i_side.contains(agent), self.not_i_side.contains(agent)) {
            (true, true) => Role::Both,
            (true, false) => Role::I,
            (false, true) => Role::NotI,
            (false, false) => Role::Unknown,
        }
    }

    /// Materialise roles for every agent this context knows about.
    pub fn role_map(&self) -> RoleMap {
        self.i_side
            .iter()
            .chain(self.not_i_side.iter())
            .chain(self.roles.keys())
            .map(|a| (a.clone(), self.role_of(a)))
            .collect()
    }

    pub fn contains_time(&self, time: f64) -> bool {
        time >= self.time_start && time <= self.time_end
    }

    pub fn in_scope(&self, target: &TargetId) -> bool {
        self.scope.is_empty() || self.scope.contains(target)
    }
}
