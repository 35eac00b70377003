//! Decision queries: choose among options for a target once it is licensed.

use std::collections::BTreeMap;

use nnlogic_core::{ContextId, Policy, State, TargetId};
use serde::{Deserialize, Serialize};

use crate::licensing::is_licensed;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionQuery {
    pub target: TargetId,
    pub context: ContextId,
    pub options: Vec<String>,
    /// Utility per option. Options without a score are never chosen.
    #[serde(default)]
    pub utility_scores: BTreeMap<String, f64>,
}

impl DecisionQuery {
    pub fn new<I, S>(target: impl Into<TargetId>, context: impl Into<ContextId>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            target: target.into(),
            context: context.into(),
            options: options.into_iter().map(Into::into).collect(),
            utility_scores: BTreeMap::new(),
        }
    }

    pub fn with_utility(mut self, option: impl Into<String>, utility: f64) -> Self {
        self.utility_scores.insert(option.into(), utility);
        self
    }

    /// Highest-utility option and its score. Ties keep option order.
    pub fn best_option(&self) -> Option<(&str, f64)> {
        self.options
            .iter()
            .filter_map(|o| self.utility_scores.get(o).map(|u| (o.as_str(), *u)))
            .fold(None, |best, (option, utility)| match best {
                Some((_, b)) if b >= utility => best,
                _ => Some((option, utility)),
            })
    }

    /// The best option, but only when `state` is licensed and the option's
    /// utility reaches `theta_utility`.
    pub fn actionable_option(&self, state: &State, policy: &Policy) -> Option<&str> {
        if !is_licensed(state, policy) {
            return None;
        }
        self.best_option()
            .filter(|(_, utility)| *utility >= policy.theta_utility)
            .map(|(option, _)| option)
    }
}
