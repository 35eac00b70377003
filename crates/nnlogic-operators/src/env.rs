//! Shared inputs for every operator: policy, clock, and scoring strategies.

use nnlogic_core::{Clock, EvidenceSet, Policy, Relevance, SemanticDefinednessProvider, TargetId};
use nnlogic_scoring::{
    definedness, DefaultSemanticProvider, DefinednessBreakdown, DefinednessOverrides, DefinednessWeights,
};

/// Borrowed policy and clock plus optional scoring overrides.
///
/// Cheap to build per call. Nothing here is mutated by an operator, so one
/// environment may be reused across any number of states.
#[derive(Clone)]
pub struct OperatorEnv<'a> {
    policy: &'a Policy,
    clock: &'a dyn Clock,
    provider: Option<&'a dyn SemanticDefinednessProvider>,
    overrides: DefinednessOverrides,
    relevance: Option<Relevance>,
}

impl<'a> OperatorEnv<'a> {
    pub fn new(policy: &'a Policy, clock: &'a dyn Clock) -> Self {
        Self {
            policy,
            clock,
            provider: None,
            overrides: DefinednessOverrides::none(),
            relevance: None,
        }
    }

    /// Use `provider` for `Def_sem` instead of the count heuristic.
    pub fn with_provider(mut self, provider: &'a dyn SemanticDefinednessProvider) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn with_overrides(mut self, overrides: DefinednessOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Use `relevance` instead of the policy's default relevance function.
    pub fn with_relevance(mut self, relevance: Relevance) -> Self {
        self.relevance = Some(relevance);
        self
    }

    pub fn policy(&self) -> &Policy {
        self.policy
    }

    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    pub fn overrides(&self) -> &DefinednessOverrides {
        &self.overrides
    }

    /// The relevance function in effect.
    pub fn relevance(&self) -> &Relevance {
        self.relevance.as_ref().unwrap_or(&self.policy.relevance)
    }

    pub(crate) fn definedness(
        &self,
        target: &TargetId,
        evidence: &EvidenceSet,
        constraints: &[String],
    ) -> DefinednessBreakdown {
        self.definedness_with(target, evidence, constraints, &self.overrides)
    }

    pub(crate) fn definedness_with(
        &self,
        target: &TargetId,
        evidence: &EvidenceSet,
        constraints: &[String],
        overrides: &DefinednessOverrides,
    ) -> DefinednessBreakdown {
        let weights = DefinednessWeights::from(self.policy);
        match self.provider {
            Some(provider) => definedness(target, evidence, constraints, weights, provider, overrides),
            None => definedness(
                target,
                evidence,
                constraints,
                weights,
                &DefaultSemanticProvider::default(),
                overrides,
            ),
        }
    }
}
