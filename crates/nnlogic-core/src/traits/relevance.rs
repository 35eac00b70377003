use std::fmt;
use std::sync::Arc;

use crate::evidence::Evidence;
use crate::ids::{ContextId, TargetId};

type RelevanceFnInner = dyn Fn(&Evidence, &TargetId, &ContextId) -> f64 + Send + Sync;

/// Relevance of an evidence item to a (target, context) pair.
///
/// A shared closure, cheap to clone. Values ≤ 0 exclude the item from
/// aggregation; positive values scale its mass.
#[derive(Clone)]
pub struct Relevance(Arc<RelevanceFnInner>);

impl Relevance {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Evidence, &TargetId, &ContextId) -> f64 + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Every item fully relevant.
    pub fn uniform() -> Self {
        Self::new(|_, _, _| 1.0)
    }

    pub fn score(&self, evidence: &Evidence, target: &TargetId, context: &ContextId) -> f64 {
        (self.0)(evidence, target, context)
    }
}

impl Default for Relevance {
    fn default() -> Self {
        Self::uniform()
    }
}

impl fmt::Debug for Relevance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Relevance(<fn>)")
    }
}
