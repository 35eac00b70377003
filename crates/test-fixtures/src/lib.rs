//! Test fixture loader and builders shared by the nnlogic crates.
//!
//! Golden scenarios live as JSON under this crate's directory and are
//! deserialized into the typed structs below.

use std::collections::BTreeMap;
use std::path::PathBuf;

use nnlogic_core::{Evidence, EvidenceKind, Policy, State};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

// ── Golden worked example ─────────────────────────────────────────────────

pub const WORKED_EXAMPLE: &str = "golden/worked_example.json";

/// Fixed definedness components for one step.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DefValues {
    pub sem: f64,
    pub ep: f64,
    #[serde(rename = "proc")]
    pub procedural: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IncorporateStep {
    pub def: DefValues,
    pub expected_nu_raw: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConflictStep {
    pub expected_pos_mass: f64,
    pub expected_neg_mass: f64,
    pub expected_conflict: f64,
    pub expected_penalty: f64,
    pub expected_nu: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NegDefineStep {
    pub constraints: Vec<String>,
    pub def: DefValues,
    pub expected_nu_raw: f64,
    #[serde(default)]
    pub expected_nu: Option<f64>,
    #[serde(default)]
    pub expected_licensed: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SplitStep {
    pub children: Vec<String>,
    pub focus: String,
    /// Relevance of each evidence id to the focus child.
    pub focus_relevance: BTreeMap<String, f64>,
    pub focus_def: DefValues,
    pub sibling_sem: f64,
    pub expected_focus_pos_mass: f64,
    pub expected_nu_raw: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkedExample {
    pub description: String,
    pub clock: f64,
    pub target: String,
    pub context: String,
    pub initial_nu_raw: f64,
    pub tolerance: f64,
    pub policy: Policy,
    pub evidence: Vec<Evidence>,
    pub incorporate: IncorporateStep,
    pub conflict: ConflictStep,
    pub neg_define: NegDefineStep,
    pub split: SplitStep,
    pub final_neg_define: NegDefineStep,
}

pub fn worked_example() -> WorkedExample {
    load_fixture(WORKED_EXAMPLE)
}

// ── Builders ──────────────────────────────────────────────────────────────

/// Evidence with an explicit id, full trust.
pub fn evidence(id: &str, kind: EvidenceKind, valence: f64, src: &str, time: f64) -> Evidence {
    Evidence::with_id(id, kind, format!("claim {id}"), valence, src, time)
}

pub fn epistemic(id: &str, valence: f64, src: &str, time: f64) -> Evidence {
    evidence(id, EvidenceKind::Epistemic, valence, src, time)
}

pub fn definitional(id: &str, src: &str, time: f64) -> Evidence {
    evidence(id, EvidenceKind::Definitional, 0.5, src, time)
}

pub fn procedural(id: &str, valence: f64, src: &str, time: f64) -> Evidence {
    evidence(id, EvidenceKind::Procedural, valence, src, time)
}

/// Balanced pro/con evidence: conflict of exactly 1.0.
pub fn balanced_pair(time: f64) -> Vec<Evidence> {
    vec![
        epistemic("pro", 0.8, "alice", time),
        epistemic("con", -0.8, "bob", time),
    ]
}

/// One-sided evidence: conflict 0.0.
pub fn agreeing_pair(time: f64) -> Vec<Evidence> {
    vec![
        epistemic("pro1", 0.8, "alice", time),
        epistemic("pro2", 0.6, "bob", time),
    ]
}

/// A fresh state with the given raw vagueness.
pub fn state_with_nu_raw(target: &str, context: &str, nu_raw: f64, now: f64) -> State {
    State::initial(target, context, now).with_nu_raw(nu_raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn worked_example_parses() {
        assert!(fixture_exists(WORKED_EXAMPLE));
        let w = worked_example();
        assert_eq!(w.evidence.len(), 3);
        assert_eq!(w.neg_define.constraints.len(), 5);
        assert_eq!(w.split.children.len(), 3);
        assert!(w.split.children.contains(&w.split.focus));
        assert_eq!(w.final_neg_define.expected_licensed, Some(true));
        w.policy.validate().unwrap();
    }

    #[test]
    fn worked_example_evidence_keeps_explicit_ids() {
        let w = worked_example();
        let ids: Vec<&str> = w.evidence.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e1", "e2", "e3"]);
        assert_eq!(w.evidence[0].trust, 0.76);
    }
}
