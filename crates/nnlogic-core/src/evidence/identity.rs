//! Deterministic evidence identity.
//!
//! `id = blake3(kind | claim | src | floor(time / granularity))`, truncated
//! to a short hex string. Textually identical evidence from the same source
//! within one time bucket collapses to one id, which absorbs clock jitter.
//! Collisions across distinct claims are not defended against here; callers
//! that care supply explicit ids.

use crate::constants::EVIDENCE_ID_HEX_LEN;
use crate::evidence::EvidenceKind;
use crate::ids::{AgentId, EvidenceId};

/// `floor(time / granularity)`. Non-positive granularity falls back to 1s buckets.
pub fn time_bucket(time: f64, granularity: f64) -> i64 {
    let granularity = if granularity > 0.0 { granularity } else { 1.0 };
    (time / granularity).floor() as i64
}

/// Derive the id of an evidence item from its content.
pub fn compute_evidence_id(
    kind: EvidenceKind,
    claim: &str,
    src: &AgentId,
    time: f64,
    granularity: f64,
) -> EvidenceId {
    let bucket = time_bucket(time, granularity);
    let mut hasher = blake3::Hasher::new();
    hasher.update(kind.as_str().as_bytes());
    hasher.update(b"|");
    hasher.update(claim.as_bytes());
    hasher.update(b"|");
    hasher.update(src.as_str().as_bytes());
    hasher.update(b"|");
    hasher.update(bucket.to_string().as_bytes());
    let hex = hasher.finalize().to_hex();
    EvidenceId::new(&hex.as_str()[..EVIDENCE_ID_HEX_LEN])
}
