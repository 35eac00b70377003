//! In-memory trace sink for refinement records.
//!
//! Operators never write here themselves; callers pass along the records
//! they get back.

use std::io::Write;

use nnlogic_core::{ContextId, ObservabilityConfig, OperatorKind, RefinementRecord, TargetId, TraceError};

#[derive(Debug, Clone)]
pub struct Tracer {
    enabled: bool,
    records: Vec<RefinementRecord>,
}

impl Default for Tracer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tracer {
    pub fn new() -> Self {
        Self {
            enabled: true,
            records: Vec::new(),
        }
    }

    /// A tracer that silently drops everything it is given.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            records: Vec::new(),
        }
    }

    pub fn from_config(config: &ObservabilityConfig) -> Self {
        if config.trace_enabled {
            Self::new()
        } else {
            Self::disabled()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn record(&mut self, record: RefinementRecord) {
        if self.enabled {
            self.records.push(record);
        }
    }

    pub fn record_all(&mut self, records: impl IntoIterator<Item = RefinementRecord>) {
        if self.enabled {
            self.records.extend(records);
        }
    }

    pub fn records(&self) -> &[RefinementRecord] {
        &self.records
    }

    /// Records for `target`, optionally narrowed to one context.
    pub fn for_target(&self, target: &TargetId, context: Option<&ContextId>) -> Vec<&RefinementRecord> {
        self.records
            .iter()
            .filter(|r| &r.target_id == target)
            .filter(|r| context.map_or(true, |c| &r.context_id == c))
            .collect()
    }

    pub fn for_context(&self, context: &ContextId) -> Vec<&RefinementRecord> {
        self.records.iter().filter(|r| &r.context_id == context).collect()
    }

    pub fn for_operator(&self, operator: OperatorKind) -> Vec<&RefinementRecord> {
        self.records.iter().filter(|r| r.operator == operator).collect()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// One human-readable line per record.
    pub fn dump(&self) -> Vec<String> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, r)| {
                format!(
                    "[{i}] {} on {}@{}: nu_raw {:.3}->{:.3}, nu {:.3}->{:.3}",
                    r.operator,
                    r.target_id,
                    r.context_id,
                    r.nu_raw_before,
                    r.nu_raw_after,
                    r.nu_before,
                    r.nu_after
                )
            })
            .collect()
    }

    /// Pretty-printed JSON array of every record.
    pub fn to_json(&self) -> Result<String, TraceError> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    /// One compact JSON object per line.
    pub fn write_jsonl(&self, mut out: impl Write) -> Result<(), TraceError> {
        for record in &self.records {
            let line = serde_json::to_string(record)?;
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        Ok(())
    }
}
