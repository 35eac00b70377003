/// Width of a derived evidence id, in hex characters.
pub const EVIDENCE_ID_HEX_LEN: usize = 16;

/// Accumulated weighted mass at which an evidence pool counts as fully evidenced.
pub const EVIDENCE_SATURATION_MASS: f64 = 2.0;

/// Allowed deviation of `w_sem + w_ep + w_proc` from 1.0 during policy validation.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;
