// Single source of truth for all default values.

// --- Evaluation thresholds ---
pub const DEFAULT_THETA_EVAL: f64 = 0.4;
pub const DEFAULT_THETA_EVAL_RAW: f64 = 0.5;
pub const DEFAULT_THETA_NULL: f64 = 0.7;
pub const DEFAULT_THETA_DEFINED: f64 = 0.3;
pub const DEFAULT_THETA_CONFLICT: f64 = 0.3;
pub const DEFAULT_THETA_CONFLICT_CLEAR: f64 = 0.15;
pub const DEFAULT_THETA_UTILITY: f64 = 0.5;

// --- Definedness weights ---
pub const DEFAULT_W_SEM: f64 = 0.4;
pub const DEFAULT_W_EP: f64 = 0.35;
pub const DEFAULT_W_PROC: f64 = 0.25;

// --- Conflict / penalty ---
pub const DEFAULT_MAX_CONFLICT_PENALTY: f64 = 0.2;
pub const DEFAULT_CONFLICT_COOLDOWN_SECS: f64 = 3600.0; // 1 hour
pub const DEFAULT_PENALTY_DECAY_ENABLED: bool = true;
pub const DEFAULT_PENALTY_DECAY_FACTOR: f64 = 0.9;
pub const DEFAULT_PENALTY_CLEAR_WINDOW_SECS: f64 = 86_400.0; // 24 hours
pub const DEFAULT_PENALTY_CLEANUP_THRESHOLD: f64 = 0.01;

// --- Boundary transform ---
pub const DEFAULT_NOT_I_TRUST_FACTOR: f64 = 0.7;
pub const DEFAULT_UNKNOWN_TRUST_FACTOR: f64 = 0.5;
pub const DEFAULT_COALITION_FACTOR: f64 = 0.85;

// --- Dedup ---
pub const DEFAULT_TIME_BUCKET_GRANULARITY_SECS: f64 = 60.0;

// --- Evidence decay ---
pub const DEFAULT_DECAY_RATE: f64 = 0.001; // per second
pub const DEFAULT_DECAY_HALFLIFE_SECS: f64 = 86_400.0;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
pub const DEFAULT_TRACE_ENABLED: bool = true;
