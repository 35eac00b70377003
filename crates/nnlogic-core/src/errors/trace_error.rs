/// Errors raised while exporting a refinement trace.
#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    #[error("trace serialization failed: {message}")]
    Serialize { message: String },

    #[error("trace write failed: {message}")]
    Io { message: String },
}

impl From<serde_json::Error> for TraceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for TraceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}
