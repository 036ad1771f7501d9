//! Error types.
//!
//! - `CurveError` is the library taxonomy returned by the computational core.
//! - `AppError` carries a process exit code for the `curvekit` binary.

/// Errors produced by domain generation, dataset generation, fitting and scoring.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveError {
    /// A caller-supplied configuration is missing, conflicting or malformed.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A fit request cannot produce a model (negative degree, no data,
    /// or a system that stays singular after regularization).
    #[error("degenerate fit: {0}")]
    DegenerateFit(String),
}

impl CurveError {
    pub fn config(message: impl Into<String>) -> Self {
        CurveError::Configuration(message.into())
    }

    pub fn degenerate(message: impl Into<String>) -> Self {
        CurveError::DegenerateFit(message.into())
    }
}

/// Result alias for the computational core.
pub type Result<T> = std::result::Result<T, CurveError>;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<CurveError> for AppError {
    fn from(err: CurveError) -> Self {
        let code = match err {
            CurveError::Configuration(_) => 2,
            CurveError::DegenerateFit(_) => 3,
        };
        AppError::new(code, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
