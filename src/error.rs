use thiserror::Error;

/// Failures raised by the linear-algebra engine and the fit orchestrator.
///
/// Every variant is detected at the point of violation and returned to the
/// caller immediately; no partial results are produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinalgError {
    #[error("dimension mismatch in {op}: {left} vs {right}")]
    DimensionMismatch {
        op: &'static str,
        left: usize,
        right: usize,
    },

    #[error("ragged matrix: column {column} has {found} rows, expected {expected}")]
    RaggedMatrix {
        column: usize,
        expected: usize,
        found: usize,
    },

    #[error("rank deficient: column {column} deflated to norm {norm:e}")]
    RankDeficient { column: usize, norm: f64 },

    #[error("division by zero: inverse of 0")]
    DivisionByZero,

    #[error("insufficient samples: got {samples}, need at least {required}")]
    InsufficientSamples { samples: usize, required: usize },

    #[error("invalid degree {degree}: must be >= 1")]
    InvalidDegree { degree: usize },

    #[error("invalid norm order p={p}: must be >= 1")]
    InvalidNormOrder { p: u32 },
}

/// Application-level error carrying the process exit code.
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

impl From<LinalgError> for AppError {
    fn from(err: LinalgError) -> Self {
        let exit_code = match err {
            LinalgError::InsufficientSamples { .. } => 3,
            LinalgError::RankDeficient { .. } | LinalgError::DivisionByZero => 4,
            _ => 2,
        };
        AppError::new(exit_code, format!("Fit failed: {err}"))
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
