#[derive(Debug)]
/// Represents all errors that can occur in the LLVM backend.
pub enum LoweringError {
    /// The generated module failed LLVM verification.
    InvalidModule {
        /// The verifier's diagnostic text.
        message: String,
    },
}

impl std::fmt::Display for LoweringError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidModule { message } => {
                write!(f, "Module verification failed: {message}")
            },
        }
    }
}

impl std::error::Error for LoweringError {}
