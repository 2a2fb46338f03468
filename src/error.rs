use thiserror::Error;

/// Unified error type covering all possible error scenarios
#[derive(Error, Debug)]
pub enum AsmTestError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("File operation error: {message}")]
    File { message: String },

    #[error("Toolchain invocation failed: {stage} - {details}")]
    Toolchain { stage: String, details: String },

    #[error("Vector extraction failed: {message}")]
    Extraction { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Instruction generation failed: {message}")]
    InstructionGeneration { message: String },

    #[error("JSON serialization/deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML configuration could not be parsed: {0}")]
    Toml(#[from] toml::de::Error),
}

impl AsmTestError {
    pub fn file<S: Into<String>>(message: S) -> Self {
        Self::File {
            message: message.into(),
        }
    }

    pub fn toolchain<S: Into<String>, D: Into<String>>(stage: S, details: D) -> Self {
        Self::Toolchain {
            stage: stage.into(),
            details: details.into(),
        }
    }

    pub fn extraction<S: Into<String>>(message: S) -> Self {
        Self::Extraction {
            message: message.into(),
        }
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn instruction_generation<S: Into<String>>(message: S) -> Self {
        Self::InstructionGeneration {
            message: message.into(),
        }
    }
}

/// Simplified Result type alias
pub type Result<T> = std::result::Result<T, AsmTestError>;
