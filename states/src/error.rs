use thiserror::Error;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("State not found: {name}, context: {context}")]
    StateNotFound { name: &'static str, context: String },
    #[error("Compute not found: {name}, context: {context}")]
    ComputeNotFound { name: &'static str, context: String },
    #[error("Command not found: {name}")]
    CommandNotFound { name: &'static str },
    #[error("Stored value does not match requested type: {name}")]
    TypeMismatch { name: &'static str },
}

impl StateError {
    pub fn state_not_found(name: &'static str, context: impl Into<String>) -> Self {
        Self::StateNotFound {
            name,
            context: context.into(),
        }
    }

    pub fn compute_not_found(name: &'static str, context: impl Into<String>) -> Self {
        Self::ComputeNotFound {
            name,
            context: context.into(),
        }
    }
}
