#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    Io(String),
    Serialization(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(msg) => {
                write!(f, "Preferences write failed: {}", msg)
            }
            StoreError::Serialization(msg) => {
                write!(f, "Preferences encoding failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for StoreError {}

pub type StoreResult<T> = Result<T, StoreError>;
