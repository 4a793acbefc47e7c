use crate::Algorithm;

pub type Result<T> = std::result::Result<T, DigestError>;

#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    #[error("unknown digest algorithm '{0}'")]
    UnknownAlgorithm(String),

    #[error("failed to read message: {0}")]
    Io(#[from] std::io::Error),

    #[error("{algorithm} digest mismatch: expected {expected}, got {actual}")]
    Mismatch {
        algorithm: Algorithm,
        expected: String,
        actual: String,
    },
}
