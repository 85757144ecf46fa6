use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid Ethereum address: {0}")]
    InvalidAddress(String),
}
