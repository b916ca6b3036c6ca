use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[cfg(feature = "serde")]
    #[error("Failed to parse force description")]
    Parse(#[from] serde_json::Error),

    #[error("Force is of a different kind than {0}")]
    WrongKind(&'static str),
}
