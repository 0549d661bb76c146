use thiserror::Error;

#[derive(Error, Debug)]
pub enum OsintError {
    #[error("Console error: {0}")]
    Console(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for OsintError {
    fn from(error: std::io::Error) -> Self {
        OsintError::Console(error.to_string())
    }
}

pub type OsintResult<T> = std::result::Result<T, OsintError>;
