use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("value parse error: {0}")]
    Value(#[from] flagval::Error),
}

pub(crate) type Result<T> = std::result::Result<T, Error>;
