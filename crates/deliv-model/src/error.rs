use thiserror::Error;

#[derive(Debug, Error)]
pub enum DelivError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// A surviving row failed type coercion. Cleaning removes every
    /// sentinel-valued row first, so hitting this means the dataset
    /// violates its declared schema.
    #[error("row {row}, column {column}: {message}")]
    Coerce {
        row: usize,
        column: &'static str,
        message: String,
    },
    /// A scalar extraction query matched zero rows.
    #[error("no rows match {0}")]
    EmptyGroup(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, DelivError>;
