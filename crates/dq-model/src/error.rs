use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid column name: {0:?}")]
    InvalidColumnName(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
