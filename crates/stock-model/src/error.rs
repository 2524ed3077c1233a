use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("cannot parse period from '{name}'")]
    InvalidPeriod { name: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
