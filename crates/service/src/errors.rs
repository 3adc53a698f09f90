use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("name cannot be empty")]
    StoreNameCannotBeEmpty,
    #[error("store {0} not found")]
    StoreNotFound(i32),
    #[error("model {0} not found")]
    ModelNotFound(i32),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

