use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProbeError>;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("driver error: {0}")]
    Driver(#[from] mongodb::error::Error),

    #[error("BSON encoding error: {0}")]
    Bson(#[from] bson::ser::Error),
}
