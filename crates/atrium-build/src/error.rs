use thiserror::Error as ThisError;

///
/// GenerateError
///
/// Generation-time failures are local and fatal: nothing is written
/// unless both artifacts can be.
///

#[derive(Debug, ThisError)]
pub enum GenerateError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("model '{model}' not found in schema")]
    ModelNotFound { model: String },
}
