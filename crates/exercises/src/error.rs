/// Error returned by the exercises when an input is out of domain.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExerciseError {
    #[error("Validation failed: {0}")]
    Validation(String),
}
