use thiserror::Error;

#[derive(Debug, Error)]
pub enum StudyError {
    #[error("unknown study: {0}")]
    UnknownStudy(String),
}
