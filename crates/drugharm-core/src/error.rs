use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown study: {0}")]
    UnknownStudy(String),

    #[error("unknown criterion: {0}")]
    UnknownCriterion(String),

    #[error("unknown drug class: {0}")]
    UnknownDrugClass(String),
}
