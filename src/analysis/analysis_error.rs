use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("aggregate operator is required")]
    MissingOperator,

    #[error("intermediate type is required for {function}")]
    MissingIntermediateType { function: String },

    #[error("function not found: {0}")]
    FunctionNotFound(String),

    #[error("invalid function name: {0:?}")]
    InvalidFunctionName(String),

    #[error("invalid type: {0}")]
    InvalidType(String),
}
