use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("query rejected: {0}")]
    Compile(#[from] fsq_syntax::CompileError),

    #[error("invalid reference date '{0}', expected YYYYMMDD")]
    InvalidReferenceDate(String),

    #[error("failed to serialize output: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}
