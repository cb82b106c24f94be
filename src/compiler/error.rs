use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("undefined variable: {0}")]
    UndefinedVariable(String),
    #[error("unknown operator: {0}")]
    UnknownOperator(String),
}
