use super::value::Type;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("stack overflow")]
    StackOverflow,
    #[error("unsupported type for negation by minus: {0}")]
    UnsupportedNegation(Type),
    #[error("unsupported types for binary operation: {0} and {1}")]
    UnsupportedBinaryOperation(Type, Type),
    #[error("unknown integer operator: {0}")]
    UnknownIntegerOperator(u8),
    #[error("unknown opcode: {0}")]
    UnknownOpcode(u8),
}
