use thiserror::Error;

/// Errors returned by the fallible catalogue operations.
///
/// "Not found" outcomes are not errors; those return `Option::None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgoError {
    #[error("{what} must be non-negative, got {value}")]
    NegativeInput { what: &'static str, value: i64 },

    #[error("division by zero")]
    DivisionByZero,

    #[error("overflow: {0}")]
    Overflow(&'static str),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type AlgoResult<T> = Result<T, AlgoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = AlgoError::NegativeInput {
            what: "fibonacci index",
            value: -3,
        };
        assert_eq!(err.to_string(), "fibonacci index must be non-negative, got -3");
        assert_eq!(AlgoError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            AlgoError::Overflow("factorial exceeds u64").to_string(),
            "overflow: factorial exceeds u64"
        );
        assert_eq!(
            AlgoError::InvalidArgument("k must be positive".into()).to_string(),
            "invalid argument: k must be positive"
        );
    }
}
