use thiserror::Error;

/// Failures that stop training. The interactive session cannot start without
/// a trained model, so callers treat these as fatal.
#[derive(Debug, Error, PartialEq)]
pub enum TrainError {
    #[error("invalid training configuration: {0}")]
    InvalidConfig(String),

    #[error("training diverged at epoch {epoch}: loss is {loss}")]
    Diverged { epoch: usize, loss: f64 },
}

/// Why a single REPL line produced no answer. Every variant is recoverable;
/// the session reports it and reads the next line.
#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error("could not parse {token:?} as a number")]
    InvalidNumber { token: String },

    #[error("expected exactly two numbers, got {count}")]
    WrongArity { count: usize },

    #[error("model produced a non-finite prediction ({predicted:?}) for {lhs:?} + {rhs:?}")]
    NonFinitePrediction { lhs: f64, rhs: f64, predicted: f64 },

    #[error("{lhs:?} + {rhs:?} is out of range for a 64-bit float")]
    SumOverflow { lhs: f64, rhs: f64 },
}

impl QueryError {
    /// Malformed input, as opposed to a failure while answering a well-formed query.
    pub fn is_input_error(&self) -> bool {
        matches!(self, QueryError::InvalidNumber { .. } | QueryError::WrongArity { .. })
    }
}
