use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValuationError {
    #[error("the time horizon must be an integer number of periods for the lattice, got {0}")]
    InvalidTimeHorizon(f64),
    #[error("{0} is undefined: it was neither supplied nor derivable from a volatility")]
    MissingQuantity(&'static str),
    #[error("risk-neutral probability {0} lies outside [0, 1]")]
    ProbabilityOutOfRange(f64),
}

pub type ValuationResult<T> = Result<T, ValuationError>;
