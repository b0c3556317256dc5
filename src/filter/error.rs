use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid filter(s): {names}. Permitted filters: {allowed}")]
    UnknownFilters { names: String, allowed: &'static str },

    #[error("{0} must be a positive integer")]
    InvalidBound(&'static str),

    #[error("minEmployees cannot exceed maxEmployees")]
    InvertedRange,
}
