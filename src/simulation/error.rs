//! Simulation error type.
//!
//! Every fallible core operation returns `Result<T, SimError>`. A rejected
//! call leaves the world untouched.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum SimError {
    /// An argument with no physical meaning (negative dt, zero radius, ...)
    InvalidArgument {
        /// What was being validated
        what: &'static str,
        /// The offending value
        value: f64,
    },
}

impl SimError {
    pub(crate) fn invalid(what: &'static str, value: f64) -> Self {
        Self::InvalidArgument { what, value }
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { what, value } => write!(f, "invalid {what}: {value}"),
        }
    }
}

impl std::error::Error for SimError {}
