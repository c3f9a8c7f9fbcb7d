//! Error types of the input and reporting layers. Sorting itself cannot fail.

use thiserror::Error;

/// Rejected command line input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// No elements were given at all.
    #[error("no numbers to sort")]
    Empty,

    /// The token is empty or contains something other than ASCII digits. Signs
    /// are rejected too, so negative numbers end up here.
    #[error("`{0}` is not a non-negative integer")]
    NotANumber(String),

    /// The token is a well formed number above [`crate::input::MAX_ELEMENT`].
    #[error("`{0}` is larger than {max}", max = crate::input::MAX_ELEMENT)]
    OutOfRange(String),
}

/// A run whose result cannot be reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// Nothing was run.
    #[error("no runs to report")]
    NoRuns,

    /// The output of a run is not in ascending order.
    #[error("output of the {backing} run is not sorted")]
    Unsorted { backing: &'static str },

    /// Two runs sorted the same input into different outputs.
    #[error("{left} and {right} runs produced different outputs")]
    Mismatch {
        left: &'static str,
        right: &'static str,
    },
}
