//! Error types for prop parsing.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors produced when a prop token is parsed from free-form text.
pub enum PropError {
    /// The string does not name any variant accepted by the prop.
    #[error("unknown {prop} token `{value}` (expected one of: {expected})")]
    UnknownToken {
        /// Prop being parsed, for example `size`.
        prop: &'static str,
        /// Rejected input.
        value: String,
        /// Comma separated list of accepted tokens.
        expected: String,
    },
}
