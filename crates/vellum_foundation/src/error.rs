//! Error types for the Vellum system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Value operations are total and never produce these errors. They are
//! reserved for the encode/decode/parse functions whose malformed input
//! should reach the template author, and for calling-convention failures
//! detected by the function table.

use std::fmt;

use thiserror::Error;

/// The main error type for Vellum operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unknown function error.
    #[must_use]
    pub fn unknown_function(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownFunction(name.into()))
    }

    /// Creates an arity mismatch error.
    #[must_use]
    pub fn arity_mismatch(expected: String, actual: usize) -> Self {
        Self::new(ErrorKind::ArityMismatch { expected, actual })
    }

    /// Creates a decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Decode(message.into()))
    }

    /// Creates an encode error.
    #[must_use]
    pub fn encode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Encode(message.into()))
    }

    /// Creates an invalid duration error.
    #[must_use]
    pub fn invalid_duration(input: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidDuration(input.into()))
    }

    /// Creates an invalid URL error.
    #[must_use]
    pub fn invalid_url(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidUrl {
            input: input.into(),
            reason: reason.into(),
        })
    }

    /// Creates an error reported by a host-registered function.
    #[must_use]
    pub fn host(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Host(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// No function is registered under the name.
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    /// Wrong number of arguments to function.
    #[error("arity mismatch: expected {expected}, got {actual}")]
    ArityMismatch {
        /// Description of expected arity.
        expected: String,
        /// Actual number of arguments.
        actual: usize,
    },

    /// Encoded input could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// A value could not be encoded to the target format.
    #[error("encode error: {0}")]
    Encode(String),

    /// Duration text was malformed.
    #[error("invalid duration: {0:?}")]
    InvalidDuration(String),

    /// URL text was malformed.
    #[error("invalid url {input:?}: {reason}")]
    InvalidUrl {
        /// The text that failed to parse.
        input: String,
        /// Why parsing failed.
        reason: String,
    },

    /// Error raised by a host-registered function.
    #[error("{0}")]
    Host(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Name the function was called under.
    pub function: Option<String>,
    /// Callers the error passed through on its way out, innermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the function name.
    #[must_use]
    pub fn with_function(mut self, name: impl Into<String>) -> Self {
        self.function = Some(name.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(function) = &self.function {
            write!(f, "in {function}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  via {frame}")?;
            }
        }
        Ok(())
    }
}
