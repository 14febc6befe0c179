// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for tributary sequence and stream adapters
//!
//! Most synchronous adapters never fail on their own: failures come from user
//! closures and travel as values (`Result` elements) or propagate directly.
//! [`TributaryError`] covers the cases where the library itself has to report
//! something: a failed work item surfacing from a fan-out, a timeout, a
//! required value that was absent, or a rejected argument.
//!
//! # Examples
//!
//! ```
//! use tributary_core::{Result, TributaryError};
//!
//! fn process_data() -> Result<()> {
//!     Err(TributaryError::stream_error("Stream not ready"))
//! }
//!
//! assert!(process_data().is_err());
//! ```

/// Root error type for all tributary operations
#[derive(Debug, thiserror::Error)]
pub enum TributaryError {
    /// Stream processing encountered an error
    ///
    /// General failure for stream operations that don't fit the other variants.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong during stream processing
        context: String,
    },

    /// Custom error from user code
    ///
    /// Wraps errors produced by work items and callbacks so they can travel
    /// through fallible streams.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Timeout occurred
    ///
    /// Emitted when a timer wins the race against the supplied work.
    #[error("Timeout error: {context}")]
    TimeoutError {
        /// Context about the timeout (e.g. duration)
        context: String,
    },

    /// An optional value was required but absent
    #[error("Missing value: {reason}")]
    MissingValue {
        /// Why the value was required
        reason: String,
    },

    /// An argument was outside the accepted domain
    #[error("Invalid argument: {context}")]
    InvalidArgument {
        /// Which argument was rejected and why
        context: String,
    },
}

impl TributaryError {
    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Create a timeout error with the given context
    pub fn timeout_error(context: impl Into<String>) -> Self {
        Self::TimeoutError {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Create a missing-value error carrying the caller's reason
    pub fn missing_value(reason: impl Into<String>) -> Self {
        Self::MissingValue {
            reason: reason.into(),
        }
    }

    /// Create an invalid-argument error
    pub fn invalid_argument(context: impl Into<String>) -> Self {
        Self::InvalidArgument {
            context: context.into(),
        }
    }

    /// Check if this error was produced by a timer winning a race
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::TimeoutError { .. })
    }

    /// Check if this error indicates a permanent failure
    ///
    /// Timeouts are the only failures a caller may reasonably retry.
    #[must_use]
    pub const fn is_permanent(&self) -> bool {
        !self.is_timeout()
    }
}

/// Specialized Result type for tributary operations
///
/// # Examples
///
/// ```
/// use tributary_core::Result;
///
/// fn process() -> Result<String> {
///     Ok("processed".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, TributaryError>;

/// Extension trait for converting errors into `TributaryError`
///
/// Implemented for every `std::error::Error + Send + Sync + 'static`.
pub trait IntoTributaryError {
    /// Convert this error into a `TributaryError` with additional context
    fn into_tributary_error(self, context: &str) -> TributaryError;

    /// Convert this error into a `TributaryError` without additional context
    fn into_tributary(self) -> TributaryError
    where
        Self: Sized,
    {
        self.into_tributary_error("")
    }
}

impl<E: std::error::Error + Send + Sync + 'static> IntoTributaryError for E {
    fn into_tributary_error(self, context: &str) -> TributaryError {
        if context.is_empty() {
            TributaryError::user_error(self)
        } else {
            TributaryError::stream_error(format!("{context}: {self}"))
        }
    }
}

/// Helper trait for adding context to `Result`s
pub trait ResultExt<T> {
    /// Add context to an error
    ///
    /// # Errors
    /// Returns `Err(TributaryError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context to an error using a closure (lazy evaluation)
    ///
    /// # Errors
    /// Returns `Err(TributaryError)` if the underlying result is `Err`.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<TributaryError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| attach_context(context.into(), e.into()))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| attach_context(f(), e.into()))
    }
}

fn attach_context(context: String, error: TributaryError) -> TributaryError {
    match error {
        TributaryError::UserError(inner) => TributaryError::StreamProcessingError {
            context: format!("{context}: {inner}"),
        },
        other => other,
    }
}

impl Clone for TributaryError {
    fn clone(&self) -> Self {
        match self {
            Self::StreamProcessingError { context } => Self::StreamProcessingError {
                context: context.clone(),
            },
            // The boxed source cannot be cloned, keep its message
            Self::UserError(e) => Self::StreamProcessingError {
                context: format!("User error: {e}"),
            },
            Self::TimeoutError { context } => Self::TimeoutError {
                context: context.clone(),
            },
            Self::MissingValue { reason } => Self::MissingValue {
                reason: reason.clone(),
            },
            Self::InvalidArgument { context } => Self::InvalidArgument {
                context: context.clone(),
            },
        }
    }
}
