//! Structured error wrapper.
//!
//! `StructuredError` pairs an underlying error with a classification
//! token and a message describing what failed at the current layer.
//! Wrapping is guarded: handing a cause back to `wrap` with the
//! classification it already carries returns the existing value instead
//! of stacking a duplicate layer on top of it.

use std::error::Error;
use std::fmt;

use crate::chain::Chain;
use crate::classify::Classification;

/// Boxed error type accepted as a cause.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// An error carrying a classification token, a message, and an optional
/// owned cause.
///
/// Immutable after construction. `Display` flattens the cause chain
/// into `"<message>: <cause>"` form, one layer per segment.
#[derive(Debug)]
pub struct StructuredError<K> {
    kind: K,
    message: String,
    cause: Option<BoxError>,
}

impl<K: Classification> StructuredError<K> {
    /// Create a leaf error with no underlying cause.
    pub fn new(kind: K, message: impl Into<String>) -> Box<Self> {
        Box::new(Self {
            kind,
            message: message.into(),
            cause: None,
        })
    }

    /// Wrap `cause` with a classification and a message for this layer.
    ///
    /// If `cause` is itself a `StructuredError` already carrying an
    /// equal `kind`, the existing value is returned unchanged and
    /// `message` is discarded — a chain never holds the same
    /// classification twice in a row.
    pub fn wrap(kind: K, message: impl Into<String>, cause: BoxError) -> Box<Self> {
        let message = message.into();
        let cause: Option<BoxError> = match cause.downcast::<Self>() {
            Ok(existing) if existing.kind == kind => {
                tracing::trace!(
                    "collapsed duplicate {:?} wrap, dropping message {:?}",
                    kind,
                    message
                );
                return existing;
            }
            Ok(structured) => Some(structured),
            Err(opaque) => Some(opaque),
        };

        Box::new(Self {
            kind,
            message,
            cause,
        })
    }

    /// The classification token supplied at construction.
    pub fn kind(&self) -> &K {
        &self.kind
    }

    /// `true` when this error carries the given classification.
    pub fn is(&self, kind: &K) -> bool {
        self.kind == *kind
    }

    /// The message for this layer, without the cause chain.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The wrapped cause, if any.
    pub fn cause(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(&**cause),
            None => None,
        }
    }

    /// Iterate over this error and every transitive cause, outermost
    /// first.
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }
}

impl<K> fmt::Display for StructuredError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{}: {}", self.message, cause),
            None => f.write_str(&self.message),
        }
    }
}

impl<K: Classification> Error for StructuredError<K> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(&**cause),
            None => None,
        }
    }
}
