use std::fmt;

use thiserror::Error;

/// A single rejected token.
///
/// Messages for `MalformedPair` and `UnknownParameter` come from the
/// [`Messages`](crate::Messages) provider and are stored already rendered.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ParamError {
    #[error("{message}")]
    MalformedPair { token: String, message: String },

    #[error("{message}")]
    UnknownParameter { name: String, message: String },

    #[error("{key} must be one of {expected} (got '{value}')")]
    InvalidEnumValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("{key} must be a number (got '{value}')")]
    NotANumber { key: &'static str, value: String },

    #[error("{key} must be {bound} (got {value})")]
    OutOfRange {
        key: &'static str,
        value: String,
        bound: &'static str,
    },

    #[error("{key} must list at least one goal")]
    EmptyList { key: &'static str },
}

/// Every error collected during one parse pass, in the order they occurred.
#[derive(Debug, Clone, PartialEq, Error)]
pub struct ParamErrors {
    errors: Vec<ParamError>,
}

impl ParamErrors {
    /// Returns `None` when nothing was collected.
    pub(crate) fn from_vec(errors: Vec<ParamError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    pub fn errors(&self) -> &[ParamError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ParamErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl IntoIterator for ParamErrors {
    type Item = ParamError;
    type IntoIter = std::vec::IntoIter<ParamError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}
