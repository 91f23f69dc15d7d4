//! Error type.

use core::fmt;

use hash2curve::{ExpandMsgXmdError, ExpandMsgXofError};

/// Errors returned by the field codec and the hash-to-curve suites.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A byte string did not have the required fixed length.
    InvalidLength,
    /// `expand_message_xmd` rejected its parameters.
    Xmd(ExpandMsgXmdError),
    /// `expand_message_xof` rejected its parameters.
    Xof(ExpandMsgXofError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength => write!(f, "invalid input length"),
            Self::Xmd(err) => write!(f, "expand_message_xmd: {err}"),
            Self::Xof(err) => write!(f, "expand_message_xof: {err}"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidLength => None,
            Self::Xmd(err) => Some(err),
            Self::Xof(err) => Some(err),
        }
    }
}

impl From<ExpandMsgXmdError> for Error {
    fn from(err: ExpandMsgXmdError) -> Self {
        Self::Xmd(err)
    }
}

impl From<ExpandMsgXofError> for Error {
    fn from(err: ExpandMsgXofError) -> Self {
        Self::Xof(err)
    }
}

/// Result type with the crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
