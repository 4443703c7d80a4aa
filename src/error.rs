// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    InvalidArgument(String),
    Attach(AttachError),
    Io(String),
    Config(String),
}

/// Reasons a container host cannot provide a surface for a toast.
///
/// An attach failure drops the affected request; the queue carries on with
/// the next pending one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachError {
    /// No display context is available (e.g., window not yet sized or hidden).
    NoDisplayContext,

    /// The host still holds a surface for a previous toast.
    SurfaceBusy,

    /// Host-specific failure with raw message
    Other(String),
}

impl AttachError {
    /// Short machine-friendly name used in diagnostics events.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            AttachError::NoDisplayContext => "no_display_context",
            AttachError::SurfaceBusy => "surface_busy",
            AttachError::Other(_) => "other",
        }
    }
}

impl fmt::Display for AttachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttachError::NoDisplayContext => write!(f, "No active display context"),
            AttachError::SurfaceBusy => write!(f, "A toast surface is already attached"),
            AttachError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(e) => write!(f, "Invalid argument: {}", e),
            Error::Attach(e) => write!(f, "Attach Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<AttachError> for Error {
    fn from(err: AttachError) -> Self {
        Error::Attach(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
