// SPDX-License-Identifier: MPL-2.0
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    /// A plugin refused to install itself into the application instance.
    Install(InstallError),
    /// No element matched the host selector at mount time.
    MissingHost(String),
}

/// Raised by a plugin during installation when its own preconditions are
/// unmet. There is no recovery path: assembly stops at the first failure and
/// the error propagates unmodified to the process entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallError {
    pub plugin: &'static str,
    pub reason: String,
}

impl InstallError {
    pub fn new(plugin: &'static str, reason: impl Into<String>) -> Self {
        Self {
            plugin,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for InstallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "plugin '{}' failed to install: {}", self.plugin, self.reason)
    }
}

impl std::error::Error for InstallError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(msg) => write!(f, "I/O Error: {}", msg),
            Error::Config(msg) => write!(f, "Config Error: {}", msg),
            Error::Install(err) => write!(f, "{}", err),
            Error::MissingHost(selector) => {
                write!(f, "no host element matches selector '{}'", selector)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Install(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<InstallError> for Error {
    fn from(err: InstallError) -> Self {
        Error::Install(err)
    }
}
