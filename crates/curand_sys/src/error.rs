use crate::version::CurandApiVersion;
use std::error::Error;
use std::fmt::{self, Display};
use std::path::PathBuf;

/// A candidate library that could not be opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadAttempt {
    pub version: CurandApiVersion,
    pub path: PathBuf,
    pub reason: String,
}

/// Errors from locating and loading a cuRAND shared library.
#[non_exhaustive]
#[derive(Debug)]
pub enum LoadError {
    /// cuRAND is not distributed for the operating system this binary targets.
    UnsupportedPlatform,
    /// The shared library at `path` could not be opened.
    Open {
        path: PathBuf,
        source: libloading::Error,
    },
    /// The shared library at `path` opened but does not export `symbol`, so it is not a
    /// cuRAND build with the expected ABI.
    MissingSymbol {
        path: PathBuf,
        symbol: &'static str,
        source: libloading::Error,
    },
    /// None of the candidates for the requested version could be opened.
    NotFound {
        version: CurandApiVersion,
        attempts: Vec<LoadAttempt>,
    },
    /// No version could be opened at all.
    NoSupportedLibrary { attempts: Vec<LoadAttempt> },
}

impl LoadError {
    /// Every candidate that was tried before giving up, empty for errors that abort early.
    pub fn attempts(&self) -> &[LoadAttempt] {
        match self {
            LoadError::NotFound { attempts, .. } | LoadError::NoSupportedLibrary { attempts } => {
                attempts
            }
            _ => &[],
        }
    }
}

impl Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::UnsupportedPlatform => {
                write!(f, "cuRAND is not available for this operating system")
            }
            LoadError::Open { path, .. } => {
                write!(f, "failed to open cuRAND library `{}`", path.display())
            }
            LoadError::MissingSymbol { path, symbol, .. } => write!(
                f,
                "cuRAND library `{}` does not export `{symbol}`",
                path.display()
            ),
            LoadError::NotFound { version, attempts } => write!(
                f,
                "cuRAND {version} not found ({} candidates tried)",
                attempts.len()
            ),
            LoadError::NoSupportedLibrary { attempts } => write!(
                f,
                "no supported cuRAND library found ({} candidates tried)",
                attempts.len()
            ),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Open { source, .. } | LoadError::MissingSymbol { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}
