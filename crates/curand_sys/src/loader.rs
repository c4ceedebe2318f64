//! Where cuRAND libraries are looked for, and how a single file is opened.
//!
//! # Environment
//!
//! [`LoaderConfig::from_env`] honors:
//! - `CURAND_LIBRARY_PATH`: an exact file to load, skipping the name table entirely.
//! - `CUDA_LIBRARY_PATH`: extra directories, separated like `PATH`.
//! - `CUDA_PATH`, `CUDA_ROOT`, `CUDA_TOOLKIT_ROOT_DIR`: a toolkit root whose library
//!   directories are searched.

use crate::error::LoadError;
use crate::platform::Platform;
use crate::version::CurandApiVersion;
use crate::CurandLibrary;
use libloading::Library;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::trace;

pub const CURAND_LIBRARY_PATH_ENV: &str = "CURAND_LIBRARY_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    library_path: Option<PathBuf>,
    search_dirs: Vec<PathBuf>,
    system_search: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LoaderConfig {
    /// Only the operating system's own library search, no extra directories.
    pub fn new() -> Self {
        Self {
            library_path: None,
            search_dirs: Vec::new(),
            system_search: true,
        }
    }

    pub fn from_env() -> Self {
        let mut config = Self::new();
        config.library_path = env::var_os(CURAND_LIBRARY_PATH_ENV)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        config.search_dirs = find_cuda_helper::find_curand_lib_dirs();
        trace!(?config, "cuRAND loader configuration from environment");
        config
    }

    /// Load exactly this file. Version dispatch then only decides which version to report.
    pub fn library_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.library_path = Some(path.into());
        self
    }

    /// Appends a directory to search, after the ones already configured.
    pub fn search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_dirs.push(dir.into());
        self
    }

    /// Whether bare library names are handed to the OS loader after the search
    /// directories are exhausted. Enabled by default.
    pub fn system_search(mut self, enabled: bool) -> Self {
        self.system_search = enabled;
        self
    }

    pub fn explicit_library_path(&self) -> Option<&Path> {
        self.library_path.as_deref()
    }

    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }

    /// Candidate files for `version` on `platform`, in the order they should be tried.
    /// The explicit library path is not part of this list.
    pub fn candidate_paths(&self, platform: Platform, version: CurandApiVersion) -> Vec<PathBuf> {
        let names = version.library_names(platform);
        let mut paths: Vec<PathBuf> = self
            .search_dirs
            .iter()
            .flat_map(|dir| names.iter().map(move |name| dir.join(name)))
            .collect();
        if self.system_search {
            paths.extend(names.iter().map(PathBuf::from));
        }
        paths
    }
}

impl CurandLibrary {
    /// Opens the shared library at `path` and resolves every cuRAND symbol from it.
    ///
    /// # Safety
    ///
    /// Opening a library runs its initialization code, and the resolved functions are
    /// called with cuRAND's signatures, so `path` must be a genuine cuRAND build.
    pub unsafe fn open(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let library = unsafe { Library::new(path.as_os_str()) }.map_err(|source| {
            LoadError::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;
        unsafe { Self::from_library(library) }.map_err(|(symbol, source)| {
            LoadError::MissingSymbol {
                path: path.to_path_buf(),
                symbol,
                source,
            }
        })
    }
}

impl fmt::Debug for CurandLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurandLibrary")
            .field("library", self.library())
            .finish_non_exhaustive()
    }
}
