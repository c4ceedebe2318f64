//! Selecting the cuRAND library that matches the running OS and a requested API version.

use crate::error::{LoadAttempt, LoadError};
use crate::loader::LoaderConfig;
use crate::platform::Platform;
use crate::version::CurandApiVersion;
use crate::{CurandApi, CurandLibrary, curandStatus};
use std::os::raw::c_int;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A successfully loaded library and which API version it was selected as.
#[derive(Debug)]
pub struct LoadedCurand {
    pub library: CurandLibrary,
    pub version: CurandApiVersion,
    pub path: PathBuf,
}

/// Loads cuRAND using the environment's configuration, picking the newest version available.
pub fn load_default() -> Result<LoadedCurand, LoadError> {
    load(None, &LoaderConfig::from_env())
}

/// Loads the cuRAND library for the current OS.
///
/// With `Some(version)` only that version's libraries are tried. With `None` every version
/// is tried newest first and the first one that opens wins. If `config` names an explicit
/// library path, that file is the only candidate.
///
/// Unversioned aliases (`libcurand.so`, `libcurand.dylib`) are identified by their native
/// version: with `Some(version)` an alias of another version is recorded as a failed attempt
/// and skipped, with `None` it is reported as the version it actually is.
///
/// Candidates are assumed to be genuine cuRAND builds: a file that opens but lacks a cuRAND
/// symbol aborts the search with [`LoadError::MissingSymbol`] instead of moving on.
pub fn load(
    version: Option<CurandApiVersion>,
    config: &LoaderConfig,
) -> Result<LoadedCurand, LoadError> {
    let platform = Platform::current().ok_or(LoadError::UnsupportedPlatform)?;
    load_for(platform, version, config)
}

/// [`load`] with the platform chosen by the caller, which decides the library names tried.
pub fn load_for(
    platform: Platform,
    version: Option<CurandApiVersion>,
    config: &LoaderConfig,
) -> Result<LoadedCurand, LoadError> {
    if let Some(path) = config.explicit_library_path() {
        return load_explicit(path, version);
    }

    let mut attempts = Vec::new();
    match version {
        Some(version) => try_version(platform, version, Some(version), config, &mut attempts)?
            .ok_or(LoadError::NotFound { version, attempts }),
        None => {
            for version in CurandApiVersion::ALL {
                if let Some(loaded) = try_version(platform, version, None, config, &mut attempts)? {
                    return Ok(loaded);
                }
            }
            Err(LoadError::NoSupportedLibrary { attempts })
        }
    }
}

fn load_explicit(
    path: &Path,
    requested: Option<CurandApiVersion>,
) -> Result<LoadedCurand, LoadError> {
    debug!(path = %path.display(), "opening explicitly configured cuRAND library");
    let library = unsafe { CurandLibrary::open(path)? };
    let native = native_version(&library);
    let version = match requested {
        Some(requested) => {
            check_native_version(native, requested, path);
            requested
        }
        None => native
            .and_then(CurandApiVersion::from_native_version)
            .unwrap_or(CurandApiVersion::LATEST),
    };
    info!(%version, path = %path.display(), "loaded cuRAND");
    Ok(LoadedCurand {
        library,
        version,
        path: path.to_path_buf(),
    })
}

fn try_version(
    platform: Platform,
    version: CurandApiVersion,
    requested: Option<CurandApiVersion>,
    config: &LoaderConfig,
    attempts: &mut Vec<LoadAttempt>,
) -> Result<Option<LoadedCurand>, LoadError> {
    for path in config.candidate_paths(platform, version) {
        debug!(%version, path = %path.display(), "trying cuRAND library");
        match unsafe { CurandLibrary::open(&path) } {
            Ok(library) => {
                match identify(&path, version, requested, native_version(&library)) {
                    Ok(version) => {
                        info!(%version, path = %path.display(), "loaded cuRAND");
                        return Ok(Some(LoadedCurand {
                            library,
                            version,
                            path,
                        }));
                    }
                    Err(reason) => {
                        debug!(
                            %version,
                            path = %path.display(),
                            %reason,
                            "skipping cuRAND library"
                        );
                        attempts.push(LoadAttempt {
                            version,
                            path,
                            reason,
                        });
                    }
                }
            }
            Err(LoadError::Open { path, source }) => attempts.push(LoadAttempt {
                version,
                path,
                reason: source.to_string(),
            }),
            Err(e) => return Err(e),
        }
    }
    Ok(None)
}

/// Which version an opened candidate is, or why it does not qualify.
///
/// A file named for one version is that version. An unversioned alias such as
/// `libcurand.so` is whatever its native version says, and is rejected when that is not the
/// requested version.
fn identify(
    path: &Path,
    listed: CurandApiVersion,
    requested: Option<CurandApiVersion>,
    native: Option<i32>,
) -> Result<CurandApiVersion, String> {
    let unversioned = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(CurandApiVersion::is_unversioned_name);
    let (true, Some(raw)) = (unversioned, native) else {
        check_native_version(native, listed, path);
        return Ok(listed);
    };

    match (CurandApiVersion::from_native_version(raw), requested) {
        (Some(actual), Some(requested)) if actual != requested => Err(format!(
            "unversioned library is cuRAND {actual} (native version {raw}), not {requested}"
        )),
        (Some(actual), _) => Ok(actual),
        (None, Some(requested)) => Err(format!(
            "unversioned library reports unknown native version {raw}, not {requested}"
        )),
        (None, None) => {
            check_native_version(native, listed, path);
            Ok(listed)
        }
    }
}

fn native_version(library: &CurandLibrary) -> Option<i32> {
    let mut raw: c_int = 0;
    let status = unsafe { library.get_version(&mut raw) };
    if status == curandStatus::CURAND_STATUS_SUCCESS {
        Some(raw)
    } else {
        warn!(?status, "curandGetVersion failed");
        None
    }
}

fn check_native_version(native: Option<i32>, expected: CurandApiVersion, path: &Path) {
    if let Some(raw) = native {
        if !expected.accepts_native_version(raw) {
            warn!(
                %expected,
                native = raw,
                path = %path.display(),
                "cuRAND library reports a version that does not match the requested API version"
            );
        }
    }
}
