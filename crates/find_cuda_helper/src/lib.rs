//! Tiny crate for common logic for finding the directories CUDA installs its runtime
//! libraries (and therefore cuRAND) into.

use std::{
    cmp::Reverse,
    env,
    ffi::OsStr,
    path::{Path, PathBuf},
};

/// Environment variables that may point at a CUDA toolkit root, in priority order.
pub const CUDA_ROOT_ENVS: &[&str] = &["CUDA_PATH", "CUDA_ROOT", "CUDA_TOOLKIT_ROOT_DIR"];

/// Environment variable holding a platform path list of library directories.
pub const CUDA_LIBRARY_PATH_ENV: &str = "CUDA_LIBRARY_PATH";

// Returns true if the given path is a valid cuda installation
fn is_cuda_root_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().join("include").join("cuda.h").is_file()
}

pub fn find_cuda_root() -> Option<PathBuf> {
    // search through the common environment variables first
    for path in CUDA_ROOT_ENVS
        .iter()
        .filter_map(|name| env::var_os(name))
    {
        if is_cuda_root_path(&path) {
            return Some(path.into());
        }
    }

    default_roots().into_iter().find(|p| is_cuda_root_path(p))
}

#[cfg(target_os = "windows")]
fn default_roots() -> Vec<PathBuf> {
    let mut roots = vec![PathBuf::from("C:/CUDA")];
    roots.extend(glob_dirs(
        "C:/Program Files/NVIDIA GPU Computing Toolkit/CUDA/v*",
    ));
    roots
}

#[cfg(target_os = "macos")]
fn default_roots() -> Vec<PathBuf> {
    let mut roots = vec![PathBuf::from("/usr/local/cuda")];
    roots.extend(glob_dirs("/Developer/NVIDIA/CUDA-*"));
    roots
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn default_roots() -> Vec<PathBuf> {
    let mut roots = vec![PathBuf::from("/opt/cuda"), PathBuf::from("/usr/local/cuda")];
    roots.extend(glob_dirs("/usr/local/cuda-*"));
    roots.push(PathBuf::from("/usr/lib/cuda"));
    if let Some(root) = detect_cuda_root_via_which_nvcc() {
        roots.push(root);
    }
    roots
}

fn glob_dirs(pattern: &str) -> Vec<PathBuf> {
    match glob::glob(pattern) {
        Ok(paths) => {
            let mut dirs: Vec<_> = paths.flatten().filter(|p| p.is_dir()).collect();
            // newest toolkit first, by number: `cuda-12.4` before `cuda-9.2`
            dirs.sort_by_cached_key(|p| Reverse(toolkit_version(p)));
            dirs
        }
        Err(_) => Vec::new(),
    }
}

/// `cuda-12.4`, `v12.4` and `CUDA-12.4` all become `[12, 4]`.
fn toolkit_version(dir: &Path) -> Vec<u32> {
    let name = dir
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    name.trim_start_matches(|c: char| !c.is_ascii_digit())
        .split('.')
        .map_while(|part| part.parse().ok())
        .collect()
}

/// Splits a platform path list (`:` on unix, `;` on Windows) into directories.
pub fn split_library_path(value: &OsStr) -> Vec<PathBuf> {
    env::split_paths(value)
        .filter(|p| !p.as_os_str().is_empty())
        .collect()
}

/// The location of the cuda runtime libraries can be hardcoded with the
/// CUDA_LIBRARY_PATH environment variable.
pub fn read_env() -> Vec<PathBuf> {
    env::var_os(CUDA_LIBRARY_PATH_ENV)
        .map(|value| split_library_path(&value))
        .unwrap_or_default()
}

/// Directories under a toolkit root that hold the shared (not import or stub) libraries.
pub fn runtime_lib_dirs(root: &Path) -> Vec<PathBuf> {
    let candidates: &[&[&str]] = if cfg!(target_os = "windows") {
        // CUDA 13 moved the DLLs into bin/x64.
        &[&["bin"], &["bin", "x64"]]
    } else if cfg!(target_os = "macos") {
        &[&["lib"]]
    } else {
        &[
            &["lib64"],
            &["targets", "x86_64-linux", "lib"],
            &["targets", "sbsa-linux", "lib"],
            &["lib"],
        ]
    };

    candidates
        .iter()
        .map(|parts| parts.iter().fold(root.to_path_buf(), |p, part| p.join(part)))
        .filter(|p| p.is_dir())
        .collect()
}

/// Every directory that might hold a cuRAND shared library, most specific first:
/// `CUDA_LIBRARY_PATH` entries, then the toolkit root from the environment, then default
/// install locations. Duplicates are removed.
pub fn find_curand_lib_dirs() -> Vec<PathBuf> {
    let mut dirs = read_env();
    if let Some(root) = find_cuda_root() {
        dirs.extend(runtime_lib_dirs(&root));
    }
    for root in default_roots() {
        dirs.extend(runtime_lib_dirs(&root));
    }
    dedup_in_order(dirs)
}

fn dedup_in_order(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out: Vec<PathBuf> = Vec::with_capacity(paths.len());
    for p in paths {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn detect_cuda_root_via_which_nvcc() -> Option<PathBuf> {
    use std::process::Command;
    let output = Command::new("which").arg("nvcc").output().ok()?;
    if !output.status.success() {
        return None;
    }

    let path = PathBuf::from(String::from_utf8(output.stdout).ok()?.trim());
    // The above finds `CUDASDK/bin/nvcc`, so we have to go 2 up for the SDK root.
    Some(path.parent()?.parent()?.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::fs;

    #[test]
    fn splits_platform_path_lists() {
        let joined = env::join_paths(["/a/lib", "/b/lib64"]).unwrap();
        assert_eq!(
            split_library_path(&joined),
            vec![PathBuf::from("/a/lib"), PathBuf::from("/b/lib64")]
        );
        assert!(split_library_path(&OsString::new()).is_empty());
    }

    #[test]
    fn runtime_dirs_only_lists_existing_directories() {
        let root = tempfile::tempdir().unwrap();
        assert!(runtime_lib_dirs(root.path()).is_empty());

        let lib = if cfg!(target_os = "windows") {
            root.path().join("bin")
        } else if cfg!(target_os = "macos") {
            root.path().join("lib")
        } else {
            root.path().join("lib64")
        };
        fs::create_dir_all(&lib).unwrap();
        assert_eq!(runtime_lib_dirs(root.path()), vec![lib]);
    }

    #[test]
    fn cuda_root_requires_header() {
        let root = tempfile::tempdir().unwrap();
        assert!(!is_cuda_root_path(root.path()));
        fs::create_dir_all(root.path().join("include")).unwrap();
        fs::write(root.path().join("include").join("cuda.h"), "").unwrap();
        assert!(is_cuda_root_path(root.path()));
    }

    #[test]
    fn toolkit_dirs_sort_newest_first_numerically() {
        let root = tempfile::tempdir().unwrap();
        for name in ["cuda-9.2", "cuda-12.4", "cuda-11.8", "cuda-12.10"] {
            fs::create_dir(root.path().join(name)).unwrap();
        }
        let pattern = format!(
            "{}/cuda-*",
            glob::Pattern::escape(&root.path().to_string_lossy())
        );
        let names: Vec<_> = glob_dirs(&pattern)
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["cuda-12.10", "cuda-12.4", "cuda-11.8", "cuda-9.2"]);
        assert_eq!(toolkit_version(Path::new("C:/CUDA/v12.4")), [12, 4]);
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let dirs = vec![
            PathBuf::from("/x"),
            PathBuf::from("/y"),
            PathBuf::from("/x"),
        ];
        assert_eq!(
            dedup_in_order(dirs),
            vec![PathBuf::from("/x"), PathBuf::from("/y")]
        );
    }
}
