use crate::platform::Platform;
use std::fmt::{self, Display};
use std::str::FromStr;

/// cuRAND ABI versions, each of which ships under its own shared library name.
///
/// `V10` is the soname cuRAND kept from CUDA 10.1 onwards, CUDA 11 and 12 toolkits included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CurandApiVersion {
    V8_0,
    V9_0,
    V9_1,
    V9_2,
    V10_0,
    V10,
}

impl CurandApiVersion {
    /// Every version, newest first. This is the order dispatch tries them in.
    pub const ALL: [CurandApiVersion; 6] = [
        CurandApiVersion::V10,
        CurandApiVersion::V10_0,
        CurandApiVersion::V9_2,
        CurandApiVersion::V9_1,
        CurandApiVersion::V9_0,
        CurandApiVersion::V8_0,
    ];

    pub const LATEST: CurandApiVersion = CurandApiVersion::V10;

    /// File names the shared library of this version is distributed under on `platform`,
    /// in the order they should be tried.
    pub fn library_names(self, platform: Platform) -> &'static [&'static str] {
        use CurandApiVersion::*;
        use Platform::*;

        match (platform, self) {
            (Windows, V8_0) => &["curand64_80.dll"],
            (Windows, V9_0) => &["curand64_90.dll"],
            (Windows, V9_1) => &["curand64_91.dll"],
            (Windows, V9_2) => &["curand64_92.dll"],
            (Windows, V10_0) => &["curand64_100.dll"],
            (Windows, V10) => &["curand64_10.dll"],

            (Linux, V8_0) => &["libcurand.so.8.0"],
            (Linux, V9_0) => &["libcurand.so.9.0"],
            (Linux, V9_1) => &["libcurand.so.9.1"],
            (Linux, V9_2) => &["libcurand.so.9.2"],
            (Linux, V10_0) => &["libcurand.so.10.0"],
            (Linux, V10) => &["libcurand.so.10", "libcurand.so"],

            (MacOs, V8_0) => &["libcurand.8.0.dylib"],
            (MacOs, V9_0) => &["libcurand.9.0.dylib"],
            (MacOs, V9_1) => &["libcurand.9.1.dylib"],
            (MacOs, V9_2) => &["libcurand.9.2.dylib"],
            (MacOs, V10_0) => &["libcurand.10.0.dylib"],
            (MacOs, V10) => &["libcurand.10.dylib", "libcurand.dylib"],
        }
    }

    /// Whether a `curandGetVersion` value belongs to this ABI version.
    pub fn accepts_native_version(self, raw: i32) -> bool {
        Self::from_native_version(raw) == Some(self)
    }

    /// Whether `file_name` is a bare development alias any installed version can sit behind.
    /// Only the library's own `curandGetVersion` says which version such a file is.
    pub fn is_unversioned_name(file_name: &str) -> bool {
        matches!(file_name, "libcurand.so" | "libcurand.dylib")
    }

    /// Maps a `curandGetVersion` value (`major * 1000 + minor * 100 + patch`) onto the ABI
    /// version that ships it.
    pub fn from_native_version(raw: i32) -> Option<Self> {
        if raw < 0 {
            return None;
        }
        let (major, minor) = (raw / 1000, raw % 1000 / 100);
        Some(match (major, minor) {
            (8, 0) => CurandApiVersion::V8_0,
            (9, 0) => CurandApiVersion::V9_0,
            (9, 1) => CurandApiVersion::V9_1,
            (9, 2) => CurandApiVersion::V9_2,
            (10, 0) => CurandApiVersion::V10_0,
            (10, _) => CurandApiVersion::V10,
            _ => return None,
        })
    }
}

impl Display for CurandApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CurandApiVersion::V8_0 => "8.0",
            CurandApiVersion::V9_0 => "9.0",
            CurandApiVersion::V9_1 => "9.1",
            CurandApiVersion::V9_2 => "9.2",
            CurandApiVersion::V10_0 => "10.0",
            CurandApiVersion::V10 => "10",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVersionError(String);

impl Display for ParseVersionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown cuRAND API version `{}`, expected one of 8.0, 9.0, 9.1, 9.2, 10.0, 10",
            self.0
        )
    }
}

impl std::error::Error for ParseVersionError {}

impl FromStr for CurandApiVersion {
    type Err = ParseVersionError;

    /// Accepts `10`, `10.0`, `v9.2`, `V8_0` and similar spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix(['v', 'V'])
            .unwrap_or(trimmed)
            .replace('_', ".");
        Ok(match digits.as_str() {
            "8" | "8.0" => CurandApiVersion::V8_0,
            "9" | "9.0" => CurandApiVersion::V9_0,
            "9.1" => CurandApiVersion::V9_1,
            "9.2" => CurandApiVersion::V9_2,
            "10.0" => CurandApiVersion::V10_0,
            "10" => CurandApiVersion::V10,
            _ => return Err(ParseVersionError(s.to_string())),
        })
    }
}
