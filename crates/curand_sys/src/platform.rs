use std::fmt::{self, Display};

/// Operating systems cuRAND ships shared libraries for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Windows, Platform::Linux, Platform::MacOs];

    /// The platform this binary was compiled for, or `None` if cuRAND has never been
    /// distributed for it.
    pub fn current() -> Option<Self> {
        if cfg!(target_os = "windows") {
            Some(Platform::Windows)
        } else if cfg!(target_os = "linux") {
            Some(Platform::Linux)
        } else if cfg!(target_os = "macos") {
            Some(Platform::MacOs)
        } else {
            None
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::MacOs => "macos",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(target_os = "linux")]
    fn detects_linux() {
        assert_eq!(Platform::current(), Some(Platform::Linux));
    }

    #[test]
    #[cfg(target_os = "windows")]
    fn detects_windows() {
        assert_eq!(Platform::current(), Some(Platform::Windows));
    }

    #[test]
    #[cfg(target_os = "macos")]
    fn detects_macos() {
        assert_eq!(Platform::current(), Some(Platform::MacOs));
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(Platform::MacOs.to_string(), "macos");
        assert_eq!(Platform::Windows.to_string(), "windows");
    }
}
