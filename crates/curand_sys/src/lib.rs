//! Raw bindings to the NVIDIA cuRAND host library, loaded at runtime.
//!
//! cuRAND is distributed as a separate shared library for every operating system and ABI
//! version (`curand64_10.dll`, `libcurand.so.9.2`, ...). Rather than linking against one of
//! them at build time, this crate picks the right file when the program starts:
//!
//! ```no_run
//! use curand_sys::{CurandApi, CurandApiVersion, LoaderConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let loaded = curand_sys::load(Some(CurandApiVersion::V10), &LoaderConfig::from_env())?;
//! let mut version = 0;
//! unsafe { loaded.library.get_version(&mut version) };
//! # Ok(())
//! # }
//! ```
//!
//! Every method of [`CurandApi`] calls the native symbol of the same name with its arguments
//! untouched and returns the native status code as is.

mod api;
pub mod dispatch;
mod error;
pub mod loader;
mod platform;
mod types;
mod version;

pub use api::*;
pub use dispatch::{LoadedCurand, load, load_default, load_for};
pub use error::*;
pub use loader::LoaderConfig;
pub use platform::*;
pub use types::*;
pub use version::*;
