//! High level bindings to the cuRAND CUDA library for generating pseudorandom and
//! quasirandom numbers.
//!
//! The library is loaded at runtime for the current OS and a requested API version, see
//! [`Curand::load`]. Generators created from it either write device memory through raw
//! pointers or, for host generators, plain slices:
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use curand::{Curand, RngType};
//!
//! let curand = Curand::load(None)?;
//! let mut generator = curand.create_host_generator(RngType::PseudoPhilox4_32_10)?;
//! generator.set_seed(1234)?;
//!
//! let mut samples = vec![0.0f64; 1024];
//! generator.fill_normal(&mut samples, 0.0, 1.0)?;
//! # Ok(())
//! # }
//! ```

pub use curand_sys as sys;

pub use context::*;
pub use error::{CurandError, DropResult, Error};
pub use generator::*;
pub use kind::*;
pub use sys::CurandApiVersion;

mod context;
pub mod error;
#[cfg(test)]
mod fake;
mod generator;
mod kind;
pub mod raw;
