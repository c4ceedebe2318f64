use crate::error::{Error, ToResult};
use crate::generator::{CurandGenerator, GeneratorLocation};
use crate::kind::{DirectionVectorSet, LibraryProperty, RngType};
use crate::sys::{self, CurandApi, CurandApiVersion, CurandLibrary, LoaderConfig};
use std::fmt;
use std::os::raw::c_int;
use std::ptr;
use std::sync::Arc;

type Result<T, E = Error> = std::result::Result<T, E>;

/// A loaded cuRAND library, the entry point for creating generators.
///
/// Cloning is cheap and shares the library. Every generator keeps the library alive for as
/// long as it exists, so a `Curand` can be dropped before the generators it created.
///
/// # Methods
///
/// - [Native library version <span style="float:right;">`version`</span>](Curand::version)
/// - [Single version component <span style="float:right;">`property`</span>](Curand::property)
/// - [Device generator <span style="float:right;">`create_generator`</span>](Curand::create_generator)
/// - [Host generator <span style="float:right;">`create_host_generator`</span>](Curand::create_host_generator)
/// - [Sobol direction vectors <span style="float:right;">`direction_vectors32`</span>](Curand::direction_vectors32)
/// - [Sobol scramble constants <span style="float:right;">`scramble_constants32`</span>](Curand::scramble_constants32)
pub struct Curand<A: CurandApi = CurandLibrary> {
    api: Arc<A>,
    api_version: Option<CurandApiVersion>,
}

impl<A: CurandApi> Clone for Curand<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            api_version: self.api_version,
        }
    }
}

impl<A: CurandApi> fmt::Debug for Curand<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curand")
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

impl Curand<CurandLibrary> {
    /// Loads cuRAND for the current OS, configured from the environment.
    ///
    /// `None` picks the newest version that can be found.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use curand::Curand;
    /// let curand = Curand::load(None)?;
    /// let (major, minor, patch) = curand.version()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load(version: Option<CurandApiVersion>) -> Result<Self> {
        Self::load_with(version, &LoaderConfig::from_env())
    }

    pub fn load_with(version: Option<CurandApiVersion>, config: &LoaderConfig) -> Result<Self> {
        let loaded = sys::load(version, config)?;
        Ok(Self {
            api: Arc::new(loaded.library),
            api_version: Some(loaded.version),
        })
    }
}

impl<A: CurandApi> Curand<A> {
    /// Wraps an already constructed API implementation.
    pub fn from_api(api: A) -> Self {
        Self {
            api: Arc::new(api),
            api_version: None,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// The API version the library was selected as, `None` for [`Curand::from_api`].
    pub fn api_version(&self) -> Option<CurandApiVersion> {
        self.api_version
    }

    /// Returns the major, minor, and patch versions of the cuRAND library.
    pub fn version(&self) -> Result<(u32, u32, u32)> {
        let mut raw: c_int = 0;
        unsafe { self.api.get_version(&mut raw) }.to_result()?;
        let raw = raw as u32;
        Ok((raw / 1000, (raw % 1000) / 100, raw % 100))
    }

    pub fn property(&self, property: LibraryProperty) -> Result<i32> {
        let mut value: c_int = 0;
        unsafe { self.api.get_property(property.to_raw(), &mut value) }.to_result()?;
        Ok(value)
    }

    /// Creates a generator whose output is written to device memory.
    pub fn create_generator(&self, rng_type: RngType) -> Result<CurandGenerator<A>> {
        let mut raw: sys::curandGenerator_t = ptr::null_mut();
        unsafe { self.api.create_generator(&mut raw, rng_type.to_raw()) }.to_result()?;
        Ok(CurandGenerator::from_raw_parts(
            Arc::clone(&self.api),
            raw,
            rng_type,
            GeneratorLocation::Device,
        ))
    }

    /// Creates a generator that runs on the CPU and writes host memory.
    pub fn create_host_generator(&self, rng_type: RngType) -> Result<CurandGenerator<A>> {
        let mut raw: sys::curandGenerator_t = ptr::null_mut();
        unsafe { self.api.create_generator_host(&mut raw, rng_type.to_raw()) }.to_result()?;
        Ok(CurandGenerator::from_raw_parts(
            Arc::clone(&self.api),
            raw,
            rng_type,
            GeneratorLocation::Host,
        ))
    }

    /// Host pointer to the library-owned 32-bit direction vectors of `set`, one
    /// [`curandDirectionVectors32_t`](sys::curandDirectionVectors32_t) per dimension.
    ///
    /// # Panics
    ///
    /// Panics if `set` is a 64-bit set.
    #[track_caller]
    pub fn direction_vectors32(
        &self,
        set: DirectionVectorSet,
    ) -> Result<*const sys::curandDirectionVectors32_t> {
        assert!(!set.is_64_bit(), "{set:?} is a 64-bit direction vector set");
        let mut vectors: *mut sys::curandDirectionVectors32_t = ptr::null_mut();
        unsafe { self.api.get_direction_vectors32(&mut vectors, set.to_raw()) }.to_result()?;
        Ok(vectors.cast_const())
    }

    /// Host pointer to the library-owned 64-bit direction vectors of `set`.
    ///
    /// # Panics
    ///
    /// Panics if `set` is a 32-bit set.
    #[track_caller]
    pub fn direction_vectors64(
        &self,
        set: DirectionVectorSet,
    ) -> Result<*const sys::curandDirectionVectors64_t> {
        assert!(set.is_64_bit(), "{set:?} is a 32-bit direction vector set");
        let mut vectors: *mut sys::curandDirectionVectors64_t = ptr::null_mut();
        unsafe { self.api.get_direction_vectors64(&mut vectors, set.to_raw()) }.to_result()?;
        Ok(vectors.cast_const())
    }

    /// Host pointer to the library-owned 32-bit scramble constants.
    pub fn scramble_constants32(&self) -> Result<*const u32> {
        let mut constants: *mut u32 = ptr::null_mut();
        unsafe { self.api.get_scramble_constants32(&mut constants) }.to_result()?;
        Ok(constants.cast_const())
    }

    /// Host pointer to the library-owned 64-bit scramble constants.
    pub fn scramble_constants64(&self) -> Result<*const u64> {
        let mut constants: *mut u64 = ptr::null_mut();
        unsafe { self.api.get_scramble_constants64(&mut constants) }.to_result()?;
        Ok(constants.cast_const())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CurandError;
    use crate::fake::FakeCurand;
    use crate::sys::curandStatus;

    #[test]
    fn version_decomposes_the_encoded_value() {
        let curand = Curand::from_api(FakeCurand::default());
        assert_eq!(curand.version().unwrap(), (10, 3, 5));
        assert_eq!(curand.property(LibraryProperty::MinorVersion).unwrap(), 3);
        assert_eq!(curand.api_version(), None);
    }

    #[test]
    fn generators_are_created_with_the_raw_rng_type() {
        let curand = Curand::from_api(FakeCurand::default());
        let device = curand.create_generator(RngType::PseudoMt19937).unwrap();
        let host = curand.create_host_generator(RngType::QuasiSobol64).unwrap();
        assert_eq!(device.location(), GeneratorLocation::Device);
        assert_eq!(host.location(), GeneratorLocation::Host);
        assert_ne!(device.as_raw(), host.as_raw());
        assert_eq!(
            curand.api().calls(),
            ["create_generator(142)", "create_generator_host(203)"]
        );
    }

    #[test]
    fn failed_creation_leaves_nothing_to_destroy() {
        let curand = Curand::from_api(FakeCurand::default());
        curand
            .api()
            .fail("create_generator", curandStatus::CURAND_STATUS_ALLOCATION_FAILED);
        let err = curand.create_generator(RngType::default()).unwrap_err();
        assert!(matches!(err, Error::Curand(CurandError::AllocationFailed)));
        assert_eq!(curand.api().calls(), ["create_generator(100)"]);
    }

    #[test]
    fn sobol_tables_are_library_owned_pointers() {
        let curand = Curand::from_api(FakeCurand::default());
        let v32 = curand
            .direction_vectors32(DirectionVectorSet::ScrambledJoeKuo6_32)
            .unwrap();
        let v64 = curand
            .direction_vectors64(DirectionVectorSet::JoeKuo6_64)
            .unwrap();
        assert_eq!(v32 as usize, 0x32);
        assert_eq!(v64 as usize, 0x64);
        assert_eq!(curand.scramble_constants32().unwrap() as usize, 0x320);
        assert_eq!(curand.scramble_constants64().unwrap() as usize, 0x640);
    }

    #[test]
    #[should_panic(expected = "64-bit direction vector set")]
    fn direction_vector_width_is_checked() {
        let curand = Curand::from_api(FakeCurand::default());
        let _ = curand.direction_vectors32(DirectionVectorSet::JoeKuo6_64);
    }
}
