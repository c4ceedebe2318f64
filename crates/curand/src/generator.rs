use crate::error::{DropResult, Error, ToResult};
use crate::kind::{GeneratorOrdering, RngType};
use crate::raw::{Bits, Float};
use crate::sys::{self, CurandApi, CurandLibrary};
use std::fmt;
use std::ptr;
use std::sync::Arc;
use tracing::warn;

type Result<T = (), E = Error> = std::result::Result<T, E>;

/// Where a generator runs and writes its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorLocation {
    /// Output pointers must be device memory.
    Device,
    /// Generation runs on the CPU, output pointers must be host memory.
    Host,
}

/// A cuRAND generator handle.
///
/// Every method is a single forwarded cuRAND call; the returned status is turned into a
/// [`Result`] and nothing else. Generators are not synchronized by cuRAND, hence `&mut self`.
///
/// # Drop Cost
///
/// Destroying a device generator frees its device state and synchronizes with its stream.
///
/// # Methods
///
/// ## Configuration
/// - [Seed a pseudorandom generator <span style="float:right;">`set_seed`</span>](CurandGenerator::set_seed)
/// - [Skip ahead in the sequence <span style="float:right;">`set_offset`</span>](CurandGenerator::set_offset)
/// - [Result ordering <span style="float:right;">`set_ordering`</span>](CurandGenerator::set_ordering)
/// - [Quasirandom dimensions <span style="float:right;">`set_quasi_dimensions`</span>](CurandGenerator::set_quasi_dimensions)
/// - [Bind a CUDA stream <span style="float:right;">`set_stream`</span>](CurandGenerator::set_stream)
///
/// ## Generation
/// - [Raw bits <span style="float:right;">`generate_bits`</span>](CurandGenerator::generate_bits)
/// - [Uniform $(0, 1]$ <span style="float:right;">`generate_uniform`</span>](CurandGenerator::generate_uniform)
/// - [Normal <span style="float:right;">`generate_normal`</span>](CurandGenerator::generate_normal)
/// - [Log-normal <span style="float:right;">`generate_log_normal`</span>](CurandGenerator::generate_log_normal)
/// - [Poisson <span style="float:right;">`generate_poisson`</span>](CurandGenerator::generate_poisson)
pub struct CurandGenerator<A: CurandApi = CurandLibrary> {
    pub(crate) raw: sys::curandGenerator_t,
    api: Arc<A>,
    rng_type: RngType,
    location: GeneratorLocation,
}

impl<A: CurandApi> fmt::Debug for CurandGenerator<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurandGenerator")
            .field("raw", &self.raw)
            .field("rng_type", &self.rng_type)
            .field("location", &self.location)
            .finish()
    }
}

impl<A: CurandApi> CurandGenerator<A> {
    pub(crate) fn from_raw_parts(
        api: Arc<A>,
        raw: sys::curandGenerator_t,
        rng_type: RngType,
        location: GeneratorLocation,
    ) -> Self {
        Self {
            raw,
            api,
            rng_type,
            location,
        }
    }

    /// Tries to destroy a [`CurandGenerator`], returning an error if it fails.
    pub fn drop(mut generator: CurandGenerator<A>) -> DropResult<CurandGenerator<A>> {
        if generator.raw.is_null() {
            return Ok(());
        }

        let inner = std::mem::replace(&mut generator.raw, ptr::null_mut());
        match unsafe { generator.api.destroy_generator(inner) }.to_result() {
            // the handle is null now, so the Drop impl has nothing left to do
            Ok(()) => Ok(()),
            Err(e) => {
                generator.raw = inner;
                Err((e, generator))
            }
        }
    }

    pub fn as_raw(&self) -> sys::curandGenerator_t {
        self.raw
    }

    pub fn rng_type(&self) -> RngType {
        self.rng_type
    }

    pub fn location(&self) -> GeneratorLocation {
        self.location
    }

    /// Sets the seed of a pseudorandom generator.
    pub fn set_seed(&mut self, seed: u64) -> Result {
        unsafe { self.api.set_pseudo_random_generator_seed(self.raw, seed) }.to_result()?;
        Ok(())
    }

    /// Sets the absolute offset into the generator's sequence.
    pub fn set_offset(&mut self, offset: u64) -> Result {
        unsafe { self.api.set_generator_offset(self.raw, offset) }.to_result()?;
        Ok(())
    }

    pub fn set_ordering(&mut self, ordering: GeneratorOrdering) -> Result {
        unsafe { self.api.set_generator_ordering(self.raw, ordering.to_raw()) }.to_result()?;
        Ok(())
    }

    /// Sets the number of dimensions of a quasirandom generator, between 1 and 20,000.
    pub fn set_quasi_dimensions(&mut self, dimensions: u32) -> Result {
        unsafe {
            self.api
                .set_quasi_random_generator_dimensions(self.raw, dimensions)
        }
        .to_result()?;
        Ok(())
    }

    /// Binds every following kernel launch of this generator to `stream`. A null stream is
    /// the legacy default stream.
    ///
    /// # Safety
    ///
    /// `stream` must stay valid until the generator is destroyed or bound to another stream.
    pub unsafe fn set_stream(&mut self, stream: sys::cudaStream_t) -> Result {
        unsafe { self.api.set_stream(self.raw, stream) }.to_result()?;
        Ok(())
    }

    /// Executes a given closure with the generator bound to a specific CUDA stream, then
    /// binds it back to the null stream, whether or not the closure succeeded.
    ///
    /// # Safety
    ///
    /// `stream` must be a valid stream for the duration of the closure.
    pub unsafe fn with_stream<T, F: FnOnce(&mut Self) -> Result<T>>(
        &mut self,
        stream: sys::cudaStream_t,
        func: F,
    ) -> Result<T> {
        unsafe {
            self.set_stream(stream)?;
            let res = func(self);
            // reset the stream back to NULL so a stream destroyed after this call is never
            // used by a later launch.
            self.set_stream(ptr::null_mut())?;
            res
        }
    }

    /// Runs seed setup now rather than lazily on the first generation call.
    pub fn generate_seeds(&mut self) -> Result {
        unsafe { self.api.generate_seeds(self.raw) }.to_result()?;
        Ok(())
    }

    /// Fills `n` integers at `output` with raw random bits.
    ///
    /// # Safety
    ///
    /// `output` must point to `n` writable elements in device memory for device generators,
    /// host memory for host generators.
    pub unsafe fn generate_bits<T: Bits>(&mut self, output: *mut T, n: usize) -> Result {
        unsafe { T::generate(&*self.api, self.raw, output, n) }.to_result()?;
        Ok(())
    }

    /// Fills `n` floats at `output`, uniformly distributed in $(0, 1]$.
    ///
    /// # Safety
    ///
    /// Same as [`CurandGenerator::generate_bits`].
    pub unsafe fn generate_uniform<T: Float>(&mut self, output: *mut T, n: usize) -> Result {
        unsafe { T::uniform(&*self.api, self.raw, output, n) }.to_result()?;
        Ok(())
    }

    /// Fills `n` floats at `output` from a normal distribution.
    ///
    /// # Safety
    ///
    /// Same as [`CurandGenerator::generate_bits`].
    pub unsafe fn generate_normal<T: Float>(
        &mut self,
        output: *mut T,
        n: usize,
        mean: T,
        stddev: T,
    ) -> Result {
        unsafe { T::normal(&*self.api, self.raw, output, n, mean, stddev) }.to_result()?;
        Ok(())
    }

    /// Fills `n` floats at `output` from a log-normal distribution whose underlying normal
    /// distribution has `mean` and `stddev`.
    ///
    /// # Safety
    ///
    /// Same as [`CurandGenerator::generate_bits`].
    pub unsafe fn generate_log_normal<T: Float>(
        &mut self,
        output: *mut T,
        n: usize,
        mean: T,
        stddev: T,
    ) -> Result {
        unsafe { T::log_normal(&*self.api, self.raw, output, n, mean, stddev) }.to_result()?;
        Ok(())
    }

    /// Fills `n` integers at `output` from a Poisson distribution with rate `lambda`.
    ///
    /// # Safety
    ///
    /// Same as [`CurandGenerator::generate_bits`].
    pub unsafe fn generate_poisson(&mut self, output: *mut u32, n: usize, lambda: f64) -> Result {
        unsafe { self.api.generate_poisson(self.raw, output, n, lambda) }.to_result()?;
        Ok(())
    }

    #[track_caller]
    fn assert_host(&self) {
        assert!(
            self.location == GeneratorLocation::Host,
            "slice output requires a host generator, use the pointer based methods for device memory"
        );
    }

    /// [`CurandGenerator::generate_bits`] into a host slice.
    ///
    /// # Panics
    ///
    /// Panics if this is not a host generator.
    #[track_caller]
    pub fn fill_bits<T: Bits>(&mut self, output: &mut [T]) -> Result {
        self.assert_host();
        unsafe { self.generate_bits(output.as_mut_ptr(), output.len()) }
    }

    /// [`CurandGenerator::generate_uniform`] into a host slice.
    ///
    /// # Panics
    ///
    /// Panics if this is not a host generator.
    #[track_caller]
    pub fn fill_uniform<T: Float>(&mut self, output: &mut [T]) -> Result {
        self.assert_host();
        unsafe { self.generate_uniform(output.as_mut_ptr(), output.len()) }
    }

    /// [`CurandGenerator::generate_normal`] into a host slice.
    ///
    /// # Panics
    ///
    /// Panics if this is not a host generator.
    #[track_caller]
    pub fn fill_normal<T: Float>(&mut self, output: &mut [T], mean: T, stddev: T) -> Result {
        self.assert_host();
        unsafe { self.generate_normal(output.as_mut_ptr(), output.len(), mean, stddev) }
    }

    /// [`CurandGenerator::generate_log_normal`] into a host slice.
    ///
    /// # Panics
    ///
    /// Panics if this is not a host generator.
    #[track_caller]
    pub fn fill_log_normal<T: Float>(&mut self, output: &mut [T], mean: T, stddev: T) -> Result {
        self.assert_host();
        unsafe { self.generate_log_normal(output.as_mut_ptr(), output.len(), mean, stddev) }
    }

    /// [`CurandGenerator::generate_poisson`] into a host slice.
    ///
    /// # Panics
    ///
    /// Panics if this is not a host generator.
    #[track_caller]
    pub fn fill_poisson(&mut self, output: &mut [u32], lambda: f64) -> Result {
        self.assert_host();
        unsafe { self.generate_poisson(output.as_mut_ptr(), output.len(), lambda) }
    }
}

impl<A: CurandApi> Drop for CurandGenerator<A> {
    fn drop(&mut self) {
        if self.raw.is_null() {
            return;
        }
        if let Err(e) = unsafe { self.api.destroy_generator(self.raw) }.to_result() {
            warn!(error = %e, "failed to destroy cuRAND generator");
        }
    }
}
