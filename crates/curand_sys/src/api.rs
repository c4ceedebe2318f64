//! The cuRAND host API surface.
//!
//! Every cuRAND library version this crate can load exports the same set of symbols, so a
//! single declaration produces both the [`CurandApi`] trait and the [`CurandLibrary`] table
//! that resolves it from a shared library at runtime.

use crate::types::*;
use std::os::raw::{c_int, c_uint, c_ulonglong};

#[curand_sys_macros::dynamic_ffi(api = CurandApi, library = CurandLibrary, prefix = "curand")]
unsafe extern "C" {
    /// Creates a generator of `rng_type` whose output lands in device memory.
    pub fn curandCreateGenerator(
        generator: *mut curandGenerator_t,
        rng_type: curandRngType_t,
    ) -> curandStatus_t;
    /// Creates a generator of `rng_type` that runs on the host and writes host memory.
    pub fn curandCreateGeneratorHost(
        generator: *mut curandGenerator_t,
        rng_type: curandRngType_t,
    ) -> curandStatus_t;
    pub fn curandDestroyGenerator(generator: curandGenerator_t) -> curandStatus_t;
    /// Writes the library version as `major * 1000 + minor * 100 + patch`.
    pub fn curandGetVersion(version: *mut c_int) -> curandStatus_t;
    pub fn curandGetProperty(property: libraryPropertyType_t, value: *mut c_int)
    -> curandStatus_t;
    /// Binds all further kernel launches of `generator` to `stream`.
    pub fn curandSetStream(generator: curandGenerator_t, stream: cudaStream_t) -> curandStatus_t;
    pub fn curandSetPseudoRandomGeneratorSeed(
        generator: curandGenerator_t,
        seed: c_ulonglong,
    ) -> curandStatus_t;
    pub fn curandSetGeneratorOffset(
        generator: curandGenerator_t,
        offset: c_ulonglong,
    ) -> curandStatus_t;
    pub fn curandSetGeneratorOrdering(
        generator: curandGenerator_t,
        order: curandOrdering_t,
    ) -> curandStatus_t;
    pub fn curandSetQuasiRandomGeneratorDimensions(
        generator: curandGenerator_t,
        num_dimensions: c_uint,
    ) -> curandStatus_t;
    /// Runs seed setup eagerly instead of on the first generate call.
    pub fn curandGenerateSeeds(generator: curandGenerator_t) -> curandStatus_t;
    pub fn curandGenerate(
        generator: curandGenerator_t,
        output_ptr: *mut c_uint,
        num: usize,
    ) -> curandStatus_t;
    pub fn curandGenerateLongLong(
        generator: curandGenerator_t,
        output_ptr: *mut c_ulonglong,
        num: usize,
    ) -> curandStatus_t;
    pub fn curandGenerateUniform(
        generator: curandGenerator_t,
        output_ptr: *mut f32,
        num: usize,
    ) -> curandStatus_t;
    pub fn curandGenerateUniformDouble(
        generator: curandGenerator_t,
        output_ptr: *mut f64,
        num: usize,
    ) -> curandStatus_t;
    pub fn curandGenerateNormal(
        generator: curandGenerator_t,
        output_ptr: *mut f32,
        n: usize,
        mean: f32,
        stddev: f32,
    ) -> curandStatus_t;
    pub fn curandGenerateNormalDouble(
        generator: curandGenerator_t,
        output_ptr: *mut f64,
        n: usize,
        mean: f64,
        stddev: f64,
    ) -> curandStatus_t;
    pub fn curandGenerateLogNormal(
        generator: curandGenerator_t,
        output_ptr: *mut f32,
        n: usize,
        mean: f32,
        stddev: f32,
    ) -> curandStatus_t;
    pub fn curandGenerateLogNormalDouble(
        generator: curandGenerator_t,
        output_ptr: *mut f64,
        n: usize,
        mean: f64,
        stddev: f64,
    ) -> curandStatus_t;
    pub fn curandGeneratePoisson(
        generator: curandGenerator_t,
        output_ptr: *mut c_uint,
        n: usize,
        lambda: f64,
    ) -> curandStatus_t;
    /// Points `vectors` at library-owned host memory holding the requested set.
    pub fn curandGetDirectionVectors32(
        vectors: *mut *mut curandDirectionVectors32_t,
        set: curandDirectionVectorSet_t,
    ) -> curandStatus_t;
    pub fn curandGetDirectionVectors64(
        vectors: *mut *mut curandDirectionVectors64_t,
        set: curandDirectionVectorSet_t,
    ) -> curandStatus_t;
    /// Points `constants` at library-owned host memory holding the scramble constants.
    pub fn curandGetScrambleConstants32(constants: *mut *mut c_uint) -> curandStatus_t;
    pub fn curandGetScrambleConstants64(constants: *mut *mut c_ulonglong) -> curandStatus_t;
}
