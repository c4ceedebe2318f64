//! An in-memory [`CurandApi`] that records every call, for tests that have no GPU.

use crate::sys::*;
use std::os::raw::{c_int, c_uint, c_ulonglong};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
pub(crate) struct FakeCurand {
    calls: Mutex<Vec<String>>,
    failure: Mutex<Option<(&'static str, curandStatus_t)>>,
    next_handle: AtomicUsize,
}

impl FakeCurand {
    /// Makes every later call of `method` return `status` without doing anything else.
    pub(crate) fn fail(&self, method: &'static str, status: curandStatus_t) {
        *self.failure.lock().unwrap() = Some((method, status));
    }

    pub(crate) fn succeed(&self) {
        *self.failure.lock().unwrap() = None;
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn take_calls(&self) -> Vec<String> {
        std::mem::take(&mut *self.calls.lock().unwrap())
    }

    fn record(&self, method: &'static str, args: String) -> Option<curandStatus_t> {
        self.calls.lock().unwrap().push(format!("{method}({args})"));
        match *self.failure.lock().unwrap() {
            Some((failing, status)) if failing == method => Some(status),
            _ => None,
        }
    }

    fn create(&self, generator: *mut curandGenerator_t) -> curandStatus_t {
        let handle = self.next_handle.fetch_add(1, Ordering::Relaxed) + 1;
        unsafe { *generator = handle as curandGenerator_t };
        curandStatus::CURAND_STATUS_SUCCESS
    }
}

fn id(generator: curandGenerator_t) -> usize {
    generator as usize
}

unsafe fn fill<T: Copy>(output: *mut T, n: usize, value: impl Fn(usize) -> T) {
    for i in 0..n {
        unsafe { *output.add(i) = value(i) };
    }
}

macro_rules! check {
    ($self:ident, $method:literal, $($fmt:tt)*) => {
        if let Some(status) = $self.record($method, format!($($fmt)*)) {
            return status;
        }
    };
}

impl CurandApi for FakeCurand {
    unsafe fn create_generator(
        &self,
        generator: *mut curandGenerator_t,
        rng_type: curandRngType_t,
    ) -> curandStatus_t {
        check!(self, "create_generator", "{}", rng_type.0);
        self.create(generator)
    }

    unsafe fn create_generator_host(
        &self,
        generator: *mut curandGenerator_t,
        rng_type: curandRngType_t,
    ) -> curandStatus_t {
        check!(self, "create_generator_host", "{}", rng_type.0);
        self.create(generator)
    }

    unsafe fn destroy_generator(&self, generator: curandGenerator_t) -> curandStatus_t {
        check!(self, "destroy_generator", "{}", id(generator));
        curandStatus::CURAND_STATUS_SUCCESS
    }

    unsafe fn get_version(&self, version: *mut c_int) -> curandStatus_t {
        check!(self, "get_version", "");
        unsafe { *version = 10305 };
        curandStatus::CURAND_STATUS_SUCCESS
    }

    unsafe fn get_property(
        &self,
        property: libraryPropertyType_t,
        value: *mut c_int,
    ) -> curandStatus_t {
        check!(self, "get_property", "{}", property.0);
        let out = match property {
            libraryPropertyType::MAJOR_VERSION => 10,
            libraryPropertyType::MINOR_VERSION => 3,
            _ => 5,
        };
        unsafe { *value = out };
        curandStatus::CURAND_STATUS_SUCCESS
    }

    unsafe fn set_stream(
        &self,
        generator: curandGenerator_t,
        stream: cudaStream_t,
    ) -> curandStatus_t {
        check!(self, "set_stream", "{}, {}", id(generator), stream as usize);
        curandStatus::CURAND_STATUS_SUCCESS
    }

    unsafe fn set_pseudo_random_generator_seed(
        &self,
        generator: curandGenerator_t,
        seed: c_ulonglong,
    ) -> curandStatus_t {
        check!(self, "set_pseudo_random_generator_seed", "{}, {seed}", id(generator));
        curandStatus::CURAND_STATUS_SUCCESS
    }

    unsafe fn set_generator_offset(
        &self,
        generator: curandGenerator_t,
        offset: c_ulonglong,
    ) -> curandStatus_t {
        check!(self, "set_generator_offset", "{}, {offset}", id(generator));
        curandStatus::CURAND_STATUS_SUCCESS
    }

    unsafe fn set_generator_ordering(
        &self,
        generator: curandGenerator_t,
        order: curandOrdering_t,
    ) -> curandStatus_t {
        check!(self, "set_generator_ordering", "{}, {}", id(generator), order.0);
        curandStatus::CURAND_STATUS_SUCCESS
    }

    unsafe fn set_quasi_random_generator_dimensions(
        &self,
        generator: curandGenerator_t,
        num_dimensions: c_uint,
    ) -> curandStatus_t {
        check!(
            self,
            "set_quasi_random_generator_dimensions",
            "{}, {num_dimensions}",
            id(generator)
        );
        curandStatus::CURAND_STATUS_SUCCESS
    }

    unsafe fn generate_seeds(&self, generator: curandGenerator_t) -> curandStatus_t {
        check!(self, "generate_seeds", "{}", id(generator));
        curandStatus::CURAND_STATUS_SUCCESS
    }

    unsafe fn generate(
        &self,
        generator: curandGenerator_t,
        output_ptr: *mut c_uint,
        num: usize,
    ) -> curandStatus_t {
        check!(self, "generate", "{}, {num}", id(generator));
        unsafe { fill(output_ptr, num, |i| i as c_uint) };
        curandStatus::CURAND_STATUS_SUCCESS
    }

    unsafe fn generate_long_long(
        &self,
        generator: curandGenerator_t,
        output_ptr: *mut c_ulonglong,
        num: usize,
    ) -> curandStatus_t {
        check!(self, "generate_long_long", "{}, {num}", id(generator));
        unsafe { fill(output_ptr, num, |i| u64::MAX - i as u64) };
        curandStatus::CURAND_STATUS_SUCCESS
    }

    unsafe fn generate_uniform(
        &self,
        generator: curandGenerator_t,
        output_ptr: *mut f32,
        num: usize,
    ) -> curandStatus_t {
        check!(self, "generate_uniform", "{}, {num}", id(generator));
        unsafe { fill(output_ptr, num, |_| 0.25) };
        curandStatus::CURAND_STATUS_SUCCESS
    }

    unsafe fn generate_uniform_double(
        &self,
        generator: curandGenerator_t,
        output_ptr: *mut f64,
        num: usize,
    ) -> curandStatus_t {
        check!(self, "generate_uniform_double", "{}, {num}", id(generator));
        unsafe { fill(output_ptr, num, |_| 0.5) };
        curandStatus::CURAND_STATUS_SUCCESS
    }

    unsafe fn generate_normal(
        &self,
        generator: curandGenerator_t,
        output_ptr: *mut f32,
        n: usize,
        mean: f32,
        stddev: f32,
    ) -> curandStatus_t {
        check!(self, "generate_normal", "{}, {n}, {mean}, {stddev}", id(generator));
        unsafe { fill(output_ptr, n, |_| mean) };
        curandStatus::CURAND_STATUS_SUCCESS
    }

    unsafe fn generate_normal_double(
        &self,
        generator: curandGenerator_t,
        output_ptr: *mut f64,
        n: usize,
        mean: f64,
        stddev: f64,
    ) -> curandStatus_t {
        check!(self, "generate_normal_double", "{}, {n}, {mean}, {stddev}", id(generator));
        unsafe { fill(output_ptr, n, |_| mean) };
        curandStatus::CURAND_STATUS_SUCCESS
    }

    unsafe fn generate_log_normal(
        &self,
        generator: curandGenerator_t,
        output_ptr: *mut f32,
        n: usize,
        mean: f32,
        stddev: f32,
    ) -> curandStatus_t {
        check!(self, "generate_log_normal", "{}, {n}, {mean}, {stddev}", id(generator));
        unsafe { fill(output_ptr, n, |_| mean.exp()) };
        curandStatus::CURAND_STATUS_SUCCESS
    }

    unsafe fn generate_log_normal_double(
        &self,
        generator: curandGenerator_t,
        output_ptr: *mut f64,
        n: usize,
        mean: f64,
        stddev: f64,
    ) -> curandStatus_t {
        check!(
            self,
            "generate_log_normal_double",
            "{}, {n}, {mean}, {stddev}",
            id(generator)
        );
        unsafe { fill(output_ptr, n, |_| mean.exp()) };
        curandStatus::CURAND_STATUS_SUCCESS
    }

    unsafe fn generate_poisson(
        &self,
        generator: curandGenerator_t,
        output_ptr: *mut c_uint,
        n: usize,
        lambda: f64,
    ) -> curandStatus_t {
        check!(self, "generate_poisson", "{}, {n}, {lambda}", id(generator));
        unsafe { fill(output_ptr, n, |_| lambda as c_uint) };
        curandStatus::CURAND_STATUS_SUCCESS
    }

    unsafe fn get_direction_vectors32(
        &self,
        vectors: *mut *mut curandDirectionVectors32_t,
        set: curandDirectionVectorSet_t,
    ) -> curandStatus_t {
        check!(self, "get_direction_vectors32", "{}", set.0);
        unsafe { *vectors = 0x32 as *mut curandDirectionVectors32_t };
        curandStatus::CURAND_STATUS_SUCCESS
    }

    unsafe fn get_direction_vectors64(
        &self,
        vectors: *mut *mut curandDirectionVectors64_t,
        set: curandDirectionVectorSet_t,
    ) -> curandStatus_t {
        check!(self, "get_direction_vectors64", "{}", set.0);
        unsafe { *vectors = 0x64 as *mut curandDirectionVectors64_t };
        curandStatus::CURAND_STATUS_SUCCESS
    }

    unsafe fn get_scramble_constants32(&self, constants: *mut *mut c_uint) -> curandStatus_t {
        check!(self, "get_scramble_constants32", "");
        unsafe { *constants = 0x320 as *mut c_uint };
        curandStatus::CURAND_STATUS_SUCCESS
    }

    unsafe fn get_scramble_constants64(
        &self,
        constants: *mut *mut c_ulonglong,
    ) -> curandStatus_t {
        check!(self, "get_scramble_constants64", "");
        unsafe { *constants = 0x640 as *mut c_ulonglong };
        curandStatus::CURAND_STATUS_SUCCESS
    }
}
