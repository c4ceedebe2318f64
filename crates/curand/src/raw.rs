//! Generic traits over the raw generation functions for integers, floats, and doubles.
//!
//! The functions are still very unsafe and do nothing except dispatch to the correct FFI function.

#![allow(clippy::missing_safety_doc)]

use crate::sys::{CurandApi, curandGenerator_t, curandStatus_t};

/// Integer types cuRAND fills with raw random bits.
pub trait Bits: private::Sealed + Copy {
    unsafe fn generate<A: CurandApi + ?Sized>(
        api: &A,
        generator: curandGenerator_t,
        output_ptr: *mut Self,
        num: usize,
    ) -> curandStatus_t;
}

impl Bits for u32 {
    unsafe fn generate<A: CurandApi + ?Sized>(
        api: &A,
        generator: curandGenerator_t,
        output_ptr: *mut Self,
        num: usize,
    ) -> curandStatus_t {
        unsafe { api.generate(generator, output_ptr, num) }
    }
}

impl Bits for u64 {
    unsafe fn generate<A: CurandApi + ?Sized>(
        api: &A,
        generator: curandGenerator_t,
        output_ptr: *mut Self,
        num: usize,
    ) -> curandStatus_t {
        unsafe { api.generate_long_long(generator, output_ptr, num) }
    }
}

/// Either 32 or 64 bit floats.
pub trait Float: private::Sealed + Copy {
    unsafe fn uniform<A: CurandApi + ?Sized>(
        api: &A,
        generator: curandGenerator_t,
        output_ptr: *mut Self,
        num: usize,
    ) -> curandStatus_t;
    unsafe fn normal<A: CurandApi + ?Sized>(
        api: &A,
        generator: curandGenerator_t,
        output_ptr: *mut Self,
        n: usize,
        mean: Self,
        stddev: Self,
    ) -> curandStatus_t;
    unsafe fn log_normal<A: CurandApi + ?Sized>(
        api: &A,
        generator: curandGenerator_t,
        output_ptr: *mut Self,
        n: usize,
        mean: Self,
        stddev: Self,
    ) -> curandStatus_t;
}

impl Float for f32 {
    unsafe fn uniform<A: CurandApi + ?Sized>(
        api: &A,
        generator: curandGenerator_t,
        output_ptr: *mut Self,
        num: usize,
    ) -> curandStatus_t {
        unsafe { api.generate_uniform(generator, output_ptr, num) }
    }
    unsafe fn normal<A: CurandApi + ?Sized>(
        api: &A,
        generator: curandGenerator_t,
        output_ptr: *mut Self,
        n: usize,
        mean: Self,
        stddev: Self,
    ) -> curandStatus_t {
        unsafe { api.generate_normal(generator, output_ptr, n, mean, stddev) }
    }
    unsafe fn log_normal<A: CurandApi + ?Sized>(
        api: &A,
        generator: curandGenerator_t,
        output_ptr: *mut Self,
        n: usize,
        mean: Self,
        stddev: Self,
    ) -> curandStatus_t {
        unsafe { api.generate_log_normal(generator, output_ptr, n, mean, stddev) }
    }
}

impl Float for f64 {
    unsafe fn uniform<A: CurandApi + ?Sized>(
        api: &A,
        generator: curandGenerator_t,
        output_ptr: *mut Self,
        num: usize,
    ) -> curandStatus_t {
        unsafe { api.generate_uniform_double(generator, output_ptr, num) }
    }
    unsafe fn normal<A: CurandApi + ?Sized>(
        api: &A,
        generator: curandGenerator_t,
        output_ptr: *mut Self,
        n: usize,
        mean: Self,
        stddev: Self,
    ) -> curandStatus_t {
        unsafe { api.generate_normal_double(generator, output_ptr, n, mean, stddev) }
    }
    unsafe fn log_normal<A: CurandApi + ?Sized>(
        api: &A,
        generator: curandGenerator_t,
        output_ptr: *mut Self,
        n: usize,
        mean: Self,
        stddev: Self,
    ) -> curandStatus_t {
        unsafe { api.generate_log_normal_double(generator, output_ptr, n, mean, stddev) }
    }
}

pub(crate) mod private {
    pub trait Sealed {}

    impl Sealed for u32 {}
    impl Sealed for u64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
