//! ABI types from `curand.h` and the two CUDA runtime types it references.
//!
//! Enumerations are newtypes over the C integer so a status code a newer library returns is
//! still a valid value on the Rust side.
#![allow(non_camel_case_types)]
#![allow(non_upper_case_globals)]

use std::os::raw::{c_uint, c_ulonglong};

impl curandStatus {
    pub const CURAND_STATUS_SUCCESS: curandStatus = curandStatus(0);
    pub const CURAND_STATUS_VERSION_MISMATCH: curandStatus = curandStatus(100);
    pub const CURAND_STATUS_NOT_INITIALIZED: curandStatus = curandStatus(101);
    pub const CURAND_STATUS_ALLOCATION_FAILED: curandStatus = curandStatus(102);
    pub const CURAND_STATUS_TYPE_ERROR: curandStatus = curandStatus(103);
    pub const CURAND_STATUS_OUT_OF_RANGE: curandStatus = curandStatus(104);
    pub const CURAND_STATUS_LENGTH_NOT_MULTIPLE: curandStatus = curandStatus(105);
    pub const CURAND_STATUS_DOUBLE_PRECISION_REQUIRED: curandStatus = curandStatus(106);
    pub const CURAND_STATUS_LAUNCH_FAILURE: curandStatus = curandStatus(201);
    pub const CURAND_STATUS_PREEXISTING_FAILURE: curandStatus = curandStatus(202);
    pub const CURAND_STATUS_INITIALIZATION_FAILED: curandStatus = curandStatus(203);
    pub const CURAND_STATUS_ARCH_MISMATCH: curandStatus = curandStatus(204);
    pub const CURAND_STATUS_INTERNAL_ERROR: curandStatus = curandStatus(999);
}
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct curandStatus(pub c_uint);
pub use self::curandStatus as curandStatus_t;

impl curandRngType {
    pub const CURAND_RNG_TEST: curandRngType = curandRngType(0);
    pub const CURAND_RNG_PSEUDO_DEFAULT: curandRngType = curandRngType(100);
    pub const CURAND_RNG_PSEUDO_XORWOW: curandRngType = curandRngType(101);
    pub const CURAND_RNG_PSEUDO_MRG32K3A: curandRngType = curandRngType(121);
    pub const CURAND_RNG_PSEUDO_MTGP32: curandRngType = curandRngType(141);
    pub const CURAND_RNG_PSEUDO_MT19937: curandRngType = curandRngType(142);
    pub const CURAND_RNG_PSEUDO_PHILOX4_32_10: curandRngType = curandRngType(161);
    pub const CURAND_RNG_QUASI_DEFAULT: curandRngType = curandRngType(200);
    pub const CURAND_RNG_QUASI_SOBOL32: curandRngType = curandRngType(201);
    pub const CURAND_RNG_QUASI_SCRAMBLED_SOBOL32: curandRngType = curandRngType(202);
    pub const CURAND_RNG_QUASI_SOBOL64: curandRngType = curandRngType(203);
    pub const CURAND_RNG_QUASI_SCRAMBLED_SOBOL64: curandRngType = curandRngType(204);
}
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct curandRngType(pub c_uint);
pub use self::curandRngType as curandRngType_t;

impl curandOrdering {
    pub const CURAND_ORDERING_PSEUDO_BEST: curandOrdering = curandOrdering(100);
    pub const CURAND_ORDERING_PSEUDO_DEFAULT: curandOrdering = curandOrdering(101);
    pub const CURAND_ORDERING_PSEUDO_SEEDED: curandOrdering = curandOrdering(102);
    pub const CURAND_ORDERING_PSEUDO_LEGACY: curandOrdering = curandOrdering(103);
    pub const CURAND_ORDERING_PSEUDO_DYNAMIC: curandOrdering = curandOrdering(104);
    pub const CURAND_ORDERING_QUASI_DEFAULT: curandOrdering = curandOrdering(201);
}
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct curandOrdering(pub c_uint);
pub use self::curandOrdering as curandOrdering_t;

impl curandDirectionVectorSet {
    pub const CURAND_DIRECTION_VECTORS_32_JOEKUO6: curandDirectionVectorSet =
        curandDirectionVectorSet(101);
    pub const CURAND_SCRAMBLED_DIRECTION_VECTORS_32_JOEKUO6: curandDirectionVectorSet =
        curandDirectionVectorSet(102);
    pub const CURAND_DIRECTION_VECTORS_64_JOEKUO6: curandDirectionVectorSet =
        curandDirectionVectorSet(103);
    pub const CURAND_SCRAMBLED_DIRECTION_VECTORS_64_JOEKUO6: curandDirectionVectorSet =
        curandDirectionVectorSet(104);
}
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct curandDirectionVectorSet(pub c_uint);
pub use self::curandDirectionVectorSet as curandDirectionVectorSet_t;

impl libraryPropertyType {
    pub const MAJOR_VERSION: libraryPropertyType = libraryPropertyType(0);
    pub const MINOR_VERSION: libraryPropertyType = libraryPropertyType(1);
    pub const PATCH_LEVEL: libraryPropertyType = libraryPropertyType(2);
}
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct libraryPropertyType(pub c_uint);
pub use self::libraryPropertyType as libraryPropertyType_t;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct curandGenerator_st {
    _unused: [u8; 0],
}
pub type curandGenerator_t = *mut curandGenerator_st;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct CUstream_st {
    _unused: [u8; 0],
}
/// Same type as the driver API's `CUstream`.
pub type cudaStream_t = *mut CUstream_st;

pub type curandDirectionVectors32_t = [c_uint; 32];
pub type curandDirectionVectors64_t = [c_ulonglong; 64];
