use std::fmt::{self, Display};

use crate::sys;

/// Result that contains the un-dropped value on error.
pub type DropResult<T> = std::result::Result<(), (CurandError, T)>;

/// A non-success `curandStatus_t`.
///
/// cuRAND [docs](https://docs.nvidia.com/cuda/curand/group__HOST.html#group__HOST_1gb94a31d5c165858c96b6c18b70644437)
/// describe when each status is returned.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurandError {
    /// Header file and linked library version do not match.
    VersionMismatch,
    /// The generator was not initialized.
    NotInitialized,
    /// Memory allocation failed.
    AllocationFailed,
    /// The generator is the wrong type for the requested operation.
    TypeError,
    /// An argument was out of range.
    OutOfRange,
    /// The requested length is not a multiple of the dimension, or not even for normal
    /// generation with some generators.
    LengthNotMultiple,
    /// The GPU does not support double precision.
    DoublePrecisionRequired,
    /// A kernel launch failed.
    LaunchFailure,
    /// A failure from a previous kernel launch was detected.
    PreexistingFailure,
    /// CUDA initialization failed.
    InitializationFailed,
    /// The architecture of the GPU does not support the requested feature.
    ArchMismatch,
    /// An internal library error.
    InternalError,
    /// A status this crate has no name for, kept verbatim.
    Unrecognized(u32),
}

impl std::error::Error for CurandError {}

impl Display for CurandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CurandError::*;

        let msg = match self {
            VersionMismatch => "header file and linked library version do not match",
            NotInitialized => "generator not initialized",
            AllocationFailed => "memory allocation failed",
            TypeError => "generator is wrong type",
            OutOfRange => "argument out of range",
            LengthNotMultiple => "length requested is not a multiple of dimension",
            DoublePrecisionRequired => "GPU does not have double precision required by MRG32k3a",
            LaunchFailure => "kernel launch failure",
            PreexistingFailure => "preexisting failure on library entry",
            InitializationFailed => "initialization of CUDA failed",
            ArchMismatch => "architecture mismatch, GPU does not support requested feature",
            InternalError => "internal library error",
            Unrecognized(code) => return write!(f, "unrecognized cuRAND status {code}"),
        };
        f.write_str(msg)
    }
}

pub trait ToResult {
    fn to_result(self) -> Result<(), CurandError>;
}

impl ToResult for sys::curandStatus_t {
    fn to_result(self) -> Result<(), CurandError> {
        use CurandError::*;
        use sys::curandStatus as S;

        Err(match self {
            S::CURAND_STATUS_SUCCESS => return Ok(()),
            S::CURAND_STATUS_VERSION_MISMATCH => VersionMismatch,
            S::CURAND_STATUS_NOT_INITIALIZED => NotInitialized,
            S::CURAND_STATUS_ALLOCATION_FAILED => AllocationFailed,
            S::CURAND_STATUS_TYPE_ERROR => TypeError,
            S::CURAND_STATUS_OUT_OF_RANGE => OutOfRange,
            S::CURAND_STATUS_LENGTH_NOT_MULTIPLE => LengthNotMultiple,
            S::CURAND_STATUS_DOUBLE_PRECISION_REQUIRED => DoublePrecisionRequired,
            S::CURAND_STATUS_LAUNCH_FAILURE => LaunchFailure,
            S::CURAND_STATUS_PREEXISTING_FAILURE => PreexistingFailure,
            S::CURAND_STATUS_INITIALIZATION_FAILED => InitializationFailed,
            S::CURAND_STATUS_ARCH_MISMATCH => ArchMismatch,
            S::CURAND_STATUS_INTERNAL_ERROR => InternalError,
            sys::curandStatus(code) => Unrecognized(code),
        })
    }
}

impl CurandError {
    /// The exact status code the library returned.
    pub fn into_raw(self) -> sys::curandStatus_t {
        use CurandError::*;
        use sys::curandStatus as S;

        match self {
            VersionMismatch => S::CURAND_STATUS_VERSION_MISMATCH,
            NotInitialized => S::CURAND_STATUS_NOT_INITIALIZED,
            AllocationFailed => S::CURAND_STATUS_ALLOCATION_FAILED,
            TypeError => S::CURAND_STATUS_TYPE_ERROR,
            OutOfRange => S::CURAND_STATUS_OUT_OF_RANGE,
            LengthNotMultiple => S::CURAND_STATUS_LENGTH_NOT_MULTIPLE,
            DoublePrecisionRequired => S::CURAND_STATUS_DOUBLE_PRECISION_REQUIRED,
            LaunchFailure => S::CURAND_STATUS_LAUNCH_FAILURE,
            PreexistingFailure => S::CURAND_STATUS_PREEXISTING_FAILURE,
            InitializationFailed => S::CURAND_STATUS_INITIALIZATION_FAILED,
            ArchMismatch => S::CURAND_STATUS_ARCH_MISMATCH,
            InternalError => S::CURAND_STATUS_INTERNAL_ERROR,
            Unrecognized(code) => sys::curandStatus(code),
        }
    }
}

#[derive(Debug)]
pub enum Error {
    Curand(CurandError),
    Load(sys::LoadError),
}

impl From<CurandError> for Error {
    fn from(err: CurandError) -> Self {
        Self::Curand(err)
    }
}

impl From<sys::LoadError> for Error {
    fn from(err: sys::LoadError) -> Self {
        Self::Load(err)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Curand(e) => Some(e),
            Self::Load(e) => Some(e),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Curand(_) => write!(f, "cuRAND error"),
            Self::Load(_) => write!(f, "failed to load cuRAND"),
        }
    }
}
