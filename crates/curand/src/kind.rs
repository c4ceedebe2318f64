use crate::sys;

/// The algorithm a generator uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RngType {
    Test,
    /// Whatever cuRAND considers its default pseudorandom generator, currently XORWOW.
    #[default]
    PseudoDefault,
    PseudoXorwow,
    PseudoMrg32k3a,
    PseudoMtgp32,
    PseudoMt19937,
    PseudoPhilox4_32_10,
    QuasiDefault,
    QuasiSobol32,
    QuasiScrambledSobol32,
    QuasiSobol64,
    QuasiScrambledSobol64,
}

impl RngType {
    pub fn to_raw(self) -> sys::curandRngType_t {
        use RngType::*;
        use sys::curandRngType as R;

        match self {
            Test => R::CURAND_RNG_TEST,
            PseudoDefault => R::CURAND_RNG_PSEUDO_DEFAULT,
            PseudoXorwow => R::CURAND_RNG_PSEUDO_XORWOW,
            PseudoMrg32k3a => R::CURAND_RNG_PSEUDO_MRG32K3A,
            PseudoMtgp32 => R::CURAND_RNG_PSEUDO_MTGP32,
            PseudoMt19937 => R::CURAND_RNG_PSEUDO_MT19937,
            PseudoPhilox4_32_10 => R::CURAND_RNG_PSEUDO_PHILOX4_32_10,
            QuasiDefault => R::CURAND_RNG_QUASI_DEFAULT,
            QuasiSobol32 => R::CURAND_RNG_QUASI_SOBOL32,
            QuasiScrambledSobol32 => R::CURAND_RNG_QUASI_SCRAMBLED_SOBOL32,
            QuasiSobol64 => R::CURAND_RNG_QUASI_SOBOL64,
            QuasiScrambledSobol64 => R::CURAND_RNG_QUASI_SCRAMBLED_SOBOL64,
        }
    }

    /// Quasirandom generators take dimensions instead of seeds.
    pub fn is_quasi(self) -> bool {
        matches!(
            self,
            RngType::QuasiDefault
                | RngType::QuasiSobol32
                | RngType::QuasiScrambledSobol32
                | RngType::QuasiSobol64
                | RngType::QuasiScrambledSobol64
        )
    }
}

/// How results are ordered in memory, trading reproducibility across devices for speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorOrdering {
    PseudoBest,
    PseudoDefault,
    PseudoSeeded,
    PseudoLegacy,
    PseudoDynamic,
    QuasiDefault,
}

impl GeneratorOrdering {
    pub fn to_raw(self) -> sys::curandOrdering_t {
        use GeneratorOrdering::*;
        use sys::curandOrdering as O;

        match self {
            PseudoBest => O::CURAND_ORDERING_PSEUDO_BEST,
            PseudoDefault => O::CURAND_ORDERING_PSEUDO_DEFAULT,
            PseudoSeeded => O::CURAND_ORDERING_PSEUDO_SEEDED,
            PseudoLegacy => O::CURAND_ORDERING_PSEUDO_LEGACY,
            PseudoDynamic => O::CURAND_ORDERING_PSEUDO_DYNAMIC,
            QuasiDefault => O::CURAND_ORDERING_QUASI_DEFAULT,
        }
    }
}

/// Precomputed Sobol direction vector sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectionVectorSet {
    JoeKuo6_32,
    ScrambledJoeKuo6_32,
    JoeKuo6_64,
    ScrambledJoeKuo6_64,
}

impl DirectionVectorSet {
    pub fn to_raw(self) -> sys::curandDirectionVectorSet_t {
        use DirectionVectorSet::*;
        use sys::curandDirectionVectorSet as D;

        match self {
            JoeKuo6_32 => D::CURAND_DIRECTION_VECTORS_32_JOEKUO6,
            ScrambledJoeKuo6_32 => D::CURAND_SCRAMBLED_DIRECTION_VECTORS_32_JOEKUO6,
            JoeKuo6_64 => D::CURAND_DIRECTION_VECTORS_64_JOEKUO6,
            ScrambledJoeKuo6_64 => D::CURAND_SCRAMBLED_DIRECTION_VECTORS_64_JOEKUO6,
        }
    }

    pub fn is_64_bit(self) -> bool {
        matches!(
            self,
            DirectionVectorSet::JoeKuo6_64 | DirectionVectorSet::ScrambledJoeKuo6_64
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LibraryProperty {
    MajorVersion,
    MinorVersion,
    PatchLevel,
}

impl LibraryProperty {
    pub fn to_raw(self) -> sys::libraryPropertyType_t {
        match self {
            LibraryProperty::MajorVersion => sys::libraryPropertyType::MAJOR_VERSION,
            LibraryProperty::MinorVersion => sys::libraryPropertyType::MINOR_VERSION,
            LibraryProperty::PatchLevel => sys::libraryPropertyType::PATCH_LEVEL,
        }
    }
}
