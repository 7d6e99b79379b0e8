//! x86_64 bit-manipulation paths.
//!
//! The plain logical operations (`and`, `or`, `xor`, ...) already lower to a
//! single ALU instruction, so only the operations with a dedicated instruction
//! get a native path here: POPCNT, LZCNT and the BMI1 TZCNT/ANDN. Each function
//! is compiled only when its instruction family is enabled, and the dispatch
//! layer never calls it otherwise.

use core::arch::x86_64::*;

pub(crate) mod w16 {
    use super::*;

    #[cfg(target_feature = "popcnt")]
    #[inline]
    pub(crate) fn popcnt(bits: u16) -> u32 {
        // SAFETY: gated on `popcnt` being enabled at compile time
        unsafe { _popcnt32(bits as i32) as u32 }
    }

    #[cfg(target_feature = "lzcnt")]
    #[inline]
    pub(crate) fn lzcnt(bits: u16) -> u32 {
        // LZCNT counts within 32 bits; the high half of the widened word is
        // always zero, so subtracting it recovers the 16-bit count. An all-zero
        // word gives 32 - 16 = 16, the full storage width.
        // SAFETY: gated on `lzcnt` being enabled at compile time
        unsafe { _lzcnt_u32(bits as u32) - 16 }
    }

    #[cfg(target_feature = "bmi1")]
    #[inline]
    pub(crate) fn tzcnt(bits: u16) -> u32 {
        // The sentinel bit at position 16 caps the count of an all-zero word
        // at the storage width without branching.
        // SAFETY: gated on `bmi1` being enabled at compile time
        unsafe { _tzcnt_u32(bits as u32 | 0x0001_0000) }
    }

    #[cfg(target_feature = "bmi1")]
    #[inline]
    pub(crate) fn andn(a: u16, b: u16) -> u16 {
        // ANDN computes `!first & second`; the operands are swapped so the
        // result is `a & !b`. The inverted high bits are discarded by the
        // truncation back to 16 bits.
        // SAFETY: gated on `bmi1` being enabled at compile time
        unsafe { _andn_u32(b as u32, a as u32) as u16 }
    }
}

pub(crate) mod w64 {
    use super::*;

    #[cfg(target_feature = "popcnt")]
    #[inline]
    pub(crate) fn popcnt(bits: u64) -> u32 {
        // SAFETY: gated on `popcnt` being enabled at compile time
        unsafe { _popcnt64(bits as i64) as u32 }
    }

    #[cfg(target_feature = "lzcnt")]
    #[inline]
    pub(crate) fn lzcnt(bits: u64) -> u32 {
        // SAFETY: gated on `lzcnt` being enabled at compile time
        unsafe { _lzcnt_u64(bits) as u32 }
    }

    #[cfg(target_feature = "bmi1")]
    #[inline]
    pub(crate) fn tzcnt(bits: u64) -> u32 {
        // SAFETY: gated on `bmi1` being enabled at compile time
        unsafe { _tzcnt_u64(bits) as u32 }
    }

    #[cfg(target_feature = "bmi1")]
    #[inline]
    pub(crate) fn andn(a: u64, b: u64) -> u64 {
        // SAFETY: gated on `bmi1` being enabled at compile time
        unsafe { _andn_u64(b, a) }
    }
}
