//! Per-operation dispatch between a native instruction path and the portable
//! fallback.
//!
//! Every mask operation routes through one of the word-level functions below.
//! The decision is made per call from the compile-time capability predicate
//! [`has_accel`]; masks themselves carry no capability state. When the native
//! path is unavailable the fallback in [`scalar`] is used instead, which never
//! fails and is defined to produce the exact same bits for every input.

pub mod scalar;

#[cfg(target_arch = "x86_64")]
pub(crate) mod x86_64;

/// An instruction family usable by the dispatch layer
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Accel {
    Scalar,

    // x86_64 bit manipulation
    Popcnt,
    Lzcnt,
    Bmi1,
}

/// Check if an instruction family can be used on the current machine
///
/// # Note
///
/// Currently, no dynamic detection has been implemented, so values returned
/// depend on the machine the binary was compiled for
#[inline]
pub fn has_accel(accel: Accel) -> bool {
    #[cfg(target_arch = "x86_64")]
    {
        match accel {
            Accel::Scalar => true,
            Accel::Popcnt => cfg!(target_feature = "popcnt"),
            Accel::Lzcnt => cfg!(target_feature = "lzcnt"),
            Accel::Bmi1 => cfg!(target_feature = "bmi1"),
        }
    }

    #[cfg(not(target_arch = "x86_64"))]
    {
        accel == Accel::Scalar
    }
}

/// Whether mask operations are hardware accelerated, i.e. the full
/// bit-manipulation instruction family is available
#[inline]
pub fn is_hardware_accelerated() -> bool {
    has_accel(Accel::Popcnt) && has_accel(Accel::Lzcnt) && has_accel(Accel::Bmi1)
}

macro_rules! impl_word_dispatch {
    { $width:ident, $store:ty } => {
        pub(crate) mod $width {
            use super::*;

            // The logical operations are a single ALU instruction on every
            // supported target, so the scalar form is already the native form.

            #[inline]
            pub(crate) fn and(a: $store, b: $store) -> $store {
                scalar::$width::and(a, b)
            }

            #[inline]
            pub(crate) fn or(a: $store, b: $store) -> $store {
                scalar::$width::or(a, b)
            }

            #[inline]
            pub(crate) fn xor(a: $store, b: $store) -> $store {
                scalar::$width::xor(a, b)
            }

            #[inline]
            pub(crate) fn andn(a: $store, b: $store) -> $store {
                if has_accel(Accel::Bmi1) {
                    #[cfg(all(target_arch = "x86_64", target_feature = "bmi1"))]
                    return x86_64::$width::andn(a, b);
                }
                scalar::$width::andn(a, b)
            }

            #[inline]
            pub(crate) fn not(a: $store) -> $store {
                scalar::$width::not(a)
            }

            #[inline]
            pub(crate) fn xnor(a: $store, b: $store) -> $store {
                scalar::$width::xnor(a, b)
            }

            #[inline]
            pub(crate) fn add(a: $store, b: $store) -> $store {
                scalar::$width::add(a, b)
            }

            #[inline]
            pub(crate) fn shl(bits: $store, count: u32) -> $store {
                scalar::$width::shl(bits, count)
            }

            #[inline]
            pub(crate) fn shr(bits: $store, count: u32) -> $store {
                scalar::$width::shr(bits, count)
            }

            #[inline]
            pub(crate) fn popcnt(bits: $store) -> u32 {
                if has_accel(Accel::Popcnt) {
                    #[cfg(all(target_arch = "x86_64", target_feature = "popcnt"))]
                    return x86_64::$width::popcnt(bits);
                }
                scalar::$width::popcnt(bits)
            }

            #[inline]
            pub(crate) fn lzcnt(bits: $store) -> u32 {
                if has_accel(Accel::Lzcnt) {
                    #[cfg(all(target_arch = "x86_64", target_feature = "lzcnt"))]
                    return x86_64::$width::lzcnt(bits);
                }
                scalar::$width::lzcnt(bits)
            }

            #[inline]
            pub(crate) fn tzcnt(bits: $store) -> u32 {
                if has_accel(Accel::Bmi1) {
                    #[cfg(all(target_arch = "x86_64", target_feature = "bmi1"))]
                    return x86_64::$width::tzcnt(bits);
                }
                scalar::$width::tzcnt(bits)
            }
        }
    };
}

impl_word_dispatch!{ w16, u16 }
impl_word_dispatch!{ w64, u64 }
