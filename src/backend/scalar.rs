//! Portable software fallback for every mask operation.
//!
//! These are the reference semantics: the accelerated paths in the sibling
//! modules must return bit-for-bit identical results for every input, and the
//! equivalence tests compare against the functions here.

macro_rules! impl_scalar_word {
    { $width:ident, $store:ty } => {
        pub mod $width {
            #[inline]
            pub fn and(a: $store, b: $store) -> $store {
                a & b
            }

            #[inline]
            pub fn or(a: $store, b: $store) -> $store {
                a | b
            }

            #[inline]
            pub fn xor(a: $store, b: $store) -> $store {
                a ^ b
            }

            #[inline]
            pub fn andn(a: $store, b: $store) -> $store {
                a & !b
            }

            #[inline]
            pub fn not(a: $store) -> $store {
                !a
            }

            #[inline]
            pub fn xnor(a: $store, b: $store) -> $store {
                !(a ^ b)
            }

            /// Carry-free combination: mask bits are independent per-lane
            /// predicates, so a carrying integer add would let one lane spill
            /// into the next. `add` on masks is defined as `xor`.
            #[inline]
            pub fn add(a: $store, b: $store) -> $store {
                a ^ b
            }

            /// Logical shift; counts of the storage width or more yield zero.
            #[inline]
            pub fn shl(bits: $store, count: u32) -> $store {
                bits.checked_shl(count).unwrap_or(0)
            }

            /// Logical shift; counts of the storage width or more yield zero.
            #[inline]
            pub fn shr(bits: $store, count: u32) -> $store {
                bits.checked_shr(count).unwrap_or(0)
            }

            #[inline]
            pub fn popcnt(bits: $store) -> u32 {
                bits.count_ones()
            }

            #[inline]
            pub fn lzcnt(bits: $store) -> u32 {
                bits.leading_zeros()
            }

            #[inline]
            pub fn tzcnt(bits: $store) -> u32 {
                bits.trailing_zeros()
            }
        }
    };
}

impl_scalar_word!{ w16, u16 }
impl_scalar_word!{ w64, u64 }
