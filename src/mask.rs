#![allow(non_camel_case_types)]

use core::{
    fmt::{self, Debug},
    marker::PhantomData,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Index, Not, Shl, Shr},
};

use crate::{backend, elements::MaskElement};

macro_rules! mask_family {
    { $name:ident, $store:ty, $bits:literal, $vec_bits:literal, $width:ident } => {
        /// A predicate mask for a
        #[doc = concat!(stringify!($vec_bits), "-bit")]
        /// vector register, viewed as lanes of `T`
        ///
        /// One predicate bit per lane, lane 0 in the least significant bit. The mask
        /// always stores
        #[doc = concat!(stringify!($bits), " bits")]
        /// regardless of `T`; the element type only determines how many of the low
        /// bits are active ([`LANES`](Self::LANES)). Bits above the active range are
        /// zero in every mask this crate constructs, but raw patterns with high bits
        /// set are accepted by [`from_bits`](Self::from_bits) and carried through the
        /// bitwise operations unchanged.
        #[repr(transparent)]
        pub struct $name<T: MaskElement>($store, PhantomData<T>);

        impl<T: MaskElement> Copy for $name<T> {}

        impl<T: MaskElement> Clone for $name<T> {
            #[inline]
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T: MaskElement> $name<T> {
            /// Number of active lanes for this element-type view
            pub const LANES: u32 = $vec_bits / T::BITS;

            const LANE_MASK: $store = if Self::LANES == <$store>::BITS {
                <$store>::MAX
            } else {
                ((1 as $store) << Self::LANES) - 1
            };

            /// The mask with no bits set
            pub const ZERO: Self = Self(0, PhantomData);

            /// The mask with every active-range bit set and every inactive bit zero
            pub const ALL_BITS_SET: Self = Self(Self::LANE_MASK, PhantomData);

            /// Returns true when the counting operations use native bit-manipulation
            /// instructions. The result of every operation is the same either way.
            #[inline]
            pub fn is_hardware_accelerated() -> bool {
                crate::backend::is_hardware_accelerated()
            }

            /// Construct a mask from a raw bit pattern
            ///
            /// The pattern is taken as-is: bits above the active lane count are not
            /// cleared, so a caller can carry extra bits across a [`cast`](Self::cast)
            /// deliberately.
            #[inline]
            #[must_use]
            pub const fn from_bits(bits: $store) -> Self {
                Self(bits, PhantomData)
            }

            /// The raw stored bit pattern
            #[inline]
            #[must_use]
            pub const fn to_bits(self) -> $store {
                self.0
            }

            /// Construct a mask by setting all active lanes to the given value
            #[inline]
            #[must_use]
            pub const fn splat(value: bool) -> Self {
                if value {
                    Self::ALL_BITS_SET
                } else {
                    Self::ZERO
                }
            }

            /// Reinterpret the mask as a view over a different element type
            ///
            /// The stored bits are untouched; only the element-type tag, and with it
            /// the active lane count, changes. This is the only way to move a mask
            /// between element-type views: the binary operations require both
            /// operands to share the same view.
            #[inline]
            #[must_use]
            pub const fn cast<U: MaskElement>(self) -> $name<U> {
                $name(self.0, PhantomData)
            }

            /// Bitwise `self & rhs` over the full storage width
            #[inline]
            #[must_use]
            pub fn and(self, rhs: Self) -> Self {
                Self(backend::$width::and(self.0, rhs.0), PhantomData)
            }

            /// Bitwise `self | rhs` over the full storage width
            #[inline]
            #[must_use]
            pub fn or(self, rhs: Self) -> Self {
                Self(backend::$width::or(self.0, rhs.0), PhantomData)
            }

            /// Bitwise `self ^ rhs` over the full storage width
            #[inline]
            #[must_use]
            pub fn xor(self, rhs: Self) -> Self {
                Self(backend::$width::xor(self.0, rhs.0), PhantomData)
            }

            /// Bitwise `self & !rhs` over the full storage width
            #[inline]
            #[must_use]
            pub fn and_not(self, rhs: Self) -> Self {
                Self(backend::$width::andn(self.0, rhs.0), PhantomData)
            }

            /// Bitwise complement of the full storage width, inactive bits included
            #[inline]
            #[must_use]
            pub fn not(self) -> Self {
                Self(backend::$width::not(self.0), PhantomData)
            }

            /// Bitwise `!(self ^ rhs)` over the full storage width
            #[inline]
            #[must_use]
            pub fn xnor(self, rhs: Self) -> Self {
                Self(backend::$width::xnor(self.0, rhs.0), PhantomData)
            }

            /// Combine two masks lane-wise without carry propagation
            ///
            /// Mask bits are independent per-lane predicates, so a carrying integer
            /// add would let one lane's predicate spill into the next; `add` is
            /// therefore defined as bitwise `xor`.
            #[inline]
            #[must_use]
            pub fn add(self, rhs: Self) -> Self {
                Self(backend::$width::add(self.0, rhs.0), PhantomData)
            }

            /// Logical (zero-filling) shift of the whole storage word towards the
            /// high lanes; counts of the storage width or more yield [`ZERO`](Self::ZERO)
            #[inline]
            #[must_use]
            pub fn shift_left(self, count: u32) -> Self {
                Self(backend::$width::shl(self.0, count), PhantomData)
            }

            /// Logical (zero-filling) shift of the whole storage word towards lane 0;
            /// counts of the storage width or more yield [`ZERO`](Self::ZERO)
            #[inline]
            #[must_use]
            pub fn shift_right(self, count: u32) -> Self {
                Self(backend::$width::shr(self.0, count), PhantomData)
            }

            /// Lane-wise equality in the vector-comparison convention: the result is
            /// [`ALL_BITS_SET`](Self::ALL_BITS_SET) when both masks agree on every
            /// active lane, [`ZERO`](Self::ZERO) otherwise
            ///
            /// Only the active range takes part here. Scalar `==` is the stricter,
            /// separate operation: exact value equality over the full storage word,
            /// including any bits above the active lane count. The two deliberately
            /// do not coincide for masks that differ only in inactive bits.
            #[inline]
            #[must_use]
            pub fn equals(self, other: Self) -> Self {
                if (self.0 & Self::LANE_MASK) == (other.0 & Self::LANE_MASK) {
                    Self::ALL_BITS_SET
                } else {
                    Self::ZERO
                }
            }

            /// Number of zero bits above the highest set bit, over the full storage
            /// width; an all-zero mask yields the storage width
            #[inline]
            #[must_use]
            pub fn leading_zero_count(self) -> u32 {
                backend::$width::lzcnt(self.0)
            }

            /// Number of zero bits below the lowest set bit, over the full storage
            /// width; an all-zero mask yields the storage width
            #[inline]
            #[must_use]
            pub fn trailing_zero_count(self) -> u32 {
                backend::$width::tzcnt(self.0)
            }

            /// Number of set bits over the full storage width
            #[inline]
            #[must_use]
            pub fn pop_count(self) -> u32 {
                backend::$width::popcnt(self.0)
            }

            /// Test the value of the specific lane
            ///
            /// # Panics
            /// Panics if `lane` is greater or equal to the number of active lanes
            #[inline]
            #[must_use]
            pub fn test(&self, lane: usize) -> bool {
                assert!(lane < Self::LANES as usize, "lane index out of range");
                (self.0 >> lane) & 1 != 0
            }

            /// Returns a new mask with the specific lane set to the given value
            ///
            /// All other bits, inactive-range bits included, are unchanged; the
            /// original mask is not modified.
            ///
            /// # Panics
            /// Panics if `lane` is greater or equal to the number of active lanes
            #[inline]
            #[must_use = "`set` returns a new mask and leaves the original untouched"]
            pub fn set(self, lane: usize, value: bool) -> Self {
                assert!(lane < Self::LANES as usize, "lane index out of range");
                let bit = (1 as $store) << lane;
                if value {
                    Self(self.0 | bit, PhantomData)
                } else {
                    Self(self.0 & !bit, PhantomData)
                }
            }

            /// Returns true if any active lane is set, or false otherwise
            #[inline]
            #[must_use]
            pub fn any(self) -> bool {
                self.0 & Self::LANE_MASK != 0
            }

            /// Returns true if all active lanes are set, or false otherwise
            #[inline]
            #[must_use]
            pub fn all(self) -> bool {
                self.0 & Self::LANE_MASK == Self::LANE_MASK
            }
        }

        /// Exact value equality over the full storage word, inactive bits included;
        /// see [`equals`](Self::equals) for the mask-producing, active-range form
        impl<T: MaskElement> PartialEq for $name<T> {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }

        impl<T: MaskElement> Eq for $name<T> {}

        impl<T: MaskElement> Default for $name<T> {
            #[inline]
            fn default() -> Self {
                Self::ZERO
            }
        }

        impl<T: MaskElement> BitAnd for $name<T> {
            type Output = Self;

            #[inline]
            fn bitand(self, rhs: Self) -> Self::Output {
                self.and(rhs)
            }
        }

        impl<T: MaskElement> BitOr for $name<T> {
            type Output = Self;

            #[inline]
            fn bitor(self, rhs: Self) -> Self::Output {
                self.or(rhs)
            }
        }

        impl<T: MaskElement> BitXor for $name<T> {
            type Output = Self;

            #[inline]
            fn bitxor(self, rhs: Self) -> Self::Output {
                self.xor(rhs)
            }
        }

        impl<T: MaskElement> Not for $name<T> {
            type Output = Self;

            #[inline]
            fn not(self) -> Self::Output {
                Self(backend::$width::not(self.0), PhantomData)
            }
        }

        impl<T: MaskElement> Shl<u32> for $name<T> {
            type Output = Self;

            #[inline]
            fn shl(self, count: u32) -> Self::Output {
                self.shift_left(count)
            }
        }

        impl<T: MaskElement> Shr<u32> for $name<T> {
            type Output = Self;

            #[inline]
            fn shr(self, count: u32) -> Self::Output {
                self.shift_right(count)
            }
        }

        impl<T: MaskElement> BitAndAssign for $name<T> {
            #[inline]
            fn bitand_assign(&mut self, rhs: Self) {
                *self = (*self).and(rhs)
            }
        }

        impl<T: MaskElement> BitOrAssign for $name<T> {
            #[inline]
            fn bitor_assign(&mut self, rhs: Self) {
                *self = (*self).or(rhs)
            }
        }

        impl<T: MaskElement> BitXorAssign for $name<T> {
            #[inline]
            fn bitxor_assign(&mut self, rhs: Self) {
                *self = (*self).xor(rhs)
            }
        }

        /// Indexed read, sugar over [`test`](Self::test)
        ///
        /// # Panics
        /// Panics if `lane` is greater or equal to the number of active lanes
        impl<T: MaskElement> Index<usize> for $name<T> {
            type Output = bool;

            #[inline]
            fn index(&self, lane: usize) -> &bool {
                if self.test(lane) {
                    &true
                } else {
                    &false
                }
            }
        }

        impl<T: MaskElement> Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    concat!(stringify!($name), "(0b{:0width$b})"),
                    self.0,
                    width = $bits as usize
                )
            }
        }
    };
}

mask_family!{ Mask128, u16, 16, 128, w16 }
mask_family!{ Mask512, u64, 64, 512, w64 }

macro_rules! impl_cast_from {
    { $name:ident : $from:ty => $($to:ty),* } => {
        $(
            impl From<$name<$from>> for $name<$to> {
                #[inline]
                fn from(mask: $name<$from>) -> Self {
                    mask.cast()
                }
            }
        )*
    };
}

impl_cast_from!{ Mask128 : u8  => u16, u32, u64 }
impl_cast_from!{ Mask128 : u16 => u8, u32, u64 }
impl_cast_from!{ Mask128 : u32 => u8, u16, u64 }
impl_cast_from!{ Mask128 : u64 => u8, u16, u32 }
impl_cast_from!{ Mask512 : u8  => u16, u32, u64 }
impl_cast_from!{ Mask512 : u16 => u8, u32, u64 }
impl_cast_from!{ Mask512 : u32 => u8, u16, u64 }
impl_cast_from!{ Mask512 : u64 => u8, u16, u32 }

pub type mask8x16  = Mask128<u8>;
pub type mask16x8  = Mask128<u16>;
pub type mask32x4  = Mask128<u32>;
pub type mask64x2  = Mask128<u64>;
pub type mask8x64  = Mask512<u8>;
pub type mask16x32 = Mask512<u16>;
pub type mask32x16 = Mask512<u32>;
pub type mask64x8  = Mask512<u64>;
