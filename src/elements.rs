pub(crate) mod sealed {
    pub trait Sealed {}
}
use sealed::Sealed;

/// An element type a mask can be viewed over.
///
/// The set is closed: exactly the unsigned integer widths a vector register can be
/// split into (`u8`, `u16`, `u32`, `u64`). Using any other type at a generic mask
/// entry point is rejected at compile time; there is no runtime type check anywhere.
pub trait MaskElement: Sealed + Copy {
    /// Width of one lane of this element type, in bits
    const BITS: u32;
}

macro_rules! impl_element {
    { $ty:ty } => {
        impl Sealed for $ty {}

        impl MaskElement for $ty {
            const BITS: u32 = <$ty>::BITS;
        }
    };
}

impl_element!{u8}
impl_element!{u16}
impl_element!{u32}
impl_element!{u64}
