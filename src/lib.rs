//! Predicate masks for lane-selective SIMD operations
//!
//! A mask holds one boolean bit per vector lane and selects which lanes take part
//! in a masked operation (blend, masked add, masked load/store, ...). Two families
//! are provided, one per supported register width:
//!
//! - [`Mask128`]: 16 predicate bits, covering a 128-bit vector (up to 16 byte lanes)
//! - [`Mask512`]: 64 predicate bits, covering a 512-bit vector (up to 64 byte lanes)
//!
//! Both are generic over the lane element type (`u8`/`u16`/`u32`/`u64`), which only
//! changes how many of the stored bits are active, never the size or bit pattern of
//! the mask itself. [`Mask128::cast`]/[`Mask512::cast`] reinterpret the same bits
//! under a different element type.
//!
//! This is not a general SIMD library; the vector types masks operate on live
//! elsewhere. A few expectations apply:
//! - Only the two register widths above are covered
//! - Currently no runtime dynamic dispatch is supported, so the instruction sets
//!   used are decided at compile time
//! - On x86_64, the bit-manipulation extensions (POPCNT, LZCNT, BMI1) accelerate
//!   the counting operations when enabled; every operation also has a portable
//!   fallback producing bit-for-bit identical results
//!
//! Masks are plain `Copy` values: every operation returns a new mask and nothing
//! is ever mutated in place, so they can be shared freely across threads.
#![no_std]

mod elements;
mod mask;

pub mod backend;

pub use backend::{has_accel, is_hardware_accelerated, Accel};
pub use elements::*;
pub use mask::*;
