//! Dispatch-vs-fallback equivalence: whatever path the build selects, every
//! operation must match the portable software fallback bit for bit.

use lanemask::backend::scalar;
use lanemask::*;

use rand::{rngs::StdRng, Rng, SeedableRng};

macro_rules! check_against_fallback {
    { $mask:ty, $width:ident, $store:ty, $rng:expr } => {{
        let a: $store = $rng.gen();
        let b: $store = $rng.gen();
        let count: u32 = $rng.gen_range(0..=2 * <$store>::BITS);

        let ma = <$mask>::from_bits(a);
        let mb = <$mask>::from_bits(b);

        assert_eq!(ma.and(mb).to_bits(), scalar::$width::and(a, b));
        assert_eq!(ma.or(mb).to_bits(), scalar::$width::or(a, b));
        assert_eq!(ma.xor(mb).to_bits(), scalar::$width::xor(a, b));
        assert_eq!(ma.and_not(mb).to_bits(), scalar::$width::andn(a, b));
        assert_eq!(ma.xnor(mb).to_bits(), scalar::$width::xnor(a, b));
        assert_eq!(ma.add(mb).to_bits(), scalar::$width::add(a, b));
        assert_eq!(ma.not().to_bits(), scalar::$width::not(a));

        assert_eq!(ma.shift_left(count).to_bits(), scalar::$width::shl(a, count));
        assert_eq!(ma.shift_right(count).to_bits(), scalar::$width::shr(a, count));

        assert_eq!(ma.pop_count(), scalar::$width::popcnt(a));
        assert_eq!(ma.leading_zero_count(), scalar::$width::lzcnt(a));
        assert_eq!(ma.trailing_zero_count(), scalar::$width::tzcnt(a));
    }};
}

#[test]
fn dispatch_matches_fallback_mask128() {
    let mut rng = StdRng::seed_from_u64(0x1665_94E1);
    for _ in 0..20_000 {
        check_against_fallback!{ Mask128<u8>, w16, u16, rng }
        check_against_fallback!{ Mask128<u64>, w16, u16, rng }
    }
}

#[test]
fn dispatch_matches_fallback_mask512() {
    let mut rng = StdRng::seed_from_u64(0xC0DE_CAFE);
    for _ in 0..20_000 {
        check_against_fallback!{ Mask512<u8>, w64, u64, rng }
        check_against_fallback!{ Mask512<u32>, w64, u64, rng }
    }
}

#[test]
fn fallback_edge_words() {
    for &bits in [0u16, 1, 0x8000, u16::MAX].iter() {
        let m = Mask128::<u8>::from_bits(bits);
        assert_eq!(m.pop_count(), scalar::w16::popcnt(bits));
        assert_eq!(m.leading_zero_count(), scalar::w16::lzcnt(bits));
        assert_eq!(m.trailing_zero_count(), scalar::w16::tzcnt(bits));
    }
    for &bits in [0u64, 1, 1 << 63, u64::MAX].iter() {
        let m = Mask512::<u8>::from_bits(bits);
        assert_eq!(m.pop_count(), scalar::w64::popcnt(bits));
        assert_eq!(m.leading_zero_count(), scalar::w64::lzcnt(bits));
        assert_eq!(m.trailing_zero_count(), scalar::w64::tzcnt(bits));
    }
}

#[test]
fn scalar_path_always_available() {
    assert!(has_accel(Accel::Scalar));

    // the acceleration flag never changes observable results, only which
    // instructions compute them; the assertions above hold either way
    let _ = is_hardware_accelerated();
    let _ = Mask128::<u8>::is_hardware_accelerated();
    let _ = Mask512::<u8>::is_hardware_accelerated();
}
