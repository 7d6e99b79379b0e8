use lanemask::*;

#[test]
fn lane_counts() {
    assert_eq!(Mask128::<u8>::LANES, 16);
    assert_eq!(Mask128::<u16>::LANES, 8);
    assert_eq!(Mask128::<u32>::LANES, 4);
    assert_eq!(Mask128::<u64>::LANES, 2);
    assert_eq!(Mask512::<u8>::LANES, 64);
    assert_eq!(Mask512::<u16>::LANES, 32);
    assert_eq!(Mask512::<u32>::LANES, 16);
    assert_eq!(Mask512::<u64>::LANES, 8);
}

#[test]
fn byte_lane_scenario() {
    let a = Mask128::<u8>::from_bits(0b0000_0000_1111_0000);
    let b = Mask128::<u8>::from_bits(0b0000_0000_0011_1100);

    assert_eq!(a.and(b).to_bits(), 0b0000_0000_0011_0000);
    assert_eq!(a.and(b).pop_count(), 2);

    assert!(a.test(4));
    assert!(!a.test(3));
    assert!(!a.test(8));
    assert!(a[4]);
    assert!(!a[3]);

    assert_eq!(a.trailing_zero_count(), 4);
    assert_eq!(a.leading_zero_count(), 8);
}

#[test]
fn set_returns_new_mask() {
    let m = Mask128::<u32>::from_bits(0xFFFF);

    // only the targeted bit changes; inactive-range bits stay put
    let cleared = m.set(0, false);
    assert_eq!(cleared.to_bits(), 0xFFFE);
    assert_eq!(m.to_bits(), 0xFFFF);

    let restored = cleared.set(0, true);
    assert_eq!(restored, m);

    // setting an already-set lane is a no-op
    assert_eq!(m.set(3, true), m);
}

#[test]
fn set_and_test_round_trip() {
    let mut m = Mask512::<u16>::ZERO;
    for lane in 0..Mask512::<u16>::LANES as usize {
        m = m.set(lane, lane % 3 == 0);
    }
    for lane in 0..Mask512::<u16>::LANES as usize {
        assert_eq!(m.test(lane), lane % 3 == 0);
    }
}

macro_rules! cast_round_trip {
    { $mask:ident, $store:ty } => {{
        let patterns: [$store; 4] = [0, 1, <$store>::MAX / 3, <$store>::MAX];
        for &bits in patterns.iter() {
            let m = $mask::<u8>::from_bits(bits);

            assert_eq!(m.cast::<u16>().cast::<u8>(), m);
            assert_eq!(m.cast::<u32>().cast::<u8>(), m);
            assert_eq!(m.cast::<u64>().cast::<u8>(), m);

            // reinterpretation never touches the stored bits, even those
            // beyond the narrower view's active range
            assert_eq!(m.cast::<u64>().to_bits(), bits);

            let via_from: $mask<u64> = m.into();
            assert_eq!(via_from.to_bits(), bits);
        }
    }};
}

#[test]
fn cast_round_trips() {
    cast_round_trip!{ Mask128, u16 }
    cast_round_trip!{ Mask512, u64 }
}

#[test]
fn cast_changes_lane_count_only() {
    let m = Mask128::<u8>::ALL_BITS_SET;
    let wide_lanes = m.cast::<u64>();

    assert_eq!(wide_lanes.to_bits(), m.to_bits());
    assert_eq!(Mask128::<u64>::LANES, 2);

    // the u64 view has inactive bits set, so it is not its own ALL_BITS_SET,
    // but it still compares lane-equal to it
    assert!(wide_lanes != Mask128::<u64>::ALL_BITS_SET);
    assert_eq!(
        wide_lanes.equals(Mask128::<u64>::ALL_BITS_SET),
        Mask128::<u64>::ALL_BITS_SET
    );
}

#[test]
fn equals_ignores_inactive_bits() {
    let a = Mask128::<u64>::from_bits(0xABCD);
    let b = Mask128::<u64>::from_bits(0x00CD);

    assert_eq!(a.equals(b), Mask128::<u64>::ALL_BITS_SET);
    assert!(a != b);
}

#[test]
fn any_all_cover_active_range_only() {
    // 4 active lanes; a bit above them must not count as "any"
    let inactive_only = Mask128::<u32>::from_bits(0x8000);
    assert!(!inactive_only.any());

    let one_lane = Mask128::<u32>::from_bits(0b0100);
    assert!(one_lane.any());
    assert!(!one_lane.all());

    let full = Mask128::<u32>::from_bits(0b1111);
    assert!(full.all());
}

#[test]
#[should_panic(expected = "lane index out of range")]
fn test_rejects_index_at_lane_count() {
    let m = Mask128::<u32>::ALL_BITS_SET;
    let _ = m.test(Mask128::<u32>::LANES as usize);
}

#[test]
#[should_panic(expected = "lane index out of range")]
fn set_rejects_index_at_lane_count() {
    let m = Mask512::<u64>::ZERO;
    let _ = m.set(Mask512::<u64>::LANES as usize, true);
}

#[test]
#[should_panic(expected = "lane index out of range")]
fn index_sugar_rejects_out_of_range() {
    let m = Mask128::<u16>::ALL_BITS_SET;
    let _ = m[8];
}
