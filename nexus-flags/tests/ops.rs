use nexus_flags::{
    Flags, any, disjoint, flags, intersect, make_if, make_null, modify, modify_inplace, none,
    nth_bit, subset, subseteq,
};

#[flags]
#[repr(u32)]
pub enum FlagsEnum {
    Bit0 = nth_bit(0),
    Bit1 = nth_bit(1),
    Bit2 = nth_bit(2),
    Bit3 = nth_bit(3),
}

const ZERO: FlagsEnum = FlagsEnum::empty();

/// Every combination of the four named bits.
fn all_values() -> impl Iterator<Item = FlagsEnum> {
    (0u32..16).map(FlagsEnum::from_bits)
}

// =============================================================================
// any / none
// =============================================================================

#[test]
fn any_basic() {
    let a = FlagsEnum::Bit0;
    let b = FlagsEnum::Bit1;

    assert!(any(a));
    assert!(any(a | b));
    assert!(!any(a & b));
}

#[test]
fn none_basic() {
    let a = FlagsEnum::Bit0;
    let b = FlagsEnum::Bit1;

    assert!(!none(a));
    assert!(!none(a | b));
    assert!(none(a & b));
}

#[test]
fn any_is_not_zero() {
    for x in all_values() {
        assert_eq!(any(x), x != ZERO);
        assert_eq!(none(x), !any(x));
    }
}

#[test]
fn any_after_masking_complement() {
    let a = FlagsEnum::Bit0;
    let ab = FlagsEnum::Bit0 | FlagsEnum::Bit1;

    // Masked back into a plain value, so allowed
    assert!(any(ab & !a));
    assert!(none(a & !a));
    assert!(any(!!a));
}

// =============================================================================
// subset / subseteq
// =============================================================================

#[test]
fn subset_basic() {
    let a = FlagsEnum::Bit0;
    let b = FlagsEnum::Bit1;

    assert!(subset(FlagsEnum::default(), a));
    assert!(!subset(a, FlagsEnum::default()));
    assert!(subset(a, a | b));
    assert!(!subset(a | b, a | b));
    assert!(!subset(a | b, a));
    assert!(!subset(b, a));
}

#[test]
fn subseteq_basic() {
    let a = FlagsEnum::Bit0;
    let b = FlagsEnum::Bit1;

    assert!(subseteq(FlagsEnum::default(), a));
    assert!(!subseteq(a, FlagsEnum::default()));
    assert!(subseteq(a, a | b));
    assert!(subseteq(a | b, a | b));
    assert!(!subseteq(a | b, a));
    assert!(!subseteq(b, a));
}

#[test]
fn subset_is_strict() {
    for x in all_values() {
        assert!(!subset(x, x));
        assert!(subseteq(x, x));
    }
}

#[test]
fn zero_is_subseteq_of_everything() {
    for x in all_values() {
        assert!(subseteq(ZERO, x));
        assert_eq!(subseteq(x, ZERO), x == ZERO);
    }
}

#[test]
fn subset_matches_definition() {
    for x in all_values() {
        for y in all_values() {
            let expected = (x & y) == x && x != y;
            assert_eq!(subset(x, y), expected, "subset({x:?}, {y:?})");
        }
    }
}

// =============================================================================
// intersect / disjoint
// =============================================================================

#[test]
fn intersect_basic() {
    let a = FlagsEnum::Bit0;
    let b = FlagsEnum::Bit1;

    assert!(!intersect(a, FlagsEnum::default()));
    assert!(!intersect(FlagsEnum::default(), a));
    assert!(intersect(a, a | b));
    assert!(intersect(a | b, a | b));
    assert!(intersect(a | b, a));
    assert!(!intersect(b, a));
}

#[test]
fn disjoint_basic() {
    let a = FlagsEnum::Bit0;
    let b = FlagsEnum::Bit1;

    assert!(disjoint(a, FlagsEnum::default()));
    assert!(disjoint(FlagsEnum::default(), a));
    assert!(!disjoint(a, a | b));
    assert!(!disjoint(a | b, a | b));
    assert!(!disjoint(a | b, a));
    assert!(disjoint(b, a));
}

#[test]
fn intersect_is_not_disjoint() {
    for x in all_values() {
        for y in all_values() {
            assert_eq!(intersect(x, y), !disjoint(x, y));
        }
    }
}

// =============================================================================
// make_null / make_if
// =============================================================================

#[test]
fn make_null_basic() {
    assert_eq!(make_null(FlagsEnum::default()), FlagsEnum::default());
    assert_eq!(make_null(FlagsEnum::Bit0), FlagsEnum::default());

    for x in all_values() {
        assert_eq!(make_null(x), ZERO);
    }
}

#[test]
fn make_if_basic() {
    let a = FlagsEnum::Bit0;

    assert_eq!(make_if(a, false), FlagsEnum::default());
    assert_eq!(make_if(a, true), a);

    for x in all_values() {
        assert_eq!(make_if(x, true), x);
        assert_eq!(make_if(x, false), ZERO);
    }
}

// =============================================================================
// modify / modify_inplace
// =============================================================================

#[test]
fn modify_basic() {
    let a = FlagsEnum::Bit0;
    let b = FlagsEnum::Bit1;

    assert_eq!(modify(a, b, false), a);
    assert_eq!(modify(a, b, true), a | b);
    assert_eq!(modify(a, b, true).bits(), 0x03);
    assert_eq!(modify(a, b, false).bits(), 0x01);
}

#[test]
fn modify_false_never_clears() {
    let ab = FlagsEnum::Bit0 | FlagsEnum::Bit1;

    assert_eq!(modify(ab, FlagsEnum::Bit1, false), ab);
}

#[test]
fn modify_inplace_basic() {
    let a = FlagsEnum::Bit0;
    let b = FlagsEnum::Bit1;

    let mut v = a;
    modify_inplace(&mut v, b, false);
    assert_eq!(v, a);

    let mut v = a;
    modify_inplace(&mut v, b, true);
    assert_eq!(v, a | b);
}

#[test]
fn modify_inplace_matches_modify() {
    for x in all_values() {
        for y in all_values() {
            for set in [false, true] {
                let mut v = x;
                modify_inplace(&mut v, y, set);
                assert_eq!(v, modify(x, y, set));
            }
        }
    }
}

// =============================================================================
// Generic use through the trait
// =============================================================================

fn count_named<F: Flags>(value: F) -> usize {
    F::NAMED
        .iter()
        .filter(|(_, flag)| subseteq(*flag, value))
        .count()
}

fn exclusive<F: Flags>(a: F, b: F) -> F {
    (a | b) ^ (a & b)
}

#[test]
fn generic_operators() {
    let a = FlagsEnum::Bit0 | FlagsEnum::Bit1;
    let b = FlagsEnum::Bit1 | FlagsEnum::Bit2;

    assert_eq!(exclusive(a, b), FlagsEnum::Bit0 | FlagsEnum::Bit2);
    assert_eq!(exclusive(a, a), ZERO);
}

#[test]
fn generic_over_flags() {
    assert_eq!(count_named(FlagsEnum::Bit0 | FlagsEnum::Bit3), 2);
    assert_eq!(count_named(ZERO), 0);
    assert_eq!(count_named(FlagsEnum::from_bits(0xF)), 4);
}
