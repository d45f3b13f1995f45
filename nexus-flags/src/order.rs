//! Orderings for flag values.
//!
//! Flag types get no relational operators by default, `a < b` doesn't
//! compile. These functions make the intended order explicit; `#[flags]`
//! can also wire them into `PartialOrd` / `Ord`.

use core::cmp::Ordering;

use crate::flags::FlagsLike;

/// Subset-induced partial order.
///
/// `Equal` if both are the same, `Less` if `lhs` is a strict subset of
/// `rhs`, `Greater` if `rhs` is a strict subset of `lhs`, `None` if neither
/// contains the other.
///
/// ```
/// use core::cmp::Ordering;
/// use nexus_flags::{flags, nth_bit, partial_order};
///
/// #[flags]
/// #[repr(u8)]
/// enum Mode {
///     Read = nth_bit(0),
///     Write = nth_bit(1),
/// }
///
/// let rw = Mode::Read | Mode::Write;
/// assert_eq!(partial_order(Mode::Read, rw), Some(Ordering::Less));
/// assert_eq!(partial_order(rw, Mode::Write), Some(Ordering::Greater));
/// assert_eq!(partial_order(Mode::Read, Mode::Write), None);
/// ```
#[inline]
#[must_use]
pub fn partial_order<T: FlagsLike>(lhs: T, rhs: T) -> Option<Ordering> {
    let (l, r) = (lhs.to_bits(), rhs.to_bits());
    let common = l & r;
    if l == r {
        Some(Ordering::Equal)
    } else if common == l {
        Some(Ordering::Less)
    } else if common == r {
        Some(Ordering::Greater)
    } else {
        None
    }
}

/// Total order on the underlying bits.
///
/// Has nothing to do with set inclusion; meant for ordered collections
/// keyed by flag values.
#[inline]
#[must_use]
pub fn total_order<T: FlagsLike>(lhs: T, rhs: T) -> Ordering {
    lhs.to_bits().cmp(&rhs.to_bits())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Complement;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    struct Raw(u8);

    crate::impl_flags!(Raw: u8 []);

    #[test]
    fn partial_order_on_complements() {
        let a = Complement::of(Raw(0b0011));
        let b = Complement::of(Raw(0b0001));
        // !0b0011 is contained in !0b0001
        assert_eq!(partial_order(a, b), Some(Ordering::Less));
        assert_eq!(partial_order(b, a), Some(Ordering::Greater));
        assert_eq!(partial_order(a, a), Some(Ordering::Equal));
    }

    #[test]
    fn total_order_follows_bits() {
        assert_eq!(total_order(Raw(1), Raw(2)), Ordering::Less);
        assert_eq!(total_order(Raw(3), Raw(2)), Ordering::Greater);
        assert_eq!(total_order(Raw(1), Raw(1)), Ordering::Equal);
    }
}
