//! Predicates and combinators over flag values.
//!
//! All of these take plain flag values only. A [`Complement`](crate::Complement)
//! has to be masked back with `&` (or complemented again) first.

use crate::bits::Bits;
use crate::flags::Flags;

/// Returns true if at least one bit is set.
///
/// ```
/// use nexus_flags::{any, flags, nth_bit};
///
/// #[flags]
/// #[repr(u8)]
/// enum Mode {
///     Read = nth_bit(0),
///     Write = nth_bit(1),
/// }
///
/// assert!(any(Mode::Read));
/// assert!(!any(Mode::Read & Mode::Write));
/// ```
///
/// A complement is rejected, since nearly every complement has some bit set:
///
/// ```compile_fail
/// use nexus_flags::{any, flags, nth_bit};
///
/// #[flags]
/// #[repr(u8)]
/// enum Mode {
///     Read = nth_bit(0),
///     Write = nth_bit(1),
/// }
///
/// let _ = any(!Mode::Read);
/// ```
#[inline]
#[must_use]
pub fn any<F: Flags>(flags: F) -> bool {
    flags.bits() != F::Bits::ZERO
}

/// Returns true if no bit is set.
///
/// ```compile_fail
/// use nexus_flags::{flags, none, nth_bit};
///
/// #[flags]
/// #[repr(u8)]
/// enum Mode {
///     Read = nth_bit(0),
///     Write = nth_bit(1),
/// }
///
/// let _ = none(!Mode::Write);
/// ```
#[inline]
#[must_use]
pub fn none<F: Flags>(flags: F) -> bool {
    flags.bits() == F::Bits::ZERO
}

/// Returns true if every bit of `subset` is also set in `superset`.
///
/// Not strict: `subseteq(x, x)` holds.
#[inline]
#[must_use]
pub fn subseteq<F: Flags>(subset: F, superset: F) -> bool {
    (subset.bits() & superset.bits()) == subset.bits()
}

/// Returns true if `subset` is a strict subset of `superset`.
///
/// ```
/// use nexus_flags::{flags, nth_bit, subset};
///
/// #[flags]
/// #[repr(u8)]
/// enum Mode {
///     Read = nth_bit(0),
///     Write = nth_bit(1),
/// }
///
/// assert!(subset(Mode::Read, Mode::Read | Mode::Write));
/// assert!(!subset(Mode::Read, Mode::Read));
/// ```
#[inline]
#[must_use]
pub fn subset<F: Flags>(subset: F, superset: F) -> bool {
    subseteq(subset, superset) && subset != superset
}

/// Returns true if `lhs` and `rhs` share at least one bit.
#[inline]
#[must_use]
pub fn intersect<F: Flags>(lhs: F, rhs: F) -> bool {
    (lhs.bits() & rhs.bits()) != F::Bits::ZERO
}

/// Returns true if `lhs` and `rhs` share no bit.
#[inline]
#[must_use]
pub fn disjoint<F: Flags>(lhs: F, rhs: F) -> bool {
    (lhs.bits() & rhs.bits()) == F::Bits::ZERO
}

/// Returns the empty value of the same type as `flags`.
#[inline]
#[must_use]
pub fn make_null<F: Flags>(flags: F) -> F {
    let _ = flags;
    F::empty()
}

/// Returns `flags` if `set`, the empty value otherwise.
#[inline]
#[must_use]
pub fn make_if<F: Flags>(flags: F, set: bool) -> F {
    if set { flags } else { F::empty() }
}

/// Returns `value` with the bits of `modification` added if `set`,
/// otherwise `value` unchanged.
///
/// Never clears bits.
///
/// ```
/// use nexus_flags::{flags, modify, nth_bit};
///
/// #[flags]
/// #[repr(u8)]
/// enum Mode {
///     Read = nth_bit(0),
///     Write = nth_bit(1),
/// }
///
/// assert_eq!(modify(Mode::Read, Mode::Write, true).bits(), 0x03);
/// assert_eq!(modify(Mode::Read, Mode::Write, false).bits(), 0x01);
/// ```
#[inline]
#[must_use]
pub fn modify<F: Flags>(value: F, modification: F, set: bool) -> F {
    if set {
        value | modification
    } else {
        value
    }
}

/// In-place [`modify`].
#[inline]
pub fn modify_inplace<F: Flags>(value: &mut F, modification: F, set: bool) {
    *value = modify(*value, modification, set);
}
