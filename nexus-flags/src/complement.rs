//! The result type of `!flags`.

use core::fmt;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::flags::{Flags, FlagsLike};

/// A complemented flag value.
///
/// `!flags` produces a `Complement<F>` rather than an `F`. The complement
/// covers the full width of the representation, so it usually has bits set
/// that no named flag uses; that is why [`any`](crate::any) and
/// [`none`](crate::none) don't accept it. Masking it back with `&` yields a
/// plain `F` again:
///
/// ```
/// use nexus_flags::{Complement, flags, nth_bit};
///
/// #[flags]
/// #[repr(u8)]
/// enum Topping {
///     Tomato = nth_bit(0),
///     Cheese = nth_bit(1),
///     Salami = nth_bit(2),
/// }
///
/// let pizza = Topping::Tomato | Topping::Cheese | Topping::Salami;
/// let no_salami: Complement<Topping> = !Topping::Salami;
/// let veggie: Topping = pizza & no_salami;
///
/// assert_eq!(veggie, Topping::Tomato | Topping::Cheese);
/// assert_eq!(no_salami.bits(), 0b1111_1011);
/// assert_eq!(!no_salami, Topping::Salami);
/// ```
///
/// Results of mixed operations stay in whichever algebra they belong to:
///
/// | op  | `F, F` | `F, C` | `C, F` | `C, C` |
/// |-----|--------|--------|--------|--------|
/// | `&` | `F`    | `F`    | `F`    | `C`    |
/// | `\|`| `F`    | `C`    | `C`    | `C`    |
/// | `^` | `F`    | `C`    | `C`    | `F`    |
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Complement<F>(F);

impl<F: Flags> Complement<F> {
    /// Complements `flags` across the full width of its representation.
    #[inline]
    #[must_use]
    pub fn of(flags: F) -> Self {
        Self(F::from_bits(!flags.bits()))
    }

    /// Reinterprets an already complemented bit pattern.
    #[inline]
    #[must_use]
    pub fn from_bits(bits: F::Bits) -> Self {
        Self(F::from_bits(bits))
    }

    /// Stored (complemented) bit pattern.
    #[inline]
    #[must_use]
    pub fn bits(self) -> F::Bits {
        self.0.bits()
    }

    /// Complements back, same as `!self`.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> F {
        F::from_bits(!self.bits())
    }
}

impl<F: Flags> FlagsLike for Complement<F> {
    type Bits = F::Bits;

    #[inline]
    fn to_bits(self) -> F::Bits {
        self.bits()
    }
}

/// Compares stored bit patterns: `!a == b` holds when `b` has exactly the
/// bits `a` lacks.
impl<F: Flags> PartialEq<F> for Complement<F> {
    #[inline]
    fn eq(&self, other: &F) -> bool {
        self.bits() == other.bits()
    }
}

impl<F: Flags + fmt::Debug> fmt::Debug for Complement<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("!")?;
        fmt::Debug::fmt(&self.into_inner(), f)
    }
}

impl<F: Flags> fmt::Binary for Complement<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.bits(), f)
    }
}

impl<F: Flags> fmt::LowerHex for Complement<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.bits(), f)
    }
}

impl<F: Flags> fmt::UpperHex for Complement<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.bits(), f)
    }
}

// =============================================================================
// Complement on the left. `F` on the left lives in the generated code.
// =============================================================================

impl<F: Flags> Not for Complement<F> {
    type Output = F;

    #[inline]
    fn not(self) -> F {
        self.into_inner()
    }
}

impl<F: Flags> BitAnd<F> for Complement<F> {
    type Output = F;

    #[inline]
    fn bitand(self, rhs: F) -> F {
        F::from_bits(self.bits() & rhs.bits())
    }
}

impl<F: Flags> BitAnd for Complement<F> {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self::from_bits(self.bits() & rhs.bits())
    }
}

impl<F: Flags> BitOr<F> for Complement<F> {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: F) -> Self {
        Self::from_bits(self.bits() | rhs.bits())
    }
}

impl<F: Flags> BitOr for Complement<F> {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self::from_bits(self.bits() | rhs.bits())
    }
}

impl<F: Flags> BitXor<F> for Complement<F> {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: F) -> Self {
        Self::from_bits(self.bits() ^ rhs.bits())
    }
}

impl<F: Flags> BitXor for Complement<F> {
    type Output = F;

    #[inline]
    fn bitxor(self, rhs: Self) -> F {
        F::from_bits(self.bits() ^ rhs.bits())
    }
}

// Compound assignment only where the result stays a complement.

impl<F: Flags> BitAndAssign for Complement<F> {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl<F: Flags> BitOrAssign<F> for Complement<F> {
    #[inline]
    fn bitor_assign(&mut self, rhs: F) {
        *self = *self | rhs;
    }
}

impl<F: Flags> BitOrAssign for Complement<F> {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl<F: Flags> BitXorAssign<F> for Complement<F> {
    #[inline]
    fn bitxor_assign(&mut self, rhs: F) {
        *self = *self ^ rhs;
    }
}
