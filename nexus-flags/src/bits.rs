//! Integer representations that can back a flag type.

use core::fmt;
use core::hash::Hash;
use core::ops::{BitAnd, BitOr, BitXor, Not};

/// A fixed-width integer used as the storage of a flag type.
///
/// Implemented for every primitive integer. Complement (`!`) always covers
/// the full width, so bits that no named flag uses can end up set.
pub trait Bits:
    Copy
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Binary
    + fmt::LowerHex
    + fmt::UpperHex
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// No bits set.
    const ZERO: Self;

    /// All bits set.
    const ALL: Self;

    /// Width in bits.
    const BITS: u32;
}

macro_rules! impl_bits {
    ($($ty:ty),*) => {
        $(
            impl Bits for $ty {
                const ZERO: Self = 0;
                const ALL: Self = !0;
                const BITS: u32 = <$ty>::BITS;
            }
        )*
    };
}

impl_bits!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

#[cfg(test)]
mod tests {
    use super::*;

    fn complement<B: Bits>(b: B) -> B {
        !b
    }

    #[test]
    fn zero_and_all_are_complements() {
        assert_eq!(complement(u8::ZERO), u8::ALL);
        assert_eq!(complement(u64::ALL), u64::ZERO);
        assert_eq!(i16::ALL, -1);
    }

    #[test]
    fn width_matches_primitive() {
        assert_eq!(<u8 as Bits>::BITS, 8);
        assert_eq!(<i32 as Bits>::BITS, 32);
        assert_eq!(<u128 as Bits>::BITS, 128);
    }
}
