use core::ops::{BitAnd, BitOr, BitXor};

use crate::bits::Bits;

/// Opt-in marker for flag types.
///
/// Implementing `Flags` is what enables the bitwise operators and the
/// predicates in this crate for a type. Nothing is implemented for types
/// that don't opt in, so mixing e.g. permission bits with color bits fails
/// to compile instead of silently producing a number.
///
/// Usually implemented through [`#[flags]`](macro@crate::flags) or
/// [`impl_flags!`](crate::impl_flags), which also generate the operators.
/// The same-type `|`, `&` and `^` are supertraits, so generic code can
/// combine values directly. `!` is not: its result type depends on
/// whether the complement was disabled.
///
/// ```
/// use nexus_flags::{Flags, flags, nth_bit};
///
/// #[flags]
/// #[repr(u8)]
/// pub enum Permission {
///     Read = nth_bit(0),
///     Write = nth_bit(1),
///     Exec = nth_bit(2),
/// }
///
/// let rw = Permission::Read | Permission::Write;
/// assert_eq!(rw.bits(), 0b011);
/// assert_eq!(Permission::from_bits(0b100), Permission::Exec);
/// ```
pub trait Flags:
    Copy
    + Eq
    + BitOr<Output = Self>
    + BitAnd<Output = Self>
    + BitXor<Output = Self>
    + 'static
{
    /// The integer representation.
    type Bits: Bits;

    /// Named flags with their names, in declaration order.
    const NAMED: &'static [(&'static str, Self)] = &[];

    /// Underlying bit pattern.
    fn bits(self) -> Self::Bits;

    /// Reinterprets a bit pattern. Any pattern is a valid flag value.
    fn from_bits(bits: Self::Bits) -> Self;

    /// The value with no bits set.
    #[inline]
    fn empty() -> Self {
        Self::from_bits(Self::Bits::ZERO)
    }
}

/// A flag value or a complemented flag value.
///
/// Lets the orderings accept both `F` and [`Complement<F>`](crate::Complement)
/// (as long as both sides have the same type). Implemented for every opted-in
/// type by the generated code.
pub trait FlagsLike: Copy + Eq {
    /// The integer representation.
    type Bits: Bits;

    /// Stored bit pattern.
    fn to_bits(self) -> Self::Bits;
}

#[doc(hidden)]
pub mod probe {
    use core::marker::PhantomData;

    use super::Flags;

    pub struct Probe<T: ?Sized>(PhantomData<T>);

    impl<T: ?Sized> Probe<T> {
        pub const fn new() -> Self {
            Self(PhantomData)
        }
    }

    pub trait Enabled {
        #[inline]
        fn is_flags_enabled(&self) -> bool {
            true
        }
    }

    impl<T: Flags> Enabled for Probe<T> {}

    pub trait Disabled {
        #[inline]
        fn is_flags_enabled(&self) -> bool {
            false
        }
    }

    impl<T: ?Sized> Disabled for &Probe<T> {}
}

/// Evaluates to `true` if the given concrete type opted into flag
/// operations, `false` otherwise.
///
/// ```
/// use nexus_flags::{flags, is_flags_enabled, nth_bit};
///
/// #[flags]
/// #[repr(u8)]
/// enum Topping {
///     Tomato = nth_bit(0),
///     Cheese = nth_bit(1),
/// }
///
/// #[derive(Clone, Copy, PartialEq, Eq)]
/// #[repr(u8)]
/// enum Color {
///     Red = 1,
///     Green = 2,
/// }
///
/// assert!(is_flags_enabled!(Topping));
/// assert!(!is_flags_enabled!(Color));
/// assert!(!is_flags_enabled!(u8));
/// ```
///
/// Only meaningful for concrete types: inside a generic function the
/// answer is decided by the function's bounds, not by the caller's type.
#[macro_export]
macro_rules! is_flags_enabled {
    ($ty:ty) => {{
        #[allow(unused_imports)]
        use $crate::__private::probe::{Disabled as _, Enabled as _};
        (&$crate::__private::probe::Probe::<$ty>::new()).is_flags_enabled()
    }};
}
