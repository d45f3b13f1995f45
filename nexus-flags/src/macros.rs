/// Opts a hand-written newtype into flag operations.
///
/// The type must be a tuple struct whose only field is the representation,
/// and must implement `Clone`, `Copy`, `PartialEq` and `Eq`. The listed
/// associated constants become [`Flags::NAMED`](crate::Flags::NAMED), which
/// [`debug_flags`](crate::debug_flags) reads.
///
/// ```
/// use nexus_flags::{Complement, any, impl_flags, nth_bit};
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// pub struct Perm(u16);
///
/// impl Perm {
///     pub const READ: Self = Self(nth_bit(0) as u16);
///     pub const WRITE: Self = Self(nth_bit(1) as u16);
/// }
///
/// impl_flags!(Perm: u16 [READ, WRITE]);
///
/// let rw = Perm::READ | Perm::WRITE;
/// let not_write: Complement<Perm> = !Perm::WRITE;
/// assert_eq!(rw & not_write, Perm::READ);
/// assert!(any(rw));
/// ```
///
/// Append `, disable_complement` to make `!` return the type itself
/// instead of a [`Complement`](crate::Complement).
#[macro_export]
macro_rules! impl_flags {
    (@flags $ty:ty : $repr:ty [$($name:ident),*]) => {
        impl $crate::Flags for $ty {
            type Bits = $repr;

            const NAMED: &'static [(&'static str, Self)] = &[
                $((::core::stringify!($name), <$ty>::$name)),*
            ];

            #[inline]
            fn bits(self) -> $repr {
                self.0
            }

            #[inline]
            fn from_bits(bits: $repr) -> Self {
                Self(bits)
            }
        }
    };
    ($ty:ty : $repr:ty [$($name:ident),* $(,)?]) => {
        $crate::impl_flags!(@flags $ty : $repr [$($name),*]);
        $crate::__impl_ops!($ty);
    };
    ($ty:ty : $repr:ty [$($name:ident),* $(,)?], disable_complement) => {
        $crate::impl_flags!(@flags $ty : $repr [$($name),*]);
        $crate::__impl_ops!($ty, disable_complement);
    };
}

/// Operator impls for an opted-in type. Shared by `impl_flags!` and
/// `#[flags]`; expects `$ty: Flags` to hold.
#[doc(hidden)]
#[macro_export]
macro_rules! __impl_ops {
    (@binary $ty:ty, $trait:ident, $method:ident, $assign:ident, $assign_method:ident, $op:tt) => {
        impl ::core::ops::$trait for $ty {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                <Self as $crate::Flags>::from_bits(
                    <Self as $crate::Flags>::bits(self) $op <Self as $crate::Flags>::bits(rhs),
                )
            }
        }

        impl ::core::ops::$assign for $ty {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = ::core::ops::$trait::$method(*self, rhs);
            }
        }
    };
    (@common $ty:ty) => {
        $crate::__impl_ops!(@binary $ty, BitOr, bitor, BitOrAssign, bitor_assign, |);
        $crate::__impl_ops!(@binary $ty, BitAnd, bitand, BitAndAssign, bitand_assign, &);
        $crate::__impl_ops!(@binary $ty, BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

        impl $crate::FlagsLike for $ty {
            type Bits = <Self as $crate::Flags>::Bits;

            #[inline]
            fn to_bits(self) -> <Self as $crate::Flags>::Bits {
                <Self as $crate::Flags>::bits(self)
            }
        }
    };
    ($ty:ty) => {
        $crate::__impl_ops!(@common $ty);

        impl ::core::ops::Not for $ty {
            type Output = $crate::Complement<Self>;

            #[inline]
            fn not(self) -> $crate::Complement<Self> {
                $crate::Complement::of(self)
            }
        }

        impl ::core::cmp::PartialEq<$crate::Complement<$ty>> for $ty {
            #[inline]
            fn eq(&self, other: &$crate::Complement<$ty>) -> bool {
                <Self as $crate::Flags>::bits(*self) == other.bits()
            }
        }

        impl ::core::ops::BitAnd<$crate::Complement<$ty>> for $ty {
            type Output = Self;

            #[inline]
            fn bitand(self, rhs: $crate::Complement<$ty>) -> Self {
                <Self as $crate::Flags>::from_bits(<Self as $crate::Flags>::bits(self) & rhs.bits())
            }
        }

        impl ::core::ops::BitAndAssign<$crate::Complement<$ty>> for $ty {
            #[inline]
            fn bitand_assign(&mut self, rhs: $crate::Complement<$ty>) {
                *self = *self & rhs;
            }
        }

        impl ::core::ops::BitOr<$crate::Complement<$ty>> for $ty {
            type Output = $crate::Complement<$ty>;

            #[inline]
            fn bitor(self, rhs: $crate::Complement<$ty>) -> $crate::Complement<$ty> {
                rhs | self
            }
        }

        impl ::core::ops::BitXor<$crate::Complement<$ty>> for $ty {
            type Output = $crate::Complement<$ty>;

            #[inline]
            fn bitxor(self, rhs: $crate::Complement<$ty>) -> $crate::Complement<$ty> {
                rhs ^ self
            }
        }
    };
    ($ty:ty, disable_complement) => {
        $crate::__impl_ops!(@common $ty);

        impl ::core::ops::Not for $ty {
            type Output = Self;

            #[inline]
            fn not(self) -> Self {
                <Self as $crate::Flags>::from_bits(!<Self as $crate::Flags>::bits(self))
            }
        }
    };
}
