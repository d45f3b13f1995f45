//! Type-safe bitwise operators for flag-like enums.
//!
//! `nexus-flags` gives `|`, `&`, `^` and `!` to enums whose variants are
//! single bits, plus a handful of set predicates, without letting unrelated
//! enums (or plain integers) take part. Types opt in explicitly; anything
//! else fails to compile.
//!
//! # Example
//!
//! ```
//! use nexus_flags::{any, flags, modify, nth_bit, subset};
//!
//! #[flags]
//! #[repr(u32)]
//! pub enum Topping {
//!     Tomato = nth_bit(0),
//!     Cheese = nth_bit(1),
//!     Salami = nth_bit(2),
//!     Olives = nth_bit(3),
//! }
//!
//! let mut pizza = Topping::Tomato | Topping::Cheese;
//! pizza |= Topping::Salami | Topping::Olives;
//!
//! let veggie = pizza & !Topping::Salami;
//! assert!(subset(veggie, pizza));
//! assert!(any(veggie & Topping::Olives));
//!
//! let extra = modify(veggie, Topping::Salami, false);
//! assert_eq!(extra, veggie);
//! ```
//!
//! # Compile-time rejection
//!
//! Types that did not opt in get nothing:
//!
//! ```compile_fail
//! use nexus_flags::any;
//!
//! #[derive(Clone, Copy, PartialEq, Eq)]
//! #[repr(u8)]
//! enum Color {
//!     Red = 1,
//!     Green = 2,
//! }
//!
//! let _ = any(Color::Red);
//! ```
//!
//! ```compile_fail
//! #[derive(Clone, Copy, PartialEq, Eq)]
//! #[repr(u8)]
//! enum Color {
//!     Red = 1,
//!     Green = 2,
//! }
//!
//! let _ = Color::Red | Color::Green;
//! ```
//!
//! Two opted-in types don't mix:
//!
//! ```compile_fail
//! use nexus_flags::{flags, nth_bit};
//!
//! #[flags]
//! #[repr(u8)]
//! enum Topping {
//!     Tomato = nth_bit(0),
//! }
//!
//! #[flags]
//! #[repr(u8)]
//! enum Flavour {
//!     Vanilla = nth_bit(0),
//! }
//!
//! let _ = Topping::Tomato | Flavour::Vanilla;
//! ```
//!
//! A complement is not a flag value, so it can't be stored back into one:
//!
//! ```compile_fail
//! use nexus_flags::{flags, nth_bit};
//!
//! #[flags]
//! #[repr(u8)]
//! enum Topping {
//!     Tomato = nth_bit(0),
//!     Olives = nth_bit(1),
//! }
//!
//! let mut pizza = Topping::Tomato;
//! pizza |= !Topping::Olives;
//! ```
//!
//! Relational operators are only there when asked for (see `#[flags(ord)]`):
//!
//! ```compile_fail
//! use nexus_flags::{flags, nth_bit};
//!
//! #[flags]
//! #[repr(u8)]
//! enum Topping {
//!     Tomato = nth_bit(0),
//!     Olives = nth_bit(1),
//! }
//!
//! let _ = Topping::Tomato < Topping::Olives;
//! ```

#![no_std]
#![warn(missing_docs)]

#[cfg(all(doctest, feature = "derive"))]
mod attribute_errors;
mod bit;
mod bits;
mod complement;
mod flags;
mod fmt;
mod macros;
mod ops;
mod order;

pub use bit::nth_bit;
pub use bits::Bits;
pub use complement::Complement;
pub use flags::{Flags, FlagsLike};
pub use fmt::debug_flags;
pub use ops::{
    any, disjoint, intersect, make_if, make_null, modify, modify_inplace, none, subset, subseteq,
};
pub use order::{partial_order, total_order};

#[cfg(feature = "derive")]
pub use nexus_flags_derive::flags;

#[doc(hidden)]
pub mod __private {
    pub use crate::flags::probe;
}
