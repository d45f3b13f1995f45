//! Misuse of `#[flags]` that must be rejected at build time.
//!
//! Each snippet is otherwise valid, so it fails only on the error named
//! above it.
//!
//! Only enums:
//!
//! ```compile_fail
//! use nexus_flags::flags;
//!
//! #[flags]
//! #[repr(u8)]
//! struct Mode(u8);
//! ```
//!
//! Variants cannot carry fields:
//!
//! ```compile_fail
//! use nexus_flags::{flags, nth_bit};
//!
//! #[flags]
//! #[repr(u8)]
//! enum Mode {
//!     Read = nth_bit(0),
//!     Write(u8),
//! }
//! ```
//!
//! A repr is required:
//!
//! ```compile_fail
//! use nexus_flags::{flags, nth_bit};
//!
//! #[flags]
//! enum Mode {
//!     Read = nth_bit(0),
//! }
//! ```
//!
//! ... and it has to be an integer:
//!
//! ```compile_fail
//! use nexus_flags::{flags, nth_bit};
//!
//! #[flags]
//! #[repr(C)]
//! enum Mode {
//!     Read = nth_bit(0),
//! }
//! ```
//!
//! Every variant needs a value:
//!
//! ```compile_fail
//! use nexus_flags::{flags, nth_bit};
//!
//! #[flags]
//! #[repr(u8)]
//! enum Mode {
//!     Read = nth_bit(0),
//!     Write,
//! }
//! ```
//!
//! Bit index past the repr width, with `nth_bit`:
//!
//! ```compile_fail
//! use nexus_flags::{flags, nth_bit};
//!
//! #[flags]
//! #[repr(u8)]
//! enum Mode {
//!     Read = nth_bit(8),
//! }
//! ```
//!
//! ... and with a shift:
//!
//! ```compile_fail
//! use nexus_flags::flags;
//!
//! #[flags]
//! #[repr(u16)]
//! enum Mode {
//!     Read = 1 << 16,
//! }
//! ```
//!
//! ... and inside a combined value:
//!
//! ```compile_fail
//! use nexus_flags::{flags, nth_bit};
//!
//! #[flags]
//! #[repr(u8)]
//! enum Mode {
//!     Mixed = nth_bit(3) | nth_bit(9),
//! }
//! ```
//!
//! Literal that does not fit:
//!
//! ```compile_fail
//! use nexus_flags::flags;
//!
//! #[flags]
//! #[repr(u8)]
//! enum Mode {
//!     Read = 256,
//! }
//! ```
//!
//! Unknown option:
//!
//! ```compile_fail
//! use nexus_flags::{flags, nth_bit};
//!
//! #[flags(sorted)]
//! #[repr(u8)]
//! enum Mode {
//!     Read = nth_bit(0),
//! }
//! ```
//!
//! `partial_ord` and `ord` are exclusive:
//!
//! ```compile_fail
//! use nexus_flags::{flags, nth_bit};
//!
//! #[flags(partial_ord, ord)]
//! #[repr(u8)]
//! enum Mode {
//!     Read = nth_bit(0),
//! }
//! ```
//!
//! The same declarations with the mistakes removed compile:
//!
//! ```
//! use nexus_flags::{flags, nth_bit};
//!
//! #[flags(partial_ord)]
//! #[repr(u8)]
//! enum Mode {
//!     Read = nth_bit(0),
//!     Write = 1 << 7,
//!     Mixed = nth_bit(3) | nth_bit(6),
//!     All = 255,
//! }
//!
//! assert_eq!(Mode::Mixed.bits(), 0x48);
//! ```
