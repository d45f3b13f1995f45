use core::fmt;

use crate::bits::Bits;
use crate::flags::Flags;

/// Writes `name(A | B | 0x80)`: the named flags contained in `flags`,
/// followed by any bits no named flag covers. The empty value is written
/// as `name(empty)`.
///
/// This is what the `Debug` impl generated by `#[flags]` calls.
///
/// ```
/// use nexus_flags::{flags, nth_bit};
///
/// #[flags]
/// #[repr(u8)]
/// enum Mode {
///     Read = nth_bit(0),
///     Write = nth_bit(1),
/// }
///
/// assert_eq!(format!("{:?}", Mode::Read | Mode::Write), "Mode(Read | Write)");
/// assert_eq!(format!("{:?}", Mode::from_bits(0x81)), "Mode(Read | 0x80)");
/// assert_eq!(format!("{:?}", Mode::empty()), "Mode(empty)");
/// assert_eq!(format!("{:?}", !Mode::Write), "!Mode(Write)");
/// ```
pub fn debug_flags<F: Flags>(f: &mut fmt::Formatter<'_>, name: &str, flags: F) -> fmt::Result {
    let bits = flags.bits();
    write!(f, "{name}(")?;

    if bits == F::Bits::ZERO {
        f.write_str("empty")?;
        return f.write_str(")");
    }

    let mut remaining = bits;
    let mut first = true;
    for (flag_name, flag) in F::NAMED {
        let flag_bits = flag.bits();
        if flag_bits == F::Bits::ZERO || (bits & flag_bits) != flag_bits {
            continue;
        }
        if !first {
            f.write_str(" | ")?;
        }
        first = false;
        f.write_str(flag_name)?;
        remaining = remaining & !flag_bits;
    }

    if remaining != F::Bits::ZERO {
        if !first {
            f.write_str(" | ")?;
        }
        write!(f, "{remaining:#x}")?;
    }

    f.write_str(")")
}
