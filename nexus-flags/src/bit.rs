/// Returns a value with only bit `n` set (zero-indexed).
///
/// Meant for declaring named flags:
///
/// ```
/// use nexus_flags::nth_bit;
///
/// const READ: u8 = nth_bit(0) as u8;
/// const EXEC: u8 = nth_bit(2) as u8;
///
/// assert_eq!(READ, 0x01);
/// assert_eq!(EXEC, 0x04);
/// ```
///
/// `n` must be below the width of the representation the result ends up
/// in. The value is `u128`, so narrowing it to a smaller integer silently
/// drops bits past that width, and `n >= 128` overflows (a compile error in
/// const context). `#[flags]` rejects literal out-of-range indices.
#[inline]
#[must_use]
pub const fn nth_bit(n: u32) -> u128 {
    1 << n
}
