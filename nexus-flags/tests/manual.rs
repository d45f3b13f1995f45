//! Hand-written newtypes opted in through `impl_flags!`.

use nexus_flags::{
    Complement, Flags, any, flags, impl_flags, intersect, is_flags_enabled, none, nth_bit,
    partial_order, subset, total_order,
};
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Perm(u16);

impl Perm {
    pub const READ: Self = Self(nth_bit(0) as u16);
    pub const WRITE: Self = Self(nth_bit(1) as u16);
    pub const EXEC: Self = Self(nth_bit(2) as u16);
}

impl_flags!(Perm: u16 [READ, WRITE, EXEC]);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lanes(u64);

impl Lanes {
    pub const LEFT: Self = Self(1 << 0);
    pub const RIGHT: Self = Self(1 << 63);
}

impl_flags!(Lanes: u64 [LEFT, RIGHT,], disable_complement);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Unnamed(u8);

impl_flags!(Unnamed: u8 []);

#[flags]
#[repr(u8)]
pub enum Derived {
    One = nth_bit(0),
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct NotOptedIn(u8);

// =============================================================================
// impl_flags!
// =============================================================================

#[test]
fn manual_impl_operators() {
    let rw = Perm::READ | Perm::WRITE;

    assert_eq!(rw.0, 0b011);
    assert_eq!(rw & Perm::WRITE, Perm::WRITE);
    assert_eq!(rw ^ Perm::READ, Perm::WRITE);

    let not_write: Complement<Perm> = !Perm::WRITE;
    assert_eq!(rw & not_write, Perm::READ);
    assert_eq!(not_write.bits(), 0xFFFD);
}

#[test]
fn manual_impl_predicates() {
    let rw = Perm::READ | Perm::WRITE;

    assert!(any(rw));
    assert!(none(Perm::empty()));
    assert!(subset(Perm::READ, rw));
    assert!(!intersect(rw, Perm::EXEC));
}

#[test]
fn manual_impl_named_table() {
    let names: Vec<&str> = Perm::NAMED.iter().map(|(n, _)| *n).collect();
    assert_eq!(names, ["READ", "WRITE", "EXEC"]);

    assert!(Unnamed::NAMED.is_empty());
    assert_eq!(Unnamed::from_bits(7) | Unnamed(8), Unnamed(15));
}

#[test]
fn manual_impl_disable_complement() {
    let not_left: Lanes = !Lanes::LEFT;

    assert_eq!(not_left.0, u64::MAX - 1);
    assert_eq!(not_left & (Lanes::LEFT | Lanes::RIGHT), Lanes::RIGHT);
    assert!(any(!Lanes::LEFT));
}

#[test]
fn manual_impl_orderings() {
    let rw = Perm::READ | Perm::WRITE;

    assert_eq!(partial_order(Perm::READ, rw), Some(Ordering::Less));
    assert_eq!(partial_order(Perm::READ, Perm::EXEC), None);
    assert_eq!(partial_order(!rw, !Perm::READ), Some(Ordering::Less));
    assert_eq!(total_order(Perm::EXEC, rw), Ordering::Greater);
}

// =============================================================================
// is_flags_enabled!
// =============================================================================

#[test]
fn enabled_types() {
    assert!(is_flags_enabled!(Perm));
    assert!(is_flags_enabled!(Lanes));
    assert!(is_flags_enabled!(Unnamed));
    assert!(is_flags_enabled!(Derived));
}

#[test]
fn disabled_types() {
    assert!(!is_flags_enabled!(NotOptedIn));
    assert!(!is_flags_enabled!(u32));
    assert!(!is_flags_enabled!(Complement<Perm>));
    assert!(!is_flags_enabled!(&'static str));
}
