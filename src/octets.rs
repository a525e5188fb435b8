//! Integral shapes: fixed-width integers printed one byte per segment.
//!
//! The value is first reinterpreted as its unsigned twin of the same width,
//! then bytes are extracted most significant first with
//! `(repr >> (8 * i)) & 0xFF`. An N-byte integer therefore always produces
//! exactly N segments, each in `0..=255`, and the sign of the original value
//! never reaches the output:
//!
//! ```rust
//! assert_eq!(ipfmt::to_string(&-1i8).unwrap(), "255");
//! assert_eq!(ipfmt::to_string(&2130706433u32).unwrap(), "127.0.0.1");
//! ```

use crate::{Formatter, IpFormat, Result};
use std::mem;

macro_rules! integral_impls {
    ($($ty:ty => $unsigned:ty),+ $(,)?) => {
        $(
            impl IpFormat for $ty {
                fn format(&self, f: &mut Formatter) -> Result<()> {
                    // unsigned view: right shifts must zero-extend, even for
                    // negative inputs
                    let repr = *self as $unsigned;
                    for i in (0..mem::size_of::<$ty>()).rev() {
                        f.segment(&(((repr >> (8 * i)) & 0xFF) as u8))?;
                    }
                    Ok(())
                }
            }
        )+
    };
}

integral_impls! {
    i8 => u8,
    u8 => u8,
    i16 => u16,
    u16 => u16,
    i32 => u32,
    u32 => u32,
    i64 => u64,
    u64 => u64,
    i128 => u128,
    u128 => u128,
    isize => usize,
    usize => usize,
}
