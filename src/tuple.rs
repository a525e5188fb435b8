//! Tuple shapes: fixed-arity tuples with one shared element type.
//!
//! Every position of the tuple type is instantiated with the same type
//! parameter, so homogeneity is settled during trait resolution; a tuple
//! mixing element types has no impl and never reaches run time:
//!
//! ```compile_fail
//! // element types must all be identical
//! let _ = ipfmt::to_string(&(127u8, 0u16, 0u8, 1u8));
//! ```
//!
//! Positions are visited through an unrolled `self.0 .. self.N` access
//! sequence, one impl per arity up to 12. The empty tuple is supported and
//! produces an empty line.

use crate::{Formatter, IpFormat, Result};
use std::fmt::Display;

impl IpFormat for () {
    fn format(&self, _f: &mut Formatter) -> Result<()> {
        Ok(())
    }
}

macro_rules! element_type {
    ($idx:tt, $ty:ty) => {
        $ty
    };
}

macro_rules! tuple_impls {
    ($(($($idx:tt)+))+) => {
        $(
            impl<T: Display> IpFormat for ($(element_type!($idx, T),)+) {
                fn format(&self, f: &mut Formatter) -> Result<()> {
                    $(
                        f.segment(&self.$idx)?;
                    )+
                    Ok(())
                }
            }
        )+
    };
}

tuple_impls! {
    (0)
    (0 1)
    (0 1 2)
    (0 1 2 3)
    (0 1 2 3 4)
    (0 1 2 3 4 5)
    (0 1 2 3 4 5 6)
    (0 1 2 3 4 5 6 7)
    (0 1 2 3 4 5 6 7 8)
    (0 1 2 3 4 5 6 7 8 9)
    (0 1 2 3 4 5 6 7 8 9 10)
    (0 1 2 3 4 5 6 7 8 9 10 11)
}
