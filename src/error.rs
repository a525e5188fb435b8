//! Error types for dotted formatting.
//!
//! Shape misuse (an unsupported container, a tuple mixing element types) is
//! not represented here at all: it has no impl of
//! [`IpFormat`](crate::IpFormat) and is rejected by the compiler. The
//! variants below cover the only two edges that can fail once a call site
//! compiles: a segment's `Display` impl reporting an error, and the sink
//! write performed by [`to_writer`](crate::to_writer) and
//! [`print`](crate::print).

use std::{fmt, io};
use thiserror::Error;

/// Errors that can occur while rendering or writing a formatted address.
#[derive(Debug, Error)]
pub enum Error {
    /// A segment's `Display` implementation returned an error.
    #[error("formatting a segment failed: {0}")]
    Fmt(#[from] fmt::Error),

    /// Writing the finished line to the output sink failed.
    #[error("failed to write formatted address: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
