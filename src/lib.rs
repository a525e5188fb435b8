//! # ipfmt
//!
//! Formatting of IP-style dotted representations, dispatched at compile time
//! on the shape of the argument.
//!
//! ## What it does
//!
//! One operation — "format this value as a dotted line" — with four mutually
//! exclusive variants chosen by trait resolution, never by a runtime branch:
//!
//! - **Text** (`str`, `String`): emitted verbatim
//! - **Integral** (any fixed-width integer): one decimal segment per byte,
//!   most significant byte first, so a four-byte integer comes out as the
//!   familiar dotted quad
//! - **Sequence** (`Vec`, slices, arrays, `VecDeque`, `LinkedList`): each
//!   element's `Display`, in iteration order
//! - **Tuple** (up to 12 positions, all one type): each position's
//!   `Display`, in positional order
//!
//! Anything outside those shapes fails to build. There is no runtime error
//! path for misuse and no validation: the caller already holds a value in a
//! supported shape, and the type system has proven it.
//!
//! ## Quick start
//!
//! ```rust
//! use ipfmt::to_string;
//!
//! assert_eq!(to_string(&-1i8).unwrap(), "255");
//! assert_eq!(to_string(&2130706433i32).unwrap(), "127.0.0.1");
//! assert_eq!(to_string("127.0.0.1").unwrap(), "127.0.0.1");
//! assert_eq!(to_string(&vec![10, 0, 0, 1]).unwrap(), "10.0.0.1");
//! assert_eq!(to_string(&(192, 168, 0, 1)).unwrap(), "192.168.0.1");
//! ```
//!
//! Printing goes through [`print`], which writes the line and its trailing
//! newline to stdout in a single write:
//!
//! ```rust,no_run
//! ipfmt::print(&2130706433u32)?; // 127.0.0.1
//! # Ok::<(), ipfmt::Error>(())
//! ```
//!
//! ## Compile-time rejection
//!
//! A shape outside the four families — including a tuple whose positions
//! disagree on their element type — is a build error, not a runtime one:
//!
//! ```compile_fail
//! let _ = ipfmt::to_string(&(127u8, 1u16));
//! ```
//!
//! ## Concurrency
//!
//! Formatting is pure and touches no shared state. [`to_writer`] and
//! [`print`] render the whole line into a private buffer first and hand it
//! to the sink as one `write_all`, so lines from concurrent callers never
//! interleave mid-line.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`print_ip.rs`** - the classic five-call driver (integers of each
//!   width plus a literal address string)
//! - **`collections.rs`** - sequence and tuple shapes
//!
//! Run any demo with: `cargo run --example <name>`

pub mod error;
pub mod fmt;

mod octets;
mod seq;
mod tuple;

pub use error::{Error, Result};
pub use fmt::{Formatter, IpFormat};

use std::io;

/// Formats `value` as a dotted line, without a trailing newline.
///
/// # Examples
///
/// ```rust
/// let line = ipfmt::to_string(&0x7F000001u32).unwrap();
/// assert_eq!(line, "127.0.0.1");
/// ```
///
/// # Errors
///
/// Returns an error if a segment's `Display` impl fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + IpFormat,
{
    let mut f = Formatter::new();
    value.format(&mut f)?;
    Ok(f.into_inner())
}

/// Formats `value` and writes it to `writer` as one line, newline included.
///
/// The line is rendered into a private buffer and flushed with a single
/// `write_all`, so concurrent callers sharing a sink get whole lines.
///
/// # Examples
///
/// ```rust
/// let mut buffer = Vec::new();
/// ipfmt::to_writer(&mut buffer, &vec![10, 8, 0, 1]).unwrap();
/// assert_eq!(buffer, b"10.8.0.1\n");
/// ```
///
/// # Errors
///
/// Returns an error if formatting fails or the write fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + IpFormat,
{
    let mut line = to_string(value)?;
    line.push('\n');
    writer.write_all(line.as_bytes())?;
    Ok(())
}

/// Formats `value` and prints it to stdout as one line, newline included.
///
/// # Errors
///
/// Returns an error if formatting fails or writing to stdout fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn print<T>(value: &T) -> Result<()>
where
    T: ?Sized + IpFormat,
{
    to_writer(io::stdout().lock(), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_scenarios() {
        assert_eq!(to_string(&-1i8).unwrap(), "255");
        assert_eq!(to_string(&0i16).unwrap(), "0.0");
        assert_eq!(to_string(&2130706433i32).unwrap(), "127.0.0.1");
        assert_eq!(
            to_string(&8875824491850138409i64).unwrap(),
            "123.45.67.89.101.112.131.41"
        );
        assert_eq!(to_string("127.0.0.1").unwrap(), "127.0.0.1");
    }

    #[test]
    fn writer_appends_exactly_one_newline() {
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &0u8).unwrap();
        assert_eq!(buffer, b"0\n");
    }

    #[test]
    fn empty_shapes_write_bare_newline() {
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &Vec::<u8>::new()).unwrap();
        to_writer(&mut buffer, &()).unwrap();
        assert_eq!(buffer, b"\n\n");
    }

    #[test]
    fn formatting_is_idempotent() {
        let value = 8875824491850138409u64;
        assert_eq!(to_string(&value).unwrap(), to_string(&value).unwrap());
    }
}
