//! The classic five-call driver: one integer of each width plus a literal
//! address string, one line of output per call.
//!
//! Run with: cargo run --example print_ip

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    ipfmt::print(&-1i8)?; // 255
    ipfmt::print(&0i16)?; // 0.0
    ipfmt::print(&2130706433i32)?; // 127.0.0.1
    ipfmt::print(&8875824491850138409i64)?; // 123.45.67.89.101.112.131.41
    ipfmt::print("127.0.0.1")?; // 127.0.0.1

    Ok(())
}
