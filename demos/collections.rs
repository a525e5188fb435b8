//! Sequence and tuple shapes: vectors, linked lists, deques, arrays, and
//! homogeneous tuples all format the same way.
//!
//! Run with: cargo run --example collections

use std::collections::{LinkedList, VecDeque};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let vector = vec![192, 168, 0, 1];
    ipfmt::print(&vector)?; // 192.168.0.1

    let list: LinkedList<u8> = [10, 0, 0, 1].into_iter().collect();
    ipfmt::print(&list)?; // 10.0.0.1

    let deque: VecDeque<u8> = [172, 16, 254, 1].into_iter().collect();
    ipfmt::print(&deque)?; // 172.16.254.1

    let array = [8u8, 8, 8, 8];
    ipfmt::print(&array)?; // 8.8.8.8

    let quad = (127, 0, 0, 1);
    ipfmt::print(&quad)?; // 127.0.0.1

    // sequence elements keep their own representation
    let words = vec!["2001", "db8", "0", "1"];
    ipfmt::print(&words)?; // 2001.db8.0.1

    Ok(())
}
