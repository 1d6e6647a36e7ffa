//! Concepts: associative containers as a trait bound
//!
//! Run with: cargo run --bin associative_container

use std::collections::BTreeSet;

use design_patterns::concepts::{render, AddElement};
use design_patterns::logging;

fn main() {
    logging::init(logging::verbose_requested());

    let mut v: Vec<i32> = Vec::new();
    let mut s: BTreeSet<i32> = BTreeSet::new();

    for i in 0..10 {
        println!("{}", v.add_element(i));
        println!("{}", s.add_element(i));
    }

    println!("\n {}\n", render(&v));
    println!(" {}\n", render(&s));
}
