//! Pattern: Decorator (compile-time facets)
//! Example: fixed-size vectors with x/y/z accessors
//!
//! Run with: cargo run --bin vector_facets

use colored::Colorize;
use design_patterns::logging;
use design_patterns::vector::{dot, length, AxisX, AxisY, DoubleVec, Vector};

fn main() {
    logging::init(logging::verbose_requested());

    println!("{}", "=== Axis Accessors ===".bold());
    let xyz = Vector::new([0.5, 1.5, 2.5]);
    println!("{}", xyz.x());

    let xy = Vector::new([0.5, 1.5]);
    println!("{}", xy.y());
    // xy.z() would not build: a 2-vector has no third component

    println!("\n{}", "=== Vector Functions ===".bold());
    let myvec = Vector::new([0.0, 1.0, 2.0]);
    let myind = Vector::new([2, 3, 4]);
    println!("{}", myvec);
    println!("{}", myind);

    let myvec2 = Vector::new([1.0, 2.0, 3.0]);
    println!("{}", dot(&myvec, &myvec2));
    println!("{}", length(&myvec2));

    println!("\n{}", "=== DoubleVec ===".bold());
    let double = DoubleVec::new(-1.0, -2.0, -3.0);
    println!("{}", double);
    println!("{}", double.dot(&double));
}
