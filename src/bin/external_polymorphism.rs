//! Pattern: External Polymorphism
//! Example: unrelated shapes described through an adapter
//!
//! Run with: cargo run --bin external_polymorphism

use colored::Colorize;
use design_patterns::external_polymorphism::{all_info, make_object, Objects};
use design_patterns::{logging, Cuboid, Point, Sphere};

fn main() {
    logging::init(logging::verbose_requested());

    println!("{}", "=== All Info ===".bold());
    let objects: Objects = vec![
        make_object(Sphere::new(1.0)),
        make_object(Cuboid::at(0.1, 0.2, 0.3, Point::ORIGIN)),
    ];

    for line in all_info(&objects) {
        println!("{}", line);
    }
}
