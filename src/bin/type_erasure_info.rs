//! Pattern: Type Erasure
//! Example: value-semantic wrapper over anything that describes itself
//!
//! Run with: cargo run --bin type_erasure_info

use colored::Colorize;
use design_patterns::type_erasure::info::{all_info, Object};
use design_patterns::{logging, Cuboid, Point, Sphere};

fn main() {
    logging::init(logging::verbose_requested());

    println!("{}", "=== All Info ===".bold());
    let objects = vec![
        Object::new(Sphere::new(1.0)),
        Object::new(Cuboid::new(0.1, 0.2, 0.3)),
        Object::new(Sphere::at(2.5, Point::new(1.0, 2.0, 3.0))),
    ];
    for line in all_info(&objects) {
        println!("{}", line);
    }
}
