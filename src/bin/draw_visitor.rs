//! Pattern: Visitor
//! Example: drawing and volume computation over a closed set of shapes
//!
//! Run with: cargo run --bin draw_visitor

use colored::Colorize;
use design_patterns::visitor::{draw_all, volumes, Shape};
use design_patterns::{logging, Cuboid, Point, Sphere};

fn main() {
    logging::init(logging::verbose_requested());

    let shapes: Vec<Shape> = vec![
        Sphere::new(1.0).into(),
        Cuboid::new(0.1, 0.2, 0.3).into(),
        Sphere::at(2.0, Point::new(0.5, 0.6, 0.7)).into(),
        Cuboid::at(0.1, 0.2, 0.3, Point::new(-0.5, -0.6, -0.7)).into(),
    ];

    println!("{}", "=== Draw Visitor ===".bold());
    for line in draw_all(&shapes) {
        println!("{}", line);
    }

    println!("\n{}", "=== Volume Visitor ===".bold());
    for volume in volumes(&shapes) {
        println!("The computed volume is : {}", volume);
    }
}
