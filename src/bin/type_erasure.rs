//! Pattern: Type Erasure
//! Example: value-semantic wrapper over anything drawable
//!
//! Run with: cargo run --bin type_erasure

use anyhow::Context;
use colored::Colorize;
use design_patterns::drawing::GlDrawStrategy;
use design_patterns::type_erasure::drawable::{draw_all, Object};
use design_patterns::{logging, Cuboid, Cylinder, DemoConfig, Point, Sphere};

fn main() -> anyhow::Result<()> {
    logging::init(logging::verbose_requested());
    let config = DemoConfig::load().context("loading demo config")?;

    println!("{}", "=== Draw All Objects ===".bold());
    let objects = vec![
        Object::new(Sphere::new(1.0)),
        Object::with_strategy(Cuboid::new(0.1, 0.2, 0.3), GlDrawStrategy::new(config.color)),
        // Cylinder was never mentioned by Object, yet it fits right in.
        Object::new(Cylinder::at(0.15, Point::new(0.2, 0.3, 0.0))),
        Object::with_strategy(Cylinder::at(0.15, Point::new(0.2, 0.3, 0.0)), |c: &Cylinder| {
            format!(
                "This is a custom strategy for the cylinder (radius = {}, center = {})",
                c.radius(),
                c.center()
            )
        }),
    ];
    for line in draw_all(&objects) {
        println!("{}", line);
    }

    println!("\n{}", "=== Copies Are Independent ===".bold());
    let mut first = objects[0].clone();
    let copy = first.clone();
    first.clone_from(&objects[1]);
    println!("reassigned: {}", first.draw());
    println!("copy:       {}", copy.draw());

    Ok(())
}
