//! Pattern: Strategy
//! Example: shapes drawn by an injected GL strategy
//!
//! Run with: cargo run --bin draw_strategy

use anyhow::Context;
use colored::Colorize;
use design_patterns::strategy::{draw_all, gl_strategy, DrawStrategy, Drawable, StrategyBox, StrategySphere};
use design_patterns::{logging, Color, DemoConfig, Point};

fn main() -> anyhow::Result<()> {
    logging::init(logging::verbose_requested());
    let config = DemoConfig::load().context("loading demo config")?;

    println!("{}", "=== GL Strategies ===".bold());
    let objects: Vec<Box<dyn Drawable>> = vec![
        Box::new(StrategySphere::new(1.0, Point::ORIGIN, gl_strategy(Color::Red))?),
        Box::new(StrategyBox::new(0.1, 0.2, 0.3, Point::ORIGIN, gl_strategy(config.color))?),
    ];
    for line in draw_all(&objects) {
        println!("{}", line);
    }

    println!("\n{}", "=== Empty Strategy ===".bold());
    match StrategySphere::new(1.0, Point::ORIGIN, DrawStrategy::empty()) {
        Ok(_) => println!("unexpectedly built a sphere without a strategy"),
        Err(err) => println!("{}", err.to_string().red()),
    }

    Ok(())
}
