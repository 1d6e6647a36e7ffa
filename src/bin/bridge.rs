//! Pattern: Bridge
//! Example: a moving object and its pluggable mover
//!
//! Run with: cargo run --bin bridge

use anyhow::Context;
use colored::Colorize;
use design_patterns::bridge::{MovingObject, ScaledMover};
use design_patterns::{logging, DemoConfig};

fn main() -> anyhow::Result<()> {
    logging::init(logging::verbose_requested());
    let config = DemoConfig::load().context("loading demo config")?;

    println!("{}", "=== Simple Mover ===".bold());
    let mut obj = MovingObject::new();
    println!("{}", obj.where_am_i());
    println!("{}", obj.move_once());
    println!("{}", obj.where_am_i());

    println!("\n{}", "=== Swapping the Implementation ===".bold());
    let mut scaled = MovingObject::with_mover(Box::new(ScaledMover::new(config.step)));
    println!("{}", scaled.where_am_i());
    println!("{}", scaled.move_once());
    println!("{}", scaled.where_am_i());

    Ok(())
}
