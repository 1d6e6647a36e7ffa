//! Pattern: Decorator
//! Example: run-time decorator chain over trait objects
//!
//! Run with: cargo run --bin decorator_dynamic

use anyhow::Context;
use colored::Colorize;
use design_patterns::decorator::dynamic::{boxed, Coffee, Item, Milk, Tax};
use design_patterns::{logging, DemoConfig, Money};

fn main() -> anyhow::Result<()> {
    logging::init(logging::verbose_requested());
    let config = DemoConfig::load().context("loading demo config")?;

    println!("{}", "=== Tax(Milk(Coffee)) ===".bold());
    let milk = Milk::with_surcharge(
        boxed(Coffee::new("Espresso", Money::from_units(1.0))),
        Money::from_units(config.milk_surcharge),
    )?;
    let espresso: Box<dyn Item> = Box::new(Tax::new(config.tax_rate, boxed(milk))?);
    println!("Espresso: {}", espresso.price());

    println!("\n{}", "=== Missing Item ===".bold());
    match Milk::new(None) {
        Ok(_) => println!("unexpectedly built a decorator around nothing"),
        Err(err) => println!("{}", err.to_string().red()),
    }

    Ok(())
}
