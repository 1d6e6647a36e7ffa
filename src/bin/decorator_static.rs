//! Pattern: Decorator
//! Example: compile-time decorator chain with generic wrappers
//!
//! Run with: cargo run --bin decorator_static

use anyhow::Context;
use colored::Colorize;
use design_patterns::decorator::stacked::{receipt_line, Coffee, Item, Milk, Tax};
use design_patterns::{logging, DemoConfig, Money};

fn main() -> anyhow::Result<()> {
    logging::init(logging::verbose_requested());
    let config = DemoConfig::load().context("loading demo config")?;

    println!("{}", "=== Tax<Milk<Coffee>> ===".bold());
    let espresso = Tax::new(
        config.tax_rate,
        Milk::with_surcharge(
            Coffee::new("Espresso", Money::from_units(1.0)),
            Money::from_units(config.milk_surcharge),
        ),
    );
    println!("Espresso: {}", espresso.price());
    println!("{}", receipt_line(&espresso));

    // The chain is a single concrete type; no Box, no vtable.
    println!(
        "size_of::<Tax<Milk<Coffee>>>() = {} bytes",
        std::mem::size_of_val(&espresso)
    );

    Ok(())
}
