//! Idiom: Copy-and-Swap
//!
//! Run with: cargo run --bin copy_and_swap -- --verbose

use colored::Colorize;
use design_patterns::idioms::copy_swap::{swap, Foo};
use design_patterns::logging;

fn main() {
    logging::init(logging::verbose_requested());

    println!("{}", "Regular Initialization".bold());
    let mut foo = Foo::new(&[1.0, 2.0, 3.0, 4.0], [0.1, 0.2, 0.3, 0.4], &[-1.0, -2.0, -3.0, -4.0]);
    println!("{}", foo.render());

    println!("\n{}", "Copy Initialization".bold());
    let mut foo2 = foo.clone();
    println!("{}", foo2.render());

    println!("\n{}", "Copy Assignment".bold());
    let foo3 = Foo::new(
        &[10.0, 20.0, 30.0, 40.0],
        [0.11, 0.22, 0.33, 0.44],
        &[-10.0, -20.0, -30.0, -40.0],
    );
    println!("Initializing another instance:");
    println!("{}", foo3.render());
    println!("Conducting Assignment");
    foo2.assign(foo3.clone());
    println!("{}", foo2.render());

    println!("\n{}", "Conducting Swap".bold());
    println!("Before:");
    println!("{}", foo.render());
    println!("{}", foo2.render());
    swap(&mut foo2, &mut foo);
    println!("After:");
    println!("{}", foo.render());
    println!("{}", foo2.render());
}
