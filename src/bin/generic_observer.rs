//! Pattern: Observer
//! Example: a generic observer attached to a subject with two state changes
//!
//! Run with: cargo run --bin generic_observer

use colored::Colorize;
use design_patterns::logging;
use design_patterns::observer::{make_observer_handle, Foo, FooChange, Observable};

fn main() {
    logging::init(logging::verbose_requested());

    let handle = make_observer_handle::<Foo, _>(|_foo, change| match change {
        FooChange::DoA => println!("Observer reports: Foo is doing A"),
        FooChange::DoB => println!("Observer reports: Foo is doing B"),
    });

    println!("{}", "=== Attached ===".bold());
    let mut foo = Foo::new();
    foo.attach(handle.observer());
    foo.doing_a();
    foo.doing_b();

    println!("\n{}", "=== Handle Dropped ===".bold());
    drop(handle);
    foo.doing_a();
}
