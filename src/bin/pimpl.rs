//! Idiom: Pimpl
//!
//! Run with: cargo run --bin pimpl

use design_patterns::idioms::pimpl::Person;
use design_patterns::logging;

fn main() {
    logging::init(logging::verbose_requested());

    let mut p1 = Person::new();
    p1.set_year_of_birth(2000);
    p1.set_forename("Alex");
    p1.set_surname("Balex");
    println!("This is {} who was born in {}", p1.full_name(), p1.year_of_birth());

    let mut p2 = p1.clone();
    p2.set_forename("Sam");
    println!("The copy is {}, the original is still {}", p2.full_name(), p1.full_name());
}
