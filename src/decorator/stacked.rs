//! Compile-time decorator chain: `Tax<Milk<Coffee>>` is one concrete type
//! and every `price()` call is statically dispatched.
//!
//! Run with: cargo run --bin decorator_static

use crate::money::Money;

use super::MILK_SURCHARGE;

pub trait Item {
    fn price(&self) -> Money;
    fn name(&self) -> String;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Coffee {
    name: String,
    price: Money,
}

impl Coffee {
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Coffee {
            name: name.into(),
            price,
        }
    }
}

impl Item for Coffee {
    fn price(&self) -> Money {
        self.price
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Milk<I> {
    item: I,
    surcharge: Money,
}

impl<I: Item> Milk<I> {
    pub fn new(item: I) -> Self {
        Self::with_surcharge(item, Money::from_units(MILK_SURCHARGE))
    }

    pub fn with_surcharge(item: I, surcharge: Money) -> Self {
        Milk { item, surcharge }
    }
}

impl<I: Item> Item for Milk<I> {
    fn price(&self) -> Money {
        self.item.price() + self.surcharge
    }

    fn name(&self) -> String {
        format!("{} with milk", self.item.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tax<I> {
    item: I,
    factor: f64,
}

impl<I: Item> Tax<I> {
    pub fn new(rate: f64, item: I) -> Self {
        Tax {
            item,
            factor: 1.0 + rate,
        }
    }
}

impl<I: Item> Item for Tax<I> {
    fn price(&self) -> Money {
        self.item.price() * self.factor
    }

    fn name(&self) -> String {
        self.item.name()
    }
}

/// Works with any chain without knowing its concrete shape.
pub fn receipt_line<I: Item>(item: &I) -> String {
    format!("{}: {}", item.name(), item.price())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn espresso_chain() {
        let espresso = Tax::new(0.19, Milk::new(Coffee::new("Espresso", Money::from_units(1.0))));
        assert_eq!(espresso.price().as_cents(), 142);
        assert_eq!(receipt_line(&espresso), "Espresso with milk: 1.42");
    }

    #[test]
    fn plain_coffee_receipt() {
        let coffee = Coffee::new("Lungo", Money::from_cents(250));
        assert_eq!(receipt_line(&coffee), "Lungo: 2.5");
    }

    #[test]
    fn zero_rate_tax_is_identity() {
        let coffee = Coffee::new("Ristretto", Money::from_cents(90));
        assert_eq!(Tax::new(0.0, coffee.clone()).price(), coffee.price());
    }
}
