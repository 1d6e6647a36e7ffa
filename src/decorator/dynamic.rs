//! Run-time decorator chain over `Box<dyn Item>`.
//!
//! Run with: cargo run --bin decorator_dynamic

use crate::error::{PatternError, Result};
use crate::money::Money;

use super::MILK_SURCHARGE;

pub trait Item {
    fn price(&self) -> Money;
}

/// Box an item for use as a decorator's inner value.
pub fn boxed<I: Item + 'static>(item: I) -> Option<Box<dyn Item>> {
    Some(Box::new(item))
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

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Item for Coffee {
    fn price(&self) -> Money {
        self.price
    }
}

/// Shared base of every decorator: exclusive ownership of the wrapped item.
pub struct DecoratedItem {
    item: Box<dyn Item>,
}

impl DecoratedItem {
    pub fn new(item: Option<Box<dyn Item>>) -> Result<Self> {
        match item {
            Some(item) => Ok(DecoratedItem { item }),
            None => {
                tracing::warn!("decorator constructed without an item");
                Err(PatternError::InvalidArgument("Invalid item"))
            }
        }
    }

    pub fn item(&self) -> &dyn Item {
        self.item.as_ref()
    }
}

pub struct Milk {
    base: DecoratedItem,
    surcharge: Money,
}

impl Milk {
    pub fn new(item: Option<Box<dyn Item>>) -> Result<Self> {
        Self::with_surcharge(item, Money::from_units(MILK_SURCHARGE))
    }

    pub fn with_surcharge(item: Option<Box<dyn Item>>, surcharge: Money) -> Result<Self> {
        let base = DecoratedItem::new(item)?;
        tracing::debug!(%surcharge, "milk decorator");
        Ok(Milk { base, surcharge })
    }
}

impl Item for Milk {
    fn price(&self) -> Money {
        self.base.item().price() + self.surcharge
    }
}

pub struct Tax {
    base: DecoratedItem,
    factor: f64,
}

impl Tax {
    /// `rate` is the fraction added on top, e.g. `0.19` for 19%.
    pub fn new(rate: f64, item: Option<Box<dyn Item>>) -> Result<Self> {
        let base = DecoratedItem::new(item)?;
        tracing::debug!(rate, "tax decorator");
        Ok(Tax {
            base,
            factor: 1.0 + rate,
        })
    }
}

impl Item for Tax {
    fn price(&self) -> Money {
        self.base.item().price() * self.factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn espresso() -> Coffee {
        Coffee::new("Espresso", Money::from_units(1.0))
    }

    #[test]
    fn undecorated_coffee() {
        let coffee = espresso();
        assert_eq!(coffee.name(), "Espresso");
        assert_eq!(coffee.price(), Money::from_cents(100));
    }

    #[test]
    fn milk_adds_surcharge() {
        let milk = Milk::new(boxed(espresso())).unwrap();
        assert_eq!(milk.price(), Money::from_cents(120));
    }

    #[test]
    fn tax_wraps_milk() {
        let item: Box<dyn Item> =
            Box::new(Tax::new(0.19, boxed(Milk::new(boxed(espresso())).unwrap())).unwrap());
        assert_eq!(item.price().to_string(), "1.42");
    }

    #[test]
    fn application_order_matters() {
        let tax_then_milk = Milk::new(boxed(Tax::new(0.19, boxed(espresso())).unwrap())).unwrap();
        // 1.00 * 1.19 + 0.20
        assert_eq!(tax_then_milk.price().as_cents(), 139);
    }

    #[test]
    fn decorators_nest_arbitrarily_deep() {
        let double_milk = Milk::new(boxed(Milk::new(boxed(espresso())).unwrap())).unwrap();
        assert_eq!(double_milk.price().as_cents(), 140);
    }

    #[test]
    fn missing_item_is_rejected() {
        assert!(matches!(
            Milk::new(None),
            Err(PatternError::InvalidArgument("Invalid item"))
        ));
        assert!(matches!(Tax::new(0.19, None), Err(PatternError::InvalidArgument(_))));
    }
}
