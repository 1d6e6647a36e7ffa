//! Pattern: Decorator
//!
//! Two renditions of the same beverage-pricing chain:
//! - [`dynamic`]: decorators own a `Box<dyn Item>` and are stacked at run time.
//! - [`stacked`]: decorators are generic over the wrapped item, so the whole
//!   chain is one concrete type resolved at compile time.
//!
//! Both price a wrapped item innermost-first.

pub mod dynamic;
pub mod stacked;

/// Default milk surcharge in currency units.
pub const MILK_SURCHARGE: f64 = 0.2;
