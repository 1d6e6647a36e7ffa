//! Pattern: Type Erasure
//!
//! An owning wrapper hides the concrete type behind a private trait object
//! and still behaves like a value: it can be cloned deeply, moved, and
//! assigned. Any type with the required capability can be wrapped, including
//! types written after the wrapper.
//!
//! - [`drawable`]: wraps anything that can be drawn, optionally with an
//!   injected draw strategy.
//! - [`info`]: wraps anything that can describe itself.

pub mod drawable;
pub mod info;
