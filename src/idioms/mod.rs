//! Value-semantics idioms.
//!
//! - [`copy_swap`]: assignment written as "take a copy, then swap".
//! - [`pimpl`]: a stable public handle over a private, owned implementation.

pub mod copy_swap;
pub mod pimpl;
