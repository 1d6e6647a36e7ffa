//! # Design Patterns in Rust
//!
//! Small, self-contained demonstrations of classic object-oriented and
//! generic-programming patterns. Every pattern solves the same problem with a
//! different mechanism: treat unrelated "shape-like" values uniformly.
//!
//! ## Dispatch mechanisms
//! - Trait objects: [`bridge`], [`decorator::dynamic`], [`strategy`],
//!   [`external_polymorphism`]
//! - Generic wrappers resolved at compile time: [`decorator::stacked`], [`vector`]
//! - Closed enum + visitor: [`visitor`]
//! - Type erasure with cloning: [`type_erasure`]
//! - Callbacks held by a subject: [`observer`]
//!
//! ## Idioms
//! - Copy-and-swap: [`idioms::copy_swap`]
//! - Pimpl: [`idioms::pimpl`]
//! - Trait bounds as container concepts: [`concepts`]
//!
//! Run a demo with: `cargo run --bin <name>` (see `Cargo.toml` for the list).

pub mod bridge;
pub mod concepts;
pub mod config;
pub mod decorator;
pub mod drawing;
pub mod error;
pub mod external_polymorphism;
pub mod idioms;
pub mod logging;
pub mod money;
pub mod observer;
pub mod shapes;
pub mod strategy;
pub mod type_erasure;
pub mod vector;
pub mod visitor;

pub use config::DemoConfig;
pub use error::{PatternError, Result};
pub use money::Money;
pub use shapes::{Color, Cuboid, Cylinder, Point, Sphere};
