//! # Taskpad Testing
//!
//! Test utilities shared across the workspace:
//!
//! - [`ReducerTest`]: a fluent Given-When-Then harness for reducers.
//! - [`assertions`]: helpers for asserting on returned effects.
//! - [`clock`]: deterministic [`Clock`](taskpad_core::environment::Clock)
//!   implementations for pinning creation timestamps.

pub mod clock;

pub use clock::{FixedClock, TickingClock};
pub use reducer_test::{assertions, ReducerTest};
