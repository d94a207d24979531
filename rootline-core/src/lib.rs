//! Core traits and types for Rootline.
//!
//! This crate defines the shared abstractions that the scanners and solvers
//! build on:
//!
//! - [`Function`]: A real-valued function of one real variable
//! - [`Differentiable`]: A [`Function`] that also knows its derivative
//! - [`FunctionPair`]: Pairs a function with a hand-written derivative
//! - [`Observer`]: Receives solver events and optionally returns control actions

mod function;
mod observer;

pub use function::{Differentiable, Function, FunctionPair};
pub use observer::Observer;
