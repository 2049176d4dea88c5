//! A tour of everyday Rust idioms, one small example program at a time.
//!
//! Each module under [`demos`] is a self-contained demonstration with a
//! single `run()` entry point. The `feature-tour` binary walks through
//! all of them in a fixed order behind one top-level fault boundary;
//! the only component with real concurrency semantics is [`sync`].

pub mod demos;
pub mod driver;
pub mod error;
pub mod sync;
