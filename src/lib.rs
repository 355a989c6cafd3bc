//! Genetic maze solver.
//!
//! A perfect maze is carved with a randomized Prim variant, its shortest path
//! is found with BFS, and a small population of fixed-length move sequences
//! is evolved until one of them walks from the entrance to the exit.

pub mod config;
pub mod engines;
pub mod error;
pub mod types;
pub mod ui;

pub use error::{GenmazeError, Result};
