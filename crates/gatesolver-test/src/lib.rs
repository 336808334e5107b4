//! Shared test fixtures for gatesolver crates.
//!
//! This crate provides hand-built puzzles with known optimal answers.
//! It depends only on `gatesolver-core` so every crate can use it.
//!
//! - [`puzzles`] - map texts and the states they load into
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! gatesolver-test = { workspace = true }
//! ```
//!
//! Then load the fixtures you need:
//!
//! ```ignore
//! use gatesolver_test::puzzles::{puzzle, TWO_GOALS};
//!
//! let state = puzzle(TWO_GOALS);
//! ```

pub mod puzzles;

pub use puzzles::puzzle;
