//! Configuration validation
//!
//! - `trait_def`: the `Validate` trait
//! - `validators`: implementations for each configuration section
//! - `tests`: test suite for all validators

mod trait_def;
mod validators;

pub use trait_def::Validate;
