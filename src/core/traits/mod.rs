//! Core traits module
//!
//! Contains the two seams the batch executor is wired through

pub mod observer;
pub mod operation;

pub use observer::*;
pub use operation::*;
