//! Concrete remote operations
//!
//! The four bulk actions of the admin app (stats fetch, type generation,
//! keyword generation, screenshot capture) all run against backend functions
//! over HTTP; `OperationKind` picks the function, `HttpOperation` calls it.

mod http;
mod kind;

pub use http::HttpOperation;
pub use kind::OperationKind;
