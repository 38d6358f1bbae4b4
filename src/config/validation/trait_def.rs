//! Validation trait definition

/// Implemented by every configuration section
///
/// Returns a human-readable description of the first problem found.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
