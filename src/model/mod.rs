//! Loading expression models from JSON documents.
//!
//! This is the crate's dynamic boundary: everywhere else the exponent of a
//! power is statically typed, here it arrives as untyped JSON and is
//! checked at load time.
pub mod error;
pub mod loader;

pub use error::ModelError;
pub use loader::{load_model, Model};
