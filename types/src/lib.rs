//! Core value types for unikit.
//!
//! This crate contains the dynamic value model the utilities operate on, with
//! no IO and minimal dependencies:
//!
//! - **`Value`**: the closed set of runtime values, and **`Kind`**, its labels
//! - **`Mapping`**: insertion-ordered key/value collection
//! - **`Haystack`** / **`Candidates`**: explicit mapping-vs-sequence tags
//! - **`IdConfig`**: validated identifier alphabet

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod kind;
mod mapping;
mod settings;
mod shape;
mod value;

pub use kind::{Kind, UnknownKindError};
pub use mapping::{Iter, Mapping};
pub use settings::{DEFAULT_ID_ALPHABET, IdConfig, IdConfigError};
pub use shape::{Candidates, Haystack, ShapeError};
pub use value::{Callable, ErrorValue, Pattern, Value};
