// src/lib.rs

pub mod core;
pub mod errors;
pub mod persistence;
pub mod report;

pub use crate::core::engine::SubgramEngine;
pub use crate::core::index::SignatureIndex;
pub use crate::core::matcher::subanagrams;
pub use crate::core::types::LetterVector;
pub use crate::errors::IndexError;
