// src/core/mod.rs
pub mod engine;
pub mod index;
pub mod matcher;
pub mod types;
