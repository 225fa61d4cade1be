// src/lib.rs

pub mod config;
pub mod core;
pub mod corpus;
pub mod dictionary;
pub mod enrich;
pub mod error;
pub mod logging;
pub mod persistence;

pub use crate::core::engine::PhoneticEngine;
pub use crate::core::types::{KnownPhoneticsIndex, Transcription};
pub use crate::error::PhoneticError;
