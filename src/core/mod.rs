// src/core/mod.rs

pub mod converter;
pub mod derive;
pub mod dialect;
pub mod engine;
pub mod symbols;
pub mod trie;
pub mod types;
