// src/core/mod.rs
pub mod config;
pub mod session;

pub use session::GeneratorSession;
