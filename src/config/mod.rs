// src/config/mod.rs

pub mod qr_config;

// Re-export main types for convenience
pub use qr_config::{QrConfig, EngineConfig};
