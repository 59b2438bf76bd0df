// src/core/mod.rs

pub mod static_random;
