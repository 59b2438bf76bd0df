// src/square_root/mod.rs

pub mod composite;
pub mod finite_field_arithmetic;
pub mod square_finder;
