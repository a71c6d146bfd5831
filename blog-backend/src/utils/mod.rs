// src/utils/mod.rs

pub mod jwt;
pub mod password;
pub mod permission;
pub mod validation;
