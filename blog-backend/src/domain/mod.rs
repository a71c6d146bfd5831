// src/domain/mod.rs
pub mod post_model;
pub mod post_statistics;
pub mod user_model;
