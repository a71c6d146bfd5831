// src/extractors/mod.rs
pub mod id;

pub use id::{parse_id, IdPath};
