// src/api/handlers/mod.rs
pub mod auth_handler;
pub mod post_handler;
pub mod statistics_handler;
pub mod system_handler;
