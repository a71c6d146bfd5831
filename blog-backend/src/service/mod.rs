// src/service/mod.rs
pub mod auth_service;
pub mod post_service;
pub mod statistics_service;
