// src/api/dto/mod.rs
pub mod auth_dto;
pub mod post_dto;
pub mod statistics_dto;
