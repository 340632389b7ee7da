//! Infrastructure layer: concrete repository implementation and HTTP DTOs.

pub mod dto;
pub mod repository;
