//! Infrastructure layer: HTTP DTOs and the repository backed by the room API.

pub mod dto;
pub mod repository;
