//! Data Transfer Objects (DTOs) for the HTTP API.
//!
//! - `http`: request / response bodies (camelCase JSON)
//! - `conversion`: Domain Model → DTO conversion

pub mod conversion;
pub mod http;
