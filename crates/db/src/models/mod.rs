//! Row structs and request DTOs.

pub mod brand;
pub mod vehicle;
