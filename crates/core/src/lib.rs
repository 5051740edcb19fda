//! Domain types shared by the vehicle manager crates.

pub mod error;
pub mod pagination;
pub mod patch;
pub mod types;
