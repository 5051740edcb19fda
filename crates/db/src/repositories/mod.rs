//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&mut SqliteConnection` as the first argument. Writes open a
//! transaction on that connection and finish it with
//! [`commit_or_rollback`](crate::commit_or_rollback).

pub mod brand_repo;
pub mod vehicle_repo;

pub use brand_repo::BrandRepo;
pub use vehicle_repo::VehicleRepo;
