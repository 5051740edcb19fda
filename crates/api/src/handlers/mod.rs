pub mod brand;
pub mod logs;
pub mod vehicle;
