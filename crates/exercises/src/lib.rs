//! Standalone algorithm exercises.
//!
//! Each module is a pure, synchronous computation over caller-owned input:
//!
//! - [`vote_share`] -- percentage of valid, blank and invalid votes.
//! - [`bubble_sort`] -- in-place bubble sort with early exit.
//! - [`factorial`] -- iterative arbitrary-precision factorial.
//! - [`multiples`] -- sum of the multiples of 3 or 5 below a bound.

pub mod bubble_sort;
pub mod error;
pub mod factorial;
pub mod multiples;
pub mod vote_share;

pub use bubble_sort::bubble_sort;
pub use error::ExerciseError;
pub use factorial::factorial;
pub use multiples::sum_of_multiples;
pub use vote_share::VoteShare;
