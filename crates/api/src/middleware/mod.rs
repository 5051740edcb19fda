//! Request extractors.
//!
//! - [`session::DbSession`] -- One pooled connection per request.
//! - [`validation::ValidatedJson`] -- JSON body that passed `validator` rules.
//! - [`validation::ValidatedQuery`] -- Query string that passed `validator` rules.

pub mod session;
pub mod validation;
