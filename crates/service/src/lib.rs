//! Service layer for the student registry.
//! - Owns the authoritative in-memory collection of students.
//! - Exposes CRUD through the `StudentRepository` trait.
//! - Provides the error type shared with the HTTP layer.

pub mod errors;
pub mod students;
