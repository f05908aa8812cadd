//! Student records: wire types, the repository seam, and the in-memory store.

pub mod domain;
pub mod repository;
pub mod store;

pub use domain::{parse_id, seed_students, Student, StudentInput};
pub use repository::StudentRepository;
pub use store::StudentStore;
