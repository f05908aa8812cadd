use std::sync::Arc;

use service::students::{StudentRepository, StudentStore};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub students: Arc<dyn StudentRepository>,
}

impl AppState {
    pub fn new(students: Arc<dyn StudentRepository>) -> Self {
        Self { students }
    }

    /// State over a freshly seeded in-memory store.
    pub fn seeded() -> Self {
        Self::new(StudentStore::seeded())
    }
}
