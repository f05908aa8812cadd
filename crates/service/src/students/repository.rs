use async_trait::async_trait;

use crate::errors::ServiceError;
use crate::students::domain::{Student, StudentInput};

/// Storage seam for student records. Handlers depend on this, not on a concrete store.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn list(&self) -> Vec<Student>;
    async fn get(&self, id: i64) -> Option<Student>;
    async fn create(&self, input: StudentInput) -> Student;
    async fn update(&self, id: i64, input: StudentInput) -> Result<Student, ServiceError>;
    /// Returns whether a record was removed. Removing an absent id is not an error.
    async fn delete(&self, id: i64) -> bool;
}
