use std::sync::Arc;

use async_trait::async_trait;
use configs::{IdPolicy, StoreConfig};
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::ServiceError;
use crate::students::domain::{seed_students, Student, StudentInput};
use crate::students::repository::StudentRepository;

struct Inner {
    students: Vec<Student>,
    /// Next id under `IdPolicy::Monotonic`; always greater than any id handed out.
    next_id: i64,
}

impl Inner {
    fn assign_id(&mut self, policy: IdPolicy) -> i64 {
        match policy {
            IdPolicy::Monotonic => {
                let id = self.next_id;
                self.next_id += 1;
                id
            }
            IdPolicy::LastPlusOne => {
                let id = self.students.last().map(|s| s.id + 1).unwrap_or(1);
                self.next_id = self.next_id.max(id + 1);
                id
            }
        }
    }
}

/// In-memory, insertion-ordered student collection.
///
/// All mutation happens under the write half of a `tokio::sync::RwLock`,
/// so concurrent requests never interleave inside an operation.
pub struct StudentStore {
    inner: RwLock<Inner>,
    policy: IdPolicy,
}

impl StudentStore {
    /// Store holding the two startup records.
    pub fn seeded() -> Arc<Self> {
        Self::with_students(seed_students(), IdPolicy::default())
    }

    /// Build from store config: seeded or empty, with the configured id policy.
    pub fn from_config(cfg: &StoreConfig) -> Arc<Self> {
        let students = if cfg.seed { seed_students() } else { Vec::new() };
        Self::with_students(students, cfg.id_policy)
    }

    pub fn with_students(students: Vec<Student>, policy: IdPolicy) -> Arc<Self> {
        let next_id = students.iter().map(|s| s.id).max().unwrap_or(0).max(0) + 1;
        Arc::new(Self { inner: RwLock::new(Inner { students, next_id }), policy })
    }

    pub fn policy(&self) -> IdPolicy {
        self.policy
    }

    /// Every student, in insertion order.
    pub async fn list(&self) -> Vec<Student> {
        let inner = self.inner.read().await;
        inner.students.clone()
    }

    pub async fn get(&self, id: i64) -> Option<Student> {
        let inner = self.inner.read().await;
        inner.students.iter().find(|s| s.id == id).cloned()
    }

    /// Append a new student with a store-assigned id.
    pub async fn create(&self, input: StudentInput) -> Student {
        let mut inner = self.inner.write().await;
        let id = inner.assign_id(self.policy);
        let student = Student { id, name: input.name, age: input.age };
        inner.students.push(student.clone());
        debug!(id, count = inner.students.len(), "student appended");
        student
    }

    /// Replace name and age in place; id and position are kept.
    pub async fn update(&self, id: i64, input: StudentInput) -> Result<Student, ServiceError> {
        let mut inner = self.inner.write().await;
        let existing = inner
            .students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| ServiceError::not_found("student", id))?;
        existing.name = input.name;
        existing.age = input.age;
        Ok(existing.clone())
    }

    /// Remove the student with `id`, keeping the order of the rest.
    pub async fn delete(&self, id: i64) -> bool {
        let mut inner = self.inner.write().await;
        let before = inner.students.len();
        inner.students.retain(|s| s.id != id);
        let removed = inner.students.len() != before;
        debug!(id, removed, "student delete");
        removed
    }
}

#[async_trait]
impl StudentRepository for StudentStore {
    async fn list(&self) -> Vec<Student> { self.list().await }
    async fn get(&self, id: i64) -> Option<Student> { self.get(id).await }
    async fn create(&self, input: StudentInput) -> Student { self.create(input).await }
    async fn update(&self, id: i64, input: StudentInput) -> Result<Student, ServiceError> { self.update(id, input).await }
    async fn delete(&self, id: i64) -> bool { self.delete(id).await }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(students: &[Student]) -> Vec<i64> {
        students.iter().map(|s| s.id).collect()
    }

    #[tokio::test]
    async fn seeded_store_lists_seed_records_in_order() {
        let store = StudentStore::seeded();
        assert_eq!(store.list().await, seed_students());
    }

    #[tokio::test]
    async fn create_appends_with_next_id() {
        let store = StudentStore::seeded();
        let created = store.create(StudentInput::new("Daniel", 35)).await;
        assert_eq!(created, Student { id: 3, name: "Daniel".into(), age: 35 });
        assert_eq!(ids(&store.list().await), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn get_finds_by_id_and_misses_cleanly() {
        let store = StudentStore::seeded();
        let found = store.get(2).await.expect("seed record 2");
        assert_eq!(found.name, "Gabriel");
        assert_eq!(found.age, 19);
        assert!(store.get(0).await.is_none());
        assert!(store.get(42).await.is_none());
    }

    #[tokio::test]
    async fn update_keeps_id_and_position() {
        let store = StudentStore::seeded();
        let updated = store.update(1, StudentInput::new("Joao Pedro", 20)).await.unwrap();
        assert_eq!(updated, Student { id: 1, name: "Joao Pedro".into(), age: 20 });

        let list = store.list().await;
        assert_eq!(ids(&list), vec![1, 2]);
        assert_eq!(list[0], updated);
    }

    #[tokio::test]
    async fn update_missing_is_not_found_and_leaves_store_untouched() {
        let store = StudentStore::seeded();
        let err = store.update(9, StudentInput::new("Ghost", 1)).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(store.list().await, seed_students());
    }

    #[tokio::test]
    async fn delete_preserves_order_and_is_idempotent() {
        let store = StudentStore::seeded();
        store.create(StudentInput::new("Teste", 5)).await;

        assert!(store.delete(1).await);
        assert_eq!(ids(&store.list().await), vec![2, 3]);

        assert!(!store.delete(1).await);
        assert_eq!(ids(&store.list().await), vec![2, 3]);
    }

    #[tokio::test]
    async fn monotonic_ids_are_never_reused() {
        let store = StudentStore::seeded();
        let third = store.create(StudentInput::new("Teste", 5)).await;
        assert!(store.delete(third.id).await);
        let fourth = store.create(StudentInput::new("Outro", 6)).await;
        assert_eq!(fourth.id, 4);
    }

    #[tokio::test]
    async fn last_plus_one_follows_the_last_record() {
        let store = StudentStore::with_students(seed_students(), IdPolicy::LastPlusOne);
        let third = store.create(StudentInput::new("Teste", 5)).await;
        assert_eq!(third.id, 3);
        assert!(store.delete(third.id).await);
        let again = store.create(StudentInput::new("Outro", 6)).await;
        assert_eq!(again.id, 3);
    }

    #[tokio::test]
    async fn empty_store_starts_at_one() {
        for policy in [IdPolicy::Monotonic, IdPolicy::LastPlusOne] {
            let store = StudentStore::from_config(&StoreConfig { id_policy: policy, seed: false });
            assert!(store.list().await.is_empty());
            assert_eq!(store.create(StudentInput::new("Primeiro", 1)).await.id, 1);
        }
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() {
        let store = StudentStore::seeded();
        let mut handles = Vec::new();
        for i in 0..32 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move { store.create(StudentInput::new(format!("s{i}"), i)).await.id }));
        }
        let mut assigned = Vec::new();
        for h in handles {
            assigned.push(h.await.unwrap());
        }
        assigned.sort_unstable();
        assert_eq!(assigned, (3..35).collect::<Vec<i64>>());
        assert_eq!(store.list().await.len(), 34);
    }

    #[tokio::test]
    async fn works_behind_the_repository_trait() {
        let repo: Arc<dyn StudentRepository> = StudentStore::seeded();
        let created = repo.create(StudentInput::new("Daniel", 35)).await;
        assert_eq!(repo.get(created.id).await, Some(created));
        assert!(repo.delete(3).await);
        assert_eq!(repo.list().await.len(), 2);
    }
}
