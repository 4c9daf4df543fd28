use async_trait::async_trait;

use super::domain::Etudiant;
use crate::errors::ServiceError;

/// Storage abstraction for student records.
///
/// Absence on reads is `Ok(None)`, never an error. Storage failures come back
/// as `ServiceError::Db`.
#[async_trait]
pub trait EtudiantRepository: Send + Sync {
    /// Every stored student, lowest id first. Empty when nothing is stored.
    async fn find_all(&self) -> Result<Vec<Etudiant>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Etudiant>, ServiceError>;
    /// First student with this national id; the lowest id wins on duplicates.
    async fn find_by_national_id(&self, national_id: i64) -> Result<Option<Etudiant>, ServiceError>;
    /// Insert when `id` is `None`, otherwise replace the whole record.
    /// Replacing an id that is not stored is `ServiceError::NotFound`.
    async fn save(&self, etudiant: Etudiant) -> Result<Etudiant, ServiceError>;
    /// Remove by id. Unknown ids are a no-op.
    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError>;
}

/// Process-local repository for tests and database-less runs.
pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use tokio::sync::RwLock;

    #[derive(Debug)]
    struct Inner {
        rows: BTreeMap<i64, Etudiant>, // key: id
        next_id: i64,
    }

    /// Ids start at 1 and are never reused, even after deletion.
    #[derive(Debug)]
    pub struct InMemoryEtudiantRepository {
        inner: RwLock<Inner>,
    }

    impl Default for InMemoryEtudiantRepository {
        fn default() -> Self {
            Self { inner: RwLock::new(Inner { rows: BTreeMap::new(), next_id: 1 }) }
        }
    }

    impl InMemoryEtudiantRepository {
        pub fn new() -> Self { Self::default() }

        pub async fn len(&self) -> usize {
            self.inner.read().await.rows.len()
        }

        pub async fn is_empty(&self) -> bool {
            self.len().await == 0
        }
    }

    #[async_trait]
    impl EtudiantRepository for InMemoryEtudiantRepository {
        async fn find_all(&self) -> Result<Vec<Etudiant>, ServiceError> {
            let inner = self.inner.read().await;
            Ok(inner.rows.values().cloned().collect())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Etudiant>, ServiceError> {
            let inner = self.inner.read().await;
            Ok(inner.rows.get(&id).cloned())
        }

        async fn find_by_national_id(&self, national_id: i64) -> Result<Option<Etudiant>, ServiceError> {
            let inner = self.inner.read().await;
            Ok(inner.rows.values().find(|e| e.national_id == national_id).cloned())
        }

        async fn save(&self, mut etudiant: Etudiant) -> Result<Etudiant, ServiceError> {
            let mut inner = self.inner.write().await;
            match etudiant.id {
                None => {
                    let id = inner.next_id;
                    inner.next_id += 1;
                    etudiant.id = Some(id);
                    inner.rows.insert(id, etudiant.clone());
                }
                Some(id) => {
                    let slot = inner
                        .rows
                        .get_mut(&id)
                        .ok_or_else(|| ServiceError::NotFound(format!("etudiant {id}")))?;
                    *slot = etudiant.clone();
                }
            }
            Ok(etudiant)
        }

        async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
            let mut inner = self.inner.write().await;
            inner.rows.remove(&id);
            Ok(())
        }
    }
}
