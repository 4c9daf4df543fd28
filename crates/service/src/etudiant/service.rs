use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::domain::Etudiant;
use super::repository::EtudiantRepository;
use crate::errors::ServiceError;

/// Student service independent of web framework.
///
/// Every method delegates to exactly one repository call and returns its
/// result untouched; no validation happens here.
pub struct EtudiantService<R: EtudiantRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: EtudiantRepository + ?Sized> EtudiantService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn retrieve_all_etudiants(&self) -> Result<Vec<Etudiant>, ServiceError> {
        let list = self.repo.find_all().await?;
        debug!(count = list.len(), "etudiants_listed");
        Ok(list)
    }

    #[instrument(skip(self))]
    pub async fn retrieve_etudiant(&self, id: i64) -> Result<Option<Etudiant>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    /// Look a student up by national id (CIN).
    ///
    /// # Examples
    /// ```
    /// use service::etudiant::{Etudiant, EtudiantService, repository::memory::InMemoryEtudiantRepository};
    /// use std::sync::Arc;
    /// let svc = EtudiantService::new(Arc::new(InMemoryEtudiantRepository::new()));
    /// tokio_test::block_on(svc.add_etudiant(Etudiant::new("Doe", "John", 12345678, None))).unwrap();
    /// let found = tokio_test::block_on(svc.retrieve_etudiant_by_cin(12345678)).unwrap();
    /// assert_eq!(found.unwrap().last_name, "Doe");
    /// assert!(tokio_test::block_on(svc.retrieve_etudiant_by_cin(99999999)).unwrap().is_none());
    /// ```
    #[instrument(skip(self))]
    pub async fn retrieve_etudiant_by_cin(&self, cin: i64) -> Result<Option<Etudiant>, ServiceError> {
        self.repo.find_by_national_id(cin).await
    }

    /// Persist a new student; the returned value carries the assigned id.
    /// Any incoming `id` is ignored, so add never overwrites a stored record.
    ///
    /// # Examples
    /// ```
    /// use service::etudiant::{Etudiant, EtudiantService, repository::memory::InMemoryEtudiantRepository};
    /// use std::sync::Arc;
    /// let svc = EtudiantService::new(Arc::new(InMemoryEtudiantRepository::new()));
    /// let saved = tokio_test::block_on(svc.add_etudiant(Etudiant::new("Doe", "John", 12345678, None))).unwrap();
    /// assert!(saved.id.is_some());
    /// assert_eq!(saved.national_id, 12345678);
    /// ```
    #[instrument(skip(self, etudiant), fields(national_id = etudiant.national_id))]
    pub async fn add_etudiant(&self, mut etudiant: Etudiant) -> Result<Etudiant, ServiceError> {
        etudiant.id = None;
        let saved = self.repo.save(etudiant).await?;
        info!(id = ?saved.id, national_id = saved.national_id, "etudiant_added");
        Ok(saved)
    }

    /// Full replace of an existing student. The body must carry the `id`.
    #[instrument(skip(self, etudiant), fields(id = ?etudiant.id))]
    pub async fn modify_etudiant(&self, etudiant: Etudiant) -> Result<Etudiant, ServiceError> {
        if etudiant.id.is_none() {
            return Err(ServiceError::InvalidInput("id is required to modify an etudiant".into()));
        }
        let saved = self.repo.save(etudiant).await?;
        info!(id = ?saved.id, "etudiant_modified");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn remove_etudiant(&self, id: i64) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await?;
        info!(id, "etudiant_removed");
        Ok(())
    }
}
