use std::sync::Arc;

use service::etudiant::{repository::memory::InMemoryEtudiantRepository, EtudiantRepository, EtudiantService};

/// Shared handler state; cloned per request.
#[derive(Clone)]
pub struct ServerState {
    pub etudiants: Arc<EtudiantService<dyn EtudiantRepository>>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn EtudiantRepository>) -> Self {
        Self { etudiants: Arc::new(EtudiantService::new(repo)) }
    }

    /// State over a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryEtudiantRepository::new()))
    }
}
