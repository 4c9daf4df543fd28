//! Student module: three-layer architecture (domain, repository, service).

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::Etudiant;
pub use repository::EtudiantRepository;
pub use service::EtudiantService;
