//! Service layer for dormitory student records.
//! - `etudiant::repository` is the storage seam (SeaORM or in-memory).
//! - `etudiant::service` is what the HTTP layer talks to.

pub mod errors;
pub mod etudiant;
#[cfg(test)]
pub mod test_support;
