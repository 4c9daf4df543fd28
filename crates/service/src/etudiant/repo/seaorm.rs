use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use crate::etudiant::domain::Etudiant;
use crate::etudiant::repository::EtudiantRepository;
use models::etudiant;

/// SeaORM-backed repository implementation.
pub struct SeaOrmEtudiantRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmEtudiantRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl EtudiantRepository for SeaOrmEtudiantRepository {
    async fn find_all(&self) -> Result<Vec<Etudiant>, ServiceError> {
        let rows = etudiant::list(&self.db).await?;
        Ok(rows.into_iter().map(Etudiant::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Etudiant>, ServiceError> {
        Ok(etudiant::get(&self.db, id).await?.map(Etudiant::from))
    }

    async fn find_by_national_id(&self, national_id: i64) -> Result<Option<Etudiant>, ServiceError> {
        Ok(etudiant::find_by_national_id(&self.db, national_id).await?.map(Etudiant::from))
    }

    async fn save(&self, e: Etudiant) -> Result<Etudiant, ServiceError> {
        let saved = match e.id {
            None => etudiant::create(&self.db, &e.last_name, &e.first_name, e.national_id, e.birth_date).await?,
            Some(id) => {
                let model = etudiant::Model {
                    id,
                    last_name: e.last_name,
                    first_name: e.first_name,
                    national_id: e.national_id,
                    birth_date: e.birth_date,
                };
                etudiant::replace(&self.db, model).await?
            }
        };
        Ok(saved.into())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        etudiant::delete(&self.db, id).await?;
        Ok(())
    }
}
