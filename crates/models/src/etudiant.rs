use sea_orm::{entity::prelude::*, DatabaseConnection, NotSet, QueryOrder, Set, Unchanged};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "etudiant")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub last_name: String,
    pub first_name: String,
    pub national_id: i64,
    pub birth_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation { fn def(&self) -> RelationDef { panic!("no relations") } }

impl ActiveModelBehavior for ActiveModel {}

/// All students, lowest id first.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn get(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// First student carrying `national_id`. The column is not unique, so when
/// several rows match the one with the lowest id is returned.
pub async fn find_by_national_id(db: &DatabaseConnection, national_id: i64) -> Result<Option<Model>, errors::ModelError> {
    let found = Entity::find()
        .filter(Column::NationalId.eq(national_id))
        .order_by_asc(Column::Id)
        .one(db)
        .await?;
    Ok(found)
}

/// Insert a new row; the database assigns `id`.
pub async fn create(
    db: &DatabaseConnection,
    last_name: &str,
    first_name: &str,
    national_id: i64,
    birth_date: Option<Date>,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: NotSet,
        last_name: Set(last_name.to_string()),
        first_name: Set(first_name.to_string()),
        national_id: Set(national_id),
        birth_date: Set(birth_date),
    };
    Ok(am.insert(db).await?)
}

/// Overwrite every column of an existing row.
pub async fn replace(db: &DatabaseConnection, model: Model) -> Result<Model, errors::ModelError> {
    let id = model.id;
    let am = ActiveModel {
        id: Unchanged(model.id),
        last_name: Set(model.last_name),
        first_name: Set(model.first_name),
        national_id: Set(model.national_id),
        birth_date: Set(model.birth_date),
    };
    match am.update(db).await {
        Ok(updated) => Ok(updated),
        Err(DbErr::RecordNotUpdated) | Err(DbErr::RecordNotFound(_)) => {
            Err(errors::ModelError::NotFound(format!("etudiant {id}")))
        }
        Err(e) => Err(e.into()),
    }
}

/// Delete by id; returns whether a row was removed.
pub async fn delete(db: &DatabaseConnection, id: i64) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
