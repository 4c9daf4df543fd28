use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dormitory student as seen by the service and HTTP layers.
///
/// `id` is `None` until the store has persisted the record. JSON uses
/// camelCase names; the legacy names used by the older front-end
/// (`idEtudiant`, `nomEtudiant`, ...) are accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Etudiant {
    #[serde(default, alias = "idEtudiant")]
    pub id: Option<i64>,
    #[serde(default, alias = "nomEtudiant")]
    pub last_name: String,
    #[serde(default, alias = "prenomEtudiant")]
    pub first_name: String,
    #[serde(alias = "cinEtudiant")]
    pub national_id: i64,
    #[serde(default, alias = "dateNaissance")]
    pub birth_date: Option<NaiveDate>,
}

impl Etudiant {
    /// Unsaved student.
    pub fn new(last_name: impl Into<String>, first_name: impl Into<String>, national_id: i64, birth_date: Option<NaiveDate>) -> Self {
        Self { id: None, last_name: last_name.into(), first_name: first_name.into(), national_id, birth_date }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

impl From<models::etudiant::Model> for Etudiant {
    fn from(m: models::etudiant::Model) -> Self {
        Self {
            id: Some(m.id),
            last_name: m.last_name,
            first_name: m.first_name,
            national_id: m.national_id,
            birth_date: m.birth_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_camel_case_names() {
        let e = Etudiant::new("Doe", "John", 12345678, NaiveDate::from_ymd_opt(2001, 5, 17)).with_id(1);
        let v = serde_json::to_value(&e).unwrap();
        assert_eq!(
            v,
            json!({"id": 1, "lastName": "Doe", "firstName": "John", "nationalId": 12345678, "birthDate": "2001-05-17"})
        );
    }

    #[test]
    fn unsaved_student_serializes_null_id() {
        let v = serde_json::to_value(Etudiant::new("Doe", "John", 1, None)).unwrap();
        assert!(v["id"].is_null());
        assert!(v["birthDate"].is_null());
    }

    #[test]
    fn accepts_legacy_field_names() {
        let e: Etudiant = serde_json::from_value(json!({
            "idEtudiant": 2,
            "nomEtudiant": "Smith",
            "prenomEtudiant": "Jane",
            "cinEtudiant": 87654321,
            "dateNaissance": "1999-12-31"
        }))
        .unwrap();
        assert_eq!(e.id, Some(2));
        assert_eq!(e.last_name, "Smith");
        assert_eq!(e.first_name, "Jane");
        assert_eq!(e.national_id, 87654321);
        assert_eq!(e.birth_date, NaiveDate::from_ymd_opt(1999, 12, 31));
    }

    #[test]
    fn body_without_id_deserializes_as_unsaved() {
        let e: Etudiant = serde_json::from_value(json!({"lastName": "Doe", "firstName": "John", "nationalId": 12345678})).unwrap();
        assert_eq!(e, Etudiant::new("Doe", "John", 12345678, None));
    }

    #[test]
    fn converts_from_persisted_model() {
        let m = models::etudiant::Model { id: 9, last_name: "Doe".into(), first_name: "John".into(), national_id: 5, birth_date: None };
        assert_eq!(Etudiant::from(m), Etudiant::new("Doe", "John", 5, None).with_id(9));
    }
}
