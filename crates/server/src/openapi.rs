use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Student as exchanged over HTTP. `id` is omitted or null on creation.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct EtudiantDoc {
    pub id: Option<i64>,
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = "John")]
    pub first_name: String,
    #[schema(example = 12345678)]
    pub national_id: i64,
    pub birth_date: Option<chrono::NaiveDate>,
}

#[derive(ToSchema)]
pub struct ErrorBody {
    pub error: String,
    pub detail: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::etudiant::retrieve_all_etudiants,
        crate::routes::etudiant::retrieve_etudiant,
        crate::routes::etudiant::retrieve_etudiant_by_cin,
        crate::routes::etudiant::add_etudiant,
        crate::routes::etudiant::modify_etudiant,
        crate::routes::etudiant::remove_etudiant,
    ),
    components(
        schemas(
            HealthResponse,
            EtudiantDoc,
            ErrorBody,
        )
    ),
    tags(
        (name = "health"),
        (name = "etudiant", description = "Dormitory student records")
    )
)]
pub struct ApiDoc;
