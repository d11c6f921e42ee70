//! API Handlers
//!
//! HTTP request handlers for each student record endpoint.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use mongodb::bson::oid::ObjectId;

use crate::error::{Result, StudentError};
use crate::models::{
    CreateStudentRequest, HealthResponse, StudentFilterParams, StudentIdResponse,
    StudentListResponse, StudentResponse, UpdateStudentRequest,
};
use crate::store::StudentStore;

/// Application state shared across all handlers.
///
/// Holds only the store handle; the service keeps no other in-process state.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the student collection
    pub students: StudentStore,
}

impl AppState {
    /// Creates a new AppState with the given store.
    pub fn new(students: StudentStore) -> Self {
        Self { students }
    }
}

/// Parses a path identifier, rejecting malformed ids before any store call.
fn parse_id(id: &str) -> Result<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| StudentError::InvalidId(id.to_string()))
}

/// Handler for POST /students/
///
/// Inserts one new student record. The response carries only the assigned
/// identifier; duplicate content is permitted.
pub async fn create_student_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<StudentIdResponse>)> {
    // Validate request before touching the store
    if let Some(error_msg) = req.validate() {
        return Err(StudentError::Validation(error_msg));
    }

    let id = state.students.insert(req.name, req.age, req.address).await?;

    Ok((StatusCode::CREATED, Json(StudentIdResponse::new(id.to_hex()))))
}

/// Handler for GET /students/
///
/// Lists students matching the optional `country` and `age` query params,
/// reshaped into the name/age summary view.
pub async fn list_students_handler(
    State(state): State<AppState>,
    Query(params): Query<StudentFilterParams>,
) -> Result<Json<StudentListResponse>> {
    let students = state.students.filtered(&params).await?;

    Ok(Json(StudentListResponse::new(students)))
}

/// Handler for GET /students/:id
///
/// Returns the full record including address.
pub async fn get_student_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StudentResponse>> {
    let object_id = parse_id(&id)?;

    match state.students.find_by_id(object_id).await? {
        Some(document) => Ok(Json(document.into())),
        None => Err(StudentError::NotFound(id)),
    }
}

/// Handler for PATCH /students/:id
///
/// Merges only the fields present and non-null in the payload into the
/// stored record. An empty change-set is a no-op that still requires the
/// record to exist; either way the record as it stands is returned.
pub async fn update_student_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateStudentRequest>,
) -> Result<Json<StudentResponse>> {
    let object_id = parse_id(&id)?;

    match state.students.apply_patch(object_id, &req).await? {
        Some(document) => Ok(Json(document.into())),
        None => Err(StudentError::NotFound(id)),
    }
}

/// Handler for DELETE /students/:id
///
/// Removes the record; success carries no body.
pub async fn delete_student_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let object_id = parse_id(&id)?;

    if state.students.remove(object_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StudentError::NotFound(id))
    }
}

/// Handler for GET /health
///
/// Liveness probe; does not touch the store.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::store::Address;

    /// The driver connects lazily, so a store pointed at the default local
    /// address works for every path that never reaches it.
    async fn offline_state() -> AppState {
        let store = StudentStore::connect(&Config::default()).await.unwrap();
        AppState::new(store)
    }

    #[test]
    fn test_parse_id_accepts_hex() {
        let id = ObjectId::new();
        assert_eq!(parse_id(&id.to_hex()).unwrap(), id);
    }

    #[test]
    fn test_parse_id_rejects_malformed() {
        assert!(matches!(
            parse_id("not-an-id"),
            Err(StudentError::InvalidId(_))
        ));
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name() {
        let state = offline_state().await;

        let req = CreateStudentRequest {
            name: "".to_string(),
            age: 20,
            address: Address {
                city: "Pune".to_string(),
                country: "India".to_string(),
            },
        };
        let result = create_student_handler(State(state), Json(req)).await;
        assert!(matches!(result, Err(StudentError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_rejects_malformed_id() {
        let state = offline_state().await;

        let result = get_student_handler(State(state), Path("xyz".to_string())).await;
        assert!(matches!(result, Err(StudentError::InvalidId(_))));
    }

    #[tokio::test]
    async fn test_update_rejects_malformed_id() {
        let state = offline_state().await;

        let result = update_student_handler(
            State(state),
            Path("xyz".to_string()),
            Json(UpdateStudentRequest::default()),
        )
        .await;
        assert!(matches!(result, Err(StudentError::InvalidId(_))));
    }

    #[tokio::test]
    async fn test_delete_rejects_malformed_id() {
        let state = offline_state().await;

        let result = delete_student_handler(State(state), Path("xyz".to_string())).await;
        assert!(matches!(result, Err(StudentError::InvalidId(_))));
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
