//! API Routes
//!
//! Configures the Axum router with all student record endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_student_handler, delete_student_handler, get_student_handler, health_handler,
    list_students_handler, update_student_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /students/` - Create a student record
/// - `GET /students/` - List students, optionally filtered by country/age
/// - `GET /students/:id` - Retrieve one student record
/// - `PATCH /students/:id` - Partially update a student record
/// - `DELETE /students/:id` - Delete a student record
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route(
            "/students/",
            post(create_student_handler).get(list_students_handler),
        )
        .route(
            "/students/:id",
            get(get_student_handler)
                .patch(update_student_handler)
                .delete(delete_student_handler),
        )
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
