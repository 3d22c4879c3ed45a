//! HTTP route entry point for `/api/...`.
//!
//! Routes are organized by domain, each protected via appropriate access
//! control middleware. Management surfaces are teacher-only; student-facing
//! reads and actions only require authentication.

use crate::auth::guards::{allow_authenticated, allow_teacher};
use crate::routes::{
    academies::academy_routes, auth::auth_routes, classes::class_routes, clinics::clinic_routes,
    daily_feedback::daily_feedback_routes, feedback::feedback_routes, health::health_routes,
    homeworks::homework_routes, lessons::lesson_routes, student_homeworks::student_homework_routes,
    students::student_routes, submissions::submission_routes, tests::test_routes,
};
use axum::{Router, middleware::from_fn};
use util::state::AppState;

pub mod academies;
pub mod auth;
pub mod classes;
pub mod clinics;
pub mod common;
pub mod daily_feedback;
pub mod feedback;
pub mod health;
pub mod homeworks;
pub mod lessons;
pub mod student_homeworks;
pub mod students;
pub mod submissions;
pub mod tests;

/// Builds the complete application router for all HTTP endpoints.
///
/// # Route Structure:
/// - `/health` → Health check endpoint (no authentication required).
/// - `/auth` → Login endpoints (public) plus `/me` and pin management.
/// - `/academies`, `/classes`, `/students` → Roster management (teacher-only).
/// - `/lessons`, `/tests`, `/homeworks` → Lesson content management.
/// - `/submissions`, `/student-homeworks` → Grading and progress.
/// - `/clinics` → Clinic scheduling, registration and eligibility.
/// - `/daily-feedback` → Per-student daily feedback aggregation.
/// - `/feedback` → Teacher feedback on submissions.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/auth", auth_routes())
        .nest(
            "/academies",
            academy_routes().route_layer(from_fn(allow_teacher)),
        )
        .nest(
            "/classes",
            class_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest(
            "/students",
            student_routes().route_layer(from_fn(allow_teacher)),
        )
        .nest(
            "/lessons",
            lesson_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest(
            "/tests",
            test_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest(
            "/submissions",
            submission_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest(
            "/homeworks",
            homework_routes().route_layer(from_fn(allow_teacher)),
        )
        .nest(
            "/student-homeworks",
            student_homework_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest(
            "/clinics",
            clinic_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest(
            "/daily-feedback",
            daily_feedback_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest(
            "/feedback",
            feedback_routes().route_layer(from_fn(allow_teacher)),
        )
        .with_state(app_state)
}
