//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{
    admins, approvals, auth, defenses, faculty, health, news, reports, students, theses,
};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", api_v1_routes())
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(me_routes())
        .merge(account_routes())
        .merge(thesis_routes())
        .merge(defense_routes())
        .merge(news_routes())
        .merge(report_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(auth::login))
}

/// Routes scoped to the calling account
fn me_routes() -> Router<AppState> {
    Router::new()
        // Student self-service
        .route("/me/thesis", get(theses::my_thesis))
        .route("/me/thesis/payment-proof", post(theses::upload_payment_proof))
        .route("/me/eligibility", get(theses::my_eligibility))
        .route("/me/approvals", get(approvals::my_approvals))
        .route("/me/defense", post(defenses::register_defense))
        .route("/me/defense", get(defenses::my_defense))
        // Faculty self-service
        .route("/me/advisees", get(theses::my_advisees))
        .route("/me/defenses", get(defenses::my_examined_defenses))
}

/// Account management routes (admin)
fn account_routes() -> Router<AppState> {
    Router::new()
        // Students
        .route("/students", post(students::create_students))
        .route("/students", get(students::list_students))
        .route("/students/:student_id", get(students::get_student))
        .route("/students/:student_id", patch(students::update_student))
        .route("/students/:student_id", delete(students::delete_student))
        .route(
            "/students/:student_id/force",
            delete(students::force_delete_student),
        )
        .route(
            "/students/:student_id/approvals",
            get(approvals::student_approvals),
        )
        // Faculty
        .route("/faculty", post(faculty::create_faculty))
        .route("/faculty", get(faculty::list_faculty))
        .route("/faculty/:faculty_id", get(faculty::get_faculty))
        .route("/faculty/:faculty_id", patch(faculty::update_faculty))
        .route("/faculty/:faculty_id", delete(faculty::delete_faculty))
        // Administrators
        .route("/admins", post(admins::create_admin))
        .route("/admins", get(admins::list_admins))
        .route("/admins/:admin_id", get(admins::get_admin))
        .route("/admins/:admin_id", patch(admins::update_admin))
        .route("/admins/:admin_id", delete(admins::delete_admin))
        .route("/admins/:admin_id/force", delete(admins::force_delete_admin))
}

/// Thesis management routes (admin, plus the advisor approval endpoint)
fn thesis_routes() -> Router<AppState> {
    Router::new()
        .route("/theses", get(theses::list_theses))
        .route("/theses/:thesis_id", get(theses::get_thesis))
        .route("/theses/:thesis_id", patch(theses::update_thesis))
        .route("/theses/:thesis_id", delete(theses::delete_thesis))
        .route(
            "/theses/:thesis_id/payment-proof",
            get(theses::download_payment_proof),
        )
        .route("/approvals", post(approvals::record_approval))
}

/// Defense management routes
fn defense_routes() -> Router<AppState> {
    Router::new()
        .route("/defenses", get(defenses::list_defenses))
        .route("/defenses/:defense_id", get(defenses::get_defense))
        .route("/defenses/:defense_id", patch(defenses::update_defense))
        .route("/defenses/:defense_id", delete(defenses::delete_defense))
        .route(
            "/defenses/:defense_id/note",
            put(defenses::submit_examiner_note),
        )
}

/// News routes (public reads, admin writes)
fn news_routes() -> Router<AppState> {
    Router::new()
        .route("/news", get(news::list_news))
        .route("/news", post(news::create_news))
        .route("/news/:news_id", get(news::get_news))
        .route("/news/:news_id", patch(news::update_news))
        .route("/news/:news_id", delete(news::delete_news))
}

/// Report download routes (admin)
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/reports/students", get(reports::students_report))
        .route("/reports/faculty", get(reports::faculty_report))
        .route("/reports/theses", get(reports::theses_report))
        .route("/reports/defenses", get(reports::defenses_report))
}
