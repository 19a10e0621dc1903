use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::{
    controller::{admin, auth, diagnostics, document, meeting, parent, payment, student, trip},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/forgot-password", post(auth::forgot_password))
        .route("/api/auth/reset-password", post(auth::reset_password))
        .route("/api/auth/user-by-email", get(auth::get_user_by_email))
        .route(
            "/api/students",
            get(student::get_all_students).post(student::create_student),
        )
        .route("/api/students/pending", get(student::get_pending_students))
        .route("/api/students/approved", get(student::get_approved_students))
        .route("/api/students/rejected", get(student::get_rejected_students))
        .route(
            "/api/students/parent/{parent_id}",
            get(student::get_students_by_parent),
        )
        .route(
            "/api/students/{student_id}",
            get(student::get_student)
                .put(student::update_student)
                .delete(student::delete_student),
        )
        .route(
            "/api/students/{student_id}/approve",
            put(student::approve_student),
        )
        .route(
            "/api/students/{student_id}/approve-with-class",
            put(student::approve_student_with_class),
        )
        .route(
            "/api/students/{student_id}/reject",
            put(student::reject_student),
        )
        .route(
            "/api/parents",
            get(parent::get_all_parents).post(parent::create_parent),
        )
        .route(
            "/api/parents/{parent_id}",
            get(parent::get_parent)
                .put(parent::update_parent)
                .delete(parent::delete_parent),
        )
        .route(
            "/api/parents/{parent_id}/children",
            get(parent::get_children).post(parent::add_child),
        )
        .route(
            "/api/parents/{parent_id}/children/{student_id}",
            put(parent::update_child),
        )
        .route(
            "/api/parents/{parent_id}/document-requests",
            post(parent::request_document),
        )
        .route(
            "/api/trips",
            get(trip::get_all_trips).post(trip::create_trip),
        )
        .route(
            "/api/trips/{trip_id}",
            get(trip::get_trip)
                .put(trip::update_trip)
                .delete(trip::delete_trip),
        )
        .route("/api/trips/{trip_id}/register", post(trip::register_for_trip))
        .route(
            "/api/trips/{trip_id}/register/{student_id}",
            delete(trip::unregister_from_trip),
        )
        .route("/api/trips/{trip_id}/hold", put(trip::hold_trip))
        .route("/api/trips/{trip_id}/activate", put(trip::activate_trip))
        .route("/api/trips/{trip_id}/image", put(trip::update_trip_image))
        .route(
            "/api/trips/{trip_id}/paid-students",
            get(trip::get_paid_students),
        )
        .route("/api/payments", get(payment::get_all_payments))
        .route("/api/payments/mock", post(payment::create_mock_payment))
        .route(
            "/api/payments/student/{student_id}",
            get(payment::get_payments_by_student),
        )
        .route(
            "/api/payments/parent/{parent_id}",
            get(payment::get_payments_by_parent),
        )
        .route(
            "/api/payments/trip/{trip_id}",
            get(payment::get_payments_by_trip),
        )
        .route(
            "/api/payments/status/{status}",
            get(payment::get_payments_by_status),
        )
        .route(
            "/api/payments/check/{student_id}/{trip_id}",
            get(payment::check_payment),
        )
        .route(
            "/api/payments/{payment_id}",
            get(payment::get_payment)
                .put(payment::update_payment)
                .delete(payment::delete_payment),
        )
        .route(
            "/api/payments/{payment_id}/status",
            put(payment::update_payment_status),
        )
        .route(
            "/api/meetings",
            get(meeting::get_all_meetings).post(meeting::create_meeting),
        )
        .route(
            "/api/meetings/request-one-on-one",
            post(meeting::request_one_on_one),
        )
        .route(
            "/api/meetings/parent/{parent_id}",
            get(meeting::get_meetings_by_parent),
        )
        .route("/api/meetings/pending", get(meeting::get_pending_meetings))
        .route("/api/meetings/approved", get(meeting::get_approved_meetings))
        .route("/api/meetings/rejected", get(meeting::get_rejected_meetings))
        .route(
            "/api/meetings/{meeting_id}",
            get(meeting::get_meeting)
                .put(meeting::update_meeting)
                .delete(meeting::delete_meeting),
        )
        .route(
            "/api/meetings/{meeting_id}/approve",
            put(meeting::approve_meeting),
        )
        .route(
            "/api/meetings/{meeting_id}/reject",
            put(meeting::reject_meeting),
        )
        .route(
            "/api/admin/announcements",
            get(admin::get_all_announcements).post(admin::create_announcement),
        )
        .route(
            "/api/admin/announcements/{announcement_id}",
            get(admin::get_announcement)
                .put(admin::update_announcement)
                .delete(admin::delete_announcement),
        )
        .route(
            "/api/admin/document-requests",
            get(admin::get_all_document_requests),
        )
        .route(
            "/api/admin/document-requests/pending",
            get(admin::get_pending_document_requests),
        )
        .route(
            "/api/admin/document-requests/{request_id}/approve",
            put(admin::approve_document_request),
        )
        .route(
            "/api/documents",
            get(document::get_all_documents).post(document::upload_document),
        )
        .route(
            "/api/documents/student/{student_id}",
            get(document::get_documents_by_student),
        )
        .route(
            "/api/documents/parent/{parent_id}",
            get(document::get_documents_by_parent),
        )
        .route(
            "/api/documents/type/{document_type}",
            get(document::get_documents_by_type),
        )
        .route(
            "/api/documents/unverified",
            get(document::get_unverified_documents),
        )
        .route(
            "/api/documents/{document_id}",
            get(document::get_document)
                .put(document::update_document)
                .delete(document::delete_document),
        )
        .route(
            "/api/documents/{document_id}/verify",
            put(document::verify_document),
        )
        .route("/api/test/health", get(diagnostics::health))
        .route("/api/test/firebase", get(diagnostics::probe_store_write))
        .route("/api/test/firebase/read", get(diagnostics::probe_store_read))
}
