use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use super::domain::ApplicantId;
use super::repository::ApplicantRepository;
use super::service::{ApplicantProfileService, ProfileServiceError};
use super::storage::FileStorage;

type SharedService<R, S> = Arc<ApplicantProfileService<R, S>>;

/// Router exposing the profile sections and the token + email lookup.
pub fn applicant_router<R, S>(service: SharedService<R, S>) -> Router
where
    R: ApplicantRepository + 'static,
    S: FileStorage + 'static,
{
    Router::new()
        .route("/get_user", get(current_user_handler::<R, S>))
        .route(
            "/api/v1/applicants/:applicant_id/personal_details",
            get(personal_details_handler::<R, S>),
        )
        .route(
            "/api/v1/applicants/:applicant_id/qualifications_and_licences",
            get(qualifications_and_licences_handler::<R, S>),
        )
        .route(
            "/api/v1/applicants/:applicant_id/experiences",
            get(experiences_handler::<R, S>),
        )
        .route(
            "/api/v1/applicants/:applicant_id/extra",
            get(extra_handler::<R, S>),
        )
        .route(
            "/api/v1/applicants/:applicant_id/references",
            get(references_handler::<R, S>),
        )
        .route(
            "/api/v1/applicants/:applicant_id/jobs",
            get(applied_jobs_handler::<R, S>),
        )
        .with_state(service)
}

fn respond<T: Serialize>(result: Result<T, ProfileServiceError>) -> Response {
    match result {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(ProfileServiceError::ApplicantNotFound(id)) => {
            let payload = json!({
                "error": format!("applicant {id} not found"),
                "success": false,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            error!(error = %other, "profile request failed");
            let payload = json!({
                "error": other.to_string(),
                "success": false,
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn personal_details_handler<R, S>(
    State(service): State<SharedService<R, S>>,
    Path(applicant_id): Path<u64>,
) -> Response
where
    R: ApplicantRepository + 'static,
    S: FileStorage + 'static,
{
    respond(service.personal_details(ApplicantId(applicant_id)))
}

pub(crate) async fn qualifications_and_licences_handler<R, S>(
    State(service): State<SharedService<R, S>>,
    Path(applicant_id): Path<u64>,
) -> Response
where
    R: ApplicantRepository + 'static,
    S: FileStorage + 'static,
{
    respond(service.qualifications_and_licences(ApplicantId(applicant_id)))
}

pub(crate) async fn experiences_handler<R, S>(
    State(service): State<SharedService<R, S>>,
    Path(applicant_id): Path<u64>,
) -> Response
where
    R: ApplicantRepository + 'static,
    S: FileStorage + 'static,
{
    respond(service.experiences(ApplicantId(applicant_id)))
}

pub(crate) async fn extra_handler<R, S>(
    State(service): State<SharedService<R, S>>,
    Path(applicant_id): Path<u64>,
) -> Response
where
    R: ApplicantRepository + 'static,
    S: FileStorage + 'static,
{
    respond(service.extra(ApplicantId(applicant_id)))
}

pub(crate) async fn references_handler<R, S>(
    State(service): State<SharedService<R, S>>,
    Path(applicant_id): Path<u64>,
) -> Response
where
    R: ApplicantRepository + 'static,
    S: FileStorage + 'static,
{
    respond(service.references(ApplicantId(applicant_id)))
}

pub(crate) async fn applied_jobs_handler<R, S>(
    State(service): State<SharedService<R, S>>,
    Path(applicant_id): Path<u64>,
) -> Response
where
    R: ApplicantRepository + 'static,
    S: FileStorage + 'static,
{
    respond(service.applied_jobs(ApplicantId(applicant_id)))
}

/// Query-string fallback for clients that cannot set headers.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CredentialsQuery {
    pub(crate) auth_token: Option<String>,
    pub(crate) email: Option<String>,
}

pub(crate) const TOKEN_HEADER: &str = "x-user-token";
pub(crate) const EMAIL_HEADER: &str = "x-user-email";

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(non_blank)
}

/// The auth scheme is matched case-insensitively.
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    header_value(headers, header::AUTHORIZATION.as_str())
        .and_then(|value| {
            let (scheme, token) = value.split_once(' ')?;
            scheme.eq_ignore_ascii_case("bearer").then(|| non_blank(token))?
        })
        .or_else(|| header_value(headers, TOKEN_HEADER))
}

pub(crate) async fn current_user_handler<R, S>(
    State(service): State<SharedService<R, S>>,
    headers: HeaderMap,
    Query(query): Query<CredentialsQuery>,
) -> Response
where
    R: ApplicantRepository + 'static,
    S: FileStorage + 'static,
{
    let auth_token =
        bearer_token(&headers).or_else(|| query.auth_token.as_deref().and_then(non_blank));
    let email = header_value(&headers, EMAIL_HEADER)
        .or_else(|| query.email.as_deref().and_then(non_blank));

    let (Some(auth_token), Some(email)) = (auth_token, email) else {
        let payload = json!({
            "error": "missing credentials",
            "success": false,
        });
        return (StatusCode::UNAUTHORIZED, axum::Json(payload)).into_response();
    };

    match service.current_user(&auth_token, &email) {
        Ok(Some(view)) => (StatusCode::OK, axum::Json(view)).into_response(),
        Ok(None) => {
            let payload = json!({
                "error": "applicant not found",
                "success": false,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => respond::<()>(Err(other)),
    }
}
