use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::WithRejection;
use service_core::error::AppError;

use crate::models::Person;
use crate::services::RepositoryError;
use crate::AppState;

/// List every person
#[utoipa::path(
    get,
    path = "/people",
    responses(
        (status = 200, description = "All stored people", body = [Person]),
        (status = 500, description = "Store unavailable")
    ),
    tag = "People"
)]
#[tracing::instrument(skip(state))]
pub async fn list_people(State(state): State<AppState>) -> Result<Json<Vec<Person>>, AppError> {
    let people = state.people.list_all().await?;
    Ok(Json(people))
}

/// Fetch one person by id
#[utoipa::path(
    get,
    path = "/people/{id}",
    params(("id" = String, Path, description = "24-character hex person id")),
    responses(
        (status = 200, description = "The person", body = Person),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "No person with this id")
    ),
    tag = "People"
)]
#[tracing::instrument(skip(state))]
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    match state.people.get_by_id(&id).await? {
        Some(person) => Ok(Json(person).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// Create a person; any id in the body is ignored
#[utoipa::path(
    post,
    path = "/people",
    request_body = Person,
    responses(
        (status = 201, description = "Person created; Location points at it", body = Person),
        (status = 400, description = "Malformed body")
    ),
    tag = "People"
)]
#[tracing::instrument(skip_all)]
pub async fn create_person(
    State(state): State<AppState>,
    WithRejection(Json(person), _): WithRejection<Json<Person>, AppError>,
) -> Result<Response, AppError> {
    let created = state.people.create(person).await?;
    let location = format!("/people/{}", created.id.as_deref().unwrap_or_default());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    )
        .into_response())
}

/// Replace a person; the body must carry the id of an existing person
#[utoipa::path(
    put,
    path = "/people",
    request_body = Person,
    responses(
        (status = 204, description = "Person replaced"),
        (status = 400, description = "Malformed body or id"),
        (status = 404, description = "No person with this id")
    ),
    tag = "People"
)]
#[tracing::instrument(skip_all)]
pub async fn update_person(
    State(state): State<AppState>,
    WithRejection(Json(person), _): WithRejection<Json<Person>, AppError>,
) -> Result<StatusCode, AppError> {
    let id = person.id.clone().ok_or(RepositoryError::MissingId)?;

    // replace_one matches nothing silently, so probe first to answer 404.
    if state.people.get_by_id(&id).await?.is_none() {
        return Ok(StatusCode::NOT_FOUND);
    }

    state.people.replace(person).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a person by id
#[utoipa::path(
    delete,
    path = "/people/{id}",
    params(("id" = String, Path, description = "24-character hex person id")),
    responses(
        (status = 204, description = "Person deleted"),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "No person with this id")
    ),
    tag = "People"
)]
#[tracing::instrument(skip(state))]
pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.people.get_by_id(&id).await?.is_none() {
        return Ok(StatusCode::NOT_FOUND);
    }

    state.people.delete_by_id(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
