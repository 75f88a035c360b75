//! Person CRUD handlers.
//!
//! Handlers validate payloads before any repository call and translate
//! repository errors into HTTP responses via `AppError`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use roster_core::person::{validate_person, NewPerson, Person};
use roster_core::storage::{PersonSelector, RepositoryError};

use crate::{handlers::AppError, models::StatusMessage, state::AppState};

/// List all persons (GET /api/).
///
/// An empty store is reported as not-found rather than an empty array,
/// matching the wire contract of targeted lookups.
pub async fn list_persons(State(state): State<AppState>) -> Result<Json<Vec<Person>>, AppError> {
    let persons = state.person_repo.list_persons().await?;

    if persons.is_empty() {
        return Err(RepositoryError::Empty {
            entity_type: "Person",
        }
        .into());
    }

    Ok(Json(persons))
}

/// Create a new person (POST /api/).
///
/// The confirmation carries a human-readable message only; the assigned
/// identifier is not returned.
pub async fn create_person(
    State(state): State<AppState>,
    Json(payload): Json<NewPerson>,
) -> Result<(StatusCode, Json<StatusMessage>), AppError> {
    tracing::debug!(payload = ?payload, "Received create person request");

    validate_person(&payload)?;

    state.person_repo.create_person(&payload).await?;

    tracing::info!(name = %payload.name, "Created new person");

    Ok((
        StatusCode::CREATED,
        Json(StatusMessage::new(
            StatusCode::CREATED,
            format!("{} created successfully", payload.name),
        )),
    ))
}

/// Fetch persons by id or name (GET /api/{user_param}).
///
/// The path token is tried as an integer identifier first; only on parse
/// failure is it matched against names. The response is a sequence either
/// way, since name lookups may return several rows.
pub async fn read_person(
    State(state): State<AppState>,
    Path(user_param): Path<String>,
) -> Result<Json<Vec<Person>>, AppError> {
    let selector = PersonSelector::parse(&user_param);

    let persons = state.person_repo.find_persons(&selector).await?;

    if persons.is_empty() {
        return Err(RepositoryError::NotFound {
            entity_type: "Person",
            key: selector.to_string(),
        }
        .into());
    }

    Ok(Json(persons))
}

/// Update a person by id (PUT /api/{user_id}).
///
/// Overwrites name and age in place; the identifier is never changed.
pub async fn update_person(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(payload): Json<NewPerson>,
) -> Result<Json<StatusMessage>, AppError> {
    tracing::debug!(person_id = user_id, payload = ?payload, "Received update person request");

    validate_person(&payload)?;

    state.person_repo.update_person(user_id, &payload).await?;

    tracing::info!(person_id = user_id, "Updated person");

    Ok(Json(StatusMessage::new(
        StatusCode::OK,
        "updated successfully",
    )))
}

/// Delete a person by id (DELETE /api/{user_id}).
pub async fn delete_person(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<StatusMessage>, AppError> {
    tracing::debug!(person_id = user_id, "Received delete person request");

    state.person_repo.delete_person(user_id).await?;

    tracing::info!(person_id = user_id, "Deleted person");

    Ok(Json(StatusMessage::new(
        StatusCode::OK,
        "deleted successfully",
    )))
}
