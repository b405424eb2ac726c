pub mod model;

use crate::domain::{NewPerson, Person};
use crate::error::{ApiError, ApiResult, INVALID_ID_MESSAGE};
use crate::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    routing::get,
    Json, Router,
};
use model::{DataResponse, MessageResponse, PersonPayload};

pub fn people_router() -> Router<AppState> {
    Router::new()
        .route(
            "/person",
            get(list_people_handler).post(create_person_handler),
        )
        .route(
            "/person/{id}",
            get(get_person_handler)
                .put(update_person_handler)
                .delete(delete_person_handler),
        )
}

async fn list_people_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<DataResponse<Vec<Person>>>> {
    let people = state.repo.list_people(state.config.list_limit).await?;

    if people.is_empty() {
        return Err(ApiError::NotFound);
    }

    tracing::debug!(count = people.len(), "listed people");
    Ok(Json(DataResponse { data: people }))
}

async fn get_person_handler(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<DataResponse<Person>>> {
    let Path(id) = id?;

    // a non-numeric id can never match a row
    let Ok(id) = id.parse::<i64>() else {
        return Err(ApiError::NotFound);
    };

    match state.repo.get_person(id).await? {
        Some(person) => Ok(Json(DataResponse { data: person })),
        None => Err(ApiError::NotFound),
    }
}

async fn create_person_handler(
    State(state): State<AppState>,
    payload: Result<Json<PersonPayload>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(payload) = payload?;
    let new_person = NewPerson::try_from(payload)?;

    let person = state.repo.create_person(&new_person).await?;

    tracing::debug!(id = person.id, "created {}", person);
    Ok(Json(MessageResponse::created(person.id)))
}

async fn update_person_handler(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<PersonPayload>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = id?;
    let id = parse_id(&id)?;
    let Json(payload) = payload?;
    let new_person = NewPerson::try_from(payload)?;

    let affected = state.repo.update_person(id, &new_person).await?;
    if affected == 0 {
        return Err(ApiError::NotFound);
    }

    tracing::debug!(id, "updated {}", new_person);
    Ok(Json(MessageResponse::success()))
}

async fn delete_person_handler(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = id?;
    let id = parse_id(&id)?;

    let affected = state.repo.delete_person(id).await?;
    if affected == 0 {
        return Err(ApiError::NotFound);
    }

    tracing::debug!(id, "deleted person");
    Ok(Json(MessageResponse::success()))
}

fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::Validation(INVALID_ID_MESSAGE.to_string()))
}
