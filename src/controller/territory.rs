use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    dto::{
        api::ErrorDto,
        territory::{
            AssignTerritoryDto, CreateTerritoryDto, ReturnTerritoryDto, TerritoryAssignmentDto,
            TerritoryDto, UpdateTerritoryDto,
        },
    },
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::territory::{CreateTerritoryParams, UpdateTerritoryParams},
    service::territory::TerritoryService,
    state::AppState,
    util::parse::parse_date,
};

/// Tag for grouping territory endpoints in OpenAPI documentation
pub static TERRITORY_TAG: &str = "territory";

/// Get all territories with their checked-out state.
#[utoipa::path(
    get,
    path = "/api/territories",
    tag = TERRITORY_TAG,
    responses(
        (status = 200, description = "Territories", body = Vec<TerritoryDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'territories' scope", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_territories(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Territories])
        .await?;

    let service = TerritoryService::new(&state.db);

    let territories = service.get_all(user.congregation_id).await?;

    Ok((
        StatusCode::OK,
        Json(
            territories
                .into_iter()
                .map(|t| t.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a territory.
#[utoipa::path(
    post,
    path = "/api/territories",
    tag = TERRITORY_TAG,
    request_body = CreateTerritoryDto,
    responses(
        (status = 201, description = "Territory created", body = TerritoryDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'territories' scope", body = ErrorDto),
        (status = 409, description = "Card number already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_territory(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTerritoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Territories])
        .await?;

    let service = TerritoryService::new(&state.db);

    let territory = service
        .create(CreateTerritoryParams {
            congregation_id: user.congregation_id,
            number: payload.number,
            name: payload.name,
            description: payload.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(territory.into_dto())))
}

/// Update a territory.
#[utoipa::path(
    put,
    path = "/api/territories/{territory_id}",
    tag = TERRITORY_TAG,
    params(
        ("territory_id" = i32, Path, description = "Territory ID")
    ),
    request_body = UpdateTerritoryDto,
    responses(
        (status = 200, description = "Territory updated", body = TerritoryDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'territories' scope", body = ErrorDto),
        (status = 404, description = "Territory not found", body = ErrorDto),
        (status = 409, description = "Card number already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_territory(
    State(state): State<AppState>,
    session: Session,
    Path(territory_id): Path<i32>,
    Json(payload): Json<UpdateTerritoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Territories])
        .await?;

    let service = TerritoryService::new(&state.db);

    let territory = service
        .update(UpdateTerritoryParams {
            id: territory_id,
            congregation_id: user.congregation_id,
            number: payload.number,
            name: payload.name,
            description: payload.description,
        })
        .await?;

    match territory {
        Some(territory) => Ok((StatusCode::OK, Json(territory.into_dto()))),
        None => Err(AppError::NotFound("Territory not found".to_string())),
    }
}

/// Delete a territory and its assignment history.
#[utoipa::path(
    delete,
    path = "/api/territories/{territory_id}",
    tag = TERRITORY_TAG,
    params(
        ("territory_id" = i32, Path, description = "Territory ID")
    ),
    responses(
        (status = 204, description = "Territory deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'territories' scope", body = ErrorDto),
        (status = 404, description = "Territory not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_territory(
    State(state): State<AppState>,
    session: Session,
    Path(territory_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Territories])
        .await?;

    let service = TerritoryService::new(&state.db);

    let deleted = service.delete(territory_id, user.congregation_id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Territory not found".to_string()))
    }
}

/// Check a territory out to a publisher.
///
/// Fails with a conflict while the territory has an open assignment; it must
/// be returned first.
#[utoipa::path(
    post,
    path = "/api/territories/{territory_id}/assignments",
    tag = TERRITORY_TAG,
    params(
        ("territory_id" = i32, Path, description = "Territory ID")
    ),
    request_body = AssignTerritoryDto,
    responses(
        (status = 201, description = "Territory checked out", body = TerritoryAssignmentDto),
        (status = 400, description = "Invalid date or publisher", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'territories' scope", body = ErrorDto),
        (status = 404, description = "Territory not found", body = ErrorDto),
        (status = 409, description = "Territory already checked out", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_territory(
    State(state): State<AppState>,
    session: Session,
    Path(territory_id): Path<i32>,
    Json(payload): Json<AssignTerritoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Territories])
        .await?;

    let service = TerritoryService::new(&state.db);

    let assigned_on = parse_date(&payload.assigned_on)?;

    let assignment = service
        .assign(
            user.congregation_id,
            territory_id,
            payload.publisher_id,
            assigned_on,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(assignment.into_dto())))
}

/// Return a checked-out territory.
#[utoipa::path(
    put,
    path = "/api/territories/{territory_id}/return",
    tag = TERRITORY_TAG,
    params(
        ("territory_id" = i32, Path, description = "Territory ID")
    ),
    request_body = ReturnTerritoryDto,
    responses(
        (status = 200, description = "Territory returned", body = TerritoryAssignmentDto),
        (status = 400, description = "Not checked out or invalid date", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'territories' scope", body = ErrorDto),
        (status = 404, description = "Territory not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn return_territory(
    State(state): State<AppState>,
    session: Session,
    Path(territory_id): Path<i32>,
    Json(payload): Json<ReturnTerritoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Territories])
        .await?;

    let service = TerritoryService::new(&state.db);

    let returned_on = parse_date(&payload.returned_on)?;

    let assignment = service
        .return_territory(user.congregation_id, territory_id, returned_on)
        .await?;

    Ok((StatusCode::OK, Json(assignment.into_dto())))
}

/// Get a territory's assignment history, newest first.
#[utoipa::path(
    get,
    path = "/api/territories/{territory_id}/assignments",
    tag = TERRITORY_TAG,
    params(
        ("territory_id" = i32, Path, description = "Territory ID")
    ),
    responses(
        (status = 200, description = "Assignment history", body = Vec<TerritoryAssignmentDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'territories' scope", body = ErrorDto),
        (status = 404, description = "Territory not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_territory_assignments(
    State(state): State<AppState>,
    session: Session,
    Path(territory_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Territories])
        .await?;

    let service = TerritoryService::new(&state.db);

    let history = service
        .assignment_history(user.congregation_id, territory_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(history.into_iter().map(|a| a.into_dto()).collect::<Vec<_>>()),
    ))
}
