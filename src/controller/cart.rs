use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    controller::RangeParams,
    dto::{
        api::ErrorDto,
        cart::{
            AssignCartSlotDto, CartLocationDto, CartSlotDto, CreateCartLocationDto,
            CreateCartSlotDto, GenerateReportDto, GenerateSchedulesDto, UpdateCartLocationDto,
            UpdateCartSlotDto,
        },
    },
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::cart::{
        CreateCartLocationParams, CreateCartSlotParams, UpdateCartLocationParams,
        UpdateCartSlotParams,
    },
    service::cart::CartService,
    state::AppState,
    util::parse::{parse_date, parse_time},
};

/// Tag for grouping cart-witnessing endpoints in OpenAPI documentation
pub static CART_TAG: &str = "cart";

// Locations

/// Get all cart locations.
#[utoipa::path(
    get,
    path = "/api/carts/locations",
    tag = CART_TAG,
    responses(
        (status = 200, description = "Locations", body = Vec<CartLocationDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'carts' scope", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_locations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Carts])
        .await?;

    let service = CartService::new(&state.db);

    let locations = service.get_locations(user.congregation_id).await?;

    Ok((
        StatusCode::OK,
        Json(
            locations
                .into_iter()
                .map(|l| l.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a cart location.
#[utoipa::path(
    post,
    path = "/api/carts/locations",
    tag = CART_TAG,
    request_body = CreateCartLocationDto,
    responses(
        (status = 201, description = "Location created", body = CartLocationDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'carts' scope", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_location(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCartLocationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Carts])
        .await?;

    let service = CartService::new(&state.db);

    let location = service
        .create_location(CreateCartLocationParams {
            congregation_id: user.congregation_id,
            name: payload.name,
            address: payload.address,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(location.into_dto())))
}

/// Update a cart location.
#[utoipa::path(
    put,
    path = "/api/carts/locations/{location_id}",
    tag = CART_TAG,
    params(
        ("location_id" = i32, Path, description = "Location ID")
    ),
    request_body = UpdateCartLocationDto,
    responses(
        (status = 200, description = "Location updated", body = CartLocationDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'carts' scope", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_location(
    State(state): State<AppState>,
    session: Session,
    Path(location_id): Path<i32>,
    Json(payload): Json<UpdateCartLocationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Carts])
        .await?;

    let service = CartService::new(&state.db);

    let location = service
        .update_location(UpdateCartLocationParams {
            id: location_id,
            congregation_id: user.congregation_id,
            name: payload.name,
            address: payload.address,
        })
        .await?;

    match location {
        Some(location) => Ok((StatusCode::OK, Json(location.into_dto()))),
        None => Err(AppError::NotFound("Location not found".to_string())),
    }
}

/// Delete a cart location, its slots and their assignments.
#[utoipa::path(
    delete,
    path = "/api/carts/locations/{location_id}",
    tag = CART_TAG,
    params(
        ("location_id" = i32, Path, description = "Location ID")
    ),
    responses(
        (status = 204, description = "Location deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'carts' scope", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_location(
    State(state): State<AppState>,
    session: Session,
    Path(location_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Carts])
        .await?;

    let service = CartService::new(&state.db);

    let deleted = service
        .delete_location(location_id, user.congregation_id)
        .await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Location not found".to_string()))
    }
}

// Slots

/// Get cart slots in a date range with their publishers.
#[utoipa::path(
    get,
    path = "/api/carts/slots",
    tag = CART_TAG,
    params(
        ("from" = Option<String>, Query, description = "Range start, YYYY-MM-DD"),
        ("to" = Option<String>, Query, description = "Range end, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Slots", body = Vec<CartSlotDto>),
        (status = 400, description = "Malformed range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'carts' scope", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_slots(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<RangeParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Carts])
        .await?;

    let service = CartService::new(&state.db);

    let (from, to) = params.parse()?;
    let slots = service.get_slots(user.congregation_id, from, to).await?;

    Ok((
        StatusCode::OK,
        Json(slots.into_iter().map(|s| s.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a cart slot.
///
/// Slots are unique per (location, date, start time); mark a slot fixed to
/// make it part of the weekly template the projection copies forward.
#[utoipa::path(
    post,
    path = "/api/carts/slots",
    tag = CART_TAG,
    request_body = CreateCartSlotDto,
    responses(
        (status = 201, description = "Slot created", body = CartSlotDto),
        (status = 400, description = "Invalid date, time or location", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'carts' scope", body = ErrorDto),
        (status = 409, description = "Slot already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_slot(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCartSlotDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Carts])
        .await?;

    let service = CartService::new(&state.db);

    let slot = service
        .create_slot(
            user.congregation_id,
            CreateCartSlotParams {
                location_id: payload.location_id,
                date: parse_date(&payload.date)?,
                start_time: parse_time(&payload.start_time)?,
                end_time: parse_time(&payload.end_time)?,
                fixed: payload.fixed,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(slot.into_dto())))
}

/// Update a cart slot.
#[utoipa::path(
    put,
    path = "/api/carts/slots/{slot_id}",
    tag = CART_TAG,
    params(
        ("slot_id" = i32, Path, description = "Slot ID")
    ),
    request_body = UpdateCartSlotDto,
    responses(
        (status = 200, description = "Slot updated", body = CartSlotDto),
        (status = 400, description = "Invalid date, time or location", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'carts' scope", body = ErrorDto),
        (status = 404, description = "Slot not found", body = ErrorDto),
        (status = 409, description = "Slot already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_slot(
    State(state): State<AppState>,
    session: Session,
    Path(slot_id): Path<i32>,
    Json(payload): Json<UpdateCartSlotDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Carts])
        .await?;

    let service = CartService::new(&state.db);

    let slot = service
        .update_slot(UpdateCartSlotParams {
            id: slot_id,
            congregation_id: user.congregation_id,
            location_id: payload.location_id,
            date: parse_date(&payload.date)?,
            start_time: parse_time(&payload.start_time)?,
            end_time: parse_time(&payload.end_time)?,
            fixed: payload.fixed,
        })
        .await?;

    match slot {
        Some(slot) => Ok((StatusCode::OK, Json(slot.into_dto()))),
        None => Err(AppError::NotFound("Slot not found".to_string())),
    }
}

/// Delete a cart slot and its assignments.
#[utoipa::path(
    delete,
    path = "/api/carts/slots/{slot_id}",
    tag = CART_TAG,
    params(
        ("slot_id" = i32, Path, description = "Slot ID")
    ),
    responses(
        (status = 204, description = "Slot deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'carts' scope", body = ErrorDto),
        (status = 404, description = "Slot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_slot(
    State(state): State<AppState>,
    session: Session,
    Path(slot_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Carts])
        .await?;

    let service = CartService::new(&state.db);

    let deleted = service.delete_slot(slot_id, user.congregation_id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Slot not found".to_string()))
    }
}

// Assignments

/// Put a publisher on a cart slot.
///
/// Rejected when the slot is full, the publisher is already on it, or the
/// publisher is booked elsewhere at the same date and time.
#[utoipa::path(
    post,
    path = "/api/carts/slots/{slot_id}/assignments",
    tag = CART_TAG,
    params(
        ("slot_id" = i32, Path, description = "Slot ID")
    ),
    request_body = AssignCartSlotDto,
    responses(
        (status = 201, description = "Publisher assigned"),
        (status = 400, description = "Unknown publisher", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'carts' scope", body = ErrorDto),
        (status = 404, description = "Slot not found", body = ErrorDto),
        (status = 409, description = "Slot full or publisher double-booked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_publisher(
    State(state): State<AppState>,
    session: Session,
    Path(slot_id): Path<i32>,
    Json(payload): Json<AssignCartSlotDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Carts])
        .await?;

    let service = CartService::new(&state.db);

    service
        .assign_publisher(user.congregation_id, slot_id, payload.publisher_id)
        .await?;

    Ok(StatusCode::CREATED)
}

/// Remove a publisher from a cart slot.
#[utoipa::path(
    delete,
    path = "/api/carts/slots/{slot_id}/assignments/{publisher_id}",
    tag = CART_TAG,
    params(
        ("slot_id" = i32, Path, description = "Slot ID"),
        ("publisher_id" = i32, Path, description = "Publisher ID")
    ),
    responses(
        (status = 204, description = "Publisher removed"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'carts' scope", body = ErrorDto),
        (status = 404, description = "Slot or assignment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unassign_publisher(
    State(state): State<AppState>,
    session: Session,
    Path((slot_id, publisher_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Carts])
        .await?;

    let service = CartService::new(&state.db);

    let removed = service
        .unassign_publisher(user.congregation_id, slot_id, publisher_id)
        .await?;

    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(
            "Publisher is not on this slot".to_string(),
        ))
    }
}

// Projection

/// Project the fixed weekly schedule forward N weeks.
///
/// Copies the most recent week of fixed slots, including their publisher
/// assignments, into the following weeks. Slots whose (location, date, start
/// time) already exist are skipped, so re-running the projection is safe.
#[utoipa::path(
    post,
    path = "/api/carts/schedules/generate",
    tag = CART_TAG,
    request_body = GenerateSchedulesDto,
    responses(
        (status = 200, description = "Projection report", body = GenerateReportDto),
        (status = 400, description = "Weeks out of range or no fixed slots", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'carts' scope", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn generate_schedules(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<GenerateSchedulesDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Carts])
        .await?;

    let service = CartService::new(&state.db);

    let report = service
        .generate_fixed_schedules(user.congregation_id, payload.weeks)
        .await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}
