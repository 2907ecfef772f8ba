use std::sync::Arc;

use axum::Router;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{
        auth, cart, cleaning, congregation, duty, group, import, program, publisher, talk,
        territory, user,
    },
    error::AppError,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ministryboard API",
        description = "Congregation ministry scheduling API"
    ),
    tags(
        (name = auth::AUTH_TAG, description = "Setup, login and session"),
        (name = user::USER_TAG, description = "User accounts and permissions"),
        (name = congregation::CONGREGATION_TAG, description = "Congregation settings"),
        (name = group::GROUP_TAG, description = "Field service groups"),
        (name = publisher::PUBLISHER_TAG, description = "Publishers"),
        (name = territory::TERRITORY_TAG, description = "Territories and assignments"),
        (name = cart::CART_TAG, description = "Cart witnessing schedules"),
        (name = cleaning::CLEANING_TAG, description = "Cleaning rosters"),
        (name = duty::DUTY_TAG, description = "Mechanical duties"),
        (name = program::PROGRAM_TAG, description = "Weekly meeting programs"),
        (name = talk::TALK_TAG, description = "Public talks and speakers"),
        (name = import::IMPORT_TAG, description = "AI-assisted PDF import"),
    )
)]
struct ApiDoc;

/// Builds the application router with OpenAPI documentation, CORS and a
/// request rate limit.
pub fn router(state: AppState) -> Result<Router, AppError> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(5)
            .burst_size(50)
            .finish()
            .ok_or_else(|| {
                AppError::InternalError("Invalid rate limiter configuration".to_string())
            })?,
    );

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::setup))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(user::get_users, user::create_user))
        .routes(routes!(user::update_permissions))
        .routes(routes!(user::delete_user))
        .routes(routes!(
            congregation::get_congregation,
            congregation::update_congregation
        ))
        .routes(routes!(group::get_groups, group::create_group))
        .routes(routes!(group::update_group, group::delete_group))
        .routes(routes!(
            publisher::get_publishers,
            publisher::create_publisher
        ))
        .routes(routes!(
            publisher::get_publisher_by_id,
            publisher::update_publisher,
            publisher::delete_publisher
        ))
        .routes(routes!(
            territory::get_territories,
            territory::create_territory
        ))
        .routes(routes!(
            territory::update_territory,
            territory::delete_territory
        ))
        .routes(routes!(
            territory::assign_territory,
            territory::get_territory_assignments
        ))
        .routes(routes!(territory::return_territory))
        .routes(routes!(cart::get_locations, cart::create_location))
        .routes(routes!(cart::update_location, cart::delete_location))
        .routes(routes!(cart::get_slots, cart::create_slot))
        .routes(routes!(cart::update_slot, cart::delete_slot))
        .routes(routes!(cart::assign_publisher))
        .routes(routes!(cart::unassign_publisher))
        .routes(routes!(cart::generate_schedules))
        .routes(routes!(cleaning::get_cleaning, cleaning::create_cleaning))
        .routes(routes!(cleaning::update_cleaning, cleaning::delete_cleaning))
        .routes(routes!(duty::get_duties, duty::create_duty))
        .routes(routes!(duty::update_duty, duty::delete_duty))
        .routes(routes!(program::get_programs, program::create_program))
        .routes(routes!(
            program::get_program_by_id,
            program::update_program,
            program::delete_program
        ))
        .routes(routes!(talk::get_speakers, talk::create_speaker))
        .routes(routes!(talk::update_speaker, talk::delete_speaker))
        .routes(routes!(talk::get_talks, talk::create_talk))
        .routes(routes!(talk::update_talk, talk::delete_talk))
        .routes(routes!(
            talk::get_talk_schedule,
            talk::create_talk_schedule
        ))
        .routes(routes!(
            talk::update_talk_schedule,
            talk::delete_talk_schedule
        ))
        .routes(routes!(import::import_publishers))
        .routes(routes!(import::import_programs))
        .split_for_parts();

    let router = router
        .layer(GovernorLayer::new(governor_conf))
        .layer(CorsLayer::permissive())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api));

    Ok(router.with_state(state))
}
