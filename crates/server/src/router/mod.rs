//! # API Router Configuration
//!
//! Configures API routes for the imovia application. All /api routes sit
//! behind the API key middleware; /health is open.

use axum::{
    extract::{Path, Query, State as AxumState},
    middleware,
    routing::{get, patch, post},
    Json,
    Router,
};
use error::{ApiResponse, Result};
use http::StatusCode;

use crate::{
    dto::{
        broker_profiles::{
            BrokerProfileGetQuery,
            BrokerProfileListQuery,
            BrokerProfileListResponse,
            BrokerProfileResponse,
            CreateBrokerProfileRequest,
            RegionIdsRequest,
            UpdateBrokerProfileRequest,
        },
        members::{
            CreateMemberRequest,
            MemberGetQuery,
            MemberListQuery,
            MemberResponse,
            UpdateMemberRequest,
            UpdateMemberStatusRequest,
        },
        neighborhoods::{
            CreateNeighborhoodBatchRequest,
            CreateNeighborhoodRequest,
            NeighborhoodListQuery,
            NeighborhoodResponse,
            UpdateNeighborhoodRequest,
        },
        regions::{
            CreateRegionRequest,
            NeighborhoodIdsRequest,
            RegionGetQuery,
            RegionListQuery,
            RegionResponse,
            UpdateRegionRequest,
        },
        teams::{
            CreateTeamRequest,
            SetLeaderRequest,
            TeamGetQuery,
            TeamListQuery,
            TeamMembersQuery,
            TeamResponse,
            UpdateTeamRequest,
        },
        user_types::UserTypeResponse,
        users::{
            ChangePasswordRequest,
            CreateUserRequest,
            UpdateUserRequest,
            UserListQuery,
            UserResponse,
            UserSearchQuery,
        },
        UsageResponse,
    },
    handlers,
    AppState,
};

/// Creates the API router with all routes
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/user-types", get(list_user_types_handler))
        .route("/user-types/{id}", get(get_user_type_handler))
        .route("/users", post(create_user_handler).get(list_users_handler))
        .route("/users/search", get(search_users_handler))
        .route(
            "/users/{id}",
            axum::routing::put(update_user_handler).delete(delete_user_handler),
        )
        .route("/users/{id}/password", patch(change_password_handler))
        .route(
            "/neighborhoods",
            post(create_neighborhood_handler).get(list_neighborhoods_handler),
        )
        .route("/neighborhoods/batch", post(create_neighborhood_batch_handler))
        .route(
            "/neighborhoods/{id}",
            get(get_neighborhood_handler)
                .put(update_neighborhood_handler)
                .delete(delete_neighborhood_handler),
        )
        .route("/neighborhoods/{id}/usage", get(get_neighborhood_usage_handler))
        .route("/regions", post(create_region_handler).get(list_regions_handler))
        .route(
            "/regions/{id}",
            get(get_region_handler)
                .put(update_region_handler)
                .delete(delete_region_handler),
        )
        .route(
            "/regions/{id}/neighborhoods",
            axum::routing::put(replace_region_neighborhoods_handler)
                .post(add_region_neighborhoods_handler),
        )
        .route(
            "/regions/{id}/neighborhoods/{neighborhood_id}",
            axum::routing::delete(remove_region_neighborhood_handler),
        )
        .route("/regions/{id}/usage", get(get_region_usage_handler))
        .route("/teams", post(create_team_handler).get(list_teams_handler))
        .route(
            "/teams/{id}",
            get(get_team_handler)
                .put(update_team_handler)
                .delete(delete_team_handler),
        )
        .route("/teams/{id}/members", get(list_team_members_handler))
        .route("/teams/{id}/leader", post(set_team_leader_handler))
        .route("/members", post(create_member_handler).get(list_members_handler))
        .route(
            "/members/{id}",
            get(get_member_handler)
                .put(update_member_handler)
                .delete(delete_member_handler),
        )
        .route("/members/{id}/status", patch(update_member_status_handler))
        .route(
            "/broker-profiles",
            post(create_broker_profile_handler).get(list_broker_profiles_handler),
        )
        .route(
            "/broker-profiles/{id}",
            get(get_broker_profile_handler)
                .put(update_broker_profile_handler)
                .delete(delete_broker_profile_handler),
        )
        .route("/broker-profiles/{id}/restore", post(restore_broker_profile_handler))
        .route(
            "/broker-profiles/{id}/regions",
            axum::routing::put(replace_broker_regions_handler)
                .post(add_broker_regions_handler)
                .get(list_broker_regions_handler),
        )
        .route(
            "/broker-profiles/{id}/regions/{region_id}",
            axum::routing::delete(remove_broker_region_handler),
        )
        .route(
            "/broker-profiles/{id}/neighborhoods",
            axum::routing::put(replace_broker_neighborhoods_handler)
                .post(add_broker_neighborhoods_handler)
                .get(list_broker_neighborhoods_handler),
        )
        .route(
            "/broker-profiles/{id}/neighborhoods/{neighborhood_id}",
            axum::routing::delete(remove_broker_neighborhood_handler),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::api_key::api_key_auth_middleware,
        ))
        .with_state(state);

    Router::new().nest("/api", api)
}

/// Creates the health check router
pub fn create_health_router() -> Router { Router::new().route("/health", get(|| async { "OK" })) }

/// Creates the main application router
pub fn create_app_router(state: AppState) -> Router {
    Router::new()
        .merge(create_health_router())
        .merge(create_router(state))
}

// User type wrappers

/// Wrapper handler for listing user types
async fn list_user_types_handler(
    AxumState(state): AxumState<AppState>,
) -> Result<Json<ApiResponse<Vec<UserTypeResponse>>>> {
    handlers::user_types::list_user_types_handler(&state).await
}

/// Wrapper handler for fetching a user type
async fn get_user_type_handler(
    AxumState(state): AxumState<AppState>,
    Path(type_id): Path<i16>,
) -> Result<Json<ApiResponse<UserTypeResponse>>> {
    handlers::user_types::get_user_type_handler(&state, type_id).await
}

// User wrappers

/// Wrapper handler for creating a user
async fn create_user_handler(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>)> {
    let response = handlers::users::create_user_handler(&state, req).await?;
    Ok((StatusCode::CREATED, response))
}

/// Wrapper handler for the exact-match user search
async fn search_users_handler(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<UserSearchQuery>,
) -> Result<Json<ApiResponse<UserResponse>>> {
    handlers::users::search_users_handler(&state, query).await
}

/// Wrapper handler for listing users
async fn list_users_handler(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<UserListQuery>,
) -> Result<Json<ApiResponse<Vec<UserResponse>>>> {
    handlers::users::list_users_handler(&state, query).await
}

/// Wrapper handler for updating a user
async fn update_user_handler(
    AxumState(state): AxumState<AppState>,
    Path(user_id): Path<uuid::Uuid>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>> {
    handlers::users::update_user_handler(&state, user_id, req).await
}

/// Wrapper handler for changing a user's password
async fn change_password_handler(
    AxumState(state): AxumState<AppState>,
    Path(user_id): Path<uuid::Uuid>,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<UserResponse>>> {
    handlers::users::change_password_handler(&state, user_id, req).await
}

/// Wrapper handler for soft-deleting a user
async fn delete_user_handler(
    AxumState(state): AxumState<AppState>,
    Path(user_id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<UserResponse>>> {
    handlers::users::delete_user_handler(&state, user_id).await
}

// Neighborhood wrappers

/// Wrapper handler for creating a neighborhood
async fn create_neighborhood_handler(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<CreateNeighborhoodRequest>,
) -> Result<(StatusCode, Json<ApiResponse<NeighborhoodResponse>>)> {
    let response = handlers::neighborhoods::create_neighborhood_handler(&state, req).await?;
    Ok((StatusCode::CREATED, response))
}

/// Wrapper handler for batch-creating neighborhoods
async fn create_neighborhood_batch_handler(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<CreateNeighborhoodBatchRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<NeighborhoodResponse>>>)> {
    let response = handlers::neighborhoods::create_neighborhood_batch_handler(&state, req).await?;
    Ok((StatusCode::CREATED, response))
}

/// Wrapper handler for fetching a neighborhood
async fn get_neighborhood_handler(
    AxumState(state): AxumState<AppState>,
    Path(neighborhood_id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<NeighborhoodResponse>>> {
    handlers::neighborhoods::get_neighborhood_handler(&state, neighborhood_id).await
}

/// Wrapper handler for listing neighborhoods
async fn list_neighborhoods_handler(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<NeighborhoodListQuery>,
) -> Result<Json<ApiResponse<Vec<NeighborhoodResponse>>>> {
    handlers::neighborhoods::list_neighborhoods_handler(&state, query).await
}

/// Wrapper handler for updating a neighborhood
async fn update_neighborhood_handler(
    AxumState(state): AxumState<AppState>,
    Path(neighborhood_id): Path<uuid::Uuid>,
    Json(req): Json<UpdateNeighborhoodRequest>,
) -> Result<Json<ApiResponse<NeighborhoodResponse>>> {
    handlers::neighborhoods::update_neighborhood_handler(&state, neighborhood_id, req).await
}

/// Wrapper handler for deleting a neighborhood
async fn delete_neighborhood_handler(
    AxumState(state): AxumState<AppState>,
    Path(neighborhood_id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<NeighborhoodResponse>>> {
    handlers::neighborhoods::delete_neighborhood_handler(&state, neighborhood_id).await
}

/// Wrapper handler for the neighborhood usage report
async fn get_neighborhood_usage_handler(
    AxumState(state): AxumState<AppState>,
    Path(neighborhood_id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<UsageResponse>>> {
    handlers::neighborhoods::get_neighborhood_usage_handler(&state, neighborhood_id).await
}

// Region wrappers

/// Wrapper handler for creating a region
async fn create_region_handler(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<CreateRegionRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RegionResponse>>)> {
    let response = handlers::regions::create_region_handler(&state, req).await?;
    Ok((StatusCode::CREATED, response))
}

/// Wrapper handler for fetching a region
async fn get_region_handler(
    AxumState(state): AxumState<AppState>,
    Path(region_id): Path<uuid::Uuid>,
    Query(query): Query<RegionGetQuery>,
) -> Result<Json<ApiResponse<RegionResponse>>> {
    handlers::regions::get_region_handler(&state, region_id, query).await
}

/// Wrapper handler for listing regions
async fn list_regions_handler(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<RegionListQuery>,
) -> Result<Json<ApiResponse<Vec<RegionResponse>>>> {
    handlers::regions::list_regions_handler(&state, query).await
}

/// Wrapper handler for updating a region
async fn update_region_handler(
    AxumState(state): AxumState<AppState>,
    Path(region_id): Path<uuid::Uuid>,
    Json(req): Json<UpdateRegionRequest>,
) -> Result<Json<ApiResponse<RegionResponse>>> {
    handlers::regions::update_region_handler(&state, region_id, req).await
}

/// Wrapper handler for replacing a region's neighborhoods
async fn replace_region_neighborhoods_handler(
    AxumState(state): AxumState<AppState>,
    Path(region_id): Path<uuid::Uuid>,
    Json(req): Json<NeighborhoodIdsRequest>,
) -> Result<Json<ApiResponse<RegionResponse>>> {
    handlers::regions::replace_region_neighborhoods_handler(&state, region_id, req).await
}

/// Wrapper handler for adding neighborhoods to a region
async fn add_region_neighborhoods_handler(
    AxumState(state): AxumState<AppState>,
    Path(region_id): Path<uuid::Uuid>,
    Json(req): Json<NeighborhoodIdsRequest>,
) -> Result<Json<ApiResponse<RegionResponse>>> {
    handlers::regions::add_region_neighborhoods_handler(&state, region_id, req).await
}

/// Wrapper handler for unlinking one neighborhood from a region
async fn remove_region_neighborhood_handler(
    AxumState(state): AxumState<AppState>,
    Path((region_id, neighborhood_id)): Path<(uuid::Uuid, uuid::Uuid)>,
) -> Result<Json<ApiResponse<RegionResponse>>> {
    handlers::regions::remove_region_neighborhood_handler(&state, region_id, neighborhood_id).await
}

/// Wrapper handler for deleting a region
async fn delete_region_handler(
    AxumState(state): AxumState<AppState>,
    Path(region_id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<RegionResponse>>> {
    handlers::regions::delete_region_handler(&state, region_id).await
}

/// Wrapper handler for the region usage report
async fn get_region_usage_handler(
    AxumState(state): AxumState<AppState>,
    Path(region_id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<UsageResponse>>> {
    handlers::regions::get_region_usage_handler(&state, region_id).await
}

// Team wrappers

/// Wrapper handler for creating a team
async fn create_team_handler(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<CreateTeamRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TeamResponse>>)> {
    let response = handlers::teams::create_team_handler(&state, req).await?;
    Ok((StatusCode::CREATED, response))
}

/// Wrapper handler for fetching a team
async fn get_team_handler(
    AxumState(state): AxumState<AppState>,
    Path(team_id): Path<uuid::Uuid>,
    Query(query): Query<TeamGetQuery>,
) -> Result<Json<ApiResponse<TeamResponse>>> {
    handlers::teams::get_team_handler(&state, team_id, query).await
}

/// Wrapper handler for listing teams
async fn list_teams_handler(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<TeamListQuery>,
) -> Result<Json<ApiResponse<Vec<TeamResponse>>>> {
    handlers::teams::list_teams_handler(&state, query).await
}

/// Wrapper handler for updating a team
async fn update_team_handler(
    AxumState(state): AxumState<AppState>,
    Path(team_id): Path<uuid::Uuid>,
    Json(req): Json<UpdateTeamRequest>,
) -> Result<Json<ApiResponse<TeamResponse>>> {
    handlers::teams::update_team_handler(&state, team_id, req).await
}

/// Wrapper handler for deleting a team
async fn delete_team_handler(
    AxumState(state): AxumState<AppState>,
    Path(team_id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<TeamResponse>>> {
    handlers::teams::delete_team_handler(&state, team_id).await
}

/// Wrapper handler for listing a team's members
async fn list_team_members_handler(
    AxumState(state): AxumState<AppState>,
    Path(team_id): Path<uuid::Uuid>,
    Query(query): Query<TeamMembersQuery>,
) -> Result<Json<ApiResponse<Vec<MemberResponse>>>> {
    handlers::teams::list_team_members_handler(&state, team_id, query).await
}

/// Wrapper handler for assigning a team leader
async fn set_team_leader_handler(
    AxumState(state): AxumState<AppState>,
    Path(team_id): Path<uuid::Uuid>,
    Json(req): Json<SetLeaderRequest>,
) -> Result<Json<ApiResponse<MemberResponse>>> {
    handlers::teams::set_team_leader_handler(&state, team_id, req).await
}

// Member wrappers

/// Wrapper handler for creating a member
async fn create_member_handler(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<CreateMemberRequest>,
) -> Result<(StatusCode, Json<ApiResponse<MemberResponse>>)> {
    let response = handlers::members::create_member_handler(&state, req).await?;
    Ok((StatusCode::CREATED, response))
}

/// Wrapper handler for fetching a member
async fn get_member_handler(
    AxumState(state): AxumState<AppState>,
    Path(member_id): Path<uuid::Uuid>,
    Query(query): Query<MemberGetQuery>,
) -> Result<Json<ApiResponse<MemberResponse>>> {
    handlers::members::get_member_handler(&state, member_id, query).await
}

/// Wrapper handler for listing members
async fn list_members_handler(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<MemberListQuery>,
) -> Result<Json<ApiResponse<Vec<MemberResponse>>>> {
    handlers::members::list_members_handler(&state, query).await
}

/// Wrapper handler for updating a member
async fn update_member_handler(
    AxumState(state): AxumState<AppState>,
    Path(member_id): Path<uuid::Uuid>,
    Json(req): Json<UpdateMemberRequest>,
) -> Result<Json<ApiResponse<MemberResponse>>> {
    handlers::members::update_member_handler(&state, member_id, req).await
}

/// Wrapper handler for toggling a member's status
async fn update_member_status_handler(
    AxumState(state): AxumState<AppState>,
    Path(member_id): Path<uuid::Uuid>,
    Json(req): Json<UpdateMemberStatusRequest>,
) -> Result<Json<ApiResponse<MemberResponse>>> {
    handlers::members::update_member_status_handler(&state, member_id, req).await
}

/// Wrapper handler for deleting a member
async fn delete_member_handler(
    AxumState(state): AxumState<AppState>,
    Path(member_id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<MemberResponse>>> {
    handlers::members::delete_member_handler(&state, member_id).await
}

// Broker profile wrappers

/// Wrapper handler for creating a broker profile
async fn create_broker_profile_handler(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<CreateBrokerProfileRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BrokerProfileResponse>>)> {
    let response = handlers::broker_profiles::create_broker_profile_handler(&state, req).await?;
    Ok((StatusCode::CREATED, response))
}

/// Wrapper handler for fetching a broker profile
async fn get_broker_profile_handler(
    AxumState(state): AxumState<AppState>,
    Path(profile_id): Path<uuid::Uuid>,
    Query(query): Query<BrokerProfileGetQuery>,
) -> Result<Json<ApiResponse<BrokerProfileResponse>>> {
    handlers::broker_profiles::get_broker_profile_handler(&state, profile_id, query).await
}

/// Wrapper handler for listing broker profiles
async fn list_broker_profiles_handler(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<BrokerProfileListQuery>,
) -> Result<Json<ApiResponse<BrokerProfileListResponse>>> {
    handlers::broker_profiles::list_broker_profiles_handler(&state, query).await
}

/// Wrapper handler for updating a broker profile
async fn update_broker_profile_handler(
    AxumState(state): AxumState<AppState>,
    Path(profile_id): Path<uuid::Uuid>,
    Json(req): Json<UpdateBrokerProfileRequest>,
) -> Result<Json<ApiResponse<BrokerProfileResponse>>> {
    handlers::broker_profiles::update_broker_profile_handler(&state, profile_id, req).await
}

/// Wrapper handler for soft-deleting a broker profile
async fn delete_broker_profile_handler(
    AxumState(state): AxumState<AppState>,
    Path(profile_id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<BrokerProfileResponse>>> {
    handlers::broker_profiles::delete_broker_profile_handler(&state, profile_id).await
}

/// Wrapper handler for restoring a broker profile
async fn restore_broker_profile_handler(
    AxumState(state): AxumState<AppState>,
    Path(profile_id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<BrokerProfileResponse>>> {
    handlers::broker_profiles::restore_broker_profile_handler(&state, profile_id).await
}

/// Wrapper handler for replacing a broker profile's regions
async fn replace_broker_regions_handler(
    AxumState(state): AxumState<AppState>,
    Path(profile_id): Path<uuid::Uuid>,
    Json(req): Json<RegionIdsRequest>,
) -> Result<Json<ApiResponse<Vec<RegionResponse>>>> {
    handlers::broker_profiles::replace_broker_regions_handler(&state, profile_id, req).await
}

/// Wrapper handler for adding regions to a broker profile
async fn add_broker_regions_handler(
    AxumState(state): AxumState<AppState>,
    Path(profile_id): Path<uuid::Uuid>,
    Json(req): Json<RegionIdsRequest>,
) -> Result<Json<ApiResponse<Vec<RegionResponse>>>> {
    handlers::broker_profiles::add_broker_regions_handler(&state, profile_id, req).await
}

/// Wrapper handler for unlinking one region from a broker profile
async fn remove_broker_region_handler(
    AxumState(state): AxumState<AppState>,
    Path((profile_id, region_id)): Path<(uuid::Uuid, uuid::Uuid)>,
) -> Result<Json<ApiResponse<Vec<RegionResponse>>>> {
    handlers::broker_profiles::remove_broker_region_handler(&state, profile_id, region_id).await
}

/// Wrapper handler for listing a broker profile's regions
async fn list_broker_regions_handler(
    AxumState(state): AxumState<AppState>,
    Path(profile_id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<Vec<RegionResponse>>>> {
    handlers::broker_profiles::list_broker_regions_handler(&state, profile_id).await
}

/// Wrapper handler for replacing a broker profile's neighborhoods
async fn replace_broker_neighborhoods_handler(
    AxumState(state): AxumState<AppState>,
    Path(profile_id): Path<uuid::Uuid>,
    Json(req): Json<NeighborhoodIdsRequest>,
) -> Result<Json<ApiResponse<Vec<NeighborhoodResponse>>>> {
    handlers::broker_profiles::replace_broker_neighborhoods_handler(&state, profile_id, req).await
}

/// Wrapper handler for adding neighborhoods to a broker profile
async fn add_broker_neighborhoods_handler(
    AxumState(state): AxumState<AppState>,
    Path(profile_id): Path<uuid::Uuid>,
    Json(req): Json<NeighborhoodIdsRequest>,
) -> Result<Json<ApiResponse<Vec<NeighborhoodResponse>>>> {
    handlers::broker_profiles::add_broker_neighborhoods_handler(&state, profile_id, req).await
}

/// Wrapper handler for unlinking one neighborhood from a broker profile
async fn remove_broker_neighborhood_handler(
    AxumState(state): AxumState<AppState>,
    Path((profile_id, neighborhood_id)): Path<(uuid::Uuid, uuid::Uuid)>,
) -> Result<Json<ApiResponse<Vec<NeighborhoodResponse>>>> {
    handlers::broker_profiles::remove_broker_neighborhood_handler(&state, profile_id, neighborhood_id)
        .await
}

/// Wrapper handler for listing a broker profile's neighborhoods
async fn list_broker_neighborhoods_handler(
    AxumState(state): AxumState<AppState>,
    Path(profile_id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<Vec<NeighborhoodResponse>>>> {
    handlers::broker_profiles::list_broker_neighborhoods_handler(&state, profile_id).await
}
