//! # Broker Profile Handlers
//!
//! HTTP request handlers for broker profile CRUD, soft delete/restore, and
//! the broker↔region / broker↔neighborhood association endpoints.

use axum::Json;
use chrono::Utc;
use entity::{
    broker_neighborhoods::{
        Column as BrokerNeighborhoodColumn,
        Entity as BrokerNeighborhoodsEntity,
    },
    broker_profiles::{Column as ProfileColumn, Entity as BrokerProfilesEntity},
    broker_regions::{Column as BrokerRegionColumn, Entity as BrokerRegionsEntity},
    neighborhoods::Entity as NeighborhoodsEntity,
    regions::Entity as RegionsEntity,
};
use error::{ApiResponse, AppError, Result};
use sea_orm::{
    ActiveModelTrait,
    ColumnTrait,
    ConnectionTrait,
    EntityTrait,
    PaginatorTrait,
    QueryFilter,
    QueryOrder,
    Set,
    TransactionTrait,
};
use tracing::info;
use validator::Validate;

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
        neighborhoods::NeighborhoodResponse,
        regions::{NeighborhoodIdsRequest, RegionResponse},
        PaginationInfo,
    },
    handlers::{
        neighborhoods::neighborhood_model_to_response,
        regions::{dedup_ids, region_model_to_response, validate_neighborhoods_exist},
    },
    AppState,
};

/// Create a broker profile, optionally linking regions and neighborhoods
pub async fn create_broker_profile_handler(
    state: &AppState,
    req: CreateBrokerProfileRequest,
) -> Result<Json<ApiResponse<BrokerProfileResponse>>> {
    req.validate()?;

    let region_ids = dedup_ids(req.region_ids.clone().unwrap_or_default());
    let neighborhood_ids = dedup_ids(req.neighborhood_ids.clone().unwrap_or_default());
    validate_regions_exist(&state.db, &region_ids).await?;
    validate_neighborhoods_exist(&state.db, &neighborhood_ids).await?;

    let created = state
        .db
        .transaction::<_, entity::broker_profiles::Model, AppError>(move |txn| {
            Box::pin(async move {
                let now = Utc::now();
                let profile = entity::broker_profiles::ActiveModel {
                    id: Set(uuid::Uuid::new_v4()),
                    broker_type: Set(req.broker_type),
                    creci: Set(req.creci),
                    creci_type: Set(req.creci_type),
                    classification: Set(req.classification.unwrap_or(0)),
                    deleted: Set(false),
                    created_at: Set(now),
                    updated_at: Set(now),
                    deleted_at: Set(None),
                };
                let created = profile.insert(txn).await?;

                if !region_ids.is_empty() {
                    let links: Vec<entity::broker_regions::ActiveModel> = region_ids
                        .iter()
                        .map(|region_id| entity::broker_regions::ActiveModel {
                            broker_profile_id: Set(created.id),
                            region_id: Set(*region_id),
                            created_at: Set(now),
                        })
                        .collect();
                    BrokerRegionsEntity::insert_many(links).exec(txn).await?;
                }

                if !neighborhood_ids.is_empty() {
                    let links: Vec<entity::broker_neighborhoods::ActiveModel> = neighborhood_ids
                        .iter()
                        .map(|neighborhood_id| entity::broker_neighborhoods::ActiveModel {
                            broker_profile_id: Set(created.id),
                            neighborhood_id: Set(*neighborhood_id),
                            created_at: Set(now),
                        })
                        .collect();
                    BrokerNeighborhoodsEntity::insert_many(links).exec(txn).await?;
                }

                Ok(created)
            })
        })
        .await?;

    info!(profile_id = %created.id, broker_type = %created.broker_type, "Broker profile created");

    Ok(Json(ApiResponse::ok(
        profile_model_to_response(&created, None, None),
        "Broker profile created successfully",
    )))
}

/// Get a single broker profile by ID
pub async fn get_broker_profile_handler(
    state: &AppState,
    profile_id: uuid::Uuid,
    query: BrokerProfileGetQuery,
) -> Result<Json<ApiResponse<BrokerProfileResponse>>> {
    let profile = BrokerProfilesEntity::find_by_id(profile_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Broker profile not found"))?;

    let regions = if query.include_regions.unwrap_or(false) {
        Some(linked_regions(state, profile_id).await?)
    }
    else {
        None
    };
    let neighborhoods = if query.include_neighborhoods.unwrap_or(false) {
        Some(linked_neighborhoods(state, profile_id).await?)
    }
    else {
        None
    };

    Ok(Json(ApiResponse::ok(
        profile_model_to_response(&profile, regions, neighborhoods),
        "Broker profile retrieved",
    )))
}

/// List broker profiles with filters and pagination
pub async fn list_broker_profiles_handler(
    state: &AppState,
    query: BrokerProfileListQuery,
) -> Result<Json<ApiResponse<BrokerProfileListResponse>>> {
    let page = query.page();
    let limit = query.limit();

    let mut find = BrokerProfilesEntity::find();

    if let Some(ref broker_type) = query.broker_type {
        find = find.filter(ProfileColumn::BrokerType.eq(broker_type.clone()));
    }
    if let Some(ref creci_type) = query.creci_type {
        find = find.filter(ProfileColumn::CreciType.eq(creci_type.clone()));
    }
    if let Some(classification) = query.classification {
        find = find.filter(ProfileColumn::Classification.eq(classification));
    }
    if !query.include_deleted.unwrap_or(false) {
        find = find.filter(ProfileColumn::Deleted.eq(false));
    }

    if let Some(region_id) = query.region_id {
        let profile_ids: Vec<uuid::Uuid> = BrokerRegionsEntity::find()
            .filter(BrokerRegionColumn::RegionId.eq(region_id))
            .all(&state.db)
            .await?
            .into_iter()
            .map(|link| link.broker_profile_id)
            .collect();
        find = find.filter(ProfileColumn::Id.is_in(profile_ids));
    }
    if let Some(neighborhood_id) = query.neighborhood_id {
        let profile_ids: Vec<uuid::Uuid> = BrokerNeighborhoodsEntity::find()
            .filter(BrokerNeighborhoodColumn::NeighborhoodId.eq(neighborhood_id))
            .all(&state.db)
            .await?
            .into_iter()
            .map(|link| link.broker_profile_id)
            .collect();
        find = find.filter(ProfileColumn::Id.is_in(profile_ids));
    }

    let total = find.clone().count(&state.db).await?;
    let total_pages = if total == 0 { 0 } else { total.div_ceil(limit) };

    let profiles = find
        .order_by_desc(ProfileColumn::Classification)
        .order_by_asc(ProfileColumn::Creci)
        .paginate(&state.db, limit)
        .fetch_page(page.saturating_sub(1))
        .await?;

    let items: Vec<BrokerProfileResponse> = profiles
        .iter()
        .map(|profile| profile_model_to_response(profile, None, None))
        .collect();

    Ok(Json(ApiResponse::ok(
        BrokerProfileListResponse {
            items,
            pagination: PaginationInfo {
                page,
                limit,
                total,
                total_pages,
            },
        },
        "Broker profiles retrieved",
    )))
}

/// Update a broker profile
pub async fn update_broker_profile_handler(
    state: &AppState,
    profile_id: uuid::Uuid,
    req: UpdateBrokerProfileRequest,
) -> Result<Json<ApiResponse<BrokerProfileResponse>>> {
    req.validate()?;

    let profile = find_profile_for_mutation(state, profile_id).await?;

    let mut active_model: entity::broker_profiles::ActiveModel = profile.into();
    if let Some(broker_type) = req.broker_type {
        active_model.broker_type = Set(broker_type);
    }
    if let Some(creci) = req.creci {
        active_model.creci = Set(creci);
    }
    if let Some(creci_type) = req.creci_type {
        active_model.creci_type = Set(creci_type);
    }
    if let Some(classification) = req.classification {
        active_model.classification = Set(classification);
    }
    active_model.updated_at = Set(Utc::now());

    let updated = active_model.update(&state.db).await?;

    info!(profile_id = %profile_id, "Broker profile updated");

    Ok(Json(ApiResponse::ok(
        profile_model_to_response(&updated, None, None),
        "Broker profile updated successfully",
    )))
}

/// Soft-delete a broker profile
pub async fn delete_broker_profile_handler(
    state: &AppState,
    profile_id: uuid::Uuid,
) -> Result<Json<ApiResponse<BrokerProfileResponse>>> {
    let profile = BrokerProfilesEntity::find_by_id(profile_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Broker profile not found"))?;

    if profile.deleted {
        return Err(AppError::bad_request("Broker profile is already deleted"));
    }

    let now = Utc::now();
    let mut active_model: entity::broker_profiles::ActiveModel = profile.into();
    active_model.deleted = Set(true);
    active_model.deleted_at = Set(Some(now));
    active_model.updated_at = Set(now);

    let deleted = active_model.update(&state.db).await?;

    info!(profile_id = %profile_id, "Broker profile soft-deleted");

    Ok(Json(ApiResponse::ok(
        profile_model_to_response(&deleted, None, None),
        "Broker profile deleted successfully",
    )))
}

/// Restore a soft-deleted broker profile
pub async fn restore_broker_profile_handler(
    state: &AppState,
    profile_id: uuid::Uuid,
) -> Result<Json<ApiResponse<BrokerProfileResponse>>> {
    let profile = BrokerProfilesEntity::find_by_id(profile_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Broker profile not found"))?;

    if !profile.deleted {
        return Err(AppError::bad_request("Broker profile is not deleted"));
    }

    let mut active_model: entity::broker_profiles::ActiveModel = profile.into();
    active_model.deleted = Set(false);
    active_model.deleted_at = Set(None);
    active_model.updated_at = Set(Utc::now());

    let restored = active_model.update(&state.db).await?;

    info!(profile_id = %profile_id, "Broker profile restored");

    Ok(Json(ApiResponse::ok(
        profile_model_to_response(&restored, None, None),
        "Broker profile restored successfully",
    )))
}

/// Replace the full set of regions linked to a broker profile
pub async fn replace_broker_regions_handler(
    state: &AppState,
    profile_id: uuid::Uuid,
    req: RegionIdsRequest,
) -> Result<Json<ApiResponse<Vec<RegionResponse>>>> {
    find_profile_for_mutation(state, profile_id).await?;
    let region_ids = dedup_ids(req.region_ids);
    validate_regions_exist(&state.db, &region_ids).await?;

    state
        .db
        .transaction::<_, (), AppError>(move |txn| {
            Box::pin(async move {
                ensure_profile_mutable(txn, profile_id).await?;

                BrokerRegionsEntity::delete_many()
                    .filter(BrokerRegionColumn::BrokerProfileId.eq(profile_id))
                    .exec(txn)
                    .await?;

                if !region_ids.is_empty() {
                    let now = Utc::now();
                    let links: Vec<entity::broker_regions::ActiveModel> = region_ids
                        .iter()
                        .map(|region_id| entity::broker_regions::ActiveModel {
                            broker_profile_id: Set(profile_id),
                            region_id: Set(*region_id),
                            created_at: Set(now),
                        })
                        .collect();
                    BrokerRegionsEntity::insert_many(links).exec(txn).await?;
                }

                Ok(())
            })
        })
        .await?;

    info!(profile_id = %profile_id, "Broker regions replaced");

    let regions = linked_regions(state, profile_id).await?;
    Ok(Json(ApiResponse::ok(
        regions,
        "Broker regions updated successfully",
    )))
}

/// Add regions to a broker profile, skipping already-linked ones
pub async fn add_broker_regions_handler(
    state: &AppState,
    profile_id: uuid::Uuid,
    req: RegionIdsRequest,
) -> Result<Json<ApiResponse<Vec<RegionResponse>>>> {
    find_profile_for_mutation(state, profile_id).await?;
    let region_ids = dedup_ids(req.region_ids);
    validate_regions_exist(&state.db, &region_ids).await?;

    state
        .db
        .transaction::<_, (), AppError>(move |txn| {
            Box::pin(async move {
                ensure_profile_mutable(txn, profile_id).await?;

                let existing: Vec<uuid::Uuid> = BrokerRegionsEntity::find()
                    .filter(BrokerRegionColumn::BrokerProfileId.eq(profile_id))
                    .all(txn)
                    .await?
                    .into_iter()
                    .map(|link| link.region_id)
                    .collect();

                let now = Utc::now();
                let links: Vec<entity::broker_regions::ActiveModel> = region_ids
                    .iter()
                    .filter(|id| !existing.contains(id))
                    .map(|region_id| entity::broker_regions::ActiveModel {
                        broker_profile_id: Set(profile_id),
                        region_id: Set(*region_id),
                        created_at: Set(now),
                    })
                    .collect();
                if !links.is_empty() {
                    BrokerRegionsEntity::insert_many(links).exec(txn).await?;
                }

                Ok(())
            })
        })
        .await?;

    info!(profile_id = %profile_id, "Broker regions added");

    let regions = linked_regions(state, profile_id).await?;
    Ok(Json(ApiResponse::ok(
        regions,
        "Broker regions updated successfully",
    )))
}

/// Remove one region from a broker profile
pub async fn remove_broker_region_handler(
    state: &AppState,
    profile_id: uuid::Uuid,
    region_id: uuid::Uuid,
) -> Result<Json<ApiResponse<Vec<RegionResponse>>>> {
    find_profile_for_mutation(state, profile_id).await?;

    let result = BrokerRegionsEntity::delete_many()
        .filter(BrokerRegionColumn::BrokerProfileId.eq(profile_id))
        .filter(BrokerRegionColumn::RegionId.eq(region_id))
        .exec(&state.db)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::not_found(
            "Region is not linked to this broker profile",
        ));
    }

    info!(profile_id = %profile_id, region_id = %region_id, "Broker region removed");

    let regions = linked_regions(state, profile_id).await?;
    Ok(Json(ApiResponse::ok(
        regions,
        "Broker region removed successfully",
    )))
}

/// List the regions linked to a broker profile
pub async fn list_broker_regions_handler(
    state: &AppState,
    profile_id: uuid::Uuid,
) -> Result<Json<ApiResponse<Vec<RegionResponse>>>> {
    let profile = BrokerProfilesEntity::find_by_id(profile_id)
        .one(&state.db)
        .await?;
    if profile.is_none() {
        return Err(AppError::not_found("Broker profile not found"));
    }

    let regions = linked_regions(state, profile_id).await?;
    Ok(Json(ApiResponse::ok(regions, "Broker regions retrieved")))
}

/// Replace the full set of neighborhoods linked to a broker profile
pub async fn replace_broker_neighborhoods_handler(
    state: &AppState,
    profile_id: uuid::Uuid,
    req: NeighborhoodIdsRequest,
) -> Result<Json<ApiResponse<Vec<NeighborhoodResponse>>>> {
    find_profile_for_mutation(state, profile_id).await?;
    let neighborhood_ids = dedup_ids(req.neighborhood_ids);
    validate_neighborhoods_exist(&state.db, &neighborhood_ids).await?;

    state
        .db
        .transaction::<_, (), AppError>(move |txn| {
            Box::pin(async move {
                ensure_profile_mutable(txn, profile_id).await?;

                BrokerNeighborhoodsEntity::delete_many()
                    .filter(BrokerNeighborhoodColumn::BrokerProfileId.eq(profile_id))
                    .exec(txn)
                    .await?;

                if !neighborhood_ids.is_empty() {
                    let now = Utc::now();
                    let links: Vec<entity::broker_neighborhoods::ActiveModel> = neighborhood_ids
                        .iter()
                        .map(|neighborhood_id| entity::broker_neighborhoods::ActiveModel {
                            broker_profile_id: Set(profile_id),
                            neighborhood_id: Set(*neighborhood_id),
                            created_at: Set(now),
                        })
                        .collect();
                    BrokerNeighborhoodsEntity::insert_many(links).exec(txn).await?;
                }

                Ok(())
            })
        })
        .await?;

    info!(profile_id = %profile_id, "Broker neighborhoods replaced");

    let neighborhoods = linked_neighborhoods(state, profile_id).await?;
    Ok(Json(ApiResponse::ok(
        neighborhoods,
        "Broker neighborhoods updated successfully",
    )))
}

/// Add neighborhoods to a broker profile, skipping already-linked ones
pub async fn add_broker_neighborhoods_handler(
    state: &AppState,
    profile_id: uuid::Uuid,
    req: NeighborhoodIdsRequest,
) -> Result<Json<ApiResponse<Vec<NeighborhoodResponse>>>> {
    find_profile_for_mutation(state, profile_id).await?;
    let neighborhood_ids = dedup_ids(req.neighborhood_ids);
    validate_neighborhoods_exist(&state.db, &neighborhood_ids).await?;

    state
        .db
        .transaction::<_, (), AppError>(move |txn| {
            Box::pin(async move {
                ensure_profile_mutable(txn, profile_id).await?;

                let existing: Vec<uuid::Uuid> = BrokerNeighborhoodsEntity::find()
                    .filter(BrokerNeighborhoodColumn::BrokerProfileId.eq(profile_id))
                    .all(txn)
                    .await?
                    .into_iter()
                    .map(|link| link.neighborhood_id)
                    .collect();

                let now = Utc::now();
                let links: Vec<entity::broker_neighborhoods::ActiveModel> = neighborhood_ids
                    .iter()
                    .filter(|id| !existing.contains(id))
                    .map(|neighborhood_id| entity::broker_neighborhoods::ActiveModel {
                        broker_profile_id: Set(profile_id),
                        neighborhood_id: Set(*neighborhood_id),
                        created_at: Set(now),
                    })
                    .collect();
                if !links.is_empty() {
                    BrokerNeighborhoodsEntity::insert_many(links).exec(txn).await?;
                }

                Ok(())
            })
        })
        .await?;

    info!(profile_id = %profile_id, "Broker neighborhoods added");

    let neighborhoods = linked_neighborhoods(state, profile_id).await?;
    Ok(Json(ApiResponse::ok(
        neighborhoods,
        "Broker neighborhoods updated successfully",
    )))
}

/// Remove one neighborhood from a broker profile
pub async fn remove_broker_neighborhood_handler(
    state: &AppState,
    profile_id: uuid::Uuid,
    neighborhood_id: uuid::Uuid,
) -> Result<Json<ApiResponse<Vec<NeighborhoodResponse>>>> {
    find_profile_for_mutation(state, profile_id).await?;

    let result = BrokerNeighborhoodsEntity::delete_many()
        .filter(BrokerNeighborhoodColumn::BrokerProfileId.eq(profile_id))
        .filter(BrokerNeighborhoodColumn::NeighborhoodId.eq(neighborhood_id))
        .exec(&state.db)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::not_found(
            "Neighborhood is not linked to this broker profile",
        ));
    }

    info!(profile_id = %profile_id, neighborhood_id = %neighborhood_id, "Broker neighborhood removed");

    let neighborhoods = linked_neighborhoods(state, profile_id).await?;
    Ok(Json(ApiResponse::ok(
        neighborhoods,
        "Broker neighborhood removed successfully",
    )))
}

/// List the neighborhoods linked to a broker profile
pub async fn list_broker_neighborhoods_handler(
    state: &AppState,
    profile_id: uuid::Uuid,
) -> Result<Json<ApiResponse<Vec<NeighborhoodResponse>>>> {
    let profile = BrokerProfilesEntity::find_by_id(profile_id)
        .one(&state.db)
        .await?;
    if profile.is_none() {
        return Err(AppError::not_found("Broker profile not found"));
    }

    let neighborhoods = linked_neighborhoods(state, profile_id).await?;
    Ok(Json(ApiResponse::ok(
        neighborhoods,
        "Broker neighborhoods retrieved",
    )))
}

/// Fetch a profile for mutation: missing → NotFound, soft-deleted → BadRequest
async fn find_profile_for_mutation(
    state: &AppState,
    profile_id: uuid::Uuid,
) -> Result<entity::broker_profiles::Model> {
    let profile = BrokerProfilesEntity::find_by_id(profile_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Broker profile not found"))?;

    if profile.deleted {
        return Err(AppError::bad_request("Broker profile is deleted"));
    }
    Ok(profile)
}

/// Re-check the mutation guard inside a transaction
async fn ensure_profile_mutable(db: &impl ConnectionTrait, profile_id: uuid::Uuid) -> Result<()> {
    let profile = BrokerProfilesEntity::find_by_id(profile_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("Broker profile not found"))?;
    if profile.deleted {
        return Err(AppError::bad_request("Broker profile is deleted"));
    }
    Ok(())
}

/// Abort with NotFound naming the first missing region id
async fn validate_regions_exist(db: &impl ConnectionTrait, region_ids: &[uuid::Uuid]) -> Result<()> {
    for region_id in region_ids {
        let exists = RegionsEntity::find_by_id(*region_id).one(db).await?.is_some();
        if !exists {
            return Err(AppError::not_found(format!("Region {} not found", region_id)));
        }
    }
    Ok(())
}

/// Fetch the regions linked to a broker profile, ordered by name
async fn linked_regions(state: &AppState, profile_id: uuid::Uuid) -> Result<Vec<RegionResponse>> {
    let region_ids: Vec<uuid::Uuid> = BrokerRegionsEntity::find()
        .filter(BrokerRegionColumn::BrokerProfileId.eq(profile_id))
        .all(&state.db)
        .await?
        .into_iter()
        .map(|link| link.region_id)
        .collect();

    if region_ids.is_empty() {
        return Ok(Vec::new());
    }

    let regions = RegionsEntity::find()
        .filter(entity::regions::Column::Id.is_in(region_ids))
        .order_by_asc(entity::regions::Column::Name)
        .all(&state.db)
        .await?;

    Ok(regions
        .iter()
        .map(|region| region_model_to_response(region, None))
        .collect())
}

/// Fetch the neighborhoods linked to a broker profile, ordered by name
async fn linked_neighborhoods(
    state: &AppState,
    profile_id: uuid::Uuid,
) -> Result<Vec<NeighborhoodResponse>> {
    let neighborhood_ids: Vec<uuid::Uuid> = BrokerNeighborhoodsEntity::find()
        .filter(BrokerNeighborhoodColumn::BrokerProfileId.eq(profile_id))
        .all(&state.db)
        .await?
        .into_iter()
        .map(|link| link.neighborhood_id)
        .collect();

    if neighborhood_ids.is_empty() {
        return Ok(Vec::new());
    }

    let neighborhoods = NeighborhoodsEntity::find()
        .filter(entity::neighborhoods::Column::Id.is_in(neighborhood_ids))
        .order_by_asc(entity::neighborhoods::Column::Name)
        .all(&state.db)
        .await?;

    Ok(neighborhoods.iter().map(neighborhood_model_to_response).collect())
}

/// Convert a broker profile entity model to a response DTO
fn profile_model_to_response(
    profile: &entity::broker_profiles::Model,
    regions: Option<Vec<RegionResponse>>,
    neighborhoods: Option<Vec<NeighborhoodResponse>>,
) -> BrokerProfileResponse {
    BrokerProfileResponse {
        id: profile.id,
        broker_type: profile.broker_type.clone(),
        creci: profile.creci.clone(),
        creci_type: profile.creci_type.clone(),
        classification: profile.classification,
        deleted: profile.deleted,
        created_at: profile.created_at.to_rfc3339(),
        updated_at: profile.updated_at.to_rfc3339(),
        deleted_at: profile.deleted_at.map(|t| t.to_rfc3339()),
        regions,
        neighborhoods,
    }
}

#[cfg(test)]
mod tests {
    use entity::broker_profiles::{BrokerType, CreciType};

    use super::*;

    fn sample_profile() -> entity::broker_profiles::Model {
        entity::broker_profiles::Model {
            id:             uuid::Uuid::new_v4(),
            broker_type:    BrokerType::Hybrid,
            creci:          "PR-12345".to_string(),
            creci_type:     CreciType::Permanent,
            classification: 3,
            deleted:        false,
            created_at:     chrono::DateTime::default(),
            updated_at:     chrono::DateTime::default(),
            deleted_at:     None,
        }
    }

    #[test]
    fn test_profile_model_to_response() {
        let profile = sample_profile();
        let response = profile_model_to_response(&profile, None, None);
        assert_eq!(response.id, profile.id);
        assert_eq!(response.broker_type, BrokerType::Hybrid);
        assert_eq!(response.classification, 3);
        assert!(response.regions.is_none());
        assert!(response.neighborhoods.is_none());
    }

    #[test]
    fn test_deleted_profile_response_carries_deleted_at() {
        let mut profile = sample_profile();
        profile.deleted = true;
        profile.deleted_at = Some(chrono::DateTime::default());
        let response = profile_model_to_response(&profile, None, None);
        assert!(response.deleted);
        assert!(response.deleted_at.is_some());
    }

    #[test]
    fn test_profile_response_omits_absent_associations() {
        let response = profile_model_to_response(&sample_profile(), None, None);
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("regions").is_none());
        assert!(json.get("neighborhoods").is_none());
    }
}
