//! # Region Handlers
//!
//! HTTP request handlers for region CRUD, the region↔neighborhood
//! association endpoints, and the usage report.

use axum::Json;
use chrono::Utc;
use entity::{
    broker_regions::{Column as BrokerRegionColumn, Entity as BrokerRegionsEntity},
    neighborhoods::Entity as NeighborhoodsEntity,
    region_neighborhoods::{
        Column as RegionNeighborhoodColumn,
        Entity as RegionNeighborhoodsEntity,
    },
    regions::{Column as RegionColumn, Entity as RegionsEntity},
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
        neighborhoods::NeighborhoodResponse,
        regions::{
            CreateRegionRequest,
            NeighborhoodIdsRequest,
            RegionGetQuery,
            RegionListQuery,
            RegionResponse,
            UpdateRegionRequest,
        },
        UsageResponse,
    },
    handlers::neighborhoods::neighborhood_model_to_response,
    utils::escape_like_wildcards,
    AppState,
};

/// Create a new region, optionally linking neighborhoods
pub async fn create_region_handler(
    state: &AppState,
    req: CreateRegionRequest,
) -> Result<Json<ApiResponse<RegionResponse>>> {
    req.validate()?;

    let existing = RegionsEntity::find()
        .filter(RegionColumn::Name.eq(&req.name))
        .one(&state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::conflict("A region with this name already exists"));
    }

    let neighborhood_ids = dedup_ids(req.neighborhood_ids.unwrap_or_default());
    validate_neighborhoods_exist(&state.db, &neighborhood_ids).await?;

    let name = req.name;
    let created = state
        .db
        .transaction::<_, entity::regions::Model, AppError>(|txn| {
            Box::pin(async move {
                let now = Utc::now();
                let region = entity::regions::ActiveModel {
                    id: Set(uuid::Uuid::new_v4()),
                    name: Set(name),
                    created_at: Set(now),
                    updated_at: Set(now),
                };
                let created = region.insert(txn).await?;

                if !neighborhood_ids.is_empty() {
                    let links: Vec<entity::region_neighborhoods::ActiveModel> = neighborhood_ids
                        .iter()
                        .map(|neighborhood_id| entity::region_neighborhoods::ActiveModel {
                            region_id: Set(created.id),
                            neighborhood_id: Set(*neighborhood_id),
                            created_at: Set(now),
                        })
                        .collect();
                    RegionNeighborhoodsEntity::insert_many(links).exec(txn).await?;
                }

                Ok(created)
            })
        })
        .await?;

    info!(region_id = %created.id, "Region created");

    Ok(Json(ApiResponse::ok(
        region_model_to_response(&created, None),
        "Region created successfully",
    )))
}

/// Get a single region by ID
pub async fn get_region_handler(
    state: &AppState,
    region_id: uuid::Uuid,
    query: RegionGetQuery,
) -> Result<Json<ApiResponse<RegionResponse>>> {
    let region = RegionsEntity::find_by_id(region_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Region not found"))?;

    let neighborhoods = if query.include_neighborhoods.unwrap_or(false) {
        Some(linked_neighborhoods(state, region_id).await?)
    }
    else {
        None
    };

    Ok(Json(ApiResponse::ok(
        region_model_to_response(&region, neighborhoods),
        "Region retrieved",
    )))
}

/// List regions with an optional name filter
pub async fn list_regions_handler(
    state: &AppState,
    query: RegionListQuery,
) -> Result<Json<ApiResponse<Vec<RegionResponse>>>> {
    let mut find = RegionsEntity::find();

    if let Some(ref name) = query.name {
        let pattern = format!("%{}%", escape_like_wildcards(name));
        find = find.filter(RegionColumn::Name.like(&pattern));
    }

    let regions = find.order_by_asc(RegionColumn::Name).all(&state.db).await?;

    let include = query.include_neighborhoods.unwrap_or(false);
    let mut responses = Vec::with_capacity(regions.len());
    for region in &regions {
        let neighborhoods = if include {
            Some(linked_neighborhoods(state, region.id).await?)
        }
        else {
            None
        };
        responses.push(region_model_to_response(region, neighborhoods));
    }

    Ok(Json(ApiResponse::ok(responses, "Regions retrieved")))
}

/// Update a region
pub async fn update_region_handler(
    state: &AppState,
    region_id: uuid::Uuid,
    req: UpdateRegionRequest,
) -> Result<Json<ApiResponse<RegionResponse>>> {
    req.validate()?;

    let region = RegionsEntity::find_by_id(region_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Region not found"))?;

    let mut active_model: entity::regions::ActiveModel = region.into();
    if let Some(name) = req.name {
        let existing = RegionsEntity::find()
            .filter(RegionColumn::Name.eq(&name))
            .filter(RegionColumn::Id.ne(region_id))
            .one(&state.db)
            .await?;
        if existing.is_some() {
            return Err(AppError::conflict("A region with this name already exists"));
        }
        active_model.name = Set(name);
    }
    active_model.updated_at = Set(Utc::now());

    let updated = active_model.update(&state.db).await?;

    info!(region_id = %region_id, "Region updated");

    Ok(Json(ApiResponse::ok(
        region_model_to_response(&updated, None),
        "Region updated successfully",
    )))
}

/// Replace the full set of neighborhoods linked to a region
///
/// An empty array clears all links.
pub async fn replace_region_neighborhoods_handler(
    state: &AppState,
    region_id: uuid::Uuid,
    req: NeighborhoodIdsRequest,
) -> Result<Json<ApiResponse<RegionResponse>>> {
    let neighborhood_ids = dedup_ids(req.neighborhood_ids);
    validate_neighborhoods_exist(&state.db, &neighborhood_ids).await?;

    let region = state
        .db
        .transaction::<_, entity::regions::Model, AppError>(move |txn| {
            Box::pin(async move {
                let region = RegionsEntity::find_by_id(region_id)
                    .one(txn)
                    .await?
                    .ok_or_else(|| AppError::not_found("Region not found"))?;

                RegionNeighborhoodsEntity::delete_many()
                    .filter(RegionNeighborhoodColumn::RegionId.eq(region_id))
                    .exec(txn)
                    .await?;

                if !neighborhood_ids.is_empty() {
                    let now = Utc::now();
                    let links: Vec<entity::region_neighborhoods::ActiveModel> = neighborhood_ids
                        .iter()
                        .map(|neighborhood_id| entity::region_neighborhoods::ActiveModel {
                            region_id: Set(region_id),
                            neighborhood_id: Set(*neighborhood_id),
                            created_at: Set(now),
                        })
                        .collect();
                    RegionNeighborhoodsEntity::insert_many(links).exec(txn).await?;
                }

                Ok(region)
            })
        })
        .await?;

    info!(region_id = %region_id, "Region neighborhoods replaced");

    let neighborhoods = linked_neighborhoods(state, region_id).await?;
    Ok(Json(ApiResponse::ok(
        region_model_to_response(&region, Some(neighborhoods)),
        "Region neighborhoods updated successfully",
    )))
}

/// Add neighborhoods to a region
///
/// Already-linked neighborhoods are silently skipped.
pub async fn add_region_neighborhoods_handler(
    state: &AppState,
    region_id: uuid::Uuid,
    req: NeighborhoodIdsRequest,
) -> Result<Json<ApiResponse<RegionResponse>>> {
    let neighborhood_ids = dedup_ids(req.neighborhood_ids);
    validate_neighborhoods_exist(&state.db, &neighborhood_ids).await?;

    let region = state
        .db
        .transaction::<_, entity::regions::Model, AppError>(move |txn| {
            Box::pin(async move {
                let region = RegionsEntity::find_by_id(region_id)
                    .one(txn)
                    .await?
                    .ok_or_else(|| AppError::not_found("Region not found"))?;

                let existing: Vec<uuid::Uuid> = RegionNeighborhoodsEntity::find()
                    .filter(RegionNeighborhoodColumn::RegionId.eq(region_id))
                    .all(txn)
                    .await?
                    .into_iter()
                    .map(|link| link.neighborhood_id)
                    .collect();

                let now = Utc::now();
                let links: Vec<entity::region_neighborhoods::ActiveModel> = neighborhood_ids
                    .iter()
                    .filter(|id| !existing.contains(id))
                    .map(|neighborhood_id| entity::region_neighborhoods::ActiveModel {
                        region_id: Set(region_id),
                        neighborhood_id: Set(*neighborhood_id),
                        created_at: Set(now),
                    })
                    .collect();
                if !links.is_empty() {
                    RegionNeighborhoodsEntity::insert_many(links).exec(txn).await?;
                }

                Ok(region)
            })
        })
        .await?;

    info!(region_id = %region_id, "Region neighborhoods added");

    let neighborhoods = linked_neighborhoods(state, region_id).await?;
    Ok(Json(ApiResponse::ok(
        region_model_to_response(&region, Some(neighborhoods)),
        "Region neighborhoods updated successfully",
    )))
}

/// Remove one neighborhood from a region
pub async fn remove_region_neighborhood_handler(
    state: &AppState,
    region_id: uuid::Uuid,
    neighborhood_id: uuid::Uuid,
) -> Result<Json<ApiResponse<RegionResponse>>> {
    let region = RegionsEntity::find_by_id(region_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Region not found"))?;

    let result = RegionNeighborhoodsEntity::delete_many()
        .filter(RegionNeighborhoodColumn::RegionId.eq(region_id))
        .filter(RegionNeighborhoodColumn::NeighborhoodId.eq(neighborhood_id))
        .exec(&state.db)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::not_found(
            "Neighborhood is not linked to this region",
        ));
    }

    info!(region_id = %region_id, neighborhood_id = %neighborhood_id, "Region neighborhood removed");

    let neighborhoods = linked_neighborhoods(state, region_id).await?;
    Ok(Json(ApiResponse::ok(
        region_model_to_response(&region, Some(neighborhoods)),
        "Region neighborhood removed successfully",
    )))
}

/// Delete a region
///
/// Rejected while any junction row still references it.
pub async fn delete_region_handler(
    state: &AppState,
    region_id: uuid::Uuid,
) -> Result<Json<ApiResponse<RegionResponse>>> {
    let region = RegionsEntity::find_by_id(region_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Region not found"))?;

    let usage = region_usage(state, region_id).await?;
    if usage.is_used {
        return Err(AppError::forbidden("Region is in use and cannot be deleted"));
    }

    RegionsEntity::delete_by_id(region_id).exec(&state.db).await?;

    info!(region_id = %region_id, "Region deleted");

    Ok(Json(ApiResponse::ok(
        region_model_to_response(&region, None),
        "Region deleted successfully",
    )))
}

/// Report where a region is referenced
pub async fn get_region_usage_handler(
    state: &AppState,
    region_id: uuid::Uuid,
) -> Result<Json<ApiResponse<UsageResponse>>> {
    let region = RegionsEntity::find_by_id(region_id).one(&state.db).await?;
    if region.is_none() {
        return Err(AppError::not_found("Region not found"));
    }

    let usage = region_usage(state, region_id).await?;
    Ok(Json(ApiResponse::ok(usage, "Region usage retrieved")))
}

/// Collect the relations that reference a region
async fn region_usage(state: &AppState, region_id: uuid::Uuid) -> Result<UsageResponse> {
    let mut used_in = Vec::new();

    let neighborhood_links = RegionNeighborhoodsEntity::find()
        .filter(RegionNeighborhoodColumn::RegionId.eq(region_id))
        .count(&state.db)
        .await?;
    if neighborhood_links > 0 {
        used_in.push("neighborhoods".to_string());
    }

    let broker_links = BrokerRegionsEntity::find()
        .filter(BrokerRegionColumn::RegionId.eq(region_id))
        .count(&state.db)
        .await?;
    if broker_links > 0 {
        used_in.push("broker_profiles".to_string());
    }

    Ok(UsageResponse {
        is_used: !used_in.is_empty(),
        used_in,
    })
}

/// Fetch the neighborhoods linked to a region, ordered by name
async fn linked_neighborhoods(
    state: &AppState,
    region_id: uuid::Uuid,
) -> Result<Vec<NeighborhoodResponse>> {
    let neighborhood_ids: Vec<uuid::Uuid> = RegionNeighborhoodsEntity::find()
        .filter(RegionNeighborhoodColumn::RegionId.eq(region_id))
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

/// Abort with NotFound naming the first missing neighborhood id
pub(crate) async fn validate_neighborhoods_exist(
    db: &impl ConnectionTrait,
    neighborhood_ids: &[uuid::Uuid],
) -> Result<()> {
    for neighborhood_id in neighborhood_ids {
        let exists = NeighborhoodsEntity::find_by_id(*neighborhood_id)
            .one(db)
            .await?
            .is_some();
        if !exists {
            return Err(AppError::not_found(format!(
                "Neighborhood {} not found",
                neighborhood_id
            )));
        }
    }
    Ok(())
}

/// Drop duplicate ids while preserving order
pub(crate) fn dedup_ids(ids: Vec<uuid::Uuid>) -> Vec<uuid::Uuid> {
    let mut seen = Vec::with_capacity(ids.len());
    for id in ids {
        if !seen.contains(&id) {
            seen.push(id);
        }
    }
    seen
}

/// Convert a region entity model to a response DTO
pub(crate) fn region_model_to_response(
    region: &entity::regions::Model,
    neighborhoods: Option<Vec<NeighborhoodResponse>>,
) -> RegionResponse {
    RegionResponse {
        id: region.id,
        name: region.name.clone(),
        created_at: region.created_at.to_rfc3339(),
        updated_at: region.updated_at.to_rfc3339(),
        neighborhoods,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_ids_preserves_order() {
        let a = uuid::Uuid::new_v4();
        let b = uuid::Uuid::new_v4();
        let deduped = dedup_ids(vec![a, b, a, b, a]);
        assert_eq!(deduped, vec![a, b]);
    }

    #[test]
    fn test_dedup_ids_empty() {
        assert!(dedup_ids(vec![]).is_empty());
    }

    #[test]
    fn test_region_model_to_response_without_neighborhoods() {
        let model = entity::regions::Model {
            id:         uuid::Uuid::new_v4(),
            name:       "Zona Norte".to_string(),
            created_at: chrono::DateTime::default(),
            updated_at: chrono::DateTime::default(),
        };
        let response = region_model_to_response(&model, None);
        assert_eq!(response.name, "Zona Norte");
        assert!(response.neighborhoods.is_none());
    }
}
