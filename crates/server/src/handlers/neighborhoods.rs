//! # Neighborhood Handlers
//!
//! HTTP request handlers for neighborhood CRUD, batch creation, and the
//! usage report.

use axum::Json;
use chrono::Utc;
use entity::{
    broker_neighborhoods::{
        Column as BrokerNeighborhoodColumn,
        Entity as BrokerNeighborhoodsEntity,
    },
    neighborhoods::{Column as NeighborhoodColumn, Entity as NeighborhoodsEntity},
    region_neighborhoods::{
        Column as RegionNeighborhoodColumn,
        Entity as RegionNeighborhoodsEntity,
    },
};
use error::{ApiResponse, AppError, Result};
use sea_orm::{
    ActiveModelTrait,
    ColumnTrait,
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
        neighborhoods::{
            CreateNeighborhoodBatchRequest,
            CreateNeighborhoodRequest,
            NeighborhoodListQuery,
            NeighborhoodResponse,
            UpdateNeighborhoodRequest,
        },
        UsageResponse,
    },
    utils::escape_like_wildcards,
    AppState,
};

/// Create a new neighborhood
pub async fn create_neighborhood_handler(
    state: &AppState,
    req: CreateNeighborhoodRequest,
) -> Result<Json<ApiResponse<NeighborhoodResponse>>> {
    req.validate()?;

    let existing = NeighborhoodsEntity::find()
        .filter(NeighborhoodColumn::Name.eq(&req.name))
        .filter(NeighborhoodColumn::City.eq(&req.city))
        .one(&state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::conflict("Neighborhood already exists in this city"));
    }

    let now = Utc::now();
    let neighborhood = entity::neighborhoods::ActiveModel {
        id: Set(uuid::Uuid::new_v4()),
        name: Set(req.name),
        city: Set(req.city),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let created = neighborhood.insert(&state.db).await?;

    info!(neighborhood_id = %created.id, city = %created.city, "Neighborhood created");

    Ok(Json(ApiResponse::ok(
        neighborhood_model_to_response(&created),
        "Neighborhood created successfully",
    )))
}

/// Create several neighborhoods of one city in a single transaction
///
/// The whole batch is rejected if any name already exists in the city.
pub async fn create_neighborhood_batch_handler(
    state: &AppState,
    req: CreateNeighborhoodBatchRequest,
) -> Result<Json<ApiResponse<Vec<NeighborhoodResponse>>>> {
    req.validate()?;

    let city = req.city.clone();
    let names = req.names.clone();

    let created = state
        .db
        .transaction::<_, Vec<entity::neighborhoods::Model>, AppError>(|txn| {
            Box::pin(async move {
                let mut created = Vec::with_capacity(names.len());
                let now = Utc::now();

                for name in names {
                    let existing = NeighborhoodsEntity::find()
                        .filter(NeighborhoodColumn::Name.eq(&name))
                        .filter(NeighborhoodColumn::City.eq(&city))
                        .one(txn)
                        .await?;
                    if existing.is_some() {
                        return Err(AppError::conflict(format!(
                            "Neighborhood '{}' already exists in this city",
                            name
                        )));
                    }

                    let neighborhood = entity::neighborhoods::ActiveModel {
                        id: Set(uuid::Uuid::new_v4()),
                        name: Set(name),
                        city: Set(city.clone()),
                        created_at: Set(now),
                        updated_at: Set(now),
                    };
                    created.push(neighborhood.insert(txn).await?);
                }

                Ok(created)
            })
        })
        .await?;

    info!(count = created.len(), city = %req.city, "Neighborhood batch created");

    let responses: Vec<NeighborhoodResponse> =
        created.iter().map(neighborhood_model_to_response).collect();
    Ok(Json(ApiResponse::ok(
        responses,
        "Neighborhoods created successfully",
    )))
}

/// Get a single neighborhood by ID
pub async fn get_neighborhood_handler(
    state: &AppState,
    neighborhood_id: uuid::Uuid,
) -> Result<Json<ApiResponse<NeighborhoodResponse>>> {
    let neighborhood = NeighborhoodsEntity::find_by_id(neighborhood_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Neighborhood not found"))?;

    Ok(Json(ApiResponse::ok(
        neighborhood_model_to_response(&neighborhood),
        "Neighborhood retrieved",
    )))
}

/// List neighborhoods with optional name and city filters
pub async fn list_neighborhoods_handler(
    state: &AppState,
    query: NeighborhoodListQuery,
) -> Result<Json<ApiResponse<Vec<NeighborhoodResponse>>>> {
    let mut find = NeighborhoodsEntity::find();

    if let Some(ref name) = query.name {
        let pattern = format!("%{}%", escape_like_wildcards(name));
        find = find.filter(NeighborhoodColumn::Name.like(&pattern));
    }
    if let Some(ref city) = query.city {
        let pattern = format!("%{}%", escape_like_wildcards(city));
        find = find.filter(NeighborhoodColumn::City.like(&pattern));
    }

    let neighborhoods = find
        .order_by_asc(NeighborhoodColumn::City)
        .order_by_asc(NeighborhoodColumn::Name)
        .all(&state.db)
        .await?;

    let responses: Vec<NeighborhoodResponse> =
        neighborhoods.iter().map(neighborhood_model_to_response).collect();
    Ok(Json(ApiResponse::ok(responses, "Neighborhoods retrieved")))
}

/// Update a neighborhood
pub async fn update_neighborhood_handler(
    state: &AppState,
    neighborhood_id: uuid::Uuid,
    req: UpdateNeighborhoodRequest,
) -> Result<Json<ApiResponse<NeighborhoodResponse>>> {
    req.validate()?;

    let neighborhood = NeighborhoodsEntity::find_by_id(neighborhood_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Neighborhood not found"))?;

    let new_name = req.name.clone().unwrap_or_else(|| neighborhood.name.clone());
    let new_city = req.city.clone().unwrap_or_else(|| neighborhood.city.clone());

    let existing = NeighborhoodsEntity::find()
        .filter(NeighborhoodColumn::Name.eq(&new_name))
        .filter(NeighborhoodColumn::City.eq(&new_city))
        .filter(NeighborhoodColumn::Id.ne(neighborhood_id))
        .one(&state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::conflict("Neighborhood already exists in this city"));
    }

    let mut active_model: entity::neighborhoods::ActiveModel = neighborhood.into();
    active_model.name = Set(new_name);
    active_model.city = Set(new_city);
    active_model.updated_at = Set(Utc::now());

    let updated = active_model.update(&state.db).await?;

    info!(neighborhood_id = %neighborhood_id, "Neighborhood updated");

    Ok(Json(ApiResponse::ok(
        neighborhood_model_to_response(&updated),
        "Neighborhood updated successfully",
    )))
}

/// Delete a neighborhood
///
/// Rejected while any region or broker profile still references it.
pub async fn delete_neighborhood_handler(
    state: &AppState,
    neighborhood_id: uuid::Uuid,
) -> Result<Json<ApiResponse<NeighborhoodResponse>>> {
    let neighborhood = NeighborhoodsEntity::find_by_id(neighborhood_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Neighborhood not found"))?;

    let usage = neighborhood_usage(state, neighborhood_id).await?;
    if usage.is_used {
        return Err(AppError::forbidden(
            "Neighborhood is in use and cannot be deleted",
        ));
    }

    NeighborhoodsEntity::delete_by_id(neighborhood_id)
        .exec(&state.db)
        .await?;

    info!(neighborhood_id = %neighborhood_id, "Neighborhood deleted");

    Ok(Json(ApiResponse::ok(
        neighborhood_model_to_response(&neighborhood),
        "Neighborhood deleted successfully",
    )))
}

/// Report where a neighborhood is referenced
pub async fn get_neighborhood_usage_handler(
    state: &AppState,
    neighborhood_id: uuid::Uuid,
) -> Result<Json<ApiResponse<UsageResponse>>> {
    let neighborhood = NeighborhoodsEntity::find_by_id(neighborhood_id)
        .one(&state.db)
        .await?;
    if neighborhood.is_none() {
        return Err(AppError::not_found("Neighborhood not found"));
    }

    let usage = neighborhood_usage(state, neighborhood_id).await?;
    Ok(Json(ApiResponse::ok(usage, "Neighborhood usage retrieved")))
}

/// Collect the relations that reference a neighborhood
async fn neighborhood_usage(state: &AppState, neighborhood_id: uuid::Uuid) -> Result<UsageResponse> {
    let mut used_in = Vec::new();

    let region_links = RegionNeighborhoodsEntity::find()
        .filter(RegionNeighborhoodColumn::NeighborhoodId.eq(neighborhood_id))
        .count(&state.db)
        .await?;
    if region_links > 0 {
        used_in.push("regions".to_string());
    }

    let broker_links = BrokerNeighborhoodsEntity::find()
        .filter(BrokerNeighborhoodColumn::NeighborhoodId.eq(neighborhood_id))
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

/// Convert a neighborhood entity model to a response DTO
pub(crate) fn neighborhood_model_to_response(
    neighborhood: &entity::neighborhoods::Model,
) -> NeighborhoodResponse {
    NeighborhoodResponse {
        id:         neighborhood.id,
        name:       neighborhood.name.clone(),
        city:       neighborhood.city.clone(),
        created_at: neighborhood.created_at.to_rfc3339(),
        updated_at: neighborhood.updated_at.to_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighborhood_model_to_response() {
        let model = entity::neighborhoods::Model {
            id:         uuid::Uuid::new_v4(),
            name:       "Batel".to_string(),
            city:       "Curitiba".to_string(),
            created_at: chrono::DateTime::default(),
            updated_at: chrono::DateTime::default(),
        };

        let response = neighborhood_model_to_response(&model);
        assert_eq!(response.id, model.id);
        assert_eq!(response.name, "Batel");
        assert_eq!(response.city, "Curitiba");
    }
}
