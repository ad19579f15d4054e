//! # Team Handlers
//!
//! HTTP request handlers for team CRUD, the members sub-resource, and
//! leader assignment.

use axum::Json;
use chrono::Utc;
use entity::{
    members::{Column as MemberColumn, Entity as MembersEntity},
    teams::{Column as TeamColumn, Entity as TeamsEntity},
};
use error::{ApiResponse, AppError, Result};
use sea_orm::{
    ActiveModelTrait,
    ColumnTrait,
    EntityTrait,
    QueryFilter,
    QueryOrder,
    QuerySelect,
    Set,
    TransactionTrait,
};
use tracing::info;
use validator::Validate;

use crate::{
    dto::{
        members::MemberResponse,
        teams::{
            CreateTeamRequest,
            SetLeaderRequest,
            TeamGetQuery,
            TeamListQuery,
            TeamMembersQuery,
            TeamResponse,
            UpdateTeamRequest,
        },
    },
    handlers::members::member_model_to_response,
    utils::escape_like_wildcards,
    AppState,
};

/// Create a new team
pub async fn create_team_handler(
    state: &AppState,
    req: CreateTeamRequest,
) -> Result<Json<ApiResponse<TeamResponse>>> {
    req.validate()?;

    let existing = TeamsEntity::find()
        .filter(TeamColumn::Name.eq(&req.name))
        .one(&state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::conflict("A team with this name already exists"));
    }

    let now = Utc::now();
    let team = entity::teams::ActiveModel {
        id: Set(uuid::Uuid::new_v4()),
        name: Set(req.name),
        team_type: Set(req.team_type),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let created = team.insert(&state.db).await?;

    info!(team_id = %created.id, team_type = %created.team_type, "Team created");

    Ok(Json(ApiResponse::ok(
        team_model_to_response(&created, None),
        "Team created successfully",
    )))
}

/// Get a single team by ID
pub async fn get_team_handler(
    state: &AppState,
    team_id: uuid::Uuid,
    query: TeamGetQuery,
) -> Result<Json<ApiResponse<TeamResponse>>> {
    let team = TeamsEntity::find_by_id(team_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Team not found"))?;

    let members = if query.include_members.unwrap_or(false) {
        Some(team_members(state, team_id, false).await?)
    }
    else {
        None
    };

    Ok(Json(ApiResponse::ok(
        team_model_to_response(&team, members),
        "Team retrieved",
    )))
}

/// List teams with optional filters
pub async fn list_teams_handler(
    state: &AppState,
    query: TeamListQuery,
) -> Result<Json<ApiResponse<Vec<TeamResponse>>>> {
    let mut find = TeamsEntity::find();

    if let Some(ref name) = query.name {
        let pattern = format!("%{}%", escape_like_wildcards(name));
        find = find.filter(TeamColumn::Name.like(&pattern));
    }
    if let Some(ref team_type) = query.team_type {
        find = find.filter(TeamColumn::TeamType.eq(team_type.clone()));
    }

    let teams = find.order_by_asc(TeamColumn::Name).all(&state.db).await?;

    let responses: Vec<TeamResponse> = teams
        .iter()
        .map(|team| team_model_to_response(team, None))
        .collect();
    Ok(Json(ApiResponse::ok(responses, "Teams retrieved")))
}

/// Update a team
pub async fn update_team_handler(
    state: &AppState,
    team_id: uuid::Uuid,
    req: UpdateTeamRequest,
) -> Result<Json<ApiResponse<TeamResponse>>> {
    req.validate()?;

    let team = TeamsEntity::find_by_id(team_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Team not found"))?;

    let mut active_model: entity::teams::ActiveModel = team.into();
    if let Some(name) = req.name {
        let existing = TeamsEntity::find()
            .filter(TeamColumn::Name.eq(&name))
            .filter(TeamColumn::Id.ne(team_id))
            .one(&state.db)
            .await?;
        if existing.is_some() {
            return Err(AppError::conflict("A team with this name already exists"));
        }
        active_model.name = Set(name);
    }
    if let Some(team_type) = req.team_type {
        active_model.team_type = Set(team_type);
    }
    active_model.updated_at = Set(Utc::now());

    let updated = active_model.update(&state.db).await?;

    info!(team_id = %team_id, "Team updated");

    Ok(Json(ApiResponse::ok(
        team_model_to_response(&updated, None),
        "Team updated successfully",
    )))
}

/// Delete a team
///
/// Members are removed by the cascade on the foreign key.
pub async fn delete_team_handler(
    state: &AppState,
    team_id: uuid::Uuid,
) -> Result<Json<ApiResponse<TeamResponse>>> {
    let team = TeamsEntity::find_by_id(team_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Team not found"))?;

    TeamsEntity::delete_by_id(team_id).exec(&state.db).await?;

    info!(team_id = %team_id, "Team deleted");

    Ok(Json(ApiResponse::ok(
        team_model_to_response(&team, None),
        "Team deleted successfully",
    )))
}

/// List the members of a team
pub async fn list_team_members_handler(
    state: &AppState,
    team_id: uuid::Uuid,
    query: TeamMembersQuery,
) -> Result<Json<ApiResponse<Vec<MemberResponse>>>> {
    let team = TeamsEntity::find_by_id(team_id).one(&state.db).await?;
    if team.is_none() {
        return Err(AppError::not_found("Team not found"));
    }

    let members = team_members(state, team_id, query.only_active.unwrap_or(false)).await?;
    Ok(Json(ApiResponse::ok(members, "Team members retrieved")))
}

/// Assign the leader of a team
///
/// Runs inside a transaction holding a FOR UPDATE lock on the team row so
/// the single-active-leader invariant cannot be raced. Assigning the current
/// leader again is a no-op success.
pub async fn set_team_leader_handler(
    state: &AppState,
    team_id: uuid::Uuid,
    req: SetLeaderRequest,
) -> Result<Json<ApiResponse<MemberResponse>>> {
    let member_id = req.member_id;

    let leader = state
        .db
        .transaction::<_, entity::members::Model, AppError>(move |txn| {
            Box::pin(async move {
                // The team row serializes concurrent leadership changes
                let team = TeamsEntity::find_by_id(team_id)
                    .lock_exclusive()
                    .one(txn)
                    .await?;
                if team.is_none() {
                    return Err(AppError::not_found("Team not found"));
                }

                let members = MembersEntity::find()
                    .filter(MemberColumn::TeamId.eq(team_id))
                    .all(txn)
                    .await?;

                let member = MembersEntity::find_by_id(member_id)
                    .one(txn)
                    .await?
                    .ok_or_else(|| AppError::not_found("Member not found"))?;

                if member.team_id != team_id {
                    return Err(AppError::bad_request("Member does not belong to this team"));
                }

                if member.is_leader {
                    return Ok(member);
                }

                let other_leader = members
                    .iter()
                    .any(|m| m.id != member_id && m.is_leader && m.active);
                if other_leader {
                    return Err(AppError::conflict("Team already has a leader"));
                }

                let mut active_model: entity::members::ActiveModel = member.into();
                active_model.is_leader = Set(true);
                active_model.updated_at = Set(Utc::now());
                Ok(active_model.update(txn).await?)
            })
        })
        .await?;

    info!(team_id = %team_id, member_id = %member_id, "Team leader assigned");

    Ok(Json(ApiResponse::ok(
        member_model_to_response(&leader, None),
        "Team leader assigned successfully",
    )))
}

/// Fetch a team's members ordered by name
async fn team_members(
    state: &AppState,
    team_id: uuid::Uuid,
    only_active: bool,
) -> Result<Vec<MemberResponse>> {
    let mut find = MembersEntity::find().filter(MemberColumn::TeamId.eq(team_id));
    if only_active {
        find = find.filter(MemberColumn::Active.eq(true));
    }

    let members = find.order_by_asc(MemberColumn::Name).all(&state.db).await?;
    Ok(members
        .iter()
        .map(|member| member_model_to_response(member, None))
        .collect())
}

/// Convert a team entity model to a response DTO
pub(crate) fn team_model_to_response(
    team: &entity::teams::Model,
    members: Option<Vec<MemberResponse>>,
) -> TeamResponse {
    TeamResponse {
        id: team.id,
        name: team.name.clone(),
        team_type: team.team_type.clone(),
        created_at: team.created_at.to_rfc3339(),
        updated_at: team.updated_at.to_rfc3339(),
        members,
    }
}

#[cfg(test)]
mod tests {
    use entity::teams::TeamType;

    use super::*;

    #[test]
    fn test_team_model_to_response() {
        let model = entity::teams::Model {
            id:         uuid::Uuid::new_v4(),
            name:       "Equipe Centro".to_string(),
            team_type:  TeamType::Brokers,
            created_at: chrono::DateTime::default(),
            updated_at: chrono::DateTime::default(),
        };

        let response = team_model_to_response(&model, None);
        assert_eq!(response.id, model.id);
        assert_eq!(response.team_type, TeamType::Brokers);
        assert!(response.members.is_none());
    }

    #[test]
    fn test_team_model_to_response_with_members() {
        let team = entity::teams::Model {
            id:         uuid::Uuid::new_v4(),
            name:       "Equipe Legal".to_string(),
            team_type:  TeamType::Legal,
            created_at: chrono::DateTime::default(),
            updated_at: chrono::DateTime::default(),
        };
        let member = entity::members::Model {
            id:         uuid::Uuid::new_v4(),
            name:       "Carlos Lima".to_string(),
            email:      "carlos@imovia.com.br".to_string(),
            phone:      None,
            is_leader:  true,
            active:     true,
            team_id:    team.id,
            joined_at:  chrono::DateTime::default(),
            created_at: chrono::DateTime::default(),
            updated_at: chrono::DateTime::default(),
        };

        let response =
            team_model_to_response(&team, Some(vec![member_model_to_response(&member, None)]));
        let members = response.members.unwrap();
        assert_eq!(members.len(), 1);
        assert!(members[0].is_leader);
    }
}
