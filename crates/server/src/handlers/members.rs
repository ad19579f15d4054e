//! # Member Handlers
//!
//! HTTP request handlers for team member CRUD and status toggling.
//!
//! Every mutation that can affect team leadership runs inside a transaction
//! holding a row lock on the team itself, so the single-active-leader
//! invariant holds under concurrent requests. The team row is the anchor:
//! locking the leader rows would lock nothing exactly when the team has no
//! leader yet.

use axum::Json;
use chrono::Utc;
use entity::{
    members::{Column as MemberColumn, Entity as MembersEntity},
    teams::Entity as TeamsEntity,
};
use error::{ApiResponse, AppError, Result};
use sea_orm::{
    ActiveModelTrait,
    ColumnTrait,
    ConnectionTrait,
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
        members::{
            CreateMemberRequest,
            MemberGetQuery,
            MemberListQuery,
            MemberResponse,
            UpdateMemberRequest,
            UpdateMemberStatusRequest,
        },
        teams::TeamSummary,
    },
    utils::escape_like_wildcards,
    AppState,
};

/// Create a new team member
pub async fn create_member_handler(
    state: &AppState,
    req: CreateMemberRequest,
) -> Result<Json<ApiResponse<MemberResponse>>> {
    req.validate()?;

    let is_leader = req.is_leader.unwrap_or(false);
    let active = req.active.unwrap_or(true);

    let created = state
        .db
        .transaction::<_, entity::members::Model, AppError>(move |txn| {
            Box::pin(async move {
                let team = TeamsEntity::find_by_id(req.team_id)
                    .lock_exclusive()
                    .one(txn)
                    .await?;
                if team.is_none() {
                    return Err(AppError::not_found("Team not found"));
                }

                let existing = MembersEntity::find()
                    .filter(MemberColumn::Email.eq(&req.email))
                    .one(txn)
                    .await?;
                if existing.is_some() {
                    return Err(AppError::conflict("Email already in use"));
                }

                // Any leader insert is checked, active or not
                if is_leader {
                    ensure_no_other_active_leader(txn, req.team_id, None).await?;
                }

                let now = Utc::now();
                let member = entity::members::ActiveModel {
                    id: Set(uuid::Uuid::new_v4()),
                    name: Set(req.name),
                    email: Set(req.email),
                    phone: Set(req.phone),
                    is_leader: Set(is_leader),
                    active: Set(active),
                    team_id: Set(req.team_id),
                    joined_at: Set(now),
                    created_at: Set(now),
                    updated_at: Set(now),
                };
                Ok(member.insert(txn).await?)
            })
        })
        .await?;

    info!(member_id = %created.id, team_id = %created.team_id, is_leader = created.is_leader, "Member created");

    Ok(Json(ApiResponse::ok(
        member_model_to_response(&created, None),
        "Member created successfully",
    )))
}

/// Get a single member by ID
pub async fn get_member_handler(
    state: &AppState,
    member_id: uuid::Uuid,
    query: MemberGetQuery,
) -> Result<Json<ApiResponse<MemberResponse>>> {
    let member = MembersEntity::find_by_id(member_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Member not found"))?;

    let team = if query.include_team.unwrap_or(false) {
        let team = TeamsEntity::find_by_id(member.team_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| AppError::internal("Member team not found"))?;
        Some(TeamSummary {
            id:        team.id,
            name:      team.name,
            team_type: team.team_type,
        })
    }
    else {
        None
    };

    Ok(Json(ApiResponse::ok(
        member_model_to_response(&member, team),
        "Member retrieved",
    )))
}

/// List members with optional filters
pub async fn list_members_handler(
    state: &AppState,
    query: MemberListQuery,
) -> Result<Json<ApiResponse<Vec<MemberResponse>>>> {
    let mut find = MembersEntity::find();

    if let Some(ref name) = query.name {
        let pattern = format!("%{}%", escape_like_wildcards(name));
        find = find.filter(MemberColumn::Name.like(&pattern));
    }
    if let Some(ref email) = query.email {
        let pattern = format!("%{}%", escape_like_wildcards(email));
        find = find.filter(MemberColumn::Email.like(&pattern));
    }
    if let Some(is_leader) = query.is_leader {
        find = find.filter(MemberColumn::IsLeader.eq(is_leader));
    }
    if let Some(team_id) = query.team_id {
        find = find.filter(MemberColumn::TeamId.eq(team_id));
    }
    if let Some(active) = query.active {
        find = find.filter(MemberColumn::Active.eq(active));
    }

    let members = find.order_by_asc(MemberColumn::Name).all(&state.db).await?;

    let responses: Vec<MemberResponse> = members
        .iter()
        .map(|member| member_model_to_response(member, None))
        .collect();
    Ok(Json(ApiResponse::ok(responses, "Members retrieved")))
}

/// Update a team member
///
/// Promotions, and moves that carry the leader flag into another team, check
/// the target team for an existing active leader; demotions refuse to leave
/// the team without one. When the member moves to another team, the old
/// team's leadership is not re-validated.
pub async fn update_member_handler(
    state: &AppState,
    member_id: uuid::Uuid,
    req: UpdateMemberRequest,
) -> Result<Json<ApiResponse<MemberResponse>>> {
    req.validate()?;

    let updated = state
        .db
        .transaction::<_, entity::members::Model, AppError>(move |txn| {
            Box::pin(async move {
                let member = MembersEntity::find_by_id(member_id)
                    .one(txn)
                    .await?
                    .ok_or_else(|| AppError::not_found("Member not found"))?;

                let target_team_id = req.team_id.unwrap_or(member.team_id);

                // Lock every involved team row, in id order
                let mut team_ids = vec![target_team_id];
                if target_team_id != member.team_id {
                    team_ids.push(member.team_id);
                    team_ids.sort();
                }
                for team_id in team_ids {
                    let team = TeamsEntity::find_by_id(team_id)
                        .lock_exclusive()
                        .one(txn)
                        .await?;
                    if team.is_none() {
                        return Err(AppError::not_found("Team not found"));
                    }
                }

                if let Some(ref email) = req.email {
                    let existing = MembersEntity::find()
                        .filter(MemberColumn::Email.eq(email))
                        .filter(MemberColumn::Id.ne(member_id))
                        .one(txn)
                        .await?;
                    if existing.is_some() {
                        return Err(AppError::conflict("Email already in use"));
                    }
                }

                let new_is_leader = req.is_leader.unwrap_or(member.is_leader);

                if leader_check_on_update(
                    member.is_leader,
                    new_is_leader,
                    target_team_id != member.team_id,
                ) {
                    // Promotion or leader move: the target team must have no
                    // other active leader
                    ensure_no_other_active_leader(txn, target_team_id, Some(member_id)).await?;
                }
                if !new_is_leader && member.is_leader && member.active {
                    // Demotion: the member must not be the team's only active leader
                    let others =
                        count_other_active_leaders(txn, member.team_id, member_id).await?;
                    if others == 0 {
                        return Err(AppError::validation(
                            "Team must have at least one leader",
                        ));
                    }
                }

                let mut active_model: entity::members::ActiveModel = member.into();
                if let Some(name) = req.name {
                    active_model.name = Set(name);
                }
                if let Some(email) = req.email {
                    active_model.email = Set(email);
                }
                if let Some(phone) = req.phone {
                    active_model.phone = Set(Some(phone));
                }
                active_model.is_leader = Set(new_is_leader);
                active_model.team_id = Set(target_team_id);
                active_model.updated_at = Set(Utc::now());
                Ok(active_model.update(txn).await?)
            })
        })
        .await?;

    info!(member_id = %member_id, team_id = %updated.team_id, "Member updated");

    Ok(Json(ApiResponse::ok(
        member_model_to_response(&updated, None),
        "Member updated successfully",
    )))
}

/// Toggle a member's active status
///
/// Activating a leader is checked against the team exactly like a promotion;
/// deactivating the only active leader is refused.
pub async fn update_member_status_handler(
    state: &AppState,
    member_id: uuid::Uuid,
    req: UpdateMemberStatusRequest,
) -> Result<Json<ApiResponse<MemberResponse>>> {
    let updated = state
        .db
        .transaction::<_, entity::members::Model, AppError>(move |txn| {
            Box::pin(async move {
                let member = MembersEntity::find_by_id(member_id)
                    .one(txn)
                    .await?
                    .ok_or_else(|| AppError::not_found("Member not found"))?;

                let check = leader_check_on_status(member.is_leader, member.active, req.active);
                if check != StatusLeaderCheck::None {
                    TeamsEntity::find_by_id(member.team_id)
                        .lock_exclusive()
                        .one(txn)
                        .await?;
                }
                match check {
                    StatusLeaderCheck::RequireNoOtherLeader => {
                        ensure_no_other_active_leader(txn, member.team_id, Some(member_id))
                            .await?;
                    },
                    StatusLeaderCheck::RequireAnotherLeader => {
                        let others =
                            count_other_active_leaders(txn, member.team_id, member_id).await?;
                        if others == 0 {
                            return Err(AppError::validation(
                                "Team must have at least one active leader",
                            ));
                        }
                    },
                    StatusLeaderCheck::None => {},
                }

                let mut active_model: entity::members::ActiveModel = member.into();
                active_model.active = Set(req.active);
                active_model.updated_at = Set(Utc::now());
                Ok(active_model.update(txn).await?)
            })
        })
        .await?;

    info!(member_id = %member_id, active = updated.active, "Member status updated");

    Ok(Json(ApiResponse::ok(
        member_model_to_response(&updated, None),
        "Member status updated successfully",
    )))
}

/// Delete a team member
pub async fn delete_member_handler(
    state: &AppState,
    member_id: uuid::Uuid,
) -> Result<Json<ApiResponse<MemberResponse>>> {
    let deleted = state
        .db
        .transaction::<_, entity::members::Model, AppError>(move |txn| {
            Box::pin(async move {
                let member = MembersEntity::find_by_id(member_id)
                    .one(txn)
                    .await?
                    .ok_or_else(|| AppError::not_found("Member not found"))?;

                if member.is_leader && member.active {
                    TeamsEntity::find_by_id(member.team_id)
                        .lock_exclusive()
                        .one(txn)
                        .await?;
                    let others =
                        count_other_active_leaders(txn, member.team_id, member_id).await?;
                    if others == 0 {
                        return Err(AppError::validation(
                            "Team must have at least one leader",
                        ));
                    }
                }

                MembersEntity::delete_by_id(member_id).exec(txn).await?;
                Ok(member)
            })
        })
        .await?;

    info!(member_id = %member_id, team_id = %deleted.team_id, "Member deleted");

    Ok(Json(ApiResponse::ok(
        member_model_to_response(&deleted, None),
        "Member deleted successfully",
    )))
}

/// Which leadership check an active-status change requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusLeaderCheck {
    /// No leadership impact
    None,
    /// Activating a leader: the team must have no other active leader
    RequireNoOtherLeader,
    /// Deactivating a leader: another active leader must remain
    RequireAnotherLeader,
}

/// Decide the leadership check for a status change
fn leader_check_on_status(is_leader: bool, active: bool, new_active: bool) -> StatusLeaderCheck {
    if !is_leader || active == new_active {
        return StatusLeaderCheck::None;
    }
    if new_active {
        StatusLeaderCheck::RequireNoOtherLeader
    }
    else {
        StatusLeaderCheck::RequireAnotherLeader
    }
}

/// Whether an update must check the target team for another active leader
///
/// True for any promotion, and for a member who keeps the leader flag while
/// changing teams.
fn leader_check_on_update(was_leader: bool, new_is_leader: bool, team_changed: bool) -> bool {
    new_is_leader && (!was_leader || team_changed)
}

/// Reject with Conflict when the team already has an active leader
///
/// Callers hold the FOR UPDATE lock on the team row; `exclude` skips the
/// member being mutated.
async fn ensure_no_other_active_leader(
    db: &impl ConnectionTrait,
    team_id: uuid::Uuid,
    exclude: Option<uuid::Uuid>,
) -> Result<()> {
    let mut find = MembersEntity::find()
        .filter(MemberColumn::TeamId.eq(team_id))
        .filter(MemberColumn::IsLeader.eq(true))
        .filter(MemberColumn::Active.eq(true));
    if let Some(member_id) = exclude {
        find = find.filter(MemberColumn::Id.ne(member_id));
    }

    let leaders = find.all(db).await?;
    if !leaders.is_empty() {
        return Err(AppError::conflict("Team already has a leader"));
    }
    Ok(())
}

/// Count the team's active leaders other than the given member
///
/// Callers hold the FOR UPDATE lock on the team row.
async fn count_other_active_leaders(
    db: &impl ConnectionTrait,
    team_id: uuid::Uuid,
    member_id: uuid::Uuid,
) -> Result<u64> {
    let leaders = MembersEntity::find()
        .filter(MemberColumn::TeamId.eq(team_id))
        .filter(MemberColumn::IsLeader.eq(true))
        .filter(MemberColumn::Active.eq(true))
        .filter(MemberColumn::Id.ne(member_id))
        .all(db)
        .await?;
    Ok(leaders.len() as u64)
}

/// Convert a member entity model to a response DTO
pub(crate) fn member_model_to_response(
    member: &entity::members::Model,
    team: Option<TeamSummary>,
) -> MemberResponse {
    MemberResponse {
        id: member.id,
        name: member.name.clone(),
        email: member.email.clone(),
        phone: member.phone.clone(),
        is_leader: member.is_leader,
        active: member.active,
        team_id: member.team_id,
        joined_at: member.joined_at.to_rfc3339(),
        created_at: member.created_at.to_rfc3339(),
        updated_at: member.updated_at.to_rfc3339(),
        team,
    }
}

#[cfg(test)]
mod tests {
    use entity::teams::TeamType;

    use super::*;

    fn sample_member() -> entity::members::Model {
        entity::members::Model {
            id:         uuid::Uuid::new_v4(),
            name:       "Carlos Lima".to_string(),
            email:      "carlos@imovia.com.br".to_string(),
            phone:      None,
            is_leader:  false,
            active:     true,
            team_id:    uuid::Uuid::new_v4(),
            joined_at:  chrono::DateTime::default(),
            created_at: chrono::DateTime::default(),
            updated_at: chrono::DateTime::default(),
        }
    }

    #[test]
    fn test_member_model_to_response() {
        let member = sample_member();
        let response = member_model_to_response(&member, None);
        assert_eq!(response.id, member.id);
        assert_eq!(response.team_id, member.team_id);
        assert!(!response.is_leader);
        assert!(response.team.is_none());
    }

    #[test]
    fn test_member_model_to_response_with_team() {
        let member = sample_member();
        let team = TeamSummary {
            id:        member.team_id,
            name:      "Equipe Centro".to_string(),
            team_type: TeamType::Brokers,
        };
        let response = member_model_to_response(&member, Some(team));
        let embedded = response.team.unwrap();
        assert_eq!(embedded.id, member.team_id);
        assert_eq!(embedded.team_type, TeamType::Brokers);
    }

    #[test]
    fn test_member_response_omits_absent_team() {
        let response = member_model_to_response(&sample_member(), None);
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("team").is_none());
    }

    #[test]
    fn test_activating_inactive_leader_is_checked() {
        // An inactive leader coming back must not yield a second active leader
        assert_eq!(
            leader_check_on_status(true, false, true),
            StatusLeaderCheck::RequireNoOtherLeader
        );
    }

    #[test]
    fn test_deactivating_active_leader_requires_replacement() {
        assert_eq!(
            leader_check_on_status(true, true, false),
            StatusLeaderCheck::RequireAnotherLeader
        );
    }

    #[test]
    fn test_status_change_without_leadership_impact() {
        // Non-leaders and no-op toggles never touch the leadership checks
        assert_eq!(leader_check_on_status(false, false, true), StatusLeaderCheck::None);
        assert_eq!(leader_check_on_status(false, true, false), StatusLeaderCheck::None);
        assert_eq!(leader_check_on_status(true, true, true), StatusLeaderCheck::None);
        assert_eq!(leader_check_on_status(true, false, false), StatusLeaderCheck::None);
    }

    #[test]
    fn test_promotion_is_always_checked() {
        assert!(leader_check_on_update(false, true, false));
        assert!(leader_check_on_update(false, true, true));
    }

    #[test]
    fn test_leader_moving_teams_is_checked() {
        assert!(leader_check_on_update(true, true, true));
    }

    #[test]
    fn test_leader_staying_put_is_not_rechecked() {
        assert!(!leader_check_on_update(true, true, false));
        assert!(!leader_check_on_update(true, false, false));
        assert!(!leader_check_on_update(false, false, true));
    }
}
