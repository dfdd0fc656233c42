use axum::Extension;
use axum::Json;
use axum::extract::{Path, State};
use axum_extra::extract::WithRejection;
use campus_core::model::scope::Principal;
use shared_types::GroupId;

use super::dto::{
    CreateGroupRequestRestDTO, GetGroupListResponseRestDTO, GetGroupsQuery,
    GroupAttendanceReportResponseRestDTO, GroupResponseRestDTO, GroupStatisticsResponseRestDTO,
    UpdateGroupRequestRestDTO,
};
use super::mapper::update_group_request;
use crate::dto::common::EntityResponseRestDTO;
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{CreatedOrErrorResponse, EmptyOrErrorResponse, OkOrErrorResponse};
use crate::extractor::Qs;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/group/v1",
    request_body = CreateGroupRequestRestDTO,
    responses(CreatedOrErrorResponse<EntityResponseRestDTO>),
    tag = "schedule_management",
    security(
        ("bearer" = [])
    ),
    summary = "Create group",
    description = "Creates a study group in a branch for one subject.",
)]
pub(crate) async fn post_group(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateGroupRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<EntityResponseRestDTO> {
    let result = state
        .core
        .schedule_service
        .create_group(&principal, request.into())
        .await;
    CreatedOrErrorResponse::from_result(result, state, "creating group")
}

#[utoipa::path(
    get,
    path = "/api/group/v1/{id}",
    responses(OkOrErrorResponse<GroupResponseRestDTO>),
    params(
        ("id" = GroupId, Path, description = "Group id")
    ),
    tag = "schedule_management",
    security(
        ("bearer" = [])
    ),
    summary = "Retrieve group",
    description = "Returns information on a single group.",
)]
pub(crate) async fn get_group(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<GroupId>,
) -> OkOrErrorResponse<GroupResponseRestDTO> {
    let result = state.core.schedule_service.get_group(&principal, &id).await;
    OkOrErrorResponse::from_result(result, state, "getting group details")
}

#[utoipa::path(
    get,
    path = "/api/group/v1",
    responses(OkOrErrorResponse<GetGroupListResponseRestDTO>),
    params(GetGroupsQuery),
    tag = "schedule_management",
    security(
        ("bearer" = [])
    ),
    summary = "List groups",
    description = "Returns a list of groups visible to the caller.",
)]
pub(crate) async fn get_groups(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Qs(query), _): WithRejection<Qs<GetGroupsQuery>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<GetGroupListResponseRestDTO> {
    let result = state
        .core
        .schedule_service
        .get_group_list(&principal, query.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "getting groups")
}

#[utoipa::path(
    get,
    path = "/api/group/v1/{id}/statistics",
    responses(OkOrErrorResponse<GroupStatisticsResponseRestDTO>),
    params(
        ("id" = GroupId, Path, description = "Group id")
    ),
    tag = "schedule_management",
    security(
        ("bearer" = [])
    ),
    summary = "Group statistics",
    description = "Returns headcount, lesson, attendance and payment totals for one group.",
)]
pub(crate) async fn get_group_statistics(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<GroupId>,
) -> OkOrErrorResponse<GroupStatisticsResponseRestDTO> {
    let result = state
        .core
        .schedule_service
        .get_group_statistics(&principal, &id)
        .await;
    OkOrErrorResponse::from_result(result, state, "getting group statistics")
}

#[utoipa::path(
    get,
    path = "/api/group/v1/{id}/attendance-report",
    responses(OkOrErrorResponse<GroupAttendanceReportResponseRestDTO>),
    params(
        ("id" = GroupId, Path, description = "Group id")
    ),
    tag = "schedule_management",
    security(
        ("bearer" = [])
    ),
    summary = "Group attendance report",
    description = "Breaks the group's attendance rows down by status.",
)]
pub(crate) async fn get_group_attendance_report(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<GroupId>,
) -> OkOrErrorResponse<GroupAttendanceReportResponseRestDTO> {
    let result = state
        .core
        .schedule_service
        .get_group_attendance_report(&principal, &id)
        .await;
    OkOrErrorResponse::from_result(result, state, "getting group attendance report")
}

#[utoipa::path(
    patch,
    path = "/api/group/v1/{id}",
    request_body = UpdateGroupRequestRestDTO,
    responses(EmptyOrErrorResponse),
    params(
        ("id" = GroupId, Path, description = "Group id")
    ),
    tag = "schedule_management",
    security(
        ("bearer" = [])
    ),
    summary = "Update group",
    description = "Updates group attributes; absent fields are left unchanged.",
)]
pub(crate) async fn patch_group(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<GroupId>,
    WithRejection(Json(request), _): WithRejection<
        Json<UpdateGroupRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .schedule_service
        .update_group(&principal, update_group_request(id, request))
        .await;
    EmptyOrErrorResponse::from_result(result, state, "updating group")
}
