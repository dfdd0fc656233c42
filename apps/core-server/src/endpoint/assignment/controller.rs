use axum::Extension;
use axum::Json;
use axum::extract::{Path, State};
use axum_extra::extract::WithRejection;
use campus_core::model::scope::Principal;
use shared_types::AssignmentId;

use super::dto::{
    AssignmentResponseRestDTO, CreateAssignmentRequestRestDTO, GetAssignmentListResponseRestDTO,
    GetAssignmentsQuery, UpdateAssignmentRequestRestDTO,
};
use super::mapper::update_assignment_request;
use crate::dto::common::EntityResponseRestDTO;
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{CreatedOrErrorResponse, EmptyOrErrorResponse, OkOrErrorResponse};
use crate::extractor::Qs;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/assignment/v1",
    request_body = CreateAssignmentRequestRestDTO,
    responses(CreatedOrErrorResponse<EntityResponseRestDTO>),
    tag = "coursework_management",
    security(
        ("bearer" = [])
    ),
    summary = "Create assignment",
    description = "Creates a homework assignment for a group.",
)]
pub(crate) async fn post_assignment(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateAssignmentRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<EntityResponseRestDTO> {
    let result = state
        .core
        .coursework_service
        .create_assignment(&principal, request.into())
        .await;
    CreatedOrErrorResponse::from_result(result, state, "creating assignment")
}

#[utoipa::path(
    get,
    path = "/api/assignment/v1/{id}",
    responses(OkOrErrorResponse<AssignmentResponseRestDTO>),
    params(
        ("id" = AssignmentId, Path, description = "Assignment id")
    ),
    tag = "coursework_management",
    security(
        ("bearer" = [])
    ),
    summary = "Retrieve assignment",
    description = "Returns information on a single assignment.",
)]
pub(crate) async fn get_assignment(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<AssignmentId>,
) -> OkOrErrorResponse<AssignmentResponseRestDTO> {
    let result = state
        .core
        .coursework_service
        .get_assignment(&principal, &id)
        .await;
    OkOrErrorResponse::from_result(result, state, "getting assignment details")
}

#[utoipa::path(
    get,
    path = "/api/assignment/v1",
    responses(OkOrErrorResponse<GetAssignmentListResponseRestDTO>),
    params(GetAssignmentsQuery),
    tag = "coursework_management",
    security(
        ("bearer" = [])
    ),
    summary = "List assignments",
    description = "Returns a list of assignments visible to the caller.",
)]
pub(crate) async fn get_assignments(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Qs(query), _): WithRejection<Qs<GetAssignmentsQuery>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<GetAssignmentListResponseRestDTO> {
    let result = state
        .core
        .coursework_service
        .get_assignment_list(&principal, query.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "getting assignments")
}

#[utoipa::path(
    patch,
    path = "/api/assignment/v1/{id}",
    request_body = UpdateAssignmentRequestRestDTO,
    responses(EmptyOrErrorResponse),
    params(
        ("id" = AssignmentId, Path, description = "Assignment id")
    ),
    tag = "coursework_management",
    security(
        ("bearer" = [])
    ),
    summary = "Update assignment",
    description = "Updates assignment attributes; absent fields are left unchanged.",
)]
pub(crate) async fn patch_assignment(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<AssignmentId>,
    WithRejection(Json(request), _): WithRejection<
        Json<UpdateAssignmentRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .coursework_service
        .update_assignment(&principal, update_assignment_request(id, request))
        .await;
    EmptyOrErrorResponse::from_result(result, state, "updating assignment")
}
