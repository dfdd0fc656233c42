use axum::Extension;
use axum::Json;
use axum::extract::{Path, State};
use axum_extra::extract::WithRejection;
use campus_core::model::scope::Principal;
use shared_types::BranchId;

use super::dto::{
    BranchResponseRestDTO, CreateBranchRequestRestDTO, GetBranchListResponseRestDTO,
    GetBranchesQuery, UpdateBranchRequestRestDTO,
};
use super::mapper::update_branch_request;
use crate::dto::common::EntityResponseRestDTO;
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{CreatedOrErrorResponse, EmptyOrErrorResponse, OkOrErrorResponse};
use crate::extractor::Qs;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/branch/v1",
    request_body = CreateBranchRequestRestDTO,
    responses(CreatedOrErrorResponse<EntityResponseRestDTO>),
    tag = "branch_management",
    security(
        ("bearer" = [])
    ),
    summary = "Create branch",
    description = "Creates a branch of a center.",
)]
pub(crate) async fn post_branch(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateBranchRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<EntityResponseRestDTO> {
    let result = state
        .core
        .branch_service
        .create_branch(&principal, request.into())
        .await;
    CreatedOrErrorResponse::from_result(result, state, "creating branch")
}

#[utoipa::path(
    get,
    path = "/api/branch/v1/{id}",
    responses(OkOrErrorResponse<BranchResponseRestDTO>),
    params(
        ("id" = BranchId, Path, description = "Branch id")
    ),
    tag = "branch_management",
    security(
        ("bearer" = [])
    ),
    summary = "Retrieve branch",
    description = "Returns information on a single branch.",
)]
pub(crate) async fn get_branch(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<BranchId>,
) -> OkOrErrorResponse<BranchResponseRestDTO> {
    let result = state.core.branch_service.get_branch(&principal, &id).await;
    OkOrErrorResponse::from_result(result, state, "getting branch details")
}

#[utoipa::path(
    get,
    path = "/api/branch/v1",
    responses(OkOrErrorResponse<GetBranchListResponseRestDTO>),
    params(GetBranchesQuery),
    tag = "branch_management",
    security(
        ("bearer" = [])
    ),
    summary = "List branches",
    description = "Returns a list of branches visible to the caller.",
)]
pub(crate) async fn get_branches(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Qs(query), _): WithRejection<Qs<GetBranchesQuery>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<GetBranchListResponseRestDTO> {
    let result = state
        .core
        .branch_service
        .get_branch_list(&principal, query.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "getting branches")
}

#[utoipa::path(
    patch,
    path = "/api/branch/v1/{id}",
    request_body = UpdateBranchRequestRestDTO,
    responses(EmptyOrErrorResponse),
    params(
        ("id" = BranchId, Path, description = "Branch id")
    ),
    tag = "branch_management",
    security(
        ("bearer" = [])
    ),
    summary = "Update branch",
    description = "Updates branch attributes; absent fields are left unchanged.",
)]
pub(crate) async fn patch_branch(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<BranchId>,
    WithRejection(Json(request), _): WithRejection<
        Json<UpdateBranchRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .branch_service
        .update_branch(&principal, update_branch_request(id, request))
        .await;
    EmptyOrErrorResponse::from_result(result, state, "updating branch")
}

#[utoipa::path(
    post,
    path = "/api/branch/v1/{id}/open",
    responses(EmptyOrErrorResponse),
    params(
        ("id" = BranchId, Path, description = "Branch id")
    ),
    tag = "branch_management",
    security(
        ("bearer" = [])
    ),
    summary = "Open branch",
    description = "Marks a branch as open.",
)]
pub(crate) async fn open_branch(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<BranchId>,
) -> EmptyOrErrorResponse {
    let result = state.core.branch_service.open_branch(&principal, &id).await;
    EmptyOrErrorResponse::from_result(result, state, "opening branch")
}

#[utoipa::path(
    post,
    path = "/api/branch/v1/{id}/close",
    responses(EmptyOrErrorResponse),
    params(
        ("id" = BranchId, Path, description = "Branch id")
    ),
    tag = "branch_management",
    security(
        ("bearer" = [])
    ),
    summary = "Close branch",
    description = "Marks a branch as closed; its records stay readable.",
)]
pub(crate) async fn close_branch(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<BranchId>,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .branch_service
        .close_branch(&principal, &id)
        .await;
    EmptyOrErrorResponse::from_result(result, state, "closing branch")
}
