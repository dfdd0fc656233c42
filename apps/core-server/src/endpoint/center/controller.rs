use axum::Extension;
use axum::extract::{Path, State};
use axum::Json;
use axum_extra::extract::WithRejection;
use campus_core::model::scope::Principal;
use shared_types::CenterId;

use super::dto::{
    CenterResponseRestDTO, CenterStatisticsResponseRestDTO, CreateCenterRequestRestDTO,
    GetCenterListResponseRestDTO, GetCentersQuery, UpdateCenterRequestRestDTO,
};
use super::mapper::update_center_request;
use crate::dto::common::EntityResponseRestDTO;
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{CreatedOrErrorResponse, EmptyOrErrorResponse, OkOrErrorResponse};
use crate::extractor::Qs;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/center/v1",
    request_body = CreateCenterRequestRestDTO,
    responses(CreatedOrErrorResponse<EntityResponseRestDTO>),
    tag = "center_management",
    security(
        ("bearer" = [])
    ),
    summary = "Create center",
    description = "Creates a learning center, the tenant root every other record belongs to.",
)]
pub(crate) async fn post_center(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateCenterRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<EntityResponseRestDTO> {
    let result = state
        .core
        .center_service
        .create_center(&principal, request.into())
        .await;
    CreatedOrErrorResponse::from_result(result, state, "creating center")
}

#[utoipa::path(
    get,
    path = "/api/center/v1/{id}",
    responses(OkOrErrorResponse<CenterResponseRestDTO>),
    params(
        ("id" = CenterId, Path, description = "Center id")
    ),
    tag = "center_management",
    security(
        ("bearer" = [])
    ),
    summary = "Retrieve center",
    description = "Returns information on a single center.",
)]
pub(crate) async fn get_center(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<CenterId>,
) -> OkOrErrorResponse<CenterResponseRestDTO> {
    let result = state.core.center_service.get_center(&principal, &id).await;
    OkOrErrorResponse::from_result(result, state, "getting center details")
}

#[utoipa::path(
    get,
    path = "/api/center/v1",
    responses(OkOrErrorResponse<GetCenterListResponseRestDTO>),
    params(GetCentersQuery),
    tag = "center_management",
    security(
        ("bearer" = [])
    ),
    summary = "List centers",
    description = "Returns a list of centers visible to the caller.",
)]
pub(crate) async fn get_centers(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Qs(query), _): WithRejection<Qs<GetCentersQuery>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<GetCenterListResponseRestDTO> {
    let result = state
        .core
        .center_service
        .get_center_list(&principal, query.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "getting centers")
}

#[utoipa::path(
    patch,
    path = "/api/center/v1/{id}",
    request_body = UpdateCenterRequestRestDTO,
    responses(EmptyOrErrorResponse),
    params(
        ("id" = CenterId, Path, description = "Center id")
    ),
    tag = "center_management",
    security(
        ("bearer" = [])
    ),
    summary = "Update center",
    description = "Updates center attributes; absent fields are left unchanged.",
)]
pub(crate) async fn patch_center(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<CenterId>,
    WithRejection(Json(request), _): WithRejection<
        Json<UpdateCenterRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .center_service
        .update_center(&principal, update_center_request(id, request))
        .await;
    EmptyOrErrorResponse::from_result(result, state, "updating center")
}

#[utoipa::path(
    post,
    path = "/api/center/v1/{id}/activate",
    responses(EmptyOrErrorResponse),
    params(
        ("id" = CenterId, Path, description = "Center id")
    ),
    tag = "center_management",
    security(
        ("bearer" = [])
    ),
    summary = "Activate center",
    description = "Marks a center as active.",
)]
pub(crate) async fn activate_center(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<CenterId>,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .center_service
        .activate_center(&principal, &id)
        .await;
    EmptyOrErrorResponse::from_result(result, state, "activating center")
}

#[utoipa::path(
    post,
    path = "/api/center/v1/{id}/deactivate",
    responses(EmptyOrErrorResponse),
    params(
        ("id" = CenterId, Path, description = "Center id")
    ),
    tag = "center_management",
    security(
        ("bearer" = [])
    ),
    summary = "Deactivate center",
    description = "Marks a center as inactive; its records stay readable.",
)]
pub(crate) async fn deactivate_center(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<CenterId>,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .center_service
        .deactivate_center(&principal, &id)
        .await;
    EmptyOrErrorResponse::from_result(result, state, "deactivating center")
}

#[utoipa::path(
    get,
    path = "/api/center/v1/{id}/statistics",
    responses(OkOrErrorResponse<CenterStatisticsResponseRestDTO>),
    params(
        ("id" = CenterId, Path, description = "Center id")
    ),
    tag = "center_management",
    security(
        ("bearer" = [])
    ),
    summary = "Center statistics",
    description = "Returns branch, group, teacher and student counts for a center.",
)]
pub(crate) async fn get_center_statistics(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<CenterId>,
) -> OkOrErrorResponse<CenterStatisticsResponseRestDTO> {
    let result = state
        .core
        .center_service
        .get_center_statistics(&principal, &id)
        .await;
    OkOrErrorResponse::from_result(result, state, "getting center statistics")
}
