use axum::Extension;
use axum::Json;
use axum::extract::{Path, State};
use axum_extra::extract::WithRejection;
use campus_core::model::scope::Principal;
use shared_types::LeadId;

use super::dto::{
    ConvertLeadResponseRestDTO, CreateLeadRequestRestDTO, GetLeadListResponseRestDTO,
    GetLeadsQuery, LeadResponseRestDTO, LeadStatisticsResponseRestDTO, UpdateLeadRequestRestDTO,
};
use super::mapper::update_lead_request;
use crate::dto::common::EntityResponseRestDTO;
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{CreatedOrErrorResponse, EmptyOrErrorResponse, OkOrErrorResponse};
use crate::extractor::Qs;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/lead/v1",
    request_body = CreateLeadRequestRestDTO,
    responses(CreatedOrErrorResponse<EntityResponseRestDTO>),
    tag = "enrollment_management",
    security(
        ("bearer" = [])
    ),
    summary = "Create lead",
    description = "Registers a prospective student inquiry.",
)]
pub(crate) async fn post_lead(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateLeadRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<EntityResponseRestDTO> {
    let result = state
        .core
        .enrollment_service
        .create_lead(&principal, request.into())
        .await;
    CreatedOrErrorResponse::from_result(result, state, "creating lead")
}

#[utoipa::path(
    get,
    path = "/api/lead/v1/{id}",
    responses(OkOrErrorResponse<LeadResponseRestDTO>),
    params(
        ("id" = LeadId, Path, description = "Lead id")
    ),
    tag = "enrollment_management",
    security(
        ("bearer" = [])
    ),
    summary = "Retrieve lead",
    description = "Returns information on a single lead.",
)]
pub(crate) async fn get_lead(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<LeadId>,
) -> OkOrErrorResponse<LeadResponseRestDTO> {
    let result = state.core.enrollment_service.get_lead(&principal, &id).await;
    OkOrErrorResponse::from_result(result, state, "getting lead details")
}

#[utoipa::path(
    get,
    path = "/api/lead/v1",
    responses(OkOrErrorResponse<GetLeadListResponseRestDTO>),
    params(GetLeadsQuery),
    tag = "enrollment_management",
    security(
        ("bearer" = [])
    ),
    summary = "List leads",
    description = "Returns a list of leads visible to the caller.",
)]
pub(crate) async fn get_leads(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Qs(query), _): WithRejection<Qs<GetLeadsQuery>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<GetLeadListResponseRestDTO> {
    let result = state
        .core
        .enrollment_service
        .get_lead_list(&principal, query.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "getting leads")
}

#[utoipa::path(
    patch,
    path = "/api/lead/v1/{id}",
    request_body = UpdateLeadRequestRestDTO,
    responses(EmptyOrErrorResponse),
    params(
        ("id" = LeadId, Path, description = "Lead id")
    ),
    tag = "enrollment_management",
    security(
        ("bearer" = [])
    ),
    summary = "Update lead",
    description = "Updates lead attributes; absent fields are left unchanged.",
)]
pub(crate) async fn patch_lead(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<LeadId>,
    WithRejection(Json(request), _): WithRejection<
        Json<UpdateLeadRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .enrollment_service
        .update_lead(&principal, update_lead_request(id, request))
        .await;
    EmptyOrErrorResponse::from_result(result, state, "updating lead")
}

#[utoipa::path(
    post,
    path = "/api/lead/v1/{id}/convert-to-student",
    responses(OkOrErrorResponse<ConvertLeadResponseRestDTO>),
    params(
        ("id" = LeadId, Path, description = "Lead id")
    ),
    tag = "enrollment_management",
    security(
        ("bearer" = [])
    ),
    summary = "Convert lead",
    description = "Converts a qualified lead into an enrolled student.",
)]
pub(crate) async fn convert_lead(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<LeadId>,
) -> OkOrErrorResponse<ConvertLeadResponseRestDTO> {
    let result = state
        .core
        .enrollment_service
        .convert_lead_to_student(&principal, &id)
        .await;
    OkOrErrorResponse::from_result(result, state, "converting lead")
}

#[utoipa::path(
    get,
    path = "/api/lead/v1/statistics",
    responses(OkOrErrorResponse<LeadStatisticsResponseRestDTO>),
    tag = "enrollment_management",
    security(
        ("bearer" = [])
    ),
    summary = "Lead statistics",
    description = "Counts visible leads grouped by acquisition source.",
)]
pub(crate) async fn get_lead_statistics(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
) -> OkOrErrorResponse<LeadStatisticsResponseRestDTO> {
    let result = state
        .core
        .enrollment_service
        .get_lead_statistics(&principal)
        .await;
    OkOrErrorResponse::from_result(result, state, "getting lead statistics")
}
