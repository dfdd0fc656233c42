use axum::Extension;
use axum::Json;
use axum::extract::{Path, State};
use axum_extra::extract::WithRejection;
use campus_core::model::scope::Principal;
use shared_types::ContractId;

use super::dto::{
    ContractResponseRestDTO, CreateContractRequestRestDTO, GetContractListResponseRestDTO,
    GetContractsQuery,
};
use crate::dto::common::EntityResponseRestDTO;
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{CreatedOrErrorResponse, EmptyOrErrorResponse, OkOrErrorResponse};
use crate::extractor::Qs;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/contract/v1",
    request_body = CreateContractRequestRestDTO,
    responses(CreatedOrErrorResponse<EntityResponseRestDTO>),
    tag = "enrollment_management",
    security(
        ("bearer" = [])
    ),
    summary = "Create contract",
    description = "Registers a signed enrollment contract for a student and group.",
)]
pub(crate) async fn post_contract(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateContractRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<EntityResponseRestDTO> {
    let result = state
        .core
        .enrollment_service
        .create_contract(&principal, request.into())
        .await;
    CreatedOrErrorResponse::from_result(result, state, "creating contract")
}

#[utoipa::path(
    get,
    path = "/api/contract/v1/{id}",
    responses(OkOrErrorResponse<ContractResponseRestDTO>),
    params(
        ("id" = ContractId, Path, description = "Contract id")
    ),
    tag = "enrollment_management",
    security(
        ("bearer" = [])
    ),
    summary = "Retrieve contract",
    description = "Returns information on a single contract.",
)]
pub(crate) async fn get_contract(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<ContractId>,
) -> OkOrErrorResponse<ContractResponseRestDTO> {
    let result = state
        .core
        .enrollment_service
        .get_contract(&principal, &id)
        .await;
    OkOrErrorResponse::from_result(result, state, "getting contract details")
}

#[utoipa::path(
    get,
    path = "/api/contract/v1",
    responses(OkOrErrorResponse<GetContractListResponseRestDTO>),
    params(GetContractsQuery),
    tag = "enrollment_management",
    security(
        ("bearer" = [])
    ),
    summary = "List contracts",
    description = "Returns a list of contracts visible to the caller.",
)]
pub(crate) async fn get_contracts(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Qs(query), _): WithRejection<Qs<GetContractsQuery>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<GetContractListResponseRestDTO> {
    let result = state
        .core
        .enrollment_service
        .get_contract_list(&principal, query.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "getting contracts")
}

#[utoipa::path(
    post,
    path = "/api/contract/v1/{id}/verify",
    responses(EmptyOrErrorResponse),
    params(
        ("id" = ContractId, Path, description = "Contract id")
    ),
    tag = "enrollment_management",
    security(
        ("bearer" = [])
    ),
    summary = "Verify contract",
    description = "Marks a contract as verified by the calling staff member.",
)]
pub(crate) async fn verify_contract(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<ContractId>,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .enrollment_service
        .verify_contract(&principal, &id)
        .await;
    EmptyOrErrorResponse::from_result(result, state, "verifying contract")
}
