use axum::Extension;
use axum::Json;
use axum::extract::{Path, State};
use axum_extra::extract::WithRejection;
use campus_core::model::scope::Principal;
use shared_types::PaymentId;

use super::dto::{
    CreatePaymentRequestRestDTO, GetPaymentListResponseRestDTO, GetPaymentsQuery,
    PaymentResponseRestDTO,
};
use crate::dto::common::EntityResponseRestDTO;
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{CreatedOrErrorResponse, EmptyOrErrorResponse, OkOrErrorResponse};
use crate::extractor::Qs;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/payment/v1",
    request_body = CreatePaymentRequestRestDTO,
    responses(CreatedOrErrorResponse<EntityResponseRestDTO>),
    tag = "payment_management",
    security(
        ("bearer" = [])
    ),
    summary = "Record payment",
    description = "Records a tuition payment for a student.",
)]
pub(crate) async fn post_payment(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreatePaymentRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<EntityResponseRestDTO> {
    let result = state
        .core
        .payment_service
        .create_payment(&principal, request.into())
        .await;
    CreatedOrErrorResponse::from_result(result, state, "recording payment")
}

#[utoipa::path(
    get,
    path = "/api/payment/v1/{id}",
    responses(OkOrErrorResponse<PaymentResponseRestDTO>),
    params(
        ("id" = PaymentId, Path, description = "Payment id")
    ),
    tag = "payment_management",
    security(
        ("bearer" = [])
    ),
    summary = "Retrieve payment",
    description = "Returns information on a single payment.",
)]
pub(crate) async fn get_payment(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<PaymentId>,
) -> OkOrErrorResponse<PaymentResponseRestDTO> {
    let result = state
        .core
        .payment_service
        .get_payment(&principal, &id)
        .await;
    OkOrErrorResponse::from_result(result, state, "getting payment details")
}

#[utoipa::path(
    get,
    path = "/api/payment/v1",
    responses(OkOrErrorResponse<GetPaymentListResponseRestDTO>),
    params(GetPaymentsQuery),
    tag = "payment_management",
    security(
        ("bearer" = [])
    ),
    summary = "List payments",
    description = "Returns a list of payments visible to the caller.",
)]
pub(crate) async fn get_payments(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Qs(query), _): WithRejection<Qs<GetPaymentsQuery>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<GetPaymentListResponseRestDTO> {
    let result = state
        .core
        .payment_service
        .get_payment_list(&principal, query.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "getting payments")
}

#[utoipa::path(
    delete,
    path = "/api/payment/v1/{id}",
    responses(EmptyOrErrorResponse),
    params(
        ("id" = PaymentId, Path, description = "Payment id")
    ),
    tag = "payment_management",
    security(
        ("bearer" = [])
    ),
    summary = "Delete payment",
    description = "Deletes a mistakenly recorded payment.",
)]
pub(crate) async fn delete_payment(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<PaymentId>,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .payment_service
        .delete_payment(&principal, &id)
        .await;
    EmptyOrErrorResponse::from_result(result, state, "deleting payment")
}
