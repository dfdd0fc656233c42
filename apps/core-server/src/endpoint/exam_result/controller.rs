use axum::Extension;
use axum::Json;
use axum::extract::{Path, State};
use axum_extra::extract::WithRejection;
use campus_core::model::scope::Principal;
use shared_types::ExamResultId;

use super::dto::{
    CreateExamResultRequestRestDTO, ExamResultResponseRestDTO, GetExamResultListResponseRestDTO,
    GetExamResultsQuery,
};
use crate::dto::common::EntityResponseRestDTO;
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{CreatedOrErrorResponse, OkOrErrorResponse};
use crate::extractor::Qs;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/exam-result/v1",
    request_body = CreateExamResultRequestRestDTO,
    responses(CreatedOrErrorResponse<EntityResponseRestDTO>),
    tag = "coursework_management",
    security(
        ("bearer" = [])
    ),
    summary = "Record exam result",
    description = "Records a student's score for an exam.",
)]
pub(crate) async fn post_exam_result(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateExamResultRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<EntityResponseRestDTO> {
    let result = state
        .core
        .coursework_service
        .create_exam_result(&principal, request.into())
        .await;
    CreatedOrErrorResponse::from_result(result, state, "recording exam result")
}

#[utoipa::path(
    get,
    path = "/api/exam-result/v1/{id}",
    responses(OkOrErrorResponse<ExamResultResponseRestDTO>),
    params(
        ("id" = ExamResultId, Path, description = "Exam result id")
    ),
    tag = "coursework_management",
    security(
        ("bearer" = [])
    ),
    summary = "Retrieve exam result",
    description = "Returns a single exam result. Students see results only once published.",
)]
pub(crate) async fn get_exam_result(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<ExamResultId>,
) -> OkOrErrorResponse<ExamResultResponseRestDTO> {
    let result = state
        .core
        .coursework_service
        .get_exam_result(&principal, &id)
        .await;
    OkOrErrorResponse::from_result(result, state, "getting exam result details")
}

#[utoipa::path(
    get,
    path = "/api/exam-result/v1",
    responses(OkOrErrorResponse<GetExamResultListResponseRestDTO>),
    params(GetExamResultsQuery),
    tag = "coursework_management",
    security(
        ("bearer" = [])
    ),
    summary = "List exam results",
    description = "Returns a list of exam results visible to the caller.",
)]
pub(crate) async fn get_exam_results(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Qs(query), _): WithRejection<Qs<GetExamResultsQuery>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<GetExamResultListResponseRestDTO> {
    let result = state
        .core
        .coursework_service
        .get_exam_result_list(&principal, query.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "getting exam results")
}
