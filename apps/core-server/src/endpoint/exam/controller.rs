use axum::Extension;
use axum::Json;
use axum::extract::{Path, State};
use axum_extra::extract::WithRejection;
use campus_core::model::scope::Principal;
use shared_types::ExamId;

use super::dto::{
    CreateExamRequestRestDTO, ExamResponseRestDTO, GetExamListResponseRestDTO, GetExamsQuery,
    UpdateExamRequestRestDTO,
};
use super::mapper::update_exam_request;
use crate::dto::common::EntityResponseRestDTO;
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{CreatedOrErrorResponse, EmptyOrErrorResponse, OkOrErrorResponse};
use crate::extractor::Qs;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/exam/v1",
    request_body = CreateExamRequestRestDTO,
    responses(CreatedOrErrorResponse<EntityResponseRestDTO>),
    tag = "coursework_management",
    security(
        ("bearer" = [])
    ),
    summary = "Create exam",
    description = "Schedules an exam for a group.",
)]
pub(crate) async fn post_exam(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateExamRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<EntityResponseRestDTO> {
    let result = state
        .core
        .coursework_service
        .create_exam(&principal, request.into())
        .await;
    CreatedOrErrorResponse::from_result(result, state, "creating exam")
}

#[utoipa::path(
    get,
    path = "/api/exam/v1/{id}",
    responses(OkOrErrorResponse<ExamResponseRestDTO>),
    params(
        ("id" = ExamId, Path, description = "Exam id")
    ),
    tag = "coursework_management",
    security(
        ("bearer" = [])
    ),
    summary = "Retrieve exam",
    description = "Returns information on a single exam.",
)]
pub(crate) async fn get_exam(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<ExamId>,
) -> OkOrErrorResponse<ExamResponseRestDTO> {
    let result = state.core.coursework_service.get_exam(&principal, &id).await;
    OkOrErrorResponse::from_result(result, state, "getting exam details")
}

#[utoipa::path(
    get,
    path = "/api/exam/v1",
    responses(OkOrErrorResponse<GetExamListResponseRestDTO>),
    params(GetExamsQuery),
    tag = "coursework_management",
    security(
        ("bearer" = [])
    ),
    summary = "List exams",
    description = "Returns a list of exams visible to the caller.",
)]
pub(crate) async fn get_exams(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Qs(query), _): WithRejection<Qs<GetExamsQuery>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<GetExamListResponseRestDTO> {
    let result = state
        .core
        .coursework_service
        .get_exam_list(&principal, query.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "getting exams")
}

#[utoipa::path(
    patch,
    path = "/api/exam/v1/{id}",
    request_body = UpdateExamRequestRestDTO,
    responses(EmptyOrErrorResponse),
    params(
        ("id" = ExamId, Path, description = "Exam id")
    ),
    tag = "coursework_management",
    security(
        ("bearer" = [])
    ),
    summary = "Update exam",
    description = "Updates exam attributes; absent fields are left unchanged.",
)]
pub(crate) async fn patch_exam(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<ExamId>,
    WithRejection(Json(request), _): WithRejection<
        Json<UpdateExamRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .coursework_service
        .update_exam(&principal, update_exam_request(id, request))
        .await;
    EmptyOrErrorResponse::from_result(result, state, "updating exam")
}

#[utoipa::path(
    post,
    path = "/api/exam/v1/{id}/publish-results",
    responses(EmptyOrErrorResponse),
    params(
        ("id" = ExamId, Path, description = "Exam id")
    ),
    tag = "coursework_management",
    security(
        ("bearer" = [])
    ),
    summary = "Publish exam results",
    description = "Makes the exam's results visible to students.",
)]
pub(crate) async fn publish_exam_results(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<ExamId>,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .coursework_service
        .publish_exam_results(&principal, &id)
        .await;
    EmptyOrErrorResponse::from_result(result, state, "publishing exam results")
}
