use axum::Extension;
use axum::Json;
use axum::extract::{Path, State};
use axum_extra::extract::WithRejection;
use campus_core::model::scope::Principal;
use shared_types::SubmissionId;

use super::dto::{
    CreateSubmissionRequestRestDTO, GetSubmissionListResponseRestDTO, GetSubmissionsQuery,
    GradeSubmissionRequestRestDTO, SubmissionResponseRestDTO,
};
use crate::dto::common::EntityResponseRestDTO;
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{CreatedOrErrorResponse, EmptyOrErrorResponse, OkOrErrorResponse};
use crate::extractor::Qs;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/submission/v1",
    request_body = CreateSubmissionRequestRestDTO,
    responses(CreatedOrErrorResponse<EntityResponseRestDTO>),
    tag = "coursework_management",
    security(
        ("bearer" = [])
    ),
    summary = "Submit assignment",
    description = "Records a student's submission for an assignment.",
)]
pub(crate) async fn post_submission(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateSubmissionRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<EntityResponseRestDTO> {
    let result = state
        .core
        .coursework_service
        .create_submission(&principal, request.into())
        .await;
    CreatedOrErrorResponse::from_result(result, state, "creating submission")
}

#[utoipa::path(
    get,
    path = "/api/submission/v1/{id}",
    responses(OkOrErrorResponse<SubmissionResponseRestDTO>),
    params(
        ("id" = SubmissionId, Path, description = "Submission id")
    ),
    tag = "coursework_management",
    security(
        ("bearer" = [])
    ),
    summary = "Retrieve submission",
    description = "Returns information on a single submission.",
)]
pub(crate) async fn get_submission(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<SubmissionId>,
) -> OkOrErrorResponse<SubmissionResponseRestDTO> {
    let result = state
        .core
        .coursework_service
        .get_submission(&principal, &id)
        .await;
    OkOrErrorResponse::from_result(result, state, "getting submission details")
}

#[utoipa::path(
    get,
    path = "/api/submission/v1",
    responses(OkOrErrorResponse<GetSubmissionListResponseRestDTO>),
    params(GetSubmissionsQuery),
    tag = "coursework_management",
    security(
        ("bearer" = [])
    ),
    summary = "List submissions",
    description = "Returns a list of submissions visible to the caller.",
)]
pub(crate) async fn get_submissions(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Qs(query), _): WithRejection<Qs<GetSubmissionsQuery>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<GetSubmissionListResponseRestDTO> {
    let result = state
        .core
        .coursework_service
        .get_submission_list(&principal, query.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "getting submissions")
}

#[utoipa::path(
    post,
    path = "/api/submission/v1/{id}/grade",
    request_body = GradeSubmissionRequestRestDTO,
    responses(EmptyOrErrorResponse),
    params(
        ("id" = SubmissionId, Path, description = "Submission id")
    ),
    tag = "coursework_management",
    security(
        ("bearer" = [])
    ),
    summary = "Grade submission",
    description = "Assigns a letter grade and feedback to a submission.",
)]
pub(crate) async fn grade_submission(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<SubmissionId>,
    WithRejection(Json(request), _): WithRejection<
        Json<GradeSubmissionRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .coursework_service
        .grade_submission(&principal, &id, request.into())
        .await;
    EmptyOrErrorResponse::from_result(result, state, "grading submission")
}
