use axum::Extension;
use axum::Json;
use axum::extract::{Path, State};
use axum_extra::extract::WithRejection;
use campus_core::model::scope::Principal;
use campus_core::service::error::ValidationError;
use shared_types::TeacherId;
use validator::Validate;

use super::dto::{
    CreateTeacherRequestRestDTO, GetTeacherListResponseRestDTO, GetTeachersQuery,
    RateTeacherRequestRestDTO, TeacherPerformanceResponseRestDTO, TeacherResponseRestDTO,
    UpdateTeacherRequestRestDTO,
};
use super::mapper::update_teacher_request;
use crate::dto::common::EntityResponseRestDTO;
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{CreatedOrErrorResponse, EmptyOrErrorResponse, OkOrErrorResponse};
use crate::endpoint::lesson::dto::GetLessonListResponseRestDTO;
use crate::extractor::Qs;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/teacher/v1",
    request_body = CreateTeacherRequestRestDTO,
    responses(CreatedOrErrorResponse<EntityResponseRestDTO>),
    tag = "staff_management",
    security(
        ("bearer" = [])
    ),
    summary = "Create teacher",
    description = "Creates a teacher profile attached to an existing user.",
)]
pub(crate) async fn post_teacher(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateTeacherRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<EntityResponseRestDTO> {
    let result = state
        .core
        .staff_service
        .create_teacher(&principal, request.into())
        .await;
    CreatedOrErrorResponse::from_result(result, state, "creating teacher")
}

#[utoipa::path(
    get,
    path = "/api/teacher/v1/{id}",
    responses(OkOrErrorResponse<TeacherResponseRestDTO>),
    params(
        ("id" = TeacherId, Path, description = "Teacher id")
    ),
    tag = "staff_management",
    security(
        ("bearer" = [])
    ),
    summary = "Retrieve teacher",
    description = "Returns information on a single teacher.",
)]
pub(crate) async fn get_teacher(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<TeacherId>,
) -> OkOrErrorResponse<TeacherResponseRestDTO> {
    let result = state
        .core
        .staff_service
        .get_teacher(&principal, &id)
        .await;
    OkOrErrorResponse::from_result(result, state, "getting teacher details")
}

#[utoipa::path(
    get,
    path = "/api/teacher/v1",
    responses(OkOrErrorResponse<GetTeacherListResponseRestDTO>),
    params(GetTeachersQuery),
    tag = "staff_management",
    security(
        ("bearer" = [])
    ),
    summary = "List teachers",
    description = "Returns a list of teachers visible to the caller.",
)]
pub(crate) async fn get_teachers(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Qs(query), _): WithRejection<Qs<GetTeachersQuery>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<GetTeacherListResponseRestDTO> {
    let result = state
        .core
        .staff_service
        .get_teacher_list(&principal, query.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "getting teachers")
}

#[utoipa::path(
    patch,
    path = "/api/teacher/v1/{id}",
    request_body = UpdateTeacherRequestRestDTO,
    responses(EmptyOrErrorResponse),
    params(
        ("id" = TeacherId, Path, description = "Teacher id")
    ),
    tag = "staff_management",
    security(
        ("bearer" = [])
    ),
    summary = "Update teacher",
    description = "Updates teacher attributes; absent fields are left unchanged.",
)]
pub(crate) async fn patch_teacher(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<TeacherId>,
    WithRejection(Json(request), _): WithRejection<
        Json<UpdateTeacherRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .staff_service
        .update_teacher(&principal, update_teacher_request(id, request))
        .await;
    EmptyOrErrorResponse::from_result(result, state, "updating teacher")
}

#[utoipa::path(
    post,
    path = "/api/teacher/v1/{id}/block",
    responses(EmptyOrErrorResponse),
    params(
        ("id" = TeacherId, Path, description = "Teacher id")
    ),
    tag = "staff_management",
    security(
        ("bearer" = [])
    ),
    summary = "Block teacher",
    description = "Blocks a teacher and suspends the linked user account.",
)]
pub(crate) async fn block_teacher(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<TeacherId>,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .staff_service
        .block_teacher(&principal, &id)
        .await;
    EmptyOrErrorResponse::from_result(result, state, "blocking teacher")
}

#[utoipa::path(
    post,
    path = "/api/teacher/v1/{id}/rate",
    request_body = RateTeacherRequestRestDTO,
    responses(EmptyOrErrorResponse),
    params(
        ("id" = TeacherId, Path, description = "Teacher id")
    ),
    tag = "staff_management",
    security(
        ("bearer" = [])
    ),
    summary = "Rate teacher",
    description = "Sets the teacher's performance rating, from 0.0 to 5.0.",
)]
pub(crate) async fn rate_teacher(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<TeacherId>,
    WithRejection(Json(request), _): WithRejection<
        Json<RateTeacherRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> EmptyOrErrorResponse {
    if let Err(error) = request.validate() {
        tracing::error!("Request validation failure: {}", error.to_string());
        return EmptyOrErrorResponse::from_service_error(
            ValidationError::RatingOutOfRange(request.rating).into(),
            state.config.hide_error_response_cause,
        );
    }

    let result = state
        .core
        .staff_service
        .rate_teacher(&principal, &id, request.rating)
        .await;
    EmptyOrErrorResponse::from_result(result, state, "rating teacher")
}

#[utoipa::path(
    delete,
    path = "/api/teacher/v1/{id}",
    responses(EmptyOrErrorResponse),
    params(
        ("id" = TeacherId, Path, description = "Teacher id")
    ),
    tag = "staff_management",
    security(
        ("bearer" = [])
    ),
    summary = "Delete teacher",
    description = "Deletes a teacher profile with no assigned groups.",
)]
pub(crate) async fn delete_teacher(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<TeacherId>,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .staff_service
        .delete_teacher(&principal, &id)
        .await;
    EmptyOrErrorResponse::from_result(result, state, "deleting teacher")
}

#[utoipa::path(
    get,
    path = "/api/teacher/v1/{id}/schedule",
    responses(OkOrErrorResponse<GetLessonListResponseRestDTO>),
    params(
        ("id" = TeacherId, Path, description = "Teacher id")
    ),
    tag = "staff_management",
    security(
        ("bearer" = [])
    ),
    summary = "Teacher schedule",
    description = "Lists every lesson the teacher holds, ordered by date and start time.",
)]
pub(crate) async fn get_teacher_schedule(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<TeacherId>,
) -> OkOrErrorResponse<GetLessonListResponseRestDTO> {
    let result = state
        .core
        .staff_service
        .get_teacher_schedule(&principal, &id)
        .await;
    OkOrErrorResponse::from_result(result, state, "getting teacher schedule")
}

#[utoipa::path(
    get,
    path = "/api/teacher/v1/{id}/performance",
    responses(OkOrErrorResponse<TeacherPerformanceResponseRestDTO>),
    params(
        ("id" = TeacherId, Path, description = "Teacher id")
    ),
    tag = "staff_management",
    security(
        ("bearer" = [])
    ),
    summary = "Teacher performance",
    description = "Returns workload counters and the current performance rating.",
)]
pub(crate) async fn get_teacher_performance(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<TeacherId>,
) -> OkOrErrorResponse<TeacherPerformanceResponseRestDTO> {
    let result = state
        .core
        .staff_service
        .get_teacher_performance(&principal, &id)
        .await;
    OkOrErrorResponse::from_result(result, state, "getting teacher performance")
}
