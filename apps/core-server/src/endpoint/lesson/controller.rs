use axum::Extension;
use axum::Json;
use axum::extract::{Path, State};
use axum_extra::extract::WithRejection;
use campus_core::model::scope::Principal;
use shared_types::LessonId;

use super::dto::{
    CreateLessonRequestRestDTO, GetLessonListResponseRestDTO, GetLessonsQuery,
    LessonResponseRestDTO, OnlineLinkResponseRestDTO, UpdateLessonRequestRestDTO,
};
use super::mapper::update_lesson_request;
use crate::dto::common::EntityResponseRestDTO;
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{CreatedOrErrorResponse, EmptyOrErrorResponse, OkOrErrorResponse};
use crate::extractor::Qs;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/lesson/v1",
    request_body = CreateLessonRequestRestDTO,
    responses(CreatedOrErrorResponse<EntityResponseRestDTO>),
    tag = "schedule_management",
    security(
        ("bearer" = [])
    ),
    summary = "Create lesson",
    description = "Schedules a lesson for a group.",
)]
pub(crate) async fn post_lesson(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateLessonRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<EntityResponseRestDTO> {
    let result = state
        .core
        .schedule_service
        .create_lesson(&principal, request.into())
        .await;
    CreatedOrErrorResponse::from_result(result, state, "creating lesson")
}

#[utoipa::path(
    get,
    path = "/api/lesson/v1/{id}",
    responses(OkOrErrorResponse<LessonResponseRestDTO>),
    params(
        ("id" = LessonId, Path, description = "Lesson id")
    ),
    tag = "schedule_management",
    security(
        ("bearer" = [])
    ),
    summary = "Retrieve lesson",
    description = "Returns information on a single lesson.",
)]
pub(crate) async fn get_lesson(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<LessonId>,
) -> OkOrErrorResponse<LessonResponseRestDTO> {
    let result = state
        .core
        .schedule_service
        .get_lesson(&principal, &id)
        .await;
    OkOrErrorResponse::from_result(result, state, "getting lesson details")
}

#[utoipa::path(
    get,
    path = "/api/lesson/v1",
    responses(OkOrErrorResponse<GetLessonListResponseRestDTO>),
    params(GetLessonsQuery),
    tag = "schedule_management",
    security(
        ("bearer" = [])
    ),
    summary = "List lessons",
    description = "Returns a list of lessons visible to the caller.",
)]
pub(crate) async fn get_lessons(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Qs(query), _): WithRejection<Qs<GetLessonsQuery>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<GetLessonListResponseRestDTO> {
    let result = state
        .core
        .schedule_service
        .get_lesson_list(&principal, query.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "getting lessons")
}

#[utoipa::path(
    patch,
    path = "/api/lesson/v1/{id}",
    request_body = UpdateLessonRequestRestDTO,
    responses(EmptyOrErrorResponse),
    params(
        ("id" = LessonId, Path, description = "Lesson id")
    ),
    tag = "schedule_management",
    security(
        ("bearer" = [])
    ),
    summary = "Update lesson",
    description = "Updates lesson attributes; absent fields are left unchanged.",
)]
pub(crate) async fn patch_lesson(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<LessonId>,
    WithRejection(Json(request), _): WithRejection<
        Json<UpdateLessonRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .schedule_service
        .update_lesson(&principal, update_lesson_request(id, request))
        .await;
    EmptyOrErrorResponse::from_result(result, state, "updating lesson")
}

#[utoipa::path(
    post,
    path = "/api/lesson/v1/{id}/cancel",
    responses(EmptyOrErrorResponse),
    params(
        ("id" = LessonId, Path, description = "Lesson id")
    ),
    tag = "schedule_management",
    security(
        ("bearer" = [])
    ),
    summary = "Cancel lesson",
    description = "Cancels a scheduled lesson without deleting it.",
)]
pub(crate) async fn cancel_lesson(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<LessonId>,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .schedule_service
        .cancel_lesson(&principal, &id)
        .await;
    EmptyOrErrorResponse::from_result(result, state, "cancelling lesson")
}

#[utoipa::path(
    post,
    path = "/api/lesson/v1/{id}/online-link",
    responses(OkOrErrorResponse<OnlineLinkResponseRestDTO>),
    params(
        ("id" = LessonId, Path, description = "Lesson id")
    ),
    tag = "schedule_management",
    security(
        ("bearer" = [])
    ),
    summary = "Generate online link",
    description = "Generates and stores a meeting link for an online lesson.",
)]
pub(crate) async fn generate_online_link(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<LessonId>,
) -> OkOrErrorResponse<OnlineLinkResponseRestDTO> {
    let result = state
        .core
        .schedule_service
        .generate_online_link(&principal, &id)
        .await;
    OkOrErrorResponse::from_result(result, state, "generating online link")
}

#[utoipa::path(
    delete,
    path = "/api/lesson/v1/{id}",
    responses(EmptyOrErrorResponse),
    params(
        ("id" = LessonId, Path, description = "Lesson id")
    ),
    tag = "schedule_management",
    security(
        ("bearer" = [])
    ),
    summary = "Delete lesson",
    description = "Deletes a lesson and its attendance records.",
)]
pub(crate) async fn delete_lesson(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<LessonId>,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .schedule_service
        .delete_lesson(&principal, &id)
        .await;
    EmptyOrErrorResponse::from_result(result, state, "deleting lesson")
}
