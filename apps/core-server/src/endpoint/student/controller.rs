use axum::Extension;
use axum::Json;
use axum::extract::{Path, State};
use axum_extra::extract::WithRejection;
use campus_core::model::scope::Principal;
use shared_types::StudentId;

use super::dto::{
    AssignGroupRequestRestDTO, CreateStudentRequestRestDTO, GetStudentListResponseRestDTO,
    GetStudentsQuery, StudentAttendanceHistoryResponseRestDTO, StudentResponseRestDTO,
    UpdateStudentRequestRestDTO,
};
use super::mapper::update_student_request;
use crate::dto::common::EntityResponseRestDTO;
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{CreatedOrErrorResponse, EmptyOrErrorResponse, OkOrErrorResponse};
use crate::endpoint::payment::dto::GetPaymentListResponseRestDTO;
use crate::extractor::Qs;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/student/v1",
    request_body = CreateStudentRequestRestDTO,
    responses(CreatedOrErrorResponse<EntityResponseRestDTO>),
    tag = "enrollment_management",
    security(
        ("bearer" = [])
    ),
    summary = "Create student",
    description = "Enrolls a student into a branch, optionally assigning a group.",
)]
pub(crate) async fn post_student(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateStudentRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<EntityResponseRestDTO> {
    let result = state
        .core
        .enrollment_service
        .create_student(&principal, request.into())
        .await;
    CreatedOrErrorResponse::from_result(result, state, "creating student")
}

#[utoipa::path(
    get,
    path = "/api/student/v1/{id}",
    responses(OkOrErrorResponse<StudentResponseRestDTO>),
    params(
        ("id" = StudentId, Path, description = "Student id")
    ),
    tag = "enrollment_management",
    security(
        ("bearer" = [])
    ),
    summary = "Retrieve student",
    description = "Returns information on a single student.",
)]
pub(crate) async fn get_student(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<StudentId>,
) -> OkOrErrorResponse<StudentResponseRestDTO> {
    let result = state
        .core
        .enrollment_service
        .get_student(&principal, &id)
        .await;
    OkOrErrorResponse::from_result(result, state, "getting student details")
}

#[utoipa::path(
    get,
    path = "/api/student/v1",
    responses(OkOrErrorResponse<GetStudentListResponseRestDTO>),
    params(GetStudentsQuery),
    tag = "enrollment_management",
    security(
        ("bearer" = [])
    ),
    summary = "List students",
    description = "Returns a list of students visible to the caller.",
)]
pub(crate) async fn get_students(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Qs(query), _): WithRejection<Qs<GetStudentsQuery>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<GetStudentListResponseRestDTO> {
    let result = state
        .core
        .enrollment_service
        .get_student_list(&principal, query.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "getting students")
}

#[utoipa::path(
    patch,
    path = "/api/student/v1/{id}",
    request_body = UpdateStudentRequestRestDTO,
    responses(EmptyOrErrorResponse),
    params(
        ("id" = StudentId, Path, description = "Student id")
    ),
    tag = "enrollment_management",
    security(
        ("bearer" = [])
    ),
    summary = "Update student",
    description = "Updates student attributes; absent fields are left unchanged. \
        Send `groupId: null` to remove the student from their group.",
)]
pub(crate) async fn patch_student(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<StudentId>,
    WithRejection(Json(request), _): WithRejection<
        Json<UpdateStudentRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .enrollment_service
        .update_student(&principal, update_student_request(id, request))
        .await;
    EmptyOrErrorResponse::from_result(result, state, "updating student")
}

#[utoipa::path(
    post,
    path = "/api/student/v1/{id}/block",
    responses(EmptyOrErrorResponse),
    params(
        ("id" = StudentId, Path, description = "Student id")
    ),
    tag = "enrollment_management",
    security(
        ("bearer" = [])
    ),
    summary = "Block student",
    description = "Blocks a student and suspends the linked user account, if any.",
)]
pub(crate) async fn block_student(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<StudentId>,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .enrollment_service
        .block_student(&principal, &id)
        .await;
    EmptyOrErrorResponse::from_result(result, state, "blocking student")
}

#[utoipa::path(
    post,
    path = "/api/student/v1/{id}/assign-group",
    request_body = AssignGroupRequestRestDTO,
    responses(EmptyOrErrorResponse),
    params(
        ("id" = StudentId, Path, description = "Student id")
    ),
    tag = "enrollment_management",
    security(
        ("bearer" = [])
    ),
    summary = "Assign group",
    description = "Moves a student into a group with free capacity.",
)]
pub(crate) async fn assign_group(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<StudentId>,
    WithRejection(Json(request), _): WithRejection<
        Json<AssignGroupRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .enrollment_service
        .assign_group(&principal, &id, &request.group_id)
        .await;
    EmptyOrErrorResponse::from_result(result, state, "assigning group")
}

#[utoipa::path(
    get,
    path = "/api/student/v1/{id}/attendance-history",
    responses(OkOrErrorResponse<StudentAttendanceHistoryResponseRestDTO>),
    params(
        ("id" = StudentId, Path, description = "Student id")
    ),
    tag = "enrollment_management",
    security(
        ("bearer" = [])
    ),
    summary = "Student attendance history",
    description = "Counts the student's attendance rows by status.",
)]
pub(crate) async fn get_student_attendance_history(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<StudentId>,
) -> OkOrErrorResponse<StudentAttendanceHistoryResponseRestDTO> {
    let result = state
        .core
        .enrollment_service
        .get_student_attendance_history(&principal, &id)
        .await;
    OkOrErrorResponse::from_result(result, state, "getting student attendance history")
}

#[utoipa::path(
    get,
    path = "/api/student/v1/{id}/payment-history",
    responses(OkOrErrorResponse<GetPaymentListResponseRestDTO>),
    params(
        ("id" = StudentId, Path, description = "Student id")
    ),
    tag = "enrollment_management",
    security(
        ("bearer" = [])
    ),
    summary = "Student payment history",
    description = "Lists the student's payments, newest first.",
)]
pub(crate) async fn get_student_payment_history(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<StudentId>,
) -> OkOrErrorResponse<GetPaymentListResponseRestDTO> {
    let result = state
        .core
        .enrollment_service
        .get_student_payment_history(&principal, &id)
        .await;
    OkOrErrorResponse::from_result(result, state, "getting student payment history")
}
