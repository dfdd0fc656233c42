use axum::Extension;
use axum::Json;
use axum::extract::{Path, State};
use axum_extra::extract::WithRejection;
use campus_core::model::scope::Principal;
use shared_types::AttendanceId;

use super::dto::{
    AttendanceResponseRestDTO, BulkMarkRequestRestDTO, BulkMarkResponseRestDTO,
    GetAttendanceListResponseRestDTO, GetAttendancesQuery,
};
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::OkOrErrorResponse;
use crate::extractor::Qs;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/attendance/v1/bulk-mark",
    request_body = BulkMarkRequestRestDTO,
    responses(OkOrErrorResponse<BulkMarkResponseRestDTO>),
    tag = "attendance_management",
    security(
        ("bearer" = [])
    ),
    summary = "Bulk mark attendance",
    description = "Marks attendance for a whole lesson in one call. \
        Re-marking the same student overwrites the previous status.",
)]
pub(crate) async fn bulk_mark_attendance(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(request), _): WithRejection<
        Json<BulkMarkRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<BulkMarkResponseRestDTO> {
    let result = state
        .core
        .attendance_service
        .bulk_mark(&principal, request.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "marking attendance")
}

#[utoipa::path(
    get,
    path = "/api/attendance/v1/{id}",
    responses(OkOrErrorResponse<AttendanceResponseRestDTO>),
    params(
        ("id" = AttendanceId, Path, description = "Attendance record id")
    ),
    tag = "attendance_management",
    security(
        ("bearer" = [])
    ),
    summary = "Retrieve attendance record",
    description = "Returns a single attendance record.",
)]
pub(crate) async fn get_attendance(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<AttendanceId>,
) -> OkOrErrorResponse<AttendanceResponseRestDTO> {
    let result = state
        .core
        .attendance_service
        .get_attendance(&principal, &id)
        .await;
    OkOrErrorResponse::from_result(result, state, "getting attendance details")
}

#[utoipa::path(
    get,
    path = "/api/attendance/v1",
    responses(OkOrErrorResponse<GetAttendanceListResponseRestDTO>),
    params(GetAttendancesQuery),
    tag = "attendance_management",
    security(
        ("bearer" = [])
    ),
    summary = "List attendance records",
    description = "Returns a list of attendance records visible to the caller.",
)]
pub(crate) async fn get_attendances(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Qs(query), _): WithRejection<Qs<GetAttendancesQuery>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<GetAttendanceListResponseRestDTO> {
    let result = state
        .core
        .attendance_service
        .get_attendance_list(&principal, query.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "getting attendance records")
}
