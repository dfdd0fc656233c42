use axum::Extension;
use axum::Json;
use axum::extract::{Path, State};
use axum_extra::extract::WithRejection;
use campus_core::model::scope::Principal;
use shared_types::NotificationId;

use super::dto::{
    CreateNotificationRequestRestDTO, GetNotificationListResponseRestDTO, GetNotificationsQuery,
    NotificationResponseRestDTO,
};
use crate::dto::common::EntityResponseRestDTO;
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{CreatedOrErrorResponse, EmptyOrErrorResponse, OkOrErrorResponse};
use crate::extractor::Qs;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/notification/v1",
    request_body = CreateNotificationRequestRestDTO,
    responses(CreatedOrErrorResponse<EntityResponseRestDTO>),
    tag = "notification_management",
    security(
        ("bearer" = [])
    ),
    summary = "Create notification",
    description = "Sends a notification to a user.",
)]
pub(crate) async fn post_notification(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateNotificationRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<EntityResponseRestDTO> {
    let result = state
        .core
        .notification_service
        .create_notification(&principal, request.into())
        .await;
    CreatedOrErrorResponse::from_result(result, state, "creating notification")
}

#[utoipa::path(
    get,
    path = "/api/notification/v1/{id}",
    responses(OkOrErrorResponse<NotificationResponseRestDTO>),
    params(
        ("id" = NotificationId, Path, description = "Notification id")
    ),
    tag = "notification_management",
    security(
        ("bearer" = [])
    ),
    summary = "Retrieve notification",
    description = "Returns a single notification addressed to the caller.",
)]
pub(crate) async fn get_notification(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<NotificationId>,
) -> OkOrErrorResponse<NotificationResponseRestDTO> {
    let result = state
        .core
        .notification_service
        .get_notification(&principal, &id)
        .await;
    OkOrErrorResponse::from_result(result, state, "getting notification details")
}

#[utoipa::path(
    get,
    path = "/api/notification/v1",
    responses(OkOrErrorResponse<GetNotificationListResponseRestDTO>),
    params(GetNotificationsQuery),
    tag = "notification_management",
    security(
        ("bearer" = [])
    ),
    summary = "List notifications",
    description = "Returns the caller's notifications.",
)]
pub(crate) async fn get_notifications(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Qs(query), _): WithRejection<Qs<GetNotificationsQuery>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<GetNotificationListResponseRestDTO> {
    let result = state
        .core
        .notification_service
        .get_notification_list(&principal, query.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "getting notifications")
}

#[utoipa::path(
    post,
    path = "/api/notification/v1/{id}/mark-read",
    responses(EmptyOrErrorResponse),
    params(
        ("id" = NotificationId, Path, description = "Notification id")
    ),
    tag = "notification_management",
    security(
        ("bearer" = [])
    ),
    summary = "Mark notification read",
    description = "Marks a notification as read.",
)]
pub(crate) async fn read_notification(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<NotificationId>,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .notification_service
        .mark_read(&principal, &id)
        .await;
    EmptyOrErrorResponse::from_result(result, state, "marking notification read")
}

#[utoipa::path(
    delete,
    path = "/api/notification/v1/{id}",
    responses(EmptyOrErrorResponse),
    params(
        ("id" = NotificationId, Path, description = "Notification id")
    ),
    tag = "notification_management",
    security(
        ("bearer" = [])
    ),
    summary = "Delete notification",
    description = "Deletes a notification addressed to the caller.",
)]
pub(crate) async fn delete_notification(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<NotificationId>,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .notification_service
        .delete_notification(&principal, &id)
        .await;
    EmptyOrErrorResponse::from_result(result, state, "deleting notification")
}
