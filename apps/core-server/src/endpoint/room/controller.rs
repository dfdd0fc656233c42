use axum::Extension;
use axum::Json;
use axum::extract::{Path, State};
use axum_extra::extract::WithRejection;
use campus_core::model::scope::Principal;
use shared_types::RoomId;

use super::dto::{
    CreateRoomRequestRestDTO, GetRoomListResponseRestDTO, GetRoomsQuery, RoomResponseRestDTO,
    UpdateRoomRequestRestDTO,
};
use super::mapper::update_room_request;
use crate::dto::common::EntityResponseRestDTO;
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{CreatedOrErrorResponse, EmptyOrErrorResponse, OkOrErrorResponse};
use crate::extractor::Qs;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/room/v1",
    request_body = CreateRoomRequestRestDTO,
    responses(CreatedOrErrorResponse<EntityResponseRestDTO>),
    tag = "branch_management",
    security(
        ("bearer" = [])
    ),
    summary = "Create room",
    description = "Creates a classroom in a branch; names are unique within one branch.",
)]
pub(crate) async fn post_room(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateRoomRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<EntityResponseRestDTO> {
    let result = state
        .core
        .branch_service
        .create_room(&principal, request.into())
        .await;
    CreatedOrErrorResponse::from_result(result, state, "creating room")
}

#[utoipa::path(
    get,
    path = "/api/room/v1/{id}",
    responses(OkOrErrorResponse<RoomResponseRestDTO>),
    params(
        ("id" = RoomId, Path, description = "Room id")
    ),
    tag = "branch_management",
    security(
        ("bearer" = [])
    ),
    summary = "Retrieve room",
    description = "Returns information on a single room.",
)]
pub(crate) async fn get_room(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<RoomId>,
) -> OkOrErrorResponse<RoomResponseRestDTO> {
    let result = state.core.branch_service.get_room(&principal, &id).await;
    OkOrErrorResponse::from_result(result, state, "getting room details")
}

#[utoipa::path(
    get,
    path = "/api/room/v1",
    responses(OkOrErrorResponse<GetRoomListResponseRestDTO>),
    params(GetRoomsQuery),
    tag = "branch_management",
    security(
        ("bearer" = [])
    ),
    summary = "List rooms",
    description = "Returns a list of rooms visible to the caller.",
)]
pub(crate) async fn get_rooms(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Qs(query), _): WithRejection<Qs<GetRoomsQuery>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<GetRoomListResponseRestDTO> {
    let result = state
        .core
        .branch_service
        .get_room_list(&principal, query.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "getting rooms")
}

#[utoipa::path(
    patch,
    path = "/api/room/v1/{id}",
    request_body = UpdateRoomRequestRestDTO,
    responses(EmptyOrErrorResponse),
    params(
        ("id" = RoomId, Path, description = "Room id")
    ),
    tag = "branch_management",
    security(
        ("bearer" = [])
    ),
    summary = "Update room",
    description = "Updates room attributes; absent fields are left unchanged.",
)]
pub(crate) async fn patch_room(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<RoomId>,
    WithRejection(Json(request), _): WithRejection<
        Json<UpdateRoomRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .branch_service
        .update_room(&principal, update_room_request(id, request))
        .await;
    EmptyOrErrorResponse::from_result(result, state, "updating room")
}

#[utoipa::path(
    post,
    path = "/api/room/v1/{id}/occupy",
    responses(EmptyOrErrorResponse),
    params(
        ("id" = RoomId, Path, description = "Room id")
    ),
    tag = "branch_management",
    security(
        ("bearer" = [])
    ),
    summary = "Occupy room",
    description = "Marks a room as unavailable.",
)]
pub(crate) async fn occupy_room(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<RoomId>,
) -> EmptyOrErrorResponse {
    let result = state.core.branch_service.occupy_room(&principal, &id).await;
    EmptyOrErrorResponse::from_result(result, state, "occupying room")
}

#[utoipa::path(
    post,
    path = "/api/room/v1/{id}/free",
    responses(EmptyOrErrorResponse),
    params(
        ("id" = RoomId, Path, description = "Room id")
    ),
    tag = "branch_management",
    security(
        ("bearer" = [])
    ),
    summary = "Free room",
    description = "Marks a room as available again.",
)]
pub(crate) async fn free_room(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<RoomId>,
) -> EmptyOrErrorResponse {
    let result = state.core.branch_service.free_room(&principal, &id).await;
    EmptyOrErrorResponse::from_result(result, state, "freeing room")
}

#[utoipa::path(
    delete,
    path = "/api/room/v1/{id}",
    responses(EmptyOrErrorResponse),
    params(
        ("id" = RoomId, Path, description = "Room id")
    ),
    tag = "branch_management",
    security(
        ("bearer" = [])
    ),
    summary = "Delete room",
    description = "Deletes a room.",
)]
pub(crate) async fn delete_room(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<RoomId>,
) -> EmptyOrErrorResponse {
    let result = state.core.branch_service.delete_room(&principal, &id).await;
    EmptyOrErrorResponse::from_result(result, state, "deleting room")
}
