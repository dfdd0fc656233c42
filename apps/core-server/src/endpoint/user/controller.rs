use axum::Extension;
use axum::Json;
use axum::extract::{Path, State};
use axum_extra::extract::WithRejection;
use campus_core::model::scope::Principal;
use shared_types::UserId;

use super::dto::{
    CreateUserRequestRestDTO, CreateUserResponseRestDTO, GetUserListResponseRestDTO,
    GetUsersQuery, UpdateUserRequestRestDTO, UserResponseRestDTO,
};
use super::mapper::update_user_request;
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{CreatedOrErrorResponse, EmptyOrErrorResponse, OkOrErrorResponse};
use crate::extractor::Qs;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/user/v1",
    request_body = CreateUserRequestRestDTO,
    responses(CreatedOrErrorResponse<CreateUserResponseRestDTO>),
    tag = "user_management",
    security(
        ("bearer" = [])
    ),
    summary = "Create user",
    description = "Provisions a user account with a role profile. \
        The response carries the account's API token; it is not retrievable later.",
)]
pub(crate) async fn post_user(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateUserRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<CreateUserResponseRestDTO> {
    let result = state
        .core
        .user_service
        .create_user(&principal, request.into())
        .await;
    CreatedOrErrorResponse::from_result(result, state, "creating user")
}

#[utoipa::path(
    get,
    path = "/api/user/v1/{id}",
    responses(OkOrErrorResponse<UserResponseRestDTO>),
    params(
        ("id" = UserId, Path, description = "User id")
    ),
    tag = "user_management",
    security(
        ("bearer" = [])
    ),
    summary = "Retrieve user",
    description = "Returns information on a single user account.",
)]
pub(crate) async fn get_user(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<UserId>,
) -> OkOrErrorResponse<UserResponseRestDTO> {
    let result = state.core.user_service.get_user(&principal, &id).await;
    OkOrErrorResponse::from_result(result, state, "getting user details")
}

#[utoipa::path(
    get,
    path = "/api/user/v1",
    responses(OkOrErrorResponse<GetUserListResponseRestDTO>),
    params(GetUsersQuery),
    tag = "user_management",
    security(
        ("bearer" = [])
    ),
    summary = "List users",
    description = "Returns a list of user accounts visible to the caller.",
)]
pub(crate) async fn get_users(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Qs(query), _): WithRejection<Qs<GetUsersQuery>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<GetUserListResponseRestDTO> {
    let result = state
        .core
        .user_service
        .get_user_list(&principal, query.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "getting users")
}

#[utoipa::path(
    patch,
    path = "/api/user/v1/{id}",
    request_body = UpdateUserRequestRestDTO,
    responses(EmptyOrErrorResponse),
    params(
        ("id" = UserId, Path, description = "User id")
    ),
    tag = "user_management",
    security(
        ("bearer" = [])
    ),
    summary = "Update user",
    description = "Updates user account attributes; absent fields are left unchanged.",
)]
pub(crate) async fn patch_user(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<UserId>,
    WithRejection(Json(request), _): WithRejection<
        Json<UpdateUserRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .user_service
        .update_user(&principal, update_user_request(id, request))
        .await;
    EmptyOrErrorResponse::from_result(result, state, "updating user")
}

#[utoipa::path(
    post,
    path = "/api/user/v1/{id}/block",
    responses(EmptyOrErrorResponse),
    params(
        ("id" = UserId, Path, description = "User id")
    ),
    tag = "user_management",
    security(
        ("bearer" = [])
    ),
    summary = "Block user",
    description = "Blocks all of the user's role profiles; their token stops resolving.",
)]
pub(crate) async fn block_user(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<UserId>,
) -> EmptyOrErrorResponse {
    let result = state.core.user_service.block_user(&principal, &id).await;
    EmptyOrErrorResponse::from_result(result, state, "blocking user")
}

#[utoipa::path(
    post,
    path = "/api/user/v1/{id}/unblock",
    responses(EmptyOrErrorResponse),
    params(
        ("id" = UserId, Path, description = "User id")
    ),
    tag = "user_management",
    security(
        ("bearer" = [])
    ),
    summary = "Unblock user",
    description = "Lifts a block previously placed on the user's profiles.",
)]
pub(crate) async fn unblock_user(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<UserId>,
) -> EmptyOrErrorResponse {
    let result = state.core.user_service.unblock_user(&principal, &id).await;
    EmptyOrErrorResponse::from_result(result, state, "unblocking user")
}
