use axum::Extension;
use axum::Json;
use axum::extract::{Path, State};
use axum_extra::extract::WithRejection;
use campus_core::model::scope::Principal;
use shared_types::SubjectId;

use super::dto::{
    CreateSubjectRequestRestDTO, GetSubjectListResponseRestDTO, GetSubjectsQuery,
    SubjectResponseRestDTO,
};
use crate::dto::common::EntityResponseRestDTO;
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{CreatedOrErrorResponse, EmptyOrErrorResponse, OkOrErrorResponse};
use crate::extractor::Qs;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/subject/v1",
    request_body = CreateSubjectRequestRestDTO,
    responses(CreatedOrErrorResponse<EntityResponseRestDTO>),
    tag = "center_management",
    security(
        ("bearer" = [])
    ),
    summary = "Create subject",
    description = "Creates a subject offered by a center; names are unique within one tenant.",
)]
pub(crate) async fn post_subject(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateSubjectRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<EntityResponseRestDTO> {
    let result = state
        .core
        .center_service
        .create_subject(&principal, request.into())
        .await;
    CreatedOrErrorResponse::from_result(result, state, "creating subject")
}

#[utoipa::path(
    get,
    path = "/api/subject/v1/{id}",
    responses(OkOrErrorResponse<SubjectResponseRestDTO>),
    params(
        ("id" = SubjectId, Path, description = "Subject id")
    ),
    tag = "center_management",
    security(
        ("bearer" = [])
    ),
    summary = "Retrieve subject",
    description = "Returns information on a single subject.",
)]
pub(crate) async fn get_subject(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<SubjectId>,
) -> OkOrErrorResponse<SubjectResponseRestDTO> {
    let result = state.core.center_service.get_subject(&principal, &id).await;
    OkOrErrorResponse::from_result(result, state, "getting subject details")
}

#[utoipa::path(
    get,
    path = "/api/subject/v1",
    responses(OkOrErrorResponse<GetSubjectListResponseRestDTO>),
    params(GetSubjectsQuery),
    tag = "center_management",
    security(
        ("bearer" = [])
    ),
    summary = "List subjects",
    description = "Returns a list of subjects visible to the caller.",
)]
pub(crate) async fn get_subjects(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Qs(query), _): WithRejection<Qs<GetSubjectsQuery>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<GetSubjectListResponseRestDTO> {
    let result = state
        .core
        .center_service
        .get_subject_list(&principal, query.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "getting subjects")
}

#[utoipa::path(
    delete,
    path = "/api/subject/v1/{id}",
    responses(EmptyOrErrorResponse),
    params(
        ("id" = SubjectId, Path, description = "Subject id")
    ),
    tag = "center_management",
    security(
        ("bearer" = [])
    ),
    summary = "Delete subject",
    description = "Deletes a subject that is no longer offered.",
)]
pub(crate) async fn delete_subject(
    state: State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<SubjectId>,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .center_service
        .delete_subject(&principal, &id)
        .await;
    EmptyOrErrorResponse::from_result(result, state, "deleting subject")
}
