use campus_core::model::assignment::AssignmentSubmission;
use campus_core::service::coursework::dto::{CreateSubmissionRequest, GradeSubmissionRequest};
use one_dto_mapper::{From, Into, convert_inner};
use serde::{Deserialize, Serialize};
use shared_types::{AssignmentId, StudentId, SubmissionId};
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};

use crate::dto::common::{GetListResponseRestDTO, ListQueryParamsRest};

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into(CreateSubmissionRequest)]
pub(crate) struct CreateSubmissionRequestRestDTO {
    pub assignment_id: AssignmentId,
    /// Defaults to the acting student when omitted.
    pub student_id: Option<StudentId>,
    pub submission_file_path: String,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(AssignmentSubmission)]
pub(crate) struct SubmissionResponseRestDTO {
    pub id: SubmissionId,
    pub assignment_id: AssignmentId,
    pub student_id: StudentId,
    pub submission_file_path: String,
    pub submitted_at: OffsetDateTime,
    #[from(with_fn = convert_inner)]
    pub grade: Option<SubmissionGradeRestEnum>,
    pub feedback: String,
    pub graded_at: Option<OffsetDateTime>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, ToSchema, From, Into)]
#[from("campus_core::model::assignment::SubmissionGrade")]
#[into("campus_core::model::assignment::SubmissionGrade")]
pub(crate) enum SubmissionGradeRestEnum {
    A,
    B,
    C,
    D,
    F,
}

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into(GradeSubmissionRequest)]
pub(crate) struct GradeSubmissionRequestRestDTO {
    pub grade: SubmissionGradeRestEnum,
    #[serde(default)]
    pub feedback: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::assignment::SortableSubmissionColumn")]
pub(crate) enum SortableSubmissionColumnRestDTO {
    SubmittedAt,
}

#[derive(Clone, Debug, Deserialize, IntoParams, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::assignment::SubmissionFilter")]
pub(crate) struct SubmissionFilterQueryParamsRest {
    #[param(nullable = false)]
    pub assignment_id: Option<AssignmentId>,
    #[param(nullable = false)]
    pub student_id: Option<StudentId>,
    #[param(nullable = false)]
    pub graded: Option<bool>,
}

pub(crate) type GetSubmissionsQuery =
    ListQueryParamsRest<SubmissionFilterQueryParamsRest, SortableSubmissionColumnRestDTO>;

pub(crate) type GetSubmissionListResponseRestDTO =
    GetListResponseRestDTO<SubmissionResponseRestDTO>;
