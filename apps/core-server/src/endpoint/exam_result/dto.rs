use campus_core::model::exam::ExamResult;
use campus_core::service::coursework::dto::CreateExamResultRequest;
use one_dto_mapper::{From, Into};
use serde::{Deserialize, Serialize};
use shared_types::{ExamId, ExamResultId, StudentId};
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};

use crate::dto::common::{GetListResponseRestDTO, ListQueryParamsRest};

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into(CreateExamResultRequest)]
pub(crate) struct CreateExamResultRequestRestDTO {
    pub exam_id: ExamId,
    pub student_id: StudentId,
    pub score: u32,
    pub grade: String,
    pub answer_file_path: Option<String>,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(ExamResult)]
pub(crate) struct ExamResultResponseRestDTO {
    pub id: ExamResultId,
    pub exam_id: ExamId,
    pub student_id: StudentId,
    pub score: u32,
    pub grade: String,
    pub answer_file_path: Option<String>,
    pub submitted_at: OffsetDateTime,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::exam::SortableExamResultColumn")]
pub(crate) enum SortableExamResultColumnRestDTO {
    Score,
    SubmittedAt,
}

#[derive(Clone, Debug, Deserialize, IntoParams, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::exam::ExamResultFilter")]
pub(crate) struct ExamResultFilterQueryParamsRest {
    #[param(nullable = false)]
    pub exam_id: Option<ExamId>,
    #[param(nullable = false)]
    pub student_id: Option<StudentId>,
}

pub(crate) type GetExamResultsQuery =
    ListQueryParamsRest<ExamResultFilterQueryParamsRest, SortableExamResultColumnRestDTO>;

pub(crate) type GetExamResultListResponseRestDTO =
    GetListResponseRestDTO<ExamResultResponseRestDTO>;
