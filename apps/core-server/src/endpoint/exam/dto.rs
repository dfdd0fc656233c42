use campus_core::model::exam::Exam;
use campus_core::service::coursework::dto::CreateExamRequest;
use one_dto_mapper::{From, Into};
use serde::{Deserialize, Serialize};
use shared_types::{ExamId, GroupId, TeacherId};
use time::{Date, OffsetDateTime, Time};
use utoipa::{IntoParams, ToSchema};

use crate::dto::common::{GetListResponseRestDTO, ListQueryParamsRest};

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into(CreateExamRequest)]
pub(crate) struct CreateExamRequestRestDTO {
    pub group_id: GroupId,
    /// Defaults to the acting teacher when omitted.
    pub teacher_id: Option<TeacherId>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub exam_date: Date,
    #[schema(value_type = String)]
    pub start_time: Time,
    #[schema(value_type = String)]
    pub end_time: Time,
    pub total_points: u32,
    pub passing_score: u32,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(Exam)]
pub(crate) struct ExamResponseRestDTO {
    pub id: ExamId,
    pub created_date: OffsetDateTime,
    pub group_id: GroupId,
    pub teacher_id: TeacherId,
    pub title: String,
    pub description: String,
    pub exam_date: Date,
    #[schema(value_type = String)]
    pub start_time: Time,
    #[schema(value_type = String)]
    pub end_time: Time,
    pub total_points: u32,
    pub passing_score: u32,
    pub results_published: bool,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct UpdateExamRequestRestDTO {
    pub title: Option<String>,
    pub description: Option<String>,
    pub exam_date: Option<Date>,
    #[schema(value_type = String)]
    pub start_time: Option<Time>,
    #[schema(value_type = String)]
    pub end_time: Option<Time>,
    pub total_points: Option<u32>,
    pub passing_score: Option<u32>,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::exam::SortableExamColumn")]
pub(crate) enum SortableExamColumnRestDTO {
    ExamDate,
    CreatedDate,
}

#[derive(Clone, Debug, Deserialize, IntoParams, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::exam::ExamFilter")]
pub(crate) struct ExamFilterQueryParamsRest {
    #[param(nullable = false)]
    pub group_id: Option<GroupId>,
    #[param(nullable = false)]
    pub teacher_id: Option<TeacherId>,
}

pub(crate) type GetExamsQuery =
    ListQueryParamsRest<ExamFilterQueryParamsRest, SortableExamColumnRestDTO>;

pub(crate) type GetExamListResponseRestDTO = GetListResponseRestDTO<ExamResponseRestDTO>;
