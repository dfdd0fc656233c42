use campus_core::model::lesson::Lesson;
use campus_core::service::schedule::dto::{CreateLessonRequest, OnlineLinkResponse};
use one_dto_mapper::{From, Into};
use serde::{Deserialize, Serialize};
use shared_types::{GroupId, LessonId, RoomId, TeacherId};
use time::{Date, OffsetDateTime, Time};
use utoipa::{IntoParams, ToSchema};

use crate::dto::common::{GetListResponseRestDTO, ListQueryParamsRest};

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into(CreateLessonRequest)]
pub(crate) struct CreateLessonRequestRestDTO {
    pub group_id: GroupId,
    pub teacher_id: Option<TeacherId>,
    pub room_id: Option<RoomId>,
    pub date: Date,
    #[schema(value_type = String)]
    pub start_time: Time,
    #[schema(value_type = String)]
    pub end_time: Time,
    /// Minutes.
    pub duration: u32,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(Lesson)]
pub(crate) struct LessonResponseRestDTO {
    pub id: LessonId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub group_id: GroupId,
    pub teacher_id: Option<TeacherId>,
    pub room_id: Option<RoomId>,
    pub date: Date,
    #[schema(value_type = String)]
    pub start_time: Time,
    #[schema(value_type = String)]
    pub end_time: Time,
    pub duration: u32,
    pub online_link: String,
    pub is_cancelled: bool,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct UpdateLessonRequestRestDTO {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub teacher_id: Option<Option<TeacherId>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub room_id: Option<Option<RoomId>>,
    pub date: Option<Date>,
    #[schema(value_type = String)]
    pub start_time: Option<Time>,
    #[schema(value_type = String)]
    pub end_time: Option<Time>,
    pub duration: Option<u32>,
    pub online_link: Option<String>,
    pub is_cancelled: Option<bool>,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(OnlineLinkResponse)]
pub(crate) struct OnlineLinkResponseRestDTO {
    pub online_link: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::lesson::SortableLessonColumn")]
pub(crate) enum SortableLessonColumnRestDTO {
    Date,
    CreatedDate,
}

#[derive(Clone, Debug, Deserialize, IntoParams, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::lesson::LessonFilter")]
pub(crate) struct LessonFilterQueryParamsRest {
    #[param(nullable = false)]
    pub group_id: Option<GroupId>,
    #[param(nullable = false)]
    pub teacher_id: Option<TeacherId>,
    #[param(nullable = false)]
    pub date: Option<Date>,
    #[param(nullable = false)]
    pub is_cancelled: Option<bool>,
}

pub(crate) type GetLessonsQuery =
    ListQueryParamsRest<LessonFilterQueryParamsRest, SortableLessonColumnRestDTO>;

pub(crate) type GetLessonListResponseRestDTO = GetListResponseRestDTO<LessonResponseRestDTO>;
