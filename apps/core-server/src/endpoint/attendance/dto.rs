use campus_core::model::attendance::Attendance;
use campus_core::service::attendance::dto::{BulkMarkEntry, BulkMarkRequest, BulkMarkResponse};
use one_dto_mapper::{From, Into, convert_inner};
use serde::{Deserialize, Serialize};
use shared_types::{AttendanceId, GroupId, LessonId, StudentId, TeacherId};
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};

use crate::dto::common::{GetListResponseRestDTO, ListQueryParamsRest};

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into(BulkMarkRequest)]
pub(crate) struct BulkMarkRequestRestDTO {
    pub lesson_id: LessonId,
    #[into(with_fn = convert_inner)]
    pub entries: Vec<BulkMarkEntryRestDTO>,
}

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into(BulkMarkEntry)]
pub(crate) struct BulkMarkEntryRestDTO {
    pub student_id: StudentId,
    pub status: AttendanceStatusRestEnum,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(BulkMarkResponse)]
pub(crate) struct BulkMarkResponseRestDTO {
    pub marked_count: u32,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(Attendance)]
pub(crate) struct AttendanceResponseRestDTO {
    pub id: AttendanceId,
    pub lesson_id: LessonId,
    pub student_id: StudentId,
    pub status: AttendanceStatusRestEnum,
    pub marked_by_id: Option<TeacherId>,
    pub notes: String,
    pub marked_at: OffsetDateTime,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, ToSchema, From, Into)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[from("campus_core::model::attendance::AttendanceStatus")]
#[into("campus_core::model::attendance::AttendanceStatus")]
pub(crate) enum AttendanceStatusRestEnum {
    Present,
    Absent,
    Late,
    Excused,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::attendance::SortableAttendanceColumn")]
pub(crate) enum SortableAttendanceColumnRestDTO {
    MarkedAt,
}

#[derive(Clone, Debug, Deserialize, IntoParams, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::attendance::AttendanceFilter")]
pub(crate) struct AttendanceFilterQueryParamsRest {
    #[param(nullable = false)]
    pub lesson_id: Option<LessonId>,
    #[param(nullable = false)]
    pub student_id: Option<StudentId>,
    #[param(nullable = false)]
    pub group_id: Option<GroupId>,
    #[param(nullable = false)]
    pub marked_by_id: Option<TeacherId>,
    #[param(inline, nullable = false)]
    #[into(with_fn = convert_inner)]
    pub status: Option<AttendanceStatusRestEnum>,
}

pub(crate) type GetAttendancesQuery =
    ListQueryParamsRest<AttendanceFilterQueryParamsRest, SortableAttendanceColumnRestDTO>;

pub(crate) type GetAttendanceListResponseRestDTO =
    GetListResponseRestDTO<AttendanceResponseRestDTO>;
