use shared_types::{GroupId, LessonId, RoomId, TeacherId};
use time::{Date, OffsetDateTime, Time};

use super::common::ListQuery;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Lesson {
    pub id: LessonId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub group_id: GroupId,
    pub teacher_id: Option<TeacherId>,
    pub room_id: Option<RoomId>,
    pub date: Date,
    pub start_time: Time,
    pub end_time: Time,
    /// Minutes.
    pub duration: u32,
    pub online_link: String,
    pub is_cancelled: bool,
}

#[derive(Clone, Debug, Default)]
pub struct UpdateLessonRequest {
    pub id: LessonId,
    pub teacher_id: Option<Option<TeacherId>>,
    pub room_id: Option<Option<RoomId>>,
    pub date: Option<Date>,
    pub start_time: Option<Time>,
    pub end_time: Option<Time>,
    pub duration: Option<u32>,
    pub online_link: Option<String>,
    pub is_cancelled: Option<bool>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortableLessonColumn {
    Date,
    CreatedDate,
}

#[derive(Clone, Debug, Default)]
pub struct LessonFilter {
    pub group_id: Option<GroupId>,
    pub teacher_id: Option<TeacherId>,
    pub date: Option<Date>,
    pub is_cancelled: Option<bool>,
}

pub type LessonListQuery = ListQuery<SortableLessonColumn, LessonFilter>;
