use campus_core::model::lesson::Lesson;
use one_dto_mapper::Into;
use sea_orm::entity::prelude::*;
use shared_types::{GroupId, LessonId, RoomId, TeacherId};
use time::{Date, OffsetDateTime, Time};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Into)]
#[into(Lesson)]
#[sea_orm(table_name = "lesson")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: LessonId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub group_id: GroupId,
    pub teacher_id: Option<TeacherId>,
    pub room_id: Option<RoomId>,
    pub date: Date,
    pub start_time: Time,
    pub end_time: Time,
    pub duration: u32,
    pub online_link: String,
    pub is_cancelled: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::group::Entity",
        from = "Column::GroupId",
        to = "super::group::Column::Id"
    )]
    Group,
    #[sea_orm(
        belongs_to = "super::teacher::Entity",
        from = "Column::TeacherId",
        to = "super::teacher::Column::Id"
    )]
    Teacher,
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendance,
}

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
