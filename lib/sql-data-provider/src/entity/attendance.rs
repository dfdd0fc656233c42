use one_dto_mapper::{From, Into};
use sea_orm::entity::prelude::*;
use shared_types::{AttendanceId, LessonId, StudentId, TeacherId};
use time::OffsetDateTime;

/// One row per (lesson, student) pair, enforced by a unique index.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "attendance")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: AttendanceId,
    pub lesson_id: LessonId,
    pub student_id: StudentId,
    pub status: AttendanceStatus,
    pub marked_by_id: Option<TeacherId>,
    #[sea_orm(column_type = "Text")]
    pub notes: String,
    pub marked_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lesson::Entity",
        from = "Column::LessonId",
        to = "super::lesson::Column::Id"
    )]
    Lesson,
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id"
    )]
    Student,
}

impl Related<super::lesson::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lesson.def()
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Copy, Clone, Debug, Eq, PartialEq, EnumIter, DeriveActiveEnum, From, Into)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[from(campus_core::model::attendance::AttendanceStatus)]
#[into(campus_core::model::attendance::AttendanceStatus)]
pub enum AttendanceStatus {
    #[sea_orm(string_value = "PRESENT")]
    Present,
    #[sea_orm(string_value = "ABSENT")]
    Absent,
    #[sea_orm(string_value = "LATE")]
    Late,
    #[sea_orm(string_value = "EXCUSED")]
    Excused,
}
