use campus_core::model::exam::ExamResult;
use one_dto_mapper::Into;
use sea_orm::entity::prelude::*;
use shared_types::{ExamId, ExamResultId, StudentId};
use time::OffsetDateTime;

/// One row per (exam, student) pair, enforced by a unique index.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Into)]
#[into(ExamResult)]
#[sea_orm(table_name = "exam_result")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: ExamResultId,
    pub exam_id: ExamId,
    pub student_id: StudentId,
    pub score: u32,
    pub grade: String,
    pub answer_file_path: Option<String>,
    pub submitted_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::exam::Entity",
        from = "Column::ExamId",
        to = "super::exam::Column::Id"
    )]
    Exam,
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id"
    )]
    Student,
}

impl Related<super::exam::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exam.def()
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
