use campus_core::model::exam::Exam;
use one_dto_mapper::Into;
use sea_orm::entity::prelude::*;
use shared_types::{ExamId, GroupId, TeacherId};
use time::{Date, OffsetDateTime, Time};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Into)]
#[into(Exam)]
#[sea_orm(table_name = "exam")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: ExamId,
    pub created_date: OffsetDateTime,
    pub group_id: GroupId,
    pub teacher_id: TeacherId,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub exam_date: Date,
    pub start_time: Time,
    pub end_time: Time,
    pub total_points: u32,
    pub passing_score: u32,
    pub results_published: bool,
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
    #[sea_orm(has_many = "super::exam_result::Entity")]
    ExamResult,
}

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl Related<super::exam_result::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExamResult.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
