use one_dto_mapper::{From, Into};
use sea_orm::entity::prelude::*;
use shared_types::{AssignmentId, GroupId, TeacherId};
use time::{Date, OffsetDateTime};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "assignment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: AssignmentId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub group_id: GroupId,
    pub teacher_id: TeacherId,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub file_path: Option<String>,
    pub due_date: Date,
    pub status: AssignmentStatus,
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
    #[sea_orm(has_many = "super::assignment_submission::Entity")]
    Submission,
}

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl Related<super::assignment_submission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Copy, Clone, Debug, Eq, PartialEq, EnumIter, DeriveActiveEnum, From, Into)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[from(campus_core::model::assignment::AssignmentStatus)]
#[into(campus_core::model::assignment::AssignmentStatus)]
pub enum AssignmentStatus {
    #[sea_orm(string_value = "ASSIGNED")]
    Assigned,
    #[sea_orm(string_value = "SUBMITTED")]
    Submitted,
    #[sea_orm(string_value = "GRADED")]
    Graded,
}
