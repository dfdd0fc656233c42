use sea_orm::entity::prelude::*;
use shared_types::{BranchId, GroupId, StudentId, UserId};
use time::{Date, OffsetDateTime};

use super::teacher::PersonStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: StudentId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub user_id: Option<UserId>,
    pub branch_id: BranchId,
    pub group_id: Option<GroupId>,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub date_of_birth: Option<Date>,
    pub enrollment_date: Date,
    pub address: String,
    pub parent_name: String,
    pub parent_phone: String,
    pub parent_email: String,
    pub passport_number: Option<String>,
    pub status: PersonStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::branch::Entity",
        from = "Column::BranchId",
        to = "super::branch::Column::Id"
    )]
    Branch,
    #[sea_orm(
        belongs_to = "super::group::Entity",
        from = "Column::GroupId",
        to = "super::group::Column::Id"
    )]
    Group,
}

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl Related<super::branch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Branch.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
