use one_dto_mapper::{From, Into};
use sea_orm::entity::prelude::*;
use shared_types::{BranchId, CenterId, ProfileId};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "branch")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: BranchId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub center_id: CenterId,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub manager_id: Option<ProfileId>,
    pub status: BranchStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::center::Entity",
        from = "Column::CenterId",
        to = "super::center::Column::Id"
    )]
    Center,
    #[sea_orm(has_many = "super::room::Entity")]
    Room,
    #[sea_orm(has_many = "super::teacher::Entity")]
    Teacher,
    #[sea_orm(has_many = "super::student::Entity")]
    Student,
}

impl Related<super::center::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Center.def()
    }
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Copy, Clone, Debug, Eq, PartialEq, EnumIter, DeriveActiveEnum, From, Into)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[from(campus_core::model::branch::BranchStatus)]
#[into(campus_core::model::branch::BranchStatus)]
pub enum BranchStatus {
    #[sea_orm(string_value = "OPEN")]
    Open,
    #[sea_orm(string_value = "CLOSED")]
    Closed,
}
