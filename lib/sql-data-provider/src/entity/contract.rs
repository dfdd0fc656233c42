use campus_core::model::contract::Contract;
use one_dto_mapper::Into;
use sea_orm::entity::prelude::*;
use shared_types::{ContractId, GroupId, ProfileId, StudentId};
use time::{Date, OffsetDateTime};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Into)]
#[into(Contract)]
#[sea_orm(table_name = "contract")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: ContractId,
    pub created_date: OffsetDateTime,
    pub student_id: StudentId,
    pub group_id: GroupId,
    pub contract_number: String,
    pub contract_file_path: String,
    pub signed_date: Date,
    pub is_verified: bool,
    pub verified_by_id: Option<ProfileId>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::group::Entity",
        from = "Column::GroupId",
        to = "super::group::Column::Id"
    )]
    Group,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
