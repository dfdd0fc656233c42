use one_dto_mapper::{From, Into};
use sea_orm::entity::prelude::*;
use shared_types::{CenterId, UserId};
use time::{Date, OffsetDateTime};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "center")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: CenterId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub license_number: String,
    pub opened_at: Date,
    pub status: CenterStatus,
    pub website: String,
    pub logo_path: Option<String>,
    pub director_id: Option<UserId>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::DirectorId",
        to = "super::user::Column::Id"
    )]
    Director,
    #[sea_orm(has_many = "super::branch::Entity")]
    Branch,
    #[sea_orm(has_many = "super::subject::Entity")]
    Subject,
}

impl Related<super::branch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Branch.def()
    }
}

impl Related<super::subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Copy, Clone, Debug, Eq, PartialEq, EnumIter, DeriveActiveEnum, From, Into)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[from(campus_core::model::center::CenterStatus)]
#[into(campus_core::model::center::CenterStatus)]
pub enum CenterStatus {
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "INACTIVE")]
    Inactive,
}
