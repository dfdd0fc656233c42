use one_dto_mapper::{From, Into};
use sea_orm::entity::prelude::*;
use shared_types::{BranchId, LeadId, ProfileId, SubjectId};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "lead")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: LeadId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub branch_id: BranchId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course_interested_id: Option<SubjectId>,
    pub status: LeadStatus,
    pub source: LeadSource,
    pub assigned_to_id: Option<ProfileId>,
    #[sea_orm(column_type = "Text")]
    pub notes: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::branch::Entity",
        from = "Column::BranchId",
        to = "super::branch::Column::Id"
    )]
    Branch,
    #[sea_orm(
        belongs_to = "super::subject::Entity",
        from = "Column::CourseInterestedId",
        to = "super::subject::Column::Id"
    )]
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
#[from(campus_core::model::lead::LeadStatus)]
#[into(campus_core::model::lead::LeadStatus)]
pub enum LeadStatus {
    #[sea_orm(string_value = "NEW")]
    New,
    #[sea_orm(string_value = "CONTACTED")]
    Contacted,
    #[sea_orm(string_value = "QUALIFIED")]
    Qualified,
    #[sea_orm(string_value = "CONVERTED")]
    Converted,
    #[sea_orm(string_value = "REJECTED")]
    Rejected,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, EnumIter, DeriveActiveEnum, From, Into)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[from(campus_core::model::lead::LeadSource)]
#[into(campus_core::model::lead::LeadSource)]
pub enum LeadSource {
    #[sea_orm(string_value = "SOCIAL_MEDIA")]
    SocialMedia,
    #[sea_orm(string_value = "WEBSITE")]
    Website,
    #[sea_orm(string_value = "REFERRAL")]
    Referral,
    #[sea_orm(string_value = "DIRECT_CALL")]
    DirectCall,
    #[sea_orm(string_value = "ADVERTISEMENT")]
    Advertisement,
}
