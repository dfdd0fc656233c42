use shared_types::{BranchId, LeadId, ProfileId, SubjectId};
use strum::{Display, EnumString};
use time::OffsetDateTime;

use super::common::ListQuery;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, EnumString)]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Converted,
    Rejected,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, EnumString)]
pub enum LeadSource {
    SocialMedia,
    Website,
    Referral,
    DirectCall,
    Advertisement,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Lead {
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
    pub notes: String,
}

#[derive(Clone, Debug, Default)]
pub struct UpdateLeadRequest {
    pub id: LeadId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub course_interested_id: Option<Option<SubjectId>>,
    pub status: Option<LeadStatus>,
    pub assigned_to_id: Option<Option<ProfileId>>,
    pub notes: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortableLeadColumn {
    Name,
    CreatedDate,
}

#[derive(Clone, Debug, Default)]
pub struct LeadFilter {
    pub branch_id: Option<BranchId>,
    pub status: Option<LeadStatus>,
    pub source: Option<LeadSource>,
}

pub type LeadListQuery = ListQuery<SortableLeadColumn, LeadFilter>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LeadSourceCount {
    pub source: LeadSource,
    pub count: u64,
}
