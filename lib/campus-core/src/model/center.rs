use shared_types::{CenterId, SubjectId, UserId};
use strum::{Display, EnumString};
use time::{Date, OffsetDateTime};

use super::common::ListQuery;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, EnumString)]
pub enum CenterStatus {
    Active,
    Inactive,
}

/// Tenant root. Every other record chains back to exactly one center.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Center {
    pub id: CenterId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub description: String,
    pub license_number: String,
    pub opened_at: Date,
    pub status: CenterStatus,
    pub website: String,
    pub logo_path: Option<String>,
    pub director_id: Option<UserId>,
}

#[derive(Clone, Debug, Default)]
pub struct UpdateCenterRequest {
    pub id: CenterId,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub status: Option<CenterStatus>,
    pub director_id: Option<Option<UserId>>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortableCenterColumn {
    Name,
    CreatedDate,
}

#[derive(Clone, Debug, Default)]
pub struct CenterFilter {
    pub name: Option<String>,
    pub status: Option<CenterStatus>,
}

pub type CenterListQuery = ListQuery<SortableCenterColumn, CenterFilter>;

/// Course offered by a center; names are unique within one tenant.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Subject {
    pub id: SubjectId,
    pub created_date: OffsetDateTime,
    pub center_id: CenterId,
    pub name: String,
    pub description: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortableSubjectColumn {
    Name,
    CreatedDate,
}

#[derive(Clone, Debug, Default)]
pub struct SubjectFilter {
    pub name: Option<String>,
}

pub type SubjectListQuery = ListQuery<SortableSubjectColumn, SubjectFilter>;
