use campus_core::model::center::{
    Center, CenterFilter, SortableCenterColumn, UpdateCenterRequest,
};
use sea_orm::ActiveValue::NotSet;
use sea_orm::IntoSimpleExpr;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{ColumnTrait, Condition, Set};
use time::OffsetDateTime;

use crate::entity::center;
use crate::list_query::{IntoFilterCondition, IntoSortingColumn};

impl From<Center> for center::ActiveModel {
    fn from(value: Center) -> Self {
        Self {
            id: Set(value.id),
            created_date: Set(value.created_date),
            last_modified: Set(value.last_modified),
            name: Set(value.name),
            address: Set(value.address),
            phone: Set(value.phone),
            email: Set(value.email),
            description: Set(value.description),
            license_number: Set(value.license_number),
            opened_at: Set(value.opened_at),
            status: Set(value.status.into()),
            website: Set(value.website),
            logo_path: Set(value.logo_path),
            director_id: Set(value.director_id),
        }
    }
}

impl From<center::Model> for Center {
    fn from(value: center::Model) -> Self {
        Self {
            id: value.id,
            created_date: value.created_date,
            last_modified: value.last_modified,
            name: value.name,
            address: value.address,
            phone: value.phone,
            email: value.email,
            description: value.description,
            license_number: value.license_number,
            opened_at: value.opened_at,
            status: value.status.into(),
            website: value.website,
            logo_path: value.logo_path,
            director_id: value.director_id,
        }
    }
}

impl From<UpdateCenterRequest> for center::ActiveModel {
    fn from(value: UpdateCenterRequest) -> Self {
        Self {
            id: Set(value.id),
            last_modified: Set(OffsetDateTime::now_utc()),
            name: value.name.map(Set).unwrap_or(NotSet),
            address: value.address.map(Set).unwrap_or(NotSet),
            phone: value.phone.map(Set).unwrap_or(NotSet),
            email: value.email.map(Set).unwrap_or(NotSet),
            description: value.description.map(Set).unwrap_or(NotSet),
            website: value.website.map(Set).unwrap_or(NotSet),
            status: value.status.map(|status| Set(status.into())).unwrap_or(NotSet),
            director_id: value.director_id.map(Set).unwrap_or(NotSet),
            ..Default::default()
        }
    }
}

impl IntoSortingColumn for SortableCenterColumn {
    fn get_column(&self) -> SimpleExpr {
        match self {
            Self::Name => center::Column::Name,
            Self::CreatedDate => center::Column::CreatedDate,
        }
        .into_simple_expr()
    }
}

impl IntoFilterCondition for CenterFilter {
    fn get_condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(name) = &self.name {
            condition = condition.add(center::Column::Name.starts_with(name));
        }
        if let Some(status) = self.status {
            condition = condition.add(center::Column::Status.eq(center::CenterStatus::from(status)));
        }
        condition
    }
}
