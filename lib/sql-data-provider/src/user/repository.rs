use autometrics::autometrics;
use campus_core::model::common::GetListResponse;
use campus_core::model::scope::VisibilityScope;
use campus_core::model::user::{UpdateUserRequest, User, UserListQuery, UserProfile};
use campus_core::repository::error::DataLayerError;
use campus_core::repository::user_repository::UserRepository;
use one_dto_mapper::convert_inner;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use shared_types::UserId;
use time::OffsetDateTime;

use super::UserProvider;
use crate::entity::{user, user_profile};
use crate::list_query::{SelectWithListQuery, total_pages};
use crate::mapper::{to_data_layer_error, to_update_data_layer_error};
use crate::scope;

#[autometrics]
#[async_trait::async_trait]
impl UserRepository for UserProvider {
    async fn create_user(&self, request: User) -> Result<UserId, DataLayerError> {
        let user = user::Entity::insert(user::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(user.last_insert_id)
    }

    async fn get_user(
        &self,
        id: &UserId,
        scope: &VisibilityScope,
    ) -> Result<Option<User>, DataLayerError> {
        let user = user::Entity::find_by_id(id)
            .filter(scope::user_condition(scope))
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(user))
    }

    async fn get_user_by_token(&self, token: &str) -> Result<Option<User>, DataLayerError> {
        let user = user::Entity::find()
            .filter(user::Column::ApiToken.eq(token))
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(user))
    }

    async fn get_user_list(
        &self,
        query: UserListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<User>, DataLayerError> {
        let filtered = user::Entity::find()
            .filter(scope::user_condition(scope))
            .with_filtering(&query);

        let total_items = filtered
            .clone()
            .count(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        let users: Vec<user::Model> = filtered
            .with_sorting_and_pagination(&query)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(GetListResponse {
            total_pages: total_pages(total_items, query.pagination.as_ref()),
            total_items,
            values: convert_inner(users),
        })
    }

    async fn update_user(&self, request: UpdateUserRequest) -> Result<(), DataLayerError> {
        user::Entity::update(user::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_update_data_layer_error)?;
        Ok(())
    }

    async fn create_profile(&self, request: UserProfile) -> Result<(), DataLayerError> {
        user_profile::Entity::insert(user_profile::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;
        Ok(())
    }

    async fn get_profile_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<UserProfile>, DataLayerError> {
        let profile = user_profile::Entity::find()
            .filter(user_profile::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(profile))
    }

    async fn set_profile_blocked(
        &self,
        user_id: &UserId,
        blocked: bool,
    ) -> Result<(), DataLayerError> {
        let result = user_profile::Entity::update_many()
            .col_expr(user_profile::Column::IsBlocked, Expr::value(blocked))
            .col_expr(
                user_profile::Column::LastModified,
                Expr::value(OffsetDateTime::now_utc()),
            )
            .filter(user_profile::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotUpdated);
        }
        Ok(())
    }
}
