use campus_core::model::center::{Center, CenterListQuery, CenterStatus};
use campus_core::model::scope::VisibilityScope;
use campus_core::repository::center_repository::CenterRepository;
use campus_core::repository::error::DataLayerError;
use shared_types::CenterId;
use time::macros::date;
use uuid::Uuid;

use super::CenterProvider;
use crate::test_utilities::{get_dummy_date, insert_center, setup_test_data_layer_and_connection};

struct TestSetup {
    pub db: sea_orm::DatabaseConnection,
    pub center_id: CenterId,
}

async fn setup() -> TestSetup {
    let data_layer = setup_test_data_layer_and_connection().await;
    let db = data_layer.db;

    let center_id = insert_center(&db, "alpha").await.unwrap();

    TestSetup { db, center_id }
}

fn dummy_center(name: &str, license_number: &str) -> Center {
    Center {
        id: Uuid::new_v4().into(),
        created_date: get_dummy_date(),
        last_modified: get_dummy_date(),
        name: name.to_string(),
        address: "1 Main St".to_string(),
        phone: "+1000000".to_string(),
        email: format!("{name}@example.com"),
        description: String::new(),
        license_number: license_number.to_string(),
        opened_at: date!(2020 - 01 - 01),
        status: CenterStatus::Active,
        website: String::new(),
        logo_path: None,
        director_id: None,
    }
}

#[tokio::test]
async fn test_create_center_success() {
    let TestSetup { db, .. } = setup().await;
    let provider = CenterProvider { db };

    let center = dummy_center("beta", "LIC-0001");
    let id = provider.create_center(center.clone()).await.unwrap();
    assert_eq!(id, center.id);

    let stored = provider
        .get_center(&id, &VisibilityScope::Unrestricted)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.name, "beta");
}

#[tokio::test]
async fn test_create_center_duplicate_license_number() {
    let TestSetup { db, .. } = setup().await;
    let provider = CenterProvider { db };

    provider
        .create_center(dummy_center("beta", "LIC-0002"))
        .await
        .unwrap();
    let result = provider
        .create_center(dummy_center("gamma", "LIC-0002"))
        .await;
    assert!(matches!(result, Err(DataLayerError::AlreadyExists)));
}

#[tokio::test]
async fn test_get_center_respects_tenant_scope() {
    let TestSetup { db, center_id } = setup().await;
    let other_center_id = insert_center(&db, "other").await.unwrap();
    let provider = CenterProvider { db };

    let own = provider
        .get_center(&center_id, &VisibilityScope::Center(center_id))
        .await
        .unwrap();
    assert!(own.is_some());

    let foreign = provider
        .get_center(&other_center_id, &VisibilityScope::Center(center_id))
        .await
        .unwrap();
    assert!(foreign.is_none());
}

#[tokio::test]
async fn test_get_center_list_tenant_isolation() {
    let TestSetup { db, center_id } = setup().await;
    insert_center(&db, "other").await.unwrap();
    let provider = CenterProvider { db };

    let all = provider
        .get_center_list(CenterListQuery::default(), &VisibilityScope::Unrestricted)
        .await
        .unwrap();
    assert_eq!(all.total_items, 2);

    let scoped = provider
        .get_center_list(CenterListQuery::default(), &VisibilityScope::Center(center_id))
        .await
        .unwrap();
    assert_eq!(scoped.total_items, 1);
    assert_eq!(scoped.values[0].id, center_id);
}

#[tokio::test]
async fn test_denied_scope_sees_nothing() {
    let TestSetup { db, center_id } = setup().await;
    let provider = CenterProvider { db };

    let center = provider
        .get_center(&center_id, &VisibilityScope::Denied)
        .await
        .unwrap();
    assert!(center.is_none());

    let list = provider
        .get_center_list(CenterListQuery::default(), &VisibilityScope::Denied)
        .await
        .unwrap();
    assert_eq!(list.total_items, 0);
}

#[tokio::test]
async fn test_delete_center_missing_returns_not_found() {
    let TestSetup { db, .. } = setup().await;
    let provider = CenterProvider { db };

    let result = provider.delete_center(&Uuid::new_v4().into()).await;
    assert!(matches!(result, Err(DataLayerError::RecordNotFound)));
}
