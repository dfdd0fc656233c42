use campus_core::model::lead::LeadSource;
use campus_core::model::scope::VisibilityScope;
use campus_core::repository::lead_repository::LeadRepository;

use super::LeadProvider;
use crate::entity::lead;
use crate::test_utilities::{
    insert_branch, insert_center, insert_lead, setup_test_data_layer_and_connection,
};

#[tokio::test]
async fn test_lead_source_counts_group_by_source_within_scope() {
    let data_layer = setup_test_data_layer_and_connection().await;
    let db = data_layer.db;

    let center_id = insert_center(&db, "alpha").await.unwrap();
    let branch_id = insert_branch(&db, center_id, "main").await.unwrap();
    let foreign_center_id = insert_center(&db, "beta").await.unwrap();
    let foreign_branch_id = insert_branch(&db, foreign_center_id, "other").await.unwrap();

    insert_lead(&db, branch_id, lead::LeadSource::Website).await.unwrap();
    insert_lead(&db, branch_id, lead::LeadSource::Website).await.unwrap();
    insert_lead(&db, branch_id, lead::LeadSource::Referral).await.unwrap();
    insert_lead(&db, foreign_branch_id, lead::LeadSource::Website)
        .await
        .unwrap();

    let provider = LeadProvider { db: db.clone() };
    let mut counts = provider
        .get_lead_source_counts(&VisibilityScope::Center(center_id))
        .await
        .unwrap();
    counts.sort_by_key(|entry| entry.count);

    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].source, LeadSource::Referral);
    assert_eq!(counts[0].count, 1);
    assert_eq!(counts[1].source, LeadSource::Website);
    assert_eq!(counts[1].count, 2);
}

#[tokio::test]
async fn test_lead_source_counts_denied_scope_is_empty() {
    let data_layer = setup_test_data_layer_and_connection().await;
    let db = data_layer.db;

    let center_id = insert_center(&db, "alpha").await.unwrap();
    let branch_id = insert_branch(&db, center_id, "main").await.unwrap();
    insert_lead(&db, branch_id, lead::LeadSource::Website).await.unwrap();

    let provider = LeadProvider { db: db.clone() };
    let counts = provider
        .get_lead_source_counts(&VisibilityScope::Denied)
        .await
        .unwrap();
    assert!(counts.is_empty());
}
