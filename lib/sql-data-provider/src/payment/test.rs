use campus_core::model::payment::PaymentFilter;
use campus_core::model::scope::VisibilityScope;
use campus_core::repository::payment_repository::PaymentRepository;
use shared_types::GroupId;
use uuid::Uuid;

use super::PaymentProvider;
use crate::test_utilities::{
    insert_branch, insert_center, insert_group, insert_payment, insert_student, insert_subject,
    setup_test_data_layer_and_connection,
};

#[tokio::test]
async fn test_payment_totals_sum_amounts_in_group() {
    let data_layer = setup_test_data_layer_and_connection().await;
    let db = data_layer.db;

    let center_id = insert_center(&db, "alpha").await.unwrap();
    let branch_id = insert_branch(&db, center_id, "main").await.unwrap();
    let subject_id = insert_subject(&db, center_id, "maths").await.unwrap();
    let group_id = insert_group(&db, center_id, branch_id, subject_id, None, "g1")
        .await
        .unwrap();
    let student_id = insert_student(&db, branch_id, Some(group_id), "First")
        .await
        .unwrap();

    insert_payment(&db, student_id, group_id, 120_000).await.unwrap();
    insert_payment(&db, student_id, group_id, 80_000).await.unwrap();

    let provider = PaymentProvider { db: db.clone() };
    let totals = provider
        .get_payment_totals(
            PaymentFilter {
                group_id: Some(group_id),
                ..Default::default()
            },
            &VisibilityScope::Unrestricted,
        )
        .await
        .unwrap();
    assert_eq!(totals.amount, 200_000);
    assert_eq!(totals.count, 2);
}

#[tokio::test]
async fn test_payment_totals_over_empty_set_are_zero() {
    let data_layer = setup_test_data_layer_and_connection().await;
    let db = data_layer.db;

    let provider = PaymentProvider { db: db.clone() };
    let totals = provider
        .get_payment_totals(
            PaymentFilter {
                group_id: Some(GroupId::from(Uuid::new_v4())),
                ..Default::default()
            },
            &VisibilityScope::Unrestricted,
        )
        .await
        .unwrap();
    assert_eq!(totals.amount, 0);
    assert_eq!(totals.count, 0);
}
