use campus_core::model::scope::VisibilityScope;
use campus_core::repository::lesson_repository::LessonRepository;
use time::macros::{date, time};

use super::LessonProvider;
use crate::test_utilities::{
    insert_branch, insert_center, insert_group, insert_lesson_at, insert_subject, insert_teacher,
    insert_user, setup_test_data_layer_and_connection,
};

#[tokio::test]
async fn test_teacher_schedule_orders_by_date_then_start_time() {
    let data_layer = setup_test_data_layer_and_connection().await;
    let db = data_layer.db;

    let center_id = insert_center(&db, "alpha").await.unwrap();
    let branch_id = insert_branch(&db, center_id, "main").await.unwrap();
    let subject_id = insert_subject(&db, center_id, "maths").await.unwrap();
    let user_id = insert_user(&db, "teacher").await.unwrap();
    let teacher_id = insert_teacher(&db, user_id, branch_id).await.unwrap();
    let group_id = insert_group(&db, center_id, branch_id, subject_id, Some(teacher_id), "g1")
        .await
        .unwrap();

    // inserted out of order on purpose
    let afternoon = insert_lesson_at(&db, group_id, Some(teacher_id), date!(2024 - 03 - 04), time!(14:00))
        .await
        .unwrap();
    let next_week = insert_lesson_at(&db, group_id, Some(teacher_id), date!(2024 - 03 - 11), time!(9:00))
        .await
        .unwrap();
    let morning = insert_lesson_at(&db, group_id, Some(teacher_id), date!(2024 - 03 - 04), time!(9:00))
        .await
        .unwrap();

    let provider = LessonProvider { db: db.clone() };
    let schedule = provider
        .get_teacher_schedule(&teacher_id, &VisibilityScope::Unrestricted)
        .await
        .unwrap();

    let ids: Vec<_> = schedule.iter().map(|lesson| lesson.id).collect();
    assert_eq!(ids, vec![morning, afternoon, next_week]);
}

#[tokio::test]
async fn test_teacher_schedule_covers_group_owned_lessons_only_for_owner() {
    let data_layer = setup_test_data_layer_and_connection().await;
    let db = data_layer.db;

    let center_id = insert_center(&db, "alpha").await.unwrap();
    let branch_id = insert_branch(&db, center_id, "main").await.unwrap();
    let subject_id = insert_subject(&db, center_id, "maths").await.unwrap();
    let user_id = insert_user(&db, "owner").await.unwrap();
    let owner_id = insert_teacher(&db, user_id, branch_id).await.unwrap();
    let other_user_id = insert_user(&db, "other").await.unwrap();
    let other_id = insert_teacher(&db, other_user_id, branch_id).await.unwrap();
    let group_id = insert_group(&db, center_id, branch_id, subject_id, Some(owner_id), "g1")
        .await
        .unwrap();

    // no direct teacher on the lesson; ownership flows through the group
    insert_lesson_at(&db, group_id, None, date!(2024 - 03 - 04), time!(9:00))
        .await
        .unwrap();

    let provider = LessonProvider { db: db.clone() };
    let owner_schedule = provider
        .get_teacher_schedule(&owner_id, &VisibilityScope::Unrestricted)
        .await
        .unwrap();
    assert_eq!(owner_schedule.len(), 1);

    let other_schedule = provider
        .get_teacher_schedule(&other_id, &VisibilityScope::Unrestricted)
        .await
        .unwrap();
    assert!(other_schedule.is_empty());
}
