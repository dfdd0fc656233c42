use campus_core::model::exam::ExamResultListQuery;
use campus_core::model::scope::VisibilityScope;
use campus_core::repository::exam_result_repository::ExamResultRepository;
use shared_types::{CenterId, ExamResultId, GroupId, StudentId, TeacherId};

use super::ExamResultProvider;
use crate::test_utilities::{
    insert_branch, insert_center, insert_exam, insert_exam_result, insert_group, insert_student,
    insert_subject, insert_teacher, insert_user, setup_test_data_layer_and_connection,
};

struct TestSetup {
    pub db: sea_orm::DatabaseConnection,
    pub center_id: CenterId,
    pub group_id: GroupId,
    pub teacher_id: TeacherId,
    pub student_id: StudentId,
    pub published_result_id: ExamResultId,
    pub unpublished_result_id: ExamResultId,
}

async fn setup() -> TestSetup {
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
    let student_id = insert_student(&db, branch_id, Some(group_id), "First")
        .await
        .unwrap();

    let published_exam_id = insert_exam(&db, group_id, teacher_id, true).await.unwrap();
    let unpublished_exam_id = insert_exam(&db, group_id, teacher_id, false).await.unwrap();
    let published_result_id = insert_exam_result(&db, published_exam_id, student_id, 82)
        .await
        .unwrap();
    let unpublished_result_id = insert_exam_result(&db, unpublished_exam_id, student_id, 47)
        .await
        .unwrap();

    TestSetup {
        db,
        center_id,
        group_id,
        teacher_id,
        student_id,
        published_result_id,
        unpublished_result_id,
    }
}

#[tokio::test]
async fn test_student_sees_results_only_after_publication() {
    let setup = setup().await;
    let provider = ExamResultProvider {
        db: setup.db.clone(),
    };
    let scope = VisibilityScope::StudentOwned(setup.student_id);

    let published = provider
        .get_exam_result(&setup.published_result_id, &scope)
        .await
        .unwrap();
    assert!(published.is_some());

    let unpublished = provider
        .get_exam_result(&setup.unpublished_result_id, &scope)
        .await
        .unwrap();
    assert!(unpublished.is_none());

    let list = provider
        .get_exam_result_list(ExamResultListQuery::default(), &scope)
        .await
        .unwrap();
    assert_eq!(list.total_items, 1);
    assert_eq!(list.values[0].id, setup.published_result_id);
}

#[tokio::test]
async fn test_student_cannot_see_other_students_results() {
    let setup = setup().await;
    let other_student_id = {
        let branch_id = insert_branch(&setup.db, setup.center_id, "second")
            .await
            .unwrap();
        insert_student(&setup.db, branch_id, Some(setup.group_id), "Other")
            .await
            .unwrap()
    };
    let provider = ExamResultProvider {
        db: setup.db.clone(),
    };

    let foreign = provider
        .get_exam_result(
            &setup.published_result_id,
            &VisibilityScope::StudentOwned(other_student_id),
        )
        .await
        .unwrap();
    assert!(foreign.is_none());
}

#[tokio::test]
async fn test_teacher_sees_unpublished_results() {
    let setup = setup().await;
    let provider = ExamResultProvider {
        db: setup.db.clone(),
    };

    let list = provider
        .get_exam_result_list(
            ExamResultListQuery::default(),
            &VisibilityScope::TeacherOwned(setup.teacher_id),
        )
        .await
        .unwrap();
    assert_eq!(list.total_items, 2);
}

#[tokio::test]
async fn test_center_staff_sees_only_own_tenant() {
    let setup = setup().await;
    let other_center_id = insert_center(&setup.db, "other").await.unwrap();
    let provider = ExamResultProvider {
        db: setup.db.clone(),
    };

    let own = provider
        .get_exam_result_list(
            ExamResultListQuery::default(),
            &VisibilityScope::Center(setup.center_id),
        )
        .await
        .unwrap();
    assert_eq!(own.total_items, 2);

    let foreign = provider
        .get_exam_result_list(
            ExamResultListQuery::default(),
            &VisibilityScope::Center(other_center_id),
        )
        .await
        .unwrap();
    assert_eq!(foreign.total_items, 0);
}
