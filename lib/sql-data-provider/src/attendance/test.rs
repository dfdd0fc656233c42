use campus_core::model::attendance::{AttendanceFilter, AttendanceListQuery, AttendanceStatus};
use campus_core::model::scope::VisibilityScope;
use campus_core::repository::attendance_repository::AttendanceRepository;
use sea_orm::{EntityTrait, PaginatorTrait};
use shared_types::{GroupId, LessonId, StudentId, TeacherId};

use super::AttendanceProvider;
use crate::entity::attendance;
use crate::test_utilities::{
    insert_branch, insert_center, insert_group, insert_lesson, insert_student, insert_subject,
    insert_teacher, insert_user, setup_test_data_layer_and_connection,
};

struct TestSetup {
    pub db: sea_orm::DatabaseConnection,
    pub group_id: GroupId,
    pub lesson_id: LessonId,
    pub teacher_id: TeacherId,
    pub student_id: StudentId,
    pub other_student_id: StudentId,
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
    let other_student_id = insert_student(&db, branch_id, Some(group_id), "Second")
        .await
        .unwrap();
    let lesson_id = insert_lesson(&db, group_id, Some(teacher_id)).await.unwrap();

    TestSetup {
        db,
        group_id,
        lesson_id,
        teacher_id,
        student_id,
        other_student_id,
    }
}

#[tokio::test]
async fn test_mark_attendance_creates_row() {
    let setup = setup().await;
    let provider = AttendanceProvider {
        db: setup.db.clone(),
    };

    let id = provider
        .mark_attendance(
            setup.lesson_id,
            setup.student_id,
            AttendanceStatus::Present,
            Some(setup.teacher_id),
        )
        .await
        .unwrap();

    let stored = provider
        .get_attendance(&id, &VisibilityScope::Unrestricted)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.lesson_id, setup.lesson_id);
    assert_eq!(stored.student_id, setup.student_id);
    assert_eq!(stored.status, AttendanceStatus::Present);
}

#[tokio::test]
async fn test_mark_attendance_twice_converges_to_one_row() {
    let setup = setup().await;
    let provider = AttendanceProvider {
        db: setup.db.clone(),
    };

    let first = provider
        .mark_attendance(
            setup.lesson_id,
            setup.student_id,
            AttendanceStatus::Absent,
            Some(setup.teacher_id),
        )
        .await
        .unwrap();
    let second = provider
        .mark_attendance(
            setup.lesson_id,
            setup.student_id,
            AttendanceStatus::Late,
            Some(setup.teacher_id),
        )
        .await
        .unwrap();

    assert_eq!(first, second);

    let count = attendance::Entity::find().count(&setup.db).await.unwrap();
    assert_eq!(count, 1);

    let stored = provider
        .get_attendance(&first, &VisibilityScope::Unrestricted)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, AttendanceStatus::Late);
}

#[tokio::test]
async fn test_student_scope_sees_only_own_rows() {
    let setup = setup().await;
    let provider = AttendanceProvider {
        db: setup.db.clone(),
    };

    let own = provider
        .mark_attendance(
            setup.lesson_id,
            setup.student_id,
            AttendanceStatus::Present,
            Some(setup.teacher_id),
        )
        .await
        .unwrap();
    let foreign = provider
        .mark_attendance(
            setup.lesson_id,
            setup.other_student_id,
            AttendanceStatus::Excused,
            Some(setup.teacher_id),
        )
        .await
        .unwrap();

    let scope = VisibilityScope::StudentOwned(setup.student_id);
    let list = provider
        .get_attendance_list(AttendanceListQuery::default(), &scope)
        .await
        .unwrap();
    assert_eq!(list.total_items, 1);
    assert_eq!(list.values[0].id, own);

    let hidden = provider.get_attendance(&foreign, &scope).await.unwrap();
    assert!(hidden.is_none());
}

#[tokio::test]
async fn test_teacher_scope_covers_group_lessons() {
    let setup = setup().await;
    let provider = AttendanceProvider {
        db: setup.db.clone(),
    };

    let id = provider
        .mark_attendance(
            setup.lesson_id,
            setup.student_id,
            AttendanceStatus::Present,
            Some(setup.teacher_id),
        )
        .await
        .unwrap();

    let visible = provider
        .get_attendance(&id, &VisibilityScope::TeacherOwned(setup.teacher_id))
        .await
        .unwrap();
    assert!(visible.is_some());
}

#[tokio::test]
async fn test_remarking_overwrites_marker_and_keeps_row_id() {
    let setup = setup().await;
    let provider = AttendanceProvider {
        db: setup.db.clone(),
    };

    let first = provider
        .mark_attendance(
            setup.lesson_id,
            setup.student_id,
            AttendanceStatus::Present,
            None,
        )
        .await
        .unwrap();
    let second = provider
        .mark_attendance(
            setup.lesson_id,
            setup.student_id,
            AttendanceStatus::Excused,
            Some(setup.teacher_id),
        )
        .await
        .unwrap();

    assert_eq!(first, second);

    let stored = provider
        .get_attendance(&first, &VisibilityScope::Unrestricted)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, AttendanceStatus::Excused);
    assert_eq!(stored.marked_by_id, Some(setup.teacher_id));
}

#[tokio::test]
async fn test_attendance_counts_group_by_status_within_group() {
    let setup = setup().await;
    let provider = AttendanceProvider {
        db: setup.db.clone(),
    };

    provider
        .mark_attendance(
            setup.lesson_id,
            setup.student_id,
            AttendanceStatus::Present,
            Some(setup.teacher_id),
        )
        .await
        .unwrap();
    provider
        .mark_attendance(
            setup.lesson_id,
            setup.other_student_id,
            AttendanceStatus::Late,
            None,
        )
        .await
        .unwrap();

    let counts = provider
        .get_attendance_counts(
            AttendanceFilter {
                group_id: Some(setup.group_id),
                ..Default::default()
            },
            &VisibilityScope::Unrestricted,
        )
        .await
        .unwrap();
    assert_eq!(counts.total, 2);
    assert_eq!(counts.present, 1);
    assert_eq!(counts.late, 1);
    assert_eq!(counts.absent, 0);

    // narrowing to rows marked by the teacher drops the anonymous one
    let marked = provider
        .get_attendance_counts(
            AttendanceFilter {
                marked_by_id: Some(setup.teacher_id),
                ..Default::default()
            },
            &VisibilityScope::Unrestricted,
        )
        .await
        .unwrap();
    assert_eq!(marked.total, 1);

    let foreign_group = provider
        .get_attendance_counts(
            AttendanceFilter {
                group_id: Some(GroupId::from(uuid::Uuid::new_v4())),
                ..Default::default()
            },
            &VisibilityScope::Unrestricted,
        )
        .await
        .unwrap();
    assert_eq!(foreign_group.total, 0);
}
