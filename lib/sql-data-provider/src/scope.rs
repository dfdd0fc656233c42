//! Translation of a [`VisibilityScope`] into per-table SQL conditions.
//!
//! Every repository query is filtered through one of these conditions, so a
//! record outside the caller's scope behaves exactly like a record that does
//! not exist. Unknown scope kinds for a table fall through to the empty set.

use campus_core::model::scope::VisibilityScope;
use sea_orm::sea_query::{Expr, Query, SelectStatement};
use sea_orm::{ColumnTrait, Condition};
use shared_types::{CenterId, StudentId, TeacherId};

use crate::entity::{
    assignment, assignment_submission, attendance, branch, center, contract, exam, exam_result,
    group, lead, lesson, notification, payment, room, student, subject, teacher, user,
    user_profile,
};

fn nothing() -> Condition {
    Condition::all().add(Expr::value(false))
}

fn branch_ids_of_center(center_id: &CenterId) -> SelectStatement {
    Query::select()
        .column(branch::Column::Id)
        .from(branch::Entity)
        .and_where(branch::Column::CenterId.eq(center_id))
        .to_owned()
}

fn group_ids_of_center(center_id: &CenterId) -> SelectStatement {
    Query::select()
        .column(group::Column::Id)
        .from(group::Entity)
        .and_where(group::Column::CenterId.eq(center_id))
        .to_owned()
}

fn group_ids_of_teacher(teacher_id: &TeacherId) -> SelectStatement {
    Query::select()
        .column(group::Column::Id)
        .from(group::Entity)
        .and_where(group::Column::TeacherId.eq(teacher_id))
        .to_owned()
}

fn group_ids_of_student(student_id: &StudentId) -> SelectStatement {
    Query::select()
        .column(student::Column::GroupId)
        .from(student::Entity)
        .and_where(student::Column::Id.eq(student_id))
        .and_where(student::Column::GroupId.is_not_null())
        .to_owned()
}

fn lesson_ids_in_groups(groups: SelectStatement) -> SelectStatement {
    Query::select()
        .column(lesson::Column::Id)
        .from(lesson::Entity)
        .and_where(lesson::Column::GroupId.in_subquery(groups))
        .to_owned()
}

/// Lessons a teacher holds, either directly or through group ownership.
fn lesson_ids_of_teacher(teacher_id: &TeacherId) -> SelectStatement {
    Query::select()
        .column(lesson::Column::Id)
        .from(lesson::Entity)
        .cond_where(
            Condition::any()
                .add(lesson::Column::TeacherId.eq(teacher_id))
                .add(lesson::Column::GroupId.in_subquery(group_ids_of_teacher(teacher_id))),
        )
        .to_owned()
}

fn assignment_ids_of_teacher(teacher_id: &TeacherId) -> SelectStatement {
    Query::select()
        .column(assignment::Column::Id)
        .from(assignment::Entity)
        .and_where(assignment::Column::TeacherId.eq(teacher_id))
        .to_owned()
}

fn exam_ids_of_teacher(teacher_id: &TeacherId) -> SelectStatement {
    Query::select()
        .column(exam::Column::Id)
        .from(exam::Entity)
        .and_where(exam::Column::TeacherId.eq(teacher_id))
        .to_owned()
}

fn published_exam_ids() -> SelectStatement {
    Query::select()
        .column(exam::Column::Id)
        .from(exam::Entity)
        .and_where(exam::Column::ResultsPublished.eq(true))
        .to_owned()
}

pub(crate) fn user_condition(scope: &VisibilityScope) -> Condition {
    match scope {
        VisibilityScope::Unrestricted => Condition::all(),
        VisibilityScope::Center(center_id) => Condition::all().add(
            user::Column::Id.in_subquery(
                Query::select()
                    .column(user_profile::Column::UserId)
                    .from(user_profile::Entity)
                    .and_where(user_profile::Column::CenterId.eq(center_id))
                    .to_owned(),
            ),
        ),
        VisibilityScope::UserOwned(user_id) => {
            Condition::all().add(user::Column::Id.eq(user_id))
        }
        _ => nothing(),
    }
}

pub(crate) fn center_condition(scope: &VisibilityScope) -> Condition {
    match scope {
        VisibilityScope::Unrestricted => Condition::all(),
        VisibilityScope::Center(center_id) => {
            Condition::all().add(center::Column::Id.eq(center_id))
        }
        _ => nothing(),
    }
}

pub(crate) fn branch_condition(scope: &VisibilityScope) -> Condition {
    match scope {
        VisibilityScope::Unrestricted => Condition::all(),
        VisibilityScope::Center(center_id) => {
            Condition::all().add(branch::Column::CenterId.eq(center_id))
        }
        _ => nothing(),
    }
}

pub(crate) fn subject_condition(scope: &VisibilityScope) -> Condition {
    match scope {
        VisibilityScope::Unrestricted => Condition::all(),
        VisibilityScope::Center(center_id) => {
            Condition::all().add(subject::Column::CenterId.eq(center_id))
        }
        _ => nothing(),
    }
}

pub(crate) fn room_condition(scope: &VisibilityScope) -> Condition {
    match scope {
        VisibilityScope::Unrestricted => Condition::all(),
        VisibilityScope::Center(center_id) => Condition::all()
            .add(room::Column::BranchId.in_subquery(branch_ids_of_center(center_id))),
        _ => nothing(),
    }
}

pub(crate) fn group_condition(scope: &VisibilityScope) -> Condition {
    match scope {
        VisibilityScope::Unrestricted => Condition::all(),
        VisibilityScope::Center(center_id) => {
            Condition::all().add(group::Column::CenterId.eq(center_id))
        }
        VisibilityScope::TeacherOwned(teacher_id) => {
            Condition::all().add(group::Column::TeacherId.eq(teacher_id))
        }
        VisibilityScope::StudentOwned(student_id) => {
            Condition::all().add(group::Column::Id.in_subquery(group_ids_of_student(student_id)))
        }
        _ => nothing(),
    }
}

pub(crate) fn teacher_condition(scope: &VisibilityScope) -> Condition {
    match scope {
        VisibilityScope::Unrestricted => Condition::all(),
        VisibilityScope::Center(center_id) => Condition::all()
            .add(teacher::Column::BranchId.in_subquery(branch_ids_of_center(center_id))),
        VisibilityScope::TeacherOwned(teacher_id) => {
            Condition::all().add(teacher::Column::Id.eq(teacher_id))
        }
        _ => nothing(),
    }
}

pub(crate) fn student_condition(scope: &VisibilityScope) -> Condition {
    match scope {
        VisibilityScope::Unrestricted => Condition::all(),
        VisibilityScope::Center(center_id) => Condition::all()
            .add(student::Column::BranchId.in_subquery(branch_ids_of_center(center_id))),
        VisibilityScope::TeacherOwned(teacher_id) => Condition::all()
            .add(student::Column::GroupId.in_subquery(group_ids_of_teacher(teacher_id))),
        VisibilityScope::StudentOwned(student_id) => {
            Condition::all().add(student::Column::Id.eq(student_id))
        }
        _ => nothing(),
    }
}

pub(crate) fn lesson_condition(scope: &VisibilityScope) -> Condition {
    match scope {
        VisibilityScope::Unrestricted => Condition::all(),
        VisibilityScope::Center(center_id) => Condition::all()
            .add(lesson::Column::GroupId.in_subquery(group_ids_of_center(center_id))),
        VisibilityScope::TeacherOwned(teacher_id) => Condition::any()
            .add(lesson::Column::TeacherId.eq(teacher_id))
            .add(lesson::Column::GroupId.in_subquery(group_ids_of_teacher(teacher_id))),
        VisibilityScope::StudentOwned(student_id) => Condition::all()
            .add(lesson::Column::GroupId.in_subquery(group_ids_of_student(student_id))),
        _ => nothing(),
    }
}

pub(crate) fn attendance_condition(scope: &VisibilityScope) -> Condition {
    match scope {
        VisibilityScope::Unrestricted => Condition::all(),
        VisibilityScope::Center(center_id) => Condition::all().add(
            attendance::Column::LessonId
                .in_subquery(lesson_ids_in_groups(group_ids_of_center(center_id))),
        ),
        VisibilityScope::TeacherOwned(teacher_id) => Condition::all()
            .add(attendance::Column::LessonId.in_subquery(lesson_ids_of_teacher(teacher_id))),
        VisibilityScope::StudentOwned(student_id) => {
            Condition::all().add(attendance::Column::StudentId.eq(student_id))
        }
        _ => nothing(),
    }
}

pub(crate) fn payment_condition(scope: &VisibilityScope) -> Condition {
    match scope {
        VisibilityScope::Unrestricted => Condition::all(),
        VisibilityScope::Center(center_id) => Condition::all()
            .add(payment::Column::GroupId.in_subquery(group_ids_of_center(center_id))),
        VisibilityScope::StudentOwned(student_id) => {
            Condition::all().add(payment::Column::StudentId.eq(student_id))
        }
        _ => nothing(),
    }
}

pub(crate) fn assignment_condition(scope: &VisibilityScope) -> Condition {
    match scope {
        VisibilityScope::Unrestricted => Condition::all(),
        VisibilityScope::Center(center_id) => Condition::all()
            .add(assignment::Column::GroupId.in_subquery(group_ids_of_center(center_id))),
        VisibilityScope::TeacherOwned(teacher_id) => {
            Condition::all().add(assignment::Column::TeacherId.eq(teacher_id))
        }
        VisibilityScope::StudentOwned(student_id) => Condition::all()
            .add(assignment::Column::GroupId.in_subquery(group_ids_of_student(student_id))),
        _ => nothing(),
    }
}

pub(crate) fn submission_condition(scope: &VisibilityScope) -> Condition {
    match scope {
        VisibilityScope::Unrestricted => Condition::all(),
        VisibilityScope::Center(center_id) => Condition::all().add(
            assignment_submission::Column::AssignmentId.in_subquery(
                Query::select()
                    .column(assignment::Column::Id)
                    .from(assignment::Entity)
                    .and_where(
                        assignment::Column::GroupId.in_subquery(group_ids_of_center(center_id)),
                    )
                    .to_owned(),
            ),
        ),
        VisibilityScope::TeacherOwned(teacher_id) => Condition::all().add(
            assignment_submission::Column::AssignmentId
                .in_subquery(assignment_ids_of_teacher(teacher_id)),
        ),
        VisibilityScope::StudentOwned(student_id) => {
            Condition::all().add(assignment_submission::Column::StudentId.eq(student_id))
        }
        _ => nothing(),
    }
}

pub(crate) fn exam_condition(scope: &VisibilityScope) -> Condition {
    match scope {
        VisibilityScope::Unrestricted => Condition::all(),
        VisibilityScope::Center(center_id) => {
            Condition::all().add(exam::Column::GroupId.in_subquery(group_ids_of_center(center_id)))
        }
        VisibilityScope::TeacherOwned(teacher_id) => {
            Condition::all().add(exam::Column::TeacherId.eq(teacher_id))
        }
        VisibilityScope::StudentOwned(student_id) => Condition::all()
            .add(exam::Column::GroupId.in_subquery(group_ids_of_student(student_id))),
        _ => nothing(),
    }
}

/// Students only see their own outcomes, and only once the exam's results
/// are published.
pub(crate) fn exam_result_condition(scope: &VisibilityScope) -> Condition {
    match scope {
        VisibilityScope::Unrestricted => Condition::all(),
        VisibilityScope::Center(center_id) => Condition::all().add(
            exam_result::Column::ExamId.in_subquery(
                Query::select()
                    .column(exam::Column::Id)
                    .from(exam::Entity)
                    .and_where(exam::Column::GroupId.in_subquery(group_ids_of_center(center_id)))
                    .to_owned(),
            ),
        ),
        VisibilityScope::TeacherOwned(teacher_id) => {
            Condition::all().add(exam_result::Column::ExamId.in_subquery(exam_ids_of_teacher(teacher_id)))
        }
        VisibilityScope::StudentOwned(student_id) => Condition::all()
            .add(exam_result::Column::StudentId.eq(student_id))
            .add(exam_result::Column::ExamId.in_subquery(published_exam_ids())),
        _ => nothing(),
    }
}

pub(crate) fn contract_condition(scope: &VisibilityScope) -> Condition {
    match scope {
        VisibilityScope::Unrestricted => Condition::all(),
        VisibilityScope::Center(center_id) => Condition::all()
            .add(contract::Column::GroupId.in_subquery(group_ids_of_center(center_id))),
        VisibilityScope::StudentOwned(student_id) => {
            Condition::all().add(contract::Column::StudentId.eq(student_id))
        }
        _ => nothing(),
    }
}

pub(crate) fn lead_condition(scope: &VisibilityScope) -> Condition {
    match scope {
        VisibilityScope::Unrestricted => Condition::all(),
        VisibilityScope::Center(center_id) => Condition::all()
            .add(lead::Column::BranchId.in_subquery(branch_ids_of_center(center_id))),
        _ => nothing(),
    }
}

pub(crate) fn notification_condition(scope: &VisibilityScope) -> Condition {
    match scope {
        VisibilityScope::Unrestricted => Condition::all(),
        VisibilityScope::UserOwned(user_id) => {
            Condition::all().add(notification::Column::UserId.eq(user_id))
        }
        _ => nothing(),
    }
}
