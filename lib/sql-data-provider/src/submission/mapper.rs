use campus_core::model::assignment::{
    AssignmentSubmission, SortableSubmissionColumn, SubmissionFilter,
};
use one_dto_mapper::convert_inner;
use sea_orm::IntoSimpleExpr;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{ColumnTrait, Condition, Set};

use crate::entity::assignment_submission;
use crate::list_query::{IntoFilterCondition, IntoSortingColumn};

impl From<AssignmentSubmission> for assignment_submission::ActiveModel {
    fn from(value: AssignmentSubmission) -> Self {
        Self {
            id: Set(value.id),
            assignment_id: Set(value.assignment_id),
            student_id: Set(value.student_id),
            submission_file_path: Set(value.submission_file_path),
            submitted_at: Set(value.submitted_at),
            grade: Set(convert_inner(value.grade)),
            feedback: Set(value.feedback),
            graded_at: Set(value.graded_at),
        }
    }
}

impl From<assignment_submission::Model> for AssignmentSubmission {
    fn from(value: assignment_submission::Model) -> Self {
        Self {
            id: value.id,
            assignment_id: value.assignment_id,
            student_id: value.student_id,
            submission_file_path: value.submission_file_path,
            submitted_at: value.submitted_at,
            grade: convert_inner(value.grade),
            feedback: value.feedback,
            graded_at: value.graded_at,
        }
    }
}

impl IntoSortingColumn for SortableSubmissionColumn {
    fn get_column(&self) -> SimpleExpr {
        match self {
            Self::SubmittedAt => assignment_submission::Column::SubmittedAt,
        }
        .into_simple_expr()
    }
}

impl IntoFilterCondition for SubmissionFilter {
    fn get_condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(assignment_id) = self.assignment_id {
            condition = condition.add(assignment_submission::Column::AssignmentId.eq(assignment_id));
        }
        if let Some(student_id) = self.student_id {
            condition = condition.add(assignment_submission::Column::StudentId.eq(student_id));
        }
        if let Some(graded) = self.graded {
            condition = condition.add(if graded {
                assignment_submission::Column::Grade.is_not_null()
            } else {
                assignment_submission::Column::Grade.is_null()
            });
        }
        condition
    }
}
