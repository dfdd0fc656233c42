use campus_core::model::exam::{ExamResult, ExamResultFilter, SortableExamResultColumn};
use sea_orm::IntoSimpleExpr;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{ColumnTrait, Condition, Set};

use crate::entity::exam_result;
use crate::list_query::{IntoFilterCondition, IntoSortingColumn};

impl From<ExamResult> for exam_result::ActiveModel {
    fn from(value: ExamResult) -> Self {
        Self {
            id: Set(value.id),
            exam_id: Set(value.exam_id),
            student_id: Set(value.student_id),
            score: Set(value.score),
            grade: Set(value.grade),
            answer_file_path: Set(value.answer_file_path),
            submitted_at: Set(value.submitted_at),
        }
    }
}

impl IntoSortingColumn for SortableExamResultColumn {
    fn get_column(&self) -> SimpleExpr {
        match self {
            Self::Score => exam_result::Column::Score,
            Self::SubmittedAt => exam_result::Column::SubmittedAt,
        }
        .into_simple_expr()
    }
}

impl IntoFilterCondition for ExamResultFilter {
    fn get_condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(exam_id) = self.exam_id {
            condition = condition.add(exam_result::Column::ExamId.eq(exam_id));
        }
        if let Some(student_id) = self.student_id {
            condition = condition.add(exam_result::Column::StudentId.eq(student_id));
        }
        condition
    }
}
