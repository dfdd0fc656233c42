use campus_core::model::exam::{Exam, ExamFilter, SortableExamColumn, UpdateExamRequest};
use sea_orm::ActiveValue::NotSet;
use sea_orm::IntoSimpleExpr;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{ColumnTrait, Condition, Set};

use crate::entity::exam;
use crate::list_query::{IntoFilterCondition, IntoSortingColumn};

impl From<Exam> for exam::ActiveModel {
    fn from(value: Exam) -> Self {
        Self {
            id: Set(value.id),
            created_date: Set(value.created_date),
            group_id: Set(value.group_id),
            teacher_id: Set(value.teacher_id),
            title: Set(value.title),
            description: Set(value.description),
            exam_date: Set(value.exam_date),
            start_time: Set(value.start_time),
            end_time: Set(value.end_time),
            total_points: Set(value.total_points),
            passing_score: Set(value.passing_score),
            results_published: Set(value.results_published),
        }
    }
}

impl From<UpdateExamRequest> for exam::ActiveModel {
    fn from(value: UpdateExamRequest) -> Self {
        Self {
            id: Set(value.id),
            title: value.title.map(Set).unwrap_or(NotSet),
            description: value.description.map(Set).unwrap_or(NotSet),
            exam_date: value.exam_date.map(Set).unwrap_or(NotSet),
            start_time: value.start_time.map(Set).unwrap_or(NotSet),
            end_time: value.end_time.map(Set).unwrap_or(NotSet),
            total_points: value.total_points.map(Set).unwrap_or(NotSet),
            passing_score: value.passing_score.map(Set).unwrap_or(NotSet),
            ..Default::default()
        }
    }
}

impl IntoSortingColumn for SortableExamColumn {
    fn get_column(&self) -> SimpleExpr {
        match self {
            Self::ExamDate => exam::Column::ExamDate,
            Self::CreatedDate => exam::Column::CreatedDate,
        }
        .into_simple_expr()
    }
}

impl IntoFilterCondition for ExamFilter {
    fn get_condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(group_id) = self.group_id {
            condition = condition.add(exam::Column::GroupId.eq(group_id));
        }
        if let Some(teacher_id) = self.teacher_id {
            condition = condition.add(exam::Column::TeacherId.eq(teacher_id));
        }
        condition
    }
}
