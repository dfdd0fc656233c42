use campus_core::model::attendance::{
    Attendance, AttendanceFilter, SortableAttendanceColumn,
};
use sea_orm::IntoSimpleExpr;
use sea_orm::sea_query::{Query, SimpleExpr};
use sea_orm::{ColumnTrait, Condition};

use crate::entity::{attendance, lesson};
use crate::list_query::{IntoFilterCondition, IntoSortingColumn};

impl From<attendance::Model> for Attendance {
    fn from(value: attendance::Model) -> Self {
        Self {
            id: value.id,
            lesson_id: value.lesson_id,
            student_id: value.student_id,
            status: value.status.into(),
            marked_by_id: value.marked_by_id,
            notes: value.notes,
            marked_at: value.marked_at,
        }
    }
}

impl IntoSortingColumn for SortableAttendanceColumn {
    fn get_column(&self) -> SimpleExpr {
        match self {
            Self::MarkedAt => attendance::Column::MarkedAt,
        }
        .into_simple_expr()
    }
}

impl IntoFilterCondition for AttendanceFilter {
    fn get_condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(lesson_id) = self.lesson_id {
            condition = condition.add(attendance::Column::LessonId.eq(lesson_id));
        }
        if let Some(student_id) = self.student_id {
            condition = condition.add(attendance::Column::StudentId.eq(student_id));
        }
        if let Some(group_id) = self.group_id {
            condition = condition.add(
                attendance::Column::LessonId.in_subquery(
                    Query::select()
                        .column(lesson::Column::Id)
                        .from(lesson::Entity)
                        .and_where(lesson::Column::GroupId.eq(group_id))
                        .to_owned(),
                ),
            );
        }
        if let Some(marked_by_id) = self.marked_by_id {
            condition = condition.add(attendance::Column::MarkedById.eq(marked_by_id));
        }
        if let Some(status) = self.status {
            condition = condition
                .add(attendance::Column::Status.eq(attendance::AttendanceStatus::from(status)));
        }
        condition
    }
}
