use campus_core::model::lesson::{
    Lesson, LessonFilter, SortableLessonColumn, UpdateLessonRequest,
};
use sea_orm::ActiveValue::NotSet;
use sea_orm::IntoSimpleExpr;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{ColumnTrait, Condition, Set};
use time::OffsetDateTime;

use crate::entity::lesson;
use crate::list_query::{IntoFilterCondition, IntoSortingColumn};

impl From<Lesson> for lesson::ActiveModel {
    fn from(value: Lesson) -> Self {
        Self {
            id: Set(value.id),
            created_date: Set(value.created_date),
            last_modified: Set(value.last_modified),
            group_id: Set(value.group_id),
            teacher_id: Set(value.teacher_id),
            room_id: Set(value.room_id),
            date: Set(value.date),
            start_time: Set(value.start_time),
            end_time: Set(value.end_time),
            duration: Set(value.duration),
            online_link: Set(value.online_link),
            is_cancelled: Set(value.is_cancelled),
        }
    }
}

impl From<UpdateLessonRequest> for lesson::ActiveModel {
    fn from(value: UpdateLessonRequest) -> Self {
        Self {
            id: Set(value.id),
            last_modified: Set(OffsetDateTime::now_utc()),
            teacher_id: value.teacher_id.map(Set).unwrap_or(NotSet),
            room_id: value.room_id.map(Set).unwrap_or(NotSet),
            date: value.date.map(Set).unwrap_or(NotSet),
            start_time: value.start_time.map(Set).unwrap_or(NotSet),
            end_time: value.end_time.map(Set).unwrap_or(NotSet),
            duration: value.duration.map(Set).unwrap_or(NotSet),
            online_link: value.online_link.map(Set).unwrap_or(NotSet),
            is_cancelled: value.is_cancelled.map(Set).unwrap_or(NotSet),
            ..Default::default()
        }
    }
}

impl IntoSortingColumn for SortableLessonColumn {
    fn get_column(&self) -> SimpleExpr {
        match self {
            Self::Date => lesson::Column::Date,
            Self::CreatedDate => lesson::Column::CreatedDate,
        }
        .into_simple_expr()
    }
}

impl IntoFilterCondition for LessonFilter {
    fn get_condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(group_id) = self.group_id {
            condition = condition.add(lesson::Column::GroupId.eq(group_id));
        }
        if let Some(teacher_id) = self.teacher_id {
            condition = condition.add(lesson::Column::TeacherId.eq(teacher_id));
        }
        if let Some(date) = self.date {
            condition = condition.add(lesson::Column::Date.eq(date));
        }
        if let Some(is_cancelled) = self.is_cancelled {
            condition = condition.add(lesson::Column::IsCancelled.eq(is_cancelled));
        }
        condition
    }
}
