use campus_core::model::lesson::UpdateLessonRequest;
use shared_types::LessonId;

use super::dto::UpdateLessonRequestRestDTO;

pub(super) fn update_lesson_request(
    id: LessonId,
    request: UpdateLessonRequestRestDTO,
) -> UpdateLessonRequest {
    UpdateLessonRequest {
        id,
        teacher_id: request.teacher_id,
        room_id: request.room_id,
        date: request.date,
        start_time: request.start_time,
        end_time: request.end_time,
        duration: request.duration,
        online_link: request.online_link,
        is_cancelled: request.is_cancelled,
    }
}
