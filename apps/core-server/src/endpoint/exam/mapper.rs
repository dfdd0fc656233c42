use campus_core::model::exam::UpdateExamRequest;
use shared_types::ExamId;

use super::dto::UpdateExamRequestRestDTO;

pub(super) fn update_exam_request(id: ExamId, request: UpdateExamRequestRestDTO) -> UpdateExamRequest {
    UpdateExamRequest {
        id,
        title: request.title,
        description: request.description,
        exam_date: request.exam_date,
        start_time: request.start_time,
        end_time: request.end_time,
        total_points: request.total_points,
        passing_score: request.passing_score,
    }
}
