use std::any::Any;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::{delete, get, patch, post};
use axum::{Extension, Router};
use campus_core::CampusCore;
use campus_core::config::app_config::AppConfig;
use sql_data_provider::{DataLayer, DbConn};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{Span, info, info_span};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::ServerConfig;
use crate::dto;
use crate::dto::response::ErrorResponse;
use crate::endpoint::{
    self, assignment, attendance, branch, center, contract, exam, exam_result, group, lead,
    lesson, misc, notification, payment, room, student, subject, submission, teacher, user,
};
use crate::middleware::get_http_request_context;

pub(crate) struct InternalAppState {
    pub core: CampusCore,
    pub config: Arc<ServerConfig>,
}

pub(crate) type AppState = Arc<InternalAppState>;

pub async fn start_server(
    listener: TcpListener,
    config: AppConfig<ServerConfig>,
    db_conn: DbConn,
) {
    listener
        .set_nonblocking(true)
        .expect("Failed to set listener to non-blocking");

    let core = CampusCore::new(Arc::new(DataLayer::build(db_conn)));

    let config = Arc::new(config.app);
    let state: AppState = Arc::new(InternalAppState {
        core,
        config: config.to_owned(),
    });

    let addr = listener.local_addr().expect("Invalid TCP listener");
    info!("Starting server at http://{addr}");

    let router = router(state, config);

    axum::serve(
        tokio::net::TcpListener::from_std(listener)
            .expect("failed to convert to tokio TcpListener"),
        router.into_make_service(),
    )
    .await
    .expect("Failed to start axum server");
}

fn router(state: AppState, config: Arc<ServerConfig>) -> Router {
    let protected = Router::new()
        .route(
            "/api/center/v1",
            get(center::controller::get_centers).post(center::controller::post_center),
        )
        .route(
            "/api/center/v1/{id}",
            get(center::controller::get_center).patch(center::controller::patch_center),
        )
        .route(
            "/api/center/v1/{id}/activate",
            post(center::controller::activate_center),
        )
        .route(
            "/api/center/v1/{id}/deactivate",
            post(center::controller::deactivate_center),
        )
        .route(
            "/api/center/v1/{id}/statistics",
            get(center::controller::get_center_statistics),
        )
        .route(
            "/api/subject/v1",
            get(subject::controller::get_subjects).post(subject::controller::post_subject),
        )
        .route(
            "/api/subject/v1/{id}",
            delete(subject::controller::delete_subject).get(subject::controller::get_subject),
        )
        .route(
            "/api/branch/v1",
            get(branch::controller::get_branches).post(branch::controller::post_branch),
        )
        .route(
            "/api/branch/v1/{id}",
            get(branch::controller::get_branch).patch(branch::controller::patch_branch),
        )
        .route(
            "/api/branch/v1/{id}/open",
            post(branch::controller::open_branch),
        )
        .route(
            "/api/branch/v1/{id}/close",
            post(branch::controller::close_branch),
        )
        .route(
            "/api/room/v1",
            get(room::controller::get_rooms).post(room::controller::post_room),
        )
        .route(
            "/api/room/v1/{id}",
            delete(room::controller::delete_room)
                .get(room::controller::get_room)
                .patch(room::controller::patch_room),
        )
        .route("/api/room/v1/{id}/occupy", post(room::controller::occupy_room))
        .route("/api/room/v1/{id}/free", post(room::controller::free_room))
        .route(
            "/api/group/v1",
            get(group::controller::get_groups).post(group::controller::post_group),
        )
        .route(
            "/api/group/v1/{id}",
            get(group::controller::get_group).patch(group::controller::patch_group),
        )
        .route(
            "/api/group/v1/{id}/statistics",
            get(group::controller::get_group_statistics),
        )
        .route(
            "/api/group/v1/{id}/attendance-report",
            get(group::controller::get_group_attendance_report),
        )
        .route(
            "/api/lesson/v1",
            get(lesson::controller::get_lessons).post(lesson::controller::post_lesson),
        )
        .route(
            "/api/lesson/v1/{id}",
            delete(lesson::controller::delete_lesson)
                .get(lesson::controller::get_lesson)
                .patch(lesson::controller::patch_lesson),
        )
        .route(
            "/api/lesson/v1/{id}/cancel",
            post(lesson::controller::cancel_lesson),
        )
        .route(
            "/api/lesson/v1/{id}/online-link",
            post(lesson::controller::generate_online_link),
        )
        .route(
            "/api/teacher/v1",
            get(teacher::controller::get_teachers).post(teacher::controller::post_teacher),
        )
        .route(
            "/api/teacher/v1/{id}",
            delete(teacher::controller::delete_teacher)
                .get(teacher::controller::get_teacher)
                .patch(teacher::controller::patch_teacher),
        )
        .route(
            "/api/teacher/v1/{id}/block",
            post(teacher::controller::block_teacher),
        )
        .route(
            "/api/teacher/v1/{id}/rate",
            post(teacher::controller::rate_teacher),
        )
        .route(
            "/api/teacher/v1/{id}/schedule",
            get(teacher::controller::get_teacher_schedule),
        )
        .route(
            "/api/teacher/v1/{id}/performance",
            get(teacher::controller::get_teacher_performance),
        )
        .route(
            "/api/student/v1",
            get(student::controller::get_students).post(student::controller::post_student),
        )
        .route(
            "/api/student/v1/{id}",
            get(student::controller::get_student).patch(student::controller::patch_student),
        )
        .route(
            "/api/student/v1/{id}/block",
            post(student::controller::block_student),
        )
        .route(
            "/api/student/v1/{id}/assign-group",
            post(student::controller::assign_group),
        )
        .route(
            "/api/student/v1/{id}/attendance-history",
            get(student::controller::get_student_attendance_history),
        )
        .route(
            "/api/student/v1/{id}/payment-history",
            get(student::controller::get_student_payment_history),
        )
        .route(
            "/api/lead/v1",
            get(lead::controller::get_leads).post(lead::controller::post_lead),
        )
        .route(
            "/api/lead/v1/{id}",
            get(lead::controller::get_lead).patch(lead::controller::patch_lead),
        )
        .route(
            "/api/lead/v1/{id}/convert-to-student",
            post(lead::controller::convert_lead),
        )
        .route(
            "/api/lead/v1/statistics",
            get(lead::controller::get_lead_statistics),
        )
        .route(
            "/api/contract/v1",
            get(contract::controller::get_contracts).post(contract::controller::post_contract),
        )
        .route(
            "/api/contract/v1/{id}",
            get(contract::controller::get_contract),
        )
        .route(
            "/api/contract/v1/{id}/verify",
            post(contract::controller::verify_contract),
        )
        .route(
            "/api/attendance/v1",
            get(attendance::controller::get_attendances),
        )
        .route(
            "/api/attendance/v1/bulk-mark",
            post(attendance::controller::bulk_mark_attendance),
        )
        .route(
            "/api/attendance/v1/{id}",
            get(attendance::controller::get_attendance),
        )
        .route(
            "/api/payment/v1",
            get(payment::controller::get_payments).post(payment::controller::post_payment),
        )
        .route(
            "/api/payment/v1/{id}",
            delete(payment::controller::delete_payment).get(payment::controller::get_payment),
        )
        .route(
            "/api/assignment/v1",
            get(assignment::controller::get_assignments)
                .post(assignment::controller::post_assignment),
        )
        .route(
            "/api/assignment/v1/{id}",
            get(assignment::controller::get_assignment)
                .patch(assignment::controller::patch_assignment),
        )
        .route(
            "/api/submission/v1",
            get(submission::controller::get_submissions)
                .post(submission::controller::post_submission),
        )
        .route(
            "/api/submission/v1/{id}",
            get(submission::controller::get_submission),
        )
        .route(
            "/api/submission/v1/{id}/grade",
            post(submission::controller::grade_submission),
        )
        .route(
            "/api/exam/v1",
            get(exam::controller::get_exams).post(exam::controller::post_exam),
        )
        .route(
            "/api/exam/v1/{id}",
            get(exam::controller::get_exam).patch(exam::controller::patch_exam),
        )
        .route(
            "/api/exam/v1/{id}/publish-results",
            post(exam::controller::publish_exam_results),
        )
        .route(
            "/api/exam-result/v1",
            get(exam_result::controller::get_exam_results)
                .post(exam_result::controller::post_exam_result),
        )
        .route(
            "/api/exam-result/v1/{id}",
            get(exam_result::controller::get_exam_result),
        )
        .route(
            "/api/notification/v1",
            get(notification::controller::get_notifications)
                .post(notification::controller::post_notification),
        )
        .route(
            "/api/notification/v1/{id}",
            delete(notification::controller::delete_notification)
                .get(notification::controller::get_notification),
        )
        .route(
            "/api/notification/v1/{id}/mark-read",
            post(notification::controller::read_notification),
        )
        .route(
            "/api/user/v1",
            get(user::controller::get_users).post(user::controller::post_user),
        )
        .route(
            "/api/user/v1/{id}",
            get(user::controller::get_user).patch(user::controller::patch_user),
        )
        .route("/api/user/v1/{id}/block", post(user::controller::block_user))
        .route(
            "/api/user/v1/{id}/unblock",
            post(user::controller::unblock_user),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::authenticate,
        ));

    let mut technical_endpoints = Router::new().route("/health", get(misc::health_check));
    if config.enable_metrics {
        technical_endpoints = technical_endpoints.route("/metrics", get(misc::get_metrics));
    }

    let mut router = Router::new().merge(protected).layer(
        TraceLayer::new_for_http()
            .make_span_with(|request: &Request<_>| {
                let context = get_http_request_context(request);
                info_span!(
                    "http_request",
                    method = context.method,
                    path = context.path,
                    service = "campus-core",
                    RequestId = context.request_id,
                )
            })
            .on_request(|request: &Request<_>, _span: &Span| {
                tracing::debug!(
                    "SERVICE CALL START {} {}",
                    request.method(),
                    request.uri().path()
                )
            })
            .on_failure(|_, _, _: &_| {}) // override default on_failure handler
            .on_response(|response: &Response<_>, _: Duration, _span: &Span| {
                tracing::debug!("SERVICE CALL END {}", response.status())
            }),
    );

    if config.enable_open_api {
        router = router.merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", gen_openapi_documentation()),
        );
    }

    router
        .layer(middleware::from_fn(crate::middleware::metrics_counter))
        .merge(technical_endpoints)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(Extension(config))
        .with_state(state)
}

fn gen_openapi_documentation() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        paths(
            endpoint::center::controller::post_center,
            endpoint::center::controller::get_center,
            endpoint::center::controller::get_centers,
            endpoint::center::controller::patch_center,
            endpoint::center::controller::activate_center,
            endpoint::center::controller::deactivate_center,
            endpoint::center::controller::get_center_statistics,

            endpoint::subject::controller::post_subject,
            endpoint::subject::controller::get_subject,
            endpoint::subject::controller::get_subjects,
            endpoint::subject::controller::delete_subject,

            endpoint::branch::controller::post_branch,
            endpoint::branch::controller::get_branch,
            endpoint::branch::controller::get_branches,
            endpoint::branch::controller::patch_branch,
            endpoint::branch::controller::open_branch,
            endpoint::branch::controller::close_branch,

            endpoint::room::controller::post_room,
            endpoint::room::controller::get_room,
            endpoint::room::controller::get_rooms,
            endpoint::room::controller::patch_room,
            endpoint::room::controller::occupy_room,
            endpoint::room::controller::free_room,
            endpoint::room::controller::delete_room,

            endpoint::group::controller::post_group,
            endpoint::group::controller::get_group,
            endpoint::group::controller::get_groups,
            endpoint::group::controller::patch_group,
            endpoint::group::controller::get_group_statistics,
            endpoint::group::controller::get_group_attendance_report,

            endpoint::lesson::controller::post_lesson,
            endpoint::lesson::controller::get_lesson,
            endpoint::lesson::controller::get_lessons,
            endpoint::lesson::controller::patch_lesson,
            endpoint::lesson::controller::cancel_lesson,
            endpoint::lesson::controller::generate_online_link,
            endpoint::lesson::controller::delete_lesson,

            endpoint::teacher::controller::post_teacher,
            endpoint::teacher::controller::get_teacher,
            endpoint::teacher::controller::get_teachers,
            endpoint::teacher::controller::patch_teacher,
            endpoint::teacher::controller::block_teacher,
            endpoint::teacher::controller::rate_teacher,
            endpoint::teacher::controller::get_teacher_schedule,
            endpoint::teacher::controller::get_teacher_performance,
            endpoint::teacher::controller::delete_teacher,

            endpoint::student::controller::post_student,
            endpoint::student::controller::get_student,
            endpoint::student::controller::get_students,
            endpoint::student::controller::patch_student,
            endpoint::student::controller::block_student,
            endpoint::student::controller::assign_group,
            endpoint::student::controller::get_student_attendance_history,
            endpoint::student::controller::get_student_payment_history,

            endpoint::lead::controller::post_lead,
            endpoint::lead::controller::get_lead,
            endpoint::lead::controller::get_leads,
            endpoint::lead::controller::patch_lead,
            endpoint::lead::controller::convert_lead,
            endpoint::lead::controller::get_lead_statistics,

            endpoint::contract::controller::post_contract,
            endpoint::contract::controller::get_contract,
            endpoint::contract::controller::get_contracts,
            endpoint::contract::controller::verify_contract,

            endpoint::attendance::controller::bulk_mark_attendance,
            endpoint::attendance::controller::get_attendance,
            endpoint::attendance::controller::get_attendances,

            endpoint::payment::controller::post_payment,
            endpoint::payment::controller::get_payment,
            endpoint::payment::controller::get_payments,
            endpoint::payment::controller::delete_payment,

            endpoint::assignment::controller::post_assignment,
            endpoint::assignment::controller::get_assignment,
            endpoint::assignment::controller::get_assignments,
            endpoint::assignment::controller::patch_assignment,

            endpoint::submission::controller::post_submission,
            endpoint::submission::controller::get_submission,
            endpoint::submission::controller::get_submissions,
            endpoint::submission::controller::grade_submission,

            endpoint::exam::controller::post_exam,
            endpoint::exam::controller::get_exam,
            endpoint::exam::controller::get_exams,
            endpoint::exam::controller::patch_exam,
            endpoint::exam::controller::publish_exam_results,

            endpoint::exam_result::controller::post_exam_result,
            endpoint::exam_result::controller::get_exam_result,
            endpoint::exam_result::controller::get_exam_results,

            endpoint::notification::controller::post_notification,
            endpoint::notification::controller::get_notification,
            endpoint::notification::controller::get_notifications,
            endpoint::notification::controller::read_notification,
            endpoint::notification::controller::delete_notification,

            endpoint::user::controller::post_user,
            endpoint::user::controller::get_user,
            endpoint::user::controller::get_users,
            endpoint::user::controller::patch_user,
            endpoint::user::controller::block_user,
            endpoint::user::controller::unblock_user,

            endpoint::misc::health_check,
            endpoint::misc::get_metrics,
        ),
        components(
            schemas(
                endpoint::center::dto::CreateCenterRequestRestDTO,
                endpoint::center::dto::CenterResponseRestDTO,
                endpoint::center::dto::CenterStatisticsResponseRestDTO,
                endpoint::center::dto::CenterStatusRestEnum,
                endpoint::center::dto::UpdateCenterRequestRestDTO,

                endpoint::subject::dto::CreateSubjectRequestRestDTO,
                endpoint::subject::dto::SubjectResponseRestDTO,

                endpoint::branch::dto::CreateBranchRequestRestDTO,
                endpoint::branch::dto::BranchResponseRestDTO,
                endpoint::branch::dto::BranchStatusRestEnum,
                endpoint::branch::dto::UpdateBranchRequestRestDTO,

                endpoint::room::dto::CreateRoomRequestRestDTO,
                endpoint::room::dto::RoomResponseRestDTO,
                endpoint::room::dto::UpdateRoomRequestRestDTO,

                endpoint::group::dto::CreateGroupRequestRestDTO,
                endpoint::group::dto::GroupResponseRestDTO,
                endpoint::group::dto::GroupStatusRestEnum,
                endpoint::group::dto::UpdateGroupRequestRestDTO,
                endpoint::group::dto::GroupStatisticsResponseRestDTO,
                endpoint::group::dto::GroupAttendanceReportResponseRestDTO,

                endpoint::lesson::dto::CreateLessonRequestRestDTO,
                endpoint::lesson::dto::LessonResponseRestDTO,
                endpoint::lesson::dto::OnlineLinkResponseRestDTO,
                endpoint::lesson::dto::UpdateLessonRequestRestDTO,

                endpoint::teacher::dto::CreateTeacherRequestRestDTO,
                endpoint::teacher::dto::TeacherResponseRestDTO,
                endpoint::teacher::dto::PersonStatusRestEnum,
                endpoint::teacher::dto::UpdateTeacherRequestRestDTO,
                endpoint::teacher::dto::RateTeacherRequestRestDTO,
                endpoint::teacher::dto::TeacherPerformanceResponseRestDTO,

                endpoint::student::dto::CreateStudentRequestRestDTO,
                endpoint::student::dto::StudentResponseRestDTO,
                endpoint::student::dto::UpdateStudentRequestRestDTO,
                endpoint::student::dto::AssignGroupRequestRestDTO,
                endpoint::student::dto::StudentAttendanceHistoryResponseRestDTO,

                endpoint::lead::dto::CreateLeadRequestRestDTO,
                endpoint::lead::dto::LeadResponseRestDTO,
                endpoint::lead::dto::LeadStatusRestEnum,
                endpoint::lead::dto::LeadSourceRestEnum,
                endpoint::lead::dto::UpdateLeadRequestRestDTO,
                endpoint::lead::dto::ConvertLeadResponseRestDTO,
                endpoint::lead::dto::LeadSourceCountRestDTO,
                endpoint::lead::dto::LeadStatisticsResponseRestDTO,

                endpoint::contract::dto::CreateContractRequestRestDTO,
                endpoint::contract::dto::ContractResponseRestDTO,

                endpoint::attendance::dto::BulkMarkRequestRestDTO,
                endpoint::attendance::dto::BulkMarkEntryRestDTO,
                endpoint::attendance::dto::BulkMarkResponseRestDTO,
                endpoint::attendance::dto::AttendanceResponseRestDTO,
                endpoint::attendance::dto::AttendanceStatusRestEnum,

                endpoint::payment::dto::CreatePaymentRequestRestDTO,
                endpoint::payment::dto::PaymentResponseRestDTO,
                endpoint::payment::dto::PaymentTypeRestEnum,

                endpoint::assignment::dto::CreateAssignmentRequestRestDTO,
                endpoint::assignment::dto::AssignmentResponseRestDTO,
                endpoint::assignment::dto::AssignmentStatusRestEnum,
                endpoint::assignment::dto::UpdateAssignmentRequestRestDTO,

                endpoint::submission::dto::CreateSubmissionRequestRestDTO,
                endpoint::submission::dto::SubmissionResponseRestDTO,
                endpoint::submission::dto::SubmissionGradeRestEnum,
                endpoint::submission::dto::GradeSubmissionRequestRestDTO,

                endpoint::exam::dto::CreateExamRequestRestDTO,
                endpoint::exam::dto::ExamResponseRestDTO,
                endpoint::exam::dto::UpdateExamRequestRestDTO,

                endpoint::exam_result::dto::CreateExamResultRequestRestDTO,
                endpoint::exam_result::dto::ExamResultResponseRestDTO,

                endpoint::notification::dto::CreateNotificationRequestRestDTO,
                endpoint::notification::dto::NotificationResponseRestDTO,
                endpoint::notification::dto::NotificationTypeRestEnum,

                endpoint::user::dto::CreateUserRequestRestDTO,
                endpoint::user::dto::CreateUserResponseRestDTO,
                endpoint::user::dto::UserResponseRestDTO,
                endpoint::user::dto::UpdateUserRequestRestDTO,
                endpoint::user::dto::RoleRestEnum,

                dto::common::EntityResponseRestDTO,
                dto::common::SortDirection,

                dto::error::ErrorResponseRestDTO,
                dto::error::ErrorCode,
                dto::error::Cause,

                shared_types::CenterId,
                shared_types::BranchId,
                shared_types::SubjectId,
                shared_types::RoomId,
                shared_types::GroupId,
                shared_types::LessonId,
                shared_types::TeacherId,
                shared_types::StudentId,
                shared_types::LeadId,
                shared_types::ContractId,
                shared_types::AttendanceId,
                shared_types::PaymentId,
                shared_types::AssignmentId,
                shared_types::SubmissionId,
                shared_types::ExamId,
                shared_types::ExamResultId,
                shared_types::NotificationId,
                shared_types::UserId,
                shared_types::ProfileId,
            )
        ),
        tags(
            (name = "other", description = "Other utility endpoints"),
            (name = "center_management", description = "Center and subject management"),
            (name = "branch_management", description = "Branch and room management"),
            (name = "schedule_management", description = "Group and lesson scheduling"),
            (name = "staff_management", description = "Teacher management"),
            (name = "enrollment_management", description = "Students, leads and contracts"),
            (name = "attendance_management", description = "Attendance marking"),
            (name = "payment_management", description = "Tuition payments"),
            (name = "coursework_management", description = "Assignments, submissions and exams"),
            (name = "notification_management", description = "User notifications"),
            (name = "user_management", description = "User accounts and roles"),
        ),
        modifiers(&SecurityAddon)
    )]
    struct ApiDoc;

    struct SecurityAddon;

    impl Modify for SecurityAddon {
        fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
            let components = openapi.components.as_mut().expect("OpenAPI Components");
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Account API token"))
                        .build(),
                ),
            );
        }
    }

    let mut docs = ApiDoc::openapi();
    docs.info.version = env!("CARGO_PKG_VERSION").to_string();

    docs
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    tracing::error!("PANIC occurred in request: {message}");

    ErrorResponse::for_panic(message).into_response()
}

#[cfg(test)]
mod test {
    use super::gen_openapi_documentation;

    #[test]
    fn test_openapi_document_lists_action_paths() {
        let docs = gen_openapi_documentation();
        let paths = &docs.paths.paths;

        for path in [
            "/api/lead/v1/{id}/convert-to-student",
            "/api/lead/v1/statistics",
            "/api/notification/v1/{id}/mark-read",
            "/api/group/v1/{id}/statistics",
            "/api/group/v1/{id}/attendance-report",
            "/api/teacher/v1/{id}/schedule",
            "/api/teacher/v1/{id}/performance",
            "/api/student/v1/{id}/attendance-history",
            "/api/student/v1/{id}/payment-history",
        ] {
            assert!(paths.contains_key(path), "missing path {path}");
        }
    }
}
