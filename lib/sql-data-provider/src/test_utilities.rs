use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use shared_types::{
    BranchId, CenterId, ExamId, ExamResultId, GroupId, LeadId, LessonId, PaymentId, StudentId,
    SubjectId, TeacherId, UserId,
};
use time::macros::{date, datetime, time};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::entity::{
    branch, center, exam, exam_result, group, lead, lesson, payment, student, subject, teacher,
    user,
};
use crate::{DataLayer, db_conn};

pub fn get_dummy_date() -> OffsetDateTime {
    datetime!(2005-04-02 21:37 +1)
}

pub async fn setup_test_data_layer_and_connection() -> DataLayer {
    let db = db_conn("sqlite::memory:")
        .await
        .expect("migrations run on in-memory sqlite");
    DataLayer::build(db)
}

pub async fn insert_center(db: &DatabaseConnection, name: &str) -> Result<CenterId, DbErr> {
    let center = center::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        created_date: Set(get_dummy_date()),
        last_modified: Set(get_dummy_date()),
        name: Set(name.to_owned()),
        address: Set("1 Main St".to_string()),
        phone: Set("+1000000".to_string()),
        email: Set(format!("{name}@example.com")),
        description: Set(String::new()),
        license_number: Set(format!("LIC-{}", Uuid::new_v4())),
        opened_at: Set(date!(2020 - 01 - 01)),
        status: Set(center::CenterStatus::Active),
        website: Set(String::new()),
        logo_path: Set(None),
        director_id: Set(None),
    }
    .insert(db)
    .await?;
    Ok(center.id)
}

pub async fn insert_branch(
    db: &DatabaseConnection,
    center_id: CenterId,
    name: &str,
) -> Result<BranchId, DbErr> {
    let branch = branch::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        created_date: Set(get_dummy_date()),
        last_modified: Set(get_dummy_date()),
        center_id: Set(center_id),
        name: Set(name.to_owned()),
        address: Set("2 Side St".to_string()),
        phone: Set("+2000000".to_string()),
        manager_id: Set(None),
        status: Set(branch::BranchStatus::Open),
    }
    .insert(db)
    .await?;
    Ok(branch.id)
}

pub async fn insert_subject(
    db: &DatabaseConnection,
    center_id: CenterId,
    name: &str,
) -> Result<SubjectId, DbErr> {
    let subject = subject::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        created_date: Set(get_dummy_date()),
        center_id: Set(center_id),
        name: Set(name.to_owned()),
        description: Set(String::new()),
    }
    .insert(db)
    .await?;
    Ok(subject.id)
}

pub async fn insert_user(db: &DatabaseConnection, username: &str) -> Result<UserId, DbErr> {
    let user = user::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        created_date: Set(get_dummy_date()),
        last_modified: Set(get_dummy_date()),
        username: Set(username.to_owned()),
        first_name: Set("Test".to_string()),
        last_name: Set("User".to_string()),
        email: Set(format!("{username}@example.com")),
        api_token: Set(format!("token-{}", Uuid::new_v4())),
    }
    .insert(db)
    .await?;
    Ok(user.id)
}

pub async fn insert_teacher(
    db: &DatabaseConnection,
    user_id: UserId,
    branch_id: BranchId,
) -> Result<TeacherId, DbErr> {
    let teacher = teacher::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        created_date: Set(get_dummy_date()),
        last_modified: Set(get_dummy_date()),
        user_id: Set(user_id),
        branch_id: Set(branch_id),
        status: Set(teacher::PersonStatus::Active),
        phone: Set("+3000000".to_string()),
        date_of_birth: Set(None),
        specialization: Set("Mathematics".to_string()),
        qualification: Set(String::new()),
        performance_rating: Set(0.0),
        hire_date: Set(date!(2021 - 09 - 01)),
        hourly_rate: Set(0),
        address: Set(String::new()),
        passport_number: Set(None),
    }
    .insert(db)
    .await?;
    Ok(teacher.id)
}

pub async fn insert_group(
    db: &DatabaseConnection,
    center_id: CenterId,
    branch_id: BranchId,
    subject_id: SubjectId,
    teacher_id: Option<TeacherId>,
    name: &str,
) -> Result<GroupId, DbErr> {
    let group = group::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        created_date: Set(get_dummy_date()),
        last_modified: Set(get_dummy_date()),
        center_id: Set(center_id),
        branch_id: Set(branch_id),
        subject_id: Set(subject_id),
        teacher_id: Set(teacher_id),
        room_id: Set(None),
        name: Set(name.to_owned()),
        capacity: Set(12),
        status: Set(group::GroupStatus::Active),
        start_date: Set(date!(2024 - 01 - 08)),
        end_date: Set(date!(2024 - 06 - 28)),
    }
    .insert(db)
    .await?;
    Ok(group.id)
}

pub async fn insert_student(
    db: &DatabaseConnection,
    branch_id: BranchId,
    group_id: Option<GroupId>,
    last_name: &str,
) -> Result<StudentId, DbErr> {
    let student = student::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        created_date: Set(get_dummy_date()),
        last_modified: Set(get_dummy_date()),
        user_id: Set(None),
        branch_id: Set(branch_id),
        group_id: Set(group_id),
        first_name: Set("Student".to_string()),
        last_name: Set(last_name.to_owned()),
        phone: Set("+4000000".to_string()),
        date_of_birth: Set(None),
        enrollment_date: Set(date!(2024 - 01 - 08)),
        address: Set(String::new()),
        parent_name: Set(String::new()),
        parent_phone: Set(String::new()),
        parent_email: Set(String::new()),
        passport_number: Set(None),
        status: Set(teacher::PersonStatus::Active),
    }
    .insert(db)
    .await?;
    Ok(student.id)
}

pub async fn insert_lesson(
    db: &DatabaseConnection,
    group_id: GroupId,
    teacher_id: Option<TeacherId>,
) -> Result<LessonId, DbErr> {
    let lesson = lesson::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        created_date: Set(get_dummy_date()),
        last_modified: Set(get_dummy_date()),
        group_id: Set(group_id),
        teacher_id: Set(teacher_id),
        room_id: Set(None),
        date: Set(date!(2024 - 02 - 12)),
        start_time: Set(time!(9:00)),
        end_time: Set(time!(10:30)),
        duration: Set(90),
        online_link: Set(String::new()),
        is_cancelled: Set(false),
    }
    .insert(db)
    .await?;
    Ok(lesson.id)
}

pub async fn insert_exam(
    db: &DatabaseConnection,
    group_id: GroupId,
    teacher_id: TeacherId,
    results_published: bool,
) -> Result<ExamId, DbErr> {
    let exam = exam::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        created_date: Set(get_dummy_date()),
        group_id: Set(group_id),
        teacher_id: Set(teacher_id),
        title: Set("Midterm".to_string()),
        description: Set(String::new()),
        exam_date: Set(date!(2024 - 03 - 15)),
        start_time: Set(time!(10:00)),
        end_time: Set(time!(12:00)),
        total_points: Set(100),
        passing_score: Set(60),
        results_published: Set(results_published),
    }
    .insert(db)
    .await?;
    Ok(exam.id)
}

pub async fn insert_exam_result(
    db: &DatabaseConnection,
    exam_id: ExamId,
    student_id: StudentId,
    score: u32,
) -> Result<ExamResultId, DbErr> {
    let result = exam_result::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        exam_id: Set(exam_id),
        student_id: Set(student_id),
        score: Set(score),
        grade: Set("B".to_string()),
        answer_file_path: Set(None),
        submitted_at: Set(get_dummy_date()),
    }
    .insert(db)
    .await?;
    Ok(result.id)
}

pub async fn insert_lesson_at(
    db: &DatabaseConnection,
    group_id: GroupId,
    teacher_id: Option<TeacherId>,
    date: time::Date,
    start_time: time::Time,
) -> Result<LessonId, DbErr> {
    let lesson = lesson::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        created_date: Set(get_dummy_date()),
        last_modified: Set(get_dummy_date()),
        group_id: Set(group_id),
        teacher_id: Set(teacher_id),
        room_id: Set(None),
        date: Set(date),
        start_time: Set(start_time),
        end_time: Set(start_time + time::Duration::minutes(90)),
        duration: Set(90),
        online_link: Set(String::new()),
        is_cancelled: Set(false),
    }
    .insert(db)
    .await?;
    Ok(lesson.id)
}

pub async fn insert_payment(
    db: &DatabaseConnection,
    student_id: StudentId,
    group_id: GroupId,
    amount: i64,
) -> Result<PaymentId, DbErr> {
    let payment = payment::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        created_date: Set(get_dummy_date()),
        student_id: Set(student_id),
        group_id: Set(group_id),
        amount: Set(amount),
        payment_type: Set(payment::PaymentType::Cash),
        payment_date: Set(date!(2024 - 03 - 01)),
        due_date: Set(date!(2024 - 03 - 10)),
        receipt_number: Set(format!("RCPT-{}", Uuid::new_v4())),
        document_path: Set(None),
        paid_by_id: Set(None),
        notes: Set(String::new()),
    }
    .insert(db)
    .await?;
    Ok(payment.id)
}

pub async fn insert_lead(
    db: &DatabaseConnection,
    branch_id: BranchId,
    source: lead::LeadSource,
) -> Result<LeadId, DbErr> {
    let row = lead::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        created_date: Set(get_dummy_date()),
        last_modified: Set(get_dummy_date()),
        branch_id: Set(branch_id),
        name: Set("Casey Lee".to_string()),
        email: Set(format!("{}@example.com", Uuid::new_v4())),
        phone: Set("+300000".to_string()),
        course_interested_id: Set(None),
        status: Set(lead::LeadStatus::New),
        source: Set(source),
        assigned_to_id: Set(None),
        notes: Set(String::new()),
    }
    .insert(db)
    .await?;
    Ok(row.id)
}
