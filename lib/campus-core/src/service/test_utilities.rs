use shared_types::{BranchId, CenterId, GroupId, LessonId, StudentId, TeacherId};
use time::macros::{date, time};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::model::branch::{Branch, BranchStatus};
use crate::model::center::{Center, CenterStatus};
use crate::model::group::{Group, GroupStatus};
use crate::model::lesson::Lesson;
use crate::model::scope::{Principal, PrincipalProfile};
use crate::model::student::Student;
use crate::model::teacher::PersonStatus;
use crate::model::user::{Role, User};

pub fn dummy_user() -> User {
    let now = OffsetDateTime::now_utc();
    User {
        id: Uuid::new_v4().into(),
        created_date: now,
        last_modified: now,
        username: "dummy".to_string(),
        first_name: "Dummy".to_string(),
        last_name: "User".to_string(),
        email: "dummy@example.com".to_string(),
        api_token: "dummy-token".to_string(),
    }
}

pub fn dummy_principal(role: Role, center_id: Option<CenterId>) -> Principal {
    Principal {
        user: dummy_user(),
        profile: Some(PrincipalProfile {
            id: Uuid::new_v4().into(),
            role,
            center_id,
            teacher_id: None,
            student_id: None,
            is_blocked: false,
        }),
    }
}

pub fn teacher_principal(teacher_id: TeacherId, center_id: CenterId) -> Principal {
    let mut principal = dummy_principal(Role::Teacher, Some(center_id));
    if let Some(profile) = principal.profile.as_mut() {
        profile.teacher_id = Some(teacher_id);
    }
    principal
}

pub fn dummy_center(id: CenterId) -> Center {
    let now = OffsetDateTime::now_utc();
    Center {
        id,
        created_date: now,
        last_modified: now,
        name: "Main center".to_string(),
        address: "Somewhere 1".to_string(),
        phone: "+100000000".to_string(),
        email: "center@example.com".to_string(),
        description: String::new(),
        license_number: "LIC-1".to_string(),
        opened_at: date!(2020 - 01 - 01),
        status: CenterStatus::Active,
        website: String::new(),
        logo_path: None,
        director_id: None,
    }
}

pub fn dummy_branch(id: BranchId, center_id: CenterId) -> Branch {
    let now = OffsetDateTime::now_utc();
    Branch {
        id,
        created_date: now,
        last_modified: now,
        center_id,
        name: "Main branch".to_string(),
        address: "Somewhere 2".to_string(),
        phone: "+100000001".to_string(),
        manager_id: None,
        status: BranchStatus::Open,
    }
}

pub fn dummy_group(id: GroupId, center_id: CenterId, branch_id: BranchId) -> Group {
    let now = OffsetDateTime::now_utc();
    Group {
        id,
        created_date: now,
        last_modified: now,
        center_id,
        branch_id,
        subject_id: Uuid::new_v4().into(),
        teacher_id: None,
        room_id: None,
        name: "Group A".to_string(),
        capacity: 30,
        status: GroupStatus::Active,
        start_date: date!(2024 - 09 - 01),
        end_date: date!(2025 - 05 - 31),
    }
}

pub fn dummy_student(id: StudentId, branch_id: BranchId) -> Student {
    let now = OffsetDateTime::now_utc();
    Student {
        id,
        created_date: now,
        last_modified: now,
        user_id: None,
        branch_id,
        group_id: None,
        first_name: "First".to_string(),
        last_name: "Last".to_string(),
        phone: String::new(),
        date_of_birth: None,
        enrollment_date: date!(2024 - 09 - 01),
        address: String::new(),
        parent_name: String::new(),
        parent_phone: String::new(),
        parent_email: String::new(),
        passport_number: None,
        status: PersonStatus::Active,
    }
}

pub fn dummy_lesson(id: LessonId, group_id: GroupId, teacher_id: Option<TeacherId>) -> Lesson {
    let now = OffsetDateTime::now_utc();
    Lesson {
        id,
        created_date: now,
        last_modified: now,
        group_id,
        teacher_id,
        room_id: None,
        date: date!(2024 - 10 - 01),
        start_time: time!(9:00),
        end_time: time!(10:30),
        duration: 90,
        online_link: String::new(),
        is_cancelled: false,
    }
}
