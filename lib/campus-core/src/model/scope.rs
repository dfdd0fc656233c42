use shared_types::{CenterId, ProfileId, StudentId, TeacherId, UserId};

use super::user::{Role, User};

/// Resolved acting principal. `profile` is `None` when the bearer token maps
/// to a user account without a role attachment.
#[derive(Clone, Debug)]
pub struct Principal {
    pub user: User,
    pub profile: Option<PrincipalProfile>,
}

/// The slice of a profile the scoper needs. `teacher_id`/`student_id` are
/// resolved from the person tables keyed by the same user account.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrincipalProfile {
    pub id: ProfileId,
    pub role: Role,
    pub center_id: Option<CenterId>,
    pub teacher_id: Option<TeacherId>,
    pub student_id: Option<StudentId>,
    pub is_blocked: bool,
}

impl Principal {
    pub fn role(&self) -> Option<Role> {
        self.profile.as_ref().map(|profile| profile.role)
    }

    pub fn is_super_admin(&self) -> bool {
        matches!(self.role(), Some(Role::SuperAdmin))
    }

    /// Director, manager or admin of a center.
    pub fn is_center_staff(&self) -> bool {
        matches!(
            self.role(),
            Some(Role::Director | Role::Manager | Role::Admin)
        )
    }

    pub fn profile_id(&self) -> Option<ProfileId> {
        self.profile.as_ref().map(|profile| profile.id)
    }

    pub fn teacher_id(&self) -> Option<TeacherId> {
        self.profile.as_ref().and_then(|profile| profile.teacher_id)
    }

    pub fn student_id(&self) -> Option<StudentId> {
        self.profile.as_ref().and_then(|profile| profile.student_id)
    }
}

/// Resource families the scoper distinguishes. One variant per REST resource.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Resource {
    Center,
    Branch,
    Subject,
    Room,
    Group,
    Teacher,
    Student,
    Lesson,
    Attendance,
    Payment,
    Assignment,
    Submission,
    Exam,
    ExamResult,
    Contract,
    Lead,
    Notification,
    User,
}

/// Predicate narrowing a record set to what one principal may see. The data
/// layer translates each variant into a SQL condition by walking the
/// resource's foreign-key chain.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VisibilityScope {
    /// No restriction.
    Unrestricted,
    /// Rows whose foreign-key chain terminates at this center.
    Center(CenterId),
    /// Rows directly referencing this teacher (or their groups).
    TeacherOwned(TeacherId),
    /// Rows directly referencing this student (or their group).
    StudentOwned(StudentId),
    /// Rows addressed to this user account.
    UserOwned(UserId),
    /// Empty set. Also the fallback for unresolvable principals.
    Denied,
}

impl VisibilityScope {
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied)
    }
}

/// Single declarative visibility matrix for all resources.
///
/// A principal without a profile, with a blocked profile, or whose role
/// requires an attachment that is missing (tenant link, teacher or student
/// record) sees nothing.
pub fn scope_for(principal: &Principal, resource: Resource) -> VisibilityScope {
    let Some(profile) = &principal.profile else {
        return VisibilityScope::Denied;
    };
    if profile.is_blocked {
        return VisibilityScope::Denied;
    }

    match profile.role {
        Role::SuperAdmin => VisibilityScope::Unrestricted,
        Role::Director | Role::Manager | Role::Admin => match profile.center_id {
            Some(center_id) => match resource {
                Resource::Notification => VisibilityScope::UserOwned(principal.user.id),
                _ => VisibilityScope::Center(center_id),
            },
            None => VisibilityScope::Denied,
        },
        Role::Teacher => {
            let Some(teacher_id) = profile.teacher_id else {
                return VisibilityScope::Denied;
            };
            match resource {
                Resource::Group
                | Resource::Student
                | Resource::Lesson
                | Resource::Attendance
                | Resource::Assignment
                | Resource::Submission
                | Resource::Exam
                | Resource::ExamResult
                | Resource::Teacher => VisibilityScope::TeacherOwned(teacher_id),
                Resource::Notification => VisibilityScope::UserOwned(principal.user.id),
                Resource::User => VisibilityScope::UserOwned(principal.user.id),
                _ => VisibilityScope::Denied,
            }
        }
        Role::Student => {
            let Some(student_id) = profile.student_id else {
                return VisibilityScope::Denied;
            };
            match resource {
                Resource::Student
                | Resource::Group
                | Resource::Lesson
                | Resource::Attendance
                | Resource::Payment
                | Resource::Assignment
                | Resource::Submission
                | Resource::Exam
                | Resource::ExamResult
                | Resource::Contract => VisibilityScope::StudentOwned(student_id),
                Resource::Notification => VisibilityScope::UserOwned(principal.user.id),
                Resource::User => VisibilityScope::UserOwned(principal.user.id),
                _ => VisibilityScope::Denied,
            }
        }
    }
}

#[cfg(test)]
mod test {
    use time::OffsetDateTime;
    use uuid::Uuid;

    use super::*;

    fn user() -> User {
        let now = OffsetDateTime::now_utc();
        User {
            id: Uuid::new_v4().into(),
            created_date: now,
            last_modified: now,
            username: "acting".to_string(),
            first_name: "Acting".to_string(),
            last_name: "User".to_string(),
            email: "acting@example.com".to_string(),
            api_token: "token".to_string(),
        }
    }

    fn profile(role: Role) -> PrincipalProfile {
        PrincipalProfile {
            id: Uuid::new_v4().into(),
            role,
            center_id: None,
            teacher_id: None,
            student_id: None,
            is_blocked: false,
        }
    }

    #[test]
    fn missing_profile_sees_nothing() {
        let principal = Principal {
            user: user(),
            profile: None,
        };
        for resource in [Resource::Center, Resource::Student, Resource::Attendance] {
            assert_eq!(
                scope_for(&principal, resource),
                VisibilityScope::Denied
            );
        }
    }

    #[test]
    fn blocked_profile_sees_nothing() {
        let principal = Principal {
            user: user(),
            profile: Some(PrincipalProfile {
                center_id: Some(Uuid::new_v4().into()),
                is_blocked: true,
                ..profile(Role::Director)
            }),
        };
        assert_eq!(
            scope_for(&principal, Resource::Branch),
            VisibilityScope::Denied
        );
    }

    #[test]
    fn super_admin_is_unrestricted_everywhere() {
        let principal = Principal {
            user: user(),
            profile: Some(profile(Role::SuperAdmin)),
        };
        assert_eq!(
            scope_for(&principal, Resource::Center),
            VisibilityScope::Unrestricted
        );
        assert_eq!(
            scope_for(&principal, Resource::Notification),
            VisibilityScope::Unrestricted
        );
    }

    #[test]
    fn center_staff_is_tenant_scoped() {
        let center_id: CenterId = Uuid::new_v4().into();
        for role in [Role::Director, Role::Manager, Role::Admin] {
            let principal = Principal {
                user: user(),
                profile: Some(PrincipalProfile {
                    center_id: Some(center_id),
                    ..profile(role)
                }),
            };
            assert_eq!(
                scope_for(&principal, Resource::Student),
                VisibilityScope::Center(center_id)
            );
        }
    }

    #[test]
    fn center_staff_without_tenant_link_sees_nothing() {
        let principal = Principal {
            user: user(),
            profile: Some(profile(Role::Manager)),
        };
        assert_eq!(
            scope_for(&principal, Resource::Student),
            VisibilityScope::Denied
        );
    }

    #[test]
    fn teacher_owns_teaching_resources_only() {
        let teacher_id: TeacherId = Uuid::new_v4().into();
        let principal = Principal {
            user: user(),
            profile: Some(PrincipalProfile {
                teacher_id: Some(teacher_id),
                ..profile(Role::Teacher)
            }),
        };
        assert_eq!(
            scope_for(&principal, Resource::Lesson),
            VisibilityScope::TeacherOwned(teacher_id)
        );
        assert_eq!(
            scope_for(&principal, Resource::Payment),
            VisibilityScope::Denied
        );
    }

    #[test]
    fn teacher_role_without_teacher_record_sees_nothing() {
        let principal = Principal {
            user: user(),
            profile: Some(profile(Role::Teacher)),
        };
        assert_eq!(
            scope_for(&principal, Resource::Lesson),
            VisibilityScope::Denied
        );
    }

    #[test]
    fn student_owns_own_records_and_notifications() {
        let student_id: StudentId = Uuid::new_v4().into();
        let acting = user();
        let user_id = acting.id;
        let principal = Principal {
            user: acting,
            profile: Some(PrincipalProfile {
                student_id: Some(student_id),
                ..profile(Role::Student)
            }),
        };
        assert_eq!(
            scope_for(&principal, Resource::Attendance),
            VisibilityScope::StudentOwned(student_id)
        );
        assert_eq!(
            scope_for(&principal, Resource::Notification),
            VisibilityScope::UserOwned(user_id)
        );
        assert_eq!(
            scope_for(&principal, Resource::Lead),
            VisibilityScope::Denied
        );
    }
}
