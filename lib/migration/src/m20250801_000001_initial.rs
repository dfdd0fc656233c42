use sea_orm_migration::prelude::*;

use crate::datatype::{timestamp, timestamp_null, uuid_char, uuid_char_null};

const UNIQUE_USER_USERNAME_INDEX: &str = "index-User-Username-Unique";
const UNIQUE_USER_API_TOKEN_INDEX: &str = "index-User-ApiToken-Unique";
const UNIQUE_PROFILE_USER_INDEX: &str = "index-UserProfile-UserId-Unique";
const UNIQUE_CENTER_LICENSE_INDEX: &str = "index-Center-LicenseNumber-Unique";
const UNIQUE_BRANCH_NAME_IN_CENTER_INDEX: &str = "index-Branch-Name-CenterId-Unique";
const UNIQUE_SUBJECT_NAME_IN_CENTER_INDEX: &str = "index-Subject-Name-CenterId-Unique";
const UNIQUE_ROOM_NAME_IN_BRANCH_INDEX: &str = "index-Room-Name-BranchId-Unique";
const UNIQUE_TEACHER_USER_INDEX: &str = "index-Teacher-UserId-Unique";
const UNIQUE_ATTENDANCE_LESSON_STUDENT_INDEX: &str = "index-Attendance-LessonId-StudentId-Unique";
const UNIQUE_PAYMENT_RECEIPT_INDEX: &str = "index-Payment-ReceiptNumber-Unique";
const UNIQUE_SUBMISSION_ASSIGNMENT_STUDENT_INDEX: &str =
    "index-AssignmentSubmission-AssignmentId-StudentId-Unique";
const UNIQUE_EXAM_RESULT_EXAM_STUDENT_INDEX: &str = "index-ExamResult-ExamId-StudentId-Unique";
const UNIQUE_CONTRACT_NUMBER_INDEX: &str = "index-Contract-ContractNumber-Unique";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .col(uuid_char(User::Id).primary_key().take())
                    .col(timestamp(User::CreatedDate, manager))
                    .col(timestamp(User::LastModified, manager))
                    .col(ColumnDef::new(User::Username).string().not_null())
                    .col(ColumnDef::new(User::FirstName).string().not_null())
                    .col(ColumnDef::new(User::LastName).string().not_null())
                    .col(ColumnDef::new(User::Email).string().not_null())
                    .col(ColumnDef::new(User::ApiToken).string().not_null())
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_USER_USERNAME_INDEX)
                    .table(User::Table)
                    .col(User::Username)
                    .unique()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_USER_API_TOKEN_INDEX)
                    .table(User::Table)
                    .col(User::ApiToken)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Center::Table)
                    .col(uuid_char(Center::Id).primary_key().take())
                    .col(timestamp(Center::CreatedDate, manager))
                    .col(timestamp(Center::LastModified, manager))
                    .col(ColumnDef::new(Center::Name).string().not_null())
                    .col(ColumnDef::new(Center::Address).string().not_null())
                    .col(ColumnDef::new(Center::Phone).string().not_null())
                    .col(ColumnDef::new(Center::Email).string().not_null())
                    .col(ColumnDef::new(Center::Description).text().not_null())
                    .col(ColumnDef::new(Center::LicenseNumber).string().not_null())
                    .col(ColumnDef::new(Center::OpenedAt).date().not_null())
                    .col(ColumnDef::new(Center::Status).string().not_null())
                    .col(ColumnDef::new(Center::Website).string().not_null())
                    .col(ColumnDef::new(Center::LogoPath).string().null())
                    .col(uuid_char_null(Center::DirectorId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Center-DirectorId")
                            .from_tbl(Center::Table)
                            .from_col(Center::DirectorId)
                            .to_tbl(User::Table)
                            .to_col(User::Id),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_CENTER_LICENSE_INDEX)
                    .table(Center::Table)
                    .col(Center::LicenseNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserProfile::Table)
                    .col(uuid_char(UserProfile::Id).primary_key().take())
                    .col(timestamp(UserProfile::CreatedDate, manager))
                    .col(timestamp(UserProfile::LastModified, manager))
                    .col(uuid_char(UserProfile::UserId))
                    .col(ColumnDef::new(UserProfile::Role).string().not_null())
                    .col(uuid_char_null(UserProfile::CenterId))
                    .col(ColumnDef::new(UserProfile::Phone).string().not_null())
                    .col(ColumnDef::new(UserProfile::PassportNumber).string().null())
                    .col(ColumnDef::new(UserProfile::Birthday).date().null())
                    .col(ColumnDef::new(UserProfile::IsBlocked).boolean().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-UserProfile-UserId")
                            .from_tbl(UserProfile::Table)
                            .from_col(UserProfile::UserId)
                            .to_tbl(User::Table)
                            .to_col(User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-UserProfile-CenterId")
                            .from_tbl(UserProfile::Table)
                            .from_col(UserProfile::CenterId)
                            .to_tbl(Center::Table)
                            .to_col(Center::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_PROFILE_USER_INDEX)
                    .table(UserProfile::Table)
                    .col(UserProfile::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Branch::Table)
                    .col(uuid_char(Branch::Id).primary_key().take())
                    .col(timestamp(Branch::CreatedDate, manager))
                    .col(timestamp(Branch::LastModified, manager))
                    .col(uuid_char(Branch::CenterId))
                    .col(ColumnDef::new(Branch::Name).string().not_null())
                    .col(ColumnDef::new(Branch::Address).string().not_null())
                    .col(ColumnDef::new(Branch::Phone).string().not_null())
                    .col(uuid_char_null(Branch::ManagerId))
                    .col(ColumnDef::new(Branch::Status).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Branch-CenterId")
                            .from_tbl(Branch::Table)
                            .from_col(Branch::CenterId)
                            .to_tbl(Center::Table)
                            .to_col(Center::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Branch-ManagerId")
                            .from_tbl(Branch::Table)
                            .from_col(Branch::ManagerId)
                            .to_tbl(UserProfile::Table)
                            .to_col(UserProfile::Id),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_BRANCH_NAME_IN_CENTER_INDEX)
                    .table(Branch::Table)
                    .col(Branch::CenterId)
                    .col(Branch::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Subject::Table)
                    .col(uuid_char(Subject::Id).primary_key().take())
                    .col(timestamp(Subject::CreatedDate, manager))
                    .col(uuid_char(Subject::CenterId))
                    .col(ColumnDef::new(Subject::Name).string().not_null())
                    .col(ColumnDef::new(Subject::Description).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Subject-CenterId")
                            .from_tbl(Subject::Table)
                            .from_col(Subject::CenterId)
                            .to_tbl(Center::Table)
                            .to_col(Center::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_SUBJECT_NAME_IN_CENTER_INDEX)
                    .table(Subject::Table)
                    .col(Subject::CenterId)
                    .col(Subject::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .col(uuid_char(Room::Id).primary_key().take())
                    .col(uuid_char(Room::BranchId))
                    .col(ColumnDef::new(Room::Name).string().not_null())
                    .col(ColumnDef::new(Room::Capacity).integer().not_null())
                    .col(ColumnDef::new(Room::Equipment).string().not_null())
                    .col(ColumnDef::new(Room::IsAvailable).boolean().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Room-BranchId")
                            .from_tbl(Room::Table)
                            .from_col(Room::BranchId)
                            .to_tbl(Branch::Table)
                            .to_col(Branch::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_ROOM_NAME_IN_BRANCH_INDEX)
                    .table(Room::Table)
                    .col(Room::BranchId)
                    .col(Room::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Teacher::Table)
                    .col(uuid_char(Teacher::Id).primary_key().take())
                    .col(timestamp(Teacher::CreatedDate, manager))
                    .col(timestamp(Teacher::LastModified, manager))
                    .col(uuid_char(Teacher::UserId))
                    .col(uuid_char(Teacher::BranchId))
                    .col(ColumnDef::new(Teacher::Status).string().not_null())
                    .col(ColumnDef::new(Teacher::Phone).string().not_null())
                    .col(ColumnDef::new(Teacher::DateOfBirth).date().null())
                    .col(ColumnDef::new(Teacher::Specialization).string().not_null())
                    .col(ColumnDef::new(Teacher::Qualification).text().not_null())
                    .col(
                        ColumnDef::new(Teacher::PerformanceRating)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Teacher::HireDate).date().not_null())
                    .col(ColumnDef::new(Teacher::HourlyRate).big_integer().not_null())
                    .col(ColumnDef::new(Teacher::Address).string().not_null())
                    .col(ColumnDef::new(Teacher::PassportNumber).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Teacher-UserId")
                            .from_tbl(Teacher::Table)
                            .from_col(Teacher::UserId)
                            .to_tbl(User::Table)
                            .to_col(User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Teacher-BranchId")
                            .from_tbl(Teacher::Table)
                            .from_col(Teacher::BranchId)
                            .to_tbl(Branch::Table)
                            .to_col(Branch::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_TEACHER_USER_INDEX)
                    .table(Teacher::Table)
                    .col(Teacher::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Group::Table)
                    .col(uuid_char(Group::Id).primary_key().take())
                    .col(timestamp(Group::CreatedDate, manager))
                    .col(timestamp(Group::LastModified, manager))
                    .col(uuid_char(Group::CenterId))
                    .col(uuid_char(Group::BranchId))
                    .col(uuid_char(Group::SubjectId))
                    .col(uuid_char_null(Group::TeacherId))
                    .col(uuid_char_null(Group::RoomId))
                    .col(ColumnDef::new(Group::Name).string().not_null())
                    .col(ColumnDef::new(Group::Capacity).integer().not_null())
                    .col(ColumnDef::new(Group::Status).string().not_null())
                    .col(ColumnDef::new(Group::StartDate).date().not_null())
                    .col(ColumnDef::new(Group::EndDate).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Group-CenterId")
                            .from_tbl(Group::Table)
                            .from_col(Group::CenterId)
                            .to_tbl(Center::Table)
                            .to_col(Center::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Group-BranchId")
                            .from_tbl(Group::Table)
                            .from_col(Group::BranchId)
                            .to_tbl(Branch::Table)
                            .to_col(Branch::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Group-SubjectId")
                            .from_tbl(Group::Table)
                            .from_col(Group::SubjectId)
                            .to_tbl(Subject::Table)
                            .to_col(Subject::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Group-TeacherId")
                            .from_tbl(Group::Table)
                            .from_col(Group::TeacherId)
                            .to_tbl(Teacher::Table)
                            .to_col(Teacher::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Group-RoomId")
                            .from_tbl(Group::Table)
                            .from_col(Group::RoomId)
                            .to_tbl(Room::Table)
                            .to_col(Room::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .col(uuid_char(Student::Id).primary_key().take())
                    .col(timestamp(Student::CreatedDate, manager))
                    .col(timestamp(Student::LastModified, manager))
                    .col(uuid_char_null(Student::UserId))
                    .col(uuid_char(Student::BranchId))
                    .col(uuid_char_null(Student::GroupId))
                    .col(ColumnDef::new(Student::FirstName).string().not_null())
                    .col(ColumnDef::new(Student::LastName).string().not_null())
                    .col(ColumnDef::new(Student::Phone).string().not_null())
                    .col(ColumnDef::new(Student::DateOfBirth).date().null())
                    .col(ColumnDef::new(Student::EnrollmentDate).date().not_null())
                    .col(ColumnDef::new(Student::Address).string().not_null())
                    .col(ColumnDef::new(Student::ParentName).string().not_null())
                    .col(ColumnDef::new(Student::ParentPhone).string().not_null())
                    .col(ColumnDef::new(Student::ParentEmail).string().not_null())
                    .col(ColumnDef::new(Student::PassportNumber).string().null())
                    .col(ColumnDef::new(Student::Status).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Student-UserId")
                            .from_tbl(Student::Table)
                            .from_col(Student::UserId)
                            .to_tbl(User::Table)
                            .to_col(User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Student-BranchId")
                            .from_tbl(Student::Table)
                            .from_col(Student::BranchId)
                            .to_tbl(Branch::Table)
                            .to_col(Branch::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Student-GroupId")
                            .from_tbl(Student::Table)
                            .from_col(Student::GroupId)
                            .to_tbl(Group::Table)
                            .to_col(Group::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Lesson::Table)
                    .col(uuid_char(Lesson::Id).primary_key().take())
                    .col(timestamp(Lesson::CreatedDate, manager))
                    .col(timestamp(Lesson::LastModified, manager))
                    .col(uuid_char(Lesson::GroupId))
                    .col(uuid_char_null(Lesson::TeacherId))
                    .col(uuid_char_null(Lesson::RoomId))
                    .col(ColumnDef::new(Lesson::Date).date().not_null())
                    .col(ColumnDef::new(Lesson::StartTime).time().not_null())
                    .col(ColumnDef::new(Lesson::EndTime).time().not_null())
                    .col(ColumnDef::new(Lesson::Duration).integer().not_null())
                    .col(ColumnDef::new(Lesson::OnlineLink).string().not_null())
                    .col(ColumnDef::new(Lesson::IsCancelled).boolean().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Lesson-GroupId")
                            .from_tbl(Lesson::Table)
                            .from_col(Lesson::GroupId)
                            .to_tbl(Group::Table)
                            .to_col(Group::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Lesson-TeacherId")
                            .from_tbl(Lesson::Table)
                            .from_col(Lesson::TeacherId)
                            .to_tbl(Teacher::Table)
                            .to_col(Teacher::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Lesson-RoomId")
                            .from_tbl(Lesson::Table)
                            .from_col(Lesson::RoomId)
                            .to_tbl(Room::Table)
                            .to_col(Room::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .col(uuid_char(Attendance::Id).primary_key().take())
                    .col(uuid_char(Attendance::LessonId))
                    .col(uuid_char(Attendance::StudentId))
                    .col(ColumnDef::new(Attendance::Status).string().not_null())
                    .col(uuid_char_null(Attendance::MarkedById))
                    .col(ColumnDef::new(Attendance::Notes).text().not_null())
                    .col(timestamp(Attendance::MarkedAt, manager))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Attendance-LessonId")
                            .from_tbl(Attendance::Table)
                            .from_col(Attendance::LessonId)
                            .to_tbl(Lesson::Table)
                            .to_col(Lesson::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Attendance-StudentId")
                            .from_tbl(Attendance::Table)
                            .from_col(Attendance::StudentId)
                            .to_tbl(Student::Table)
                            .to_col(Student::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Attendance-MarkedById")
                            .from_tbl(Attendance::Table)
                            .from_col(Attendance::MarkedById)
                            .to_tbl(Teacher::Table)
                            .to_col(Teacher::Id),
                    )
                    .to_owned(),
            )
            .await?;
        // the upsert in attendance marking leans on this constraint
        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_ATTENDANCE_LESSON_STUDENT_INDEX)
                    .table(Attendance::Table)
                    .col(Attendance::LessonId)
                    .col(Attendance::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Payment::Table)
                    .col(uuid_char(Payment::Id).primary_key().take())
                    .col(timestamp(Payment::CreatedDate, manager))
                    .col(uuid_char(Payment::StudentId))
                    .col(uuid_char(Payment::GroupId))
                    .col(ColumnDef::new(Payment::Amount).big_integer().not_null())
                    .col(ColumnDef::new(Payment::PaymentType).string().not_null())
                    .col(ColumnDef::new(Payment::PaymentDate).date().not_null())
                    .col(ColumnDef::new(Payment::DueDate).date().not_null())
                    .col(ColumnDef::new(Payment::ReceiptNumber).string().not_null())
                    .col(ColumnDef::new(Payment::DocumentPath).string().null())
                    .col(uuid_char_null(Payment::PaidById))
                    .col(ColumnDef::new(Payment::Notes).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Payment-StudentId")
                            .from_tbl(Payment::Table)
                            .from_col(Payment::StudentId)
                            .to_tbl(Student::Table)
                            .to_col(Student::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Payment-GroupId")
                            .from_tbl(Payment::Table)
                            .from_col(Payment::GroupId)
                            .to_tbl(Group::Table)
                            .to_col(Group::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Payment-PaidById")
                            .from_tbl(Payment::Table)
                            .from_col(Payment::PaidById)
                            .to_tbl(UserProfile::Table)
                            .to_col(UserProfile::Id),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_PAYMENT_RECEIPT_INDEX)
                    .table(Payment::Table)
                    .col(Payment::ReceiptNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Assignment::Table)
                    .col(uuid_char(Assignment::Id).primary_key().take())
                    .col(timestamp(Assignment::CreatedDate, manager))
                    .col(timestamp(Assignment::LastModified, manager))
                    .col(uuid_char(Assignment::GroupId))
                    .col(uuid_char(Assignment::TeacherId))
                    .col(ColumnDef::new(Assignment::Title).string().not_null())
                    .col(ColumnDef::new(Assignment::Description).text().not_null())
                    .col(ColumnDef::new(Assignment::FilePath).string().null())
                    .col(ColumnDef::new(Assignment::DueDate).date().not_null())
                    .col(ColumnDef::new(Assignment::Status).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Assignment-GroupId")
                            .from_tbl(Assignment::Table)
                            .from_col(Assignment::GroupId)
                            .to_tbl(Group::Table)
                            .to_col(Group::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Assignment-TeacherId")
                            .from_tbl(Assignment::Table)
                            .from_col(Assignment::TeacherId)
                            .to_tbl(Teacher::Table)
                            .to_col(Teacher::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AssignmentSubmission::Table)
                    .col(uuid_char(AssignmentSubmission::Id).primary_key().take())
                    .col(uuid_char(AssignmentSubmission::AssignmentId))
                    .col(uuid_char(AssignmentSubmission::StudentId))
                    .col(
                        ColumnDef::new(AssignmentSubmission::SubmissionFilePath)
                            .string()
                            .not_null(),
                    )
                    .col(timestamp(AssignmentSubmission::SubmittedAt, manager))
                    .col(ColumnDef::new(AssignmentSubmission::Grade).string().null())
                    .col(
                        ColumnDef::new(AssignmentSubmission::Feedback)
                            .text()
                            .not_null(),
                    )
                    .col(timestamp_null(AssignmentSubmission::GradedAt, manager))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-AssignmentSubmission-AssignmentId")
                            .from_tbl(AssignmentSubmission::Table)
                            .from_col(AssignmentSubmission::AssignmentId)
                            .to_tbl(Assignment::Table)
                            .to_col(Assignment::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-AssignmentSubmission-StudentId")
                            .from_tbl(AssignmentSubmission::Table)
                            .from_col(AssignmentSubmission::StudentId)
                            .to_tbl(Student::Table)
                            .to_col(Student::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_SUBMISSION_ASSIGNMENT_STUDENT_INDEX)
                    .table(AssignmentSubmission::Table)
                    .col(AssignmentSubmission::AssignmentId)
                    .col(AssignmentSubmission::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Exam::Table)
                    .col(uuid_char(Exam::Id).primary_key().take())
                    .col(timestamp(Exam::CreatedDate, manager))
                    .col(uuid_char(Exam::GroupId))
                    .col(uuid_char(Exam::TeacherId))
                    .col(ColumnDef::new(Exam::Title).string().not_null())
                    .col(ColumnDef::new(Exam::Description).text().not_null())
                    .col(ColumnDef::new(Exam::ExamDate).date().not_null())
                    .col(ColumnDef::new(Exam::StartTime).time().not_null())
                    .col(ColumnDef::new(Exam::EndTime).time().not_null())
                    .col(ColumnDef::new(Exam::TotalPoints).integer().not_null())
                    .col(ColumnDef::new(Exam::PassingScore).integer().not_null())
                    .col(
                        ColumnDef::new(Exam::ResultsPublished)
                            .boolean()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Exam-GroupId")
                            .from_tbl(Exam::Table)
                            .from_col(Exam::GroupId)
                            .to_tbl(Group::Table)
                            .to_col(Group::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Exam-TeacherId")
                            .from_tbl(Exam::Table)
                            .from_col(Exam::TeacherId)
                            .to_tbl(Teacher::Table)
                            .to_col(Teacher::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ExamResult::Table)
                    .col(uuid_char(ExamResult::Id).primary_key().take())
                    .col(uuid_char(ExamResult::ExamId))
                    .col(uuid_char(ExamResult::StudentId))
                    .col(ColumnDef::new(ExamResult::Score).integer().not_null())
                    .col(ColumnDef::new(ExamResult::Grade).string().not_null())
                    .col(ColumnDef::new(ExamResult::AnswerFilePath).string().null())
                    .col(timestamp(ExamResult::SubmittedAt, manager))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-ExamResult-ExamId")
                            .from_tbl(ExamResult::Table)
                            .from_col(ExamResult::ExamId)
                            .to_tbl(Exam::Table)
                            .to_col(Exam::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-ExamResult-StudentId")
                            .from_tbl(ExamResult::Table)
                            .from_col(ExamResult::StudentId)
                            .to_tbl(Student::Table)
                            .to_col(Student::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_EXAM_RESULT_EXAM_STUDENT_INDEX)
                    .table(ExamResult::Table)
                    .col(ExamResult::ExamId)
                    .col(ExamResult::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Contract::Table)
                    .col(uuid_char(Contract::Id).primary_key().take())
                    .col(timestamp(Contract::CreatedDate, manager))
                    .col(uuid_char(Contract::StudentId))
                    .col(uuid_char(Contract::GroupId))
                    .col(ColumnDef::new(Contract::ContractNumber).string().not_null())
                    .col(
                        ColumnDef::new(Contract::ContractFilePath)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Contract::SignedDate).date().not_null())
                    .col(ColumnDef::new(Contract::IsVerified).boolean().not_null())
                    .col(uuid_char_null(Contract::VerifiedById))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Contract-StudentId")
                            .from_tbl(Contract::Table)
                            .from_col(Contract::StudentId)
                            .to_tbl(Student::Table)
                            .to_col(Student::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Contract-GroupId")
                            .from_tbl(Contract::Table)
                            .from_col(Contract::GroupId)
                            .to_tbl(Group::Table)
                            .to_col(Group::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Contract-VerifiedById")
                            .from_tbl(Contract::Table)
                            .from_col(Contract::VerifiedById)
                            .to_tbl(UserProfile::Table)
                            .to_col(UserProfile::Id),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_CONTRACT_NUMBER_INDEX)
                    .table(Contract::Table)
                    .col(Contract::ContractNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Lead::Table)
                    .col(uuid_char(Lead::Id).primary_key().take())
                    .col(timestamp(Lead::CreatedDate, manager))
                    .col(timestamp(Lead::LastModified, manager))
                    .col(uuid_char(Lead::BranchId))
                    .col(ColumnDef::new(Lead::Name).string().not_null())
                    .col(ColumnDef::new(Lead::Email).string().not_null())
                    .col(ColumnDef::new(Lead::Phone).string().not_null())
                    .col(uuid_char_null(Lead::CourseInterestedId))
                    .col(ColumnDef::new(Lead::Status).string().not_null())
                    .col(ColumnDef::new(Lead::Source).string().not_null())
                    .col(uuid_char_null(Lead::AssignedToId))
                    .col(ColumnDef::new(Lead::Notes).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Lead-BranchId")
                            .from_tbl(Lead::Table)
                            .from_col(Lead::BranchId)
                            .to_tbl(Branch::Table)
                            .to_col(Branch::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Lead-CourseInterestedId")
                            .from_tbl(Lead::Table)
                            .from_col(Lead::CourseInterestedId)
                            .to_tbl(Subject::Table)
                            .to_col(Subject::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Lead-AssignedToId")
                            .from_tbl(Lead::Table)
                            .from_col(Lead::AssignedToId)
                            .to_tbl(UserProfile::Table)
                            .to_col(UserProfile::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Notification::Table)
                    .col(uuid_char(Notification::Id).primary_key().take())
                    .col(timestamp(Notification::CreatedDate, manager))
                    .col(uuid_char(Notification::UserId))
                    .col(
                        ColumnDef::new(Notification::NotificationType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Notification::Title).string().not_null())
                    .col(ColumnDef::new(Notification::Message).text().not_null())
                    .col(ColumnDef::new(Notification::IsRead).boolean().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Notification-UserId")
                            .from_tbl(Notification::Table)
                            .from_col(Notification::UserId)
                            .to_tbl(User::Table)
                            .to_col(User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
pub(crate) enum User {
    Table,
    Id,
    CreatedDate,
    LastModified,
    Username,
    FirstName,
    LastName,
    Email,
    ApiToken,
}

#[derive(Iden)]
pub(crate) enum UserProfile {
    Table,
    Id,
    CreatedDate,
    LastModified,
    UserId,
    Role,
    CenterId,
    Phone,
    PassportNumber,
    Birthday,
    IsBlocked,
}

#[derive(Iden)]
pub(crate) enum Center {
    Table,
    Id,
    CreatedDate,
    LastModified,
    Name,
    Address,
    Phone,
    Email,
    Description,
    LicenseNumber,
    OpenedAt,
    Status,
    Website,
    LogoPath,
    DirectorId,
}

#[derive(Iden)]
pub(crate) enum Branch {
    Table,
    Id,
    CreatedDate,
    LastModified,
    CenterId,
    Name,
    Address,
    Phone,
    ManagerId,
    Status,
}

#[derive(Iden)]
pub(crate) enum Subject {
    Table,
    Id,
    CreatedDate,
    CenterId,
    Name,
    Description,
}

#[derive(Iden)]
pub(crate) enum Room {
    Table,
    Id,
    BranchId,
    Name,
    Capacity,
    Equipment,
    IsAvailable,
}

#[derive(Iden)]
pub(crate) enum Group {
    Table,
    Id,
    CreatedDate,
    LastModified,
    CenterId,
    BranchId,
    SubjectId,
    TeacherId,
    RoomId,
    Name,
    Capacity,
    Status,
    StartDate,
    EndDate,
}

#[derive(Iden)]
pub(crate) enum Teacher {
    Table,
    Id,
    CreatedDate,
    LastModified,
    UserId,
    BranchId,
    Status,
    Phone,
    DateOfBirth,
    Specialization,
    Qualification,
    PerformanceRating,
    HireDate,
    HourlyRate,
    Address,
    PassportNumber,
}

#[derive(Iden)]
pub(crate) enum Student {
    Table,
    Id,
    CreatedDate,
    LastModified,
    UserId,
    BranchId,
    GroupId,
    FirstName,
    LastName,
    Phone,
    DateOfBirth,
    EnrollmentDate,
    Address,
    ParentName,
    ParentPhone,
    ParentEmail,
    PassportNumber,
    Status,
}

#[derive(Iden)]
pub(crate) enum Lesson {
    Table,
    Id,
    CreatedDate,
    LastModified,
    GroupId,
    TeacherId,
    RoomId,
    Date,
    StartTime,
    EndTime,
    Duration,
    OnlineLink,
    IsCancelled,
}

#[derive(Iden)]
pub(crate) enum Attendance {
    Table,
    Id,
    LessonId,
    StudentId,
    Status,
    MarkedById,
    Notes,
    MarkedAt,
}

#[derive(Iden)]
pub(crate) enum Payment {
    Table,
    Id,
    CreatedDate,
    StudentId,
    GroupId,
    Amount,
    PaymentType,
    PaymentDate,
    DueDate,
    ReceiptNumber,
    DocumentPath,
    PaidById,
    Notes,
}

#[derive(Iden)]
pub(crate) enum Assignment {
    Table,
    Id,
    CreatedDate,
    LastModified,
    GroupId,
    TeacherId,
    Title,
    Description,
    FilePath,
    DueDate,
    Status,
}

#[derive(Iden)]
pub(crate) enum AssignmentSubmission {
    Table,
    Id,
    AssignmentId,
    StudentId,
    SubmissionFilePath,
    SubmittedAt,
    Grade,
    Feedback,
    GradedAt,
}

#[derive(Iden)]
pub(crate) enum Exam {
    Table,
    Id,
    CreatedDate,
    GroupId,
    TeacherId,
    Title,
    Description,
    ExamDate,
    StartTime,
    EndTime,
    TotalPoints,
    PassingScore,
    ResultsPublished,
}

#[derive(Iden)]
pub(crate) enum ExamResult {
    Table,
    Id,
    ExamId,
    StudentId,
    Score,
    Grade,
    AnswerFilePath,
    SubmittedAt,
}

#[derive(Iden)]
pub(crate) enum Contract {
    Table,
    Id,
    CreatedDate,
    StudentId,
    GroupId,
    ContractNumber,
    ContractFilePath,
    SignedDate,
    IsVerified,
    VerifiedById,
}

#[derive(Iden)]
pub(crate) enum Lead {
    Table,
    Id,
    CreatedDate,
    LastModified,
    BranchId,
    Name,
    Email,
    Phone,
    CourseInterestedId,
    Status,
    Source,
    AssignedToId,
    Notes,
}

#[derive(Iden)]
pub(crate) enum Notification {
    Table,
    Id,
    CreatedDate,
    UserId,
    NotificationType,
    Title,
    Message,
    IsRead,
}
