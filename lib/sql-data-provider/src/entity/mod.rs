pub mod assignment;
pub mod assignment_submission;
pub mod attendance;
pub mod branch;
pub mod center;
pub mod contract;
pub mod exam;
pub mod exam_result;
pub mod group;
pub mod lead;
pub mod lesson;
pub mod notification;
pub mod payment;
pub mod room;
pub mod student;
pub mod subject;
pub mod teacher;
pub mod user;
pub mod user_profile;
