pub mod assignment;
pub mod attendance;
pub mod branch;
pub mod center;
pub mod common;
pub mod contract;
pub mod exam;
pub mod group;
pub mod lead;
pub mod lesson;
pub mod notification;
pub mod payment;
pub mod scope;
pub mod student;
pub mod teacher;
pub mod user;
