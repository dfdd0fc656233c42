pub mod error;

pub mod attendance;
pub mod branch;
pub mod center;
pub mod coursework;
pub mod enrollment;
pub mod notification;
pub mod payment;
pub mod schedule;
pub mod staff;
pub mod user;

#[cfg(test)]
pub mod test_utilities;
