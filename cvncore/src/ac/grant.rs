use serde::{Deserialize, Serialize};
use super::level::Level;

/// A user grant - the stated user holds the stated level at the
/// resource this grant is attached to.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct UserGrant {
    pub user_id: i64,
    pub access: Level,
}

/// A job grant - any member of the stated job at or above the minimum
/// grade holds the stated level.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct JobGrant {
    pub job: String,
    pub minimum_grade: i32,
    pub access: Level,
}

/// The grants attached to a resource.
///
/// Entries are independent - any single sufficient match grants, and
/// ordering carries no meaning.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct AccessList {
    pub users: Vec<UserGrant>,
    pub jobs: Vec<JobGrant>,
}

mod impls;
