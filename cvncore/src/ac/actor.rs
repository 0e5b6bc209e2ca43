use serde::{Deserialize, Serialize};

/// The active identity performing an operation.
///
/// Snapshot of the session's selected character; treated as immutable
/// for the duration of an access check.  A character switch or a
/// permission update push produces a fresh snapshot.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Actor {
    pub user_id: i64,
    pub job: String,
    pub job_grade: i32,
    pub superuser: bool,
}
