use serde::{Deserialize, Serialize};

/// Creator identity of a resource.
///
/// Resources without a fixed creator omit this entirely.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Owner {
    pub user_id: i64,
    pub job: String,
    pub job_grade: i32,
}

mod impls;
