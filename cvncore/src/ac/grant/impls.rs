use crate::ac::{
    actor::Actor,
    level::Level,
};
use super::{JobGrant, UserGrant};

impl JobGrant {
    /// Whether this grant covers the actor at the requested level.
    pub fn satisfies(&self, actor: &Actor, level: Level) -> bool {
        self.job == actor.job
            && self.minimum_grade <= actor.job_grade
            && level <= self.access
    }
}

impl From<(i64, Level)> for UserGrant {
    fn from((user_id, access): (i64, Level)) -> Self {
        Self { user_id, access }
    }
}

impl From<(&str, i32, Level)> for JobGrant {
    fn from((job, minimum_grade, access): (&str, i32, Level)) -> Self {
        Self {
            job: job.to_string(),
            minimum_grade,
            access,
        }
    }
}
