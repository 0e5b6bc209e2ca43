use crate::ac::actor::Actor;
use super::Owner;

impl Owner {
    /// Whether the actor is the creator of the resource.
    pub fn is(&self, actor: &Actor) -> bool {
        self.user_id == actor.user_id
    }
}

impl From<(i64, &str, i32)> for Owner {
    fn from((user_id, job, job_grade): (i64, &str, i32)) -> Self {
        Self {
            user_id,
            job: job.to_string(),
            job_grade,
        }
    }
}
