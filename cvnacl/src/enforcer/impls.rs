use cvncore::ac::{
    actor::Actor,
    grant::UserGrant,
    policy::{
        PermissionKey,
        ResourcePolicy,
    },
    qualifier::Qualifiers,
    traits::{
        AttributeResolver,
        Enforcer,
    },
    Level,
};
use std::{
    collections::HashMap,
    sync::Arc,
};
use super::*;

impl From<ResourcePolicy> for PolicyEnforcer {
    fn from(policy: ResourcePolicy) -> Self {
        Self {
            user_grants: UserGrantMap::from_iter(
                policy.access
                    .iter()
                    .flat_map(|access| access.users.iter().cloned())
            ),
            policy,
            resolver: None,
        }
    }
}

impl From<PolicyEnforcer> for ResourcePolicy {
    fn from(enforcer: PolicyEnforcer) -> Self {
        enforcer.policy
    }
}

impl FromIterator<UserGrant> for UserGrantMap {
    fn from_iter<I: IntoIterator<Item=UserGrant>>(iter: I) -> Self {
        Self(iter.into_iter()
            .fold(HashMap::new(), |mut m, UserGrant { user_id, access }| {
                let granted = m.entry(user_id).or_insert(access);
                *granted = access.max(*granted);
                m
            })
        )
    }
}

impl PolicyEnforcer {
    pub fn attribute_resolver(
        mut self,
        resolver: Arc<dyn AttributeResolver + Send + Sync>,
    ) -> Self {
        self.resolver = Some(resolver);
        self
    }

    fn attributes_permit(&self, actor: &Actor) -> bool {
        match (&self.policy.permission, &self.resolver, &self.policy.owner) {
            (Some(key), Some(resolver), Some(owner)) => resolver
                .qualifiers(key)
                .permits(owner, actor),
            _ => false,
        }
    }
}

impl Enforcer for PolicyEnforcer {
    fn enforce(&self, actor: &Actor, res: &str, level: Level) -> bool {
        if actor.superuser {
            return true;
        }
        if self.policy.resource != res {
            log::debug!(
                "policy for {:?} asked to decide on {res:?}",
                self.policy.resource,
            );
            return false;
        }
        if self.policy.owner
            .as_ref()
            .map(|owner| owner.is(actor))
            .unwrap_or(false)
        {
            return true;
        }
        if self.user_grants.0
            .get(&actor.user_id)
            .map(|granted| level <= *granted)
            .unwrap_or(false)
        {
            return true;
        }
        if self.policy.access
            .as_ref()
            .map(|access| access.jobs
                .iter()
                .any(|grant| grant.satisfies(actor, level))
            )
            .unwrap_or(false)
        {
            return true;
        }
        self.attributes_permit(actor)
    }
}

impl FromIterator<(PermissionKey, Qualifiers)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item=(PermissionKey, Qualifiers)>>(iter: I) -> Self {
        Self(iter.into_iter()
            .fold(HashMap::new(), |mut m, (key, qualifiers)| {
                m.entry(key).or_default().0 |= qualifiers.0;
                m
            })
        )
    }
}

impl AttributeResolver for AttributeMap {
    fn qualifiers(&self, key: &PermissionKey) -> Qualifiers {
        self.0
            .get(key)
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod test {
    use cvncore::ac::{
        actor::Actor,
        qualifier::Qualifier,
        traits::Enforcer,
        Level,
    };
    use super::*;

    #[test]
    fn policy_enforcer() -> anyhow::Result<()> {
        let actor = Actor {
            user_id: 5,
            job: "ambulance".to_string(),
            job_grade: 2,
            superuser: false,
        };
        let policy: ResourcePolicy = serde_json::from_str(r#"{
            "resource": "/documents/1",
            "owner": {
                "user_id": 9,
                "job": "ambulance",
                "job_grade": 4
            },
            "access": {
                "users": [
                    {"user_id": 5, "access": 2}
                ],
                "jobs": []
            },
            "permission": null
        }"#)?;
        let enforcer = PolicyEnforcer::from(policy);
        assert!(enforcer.enforce(&actor, "/documents/1", Level::View));
        assert!(enforcer.enforce(&actor, "/documents/1", Level::Comment));
        assert!(!enforcer.enforce(&actor, "/documents/1", Level::Access));
        // mismatched resource
        assert!(!enforcer.enforce(&actor, "/documents/2", Level::View));
        Ok(())
    }

    #[test]
    fn user_grant_map_keeps_widest() {
        let map = UserGrantMap::from_iter([
            (5, Level::View).into(),
            (5, Level::Edit).into(),
            (5, Level::Comment).into(),
        ]);
        assert_eq!(map.0.get(&5), Some(&Level::Edit));
        assert_eq!(map.0.get(&6), None);
    }

    #[test]
    fn attribute_map_merges_grants() {
        let map = AttributeMap::from_iter([
            (PermissionKey::new("documents.update"), Qualifier::Own.into()),
            (PermissionKey::new("documents.update"), Qualifier::SameRank.into()),
        ]);
        assert_eq!(
            map.qualifiers(&PermissionKey::new("documents.update")),
            [Qualifier::Own, Qualifier::SameRank].into_iter().collect(),
        );
        assert_eq!(
            map.qualifiers(&PermissionKey::new("documents.delete")),
            Qualifiers::default(),
        );
    }
}
