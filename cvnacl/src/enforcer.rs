use cvncore::ac::{
    policy::{
        PermissionKey,
        ResourcePolicy,
    },
    qualifier::Qualifiers,
    traits::AttributeResolver,
    Level,
};
use std::{
    collections::HashMap,
    sync::Arc,
};

pub struct UserGrantMap(HashMap<i64, Level>);

/// An enforcer bound to the policy generated for a single resource.
/// It assumes the policy is fully contained for the resource that
/// produced it, and decides directly from the included grants; the
/// attribute resolver, when configured, extends the decision to the
/// same-job qualifier rules.
pub struct PolicyEnforcer {
    policy: ResourcePolicy,
    user_grants: UserGrantMap,
    resolver: Option<Arc<dyn AttributeResolver + Send + Sync>>,
}

/// The qualifiers granted to the active session, as pushed alongside
/// its permission set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeMap(HashMap<PermissionKey, Qualifiers>);

mod impls;
