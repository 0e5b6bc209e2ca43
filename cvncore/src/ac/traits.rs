use super::{
    actor::Actor,
    level::Level,
    policy::PermissionKey,
    qualifier::Qualifiers,
};

/// Source of the qualifiers granted to the active session, keyed by
/// permission name and field.
pub trait AttributeResolver {
    /// The qualifiers granted under the key; lookup misses resolve to
    /// the empty set.
    fn qualifiers(&self, key: &PermissionKey) -> Qualifiers;
}

/// Decides whether an actor passes at the requested level for a
/// resource.
///
/// Implementations hold read-only snapshots and evaluate without side
/// effects; a denial is a plain `false`, never an error.
pub trait Enforcer {
    fn enforce(&self, actor: &Actor, res: &str, level: Level) -> bool;
}
