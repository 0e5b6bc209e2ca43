//! Generated Policy
//!
//! The structs provided by this module represent the access snapshot
//! generated for a single fetched resource, for consumption by some
//! security enforcer; they are not meant to be persisted in some
//! datastore.

use serde::{Deserialize, Serialize};
use super::grant::AccessList;
use super::owner::Owner;

/// Grants, creator identity and permission key associated with the
/// given resource, to be passed into the security enforcer as a
/// complete policy.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ResourcePolicy {
    pub resource: String,
    pub owner: Option<Owner>,
    pub access: Option<AccessList>,
    pub permission: Option<PermissionKey>,
}

/// Keys the attribute resolver - the name of the permission guarding
/// the operation, and the field the qualifiers were granted under.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct PermissionKey {
    pub name: String,
    pub field: String,
}

mod impls;
